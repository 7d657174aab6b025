// src/main.rs

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use spinthrust::{load_settings, run_batch, ReportTrigger, SimError, SimulationSettings};

#[derive(Parser)]
#[command(name = "spinthrust")]
#[command(version)]
#[command(about = "Rotating-thrust trajectory simulator with body-frame acceleration reconstruction")]
struct Cli {
    /// Files containing var=value for the initial variables (a, rot, x, y)
    #[arg(required = true, value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Directory the result tables are written to
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// YAML file with report_interval / end_time / click / trigger
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Integration time step (seconds); overrides the settings file
    #[arg(long)]
    click: Option<f64>,

    /// Report on exact multiples of the report interval instead of time since last report
    #[arg(long)]
    exact_phase: bool,
}

fn resolve_settings(cli: &Cli) -> Result<SimulationSettings, SimError> {
    let mut settings = match &cli.settings {
        Some(path) => load_settings(path)?,
        None => SimulationSettings::default(),
    };
    if let Some(click) = cli.click {
        settings.click = click;
    }
    if cli.exact_phase {
        settings.trigger = ReportTrigger::ExactPhase;
    }
    settings.validate()?;
    Ok(settings)
}

fn run(cli: &Cli) -> Result<(), SimError> {
    let settings = resolve_settings(cli)?;
    let stdout = io::stdout();
    let mut status = stdout.lock();
    let stderr = io::stderr();
    let mut diagnostics = stderr.lock();
    run_batch(&cli.files, &cli.output_dir, &settings, &mut status, &mut diagnostics)?;
    Ok(())
}

fn main() -> ExitCode {
    // 引数が無い場合は clap が使い方を表示して終了コード 2 で終わる
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
