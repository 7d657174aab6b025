// src/simulation/framework.rs

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::{load_parameters, Parameters, SimulationSettings};
use crate::math::{PositionWindow, SimError, REQUIRED_SAMPLES};
use crate::models::SpinningVehicle;
use crate::simulation::integrator::advance;
use crate::simulation::report::{
    write_header, write_progress_done, write_progress_tick, write_record, ReportClock,
    ReportRecord,
};
use crate::simulation::SimulationState;

/// シミュレーションの実行
///
/// # 引数
/// - `params`: 機体パラメータ
/// - `settings`: 実行設定（時間刻み・出力間隔・終了時刻）
/// - `out`: タブ区切りの結果を書き込む先
/// - `status`: 進捗表示を書き込む先
///
/// # 戻り値
/// - 出力した記録の一覧
pub fn run_simulation<W: Write, S: Write>(
    params: &Parameters,
    settings: &SimulationSettings,
    out: &mut W,
    status: &mut S,
) -> Result<Vec<ReportRecord>, SimError> {
    settings.validate()?;

    let vehicle = SpinningVehicle::new(params);
    let mut state = SimulationState::default();
    let mut window = PositionWindow::new();
    let mut clock = ReportClock::new(settings);
    let mut records = Vec::new();

    write_header(out)?;

    while state.t < settings.end_time {
        let sample = advance(&mut state, &vehicle, settings.click);
        window.push(sample.position);

        // 差分推定に必要なサンプルが揃うまでは出力しない
        if window.len() < REQUIRED_SAMPLES || !clock.should_fire(sample.t) {
            continue;
        }

        let record = ReportRecord::capture(&sample, &window, settings.click)?;
        write_progress_tick(status)?;
        write_record(out, &record)?;
        records.push(record);
    }

    write_progress_done(status)?;
    out.flush()?;
    Ok(records)
}

/// 入力ファイルに対応する出力ファイルのパス
pub fn output_path(output_dir: &Path, source: &Path) -> Result<PathBuf, SimError> {
    let name = source.file_name().ok_or_else(|| {
        SimError::io(
            source,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "ファイル名がありません"),
        )
    })?;
    Ok(output_dir.join(name))
}

/// 1 つの入力ファイルを処理する
///
/// パラメータの読み込みに失敗した場合、出力ファイルは作られない。
/// 角速度などの診断情報は `diagnostics` へ書き込む。
pub fn process_file<S: Write, D: Write>(
    source: &Path,
    output_dir: &Path,
    settings: &SimulationSettings,
    status: &mut S,
    diagnostics: &mut D,
) -> Result<PathBuf, SimError> {
    let params = load_parameters(source)?;
    let destination = output_path(output_dir, source)?;

    fs::create_dir_all(output_dir).map_err(|e| SimError::io(output_dir, e))?;

    writeln!(diagnostics, "omega={:.6}", params.angular_rate())?;

    let file = File::create(&destination).map_err(|e| SimError::io(&destination, e))?;
    let mut writer = BufWriter::new(file);
    run_simulation(&params, settings, &mut writer, status)?;

    Ok(destination)
}

/// 複数の入力ファイルを順に処理する（最初の失敗で中断）
pub fn run_batch<S: Write, D: Write>(
    sources: &[PathBuf],
    output_dir: &Path,
    settings: &SimulationSettings,
    status: &mut S,
    diagnostics: &mut D,
) -> Result<Vec<PathBuf>, SimError> {
    sources
        .iter()
        .map(|source| process_file(source, output_dir, settings, status, diagnostics))
        .collect()
}
