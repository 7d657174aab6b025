// src/config/settings.rs

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use serde_yaml::from_reader;

use crate::math::error::SimError;

pub const DEFAULT_REPORT_INCREMENT: f64 = 10.0; // 出力間隔 (s)
pub const DEFAULT_TIME_END: f64 = 800.0; // 終了時刻 (s)
pub const DEFAULT_CLICK: f64 = 0.001; // 時間刻み (s)

/// 出力タイミングの判定方式
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReportTrigger {
    /// 前回の出力から間隔を超えたら出力する（位相が少しずつずれる）
    #[default]
    SinceLast,
    /// 間隔の整数倍を跨いだ時点で出力する
    ExactPhase,
}

/// シミュレーション全体の実行設定
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SimulationSettings {
    pub report_interval: f64, // 出力間隔 (s)
    pub end_time: f64,        // 終了時刻 (s)
    pub click: f64,           // 時間刻み (s)
    pub trigger: ReportTrigger,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        SimulationSettings {
            report_interval: DEFAULT_REPORT_INCREMENT,
            end_time: DEFAULT_TIME_END,
            click: DEFAULT_CLICK,
            trigger: ReportTrigger::SinceLast,
        }
    }
}

impl SimulationSettings {
    /// 設定値の妥当性を確認する
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.click.is_finite() && self.click > 0.0) {
            return Err(SimError::InvalidSettings(format!(
                "click は正の値である必要があります: {}",
                self.click
            )));
        }
        if !(self.report_interval.is_finite() && self.report_interval > 0.0) {
            return Err(SimError::InvalidSettings(format!(
                "report_interval は正の値である必要があります: {}",
                self.report_interval
            )));
        }
        if !(self.end_time.is_finite() && self.end_time >= 0.0) {
            return Err(SimError::InvalidSettings(format!(
                "end_time は 0 以上である必要があります: {}",
                self.end_time
            )));
        }
        Ok(())
    }
}

/// シミュレーション設定の読み込み
pub fn load_settings(path: &Path) -> Result<SimulationSettings, SimError> {
    let file = File::open(path).map_err(|e| SimError::io(path, e))?;
    let settings: SimulationSettings = from_reader(file)?;
    settings.validate()?;
    Ok(settings)
}
