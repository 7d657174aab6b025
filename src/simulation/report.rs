// src/simulation/report.rs

use std::io::Write;

use crate::config::{ReportTrigger, SimulationSettings};
use crate::math::{estimate_acceleration, estimate_error, PositionWindow, SimError};
use crate::simulation::integrator::StepSample;

/// 出力ファイルのヘッダー
pub const HEADER: &str =
    "time\ttheta\tx\ty\ta_fore\ta_starboard\ta_magnitude\terr estimate\n";

/// 出力タイミングの判定器
#[derive(Debug, Clone, PartialEq)]
pub struct ReportClock {
    trigger: ReportTrigger,
    interval: f64,
    last: f64, // 前回の出力時刻
    next: f64, // 次の出力予定時刻（ExactPhase）
}

impl ReportClock {
    pub fn new(settings: &SimulationSettings) -> Self {
        ReportClock {
            trigger: settings.trigger,
            interval: settings.report_interval,
            last: 0.0,
            next: settings.report_interval,
        }
    }

    /// 時刻 `t` で出力すべきかを判定し、内部状態を更新する
    pub fn should_fire(&mut self, t: f64) -> bool {
        match self.trigger {
            ReportTrigger::SinceLast => {
                if t - self.last > self.interval {
                    self.last = t;
                    true
                } else {
                    false
                }
            }
            ReportTrigger::ExactPhase => {
                if t >= self.next {
                    // t を越える最初の整数倍へ一度に進める
                    self.next = ((t / self.interval).floor() + 1.0) * self.interval;
                    self.last = t;
                    true
                } else {
                    false
                }
            }
        }
    }
}

/// 出力 1 行分のスナップショット
///
/// `a_fore` / `a_starboard` は搭乗者が感じる向き（推定値の符号を反転したもの）。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReportRecord {
    pub time: f64,
    pub theta: f64,
    pub x: f64,
    pub y: f64,
    pub a_fore: f64,
    pub a_starboard: f64,
    pub a_magnitude: f64,
    pub err_estimate: f64,
}

impl ReportRecord {
    /// 現在の窓から加速度と誤差を推定して記録を作る
    pub fn capture(
        sample: &StepSample,
        window: &PositionWindow,
        click: f64,
    ) -> Result<Self, SimError> {
        let accel = estimate_acceleration(window, click, sample.theta)?;
        let err_estimate = estimate_error(window, click)?;

        Ok(ReportRecord {
            time: sample.t,
            theta: sample.theta,
            x: sample.position.x,
            y: sample.position.y,
            a_fore: -accel.fore,
            a_starboard: -accel.starboard,
            a_magnitude: accel.magnitude(),
            err_estimate,
        })
    }
}

/// ヘッダーの書き込み
pub fn write_header<W: Write>(writer: &mut W) -> Result<(), std::io::Error> {
    writer.write_all(HEADER.as_bytes())
}

/// タブ区切りの 1 行を作成
pub fn format_record(record: &ReportRecord) -> String {
    format!(
        "{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\t{:.6}\n",
        record.time,
        record.theta,
        record.x,
        record.y,
        record.a_fore,
        record.a_starboard,
        record.a_magnitude,
        record.err_estimate,
    )
}

/// 記録の書き込み
pub fn write_record<W: Write>(writer: &mut W, record: &ReportRecord) -> Result<(), std::io::Error> {
    writer.write_all(format_record(record).as_bytes())
}

/// 進捗表示（出力 1 行ごとに `.`）
pub fn write_progress_tick<S: Write>(status: &mut S) -> Result<(), std::io::Error> {
    status.write_all(b".")?;
    status.flush()
}

/// 完了表示
pub fn write_progress_done<S: Write>(status: &mut S) -> Result<(), std::io::Error> {
    status.write_all(b"\nDONE.\n")?;
    status.flush()
}
