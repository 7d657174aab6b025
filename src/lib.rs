//! # spinthrust
//!
//! 一定推力で回転し続ける機体の 2 次元軌道を積分し、離散的な位置サンプルだけから
//! 機体座標系（前方・右舷）で感じる加速度とその数値誤差を再構成する。

pub mod config;
pub mod math;
pub mod models;
pub mod simulation;

pub use config::{load_parameters, load_settings, Parameters, ReportTrigger, SimulationSettings};
pub use math::{BodyAcceleration, Point, PositionWindow, SimError};
pub use models::SpinningVehicle;
pub use simulation::framework::{output_path, process_file, run_batch, run_simulation};
pub use simulation::report::ReportRecord;
pub use simulation::SimulationState;
