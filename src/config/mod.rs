// src/config/mod.rs

pub mod parameters;
pub mod settings;

pub use parameters::{load_parameters, parse_parameters, Parameters};
pub use settings::{load_settings, ReportTrigger, SimulationSettings};
