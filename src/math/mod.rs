// src/math/mod.rs

pub mod error;
pub mod finite_difference;
pub mod window;

pub use error::SimError;
pub use finite_difference::{estimate_acceleration, estimate_error, BodyAcceleration, REQUIRED_SAMPLES};
pub use window::{Point, PositionWindow, WINDOW_CAPACITY};
