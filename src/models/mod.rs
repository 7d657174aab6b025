// src/models/mod.rs

pub mod vehicle;

pub use vehicle::SpinningVehicle;
