// src/simulation/mod.rs

pub mod framework;
pub mod integrator;
pub mod report;

/// 積分器が進める機体の物理状態
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SimulationState {
    pub t: f64,     // 経過時間 (s)
    pub theta: f64, // 機首方向 (rad)、上限なしで単調増加
    pub x: f64,     // 回転中心の位置 (m)
    pub y: f64,
    pub vx: f64,    // 回転中心の速度 (m/s)
    pub vy: f64,
}
