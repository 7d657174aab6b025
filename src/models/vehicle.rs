// src/models/vehicle.rs

use crate::config::Parameters;
use crate::math::Point;

/// 一定推力・一定角速度で回転する機体
///
/// パラメータから導かれる定数は生成時に一度だけ計算する。
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinningVehicle {
    pub thrust: f64, // 推力加速度 A (m/s²)
    pub omega: f64,  // 角速度 ω (rad/s)
    pub radius: f64, // 回転中心から加速度計までの距離 r (m)
}

impl SpinningVehicle {
    pub fn new(params: &Parameters) -> Self {
        SpinningVehicle {
            thrust: params.thrust_acceleration(),
            omega: params.angular_rate(),
            radius: params.radial_offset(),
        }
    }

    /// 加速度計の慣性座標系での位置
    ///
    /// # 引数
    /// - `center`: 回転中心の位置 (m)
    /// - `theta`: 機首方向 (rad)
    pub fn sensing_point(&self, center: Point, theta: f64) -> Point {
        Point {
            x: center.x + self.radius * theta.cos(),
            y: center.y + self.radius * theta.sin(),
        }
    }

    /// 機首方向を向いた推力加速度の慣性座標系成分
    pub fn thrust_vector(&self, theta: f64) -> Point {
        Point {
            x: self.thrust * theta.cos(),
            y: self.thrust * theta.sin(),
        }
    }
}
