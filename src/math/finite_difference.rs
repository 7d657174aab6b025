// src/math/finite_difference.rs

use crate::math::error::SimError;
use crate::math::window::{Point, PositionWindow};

/// 推定に必要な位置サンプル数
pub const REQUIRED_SAMPLES: usize = 4;

/// 機体座標系（前方・右舷方向）の加速度 (m/s²)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BodyAcceleration {
    pub fore: f64,
    pub starboard: f64,
}

impl BodyAcceleration {
    pub fn magnitude(&self) -> f64 {
        (self.fore.powi(2) + self.starboard.powi(2)).sqrt()
    }
}

/// 連続する 3 点の位置から 2 階差分で加速度を求める
///
/// # 引数
/// - `samples`: 古い順の位置 `[p1, p2, p3]`
/// - `click`: サンプル間隔 (s)
///
/// # 戻り値
/// - 慣性座標系の加速度 `[ax, ay]`
pub fn second_difference(samples: [Point; 3], click: f64) -> Point {
    let [p1, p2, p3] = samples;

    let vx2 = (p3.x - p2.x) / click;
    let vx1 = (p2.x - p1.x) / click;

    let vy2 = (p3.y - p2.y) / click;
    let vy1 = (p2.y - p1.y) / click;

    Point {
        x: (vx2 - vx1) / click,
        y: (vy2 - vy1) / click,
    }
}

/// 慣性座標系の加速度を機体の前方・右舷方向へ射影する
///
/// 前方単位ベクトルは `(cosθ, sinθ)`、右舷は前方を -90° 回した `(sinθ, -cosθ)`。
pub fn to_body_frame(accel: Point, theta: f64) -> BodyAcceleration {
    let (fx, fy) = (theta.cos(), theta.sin());
    let (sx, sy) = (theta.sin(), -theta.cos());

    BodyAcceleration {
        fore: accel.x * fx + accel.y * fy,
        starboard: accel.x * sx + accel.y * sy,
    }
}

/// 位置窓の直近 3 点から機体座標系の加速度を推定する
pub fn estimate_acceleration(
    window: &PositionWindow,
    click: f64,
    theta: f64,
) -> Result<BodyAcceleration, SimError> {
    let [_, p3, p2, p1] = window.latest::<REQUIRED_SAMPLES>()?;
    let accel = second_difference([p3, p2, p1], click);
    Ok(to_body_frame(accel, theta))
}

/// 1 ステップずらした 2 つの差分推定の食い違いから、加速度推定の相対誤差を見積もる
///
/// 加速度の大きさが 0 の場合は分母を 1 として扱う。
pub fn estimate_error(window: &PositionWindow, click: f64) -> Result<f64, SimError> {
    let [p4, p3, p2, p1] = window.latest::<REQUIRED_SAMPLES>()?;

    let reference = second_difference([p3, p2, p1], click);
    let shifted = second_difference([p4, p3, p2], click);

    let errx = reference.x - shifted.x;
    let erry = reference.y - shifted.y;

    let mut magnitude = reference.norm();
    if magnitude == 0.0 {
        magnitude = 1.0;
    }
    Ok((errx.powi(2) + erry.powi(2)).sqrt() / magnitude)
}
