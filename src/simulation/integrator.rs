// src/simulation/integrator.rs

use crate::math::Point;
use crate::models::SpinningVehicle;
use crate::simulation::SimulationState;

/// 1 ステップ分の観測値
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepSample {
    pub t: f64,          // ステップ開始時の時刻 (s)
    pub theta: f64,      // ステップ後の機首方向 (rad)
    pub position: Point, // 加速度計の慣性座標系位置 (m)
}

/// 状態を固定刻み `click` で 1 ステップ進める
///
/// 位置は更新前の速度で進め、推力は更新前の機首方向から求める。
/// この順序を変えると基準出力と数値が一致しなくなる。
///
/// # 引数
/// - `state`: 更新する状態
/// - `vehicle`: 機体定数
/// - `click`: 時間刻み (s)
///
/// # 戻り値
/// - このステップで得られた加速度計位置など
pub fn advance(state: &mut SimulationState, vehicle: &SpinningVehicle, click: f64) -> StepSample {
    let t = state.t;

    state.x += state.vx * click;
    state.y += state.vy * click;

    let position = vehicle.sensing_point(Point::new(state.x, state.y), state.theta);

    let accel = vehicle.thrust_vector(state.theta);
    state.vx += click * accel.x;
    state.vy += click * accel.y;

    state.theta += vehicle.omega * click;
    state.t += click;

    StepSample {
        t,
        theta: state.theta,
        position,
    }
}
