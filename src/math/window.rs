// src/math/window.rs

use crate::math::error::SimError;

/// 位置窓に保持するサンプル数の上限
pub const WINDOW_CAPACITY: usize = 9;

/// 慣性座標系の2次元の点 (m)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn norm(&self) -> f64 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }
}

/// 直近の加速度計位置を保持する固定長のリングバッファ
///
/// 1 積分ステップにつき 1 回 `push` される。容量を超えると最も古いサンプルを上書きする。
#[derive(Debug, Clone)]
pub struct PositionWindow {
    samples: [Point; WINDOW_CAPACITY],
    cursor: usize, // 次に書き込む位置
    len: usize,
}

impl Default for PositionWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionWindow {
    pub fn new() -> Self {
        PositionWindow {
            samples: [Point::default(); WINDOW_CAPACITY],
            cursor: 0,
            len: 0,
        }
    }

    /// サンプルを 1 つ追加する
    pub fn push(&mut self, point: Point) {
        self.samples[self.cursor] = point;
        self.cursor = (self.cursor + 1) % WINDOW_CAPACITY;
        if self.len < WINDOW_CAPACITY {
            self.len += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        WINDOW_CAPACITY
    }

    /// 直近 `N` 個のサンプルを古い順に返す
    ///
    /// # 戻り値
    /// - `[p[-N], ..., p[-1]]`
    /// - 保持数が `N` に満たない場合は `SimError::InsufficientSamples`
    pub fn latest<const N: usize>(&self) -> Result<[Point; N], SimError> {
        if N > self.len {
            return Err(SimError::InsufficientSamples {
                required: N,
                available: self.len,
            });
        }
        let start = (self.cursor + WINDOW_CAPACITY - N) % WINDOW_CAPACITY;
        Ok(std::array::from_fn(|i| {
            self.samples[(start + i) % WINDOW_CAPACITY]
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(count: usize) -> PositionWindow {
        let mut window = PositionWindow::new();
        for i in 0..count {
            window.push(Point::new(i as f64, -(i as f64)));
        }
        window
    }

    #[test]
    fn test_len_is_bounded_by_capacity() {
        for steps in 0..30 {
            let window = filled(steps);
            assert_eq!(window.len(), steps.min(WINDOW_CAPACITY));
            assert_eq!(window.is_empty(), steps == 0);
            assert_eq!(window.capacity(), WINDOW_CAPACITY);
        }
    }

    #[test]
    fn test_latest_returns_oldest_to_newest() {
        let window = filled(4);
        let latest: [Point; 4] = window.latest().unwrap();
        let xs: Vec<f64> = latest.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_latest_after_wraparound() {
        let window = filled(23);
        let latest: [Point; 4] = window.latest().unwrap();
        let xs: Vec<f64> = latest.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![19.0, 20.0, 21.0, 22.0]);

        let all: [Point; WINDOW_CAPACITY] = window.latest().unwrap();
        assert_eq!(all[0], Point::new(14.0, -14.0));
        assert_eq!(all[WINDOW_CAPACITY - 1], Point::new(22.0, -22.0));
    }

    #[test]
    fn test_latest_requires_enough_samples() {
        let window = filled(3);
        let result: Result<[Point; 4], _> = window.latest();
        match result {
            Err(SimError::InsufficientSamples { required, available }) => {
                assert_eq!(required, 4);
                assert_eq!(available, 3);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_latest_beyond_capacity_is_rejected() {
        let window = filled(40);
        let result: Result<[Point; 10], _> = window.latest();
        assert!(result.is_err());
    }
}
