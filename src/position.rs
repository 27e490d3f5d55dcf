use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Distance measure used by catch simulators.
pub trait Positioner: Send + Sync {
    fn linear_distance(&self, from: &Position, to: &Position) -> f64;
}

/// Straight-line euclidean distance in 3-D.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultPositioner;

impl Positioner for DefaultPositioner {
    fn linear_distance(&self, from: &Position, to: &Position) -> f64 {
        let dx = to.x - from.x;
        let dy = to.y - from.y;
        let dz = to.z - from.z;
        (dx.powi(2) + dy.powi(2) + dz.powi(2)).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance_to_self_is_zero() {
        let p = Position::new(3.0, -4.0, 12.0);
        assert_eq!(DefaultPositioner.linear_distance(&p, &p), 0.0);
    }

    #[test]
    fn distance_is_euclidean() {
        let from = Position::new(0.0, 0.0, 0.0);
        let to = Position::new(3.0, 4.0, 12.0);
        assert!((DefaultPositioner.linear_distance(&from, &to) - 13.0).abs() < 1e-9);
        assert!((DefaultPositioner.linear_distance(&to, &from) - 13.0).abs() < 1e-9);
    }
}
