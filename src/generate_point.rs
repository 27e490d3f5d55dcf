use rand::Rng;

use crate::Position;

pub fn random_position<R: Rng>(rng: &mut R, bounds: f64) -> Position {
    // non-finite bounds would panic inside `random_range`
    let bounds = if bounds.is_finite() { bounds.max(0.0) } else { 0.0 };
    let x = rng.random_range(0.0..=bounds);
    let y = rng.random_range(0.0..=bounds);
    let z = rng.random_range(0.0..=bounds);
    Position::new(x, y, z)
}
