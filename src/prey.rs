use std::cell::Cell;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{Position, random_position};

pub const TUNA_MIN_SPEED: f64 = 15.0;
pub const TUNA_MAX_SPEED: f64 = 252.0;

/// Read-only view of something that can be hunted.
pub trait Prey {
    fn position(&self) -> Position;
    fn speed(&self) -> f64;
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tuna {
    pub speed: f64,
    pub position: Position,
}

impl Tuna {
    pub fn new(speed: f64, position: Position) -> Self {
        Self { speed, position }
    }

    /// Spawns a tuna somewhere in `[0, bounds]^3` with a random cruising speed.
    pub fn random<R: Rng>(rng: &mut R, bounds: f64) -> Self {
        let speed = rng.random_range(TUNA_MIN_SPEED..=TUNA_MAX_SPEED);
        Self::new(speed, random_position(rng, bounds))
    }

    pub fn configure(&mut self, speed: f64, position: Position) {
        self.speed = speed;
        self.position = position;
    }
}

impl Prey for Tuna {
    fn position(&self) -> Position {
        self.position
    }

    fn speed(&self) -> f64 {
        self.speed
    }
}

/// Prey test double: canned answers plus accessor call counts.
pub struct PreyStub {
    pub position_fn: Box<dyn Fn() -> Position>,
    pub speed_fn: Box<dyn Fn() -> f64>,
    position_calls: Cell<usize>,
    speed_calls: Cell<usize>,
}

impl PreyStub {
    pub fn new() -> Self {
        Self {
            position_fn: Box::new(Position::default),
            speed_fn: Box::new(|| 0.0),
            position_calls: Cell::new(0),
            speed_calls: Cell::new(0),
        }
    }

    pub fn position_calls(&self) -> usize {
        self.position_calls.get()
    }

    pub fn speed_calls(&self) -> usize {
        self.speed_calls.get()
    }
}

impl Default for PreyStub {
    fn default() -> Self {
        Self::new()
    }
}

impl Prey for PreyStub {
    fn position(&self) -> Position {
        self.position_calls.set(self.position_calls.get() + 1);
        (self.position_fn)()
    }

    fn speed(&self) -> f64 {
        self.speed_calls.set(self.speed_calls.get() + 1);
        (self.speed_fn)()
    }
}
