use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Serialize;
use tracing::debug;

use crate::{DefaultPositioner, Position, Positioner};

/// What a simulator knows about one side of a chase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Subject {
    pub position: Position,
    pub speed: f64,
}

pub trait CatchSimulator: Send + Sync {
    fn can_catch(&self, hunter: &Subject, prey: &Subject) -> bool;
}

/// Catches when the hunter closes the gap within `max_time_to_catch`.
#[derive(Debug, Clone)]
pub struct DefaultCatchSimulator<P = DefaultPositioner> {
    max_time_to_catch: f64,
    positioner: P,
}

impl DefaultCatchSimulator {
    pub fn new(max_time_to_catch: f64) -> Self {
        Self::with_positioner(max_time_to_catch, DefaultPositioner)
    }
}

impl<P: Positioner> DefaultCatchSimulator<P> {
    pub fn with_positioner(max_time_to_catch: f64, positioner: P) -> Self {
        Self {
            max_time_to_catch,
            positioner,
        }
    }

    pub fn max_time_to_catch(&self) -> f64 {
        self.max_time_to_catch
    }
}

impl<P: Positioner> CatchSimulator for DefaultCatchSimulator<P> {
    fn can_catch(&self, hunter: &Subject, prey: &Subject) -> bool {
        let distance = self
            .positioner
            .linear_distance(&hunter.position, &prey.position);
        let closing_speed = hunter.speed - prey.speed;
        if closing_speed <= 0.0 {
            debug!(distance, closing_speed, "prey is not slower than hunter");
            return false;
        }

        let time_to_catch = distance / closing_speed;
        let can_catch = time_to_catch <= self.max_time_to_catch;
        debug!(distance, time_to_catch, can_catch, "simulated chase");
        can_catch
    }
}

/// Simulator test double: scripted verdicts plus a call count.
pub struct CatchSimulatorMock {
    pub can_catch_fn: Box<dyn Fn(&Subject, &Subject) -> bool + Send + Sync>,
    can_catch_calls: AtomicUsize,
}

impl CatchSimulatorMock {
    pub fn new() -> Self {
        Self {
            can_catch_fn: Box::new(|_: &Subject, _: &Subject| false),
            can_catch_calls: AtomicUsize::new(0),
        }
    }

    pub fn returning(can_catch: bool) -> Self {
        let mut mock = Self::new();
        mock.can_catch_fn = Box::new(move |_: &Subject, _: &Subject| can_catch);
        mock
    }

    pub fn can_catch_calls(&self) -> usize {
        self.can_catch_calls.load(Ordering::SeqCst)
    }
}

impl Default for CatchSimulatorMock {
    fn default() -> Self {
        Self::new()
    }
}

impl CatchSimulator for CatchSimulatorMock {
    fn can_catch(&self, hunter: &Subject, prey: &Subject) -> bool {
        self.can_catch_calls.fetch_add(1, Ordering::SeqCst);
        (self.can_catch_fn)(hunter, prey)
    }
}
