use std::fmt;
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use crate::{CatchSimulator, Position, Prey, Subject};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HuntError {
    #[error("can not hunt the prey: {0}")]
    CanNotHunt(&'static str),
}

pub trait Hunter {
    /// Asks the simulator, once, whether `prey` can be caught from the current state.
    fn hunt(&self, prey: &dyn Prey) -> Result<(), HuntError>;

    fn configure(&mut self, speed: f64, position: Position);
}

pub struct WhiteShark {
    speed: f64,
    position: Position,
    simulator: Arc<dyn CatchSimulator>,
}

impl WhiteShark {
    pub fn new(speed: f64, position: Position, simulator: Arc<dyn CatchSimulator>) -> Self {
        Self {
            speed,
            position,
            simulator,
        }
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn position(&self) -> Position {
        self.position
    }
}

impl fmt::Debug for WhiteShark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WhiteShark")
            .field("speed", &self.speed)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

impl Hunter for WhiteShark {
    fn hunt(&self, prey: &dyn Prey) -> Result<(), HuntError> {
        let hunter = Subject {
            position: self.position,
            speed: self.speed,
        };
        let prey = Subject {
            position: prey.position(),
            speed: prey.speed(),
        };

        if !self.simulator.can_catch(&hunter, &prey) {
            debug!(?hunter, ?prey, "shark can not catch the prey");
            return Err(HuntError::CanNotHunt("shark can not catch the prey"));
        }

        debug!(?hunter, ?prey, "shark caught the prey");
        Ok(())
    }

    fn configure(&mut self, speed: f64, position: Position) {
        self.speed = speed;
        self.position = position;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CatchSimulatorMock, PreyStub};
    use std::sync::Mutex;

    fn prey_at_origin() -> PreyStub {
        let mut prey = PreyStub::new();
        prey.position_fn = Box::new(|| Position::new(0.0, 0.0, 0.0));
        prey.speed_fn = Box::new(|| 10.0);
        prey
    }

    #[test]
    fn hunts_with_speed_and_short_distance() {
        let prey = prey_at_origin();
        let sim = Arc::new(CatchSimulatorMock::returning(true));
        let shark = WhiteShark::new(100.0, Position::new(1.0, 1.0, 1.0), sim.clone());

        let result = shark.hunt(&prey);

        assert_eq!(result, Ok(()));
        assert_eq!(sim.can_catch_calls(), 1);
    }

    #[test]
    fn can_not_hunt_with_short_speed() {
        let prey = prey_at_origin();
        let sim = Arc::new(CatchSimulatorMock::returning(false));
        let shark = WhiteShark::new(1.0, Position::new(1.0, 1.0, 1.0), sim.clone());

        let err = shark.hunt(&prey).unwrap_err();

        assert!(matches!(err, HuntError::CanNotHunt(_)));
        assert_eq!(
            err.to_string(),
            "can not hunt the prey: shark can not catch the prey"
        );
        assert_eq!(sim.can_catch_calls(), 1);
    }

    #[test]
    fn can_not_hunt_with_long_distance() {
        let prey = prey_at_origin();
        let sim = Arc::new(CatchSimulatorMock::returning(false));
        let shark = WhiteShark::new(100.0, Position::new(1000.0, 1000.0, 1000.0), sim.clone());

        let err = shark.hunt(&prey).unwrap_err();

        assert!(matches!(err, HuntError::CanNotHunt(_)));
        assert_eq!(
            err.to_string(),
            "can not hunt the prey: shark can not catch the prey"
        );
        assert_eq!(sim.can_catch_calls(), 1);
    }

    #[test]
    fn passes_both_subjects_to_simulator() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let mut mock = CatchSimulatorMock::new();
        let sink = seen.clone();
        mock.can_catch_fn = Box::new(move |hunter: &Subject, prey: &Subject| {
            if let Ok(mut seen) = sink.lock() {
                seen.push((*hunter, *prey));
            }
            true
        });
        let shark = WhiteShark::new(100.0, Position::new(1.0, 1.0, 1.0), Arc::new(mock));

        shark.hunt(&prey_at_origin()).unwrap();

        let seen = seen.lock().unwrap();
        assert_eq!(seen.len(), 1);
        let (hunter, prey) = seen[0];
        assert_eq!(hunter.speed, 100.0);
        assert_eq!(hunter.position, Position::new(1.0, 1.0, 1.0));
        assert_eq!(prey.speed, 10.0);
        assert_eq!(prey.position, Position::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn hunt_only_reads_prey() {
        let prey = prey_at_origin();
        let shark = WhiteShark::new(
            100.0,
            Position::new(1.0, 1.0, 1.0),
            Arc::new(CatchSimulatorMock::returning(true)),
        );

        shark.hunt(&prey).unwrap();
        shark.hunt(&prey).unwrap();

        assert_eq!(prey.position_calls(), 2);
        assert_eq!(prey.speed_calls(), 2);
        assert_eq!(shark.speed(), 100.0);
        assert_eq!(shark.position(), Position::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn configure_changes_what_simulator_sees() {
        let mut mock = CatchSimulatorMock::new();
        mock.can_catch_fn =
            Box::new(|hunter: &Subject, prey: &Subject| hunter.speed > prey.speed);
        let mut shark = WhiteShark::new(1.0, Position::default(), Arc::new(mock));

        assert!(shark.hunt(&prey_at_origin()).is_err());
        shark.configure(50.0, Position::new(2.0, 2.0, 2.0));
        assert!(shark.hunt(&prey_at_origin()).is_ok());
        assert_eq!(shark.position(), Position::new(2.0, 2.0, 2.0));
    }
}
