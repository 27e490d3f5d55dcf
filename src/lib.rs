//! A white shark that hunts prey by asking a pluggable catch simulator,
//! plus a small WebSocket service for driving hunts.

pub mod config;
pub use config::{Config, ConfigError};

mod position;
pub use position::{DefaultPositioner, Position, Positioner};

mod generate_point;
pub use generate_point::random_position;

mod prey;
pub use prey::{Prey, PreyStub, Tuna};

mod simulator;
pub use simulator::{CatchSimulator, CatchSimulatorMock, DefaultCatchSimulator, Subject};

mod hunter;
pub use hunter::{HuntError, Hunter, WhiteShark};

mod session;
pub use session::{Command, HuntReport, HuntSession, Reply};

mod server;
pub use server::{ServerError, serve};
