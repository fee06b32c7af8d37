//! Application services: the board engine, its commands and drag policy.

mod command;
mod config;
mod drag;
mod engine;

pub use command::BoardCommand;
pub use config::{EngineConfig, TimestampPolicy};
pub use drag::DragSession;
pub use engine::{BoardEngine, BoardEngineError, BoardEngineResult, Change};
