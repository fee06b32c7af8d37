//! Adapter implementations for board ports.

pub mod ids;
pub mod seed;

pub use ids::{SequentialIdGenerator, UuidIdGenerator};
pub use seed::{SampleBoardSeed, default_columns};
