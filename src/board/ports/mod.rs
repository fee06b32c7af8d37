//! Port contracts for the board engine's collaborators.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod id_generator;
pub mod seed;

pub use id_generator::IdGenerator;
pub use seed::BoardSeed;
