//! Step definitions for board operation scenarios.

pub mod given;
pub mod then;
pub mod when;
pub mod world;
