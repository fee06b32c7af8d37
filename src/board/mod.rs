//! Board state engine.
//!
//! A board is an ordered list of columns plus a map of tasks. Each column
//! lists task ids in display order and each task records the column it
//! belongs to in its `status`. Every operation keeps both representations
//! in step. The module follows hexagonal architecture:
//!
//! - Domain types and pure transitions in [`domain`]
//! - Collaborator contracts in [`ports`]
//! - Id generators and the sample board in [`adapters`]
//! - The single-writer engine and drag policy in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
