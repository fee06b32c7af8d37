//! Unit tests for the board state engine.

mod support;

mod seed_tests;
mod snapshot_tests;
