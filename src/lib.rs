//! Kanban engine: in-memory state for a client-side task board.
//!
//! This crate owns the board data model (ordered columns and a task map)
//! and the mutation operations that keep them consistent under insert,
//! move, reorder and delete, including provisional placement while a card
//! is being dragged. Rendering, input handling and persistence belong to
//! the presentation layer that drives the engine.
//!
//! # Architecture
//!
//! The engine follows hexagonal architecture principles:
//!
//! - **Domain**: Pure board values and state transitions
//! - **Ports**: Abstract trait interfaces for collaborators (id
//!   generation, seed data)
//! - **Adapters**: Concrete implementations of ports
//! - **Services**: The single-writer engine, commands and drag policy
//!
//! # Modules
//!
//! - [`board`]: Board state engine

pub mod board;
