//! Identifier generators.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::board::{
    domain::{ColumnId, TaskId},
    ports::IdGenerator,
};

/// Generates random UUID v4 identifiers.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdGenerator;

impl IdGenerator for UuidIdGenerator {
    fn next_task_id(&self) -> TaskId {
        TaskId::random()
    }

    fn next_column_id(&self) -> ColumnId {
        ColumnId::random()
    }
}

/// Generates `task-1`, `task-2`, … and `column-1`, `column-2`, …
///
/// Task and column sequences are counted independently.
#[derive(Debug, Default)]
pub struct SequentialIdGenerator {
    next_task: AtomicU64,
    next_column: AtomicU64,
}

impl SequentialIdGenerator {
    /// Creates a generator whose first ids are `task-1` and `column-1`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator that continues after `task_count` existing tasks.
    #[must_use]
    pub const fn starting_after(task_count: u64) -> Self {
        Self {
            next_task: AtomicU64::new(task_count),
            next_column: AtomicU64::new(0),
        }
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_task_id(&self) -> TaskId {
        let ordinal = self.next_task.fetch_add(1, Ordering::Relaxed).saturating_add(1);
        TaskId::new(format!("task-{ordinal}"))
    }

    fn next_column_id(&self) -> ColumnId {
        let ordinal = self
            .next_column
            .fetch_add(1, Ordering::Relaxed)
            .saturating_add(1);
        ColumnId::new(format!("column-{ordinal}"))
    }
}
