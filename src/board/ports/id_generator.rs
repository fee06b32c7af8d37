//! Identifier generation port.

use crate::board::domain::{ColumnId, TaskId};

/// Source of fresh task and column identifiers.
///
/// Implementations must not repeat an identifier within a board's lifetime;
/// the engine treats collisions as caller error.
pub trait IdGenerator: Send + Sync {
    /// Returns an identifier for a new task.
    fn next_task_id(&self) -> TaskId;

    /// Returns an identifier for a new column.
    fn next_column_id(&self) -> ColumnId;
}
