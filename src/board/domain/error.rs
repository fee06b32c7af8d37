//! Error types for board domain validation, operations and invariants.

use super::{ColumnId, TaskId};
use thiserror::Error;

/// Errors returned while constructing domain board values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTaskTitle,

    /// The column title is empty after trimming.
    #[error("column title must not be empty")]
    EmptyColumnTitle,

    /// A tag is empty after trimming.
    #[error("tag must not be empty")]
    EmptyTag,
}

/// Error returned while parsing priorities from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Reasons a board operation leaves the board unchanged.
///
/// The total operation forms swallow these and return the board as it
/// was; the `try_` forms surface them so callers can log or alert.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardOperationError {
    /// The referenced column does not exist.
    #[error("column not found: {0}")]
    ColumnNotFound(ColumnId),

    /// The referenced task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The task exists but is not listed in the referenced column.
    #[error("task {task_id} is not in column {column_id}")]
    TaskNotInColumn {
        /// Task that was looked up.
        task_id: TaskId,
        /// Column that was searched.
        column_id: ColumnId,
    },

    /// The caller passed the "not found" sentinel as a target index.
    #[error("target index not found")]
    IndexNotFound,

    /// A column with the same identifier already exists.
    #[error("duplicate column identifier: {0}")]
    DuplicateColumn(ColumnId),

    /// A generated task identifier is already on the board.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// A column added to the board already lists tasks.
    #[error("new column {0} must not list tasks")]
    ColumnNotEmpty(ColumnId),
}

/// First broken board invariant found by
/// [`Board::check_invariants`](super::Board::check_invariants).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A column lists a task id that has no entry in the task map.
    #[error("column {column_id} references unknown task {task_id}")]
    DanglingTaskId {
        /// Column holding the reference.
        column_id: ColumnId,
        /// Unknown task identifier.
        task_id: TaskId,
    },

    /// A task's status names a different column than the one listing it.
    #[error("task {task_id} has status {status} but sits in column {column_id}")]
    StatusMismatch {
        /// Task whose status is inconsistent.
        task_id: TaskId,
        /// Status recorded on the task.
        status: ColumnId,
        /// Column that actually lists the task.
        column_id: ColumnId,
    },

    /// A task is not listed by any column.
    #[error("task {0} is not placed in any column")]
    OrphanTask(TaskId),

    /// A task id appears more than once across all columns.
    #[error("task {0} is placed more than once")]
    DuplicatePlacement(TaskId),

    /// Two columns share an identifier.
    #[error("duplicate column identifier: {0}")]
    DuplicateColumn(ColumnId),

    /// A task is filed in the task map under a key other than its own id.
    #[error("task {task_id} is stored under key {key}")]
    MisfiledTask {
        /// Map key the task is stored under.
        key: TaskId,
        /// Identifier recorded on the task.
        task_id: TaskId,
    },
}
