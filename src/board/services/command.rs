//! Board commands: one value per state transition.

use chrono::{DateTime, Utc};

use crate::board::domain::{
    Board, BoardOperationError, Column, ColumnId, Task, TaskEdit, TaskId,
};

/// A requested change to the board.
///
/// Commands are the only route by which the engine changes its board, so
/// a task's status and its column membership are always updated together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardCommand {
    /// Append a task to the column named by its status.
    AddTask(Task),
    /// Append a column at the right-hand end.
    AddColumn(Column),
    /// Remove a task everywhere.
    DeleteTask(TaskId),
    /// Remove a column and the tasks it holds.
    DeleteColumn(ColumnId),
    /// Move a task into another (or the same) column.
    MoveTask {
        /// Task being moved.
        task_id: TaskId,
        /// Column the caller believes holds the task.
        from: ColumnId,
        /// Destination column.
        to: ColumnId,
        /// Destination index, or `None` to append.
        index: Option<usize>,
    },
    /// Reposition a task within its column.
    ReorderTasks {
        /// Column holding the task.
        column_id: ColumnId,
        /// Task being repositioned.
        task_id: TaskId,
        /// Destination index, or `None` when the drop target was not found.
        index: Option<usize>,
    },
    /// Change a task's descriptive fields.
    EditTask {
        /// Task being edited.
        task_id: TaskId,
        /// Fields to replace.
        edit: TaskEdit,
    },
}

impl BoardCommand {
    /// Short name used in log records.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::AddTask(_) => "add_task",
            Self::AddColumn(_) => "add_column",
            Self::DeleteTask(_) => "delete_task",
            Self::DeleteColumn(_) => "delete_column",
            Self::MoveTask { .. } => "move_task",
            Self::ReorderTasks { .. } => "reorder_tasks",
            Self::EditTask { .. } => "edit_task",
        }
    }

    /// Task whose position changes, for timestamp policies that refresh
    /// `updated_at` on moves.
    #[must_use]
    pub const fn repositioned_task(&self) -> Option<&TaskId> {
        match self {
            Self::MoveTask { task_id, .. } | Self::ReorderTasks { task_id, .. } => Some(task_id),
            Self::AddTask(_)
            | Self::AddColumn(_)
            | Self::DeleteTask(_)
            | Self::DeleteColumn(_)
            | Self::EditTask { .. } => None,
        }
    }

    /// Applies the command to `board`, producing the next board.
    ///
    /// `at` stamps `updated_at` for edits.
    ///
    /// # Errors
    ///
    /// Returns the [`BoardOperationError`] explaining why the board would
    /// be left unchanged.
    pub fn apply(self, board: &Board, at: DateTime<Utc>) -> Result<Board, BoardOperationError> {
        match self {
            Self::AddTask(task) => board.try_add_task(task),
            Self::AddColumn(column) => board.try_add_column(column),
            Self::DeleteTask(task_id) => board.try_delete_task(&task_id),
            Self::DeleteColumn(column_id) => board.try_delete_column(&column_id),
            Self::MoveTask {
                task_id,
                from,
                to,
                index,
            } => board.try_move_task(&task_id, &from, &to, index),
            Self::ReorderTasks {
                column_id,
                task_id,
                index,
            } => board.try_reorder_tasks(&column_id, &task_id, index),
            Self::EditTask { task_id, edit } => board.try_edit_task(&task_id, edit, at),
        }
    }
}
