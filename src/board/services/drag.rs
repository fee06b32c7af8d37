//! Drag-gesture policy: provisional placement, drop and cancellation.
//!
//! While the pointer moves, a task hovering over another column is moved
//! there provisionally so the presentation layer can render it in place.
//! Dropping onto a task in the same column reorders; cancelling restores
//! the origin placement recorded when the gesture began.

use crate::board::domain::{Board, BoardOperationError, ColumnId, DragTarget, TaskId};

use super::BoardCommand;

/// An in-flight drag of a single task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    task_id: TaskId,
    origin_column: ColumnId,
    origin_index: usize,
}

impl DragSession {
    /// Starts dragging `task_id`, remembering where it sits now.
    ///
    /// # Errors
    ///
    /// Returns [`BoardOperationError::TaskNotFound`] when the task is not
    /// placed on the board.
    pub fn begin(board: &Board, task_id: &TaskId) -> Result<Self, BoardOperationError> {
        let (column_id, index) = board
            .locate(task_id)
            .ok_or_else(|| BoardOperationError::TaskNotFound(task_id.clone()))?;
        Ok(Self {
            task_id: task_id.clone(),
            origin_column: column_id.clone(),
            origin_index: index,
        })
    }

    /// Returns the dragged task.
    #[must_use]
    pub const fn task_id(&self) -> &TaskId {
        &self.task_id
    }

    /// Returns the column the task sat in when the gesture began.
    #[must_use]
    pub const fn origin_column(&self) -> &ColumnId {
        &self.origin_column
    }

    /// Returns the task's index when the gesture began.
    #[must_use]
    pub const fn origin_index(&self) -> usize {
        self.origin_index
    }

    /// Provisional placement for a pointer move over `target`.
    ///
    /// Yields a move into the hovered column when it differs from the
    /// task's current column, at the hovered task's index or appended when
    /// hovering the column itself. Hovering within the current column
    /// yields nothing; ordering there is settled on drop.
    #[must_use]
    pub fn hover(&self, board: &Board, target: &DragTarget) -> Option<BoardCommand> {
        let task = board.task(&self.task_id)?;
        let (column_id, index) = board.resolve_target(target)?;
        if task.status() == &column_id {
            return None;
        }
        Some(BoardCommand::MoveTask {
            task_id: self.task_id.clone(),
            from: task.status().clone(),
            to: column_id,
            index,
        })
    }

    /// Final placement for a drop over `target`.
    ///
    /// Dropping onto another task in the same column reorders the dragged
    /// task to that task's index. Any other drop keeps the provisional
    /// placement as it is.
    #[must_use]
    pub fn drop_on(&self, board: &Board, target: Option<&DragTarget>) -> Option<BoardCommand> {
        let Some(DragTarget::Task(over_id)) = target else {
            return None;
        };
        let task = board.task(&self.task_id)?;
        let over = board.task(over_id)?;
        if task.status() != over.status() {
            return None;
        }

        let column = board.column(task.status())?;
        let old_index = column.position(&self.task_id);
        let new_index = column.position(over_id);
        if old_index == new_index {
            return None;
        }
        Some(BoardCommand::ReorderTasks {
            column_id: column.id().clone(),
            task_id: self.task_id.clone(),
            index: new_index,
        })
    }

    /// Compensating move that restores the origin placement.
    ///
    /// Yields nothing when the task is already back where it started or
    /// has been removed from the board.
    #[must_use]
    pub fn cancel(&self, board: &Board) -> Option<BoardCommand> {
        let (column_id, index) = board.locate(&self.task_id)?;
        if column_id == &self.origin_column && index == self.origin_index {
            return None;
        }
        Some(BoardCommand::MoveTask {
            task_id: self.task_id.clone(),
            from: column_id.clone(),
            to: self.origin_column.clone(),
            index: Some(self.origin_index),
        })
    }
}
