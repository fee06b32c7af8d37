//! Board aggregate root and its state-transition operations.
//!
//! Every operation is a pure function of the current board and its
//! arguments: `self` is never mutated and a new [`Board`] is returned.
//! Each operation comes in two forms. `try_*` names the reason a call
//! could not be applied; the plain form swallows that reason and hands
//! back an unchanged clone, so a stray drag event can never corrupt the
//! board.

use super::{
    BoardOperationError, Column, ColumnId, InvariantViolation, Task, TaskEdit, TaskId,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Identifier reported under the pointer during a drag gesture.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "id", rename_all = "snake_case")]
pub enum DragTarget {
    /// The pointer is over a column's empty area or header.
    Column(ColumnId),
    /// The pointer is over a task card.
    Task(TaskId),
}

/// Flat representation of a board: ordered columns plus the task map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSnapshot {
    /// Columns in display order.
    pub columns: Vec<Column>,
    /// Tasks keyed by identifier.
    pub tasks: BTreeMap<TaskId, Task>,
}

/// The aggregate of all columns and tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardSnapshot", into = "BoardSnapshot")]
pub struct Board {
    columns: Vec<Column>,
    tasks: BTreeMap<TaskId, Task>,
}

impl Board {
    /// Creates a board with no columns and no tasks.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a validated board from columns and tasks.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found in the input.
    pub fn new(
        columns: Vec<Column>,
        tasks: impl IntoIterator<Item = Task>,
    ) -> Result<Self, InvariantViolation> {
        let tasks = tasks
            .into_iter()
            .map(|task| (task.id().clone(), task))
            .collect();
        Self::from_snapshot(BoardSnapshot { columns, tasks })
    }

    /// Rebuilds a board from its flat representation.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found in the snapshot.
    pub fn from_snapshot(snapshot: BoardSnapshot) -> Result<Self, InvariantViolation> {
        let board = Self {
            columns: snapshot.columns,
            tasks: snapshot.tasks,
        };
        board.check_invariants()?;
        Ok(board)
    }

    /// Returns the flat representation of this board.
    #[must_use]
    pub fn to_snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            columns: self.columns.clone(),
            tasks: self.tasks.clone(),
        }
    }

    /// Returns the columns in display order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the task map.
    #[must_use]
    pub const fn tasks(&self) -> &BTreeMap<TaskId, Task> {
        &self.tasks
    }

    /// Returns the number of tasks on the board.
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }

    /// Looks up a column by identifier.
    #[must_use]
    pub fn column(&self, column_id: &ColumnId) -> Option<&Column> {
        self.columns.iter().find(|column| column.id() == column_id)
    }

    /// Looks up a task by identifier.
    #[must_use]
    pub fn task(&self, task_id: &TaskId) -> Option<&Task> {
        self.tasks.get(task_id)
    }

    /// Returns the tasks of a column in display order.
    ///
    /// References without a task entry are skipped. Unknown columns yield
    /// an empty list.
    #[must_use]
    pub fn tasks_in(&self, column_id: &ColumnId) -> Vec<&Task> {
        self.column(column_id)
            .map(|column| {
                column
                    .task_ids()
                    .iter()
                    .filter_map(|task_id| self.tasks.get(task_id))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Finds the column listing `task_id` and the task's index in it.
    #[must_use]
    pub fn locate(&self, task_id: &TaskId) -> Option<(&ColumnId, usize)> {
        self.columns.iter().find_map(|column| {
            column
                .position(task_id)
                .map(|index| (column.id(), index))
        })
    }

    /// Interprets a raw identifier reported by a drag source.
    ///
    /// Column identifiers take precedence over task identifiers.
    #[must_use]
    pub fn target_for(&self, raw_id: &str) -> Option<DragTarget> {
        if let Some(column) = self.columns.iter().find(|c| c.id().as_str() == raw_id) {
            return Some(DragTarget::Column(column.id().clone()));
        }
        let task_id = TaskId::new(raw_id);
        self.locate(&task_id)
            .map(|_| DragTarget::Task(task_id))
    }

    /// Resolves a drag target to the column it lies in and, for task
    /// targets, the hovered task's index.
    #[must_use]
    pub fn resolve_target(&self, target: &DragTarget) -> Option<(ColumnId, Option<usize>)> {
        match target {
            DragTarget::Column(column_id) => self
                .column(column_id)
                .map(|column| (column.id().clone(), None)),
            DragTarget::Task(task_id) => self
                .locate(task_id)
                .map(|(column_id, index)| (column_id.clone(), Some(index))),
        }
    }

    /// Verifies the board invariants.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] encountered.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let mut column_ids = HashSet::with_capacity(self.columns.len());
        for column in &self.columns {
            if !column_ids.insert(column.id()) {
                return Err(InvariantViolation::DuplicateColumn(column.id().clone()));
            }
        }

        for (key, task) in &self.tasks {
            if key != task.id() {
                return Err(InvariantViolation::MisfiledTask {
                    key: key.clone(),
                    task_id: task.id().clone(),
                });
            }
        }

        let mut placed = HashSet::with_capacity(self.tasks.len());
        for column in &self.columns {
            for task_id in column.task_ids() {
                let task = self.tasks.get(task_id).ok_or_else(|| {
                    InvariantViolation::DanglingTaskId {
                        column_id: column.id().clone(),
                        task_id: task_id.clone(),
                    }
                })?;
                if !placed.insert(task_id) {
                    return Err(InvariantViolation::DuplicatePlacement(task_id.clone()));
                }
                if task.status() != column.id() {
                    return Err(InvariantViolation::StatusMismatch {
                        task_id: task_id.clone(),
                        status: task.status().clone(),
                        column_id: column.id().clone(),
                    });
                }
            }
        }

        match self.tasks.keys().find(|task_id| !placed.contains(task_id)) {
            Some(orphan) => Err(InvariantViolation::OrphanTask(orphan.clone())),
            None => Ok(()),
        }
    }

    /// Adds a task to the end of the column named by its status.
    ///
    /// An existing task with the same id is replaced and moved to the new
    /// position.
    ///
    /// # Errors
    ///
    /// Returns [`BoardOperationError::ColumnNotFound`] when the status does
    /// not name a column.
    pub fn try_add_task(&self, task: Task) -> Result<Self, BoardOperationError> {
        let column_id = task.status().clone();
        if self.column(&column_id).is_none() {
            return Err(BoardOperationError::ColumnNotFound(column_id));
        }

        let mut next = self.clone();
        let task_id = task.id().clone();
        next.unplace(&task_id);
        next.place(&column_id, None, task_id.clone())?;
        next.tasks.insert(task_id, task);
        Ok(next)
    }

    /// Total form of [`Self::try_add_task`].
    #[must_use]
    pub fn add_task(&self, task: Task) -> Self {
        self.try_add_task(task).unwrap_or_else(|_| self.clone())
    }

    /// Appends a column to the right-hand end of the board.
    ///
    /// # Errors
    ///
    /// Returns [`BoardOperationError::DuplicateColumn`] when the id is
    /// taken, or [`BoardOperationError::ColumnNotEmpty`] when the column
    /// already lists tasks.
    pub fn try_add_column(&self, column: Column) -> Result<Self, BoardOperationError> {
        if self.column(column.id()).is_some() {
            return Err(BoardOperationError::DuplicateColumn(column.id().clone()));
        }
        if !column.is_empty() {
            return Err(BoardOperationError::ColumnNotEmpty(column.id().clone()));
        }

        let mut next = self.clone();
        next.columns.push(column);
        Ok(next)
    }

    /// Total form of [`Self::try_add_column`].
    #[must_use]
    pub fn add_column(&self, column: Column) -> Self {
        self.try_add_column(column).unwrap_or_else(|_| self.clone())
    }

    /// Removes a task from the task map and from every column listing it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardOperationError::TaskNotFound`] when the id is neither
    /// in the task map nor in any column.
    pub fn try_delete_task(&self, task_id: &TaskId) -> Result<Self, BoardOperationError> {
        let mut next = self.clone();
        let removed_entry = next.tasks.remove(task_id).is_some();
        let removed_reference = next.unplace(task_id);
        if !removed_entry && !removed_reference {
            return Err(BoardOperationError::TaskNotFound(task_id.clone()));
        }
        Ok(next)
    }

    /// Total form of [`Self::try_delete_task`].
    #[must_use]
    pub fn delete_task(&self, task_id: &TaskId) -> Self {
        self.try_delete_task(task_id)
            .unwrap_or_else(|_| self.clone())
    }

    /// Removes a column together with every task it holds.
    ///
    /// # Errors
    ///
    /// Returns [`BoardOperationError::ColumnNotFound`] when the column does
    /// not exist.
    pub fn try_delete_column(&self, column_id: &ColumnId) -> Result<Self, BoardOperationError> {
        let index = self
            .columns
            .iter()
            .position(|column| column.id() == column_id)
            .ok_or_else(|| BoardOperationError::ColumnNotFound(column_id.clone()))?;

        let mut next = self.clone();
        let removed = next.columns.remove(index);
        for task_id in removed.task_ids() {
            next.tasks.remove(task_id);
        }
        next.tasks.retain(|_, task| task.status() != column_id);
        Ok(next)
    }

    /// Total form of [`Self::try_delete_column`].
    #[must_use]
    pub fn delete_column(&self, column_id: &ColumnId) -> Self {
        self.try_delete_column(column_id)
            .unwrap_or_else(|_| self.clone())
    }

    /// Moves a task into `to`, at `index` or appended at the end.
    ///
    /// `from` is trusted as the caller's view of the origin column, but the
    /// task is cleared from every column so a stale origin cannot leave a
    /// second copy behind. Indices past the end append. Calling this again
    /// with a new index while a drag is in flight re-places the task
    /// without duplicating it.
    ///
    /// # Errors
    ///
    /// Returns [`BoardOperationError::TaskNotFound`] when the task does not
    /// exist, or [`BoardOperationError::ColumnNotFound`] when `to` does not.
    pub fn try_move_task(
        &self,
        task_id: &TaskId,
        from: &ColumnId,
        to: &ColumnId,
        index: Option<usize>,
    ) -> Result<Self, BoardOperationError> {
        if !self.tasks.contains_key(task_id) {
            return Err(BoardOperationError::TaskNotFound(task_id.clone()));
        }
        if self.column(to).is_none() {
            return Err(BoardOperationError::ColumnNotFound(to.clone()));
        }

        let mut next = self.clone();
        if let Some(origin) = next.column_mut(from) {
            origin.remove(task_id);
        }
        next.unplace(task_id);
        next.place(to, index, task_id.clone())?;
        if let Some(task) = next.tasks.get_mut(task_id) {
            task.set_status(to.clone());
        }
        Ok(next)
    }

    /// Total form of [`Self::try_move_task`].
    #[must_use]
    pub fn move_task(
        &self,
        task_id: &TaskId,
        from: &ColumnId,
        to: &ColumnId,
        index: Option<usize>,
    ) -> Self {
        self.try_move_task(task_id, from, to, index)
            .unwrap_or_else(|_| self.clone())
    }

    /// Moves a task to `index` within its own column.
    ///
    /// The task is removed first and `index` is applied to the shortened
    /// list, so dragging `a` onto `c` in `[a, b, c]` with index 2 yields
    /// `[b, c, a]`. `None` is the "not found" sentinel from a position
    /// search and leaves the board unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`BoardOperationError::ColumnNotFound`],
    /// [`BoardOperationError::TaskNotInColumn`] or
    /// [`BoardOperationError::IndexNotFound`].
    pub fn try_reorder_tasks(
        &self,
        column_id: &ColumnId,
        task_id: &TaskId,
        index: Option<usize>,
    ) -> Result<Self, BoardOperationError> {
        let column = self
            .column(column_id)
            .ok_or_else(|| BoardOperationError::ColumnNotFound(column_id.clone()))?;
        if !column.contains(task_id) {
            return Err(BoardOperationError::TaskNotInColumn {
                task_id: task_id.clone(),
                column_id: column_id.clone(),
            });
        }
        let target = index.ok_or(BoardOperationError::IndexNotFound)?;

        let mut next = self.clone();
        let lane = next
            .column_mut(column_id)
            .ok_or_else(|| BoardOperationError::ColumnNotFound(column_id.clone()))?;
        lane.remove(task_id);
        lane.insert(Some(target), task_id.clone());
        Ok(next)
    }

    /// Total form of [`Self::try_reorder_tasks`].
    #[must_use]
    pub fn reorder_tasks(
        &self,
        column_id: &ColumnId,
        task_id: &TaskId,
        index: Option<usize>,
    ) -> Self {
        self.try_reorder_tasks(column_id, task_id, index)
            .unwrap_or_else(|_| self.clone())
    }

    /// Applies an edit to a task's descriptive fields and stamps
    /// `updated_at`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardOperationError::TaskNotFound`] when the task does not
    /// exist.
    pub fn try_edit_task(
        &self,
        task_id: &TaskId,
        edit: TaskEdit,
        at: DateTime<Utc>,
    ) -> Result<Self, BoardOperationError> {
        let mut next = self.clone();
        let task = next
            .tasks
            .get_mut(task_id)
            .ok_or_else(|| BoardOperationError::TaskNotFound(task_id.clone()))?;
        task.apply_edit(edit, at);
        Ok(next)
    }

    /// Total form of [`Self::try_edit_task`].
    #[must_use]
    pub fn edit_task(&self, task_id: &TaskId, edit: TaskEdit, at: DateTime<Utc>) -> Self {
        self.try_edit_task(task_id, edit, at)
            .unwrap_or_else(|_| self.clone())
    }

    /// Sets a task's `updated_at` without changing anything else.
    ///
    /// # Errors
    ///
    /// Returns [`BoardOperationError::TaskNotFound`] when the task does not
    /// exist.
    pub fn try_touch_task(
        &self,
        task_id: &TaskId,
        at: DateTime<Utc>,
    ) -> Result<Self, BoardOperationError> {
        let mut next = self.clone();
        let task = next
            .tasks
            .get_mut(task_id)
            .ok_or_else(|| BoardOperationError::TaskNotFound(task_id.clone()))?;
        task.touch_at(at);
        Ok(next)
    }

    /// Total form of [`Self::try_touch_task`].
    #[must_use]
    pub fn touch_task(&self, task_id: &TaskId, at: DateTime<Utc>) -> Self {
        self.try_touch_task(task_id, at)
            .unwrap_or_else(|_| self.clone())
    }

    fn column_mut(&mut self, column_id: &ColumnId) -> Option<&mut Column> {
        self.columns
            .iter_mut()
            .find(|column| column.id() == column_id)
    }

    /// Clears `task_id` from every column, returning whether any listed it.
    fn unplace(&mut self, task_id: &TaskId) -> bool {
        self.columns
            .iter_mut()
            .fold(false, |found, column| column.remove(task_id) || found)
    }

    fn place(
        &mut self,
        column_id: &ColumnId,
        index: Option<usize>,
        task_id: TaskId,
    ) -> Result<(), BoardOperationError> {
        let column = self
            .column_mut(column_id)
            .ok_or_else(|| BoardOperationError::ColumnNotFound(column_id.clone()))?;
        column.insert(index, task_id);
        Ok(())
    }
}

impl TryFrom<BoardSnapshot> for Board {
    type Error = InvariantViolation;

    fn try_from(snapshot: BoardSnapshot) -> Result<Self, Self::Error> {
        Self::from_snapshot(snapshot)
    }
}

impl From<Board> for BoardSnapshot {
    fn from(board: Board) -> Self {
        Self {
            columns: board.columns,
            tasks: board.tasks,
        }
    }
}
