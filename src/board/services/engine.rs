//! Single-writer board engine.

use std::sync::Arc;

use mockable::Clock;
use thiserror::Error;

use crate::board::{
    domain::{
        Board, BoardDomainError, BoardOperationError, Column, ColumnId, ColumnTitle, DragTarget,
        Task, TaskDetails, TaskEdit, TaskId,
    },
    ports::{BoardSeed, IdGenerator},
};

use super::{BoardCommand, DragSession, EngineConfig, TimestampPolicy};

/// Outcome of a command issued through the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Change {
    /// The command was applied.
    Applied,
    /// The command referenced something missing; the board is unchanged.
    Unchanged(BoardOperationError),
    /// Nothing changed: either no command was issued or the command
    /// left the board as it was.
    Idle,
}

impl Change {
    /// Returns `true` when the command was applied.
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Service-level errors for engine operations that must report failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardEngineError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),
    /// The operation referenced something missing.
    #[error(transparent)]
    Operation(#[from] BoardOperationError),
    /// The caller's view of the board is out of date.
    #[error("board version conflict: expected {expected}, current {current}")]
    VersionConflict {
        /// Version the caller based its command on.
        expected: u64,
        /// Version currently held by the engine.
        current: u64,
    },
}

/// Result type for engine operations.
pub type BoardEngineResult<T> = Result<T, BoardEngineError>;

/// Holder of the current board and the only writer allowed to replace it.
///
/// Each command is applied to the current board as a pure transition and
/// the result replaces it. The version counter advances whenever the board
/// changes, so callers sharing the engine can detect stale views with
/// [`Self::execute_at`].
#[derive(Debug)]
pub struct BoardEngine<C, G>
where
    C: Clock,
    G: IdGenerator,
{
    board: Board,
    version: u64,
    config: EngineConfig,
    clock: Arc<C>,
    ids: Arc<G>,
    drag: Option<DragSession>,
}

impl<C, G> BoardEngine<C, G>
where
    C: Clock,
    G: IdGenerator,
{
    /// Creates an engine holding `board` with the default configuration.
    #[must_use]
    pub fn new(board: Board, clock: Arc<C>, ids: Arc<G>) -> Self {
        Self {
            board,
            version: 0,
            config: EngineConfig::default(),
            clock,
            ids,
            drag: None,
        }
    }

    /// Creates an engine starting from the board produced by `seed`.
    #[must_use]
    pub fn from_seed(seed: &impl BoardSeed, clock: Arc<C>, ids: Arc<G>) -> Self {
        Self::new(seed.initial_board(), clock, ids)
    }

    /// Replaces the configuration.
    #[must_use]
    pub const fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the current board.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the number of changes applied so far.
    #[must_use]
    pub const fn version(&self) -> u64 {
        self.version
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Returns the active drag gesture, if any.
    #[must_use]
    pub const fn drag(&self) -> Option<&DragSession> {
        self.drag.as_ref()
    }

    /// Consumes the engine, returning the current board.
    #[must_use]
    pub fn into_board(self) -> Board {
        self.board
    }

    /// Applies `command` to the current board.
    ///
    /// Never fails: a command that references something missing leaves the
    /// board unchanged and reports why. A command that succeeds without
    /// changing anything reports [`Change::Idle`] and keeps the version.
    pub fn execute(&mut self, command: BoardCommand) -> Change {
        let kind = command.kind();
        let repositioned = match self.config.timestamp_policy {
            TimestampPolicy::TouchOnChange => command.repositioned_task().cloned(),
            TimestampPolicy::CreationOnly => None,
        };
        let now = self.clock.utc();

        match command.apply(&self.board, now) {
            Ok(applied) if applied == self.board => {
                tracing::debug!(command = kind, "board command had no effect");
                Change::Idle
            }
            Ok(applied) => {
                let next = match repositioned {
                    Some(task_id) => applied.touch_task(&task_id, now),
                    None => applied,
                };
                self.commit(next, kind);
                Change::Applied
            }
            Err(reason) => {
                tracing::debug!(command = kind, %reason, "board command left board unchanged");
                Change::Unchanged(reason)
            }
        }
    }

    /// Applies `command` only if the board is still at `expected_version`.
    ///
    /// # Errors
    ///
    /// Returns [`BoardEngineError::VersionConflict`] when another change
    /// has been applied since the caller read the board.
    pub fn execute_at(
        &mut self,
        expected_version: u64,
        command: BoardCommand,
    ) -> BoardEngineResult<Change> {
        if expected_version != self.version {
            tracing::warn!(
                command = command.kind(),
                expected = expected_version,
                current = self.version,
                "rejected board command based on a stale version"
            );
            return Err(BoardEngineError::VersionConflict {
                expected: expected_version,
                current: self.version,
            });
        }
        Ok(self.execute(command))
    }

    /// Adds `task` to the column named by its status.
    pub fn add_task(&mut self, task: Task) -> Change {
        self.execute(BoardCommand::AddTask(task))
    }

    /// Appends `column` to the board.
    pub fn add_column(&mut self, column: Column) -> Change {
        self.execute(BoardCommand::AddColumn(column))
    }

    /// Deletes a task.
    pub fn delete_task(&mut self, task_id: &TaskId) -> Change {
        self.execute(BoardCommand::DeleteTask(task_id.clone()))
    }

    /// Deletes a column and its tasks.
    pub fn delete_column(&mut self, column_id: &ColumnId) -> Change {
        self.execute(BoardCommand::DeleteColumn(column_id.clone()))
    }

    /// Moves a task between columns.
    pub fn move_task(
        &mut self,
        task_id: &TaskId,
        from: &ColumnId,
        to: &ColumnId,
        index: Option<usize>,
    ) -> Change {
        self.execute(BoardCommand::MoveTask {
            task_id: task_id.clone(),
            from: from.clone(),
            to: to.clone(),
            index,
        })
    }

    /// Reorders a task within its column.
    pub fn reorder_tasks(
        &mut self,
        column_id: &ColumnId,
        task_id: &TaskId,
        index: Option<usize>,
    ) -> Change {
        self.execute(BoardCommand::ReorderTasks {
            column_id: column_id.clone(),
            task_id: task_id.clone(),
            index,
        })
    }

    /// Edits a task's descriptive fields.
    pub fn edit_task(&mut self, task_id: &TaskId, edit: TaskEdit) -> Change {
        self.execute(BoardCommand::EditTask {
            task_id: task_id.clone(),
            edit,
        })
    }

    /// Creates a task at the end of `column_id` with a generated id.
    ///
    /// # Errors
    ///
    /// Returns [`BoardOperationError::ColumnNotFound`] (wrapped) when the
    /// column does not exist, or [`BoardOperationError::DuplicateTask`]
    /// when the generated id is already taken.
    pub fn create_task(
        &mut self,
        column_id: &ColumnId,
        details: TaskDetails,
    ) -> BoardEngineResult<TaskId> {
        if self.board.column(column_id).is_none() {
            return Err(BoardOperationError::ColumnNotFound(column_id.clone()).into());
        }
        let task_id = self.ids.next_task_id();
        if self.board.task(&task_id).is_some() {
            tracing::warn!(%task_id, "generated task id is already on the board");
            return Err(BoardOperationError::DuplicateTask(task_id).into());
        }
        let task = Task::new(task_id.clone(), column_id.clone(), details, &*self.clock);
        match self.add_task(task) {
            Change::Unchanged(reason) => Err(reason.into()),
            Change::Applied | Change::Idle => Ok(task_id),
        }
    }

    /// Creates an empty column with a generated id at the right-hand end.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyColumnTitle`] (wrapped) when the
    /// title is blank, or the operation error when the generated id
    /// collides with an existing column.
    pub fn create_column(&mut self, title: &str) -> BoardEngineResult<ColumnId> {
        let column_title = ColumnTitle::new(title)?;
        let column_id = self.ids.next_column_id();
        match self.add_column(Column::new(column_id.clone(), column_title)) {
            Change::Unchanged(reason) => Err(reason.into()),
            Change::Applied | Change::Idle => Ok(column_id),
        }
    }

    /// Starts a drag gesture for `task_id`, replacing any active one.
    ///
    /// # Errors
    ///
    /// Returns [`BoardOperationError::TaskNotFound`] when the task is not
    /// on the board.
    pub fn begin_drag(&mut self, task_id: &TaskId) -> Result<(), BoardOperationError> {
        let session = DragSession::begin(&self.board, task_id)?;
        if let Some(previous) = self.drag.replace(session) {
            tracing::debug!(task_id = %previous.task_id(), "abandoned unfinished drag gesture");
        }
        Ok(())
    }

    /// Handles a pointer move over `target` during a drag.
    pub fn drag_over(&mut self, target: &DragTarget) -> Change {
        let command = self
            .drag
            .as_ref()
            .and_then(|session| session.hover(&self.board, target));
        self.issue(command)
    }

    /// Ends the drag gesture with a drop over `target`.
    pub fn drop_drag(&mut self, target: Option<&DragTarget>) -> Change {
        let command = self
            .drag
            .take()
            .and_then(|session| session.drop_on(&self.board, target));
        self.issue(command)
    }

    /// Aborts the drag gesture, moving the task back to where it started.
    pub fn cancel_drag(&mut self) -> Change {
        let command = self
            .drag
            .take()
            .and_then(|session| session.cancel(&self.board));
        self.issue(command)
    }

    fn issue(&mut self, command: Option<BoardCommand>) -> Change {
        command.map_or(Change::Idle, |issued| self.execute(issued))
    }

    fn commit(&mut self, next: Board, kind: &'static str) {
        if self.config.verify_invariants
            && let Err(violation) = next.check_invariants()
        {
            tracing::error!(command = kind, %violation, "board invariant violated");
        }
        self.board = next;
        self.version = self.version.saturating_add(1);
        tracing::debug!(command = kind, version = self.version, "board command applied");
    }
}
