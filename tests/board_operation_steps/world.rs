//! Shared world state for board operation BDD scenarios.

use std::sync::Arc;

use kanban_engine::board::{
    adapters::SequentialIdGenerator,
    domain::{Board, ColumnId, Task, TaskDetails, TaskId},
    services::{BoardEngine, Change},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Engine type used by the BDD world.
pub type TestBoardEngine = BoardEngine<DefaultClock, SequentialIdGenerator>;

/// Scenario world for board behaviour tests.
pub struct BoardWorld {
    pub engine: TestBoardEngine,
    pub board_before_last_command: Option<Board>,
    pub last_change: Option<Change>,
}

impl BoardWorld {
    /// Creates a world holding an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            engine: BoardEngine::new(
                Board::empty(),
                Arc::new(DefaultClock),
                Arc::new(SequentialIdGenerator::new()),
            ),
            board_before_last_command: None,
            last_change: None,
        }
    }

    /// Records the board as it was before a command under test.
    pub fn remember_board(&mut self) {
        self.board_before_last_command = Some(self.engine.board().clone());
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Builds a task with a title derived from its id.
///
/// # Errors
///
/// Returns an error if the derived title fails validation.
pub fn scenario_task(task_id: &str, column_id: &str) -> Result<Task, eyre::Report> {
    let details = TaskDetails::new(format!("Scenario task {task_id}"))?;
    Ok(Task::new(
        TaskId::new(task_id),
        ColumnId::new(column_id),
        details,
        &DefaultClock,
    ))
}
