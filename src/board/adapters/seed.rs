//! Deterministic sample board used to bootstrap a presentation layer.

use chrono::Duration;
use mockable::Clock;

use crate::board::{
    domain::{
        Board, Column, ColumnId, ColumnTitle, PersistedTaskData, Priority, Tag, Task, TaskId,
        TaskTitle,
    },
    ports::BoardSeed,
};

const DEFAULT_TASK_COUNT: usize = 15;

const DEFAULT_COLUMNS: [(&str, &str); 4] = [
    ("Todo", "Todo"),
    ("in-progress", "In Progress"),
    ("review", "Review"),
    ("done", "Done"),
];

const TITLES: [&str; 10] = [
    "Implement user authentication",
    "Design landing page",
    "Fix bug in payment flow",
    "Add dark mode support",
    "Optimize database queries",
    "Write API documentation",
    "Setup CI/CD pipeline",
    "Create mobile responsive layout",
    "Add unit tests",
    "Refactor legacy code",
];

const ASSIGNEES: [&str; 5] = ["Alice", "Bob", "Charlie", "Diana", "Eve"];

const TAGS: [&str; 6] = ["frontend", "backend", "design", "bug", "feature", "urgent"];

const PRIORITIES: [Priority; 5] = [
    Priority::Medium,
    Priority::Low,
    Priority::High,
    Priority::Urgent,
    Priority::Medium,
];

const CREATED_DAYS_AGO: [i64; 7] = [1, 3, 6, 10, 15, 22, 29];

const DUE_IN_DAYS: [i64; 5] = [2, 4, 7, 10, 14];

/// Returns the four well-known columns: `Todo`, `in-progress`, `review`
/// and `done`, all empty.
#[must_use]
pub fn default_columns() -> Vec<Column> {
    DEFAULT_COLUMNS
        .iter()
        .filter_map(|(id, title)| {
            ColumnTitle::new(*title)
                .ok()
                .map(|valid| Column::new(ColumnId::new(*id), valid))
        })
        .collect()
}

/// Seed provider producing the default columns and a fixed set of sample
/// tasks spread across them.
///
/// Task `n` is named `task-n`. Creation times fall within the previous 30
/// days and every other task is due within the next 14 days.
#[derive(Debug, Clone)]
pub struct SampleBoardSeed<C: Clock> {
    task_count: usize,
    clock: C,
}

impl<C: Clock> SampleBoardSeed<C> {
    /// Creates a seed with the default number of sample tasks.
    #[must_use]
    pub const fn new(clock: C) -> Self {
        Self::with_task_count(DEFAULT_TASK_COUNT, clock)
    }

    /// Creates a seed with `task_count` sample tasks.
    #[must_use]
    pub const fn with_task_count(task_count: usize, clock: C) -> Self {
        Self { task_count, clock }
    }

    fn sample_task(&self, index: usize) -> Option<Task> {
        let ordinal = index.saturating_add(1);
        let now = self.clock.utc();
        let title = TaskTitle::new(format!("{} {ordinal}", pick(&TITLES, index)?)).ok()?;
        let (status, _) = pick(&DEFAULT_COLUMNS, index)?;
        let tags = [pick(&TAGS, index)?, pick(&TAGS, index.saturating_add(3))?]
            .into_iter()
            .filter_map(|tag| Tag::new(tag).ok())
            .collect();
        let due_date = if index & 1 == 0 {
            Some(now + Duration::days(pick(&DUE_IN_DAYS, index)?))
        } else {
            None
        };

        Some(Task::from_persisted(PersistedTaskData {
            id: TaskId::new(format!("task-{ordinal}")),
            title,
            description: format!(
                "This is a detailed description for task {ordinal}. It includes information \
                 about requirements, implementation details, and acceptance criteria."
            ),
            status: ColumnId::new(status),
            priority: pick(&PRIORITIES, index)?,
            assignee: Some(pick(&ASSIGNEES, index)?.to_owned()),
            tags,
            due_date,
            created_at: now - Duration::days(pick(&CREATED_DAYS_AGO, index)?),
            updated_at: now,
        }))
    }
}

impl<C: Clock> BoardSeed for SampleBoardSeed<C> {
    fn initial_board(&self) -> Board {
        let with_columns = default_columns()
            .into_iter()
            .fold(Board::empty(), |board, column| board.add_column(column));

        (0..self.task_count)
            .filter_map(|index| self.sample_task(index))
            .fold(with_columns, |board, task| board.add_task(task))
    }
}

/// Cycles through `items`, returning the entry for the `index`-th draw.
fn pick<T: Copy>(items: &[T], index: usize) -> Option<T> {
    items.iter().copied().cycle().nth(index)
}
