//! Shared builders for board unit tests.

use chrono::{DateTime, Local, TimeZone, Utc};
use mockable::Clock;

use crate::board::domain::{Board, Column, ColumnId, ColumnTitle, Task, TaskDetails, TaskId};

/// Clock pinned to a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    pub fn at(year: i32, month: u32, day: u32) -> Self {
        Self(
            Utc.with_ymd_and_hms(year, month, day, 9, 0, 0)
                .single()
                .expect("valid fixed instant"),
        )
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

pub fn creation_clock() -> FixedClock {
    FixedClock::at(2026, 3, 1)
}

pub fn task(id: &str, status: &str) -> Task {
    Task::new(
        TaskId::new(id),
        ColumnId::new(status),
        TaskDetails::new(format!("Task {id}")).expect("valid title"),
        &creation_clock(),
    )
}

pub fn column(id: &str) -> Column {
    Column::new(
        ColumnId::new(id),
        ColumnTitle::new(format!("Column {id}")).expect("valid column title"),
    )
}

/// Builds a valid board from `(column id, task ids)` pairs.
pub fn board_with(layout: &[(&str, &[&str])]) -> Board {
    let columns = layout
        .iter()
        .map(|(column_id, task_ids)| {
            column(column_id).with_task_ids(task_ids.iter().map(|id| TaskId::new(*id)))
        })
        .collect();
    let tasks = layout.iter().flat_map(|(column_id, task_ids)| {
        task_ids.iter().map(move |id| task(id, column_id))
    });
    Board::new(columns, tasks).expect("valid test board")
}

pub fn ids(column: &Column) -> Vec<&str> {
    column.task_ids().iter().map(TaskId::as_str).collect()
}

pub fn column_ids(board: &Board, column_id: &str) -> Vec<String> {
    board
        .column(&ColumnId::new(column_id))
        .map(|found| ids(found).into_iter().map(str::to_owned).collect())
        .unwrap_or_default()
}
