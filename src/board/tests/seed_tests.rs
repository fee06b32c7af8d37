//! Tests for the sample board seed and id generators.

use super::support::creation_clock;
use crate::board::{
    adapters::{SampleBoardSeed, SequentialIdGenerator, UuidIdGenerator, default_columns},
    domain::ColumnId,
    ports::{BoardSeed, IdGenerator},
};
use eyre::ensure;
use rstest::rstest;

#[rstest]
fn default_columns_use_the_well_known_status_ids() {
    let ids: Vec<String> = default_columns()
        .iter()
        .map(|column| column.id().to_string())
        .collect();
    assert_eq!(ids, ["Todo", "in-progress", "review", "done"]);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(15)]
#[case(40)]
fn sample_board_satisfies_invariants(#[case] task_count: usize) -> eyre::Result<()> {
    let board = SampleBoardSeed::with_task_count(task_count, creation_clock()).initial_board();

    board.check_invariants()?;
    ensure!(board.task_count() == task_count);
    ensure!(board.columns().len() == 4);
    Ok(())
}

#[rstest]
fn sample_board_is_deterministic() {
    let first = SampleBoardSeed::new(creation_clock()).initial_board();
    let second = SampleBoardSeed::new(creation_clock()).initial_board();
    assert_eq!(first, second);
    assert_eq!(first.task_count(), 15);
}

#[rstest]
fn sample_tasks_carry_realistic_metadata() -> eyre::Result<()> {
    let now = creation_clock().0;
    let board = SampleBoardSeed::new(creation_clock()).initial_board();

    for task in board.tasks().values() {
        ensure!(task.created_at() < now);
        ensure!(task.updated_at() == now);
        ensure!(task.assignee().is_some());
        ensure!(task.tags().len() == 2);
        if let Some(due) = task.due_date() {
            ensure!(due > now);
        }
    }
    ensure!(board.tasks().values().any(|task| task.due_date().is_some()));
    ensure!(board.tasks().values().any(|task| task.due_date().is_none()));
    ensure!(!board.tasks_in(&ColumnId::new("done")).is_empty());
    Ok(())
}

#[rstest]
fn sequential_ids_count_tasks_and_columns_separately() {
    let ids = SequentialIdGenerator::new();
    assert_eq!(ids.next_task_id().as_str(), "task-1");
    assert_eq!(ids.next_task_id().as_str(), "task-2");
    assert_eq!(ids.next_column_id().as_str(), "column-1");

    let continuing = SequentialIdGenerator::starting_after(15);
    assert_eq!(continuing.next_task_id().as_str(), "task-16");
}

#[rstest]
fn uuid_ids_are_unique() {
    let ids = UuidIdGenerator;
    assert_ne!(ids.next_task_id(), ids.next_task_id());
    assert_ne!(ids.next_column_id(), ids.next_column_id());
}
