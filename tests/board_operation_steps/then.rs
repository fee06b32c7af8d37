//! Then steps for board operation BDD scenarios.

use super::world::BoardWorld;
use kanban_engine::board::{
    domain::{ColumnId, TaskId},
    services::Change,
};
use rstest_bdd_macros::then;

fn listed_ids(world: &BoardWorld, column_id: &str) -> Result<Vec<String>, eyre::Report> {
    let column = world
        .engine
        .board()
        .column(&ColumnId::new(column_id))
        .ok_or_else(|| eyre::eyre!("missing column {column_id}"))?;
    Ok(column
        .task_ids()
        .iter()
        .map(|task_id| task_id.as_str().to_owned())
        .collect())
}

#[then(r#"column "{column_id}" lists "{expected}""#)]
fn column_lists(
    world: &BoardWorld,
    column_id: String,
    expected: String,
) -> Result<(), eyre::Report> {
    let expected_ids: Vec<String> = expected.split(',').map(str::to_owned).collect();
    let actual = listed_ids(world, &column_id)?;
    if actual != expected_ids {
        return Err(eyre::eyre!(
            "expected column {column_id} to list {expected_ids:?}, found {actual:?}"
        ));
    }
    Ok(())
}

#[then(r#"column "{column_id}" is empty"#)]
fn column_is_empty(world: &BoardWorld, column_id: String) -> Result<(), eyre::Report> {
    let actual = listed_ids(world, &column_id)?;
    if !actual.is_empty() {
        return Err(eyre::eyre!(
            "expected column {column_id} to be empty, found {actual:?}"
        ));
    }
    Ok(())
}

#[then(r#"task "{task_id}" has status "{status}""#)]
fn task_has_status(
    world: &BoardWorld,
    task_id: String,
    status: String,
) -> Result<(), eyre::Report> {
    let task = world
        .engine
        .board()
        .task(&TaskId::new(task_id.as_str()))
        .ok_or_else(|| eyre::eyre!("missing task {task_id}"))?;
    if task.status().as_str() != status {
        return Err(eyre::eyre!(
            "expected task {task_id} to have status {status}, found {}",
            task.status()
        ));
    }
    Ok(())
}

#[then("the board invariants hold")]
fn board_invariants_hold(world: &BoardWorld) -> Result<(), eyre::Report> {
    world.engine.board().check_invariants()?;
    Ok(())
}

#[then("the last command left the board unchanged")]
fn last_command_left_board_unchanged(world: &BoardWorld) -> Result<(), eyre::Report> {
    let change = world
        .last_change
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing last command outcome"))?;
    if !matches!(change, Change::Unchanged(_)) {
        return Err(eyre::eyre!("expected an unchanged outcome, got {change:?}"));
    }
    let before = world
        .board_before_last_command
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing board snapshot"))?;
    if world.engine.board() != before {
        return Err(eyre::eyre!("board changed despite the unchanged outcome"));
    }
    Ok(())
}
