//! Serialisation tests for the flat board representation.

use super::support::board_with;
use crate::board::domain::{Board, DragTarget, TaskId};
use eyre::ensure;
use rstest::rstest;

#[rstest]
fn board_round_trips_through_its_flat_snapshot() -> eyre::Result<()> {
    let board = board_with(&[("Todo", &["a", "b"]), ("done", &["c"]), ("empty", &[])]);

    let rebuilt = Board::from_snapshot(board.to_snapshot())?;
    ensure!(rebuilt == board);
    Ok(())
}

#[rstest]
fn board_round_trips_through_json() -> eyre::Result<()> {
    let board = board_with(&[("Todo", &["a", "b"]), ("in-progress", &["c"])]);

    let json = serde_json::to_string(&board)?;
    let rebuilt: Board = serde_json::from_str(&json)?;
    ensure!(rebuilt == board);
    Ok(())
}

#[rstest]
fn json_uses_the_flat_camel_case_layout() -> eyre::Result<()> {
    let board = board_with(&[("Todo", &["a"])]);
    let value = serde_json::to_value(&board)?;

    ensure!(value["columns"][0]["taskIds"][0] == "a");
    ensure!(value["tasks"]["a"]["status"] == "Todo");
    ensure!(value["tasks"]["a"]["priority"] == "low");
    ensure!(value["tasks"]["a"]["createdAt"].is_string());
    ensure!(value["tasks"]["a"].get("assignee").is_none());
    Ok(())
}

#[rstest]
fn deserialising_an_inconsistent_board_fails() {
    let json = r#"{
        "columns": [{"id": "Todo", "title": "Todo", "taskIds": ["ghost"]}],
        "tasks": {}
    }"#;
    let result: Result<Board, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[rstest]
fn deserialising_a_blank_title_fails() {
    let json = r#"{
        "columns": [{"id": "Todo", "title": "   ", "taskIds": []}],
        "tasks": {}
    }"#;
    let result: Result<Board, _> = serde_json::from_str(json);
    assert!(result.is_err());
}

#[rstest]
fn drag_targets_serialise_with_a_type_tag() -> eyre::Result<()> {
    let target = DragTarget::Task(TaskId::new("a"));
    let json = serde_json::to_string(&target)?;
    ensure!(json == r#"{"type":"task","id":"a"}"#);
    ensure!(serde_json::from_str::<DragTarget>(&json)? == target);
    Ok(())
}
