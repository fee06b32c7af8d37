//! When steps for board operation BDD scenarios.

use super::world::{BoardWorld, scenario_task};
use kanban_engine::board::domain::{ColumnId, DragTarget, TaskId};
use rstest_bdd_macros::when;

#[when(r#"task "{task_id}" is added to column "{column_id}""#)]
fn task_is_added(
    world: &mut BoardWorld,
    task_id: String,
    column_id: String,
) -> Result<(), eyre::Report> {
    let task = scenario_task(&task_id, &column_id)?;
    world.remember_board();
    world.last_change = Some(world.engine.add_task(task));
    Ok(())
}

#[when(r#"task "{task_id}" is deleted"#)]
fn task_is_deleted(world: &mut BoardWorld, task_id: String) {
    world.remember_board();
    world.last_change = Some(world.engine.delete_task(&TaskId::new(task_id)));
}

#[when(r#"task "{task_id}" is moved from "{from}" to "{to}" at index {index:usize}"#)]
fn task_is_moved(world: &mut BoardWorld, task_id: String, from: String, to: String, index: usize) {
    world.remember_board();
    world.last_change = Some(world.engine.move_task(
        &TaskId::new(task_id),
        &ColumnId::new(from),
        &ColumnId::new(to),
        Some(index),
    ));
}

#[when(r#"task "{task_id}" is reordered in column "{column_id}" to index {index:usize}"#)]
fn task_is_reordered(world: &mut BoardWorld, task_id: String, column_id: String, index: usize) {
    world.remember_board();
    world.last_change = Some(world.engine.reorder_tasks(
        &ColumnId::new(column_id),
        &TaskId::new(task_id),
        Some(index),
    ));
}

#[when(r#"task "{task_id}" is reordered in column "{column_id}" to a missing index"#)]
fn task_is_reordered_to_missing_index(world: &mut BoardWorld, task_id: String, column_id: String) {
    world.remember_board();
    world.last_change = Some(world.engine.reorder_tasks(
        &ColumnId::new(column_id),
        &TaskId::new(task_id),
        None,
    ));
}

#[when(r#"task "{task_id}" is dragged over column "{column_id}""#)]
fn task_is_dragged_over_column(
    world: &mut BoardWorld,
    task_id: String,
    column_id: String,
) -> Result<(), eyre::Report> {
    world.engine.begin_drag(&TaskId::new(task_id))?;
    world.remember_board();
    world.last_change = Some(
        world
            .engine
            .drag_over(&DragTarget::Column(ColumnId::new(column_id))),
    );
    Ok(())
}

#[when("the drag is cancelled")]
fn drag_is_cancelled(world: &mut BoardWorld) {
    world.remember_board();
    world.last_change = Some(world.engine.cancel_drag());
}
