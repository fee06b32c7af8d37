//! Given steps for board operation BDD scenarios.

use super::world::{BoardWorld, scenario_task};
use kanban_engine::board::domain::{Column, ColumnId, ColumnTitle};
use rstest_bdd_macros::given;

#[given(r#"a board with columns "{first}" and "{second}""#)]
fn board_with_columns(
    world: &mut BoardWorld,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    for column_id in [first, second] {
        let title = ColumnTitle::new(column_id.clone())?;
        let change = world
            .engine
            .add_column(Column::new(ColumnId::new(column_id), title));
        eyre::ensure!(change.is_applied(), "column setup failed: {change:?}");
    }
    Ok(())
}

#[given(r#"task "{task_id}" sits in column "{column_id}""#)]
fn task_sits_in_column(
    world: &mut BoardWorld,
    task_id: String,
    column_id: String,
) -> Result<(), eyre::Report> {
    let change = world
        .engine
        .add_task(scenario_task(&task_id, &column_id)?);
    eyre::ensure!(change.is_applied(), "task setup failed: {change:?}");
    Ok(())
}
