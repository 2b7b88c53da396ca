//! When steps for board lifecycle BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::when;
use taskboard::{
    assignee::domain::NewAssignee,
    board::{Column, DropOutcome},
    task::domain::{NewTask, TaskStatus},
};

fn column_named(name: &str) -> Result<Column, eyre::Report> {
    Column::ALL
        .into_iter()
        .find(|column| column.id() == name)
        .ok_or_else(|| eyre::eyre!("unknown column '{name}' in scenario"))
}

#[when(r#"the task is moved to "{status}""#)]
fn move_task(world: &mut BoardWorld, status: String) -> Result<(), eyre::Report> {
    let id = world.task()?.id();
    let moved = run_async(
        world
            .workspace
            .tasks()
            .update_status(id, TaskStatus::parse(&status)),
    )
    .wrap_err("move task")?
    .ok_or_else(|| eyre::eyre!("task {id} not found"))?;
    world.task = Some(moved);
    Ok(())
}

#[when(r#"the task is dropped onto the "{column}" column"#)]
fn drop_task(world: &mut BoardWorld, column: String) -> Result<(), eyre::Report> {
    let column = column_named(&column)?;
    let id = world.task()?.id();
    let project_id = world.project()?.id();
    let tasks = world.workspace.tasks();

    let mut cache = run_async(world.workspace.board_cache(project_id))
        .wrap_err("load board cache")?;
    let outcome = run_async(cache.apply_drop(tasks, id, column)).wrap_err("drop task")?;
    if let DropOutcome::Moved(ref task) = outcome {
        world.task = Some(task.clone());
    }
    world.drop_outcome = Some(outcome);
    Ok(())
}

#[when(r#"a task titled "{title}" is created in the project"#)]
fn create_titled_task(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let result = run_async(world.workspace.tasks().create(NewTask::new(project_id, title)));
    world.create_result = Some(result);
    Ok(())
}

#[when(r#"an assignee "{name}" with email "{email}" is added"#)]
fn add_assignee(world: &mut BoardWorld, name: String, email: String) {
    let result = run_async(world.workspace.assignees().create(NewAssignee::new(name, email)));
    world.assignee_result = Some(result.map(|_| ()));
}
