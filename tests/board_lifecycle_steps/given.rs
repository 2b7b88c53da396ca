//! Given steps for board lifecycle BDD scenarios.

use super::world::{BoardWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskboard::{
    assignee::domain::NewAssignee,
    project::domain::NewProject,
    task::domain::{NewTask, TaskStatus},
};

#[given("an empty workspace")]
fn empty_workspace(world: &mut BoardWorld) {
    let _ = world;
}

#[given(r#"a project titled "{title}""#)]
fn project_titled(world: &mut BoardWorld, title: String) -> Result<(), eyre::Report> {
    let project = run_async(world.workspace.projects().create(NewProject::new(title)))
        .wrap_err("create project for board scenario")?;
    world.project = Some(project);
    Ok(())
}

#[given(r#"a task "{title}" in the project with status "{status}""#)]
fn task_in_project(
    world: &mut BoardWorld,
    title: String,
    status: String,
) -> Result<(), eyre::Report> {
    let project_id = world.project()?.id();
    let draft = NewTask::new(project_id, title).with_status(TaskStatus::parse(&status));
    let task = run_async(world.workspace.create_task(draft))
        .wrap_err("create task for board scenario")?;
    world.task = Some(task);
    Ok(())
}

#[given(r#"the task has been moved to "{status}""#)]
fn task_has_been_moved(world: &mut BoardWorld, status: String) -> Result<(), eyre::Report> {
    let id = world.task()?.id();
    let moved = run_async(
        world
            .workspace
            .tasks()
            .update_status(id, TaskStatus::parse(&status)),
    )
    .wrap_err("move task in scenario setup")?
    .ok_or_else(|| eyre::eyre!("task {id} disappeared during setup"))?;
    world.task = Some(moved);
    Ok(())
}

#[given(r#"an assignee "{name}" with email "{email}""#)]
fn existing_assignee(
    world: &mut BoardWorld,
    name: String,
    email: String,
) -> Result<(), eyre::Report> {
    run_async(world.workspace.assignees().create(NewAssignee::new(name, email)))
        .wrap_err("create assignee for board scenario")?;
    Ok(())
}
