//! Given steps for task analytics BDD scenarios.

use super::world::{AnalyticsWorld, noon, parse_day};
use rstest_bdd_macros::given;
use tasklens::analytics::domain::TaskState;

#[given(r#"today is "{day}""#)]
fn today_is(world: &mut AnalyticsWorld, day: String) -> Result<(), eyre::Report> {
    world.today = Some(parse_day(&day)?);
    Ok(())
}

#[given(r#"an open task #{number:u64} due "{day}""#)]
fn open_task_due(world: &mut AnalyticsWorld, number: u64, day: String) -> Result<(), eyre::Report> {
    let due = noon(parse_day(&day)?)?;
    let task = world.new_task(number, TaskState::Open)?.with_due_date(due);
    world.tasks.push(task);
    Ok(())
}

#[given(r#"a closed task #{number:u64} due "{day}""#)]
fn closed_task_due(
    world: &mut AnalyticsWorld,
    number: u64,
    day: String,
) -> Result<(), eyre::Report> {
    let due = noon(parse_day(&day)?)?;
    let task = world.new_task(number, TaskState::Closed)?.with_due_date(due);
    world.tasks.push(task);
    Ok(())
}

#[given(r#"an open task #{number:u64} with priority "{priority}""#)]
fn open_task_with_priority(
    world: &mut AnalyticsWorld,
    number: u64,
    priority: String,
) -> Result<(), eyre::Report> {
    let task = world.new_task(number, TaskState::Open)?.with_priority(priority);
    world.tasks.push(task);
    Ok(())
}

#[given("an open task #{number:u64} without priority")]
fn open_task_without_priority(world: &mut AnalyticsWorld, number: u64) -> Result<(), eyre::Report> {
    let task = world.new_task(number, TaskState::Open)?;
    world.tasks.push(task);
    Ok(())
}

#[given(r#"an open task #{number:u64} assigned to "{first}" and "{second}""#)]
fn open_task_with_two_assignees(
    world: &mut AnalyticsWorld,
    number: u64,
    first: String,
    second: String,
) -> Result<(), eyre::Report> {
    let task = world
        .new_task(number, TaskState::Open)?
        .with_assignees(vec![first, second]);
    world.tasks.push(task);
    Ok(())
}
