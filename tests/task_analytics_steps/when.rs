//! When steps for task analytics BDD scenarios.

use super::world::{AnalyticsWorld, StatsDigest};
use rstest_bdd_macros::when;
use tasklens::analytics::domain::{calculate_stats, group_by_assignee};

#[when("the task statistics are calculated")]
fn calculate(world: &mut AnalyticsWorld) -> Result<(), eyre::Report> {
    let reference = world.reference()?;
    let stats = calculate_stats(&world.tasks, &reference);
    let by_priority = &stats.no_tech_handoff_eta_by_priority;

    world.last_stats = Some(StatsDigest {
        total: stats.total,
        open: stats.open,
        closed: stats.closed,
        overdue: stats
            .overdue_list
            .iter()
            .map(|task| task.number().value())
            .collect(),
        missing_eta: stats.no_tech_handoff_eta,
        missing_eta_by_priority: (by_priority.p0, by_priority.p1, by_priority.no_priority),
        unassigned: stats.unassigned,
    });
    Ok(())
}

#[when("the tasks are grouped by assignee")]
fn group_assignees(world: &mut AnalyticsWorld) {
    world.assignee_groups = group_by_assignee(&world.tasks)
        .into_iter()
        .map(|(assignee, members)| {
            let numbers = members.iter().map(|task| task.number().value()).collect();
            (assignee, numbers)
        })
        .collect();
}
