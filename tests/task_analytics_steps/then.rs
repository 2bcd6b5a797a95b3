//! Then steps for task analytics BDD scenarios.

use super::world::{AnalyticsWorld, StatsDigest};
use rstest_bdd_macros::then;

fn stats(world: &AnalyticsWorld) -> Result<&StatsDigest, eyre::Report> {
    world
        .last_stats
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing statistics in scenario world"))
}

fn group<'w>(world: &'w AnalyticsWorld, assignee: &str) -> Result<&'w [u64], eyre::Report> {
    world
        .assignee_groups
        .iter()
        .find(|(key, _)| key == assignee)
        .map(|(_, members)| members.as_slice())
        .ok_or_else(|| eyre::eyre!("no group for assignee {assignee}"))
}

#[then("{count:usize} tasks are overdue")]
fn tasks_are_overdue(world: &AnalyticsWorld, count: usize) -> Result<(), eyre::Report> {
    let found = stats(world)?.overdue.len();
    eyre::ensure!(found == count, "expected {count} overdue tasks, found {found}");
    Ok(())
}

#[then("the overdue list is #{first:u64} then #{second:u64}")]
fn overdue_list_order(world: &AnalyticsWorld, first: u64, second: u64) -> Result<(), eyre::Report> {
    let overdue = &stats(world)?.overdue;
    eyre::ensure!(
        overdue == &vec![first, second],
        "unexpected overdue order {overdue:?}"
    );
    Ok(())
}

#[then("{count:usize} tasks have no tech handoff ETA")]
fn tasks_missing_eta(world: &AnalyticsWorld, count: usize) -> Result<(), eyre::Report> {
    let found = stats(world)?.missing_eta;
    eyre::ensure!(found == count, "expected {count} ETA gaps, found {found}");
    Ok(())
}

#[then("the ETA gap holds {p0:usize} P0, {p1:usize} P1 and {rest:usize} unprioritized task")]
fn eta_gap_by_priority(
    world: &AnalyticsWorld,
    p0: usize,
    p1: usize,
    rest: usize,
) -> Result<(), eyre::Report> {
    let digest = stats(world)?;
    eyre::ensure!(
        digest.missing_eta_by_priority == (p0, p1, rest),
        "unexpected priority split {:?}",
        digest.missing_eta_by_priority
    );
    let (found_p0, found_p1, found_rest) = digest.missing_eta_by_priority;
    eyre::ensure!(found_p0 + found_p1 + found_rest == digest.missing_eta);
    Ok(())
}

#[then("every statistic is zero")]
fn every_statistic_is_zero(world: &AnalyticsWorld) -> Result<(), eyre::Report> {
    let digest = stats(world)?;
    let counts = [
        digest.total,
        digest.open,
        digest.closed,
        digest.missing_eta,
        digest.unassigned,
    ];
    eyre::ensure!(
        counts.iter().all(|count| *count == 0) && digest.overdue.is_empty(),
        "expected zeroed statistics, found {digest:?}"
    );
    eyre::ensure!(digest == &StatsDigest::default());
    Ok(())
}

#[then(r#"the groups "{first}" and "{second}" both contain task #{number:u64}"#)]
fn groups_contain_task(
    world: &AnalyticsWorld,
    first: String,
    second: String,
    number: u64,
) -> Result<(), eyre::Report> {
    for assignee in [&first, &second] {
        let members = group(world, assignee)?;
        eyre::ensure!(
            members.contains(&number),
            "group {assignee} lacks task #{number}"
        );
    }
    Ok(())
}

#[then("the total group membership is {count:usize}")]
fn total_group_membership(world: &AnalyticsWorld, count: usize) -> Result<(), eyre::Report> {
    let membership: usize = world
        .assignee_groups
        .iter()
        .map(|(_, members)| members.len())
        .sum();
    eyre::ensure!(membership == count, "expected {count} memberships, found {membership}");
    eyre::ensure!(world.tasks.len() == 1, "scenario expects a single task");
    Ok(())
}
