//! Then steps for task completion BDD scenarios.

use super::world::CompletionWorld;
use insightboard::job::{domain::TaskStatus, services::JobProcessingError};
use rstest_bdd_macros::then;

#[then(r#"task "{id}" is "{status}""#)]
fn task_status_is(world: &CompletionWorld, id: String, status: String) -> Result<(), eyre::Report> {
    let expected = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let task = world.task(&id)?;

    if task.status() != expected {
        return Err(eyre::eyre!(
            "expected task {id} to be {expected}, found {}",
            task.status()
        ));
    }
    Ok(())
}

#[then(r#"task "{id}" has error "{message}""#)]
fn task_has_error(world: &CompletionWorld, id: String, message: String) -> Result<(), eyre::Report> {
    let task = world.task(&id)?;

    if task.error_message() != Some(message.as_str()) {
        return Err(eyre::eyre!(
            "expected task {id} to carry {message:?}, found {:?}",
            task.error_message()
        ));
    }
    Ok(())
}

#[then("the job reports one cycle")]
fn job_reports_one_cycle(world: &CompletionWorld) -> Result<(), eyre::Report> {
    expect_cycle_count(world, 1)
}

#[then("the job reports no cycles")]
fn job_reports_no_cycles(world: &CompletionWorld) -> Result<(), eyre::Report> {
    expect_cycle_count(world, 0)
}

#[then("the job reports {count:usize} cycles")]
fn job_reports_cycles(world: &CompletionWorld, count: usize) -> Result<(), eyre::Report> {
    expect_cycle_count(world, count)
}

fn expect_cycle_count(world: &CompletionWorld, count: usize) -> Result<(), eyre::Report> {
    let found = world.cycle_report.cycles().len();
    if found != count {
        return Err(eyre::eyre!(
            "expected {count} cycle(s), found {found}: {:?}",
            world.cycle_report.cycle_details()
        ));
    }
    Ok(())
}

#[then("the completion fails with a not found error")]
fn completion_fails_with_not_found(world: &CompletionWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_completion
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing completion result"))?;

    if !matches!(result, Err(JobProcessingError::TaskNotFound { .. })) {
        return Err(eyre::eyre!("expected TaskNotFound error, got {result:?}"));
    }
    Ok(())
}
