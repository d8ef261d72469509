//! When steps for task completion BDD scenarios.

use super::world::{CompletionWorld, run_async};
use eyre::WrapErr;
use insightboard::job::domain::TaskKey;
use rstest_bdd_macros::when;

#[when(r#"the transcript "{transcript}" is submitted and processed"#)]
fn submit_and_process(world: &mut CompletionWorld, transcript: String) -> Result<(), eyre::Report> {
    let service = world.build_service()?;
    let submitted =
        run_async(service.submit(&transcript)).wrap_err("submit transcript in scenario")?;
    let job = run_async(service.process(submitted.job().id()))
        .wrap_err("process job in scenario")?;

    world.job_id = Some(job.id());
    world.cycle_report = job.cycle_report().clone();
    world.tasks = job.tasks().to_vec();
    world.service = Some(service);
    Ok(())
}

#[when(r#"task "{id}" is completed"#)]
fn complete_task(world: &mut CompletionWorld, id: String) -> Result<(), eyre::Report> {
    let service = world
        .service
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing service in scenario world"))?;
    let job_id = world
        .job_id
        .ok_or_else(|| eyre::eyre!("missing job in scenario world"))?;
    let task_id = TaskKey::new(&id)?;

    let result = run_async(service.complete_task(job_id, &task_id));
    if let Ok(ref updated) = result {
        world.tasks.clone_from(updated);
    }
    world.last_completion = Some(result);
    Ok(())
}
