//! Given steps for task completion BDD scenarios.

use super::world::CompletionWorld;
use insightboard::job::domain::ExtractedTask;
use rstest_bdd_macros::given;

#[given(r#"task "{id}" with no dependencies"#)]
fn task_without_dependencies(world: &mut CompletionWorld, id: String) {
    let description = format!("Work on {id}");
    world.candidates.push(ExtractedTask::new(id, description));
}

#[given(r#"task "{id}" depending on "{dependency}""#)]
fn task_with_dependency(world: &mut CompletionWorld, id: String, dependency: String) {
    let description = format!("Work on {id}");
    world
        .candidates
        .push(ExtractedTask::new(id, description).with_dependencies([dependency]));
}
