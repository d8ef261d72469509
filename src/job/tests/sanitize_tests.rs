//! Unit tests for dependency sanitization.

use crate::job::{
    domain::JobDomainError,
    graph::{DanglingDependency, ensure_unique_ids, sanitize},
};
use rstest::rstest;
use std::collections::HashSet;

use super::graph_fixtures::{key, task};

#[rstest]
fn removes_unknown_dependencies_and_reports_each() {
    let tasks = vec![
        task("task-1", &[]),
        task("task-2", &["task-1", "task-99", "task-1"]),
        task("task-3", &["ghost", "task-2"]),
    ];

    let sanitized = sanitize(&tasks);

    let dependencies: Vec<_> = sanitized
        .tasks
        .iter()
        .map(|t| t.dependencies().to_vec())
        .collect();
    assert_eq!(
        dependencies,
        vec![
            vec![],
            vec![key("task-1"), key("task-1")],
            vec![key("task-2")],
        ]
    );
    assert_eq!(
        sanitized.diagnostics,
        vec![
            DanglingDependency {
                task_id: key("task-2"),
                dependency_id: key("task-99"),
            },
            DanglingDependency {
                task_id: key("task-3"),
                dependency_id: key("ghost"),
            },
        ]
    );
}

#[rstest]
fn keeps_self_references() {
    let tasks = vec![task("loop", &["loop"])];

    let sanitized = sanitize(&tasks);

    assert_eq!(sanitized.tasks, tasks);
    assert!(sanitized.diagnostics.is_empty());
}

#[rstest]
fn leaves_input_untouched() {
    let tasks = vec![task("a", &["missing"])];
    let before = tasks.clone();

    let _sanitized = sanitize(&tasks);

    assert_eq!(tasks, before);
}

#[rstest]
#[case(vec![])]
#[case(vec![task("a", &[])])]
#[case(vec![task("a", &["b", "x"]), task("b", &["y", "a"])])]
#[case(vec![task("a", &["a", "z"]), task("b", &["a", "a", "q"]), task("c", &["b"])])]
fn sanitizing_twice_changes_nothing_more(#[case] tasks: Vec<crate::job::domain::Task>) {
    let once = sanitize(&tasks);
    let twice = sanitize(&once.tasks);

    assert_eq!(twice.tasks, once.tasks);
    assert!(twice.diagnostics.is_empty());
}

#[rstest]
#[case(vec![task("a", &["b", "x"]), task("b", &["y", "a"])])]
#[case(vec![task("a", &["a", "z"]), task("b", &["a", "a", "q"]), task("c", &["b", "d"])])]
fn every_surviving_dependency_resolves(#[case] tasks: Vec<crate::job::domain::Task>) {
    let sanitized = sanitize(&tasks);
    let ids: HashSet<_> = sanitized.tasks.iter().map(|t| t.id().clone()).collect();

    assert!(
        sanitized
            .tasks
            .iter()
            .flat_map(|t| t.dependencies())
            .all(|dependency| ids.contains(dependency))
    );
}

#[rstest]
fn diagnostic_renders_owner_and_dependency() {
    let diagnostic = DanglingDependency {
        task_id: key("task-2"),
        dependency_id: key("task-99"),
    };
    assert_eq!(
        diagnostic.to_string(),
        "removed invalid dependency task-99 from task task-2"
    );
}

#[rstest]
fn unique_ids_pass() {
    let tasks = vec![task("a", &[]), task("b", &["a"])];
    assert_eq!(ensure_unique_ids(&tasks), Ok(()));
}

#[rstest]
fn duplicate_ids_are_rejected() {
    let tasks = vec![task("a", &[]), task("b", &[]), task("a", &["b"])];
    assert_eq!(
        ensure_unique_ids(&tasks),
        Err(JobDomainError::DuplicateTaskId(key("a")))
    );
}
