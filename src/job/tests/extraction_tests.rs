//! Unit tests for extraction prompt and response handling.

use crate::job::{
    adapters::extraction::{
        CannedTaskExtractor, parse_extraction_response, render_extraction_prompt,
    },
    domain::ExtractedTask,
    ports::{ExtractionError, TaskExtractor},
};
use rstest::rstest;

const TWO_TASKS: &str = r#"[
  {"id": "task-1", "description": "Book the venue", "priority": "high", "dependencies": []},
  {"id": "task-2", "description": "Send invites", "dependencies": ["task-1"]}
]"#;

fn expected_two_tasks() -> Vec<ExtractedTask> {
    vec![
        ExtractedTask::new("task-1", "Book the venue")
            .with_priority("high")
            .with_dependencies(Vec::<String>::new()),
        ExtractedTask::new("task-2", "Send invites").with_dependencies(["task-1"]),
    ]
}

#[rstest]
#[case::bare(TWO_TASKS.to_owned())]
#[case::json_fence(format!("```json\n{TWO_TASKS}\n```"))]
#[case::plain_fence(format!("```\n{TWO_TASKS}\n```"))]
#[case::padded(format!("\n\n  {TWO_TASKS}  \n"))]
fn parses_task_arrays(#[case] raw: String) {
    let parsed = parse_extraction_response(&raw).expect("valid response");
    assert_eq!(parsed, expected_two_tasks());
}

#[rstest]
fn missing_fields_are_left_for_validation() {
    let parsed = parse_extraction_response(r#"[{"description": "Orphan"}]"#)
        .expect("structurally valid response");

    assert_eq!(
        parsed,
        vec![ExtractedTask {
            description: Some("Orphan".to_owned()),
            ..ExtractedTask::default()
        }]
    );
}

#[rstest]
#[case::numeric_priority(r#"[{"id": "task-1", "description": "Book the venue", "priority": 3}]"#)]
#[case::null_priority(r#"[{"id": "task-1", "description": "Book the venue", "priority": null}]"#)]
#[case::string_dependencies(r#"[{"id": "task-1", "description": "Book the venue", "dependencies": "task-9"}]"#)]
#[case::mixed_dependencies(r#"[{"id": "task-1", "description": "Book the venue", "dependencies": ["task-9", 7, null]}]"#)]
#[case::object_dependencies(r#"[{"id": "task-1", "description": "Book the venue", "dependencies": {"task-9": true}}]"#)]
fn wrongly_typed_optional_fields_still_parse(#[case] raw: &str) {
    let parsed = parse_extraction_response(raw).expect("optional fields are tolerated");

    assert_eq!(parsed.len(), 1);
    let candidate = parsed.first().expect("one candidate");
    assert_eq!(candidate.id.as_deref(), Some("task-1"));
    assert_eq!(candidate.priority_label(), None);
}

#[rstest]
fn mixed_dependency_entries_keep_only_strings() {
    let parsed = parse_extraction_response(
        r#"[{"id": "task-2", "description": "Send invites", "dependencies": ["task-1", 7, "task-3"]}]"#,
    )
    .expect("valid response");

    let labels: Vec<&str> = parsed
        .first()
        .expect("one candidate")
        .dependency_labels()
        .collect();
    assert_eq!(labels, ["task-1", "task-3"]);
}

#[rstest]
#[case::object(r#"{"id": "task-1"}"#)]
#[case::not_json("Sure! Here are your tasks.")]
#[case::wrong_entry(r#"[42]"#)]
#[case::empty("")]
fn rejects_malformed_responses(#[case] raw: &str) {
    let result = parse_extraction_response(raw);
    assert!(
        matches!(result, Err(ExtractionError::MalformedResponse(_))),
        "unexpected result: {result:?}"
    );
}

#[rstest]
fn non_array_reports_shape() {
    assert_eq!(
        parse_extraction_response(r#"{"tasks": []}"#),
        Err(ExtractionError::MalformedResponse(
            "response is not a JSON array".to_owned()
        ))
    );
}

#[rstest]
fn prompt_embeds_transcript_and_priorities() {
    let prompt = render_extraction_prompt("Alice books the venue. Bob sends invites after.")
        .expect("prompt renders");

    assert!(prompt.contains("Alice books the venue. Bob sends invites after."));
    assert!(prompt.contains("low, medium, high, urgent"));
    assert!(prompt.ends_with("Bob sends invites after."));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn canned_extractor_parses_its_response() {
    let extractor = CannedTaskExtractor::from_response(format!("```json\n{TWO_TASKS}\n```"));

    let tasks = extractor.extract("ignored").await.expect("extraction succeeds");

    assert_eq!(tasks, expected_two_tasks());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn canned_extractor_replays_failures() {
    let error = ExtractionError::Upstream("service unavailable".to_owned());
    let extractor = CannedTaskExtractor::failing(error.clone());

    let result = extractor.extract("ignored").await;

    assert_eq!(result, Err(error));
    assert_eq!(
        ExtractionError::Upstream("service unavailable".to_owned()).to_string(),
        "failed to generate tasks: service unavailable"
    );
}
