//! Integration tests for the escalation chain
//!
//! Exercises the full definition-file → chain → submit → trace flow and the
//! routing properties the chain guarantees.

use patterns::escalation::{
    ChainConfig, ChainConfigError, EscalationChain, Outcome, Request, StepVerdict,
};

fn reference_chain() -> EscalationChain {
    EscalationChain::from_pairs([("A", 10), ("B", 100), ("C", 1000)])
}

/// Test: every level at or below the maximum threshold lands on the first
/// sufficient handler, everything above is unhandled — swept exhaustively.
#[test]
fn routing_matches_the_first_sufficient_handler_for_every_level() {
    let chain = reference_chain();
    let thresholds = [("A", 10u32), ("B", 100), ("C", 1000)];

    for level in 0..=1001u32 {
        let expected = thresholds
            .iter()
            .find(|(_, capability)| *capability >= level)
            .map(|(name, _)| Outcome::HandledBy {
                handler: name.to_string(),
            })
            .unwrap_or(Outcome::Unhandled);

        let actual = chain.submit(&Request::new("sweep", level));
        assert_eq!(actual, expected, "level {level}");
    }
}

/// Test: the worked example from the component contract
#[test]
fn worked_example_routes_as_documented() {
    let chain = reference_chain();

    let cases = [
        (5u32, Some("A")),
        (90, Some("B")),
        (999, Some("C")),
        (5000, None),
    ];
    for (level, expected) in cases {
        let outcome = chain.submit(&Request::new("example", level));
        match expected {
            Some(name) => assert_eq!(
                outcome,
                Outcome::HandledBy {
                    handler: name.to_string()
                }
            ),
            None => assert_eq!(outcome, Outcome::Unhandled),
        }
    }
}

/// Test: a chain of length zero is unhandled for every request
#[test]
fn empty_chain_never_handles() {
    let chain = EscalationChain::new();
    for level in [0u32, 1, 1000, u32::MAX] {
        assert_eq!(chain.submit(&Request::new("any", level)), Outcome::Unhandled);
    }
}

/// Test: resubmitting against an unmodified chain is idempotent,
/// in outcome and in decision path
#[test]
fn resubmission_yields_identical_outcome_and_path() {
    let chain = reference_chain();
    let request = Request::new("repeat", 999);

    let first = chain.submit_traced(&request);
    let second = chain.submit_traced(&request);

    assert_eq!(first.outcome, second.outcome);
    assert_eq!(first.trace.steps, second.trace.steps);
}

/// Test: a chain loaded from a definition file routes identically to the
/// same chain built programmatically
#[test]
fn definition_file_round_trip_preserves_routing() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("chain.toml");
    std::fs::write(
        &path,
        r#"
[[handlers]]
name = "A"
capability = 10

[[handlers]]
name = "B"
role = "shift manager"
capability = 100

[[handlers]]
name = "C"
capability = 1000
"#,
    )
    .expect("write chain definition");

    let loaded = ChainConfig::load(&path).expect("load definition").into_chain();
    let programmatic = reference_chain();

    for level in [5u32, 10, 11, 90, 100, 999, 1000, 1001, 5000] {
        let request = Request::new("round trip", level);
        assert_eq!(
            loaded.submit(&request),
            programmatic.submit(&request),
            "level {level}"
        );
    }
}

/// Test: a rejected definition never produces a chain
#[test]
fn invalid_definition_files_are_typed_errors() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("bad.toml");
    std::fs::write(
        &path,
        "[[handlers]]\nname = \"A\"\ncapability = 10\n\n[[handlers]]\nname = \"A\"\ncapability = 20\n",
    )
    .expect("write chain definition");

    let err = ChainConfig::load(&path).unwrap_err();
    assert!(matches!(err, ChainConfigError::DuplicateName { .. }));
}

/// Test: the trace narrates exactly the handlers consulted, in order
#[test]
fn trace_narrates_the_forward_walk() {
    let chain = reference_chain();
    let submission = chain.submit_traced(&Request::new("bulk catering order", 90));

    let names: Vec<&str> = submission
        .trace
        .steps
        .iter()
        .map(|s| s.handler.as_str())
        .collect();
    assert_eq!(names, vec!["A", "B"]);
    assert_eq!(
        submission.trace.steps.last().unwrap().verdict,
        StepVerdict::Accepted
    );

    let rendered = submission.trace.to_string();
    assert!(rendered.contains("bulk catering order"));
    assert!(rendered.ends_with("outcome: handled by B"));
}

/// Test: traces serialize to JSON for log consumers
#[test]
fn trace_json_carries_outcome_and_steps() {
    let chain = reference_chain();
    let submission = chain.submit_traced(&Request::new("impossible", 5000));

    let json = serde_json::to_value(&submission.trace).expect("serialize trace");
    assert_eq!(json["outcome"], "unhandled");
    assert_eq!(json["steps"].as_array().unwrap().len(), 3);
    assert_eq!(json["steps"][2]["verdict"], "exhausted");
}
