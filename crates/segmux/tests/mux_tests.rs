//! Integration tests for segmux
//!
//! Tests are organized by feature area and cover:
//! - Segment classification and shape predicates
//! - Classic (regex-backed) templates
//! - Functional (predicate-backed) templates
//! - Length handling and partial captures
//! - Priority ranking
//! - Concurrent reuse of a compiled template

use pretty_assertions::assert_eq;
use rstest::rstest;
use segmux::*;
use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn params(pairs: &[(&str, &str)]) -> Params {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

// ============================================================================
// Classification
// ============================================================================

#[rstest]
#[case("name")]
#[case("users")]
#[case("v2")]
#[case("snake_case_42")]
fn test_word_literals_classify_to_themselves(#[case] segment: &str) {
    let kind = classify_segment(segment).unwrap();
    assert_eq!(kind.name(), segment);
    assert_eq!(kind.constraint(), segment);
    assert!(!kind.is_param());
}

#[rstest]
#[case(":name", true)]
#[case(":id", true)]
#[case("name", false)]
#[case("id", false)]
#[case("", false)]
fn test_has_pick(#[case] segment: &str, #[case] expected: bool) {
    assert_eq!(has_pick(segment), expected);
}

#[rstest]
#[case(r"{id:[\d+]}", true)]
#[case(":id", true)]
#[case("id", false)]
#[case(r"/admin/{id:[\d+]}", true)]
#[case("/admin/:id", true)]
#[case("/admin/id", false)]
fn test_has_param(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(has_param(input), expected);
}

#[test]
fn test_has_key_param_excludes_loose_params() {
    assert!(has_key_param(r"/admin/{id:[\d+]}"));
    assert!(!has_key_param("/admin/:id"));
}

// ============================================================================
// Classic templates
// ============================================================================

#[test]
fn test_classic_constrained_round_trip() {
    init_tracing();
    let mux = Mux::classic(r"/name/{id:[\d+]}").unwrap();

    let hit = mux.validate("/name/12", false);
    assert_eq!(hit.matched, true);
    assert_eq!(hit.params, params(&[("id", "12")]));

    let miss = mux.validate("/name/abc", false);
    assert_eq!(miss.matched, false);
    assert_eq!(miss.params, HashMap::new());
}

#[test]
fn test_classic_loose_round_trip() {
    init_tracing();
    let mux = Mux::classic("/name/:id").unwrap();

    assert_eq!(
        mux.validate("/name/12", false),
        Validation {
            matched: true,
            params: params(&[("id", "12")]),
        }
    );
    assert_eq!(
        mux.validate("/name/12/extra", false),
        Validation {
            matched: true,
            params: params(&[("id", "12")]),
        }
    );
    assert_eq!(mux.validate("/name/12/extra", true), Validation::default());
}

#[test]
fn test_classic_multiple_params() {
    let mux = Mux::classic(r"/name/{id:[\d+]}/log/{date:[\w+]}").unwrap();
    let result = mux.validate("/name/7/log/today", true);
    assert!(result.matched);
    assert_eq!(result.params, params(&[("id", "7"), ("date", "today")]));
}

#[test]
fn test_literal_segments_are_not_captured() {
    let mux = Mux::classic("/name/:id").unwrap();
    let result = mux.validate("/name/9", true);
    assert_eq!(result.params.len(), 1);
    assert!(!result.params.contains_key("name"));
}

#[test]
fn test_trailing_slash_is_a_segment() {
    let mux = Mux::classic("/name/:id/").unwrap();
    assert_eq!(mux.len(), 4);
    assert!(mux.validate("/name/1/", true).matched);
    assert!(!mux.validate("/name/1", true).matched);
}

#[rstest]
#[case("/ok/{id}")]
#[case(r"/ok/{id:\d+}")]
#[case(r"/ok/{:[\d+]}")]
fn test_malformed_templates(#[case] template: &str) {
    let err = Mux::classic(template).unwrap_err();
    assert!(matches!(err, PatternError::MalformedPattern { .. }));
}

#[test]
fn test_invalid_constraint_template() {
    let err = Mux::classic("/ok/{id:[a{2,1}]}").unwrap_err();
    assert!(matches!(err, PatternError::InvalidConstraint { .. }));
}

// ============================================================================
// Functional templates
// ============================================================================

#[test]
fn test_functional_numeric_validator() {
    init_tracing();
    let mut validators = Validators::new();
    validators.insert(
        "id".to_string(),
        validator(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())),
    );
    let mux = Mux::functional("/name/id", &validators);

    assert_eq!(
        mux.validate("/name/2", false),
        Validation {
            matched: true,
            params: params(&[("id", "2")]),
        }
    );
    assert_eq!(mux.validate("/name/x", false), Validation::default());
}

#[test]
fn test_functional_validator_sees_raw_segment() {
    let mut validators = Validators::new();
    validators.insert("slug".to_string(), validator(|s| s.contains('-')));
    let mux = Mux::functional("/posts/slug", &validators);

    let result = mux.validate("/posts/hello-world", true);
    assert_eq!(result.get("slug"), Some("hello-world"));
}

// ============================================================================
// Length handling and partial captures
// ============================================================================

#[test]
fn test_short_candidate_reports_index_mismatch() {
    let mux = Mux::classic("/a/:b/:c").unwrap();

    let result = mux.validate("/a/x", false);
    assert!(!result.matched);
    assert_eq!(result.params, params(&[("b", "x")]));

    assert_eq!(
        mux.try_match("/a/x", false),
        Err(MatchError::IndexMismatch {
            position: 3,
            available: 3,
        })
    );
}

#[test]
fn test_capture_policy_from_toml() {
    let options = MatchOptions::from_toml_str(
        r#"
        [matching]
        capture_policy = "clear_on_failure"
        "#,
    )
    .unwrap();
    let mux = Mux::classic("/a/:b/:c").unwrap();

    let result = mux.validate_with("/a/x", &options);
    assert!(!result.matched);
    assert!(result.params.is_empty());
}

#[test]
fn test_strict_length_never_returns_captures() {
    let mux = Mux::classic("/:a/:b").unwrap();
    assert_eq!(mux.validate("/x", true), Validation::default());
    assert_eq!(mux.validate("/x/y/z", true), Validation::default());
}

// ============================================================================
// Priority
// ============================================================================

#[rstest]
#[case("/name/id", 0)]
#[case(r"/name/{id:[\d+]}", 1)]
#[case("/name/:id", 2)]
#[case(r"/:org/{id:[\d+]}", 2)]
#[case(r"/{org:[\w+]}/:id", 1)]
fn test_priority_rank(#[case] template: &str, #[case] rank: u8) {
    assert_eq!(check_priority(template).rank(), rank);
}

#[test]
fn test_sorting_by_priority() {
    let mut templates = vec!["/name/:id", "/name/id", r"/name/{id:[\d+]}"];
    templates.sort_by_key(|t| check_priority(t));
    assert_eq!(templates, vec!["/name/id", r"/name/{id:[\d+]}", "/name/:id"]);
}

// ============================================================================
// Reuse
// ============================================================================

#[test]
fn test_repeated_validation_is_idempotent() {
    let mux = Mux::classic(r"/name/{id:[\d+]}").unwrap();
    let first = mux.validate("/name/12", false);
    for _ in 0..10 {
        assert_eq!(mux.validate("/name/12", false), first);
    }
}

#[test]
fn test_shared_across_threads() {
    let mux = Arc::new(Mux::classic("/users/:id").unwrap());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let mux = Arc::clone(&mux);
            thread::spawn(move || {
                let path = format!("/users/{}", i);
                mux.validate(&path, true)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().unwrap();
        assert!(result.matched);
        assert_eq!(result.get("id"), Some(i.to_string().as_str()));
    }
}

// ============================================================================
// Path utilities
// ============================================================================

#[test]
fn test_clean_and_split_helpers() {
    assert_eq!(clean_path("name//./12/"), "/name/12/");
    assert_eq!(split_and_trim_prefix("/name/../users/1"), vec!["users", "1"]);
    assert_eq!(collapse_slashes("/name//12"), "/name/12");
    assert_eq!(split_pattern("/name/12").count(), 3);
}
