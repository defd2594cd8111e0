//! Golden tests for the diagnostic engine fallback chain.
//!
//! The engine must be a total function: whatever the classifier does,
//! callers get a usable result, and the fallback output is exactly the
//! keyword resolver's.

use std::sync::Arc;
use tess_common::classifier::Classifier;
use tess_common::diagnostic::UNKNOWN_ISSUE;
use tess_common::engine::DiagnosticEngine;
use tess_common::keyword;
use tess_common::llm::{FakeLlmClient, LlmError};

fn engine_with(client: Arc<FakeLlmClient>) -> DiagnosticEngine {
    DiagnosticEngine::new(Classifier::new(client))
}

#[tokio::test]
async fn classifier_success_is_returned_untouched() {
    let reply = serde_json::json!({
        "diagnosis": "Graphics driver mismatch.",
        "follow_up_questions": ["Did you update recently?"],
        "solutions": ["Roll back the driver"],
        "issue_type": "screen_flickering",
        "confidence": 0.9
    });
    let engine = engine_with(Arc::new(FakeLlmClient::always_valid(reply)));

    let result = engine.diagnose("screen flickers on boot").await;
    assert_eq!(result.issue_type, "screen_flickering");
    assert_eq!(result.diagnosis, "Graphics driver mismatch.");
    assert_eq!(result.confidence, 0.9);
}

#[tokio::test]
async fn unavailable_classifier_falls_back_to_keywords() {
    let description = "My wifi is so slow and keeps buffering";
    let engine = engine_with(Arc::new(FakeLlmClient::always_error(LlmError::Timeout(8))));

    let result = engine.diagnose(description).await;
    assert_eq!(result, keyword::resolve(description));
    assert_eq!(result.issue_type, "slow_internet");
}

#[tokio::test]
async fn malformed_classifier_falls_back_to_keywords() {
    let description = "cannot sign in to my account";
    let engine = engine_with(Arc::new(FakeLlmClient::always_valid(
        serde_json::json!({"diagnosis": "incomplete"}),
    )));

    let result = engine.diagnose(description).await;
    assert_eq!(result, keyword::resolve(description));
    assert_eq!(result.issue_type, "login_problems");
}

#[tokio::test]
async fn fallback_on_unmatchable_input_is_still_usable() {
    let engine = engine_with(Arc::new(FakeLlmClient::always_error(LlmError::HttpError(
        "HTTP 503".into(),
    ))));

    let result = engine.diagnose("qwertyuiop").await;
    assert_eq!(result.issue_type, UNKNOWN_ISSUE);
    assert_eq!(result.confidence, 0.0);
    assert_eq!(result.follow_up_questions.len(), 3);
    assert_eq!(result.solutions.len(), 3);
}

#[tokio::test]
async fn exactly_one_classifier_attempt_per_diagnose() {
    let client = Arc::new(FakeLlmClient::always_error(LlmError::Timeout(8)));
    let engine = engine_with(client.clone());

    engine.diagnose("slow wifi").await;
    assert_eq!(client.call_count(), 1);

    engine.diagnose("slow wifi").await;
    assert_eq!(client.call_count(), 2);
}

#[tokio::test]
async fn confidence_stays_in_range_across_paths() {
    let engine = engine_with(Arc::new(FakeLlmClient::always_error(LlmError::Disabled)));
    for description in [
        "",
        "slow internet wifi connection loading buffering",
        "freeze crash lag unresponsive performance slow",
        "nothing recognizable here",
    ] {
        let result = engine.diagnose(description).await;
        assert!(
            (0.0..=1.0).contains(&result.confidence),
            "confidence {} out of range for {description:?}",
            result.confidence
        );
    }
}
