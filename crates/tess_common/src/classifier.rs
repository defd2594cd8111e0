//! External classifier adapter.
//!
//! Sends the user's description to a text-understanding backend with a
//! fixed structured-output instruction, then validates the reply
//! strictly against the expected schema. All-or-nothing: any contract
//! violation is an error, and there is no retry here - the diagnostic
//! engine decides what to do with a failure.

use crate::catalog;
use crate::diagnostic::DiagnosticResult;
use crate::error::ClassifierError;
use crate::llm::{LlmClient, LlmError};
use serde::Deserialize;
use std::sync::Arc;

const SYSTEM_PROMPT: &str =
    "You are a helpful tech support expert. Always respond with valid JSON.";

const RESPONSE_SCHEMA: &str = r#"{
    "diagnosis": "your diagnosis here",
    "follow_up_questions": ["question1", "question2", "question3"],
    "solutions": ["solution1", "solution2", "solution3"],
    "issue_type": "category_name",
    "confidence": 0.85
}"#;

/// Raw reply shape. Every field is required; a missing or wrong-typed
/// field fails deserialization and surfaces as `Malformed`.
#[derive(Debug, Deserialize)]
struct RawClassification {
    diagnosis: String,
    follow_up_questions: Vec<String>,
    solutions: Vec<String>,
    issue_type: String,
    confidence: f64,
}

/// Adapter over an [`LlmClient`] backend.
pub struct Classifier {
    client: Arc<dyn LlmClient>,
}

impl Classifier {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    /// Classify a description. Exactly one backend call per invocation.
    pub async fn classify(&self, description: &str) -> Result<DiagnosticResult, ClassifierError> {
        let user_prompt = build_prompt(description);

        let value = self
            .client
            .call_json(SYSTEM_PROMPT, &user_prompt, RESPONSE_SCHEMA)
            .await
            .map_err(classify_transport_error)?;

        let raw: RawClassification = serde_json::from_value(value)
            .map_err(|e| ClassifierError::Malformed(e.to_string()))?;

        Ok(normalize(raw))
    }
}

fn build_prompt(description: &str) -> String {
    let mut categories = catalog::ids();
    categories.push("other");

    format!(
        "Analyze this user's tech issue and provide:\n\
         1. A clear diagnosis\n\
         2. Up to 3 follow-up questions to gather more information\n\
         3. Up to 3 specific solutions to try\n\
         4. The most likely issue category ({})\n\
         5. A confidence between 0.0 and 1.0\n\n\
         User's issue: {}",
        categories.join(", "),
        description
    )
}

fn classify_transport_error(err: LlmError) -> ClassifierError {
    match err {
        LlmError::InvalidJson(_) | LlmError::EmptyResponse => {
            ClassifierError::Malformed(err.to_string())
        }
        LlmError::Disabled | LlmError::HttpError(_) | LlmError::Timeout(_) => {
            ClassifierError::Unavailable(err.to_string())
        }
    }
}

/// Clamp and truncate a structurally valid reply to the result contract.
fn normalize(raw: RawClassification) -> DiagnosticResult {
    let mut follow_up_questions = raw.follow_up_questions;
    follow_up_questions.truncate(3);
    let mut solutions = raw.solutions;
    solutions.truncate(3);

    DiagnosticResult {
        diagnosis: raw.diagnosis,
        confidence: raw.confidence.clamp(0.0, 1.0),
        follow_up_questions,
        solutions,
        issue_type: raw.issue_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_names_every_category_and_other() {
        let prompt = build_prompt("my screen flickers");
        for id in catalog::ids() {
            assert!(prompt.contains(id), "prompt is missing {id}");
        }
        assert!(prompt.contains("other"));
        assert!(prompt.contains("my screen flickers"));
    }
}
