//! Keyword resolver - deterministic fallback diagnosis.
//!
//! Scores free text against the issue catalog with no external calls.
//! Always produces a result, so the diagnostic engine can lean on it
//! whenever the classifier is unavailable.

use crate::catalog::{self, IssueCategory};
use crate::diagnostic::{DiagnosticResult, UNKNOWN_ISSUE};

const GENERIC_DIAGNOSIS: &str =
    "I couldn't identify a specific issue type from your description. Could you provide more details?";

const GENERIC_QUESTIONS: [&str; 3] = [
    "What exactly is happening?",
    "When did this start?",
    "What have you already tried?",
];

const GENERIC_SOLUTIONS: [&str; 3] = [
    "Try restarting your device",
    "Check for software updates",
    "Contact technical support",
];

/// Resolve a free-text description against the catalog.
///
/// Each keyword occurring anywhere in the lower-cased input contributes
/// one point to its category, at most once. The best-scoring category
/// wins; equal scores keep catalog declaration order (stable sort).
pub fn resolve(description: &str) -> DiagnosticResult {
    let text = description.to_lowercase();

    let mut matched: Vec<(&'static IssueCategory, usize)> = Vec::new();
    for category in catalog::all() {
        let score = category
            .keywords
            .iter()
            .filter(|keyword| text.contains(**keyword))
            .count();
        if score > 0 {
            matched.push((category, score));
        }
    }
    matched.sort_by(|a, b| b.1.cmp(&a.1));

    match matched.first() {
        Some(&(category, score)) => DiagnosticResult {
            diagnosis: format!(
                "Based on your description, this appears to be a {} issue.",
                category.id.replace('_', " ")
            ),
            // A category can have more keywords than questions, so the
            // ratio is clamped to keep confidence in [0,1].
            confidence: (score as f64 / category.questions.len() as f64).min(1.0),
            follow_up_questions: take_owned(category.questions, 3),
            solutions: take_owned(category.solutions, 3),
            issue_type: category.id.to_string(),
        },
        None => DiagnosticResult {
            diagnosis: GENERIC_DIAGNOSIS.to_string(),
            confidence: 0.0,
            follow_up_questions: GENERIC_QUESTIONS.iter().map(|s| s.to_string()).collect(),
            solutions: GENERIC_SOLUTIONS.iter().map(|s| s.to_string()).collect(),
            issue_type: UNKNOWN_ISSUE.to_string(),
        },
    }
}

fn take_owned(items: &[&str], limit: usize) -> Vec<String> {
    items.iter().take(limit).map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn matches_slow_internet() {
        let result = resolve("My wifi is so slow and keeps buffering");
        assert_eq!(result.issue_type, "slow_internet");
        // "slow", "wifi" and "buffering" are all present.
        assert_relative_eq!(result.confidence, 3.0 / 4.0);
        assert_eq!(result.follow_up_questions.len(), 3);
        assert_eq!(result.solutions.len(), 3);
        assert!(result.diagnosis.contains("slow internet"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let lower = resolve("slow internet");
        let shouty = resolve("SLOW Internet");
        assert_eq!(lower, shouty);
    }

    #[test]
    fn no_match_yields_generic_result() {
        let result = resolve("the toaster smells of elderberries");
        assert_eq!(result.issue_type, UNKNOWN_ISSUE);
        assert_eq!(result.confidence, 0.0);
        assert_eq!(result.follow_up_questions, GENERIC_QUESTIONS.to_vec());
        assert_eq!(result.solutions, GENERIC_SOLUTIONS.to_vec());
    }

    #[test]
    fn confidence_never_exceeds_one() {
        // All six slow_internet keywords against four questions.
        let result = resolve("slow internet wifi connection loading buffering");
        assert!(result.confidence <= 1.0);
        assert!(result.confidence >= 0.0);
    }

    #[test]
    fn ties_keep_catalog_order() {
        // "freeze" hits only general_performance; "flicker" only
        // screen_flickering. One keyword each, so the earlier catalog
        // entry wins.
        let result = resolve("it started to flicker and then froze, freeze city");
        assert_eq!(result.issue_type, "screen_flickering");
    }
}
