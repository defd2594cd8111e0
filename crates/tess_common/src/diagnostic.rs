//! Diagnostic result type produced by both resolver paths.

use serde::{Deserialize, Serialize};

/// Sentinel issue type when no catalog category matches.
pub const UNKNOWN_ISSUE: &str = "unknown";

/// Outcome of a diagnosis, from either the external classifier or the
/// keyword resolver. Built fresh per request and never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticResult {
    pub diagnosis: String,
    /// Match strength in [0,1]. Informal, not a calibrated probability.
    pub confidence: f64,
    /// At most 3 questions, in catalog order.
    pub follow_up_questions: Vec<String>,
    /// At most 3 remediation steps, in catalog order.
    pub solutions: Vec<String>,
    /// A catalog category id, "other", or [`UNKNOWN_ISSUE`].
    pub issue_type: String,
}
