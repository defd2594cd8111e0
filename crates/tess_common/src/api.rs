//! Wire schemas shared by the daemon and the CLI client.

use crate::tree::TroubleshootStep;
use serde::{Deserialize, Serialize};

/// Diagnose request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnoseRequest {
    pub description: String,
}

/// Advance-the-tree request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextStepRequest {
    pub step_id: String,
    pub choice: String,
}

/// One decision-tree step as returned over the wire. The transition
/// table stays server-side; clients only see what to display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepResponse {
    pub step_id: String,
    pub question: String,
    pub options: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
}

impl From<&TroubleshootStep> for StepResponse {
    fn from(step: &TroubleshootStep) -> Self {
        Self {
            step_id: step.id.to_string(),
            question: step.question.to_string(),
            options: step.options.iter().map(|o| o.to_string()).collect(),
            solution: step.solution.map(|s| s.to_string()),
        }
    }
}

/// Ticket creation request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketCreateRequest {
    pub user_email: String,
    pub user_name: String,
    pub issue_type: String,
    pub description: String,
}

/// Append a troubleshooting step to a ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddStepRequest {
    pub step_id: String,
    pub choice: String,
}

/// A labeled external reference inside a solution article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionLink {
    pub label: String,
    pub url: String,
}

/// Detailed remediation article from the quick-solutions library.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolutionArticle {
    pub title: String,
    pub text: String,
    pub media: String,
    pub links: Vec<SolutionLink>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub categories_available: usize,
    pub tree_steps_available: usize,
}
