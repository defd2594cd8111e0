//! Support ticket types.
//!
//! Tickets are the persistence collaborator around the diagnostic core:
//! the daemon stores them in memory keyed by id, and the `steps_taken`
//! log doubles as the record of a troubleshooting walk.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Ticket created, not yet worked.
    #[default]
    Open,
    /// A troubleshooting session is underway.
    InProgress,
    /// User confirmed the fix.
    Resolved,
    /// Closed without confirmation.
    Closed,
}

/// One recorded step of a troubleshooting walk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketStep {
    /// Decision-tree step the user was on.
    pub step_id: String,
    /// Option the user chose there.
    pub choice: String,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportTicket {
    pub ticket_id: String,
    pub user_email: String,
    pub user_name: String,
    pub issue_type: String,
    pub description: String,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub steps_taken: Vec<TicketStep>,
}
