//! In-memory support ticket store.
//!
//! The persistence collaborator around the diagnostic core. Tickets
//! live in a process-local map; a database can replace this behind the
//! same interface without touching the core.

use chrono::Utc;
use std::collections::HashMap;
use tess_common::api::TicketCreateRequest;
use tess_common::ticket::{SupportTicket, TicketStatus, TicketStep};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct TicketStore {
    tickets: RwLock<HashMap<String, SupportTicket>>,
}

impl TicketStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ticket and return the stored record.
    pub async fn create(&self, req: TicketCreateRequest) -> SupportTicket {
        let now = Utc::now();
        let ticket = SupportTicket {
            ticket_id: Uuid::new_v4().to_string(),
            user_email: req.user_email,
            user_name: req.user_name,
            issue_type: req.issue_type,
            description: req.description,
            status: TicketStatus::Open,
            created_at: now,
            updated_at: now,
            steps_taken: Vec::new(),
        };

        let mut tickets = self.tickets.write().await;
        tickets.insert(ticket.ticket_id.clone(), ticket.clone());
        ticket
    }

    pub async fn get(&self, ticket_id: &str) -> Option<SupportTicket> {
        self.tickets.read().await.get(ticket_id).cloned()
    }

    /// All tickets belonging to a user, newest first.
    pub async fn for_user(&self, email: &str) -> Vec<SupportTicket> {
        let tickets = self.tickets.read().await;
        let mut matching: Vec<SupportTicket> = tickets
            .values()
            .filter(|t| t.user_email == email)
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matching
    }

    /// Append a troubleshooting step to a ticket and mark it in
    /// progress. Returns the updated record, or None for an unknown id.
    pub async fn add_step(
        &self,
        ticket_id: &str,
        step_id: String,
        choice: String,
    ) -> Option<SupportTicket> {
        let mut tickets = self.tickets.write().await;
        let ticket = tickets.get_mut(ticket_id)?;

        ticket.steps_taken.push(TicketStep {
            step_id,
            choice,
            recorded_at: Utc::now(),
        });
        if ticket.status == TicketStatus::Open {
            ticket.status = TicketStatus::InProgress;
        }
        ticket.updated_at = Utc::now();
        Some(ticket.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request(email: &str) -> TicketCreateRequest {
        TicketCreateRequest {
            user_email: email.to_string(),
            user_name: "Sam".to_string(),
            issue_type: "slow_internet".to_string(),
            description: "wifi crawls every evening".to_string(),
        }
    }

    #[tokio::test]
    async fn create_and_get_roundtrip() {
        let store = TicketStore::new();
        let ticket = store.create(create_request("sam@example.com")).await;

        assert_eq!(ticket.status, TicketStatus::Open);
        assert!(ticket.steps_taken.is_empty());

        let fetched = store.get(&ticket.ticket_id).await.unwrap();
        assert_eq!(fetched, ticket);
        assert!(store.get("no-such-id").await.is_none());
    }

    #[tokio::test]
    async fn for_user_filters_and_orders() {
        let store = TicketStore::new();
        let first = store.create(create_request("sam@example.com")).await;
        let _other = store.create(create_request("kim@example.com")).await;
        let second = store.create(create_request("sam@example.com")).await;

        let mine = store.for_user("sam@example.com").await;
        assert_eq!(mine.len(), 2);
        let ids: Vec<&str> = mine.iter().map(|t| t.ticket_id.as_str()).collect();
        assert!(ids.contains(&first.ticket_id.as_str()));
        assert!(ids.contains(&second.ticket_id.as_str()));
    }

    #[tokio::test]
    async fn add_step_updates_the_ticket() {
        let store = TicketStore::new();
        let ticket = store.create(create_request("sam@example.com")).await;

        let updated = store
            .add_step(&ticket.ticket_id, "start".to_string(), "Slow Internet".to_string())
            .await
            .unwrap();
        assert_eq!(updated.steps_taken.len(), 1);
        assert_eq!(updated.steps_taken[0].step_id, "start");
        assert_eq!(updated.status, TicketStatus::InProgress);
        assert!(updated.updated_at >= ticket.updated_at);

        assert!(store
            .add_step("no-such-id", "start".to_string(), "x".to_string())
            .await
            .is_none());
    }
}
