//! HTTP client for communicating with tessd.

use anyhow::{anyhow, Result};
use std::time::Duration;
use tess_common::api::{
    AddStepRequest, DiagnoseRequest, HealthResponse, NextStepRequest, StepResponse,
    TicketCreateRequest,
};
use tess_common::diagnostic::DiagnosticResult;
use tess_common::ticket::SupportTicket;

/// Client for communicating with tessd
pub struct TessClient {
    base_url: String,
    client: reqwest::Client,
}

impl TessClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Diagnose a free-text description.
    pub async fn diagnose(&self, description: &str) -> Result<DiagnosticResult> {
        let request = DiagnoseRequest {
            description: description.to_string(),
        };
        self.post_json("/v1/diagnose", &request).await
    }

    /// Fetch the first troubleshooting step.
    pub async fn start_troubleshooting(&self) -> Result<StepResponse> {
        self.get_json("/v1/troubleshoot/start").await
    }

    /// Advance the troubleshooting tree.
    pub async fn next_step(&self, step_id: &str, choice: &str) -> Result<StepResponse> {
        let request = NextStepRequest {
            step_id: step_id.to_string(),
            choice: choice.to_string(),
        };
        self.post_json("/v1/troubleshoot/next", &request).await
    }

    /// Open a new ticket.
    pub async fn create_ticket(&self, request: &TicketCreateRequest) -> Result<SupportTicket> {
        self.post_json("/v1/tickets", request).await
    }

    /// Fetch a ticket by id.
    pub async fn get_ticket(&self, ticket_id: &str) -> Result<SupportTicket> {
        self.get_json(&format!("/v1/tickets/{ticket_id}")).await
    }

    /// Record a troubleshooting step on a ticket.
    pub async fn add_ticket_step(
        &self,
        ticket_id: &str,
        step_id: &str,
        choice: &str,
    ) -> Result<SupportTicket> {
        let request = AddStepRequest {
            step_id: step_id.to_string(),
            choice: choice.to_string(),
        };
        self.post_json(&format!("/v1/tickets/{ticket_id}/steps"), &request)
            .await
    }

    /// Daemon health.
    pub async fn health(&self) -> Result<HealthResponse> {
        self.get_json("/v1/health").await
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.client.get(&url).send().await.map_err(connect_hint)?;
        Self::parse(response).await
    }

    async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(connect_hint)?;
        Self::parse(response).await
    }

    async fn parse<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if !status.is_success() {
            let detail = response.text().await.unwrap_or_default();
            return Err(anyhow!("daemon returned {status}: {detail}"));
        }
        Ok(response.json().await?)
    }
}

fn connect_hint(e: reqwest::Error) -> anyhow::Error {
    if e.is_connect() {
        anyhow!(
            "Cannot reach the Tess daemon: {e}\n\n\
             Is tessd running? Start it with:\n  tessd"
        )
    } else {
        anyhow!(e)
    }
}
