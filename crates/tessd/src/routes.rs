//! API routes for tessd.
//!
//! Diagnosis is a total endpoint: it always answers with a usable
//! result. Tree navigation surfaces caller mistakes as 404/400.

use crate::server::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tess_common::api::{
    AddStepRequest, DiagnoseRequest, HealthResponse, NextStepRequest, SolutionArticle,
    StepResponse, TicketCreateRequest,
};
use tess_common::diagnostic::DiagnosticResult;
use tess_common::ticket::SupportTicket;
use tess_common::{catalog, library, tree, TreeError};
use tracing::info;

type AppStateArc = Arc<AppState>;

// ============================================================================
// Diagnose Routes
// ============================================================================

pub fn diagnose_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/diagnose", post(diagnose))
}

async fn diagnose(
    State(state): State<AppStateArc>,
    Json(req): Json<DiagnoseRequest>,
) -> Json<DiagnosticResult> {
    info!("  Diagnosing description ({} chars)", req.description.len());
    Json(state.engine.diagnose(&req.description).await)
}

// ============================================================================
// Troubleshooting Tree Routes
// ============================================================================

pub fn troubleshoot_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/v1/troubleshoot/start", get(start_troubleshooting))
        .route("/v1/troubleshoot/next", post(next_step))
}

async fn start_troubleshooting() -> Json<StepResponse> {
    Json(StepResponse::from(tree::start()))
}

async fn next_step(
    Json(req): Json<NextStepRequest>,
) -> Result<Json<StepResponse>, (StatusCode, String)> {
    match tree::advance(&req.step_id, &req.choice) {
        Ok(step) => Ok(Json(StepResponse::from(step))),
        Err(e @ TreeError::UnknownStep(_)) => Err((StatusCode::NOT_FOUND, e.to_string())),
        Err(e @ TreeError::InvalidOption { .. }) => Err((StatusCode::BAD_REQUEST, e.to_string())),
    }
}

// ============================================================================
// Ticket Routes
// ============================================================================

pub fn ticket_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/v1/tickets", post(create_ticket))
        .route("/v1/tickets/:ticket_id", get(get_ticket))
        .route("/v1/tickets/user/:email", get(user_tickets))
        .route("/v1/tickets/:ticket_id/steps", post(add_ticket_step))
}

async fn create_ticket(
    State(state): State<AppStateArc>,
    Json(req): Json<TicketCreateRequest>,
) -> Json<SupportTicket> {
    let ticket = state.tickets.create(req).await;
    info!("  Created ticket {}", ticket.ticket_id);
    Json(ticket)
}

async fn get_ticket(
    State(state): State<AppStateArc>,
    Path(ticket_id): Path<String>,
) -> Result<Json<SupportTicket>, (StatusCode, String)> {
    state
        .tickets
        .get(&ticket_id)
        .await
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, format!("Ticket '{ticket_id}' not found")))
}

async fn user_tickets(
    State(state): State<AppStateArc>,
    Path(email): Path<String>,
) -> Json<Vec<SupportTicket>> {
    Json(state.tickets.for_user(&email).await)
}

async fn add_ticket_step(
    State(state): State<AppStateArc>,
    Path(ticket_id): Path<String>,
    Json(req): Json<AddStepRequest>,
) -> Result<Json<SupportTicket>, (StatusCode, String)> {
    state
        .tickets
        .add_step(&ticket_id, req.step_id, req.choice)
        .await
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, format!("Ticket '{ticket_id}' not found")))
}

// ============================================================================
// Solution Library Routes
// ============================================================================

pub fn solution_routes() -> Router<AppStateArc> {
    Router::new()
        .route("/v1/solutions", get(list_solutions))
        .route("/v1/solutions/:title", get(get_solution))
}

async fn list_solutions() -> Json<Vec<String>> {
    Json(library::titles().iter().map(|t| t.to_string()).collect())
}

async fn get_solution(
    Path(title): Path<String>,
) -> Result<Json<SolutionArticle>, (StatusCode, String)> {
    library::find(&title)
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, format!("No solution article for '{title}'")))
}

// ============================================================================
// Health Routes
// ============================================================================

pub fn health_routes() -> Router<AppStateArc> {
    Router::new().route("/v1/health", get(health_check))
}

async fn health_check(State(state): State<AppStateArc>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        categories_available: catalog::all().len(),
        tree_steps_available: tree::all().len(),
    })
}
