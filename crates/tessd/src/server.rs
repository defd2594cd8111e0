//! HTTP server for tessd

use crate::routes;
use crate::store::TicketStore;
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tess_common::engine::DiagnosticEngine;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Application state shared across handlers
pub struct AppState {
    pub engine: DiagnosticEngine,
    pub tickets: TicketStore,
    pub start_time: Instant,
}

impl AppState {
    pub fn new(engine: DiagnosticEngine) -> Self {
        Self {
            engine,
            tickets: TicketStore::new(),
            start_time: Instant::now(),
        }
    }
}

/// Build the full router.
pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(routes::diagnose_routes())
        .merge(routes::troubleshoot_routes())
        .merge(routes::ticket_routes())
        .merge(routes::solution_routes())
        .merge(routes::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        // The web frontend is served from another origin in development.
        .layer(CorsLayer::permissive())
}

/// Run the HTTP server
pub async fn run(bind_addr: &str, state: AppState) -> Result<()> {
    let app = app(Arc::new(state));

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    info!("  Listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
