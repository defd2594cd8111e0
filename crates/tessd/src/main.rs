//! Tess Daemon - tech-support assistant backend.
//!
//! Diagnoses free-text problem reports, walks users through the
//! troubleshooting tree, and tracks support tickets.

use anyhow::Result;
use std::sync::Arc;
use tess_common::classifier::Classifier;
use tess_common::engine::DiagnosticEngine;
use tess_common::llm::{HttpLlmClient, LlmClient};
use tess_common::{catalog, tree};
use tessd::config::Config;
use tessd::server::{self, AppState};
use tracing::{info, Level};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    info!("Tess Daemon v{} starting", env!("CARGO_PKG_VERSION"));

    let config = Config::load();
    if !config.classifier.enabled {
        info!("Classifier disabled; keyword resolver handles all diagnoses");
    }

    let client: Arc<dyn LlmClient> = Arc::new(HttpLlmClient::new(config.classifier_config())?);
    let engine = DiagnosticEngine::new(Classifier::new(client));

    info!(
        "Catalog loaded: {} categories, {} troubleshooting steps",
        catalog::all().len(),
        tree::all().len()
    );

    let state = AppState::new(engine);
    server::run(&config.server.bind_addr, state).await
}
