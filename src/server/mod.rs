// HTTP layer for the review service

mod handlers;

pub use handlers::{create_router, AppState};

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::config::constants::MAX_BODY_BYTES;
use crate::config::Config;
use crate::providers::ReviewModel;

/// Main review server structure
pub struct ReviewServer {
    /// Model client shared across requests
    model: Arc<dyn ReviewModel>,
    /// Service configuration
    config: Config,
}

impl ReviewServer {
    /// Create a new review server around an injected model client.
    pub fn new(config: Config, model: Arc<dyn ReviewModel>) -> Self {
        Self { model, config }
    }

    /// Start the HTTP server
    pub async fn serve(self) -> Result<()> {
        let addr: SocketAddr = self
            .config
            .server
            .bind_address
            .parse()
            .context("invalid bind address")?;

        let state = AppState {
            model: Arc::clone(&self.model),
            default_language: self.config.default_language.clone(),
        };

        // Body limit guards against oversized payloads; the frontend is
        // served from a different origin, so CORS stays permissive.
        let app = create_router(state)
            .layer(axum::extract::DefaultBodyLimit::max(MAX_BODY_BYTES))
            .layer(CorsLayer::permissive())
            .layer(TraceLayer::new_for_http());

        tracing::info!(
            provider = self.model.name(),
            model = self.model.default_model(),
            "Starting revu review server on {}",
            addr
        );

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, app).await?;

        Ok(())
    }
}
