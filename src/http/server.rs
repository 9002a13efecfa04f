//! Gateway server setup.
//!
//! Wires the guard middleware in front of a catch-all origin handler, the
//! same position the middleware takes in front of a real application.

use std::time::Duration;

use axum::{middleware, response::IntoResponse, routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::GatewayConfig;
use crate::http::middleware::{guard_middleware, GuardState};

/// HTTP server fronting the guard middleware.
pub struct GatewayServer {
    router: Router,
    config: GatewayConfig,
}

impl GatewayServer {
    /// Create a new gateway with the given configuration.
    pub fn new(config: GatewayConfig) -> Self {
        let state = GuardState::new(config.guard.clone());
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: GuardState) -> Router {
        Router::new()
            .route("/{*path}", any(origin_handler))
            .route("/", any(origin_handler))
            .layer(middleware::from_fn_with_state(state, guard_middleware))
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "Gateway starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("Gateway stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}

/// Placeholder origin. Anything that reaches this point passed the guard.
async fn origin_handler() -> impl IntoResponse {
    "ok"
}
