//! Guard middleware.
//! Runs the classifier ahead of every request.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::config::GuardConfig;
use crate::guard::Classifier;
use crate::observability::metrics;

/// State required by the guard middleware.
#[derive(Clone)]
pub struct GuardState {
    pub config: Arc<GuardConfig>,
    pub classifier: Arc<Classifier>,
}

impl GuardState {
    pub fn new(config: GuardConfig) -> Self {
        Self {
            config: Arc::new(config),
            classifier: Arc::new(Classifier::new()),
        }
    }
}

pub async fn guard_middleware(
    State(state): State<GuardState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let start = Instant::now();

    // A missing or non-UTF8 User-Agent behaves as an empty one.
    let user_agent = req
        .headers()
        .get(header::USER_AGENT)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    let path = req.uri().path();

    let decision = state.classifier.decide(path, user_agent, &state.config);

    if decision.blocked {
        metrics::record_decision("blocked", start);
        return decision
            .response
            .unwrap_or_else(|| StatusCode::FORBIDDEN.into_response());
    }

    metrics::record_decision("allowed", start);
    next.run(req).await
}
