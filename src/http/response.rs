//! Blocked-response construction.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// Error string carried in every blocked response body.
pub const BLOCK_ERROR: &str = "Bot traffic blocked by EdgeGuard";

/// 403 Forbidden with a JSON body naming the offending User-Agent.
///
/// The `bot` field carries the User-Agent exactly as received, not the
/// lower-cased form used for matching.
pub fn blocked_response(user_agent_raw: &str) -> Response {
    let body = serde_json::json!({
        "error": BLOCK_ERROR,
        "bot": user_agent_raw,
    });

    (
        StatusCode::FORBIDDEN,
        [(header::CONTENT_TYPE, "application/json")],
        body.to_string(),
    )
        .into_response()
}
