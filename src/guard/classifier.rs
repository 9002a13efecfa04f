//! The allow/block decision procedure.

use std::sync::Arc;

use axum::response::Response;

use crate::config::GuardConfig;
use crate::guard::allowlist::is_allowlisted;
use crate::guard::denylist::matches_denylist;
use crate::guard::sink::{DiagnosticSink, TracingSink};
use crate::http::response::blocked_response;

/// Outcome of classifying one request.
///
/// Constructed fresh per call, never persisted. `response` is populated
/// only when `blocked` is set.
#[derive(Debug)]
pub struct Decision {
    pub blocked: bool,
    pub response: Option<Response>,
}

impl Decision {
    fn allow() -> Self {
        Self {
            blocked: false,
            response: None,
        }
    }

    fn block(response: Response) -> Self {
        Self {
            blocked: true,
            response: Some(response),
        }
    }
}

/// Stateless request classifier.
///
/// Holds only the diagnostic sink; the deny and allow lists are process-wide
/// constants. Safe to share across any number of concurrent request handlers.
pub struct Classifier {
    sink: Arc<dyn DiagnosticSink>,
}

impl Classifier {
    pub fn new() -> Self {
        Self {
            sink: Arc::new(TracingSink),
        }
    }

    /// Use a custom diagnostic sink instead of the tracing default.
    pub fn with_sink(sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { sink }
    }

    /// Decide whether a request should be blocked.
    ///
    /// `path` is the request's URL path component; `user_agent_raw` is the
    /// User-Agent header as received, or the empty string when absent.
    pub fn decide(&self, path: &str, user_agent_raw: &str, config: &GuardConfig) -> Decision {
        let user_agent = user_agent_raw.to_lowercase();

        // 1. Safety check: skip whitelisted paths. Payment webhooks and
        //    static assets stay reachable no matter what the client claims
        //    to be.
        if is_allowlisted(path, &config.whitelist) {
            return Decision::allow();
        }

        // 2. Is this a known bad bot? With an api_key this is where a
        //    remote reputation lookup would slot in; today the static list
        //    is the whole database.
        let is_bad_bot = matches_denylist(&user_agent);

        if is_bad_bot && config.block_ai {
            if config.verbose {
                self.sink.blocked(user_agent_raw, path);
            }

            // 3. Return 403 Forbidden with a JSON body so it is clear why.
            return Decision::block(blocked_response(user_agent_raw));
        }

        // 4. Traffic is clean.
        Decision::allow()
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new()
    }
}
