//! Diagnostic sink for blocked-request reporting.

/// Side channel for the verbose block diagnostic.
///
/// Implementations must never let a reporting failure escape; the classifier
/// ignores whatever happens in here and the decision stands regardless.
pub trait DiagnosticSink: Send + Sync {
    /// Called once per blocked request when `verbose` is enabled.
    fn blocked(&self, user_agent: &str, path: &str);
}

/// Default sink: one structured warn line per block.
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn blocked(&self, user_agent: &str, path: &str) {
        tracing::warn!(user_agent = %user_agent, path = %path, "Blocked bot request");
    }
}
