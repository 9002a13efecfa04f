//! Configuration validation.
//!
//! Semantic checks on top of serde's syntactic ones. Returns all errors,
//! not just the first.

use thiserror::Error;

use crate::config::schema::GatewayConfig;

/// A single semantic configuration problem.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("whitelist entry {0:?} must be a non-empty absolute path prefix")]
    BadWhitelistEntry(String),

    #[error("timeouts.request_secs must be non-zero")]
    ZeroRequestTimeout,

    #[error("invalid bind address {0:?}")]
    BadBindAddress(String),

    #[error("invalid metrics address {0:?}")]
    BadMetricsAddress(String),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for entry in &config.guard.whitelist {
        if entry.is_empty() || !entry.starts_with('/') {
            errors.push(ValidationError::BadWhitelistEntry(entry.clone()));
        }
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    if config
        .listener
        .bind_address
        .parse::<std::net::SocketAddr>()
        .is_err()
    {
        errors.push(ValidationError::BadBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.observability.metrics_enabled
        && config
            .observability
            .metrics_address
            .parse::<std::net::SocketAddr>()
            .is_err()
    {
        errors.push(ValidationError::BadMetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
