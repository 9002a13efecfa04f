//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! middleware + classifier produce:
//!     → logging.rs (structured log events, block diagnostics)
//!     → metrics.rs (decision counters, latency histogram)
//!
//! Consumers:
//!     → stdout (tracing fmt layer)
//!     → Prometheus scrape endpoint (optional)
//! ```

pub mod logging;
pub mod metrics;
