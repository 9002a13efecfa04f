//! EdgeGuard: bot-blocking middleware for axum services.
//!
//! Decides per request whether the client is a known AI scraper, based on a
//! static User-Agent denylist with a path-allowlist override, and answers
//! with a 403 JSON response when it is.
//!
//! ```text
//! Client Request ──▶ guard middleware ──▶ classifier ──▶ allowed ──▶ app
//!                                             │
//!                                             └─▶ blocked ──▶ 403 JSON
//! ```
//!
//! The classifier itself is a pure function over the path, the User-Agent,
//! and a small configuration; everything else here is plumbing to put it in
//! front of real traffic.

// Core subsystems
pub mod config;
pub mod guard;
pub mod http;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;

pub use config::{GatewayConfig, GuardConfig};
pub use guard::{Classifier, Decision};
pub use http::{GatewayServer, GuardState};
pub use lifecycle::Shutdown;
