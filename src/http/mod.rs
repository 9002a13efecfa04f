//! HTTP integration subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → middleware.rs (extract user-agent + path, run classifier)
//!     → blocked: response.rs (403 with JSON body)
//!     → allowed: next handler
//! ```

pub mod middleware;
pub mod response;
pub mod server;

pub use middleware::{guard_middleware, GuardState};
pub use server::GatewayServer;
