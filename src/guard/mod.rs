//! Request classification subsystem.
//!
//! # Data Flow
//! ```text
//! path + user-agent + GuardConfig
//!     → allowlist.rs (path prefix exemptions, checked first)
//!     → denylist.rs (case-insensitive substring match)
//!     → classifier.rs (Decision: allow, or block with 403)
//!     → sink.rs (optional diagnostic line on block)
//! ```
//!
//! # Design Decisions
//! - Allowlist always wins over denylist
//! - Static lists are process-wide constants, never mutated after startup
//! - The classifier is pure; the diagnostic sink is the only side channel

pub mod allowlist;
pub mod classifier;
pub mod denylist;
pub mod sink;

pub use classifier::{Classifier, Decision};
pub use sink::{DiagnosticSink, TracingSink};
