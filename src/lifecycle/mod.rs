//! Process lifecycle.
//!
//! Startup is plain function calls in `main`; shutdown is coordinated via
//! a broadcast signal every long-running task subscribes to.

pub mod shutdown;

pub use shutdown::Shutdown;
