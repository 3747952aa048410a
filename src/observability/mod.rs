//! Observability subsystem.
//!
//! # Responsibilities
//! - Initialize structured logging for all binaries
//!
//! Request-level logging is handled by the trace layer in `http::server`.

pub mod logging;

pub use logging::init_logging;
