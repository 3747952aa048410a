//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment
//!     → loader.rs (lookup & parse, fail-fast on malformed values)
//!     → DemoConfig (typed, immutable)
//!     → shared via axum state with all handlers
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; nothing mutates it afterwards
//! - Absent variables fall back to documented defaults; only malformed
//!   values abort startup
//! - The variant is chosen by the entry point binary, never by the
//!   environment

pub mod loader;
pub mod schema;

pub use loader::{from_env, ConfigError};
pub use schema::{DemoConfig, Variant};
