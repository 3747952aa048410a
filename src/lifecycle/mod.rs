//! Process lifecycle subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Log effective settings → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     Ctrl+C → broadcast signal → server stops accepting → Exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal, no retry
//! - The listener binds last, so traffic only arrives once ready

pub mod shutdown;
pub mod startup;

pub use shutdown::Shutdown;
