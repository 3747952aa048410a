//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (axum setup, trace layer, panic boundary)
//!     → handlers.rs (fixed route table: /, /slow, /crash)
//!     → response written back to client
//! ```

pub mod handlers;
pub mod server;

pub use server::{AppState, DemoServer};
