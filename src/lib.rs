//! Configuration-Driven HTTP Demo Service
//!
//! Three binaries share this library, one per demo variant:
//!
//! | Binary | Variant | Landing page | Listen port |
//! |---|---|---|---|
//! | `demo-server` | secure | secret redacted | `PORT`, default 8080 |
//! | `demo-server-insecure` | insecure | secret rendered verbatim | `PORT`, default 8080 |
//! | `demo-server-legacy` | legacy | secret rendered verbatim | fixed 5000, `PORT` ignored |
//!
//! Every variant serves the same fixed route table: `GET /` (landing page),
//! `GET /slow` (blocking-handler demonstration) and `GET /crash` (unhandled
//! arithmetic error demonstration).
//!
//! # Data Flow
//! ```text
//! process environment
//!     → config (schema + loader, fail-fast)
//!     → lifecycle::startup (bind listener, wire shutdown)
//!     → http (axum router, fixed routes, panic boundary)
//! ```

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::{DemoConfig, Variant};
pub use http::DemoServer;
pub use lifecycle::Shutdown;
