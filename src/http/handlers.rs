//! Route handlers for the demo service.
//!
//! # Responsibilities
//! - Render the landing page for the current variant
//! - Demonstrate a blocking handler (`/slow`)
//! - Demonstrate an unhandled arithmetic error (`/crash`)
//!
//! Each handler is a pure function of the immutable configuration: no
//! request body is read and no state survives a request.

use axum::extract::State;
use axum::response::Html;

use crate::config::{DemoConfig, Variant};
use crate::http::server::AppState;

/// Placeholder rendered in place of the secret on the secure landing page.
pub const REDACTED: &str = "[REDACTED]";

/// Fixed body returned by `/slow` once the delay has elapsed.
pub const SLOW_BODY: &str = "done sleeping";

/// Handler for `GET /`, the landing page.
///
/// The secure variant renders the configured database host and a redacted
/// placeholder for the password. The insecure variants render the machine
/// hostname and the password verbatim, which is the leak this demo exists
/// to show.
pub async fn home(State(state): State<AppState>) -> Html<String> {
    Html(landing_page(&state.config))
}

/// Handler for `GET /slow`: blocks the handling worker for the configured
/// delay.
///
/// Deliberately `std::thread::sleep`, not `tokio::time::sleep`: the point
/// of the route is to show what a handler that never yields does to an
/// async worker, so the sleep must hold the thread for the full duration.
pub async fn slow(State(state): State<AppState>) -> &'static str {
    let delay = state.config.slow_delay;
    tracing::debug!(?delay, "blocking worker");
    std::thread::sleep(delay);
    SLOW_BODY
}

/// Handler for `GET /crash`: unconditional integer division by zero.
///
/// The divisor passes through `black_box` so the division stays a genuine
/// runtime arithmetic panic instead of a compile-time rejection. The panic
/// boundary in `server.rs` translates it into a plain 500.
pub async fn crash() -> String {
    let divisor = std::hint::black_box(0_u32);
    let quotient = 1_u32 / divisor;
    format!("unreachable: {quotient}")
}

/// Render the landing page body for `config`.
///
/// Kept separate from the axum handler so the redaction invariant is
/// testable without a running server.
pub fn landing_page(config: &DemoConfig) -> String {
    match config.variant {
        Variant::Secure => format!(
            "<h1>Secure Demo App</h1>\n\
             <p>DB Host: {}</p>\n\
             <p>DB Password: {}</p>\n",
            config.db_host, REDACTED
        ),
        Variant::Insecure | Variant::Legacy => format!(
            "<h1>Insecure Demo App</h1>\n\
             <p>Host: {}</p>\n\
             <p>DB Password: {}</p>\n",
            machine_hostname(),
            config.db_password
        ),
    }
}

fn machine_hostname() -> String {
    hostname::get()
        .ok()
        .and_then(|name| name.into_string().ok())
        .unwrap_or_else(|| "unknown".to_string())
}
