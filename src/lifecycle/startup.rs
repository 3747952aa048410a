//! Startup orchestration shared by the variant binaries.
//!
//! # Responsibilities
//! - Load configuration for the variant (fail-fast)
//! - Log the effective non-secret settings
//! - Bind the listener and serve until Ctrl+C
//!
//! # Design Decisions
//! - Any startup error is fatal; the process exits nonzero with no retry
//! - The secret is never logged, on any variant

use tokio::net::TcpListener;

use crate::config::{self, Variant};
use crate::http::DemoServer;
use crate::lifecycle::Shutdown;

/// Load configuration for `variant`, bind `0.0.0.0:<port>` and serve until
/// the process is told to stop.
pub async fn serve(variant: Variant) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::from_env(variant)?;

    tracing::info!(
        variant = ?config.variant,
        listen_port = config.listen_port,
        db_host = %config.db_host,
        "Configuration loaded"
    );

    let listener = TcpListener::bind(("0.0.0.0", config.listen_port)).await?;

    let shutdown = Shutdown::new();
    shutdown.trigger_on_ctrl_c();

    let server = DemoServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
