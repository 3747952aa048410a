//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the axum Router with the fixed route table
//! - Wire up middleware (request tracing, panic boundary)
//! - Serve on a caller-supplied listener until shutdown
//!
//! # Design Decisions
//! - The panic boundary is the single error translation rule: any handler
//!   panic becomes a generic 500 with a fixed plain body
//! - Unknown paths fall through to axum's default 404

use std::any::Any;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;

use crate::config::DemoConfig;
use crate::http::handlers;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<DemoConfig>,
}

/// HTTP server for the demo service.
pub struct DemoServer {
    router: Router,
}

impl DemoServer {
    /// Create a new server for the given configuration.
    pub fn new(config: DemoConfig) -> Self {
        let state = AppState {
            config: Arc::new(config),
        };
        Self {
            router: Self::build_router(state),
        }
    }

    /// Build the axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::home))
            .route("/slow", get(handlers::slow))
            .route("/crash", get(handlers::crash))
            .with_state(state)
            .layer(CatchPanicLayer::custom(panic_to_500))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Translate a handler panic into a generic server error response.
///
/// The arithmetic panic from `/crash` lands here; so would any other
/// handler panic.
fn panic_to_500(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!(panic = %detail, "handler panicked");

    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}
