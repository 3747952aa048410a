//! Legacy demo variant.
//!
//! The oldest of the three demos: hardcoded database password, fixed
//! listen port 5000, `PORT` ignored entirely.

use demo_server::Variant;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    demo_server::observability::init_logging();

    tracing::info!("demo-server starting (legacy variant)");

    demo_server::lifecycle::startup::serve(Variant::Legacy).await
}
