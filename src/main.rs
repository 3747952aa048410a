//! Secure demo variant.
//!
//! Reads `PORT`, `DB_HOST` and `DB_PASSWORD` from the environment and
//! serves the landing page with the password redacted.

use demo_server::Variant;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    demo_server::observability::init_logging();

    tracing::info!("demo-server starting (secure variant)");

    demo_server::lifecycle::startup::serve(Variant::Secure).await
}
