//! Insecure demo variant.
//!
//! Honors `PORT` but ships a hardcoded database password and renders it
//! verbatim on the landing page. Exists to demonstrate the anti-pattern;
//! contrast with the secure variant in `main.rs`.

use demo_server::Variant;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    demo_server::observability::init_logging();

    tracing::info!("demo-server starting (insecure variant)");

    demo_server::lifecycle::startup::serve(Variant::Insecure).await
}
