//! Integration tests for the fixed route table.

use std::time::{Duration, Instant};

use demo_server::Variant;
use reqwest::StatusCode;

mod common;

#[tokio::test]
async fn crash_returns_server_error_on_every_variant() {
    for variant in [Variant::Secure, Variant::Insecure, Variant::Legacy] {
        let (addr, shutdown) = common::start_server(common::test_config(variant)).await;

        let response = reqwest::get(format!("http://{addr}/crash")).await.unwrap();
        assert_eq!(
            response.status(),
            StatusCode::INTERNAL_SERVER_ERROR,
            "variant {variant:?}"
        );
        assert!(!response.status().is_success());

        shutdown.trigger();
    }
}

#[tokio::test]
async fn crash_never_leaks_a_body_beyond_the_generic_message() {
    let (addr, shutdown) = common::start_server(common::test_config(Variant::Secure)).await;

    let body = reqwest::get(format!("http://{addr}/crash"))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert_eq!(body, "Internal Server Error");

    shutdown.trigger();
}

#[tokio::test]
async fn slow_waits_out_the_full_delay() {
    let (addr, shutdown) = common::start_server(common::test_config(Variant::Secure)).await;

    let started = Instant::now();
    let response = reqwest::get(format!("http://{addr}/slow")).await.unwrap();
    let elapsed = started.elapsed();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "done sleeping");
    assert!(
        elapsed >= Duration::from_millis(300),
        "responded after {elapsed:?}, before the configured delay"
    );

    shutdown.trigger();
}

/// With a single worker, a request issued while `/slow` is blocking does
/// not complete until the sleep finishes. The server runs on its own
/// single-threaded runtime; the client side needs real parallelism to
/// observe the stall.
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn slow_stalls_a_single_worker() {
    let addr = common::start_single_worker_server(common::test_config(Variant::Secure));

    let slow = tokio::spawn(async move {
        reqwest::get(format!("http://{addr}/slow"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap()
    });

    // Let /slow reach its sleep before issuing the fast request.
    tokio::time::sleep(Duration::from_millis(100)).await;

    let started = Instant::now();
    let response = reqwest::get(format!("http://{addr}/")).await.unwrap();
    let stalled_for = started.elapsed();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        stalled_for >= Duration::from_millis(150),
        "fast request finished in {stalled_for:?}, worker was not blocked"
    );

    assert_eq!(slow.await.unwrap(), "done sleeping");
}

#[tokio::test]
async fn unknown_paths_get_the_default_404() {
    let (addr, shutdown) = common::start_server(common::test_config(Variant::Secure)).await;

    let response = reqwest::get(format!("http://{addr}/nope")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    shutdown.trigger();
}
