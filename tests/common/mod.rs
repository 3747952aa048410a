//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::time::Duration;

use demo_server::{DemoConfig, DemoServer, Shutdown, Variant};
use tokio::net::TcpListener;

/// Config with a short slow delay so tests stay fast.
pub fn test_config(variant: Variant) -> DemoConfig {
    let mut config = DemoConfig::defaults(variant);
    config.slow_delay = Duration::from_millis(300);
    config
}

/// Spawn a demo server for `config` on an ephemeral local port.
///
/// Returns the bound address and the shutdown handle; tests trigger the
/// handle once they are done with the server.
pub async fn start_server(config: DemoConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = DemoServer::new(config);

    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}

/// Spawn a demo server on a dedicated single-threaded runtime.
///
/// `/slow` blocks its worker; with exactly one worker that stalls every
/// other request, which is the behavior the blocking-handler tests
/// observe. The runtime lives on a background thread until the process
/// exits.
#[allow(dead_code)]
pub fn start_single_worker_server(config: DemoConfig) -> SocketAddr {
    let (addr_tx, addr_rx) = std::sync::mpsc::channel();

    std::thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();

        runtime.block_on(async move {
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            addr_tx.send(listener.local_addr().unwrap()).unwrap();

            let shutdown = Shutdown::new();
            let server = DemoServer::new(config);
            let _ = server.run(listener, shutdown.subscribe()).await;
        });
    });

    addr_rx.recv().unwrap()
}
