//! Shared utilities for integration testing.

use std::net::SocketAddr;

use tokio::net::TcpListener;

use edgeguard::config::GatewayConfig;
use edgeguard::http::GatewayServer;
use edgeguard::lifecycle::Shutdown;

/// Spawn a gateway on an ephemeral port and return its address plus the
/// shutdown handle keeping it alive.
pub async fn spawn_gateway(config: GatewayConfig) -> (SocketAddr, Shutdown) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let server = GatewayServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener, rx).await;
    });

    (addr, shutdown)
}

/// HTTP client that sends no implicit headers and skips any local proxy.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
