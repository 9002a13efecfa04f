//! End-to-end tests for the guard middleware in front of a live gateway.

use edgeguard::config::GatewayConfig;
use serde_json::Value;

mod common;

#[tokio::test]
async fn test_blocks_known_bot_with_json_body() {
    let (addr, shutdown) = common::spawn_gateway(GatewayConfig::default()).await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/secret-data", addr))
        .header("User-Agent", "Mozilla/5.0 (compatible; GPTBot/1.0)")
        .send()
        .await
        .expect("Gateway unreachable");

    assert_eq!(res.status(), 403);
    assert_eq!(res.headers()["content-type"], "application/json");

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Bot traffic blocked by EdgeGuard");
    assert_eq!(body["bot"], "Mozilla/5.0 (compatible; GPTBot/1.0)");

    shutdown.trigger();
}

#[tokio::test]
async fn test_allowlisted_path_passes_bad_bot() {
    let (addr, shutdown) = common::spawn_gateway(GatewayConfig::default()).await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/api/stripe/webhook", addr))
        .header("User-Agent", "GPTBot/1.0")
        .send()
        .await
        .expect("Gateway unreachable");

    assert_eq!(res.status(), 200);

    shutdown.trigger();
}

#[tokio::test]
async fn test_clean_user_agent_passes() {
    let (addr, shutdown) = common::spawn_gateway(GatewayConfig::default()).await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/secret-data", addr))
        .header("User-Agent", "curl/8.0")
        .send()
        .await
        .expect("Gateway unreachable");

    assert_eq!(res.status(), 200);

    shutdown.trigger();
}

#[tokio::test]
async fn test_block_ai_opt_out_disables_blocking() {
    let mut config = GatewayConfig::default();
    config.guard.block_ai = false;

    let (addr, shutdown) = common::spawn_gateway(config).await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/secret-data", addr))
        .header("User-Agent", "Mozilla/5.0 (compatible; GPTBot/1.0)")
        .send()
        .await
        .expect("Gateway unreachable");

    assert_eq!(res.status(), 200);

    shutdown.trigger();
}

#[tokio::test]
async fn test_custom_whitelist_extends_defaults() {
    let mut config = GatewayConfig::default();
    config.guard.whitelist = vec!["/internal/".to_string()];

    let (addr, shutdown) = common::spawn_gateway(config).await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/internal/status", addr))
        .header("User-Agent", "GPTBot/1.0")
        .send()
        .await
        .expect("Gateway unreachable");
    assert_eq!(res.status(), 200);

    // Non-whitelisted paths still enforce the denylist.
    let res = client
        .get(format!("http://{}/other", addr))
        .header("User-Agent", "GPTBot/1.0")
        .send()
        .await
        .expect("Gateway unreachable");
    assert_eq!(res.status(), 403);

    shutdown.trigger();
}
