//! Shared helpers: stub upstream backends and app construction.
#![allow(dead_code)]

use std::time::Duration;

use axum::Router;

use lychee_admin::config::Config;
use lychee_admin::gateway::HttpGateway;
use lychee_admin::handlers::{self, AppState};

/// Serve a stub upstream backend on an ephemeral port, returning its base URL.
pub async fn spawn_upstream(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Gateway against a stub upstream, with the metadata retry delay shortened
/// so retry tests do not sleep for the production two seconds.
pub fn test_gateway(base_url: &str) -> HttpGateway {
    HttpGateway::new(reqwest::Client::new(), base_url).with_retry_delay(Duration::from_millis(20))
}

pub fn test_config(api_base: &str) -> Config {
    let api_base = api_base.to_string();
    Config::from_lookup(move |key| match key {
        "API_ENDPOINT_DEV" => Some(api_base.clone()),
        _ => None,
    })
}

/// The proxy app wired to a stub upstream.
pub fn proxy_app(api_base: &str) -> Router {
    handlers::router(AppState::new(test_config(api_base)))
}
