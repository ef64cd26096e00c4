mod auth;
mod meta;
mod products;

pub use auth::*;
pub use meta::*;
pub use products::*;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;

use crate::config::Config;
use crate::gateway::HttpGateway;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            http: reqwest::Client::new(),
        }
    }

    /// Backend gateway carrying the caller's optional bearer token.
    pub fn gateway(&self, bearer: Option<String>) -> HttpGateway {
        HttpGateway::new(self.http.clone(), self.config.api_base()).with_bearer(bearer)
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/products/admin", get(list_products))
        .route("/api/products/statuses", get(list_statuses))
        .route("/api/products/create", post(create_product))
        .route(
            "/api/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
        .route("/api/categories", get(list_categories).post(create_category))
        .route("/api/meta/categories", get(list_categories))
        .route("/api/meta/brands", get(list_brands))
        .route("/api/auth/logout", post(logout))
        .with_state(state)
}
