use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use serde_json::{Value, json};

use crate::error::Result;
use crate::gateway::ProductGateway;
use crate::handlers::AppState;
use crate::util::extract_bearer_token;

/// GET /api/categories and /api/meta/categories.
///
/// The gateway already handles the public/meta endpoint fallback and the
/// single delayed retry on server errors.
pub async fn list_categories(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>> {
    let categories = state
        .gateway(extract_bearer_token(&headers))
        .list_categories()
        .await?;
    Ok(Json(json!({ "success": true, "data": categories })))
}

/// POST /api/categories — create a category by name.
pub async fn create_category(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Result<Json<Value>> {
    let name = payload
        .get("name")
        .and_then(Value::as_str)
        .unwrap_or_default();
    let id = state
        .gateway(extract_bearer_token(&headers))
        .create_category(name)
        .await?;
    Ok(Json(json!({ "success": true, "data": { "id": id } })))
}

/// GET /api/meta/brands.
pub async fn list_brands(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>> {
    let brands = state
        .gateway(extract_bearer_token(&headers))
        .list_brands()
        .await?;
    Ok(Json(json!({ "success": true, "data": brands })))
}
