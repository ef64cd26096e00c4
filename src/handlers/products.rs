use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use serde::Deserialize;
use serde_json::{Value, json};

use crate::error::Result;
use crate::gateway::ProductGateway;
use crate::handlers::AppState;
use crate::mapper;
use crate::models::ListFilters;
use crate::util::extract_bearer_token;

#[derive(Debug, Deserialize)]
pub struct AdminListQuery {
    pub q: Option<String>,
    #[serde(rename = "categoryId")]
    pub category_id: Option<String>,
    pub status: Option<String>,
    /// Zero-based page index on the wire.
    pub page: Option<u32>,
}

/// GET /api/products/admin — paged, filtered product list.
pub async fn list_products(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<AdminListQuery>,
) -> Result<Json<Value>> {
    let filters = ListFilters {
        search: query.q.filter(|q| !q.is_empty()),
        category_id: query.category_id,
        status: query.status,
        page: query.page.unwrap_or(0).saturating_add(1),
    };
    let products = state
        .gateway(extract_bearer_token(&headers))
        .list(&filters)
        .await?;
    Ok(Json(json!({ "success": true, "data": products })))
}

/// GET /api/products/{id} — single product fallback fetch.
pub async fn get_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let product = state
        .gateway(extract_bearer_token(&headers))
        .get(&id)
        .await?;
    Ok(Json(json!({ "success": true, "data": product })))
}

/// POST /api/products/create
pub async fn create_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<Value>,
) -> Result<Json<Value>> {
    let created = state
        .gateway(extract_bearer_token(&headers))
        .create(&payload)
        .await?;
    let product = mapper::created_product_from_value(&created);
    Ok(Json(json!({ "success": true, "data": product })))
}

/// PUT /api/products/{id}
pub async fn update_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>> {
    let updated = state
        .gateway(extract_bearer_token(&headers))
        .update(&id, &payload)
        .await?;
    let product = mapper::product_from_value(&updated);
    Ok(Json(json!({ "success": true, "data": product })))
}

/// DELETE /api/products/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    state
        .gateway(extract_bearer_token(&headers))
        .remove(&id)
        .await?;
    Ok(Json(json!({ "success": true })))
}

/// GET /api/products/statuses — valid status enum for the filter dropdown.
pub async fn list_statuses(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Value>> {
    let statuses = state
        .gateway(extract_bearer_token(&headers))
        .list_statuses()
        .await?;
    Ok(Json(json!({ "success": true, "data": statuses })))
}
