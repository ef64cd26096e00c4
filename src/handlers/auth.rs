use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde_json::json;

use crate::handlers::AppState;

/// POST /api/auth/logout.
///
/// Forwards the session token to the upstream logout endpoint on a
/// best-effort basis, then clears both session cookies. Always responds
/// `200 {"success": true}` regardless of the upstream outcome.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    if let Some(token) = jar.get("sessionToken").map(|c| c.value().to_string()) {
        let url = format!("{}/auth/logout", state.config.api_base());
        if let Err(err) = state.http.post(url).bearer_auth(token).send().await {
            tracing::debug!(error = %err, "upstream logout failed, clearing cookies anyway");
        }
    }

    let jar = jar
        .remove(Cookie::build(("sessionToken", "")).path("/"))
        .remove(Cookie::build(("refreshToken", "")).path("/"));

    (jar, Json(json!({ "success": true })))
}
