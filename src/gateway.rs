//! Thin client for the remote storefront backend.
//!
//! Every operation attaches an optional bearer token, interprets non-2xx
//! bodies into human-readable messages, and normalizes responses through the
//! mapper. Metadata lookups (categories, brands) get exactly one delayed
//! retry on server errors; product CRUD never auto-retries.

use std::time::Duration;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde_json::{Value, json};

use crate::mapper;
use crate::models::{Brand, Category, ListFilters, Product};
use crate::util::slugify;

/// Fixed message for 401/403 responses; the backend requires an Admin or
/// Seller account for product management.
pub const PERMISSION_MESSAGE: &str =
    "You do not have permission to perform this action. An Admin or Seller account is required.";

const GENERIC_VALIDATION_MESSAGE: &str = "Validation failed: invalid data";

/// Delay before the single retry of a failed metadata lookup.
pub const METADATA_RETRY_DELAY: Duration = Duration::from_secs(2);

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("{}", PERMISSION_MESSAGE)]
    Permission,
    #[error("{0}")]
    Validation(String),
    #[error("upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },
    #[error("network error: {0}")]
    Network(String),
}

impl GatewayError {
    pub fn is_server_error(&self) -> bool {
        matches!(self, GatewayError::Upstream { status, .. } if *status >= 500)
    }
}

/// Best-effort extraction of a validation message from a 400 body.
///
/// JSON bodies are checked for a field-level `errors` list, then `message`,
/// then `error`. Unparseable bodies are sniffed for known field names before
/// falling back to the raw text.
fn validation_message(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(parsed) => {
            if let Some(errors) = parsed.get("errors").and_then(Value::as_array)
                && !errors.is_empty()
            {
                return errors
                    .iter()
                    .map(|entry| {
                        format!(
                            "{}: {}",
                            entry.get("field").and_then(Value::as_str).unwrap_or(""),
                            entry.get("message").and_then(Value::as_str).unwrap_or("")
                        )
                    })
                    .collect::<Vec<_>>()
                    .join("; ");
            }
            ["message", "error"]
                .iter()
                .filter_map(|key| parsed.get(key))
                .filter_map(Value::as_str)
                .find(|msg| !msg.is_empty())
                .map(String::from)
                .unwrap_or_else(|| GENERIC_VALIDATION_MESSAGE.to_string())
        }
        Err(_) => {
            if body.contains("createdBy") {
                "Missing creator information".to_string()
            } else if body.contains("status") {
                "Invalid product status".to_string()
            } else if body.is_empty() {
                GENERIC_VALIDATION_MESSAGE.to_string()
            } else {
                body.to_string()
            }
        }
    }
}

/// Message for a non-2xx, non-validation response: the JSON `error` or
/// `message` member when the body parses, the raw text otherwise.
fn upstream_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|parsed| {
            ["error", "message"]
                .iter()
                .filter_map(|key| parsed.get(key))
                .filter_map(Value::as_str)
                .find(|msg| !msg.is_empty())
                .map(String::from)
        })
        .unwrap_or_else(|| body.to_string())
}

async fn interpret_error(response: reqwest::Response) -> GatewayError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => GatewayError::Permission,
        StatusCode::BAD_REQUEST => GatewayError::Validation(validation_message(&body)),
        other => GatewayError::Upstream {
            status: other.as_u16(),
            message: upstream_message(&body),
        },
    }
}

/// Drop payload keys whose value is an empty string or null.
///
/// The backend treats an omitted key as "field not set" and an explicit
/// empty value as "field cleared", which trips its validators; the contract
/// is PATCH-like semantics via omission.
pub fn strip_unset_fields(payload: &Value) -> Value {
    match payload {
        Value::Object(fields) => Value::Object(
            fields
                .iter()
                .filter(|(_, v)| !v.is_null() && v.as_str() != Some(""))
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        ),
        other => other.clone(),
    }
}

/// Gateway operations, as a trait so the list controller can run against a
/// stub in tests.
#[allow(async_fn_in_trait)]
pub trait ProductGateway {
    async fn list(&self, filters: &ListFilters) -> Result<Vec<Product>, GatewayError>;
    async fn get(&self, id: &str) -> Result<Product, GatewayError>;
    /// Returns the envelope-unwrapped backend JSON; the caller maps it
    /// (create responses default to draft, update responses merge over the
    /// previous product).
    async fn create(&self, payload: &Value) -> Result<Value, GatewayError>;
    async fn update(&self, id: &str, payload: &Value) -> Result<Value, GatewayError>;
    async fn remove(&self, id: &str) -> Result<(), GatewayError>;
    async fn list_categories(&self) -> Result<Vec<Category>, GatewayError>;
    async fn create_category(&self, name: &str) -> Result<Option<String>, GatewayError>;
    async fn list_brands(&self) -> Result<Vec<Brand>, GatewayError>;
    async fn list_statuses(&self) -> Result<Vec<String>, GatewayError>;
}

#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
    bearer: Option<String>,
    retry_delay: Duration,
}

impl HttpGateway {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            bearer: None,
            retry_delay: METADATA_RETRY_DELAY,
        }
    }

    /// Bearer token to attach; `None` sends anonymous requests, which the
    /// backend may reject.
    pub fn with_bearer(mut self, bearer: Option<String>) -> Self {
        self.bearer = bearer;
        self
    }

    /// Override the metadata retry delay (shortened in tests).
    pub fn with_retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = delay;
        self
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{}", self.base_url, path));
        match &self.bearer {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Value, GatewayError> {
        let response = builder
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(interpret_error(response).await);
        }

        // Some success responses have empty bodies.
        let body = response
            .text()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        if body.is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
    }

    async fn get_json(&self, path: &str) -> Result<Value, GatewayError> {
        self.send(self.request(Method::GET, path)).await
    }

    /// One attempt at the categories lookup: public endpoint first, meta
    /// proxy as fallback.
    async fn fetch_categories_once(&self) -> Result<Vec<Category>, GatewayError> {
        let value = match self.get_json("/categories").await {
            Ok(value) => value,
            Err(_) => self.get_json("/meta/categories").await?,
        };
        Ok(mapper::list_from_value(&value)
            .iter()
            .map(mapper::category_from_value)
            .collect())
    }

    async fn fetch_brands_once(&self) -> Result<Vec<Brand>, GatewayError> {
        let value = self.get_json("/meta/brands").await?;
        let is_expected_shape = value.get("success").and_then(Value::as_bool) == Some(true)
            && value.get("data").and_then(Value::as_array).is_some();
        if !is_expected_shape {
            tracing::warn!("unexpected brands response shape, treating as empty");
            return Ok(Vec::new());
        }
        Ok(mapper::list_from_value(&value)
            .iter()
            .map(mapper::brand_from_value)
            .collect())
    }
}

impl ProductGateway for HttpGateway {
    async fn list(&self, filters: &ListFilters) -> Result<Vec<Product>, GatewayError> {
        let value = self
            .send(
                self.request(Method::GET, "/products/admin")
                    .query(&filters.query_params()),
            )
            .await?;

        // A non-array payload is an empty page, not an error.
        let items = match value.get("data").and_then(Value::as_array) {
            Some(items) => items.clone(),
            None => Vec::new(),
        };
        Ok(items.iter().map(mapper::product_from_value).collect())
    }

    async fn get(&self, id: &str) -> Result<Product, GatewayError> {
        let value = self.get_json(&format!("/products/{id}")).await?;
        Ok(mapper::product_from_value(mapper::envelope_data(&value)))
    }

    async fn create(&self, payload: &Value) -> Result<Value, GatewayError> {
        let body = strip_unset_fields(payload);
        let value = self
            .send(self.request(Method::POST, "/products/create").json(&body))
            .await?;
        Ok(mapper::envelope_data(&value).clone())
    }

    async fn update(&self, id: &str, payload: &Value) -> Result<Value, GatewayError> {
        let body = strip_unset_fields(payload);
        let value = self
            .send(
                self.request(Method::PUT, &format!("/products/{id}"))
                    .json(&body),
            )
            .await?;
        Ok(mapper::envelope_data(&value).clone())
    }

    async fn remove(&self, id: &str) -> Result<(), GatewayError> {
        self.send(self.request(Method::DELETE, &format!("/products/{id}")))
            .await?;
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>, GatewayError> {
        match self.fetch_categories_once().await {
            Err(err) if err.is_server_error() => {
                tracing::warn!(error = %err, "categories lookup failed, retrying once");
                tokio::time::sleep(self.retry_delay).await;
                self.fetch_categories_once().await
            }
            other => other,
        }
    }

    async fn create_category(&self, name: &str) -> Result<Option<String>, GatewayError> {
        let payload = json!({
            "name": name,
            "slug": slugify(name),
            "description": format!("Category created for: {name}"),
        });
        let value = self
            .send(self.request(Method::POST, "/categories").json(&payload))
            .await?;
        let data = mapper::envelope_data(&value);
        Ok(["_id", "id"]
            .iter()
            .filter_map(|key| data.get(key))
            .filter_map(Value::as_str)
            .map(String::from)
            .next())
    }

    async fn list_brands(&self) -> Result<Vec<Brand>, GatewayError> {
        match self.fetch_brands_once().await {
            Err(err) if err.is_server_error() => {
                tracing::warn!(error = %err, "brands lookup failed, retrying once");
                tokio::time::sleep(self.retry_delay).await;
                self.fetch_brands_once().await
            }
            other => other,
        }
    }

    async fn list_statuses(&self) -> Result<Vec<String>, GatewayError> {
        let value = self.get_json("/products/statuses").await?;
        Ok(mapper::statuses_from_value(&value))
    }
}
