//! View-model mapping for heterogeneous backend product payloads.
//!
//! The backend is inconsistent about field names (`_id`/`id`,
//! `quantity`/`stock`, nested `category`/`brand` objects vs. flat names,
//! `images` as strings or objects). Each view-model field is resolved
//! through a fixed precedence chain; missing or unrecognized data resolves
//! to a documented default, never an error.

use chrono::Utc;
use serde_json::Value;

use crate::models::{Brand, Category, Product, ProductStatus};

/// First non-empty string among the given keys.
fn pick_str(value: &Value, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| value.get(key))
        .filter_map(Value::as_str)
        .find(|s| !s.is_empty())
        .map(String::from)
}

fn pick_f64(value: &Value, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .filter_map(|key| value.get(key))
        .find_map(Value::as_f64)
}

fn pick_u32(value: &Value, keys: &[&str]) -> Option<u32> {
    keys.iter()
        .filter_map(|key| value.get(key))
        .find_map(Value::as_u64)
        .map(|n| n.min(u64::from(u32::MAX)) as u32)
}

/// An image entry is either a bare URL string or an object with a `url`.
fn image_url(entry: &Value) -> Option<String> {
    match entry {
        Value::String(url) => Some(url.clone()),
        Value::Object(_) => entry
            .get("url")
            .and_then(Value::as_str)
            .map(String::from),
        _ => None,
    }
}

fn images(value: &Value) -> Vec<String> {
    value
        .get("images")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(image_url).collect())
        .unwrap_or_default()
}

/// Primary display image: `thumbnail`, then `imageUrl`, then the first
/// element of `images`, then empty.
fn primary_image(value: &Value) -> Option<String> {
    pick_str(value, &["thumbnail", "imageUrl"]).or_else(|| {
        value
            .get("images")
            .and_then(Value::as_array)
            .and_then(|entries| entries.first())
            .and_then(image_url)
    })
}

/// Reference id from a nested object (`category`/`brand`): flat `<key>Id`
/// field first, then the object's `_id`/`id`, then the field itself when it
/// is a bare id string.
fn nested_id(value: &Value, flat_key: &str, object_key: &str) -> Option<String> {
    if let Some(id) = pick_str(value, &[flat_key]) {
        return Some(id);
    }
    match value.get(object_key) {
        Some(nested @ Value::Object(_)) => pick_str(nested, &["_id", "id"]),
        Some(Value::String(id)) if !id.is_empty() => Some(id.clone()),
        _ => None,
    }
}

/// Display name from a flat `<key>Name` field or a nested object's `name`.
fn nested_name(value: &Value, flat_key: &str, object_key: &str) -> Option<String> {
    pick_str(value, &[flat_key])
        .or_else(|| value.get(object_key).and_then(|nested| pick_str(nested, &["name"])))
}

fn status(value: &Value) -> Option<ProductStatus> {
    value
        .get("status")
        .and_then(Value::as_str)
        .map(ProductStatus::from_backend)
}

/// Map a backend product object into the canonical view-model.
///
/// Total function: every missing field resolves to its default (`0` for
/// price/stock, empty string, empty vec; missing status displays `ACTIVE`).
/// Mapping an already-canonical product again is a no-op.
pub fn product_from_value(value: &Value) -> Product {
    Product {
        id: pick_str(value, &["id", "_id"]).unwrap_or_default(),
        name: pick_str(value, &["name", "productName"]).unwrap_or_default(),
        category: nested_name(value, "categoryName", "category").unwrap_or_default(),
        category_id: nested_id(value, "categoryId", "category").unwrap_or_default(),
        brand: nested_name(value, "brandName", "brand").unwrap_or_default(),
        brand_id: nested_id(value, "brandId", "brand").unwrap_or_default(),
        price: pick_f64(value, &["price", "basePrice"]).unwrap_or(0.0),
        stock: pick_u32(value, &["stock", "quantity", "inventoryQuantity"]).unwrap_or(0),
        status: status(value).unwrap_or(ProductStatus::Active),
        sku: pick_str(value, &["sku", "code"]).unwrap_or_default(),
        image: primary_image(value).unwrap_or_default(),
        images: images(value),
        description: pick_str(value, &["description"]).unwrap_or_default(),
        created_at: pick_str(value, &["createdAt"]).unwrap_or_default(),
        updated_at: pick_str(value, &["updatedAt"]).unwrap_or_default(),
    }
}

/// Map a create response; a product created without an explicit status is a
/// draft, not active.
pub fn created_product_from_value(value: &Value) -> Product {
    let mut product = product_from_value(value);
    if status(value).is_none() {
        product.status = ProductStatus::Draft;
    }
    product
}

/// Map an update response over the previously known product.
///
/// Update responses routinely omit fields that did not change; every omitted
/// field retains the previous local value. `updated_at` falls back to the
/// current time rather than the stale local timestamp.
pub fn merge_product_value(value: &Value, previous: &Product) -> Product {
    Product {
        id: pick_str(value, &["_id", "id"]).unwrap_or_else(|| previous.id.clone()),
        name: pick_str(value, &["name"]).unwrap_or_else(|| previous.name.clone()),
        category: nested_name(value, "categoryName", "category")
            .unwrap_or_else(|| previous.category.clone()),
        category_id: nested_id(value, "categoryId", "category")
            .unwrap_or_else(|| previous.category_id.clone()),
        brand: nested_name(value, "brandName", "brand").unwrap_or_else(|| previous.brand.clone()),
        brand_id: nested_id(value, "brandId", "brand").unwrap_or_else(|| previous.brand_id.clone()),
        price: pick_f64(value, &["price", "basePrice"]).unwrap_or(previous.price),
        stock: pick_u32(value, &["quantity", "stock"]).unwrap_or(previous.stock),
        status: status(value).unwrap_or_else(|| previous.status.clone()),
        sku: pick_str(value, &["sku"]).unwrap_or_else(|| previous.sku.clone()),
        image: primary_image(value).unwrap_or_else(|| previous.image.clone()),
        images: if value.get("images").and_then(Value::as_array).is_some() {
            images(value)
        } else {
            previous.images.clone()
        },
        description: pick_str(value, &["description"])
            .unwrap_or_else(|| previous.description.clone()),
        created_at: pick_str(value, &["createdAt"]).unwrap_or_else(|| previous.created_at.clone()),
        updated_at: pick_str(value, &["updatedAt"]).unwrap_or_else(|| Utc::now().to_rfc3339()),
    }
}

/// Unwrap the `{ data: ... }` envelope some gateways add; bodies without it
/// are used as-is.
pub fn envelope_data(value: &Value) -> &Value {
    value.get("data").unwrap_or(value)
}

/// Extract the item array from a list response.
///
/// Shape-detection rules tried in order (backends and intermediate gateways
/// disagree on wrapping):
/// 1. bare array
/// 2. `data` as an array (with or without a `success` flag)
/// 3. `data.data` as an array (double-wrapped gateways)
/// 4. `data` as an object with numeric keys, taken by value order
///
/// Anything else yields an empty collection, not an error.
pub fn list_from_value(value: &Value) -> Vec<Value> {
    if let Some(items) = value.as_array() {
        return items.clone();
    }
    if let Some(items) = value.get("data").and_then(Value::as_array) {
        return items.clone();
    }
    if let Some(items) = value
        .get("data")
        .and_then(|data| data.get("data"))
        .and_then(Value::as_array)
    {
        return items.clone();
    }
    if let Some(object) = value.get("data").and_then(Value::as_object) {
        return object.values().cloned().collect();
    }
    Vec::new()
}

/// Map a backend category entry; unnamed entries display a placeholder.
pub fn category_from_value(value: &Value) -> Category {
    Category {
        id: pick_str(value, &["_id", "id"])
            .or_else(|| {
                // Some backends hand out numeric ids.
                ["_id", "id"]
                    .iter()
                    .filter_map(|key| value.get(key))
                    .find_map(Value::as_u64)
                    .map(|n| n.to_string())
            })
            .unwrap_or_default(),
        name: pick_str(value, &["name", "categoryName"])
            .unwrap_or_else(|| "Unknown Category".to_string()),
    }
}

pub fn brand_from_value(value: &Value) -> Brand {
    Brand {
        id: pick_str(value, &["_id", "id"]).unwrap_or_default(),
        name: pick_str(value, &["name"]).unwrap_or_default(),
    }
}

/// Extract the status enum list: `data` member, else the body, else empty.
pub fn statuses_from_value(value: &Value) -> Vec<String> {
    envelope_data(value)
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(String::from)
                .collect()
        })
        .unwrap_or_default()
}
