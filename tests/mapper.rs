//! View-model mapper tests: precedence chains, status mapping, shape
//! detection, and the update-merge fallbacks.

use serde_json::{Value, json};

use lychee_admin::mapper::{
    category_from_value, created_product_from_value, list_from_value, merge_product_value,
    product_from_value, statuses_from_value,
};
use lychee_admin::models::ProductStatus;

#[test]
fn missing_image_fields_map_to_empty() {
    let product = product_from_value(&json!({ "_id": "p1", "name": "Bare" }));
    assert_eq!(product.image, "");
    assert!(product.images.is_empty());
}

#[test]
fn image_precedence_thumbnail_first() {
    let product = product_from_value(&json!({
        "thumbnail": "https://cdn/t.jpg",
        "imageUrl": "https://cdn/i.jpg",
        "images": ["https://cdn/0.jpg"],
    }));
    assert_eq!(product.image, "https://cdn/t.jpg");
}

#[test]
fn image_falls_back_to_first_images_entry() {
    let from_string = product_from_value(&json!({ "images": ["https://cdn/0.jpg"] }));
    assert_eq!(from_string.image, "https://cdn/0.jpg");

    let from_object = product_from_value(&json!({ "images": [{ "url": "https://cdn/o.jpg" }] }));
    assert_eq!(from_object.image, "https://cdn/o.jpg");
    assert_eq!(from_object.images, vec!["https://cdn/o.jpg"]);
}

#[test]
fn backend_statuses_map_to_display_set() {
    assert_eq!(ProductStatus::from_backend("active"), ProductStatus::Active);
    assert_eq!(
        ProductStatus::from_backend("archived"),
        ProductStatus::Inactive
    );
    assert_eq!(ProductStatus::from_backend("draft"), ProductStatus::Draft);
    assert_eq!(ProductStatus::Active.to_string(), "ACTIVE");
    assert_eq!(ProductStatus::Inactive.to_string(), "INACTIVE");
    assert_eq!(ProductStatus::Draft.to_string(), "DRAFT");
}

#[test]
fn unknown_status_passes_through_unchanged() {
    let status = ProductStatus::from_backend("DISCONTINUED");
    assert_eq!(status, ProductStatus::Other("DISCONTINUED".to_string()));
    assert_eq!(status.to_string(), "DISCONTINUED");
}

#[test]
fn uppercase_update_statuses_map_like_lowercase() {
    assert_eq!(ProductStatus::from_backend("ACTIVE"), ProductStatus::Active);
    assert_eq!(
        ProductStatus::from_backend("ARCHIVED"),
        ProductStatus::Inactive
    );
}

#[test]
fn list_scenario_maps_inconsistent_field_names() {
    let product = product_from_value(&json!({
        "_id": "1",
        "name": "A",
        "price": 100,
        "quantity": 5,
        "status": "active",
    }));
    assert_eq!(product.id, "1");
    assert_eq!(product.name, "A");
    assert_eq!(product.price, 100.0);
    assert_eq!(product.stock, 5);
    assert_eq!(product.status, ProductStatus::Active);
}

#[test]
fn mapping_is_idempotent_on_canonical_shape() {
    let first = product_from_value(&json!({
        "_id": "p9",
        "name": "Lychee tea",
        "categoryName": "Drinks",
        "categoryId": "c1",
        "brandName": "Lala",
        "brandId": "b1",
        "price": 45000,
        "quantity": 3,
        "status": "archived",
        "sku": "SKU-9",
        "thumbnail": "https://cdn/9.jpg",
        "images": ["https://cdn/9.jpg"],
        "description": "tea",
        "createdAt": "2024-01-01",
        "updatedAt": "2024-02-01",
    }));

    let round_tripped = product_from_value(&serde_json::to_value(&first).unwrap());
    assert_eq!(round_tripped, first);
}

#[test]
fn nested_category_and_brand_objects_flatten() {
    let product = product_from_value(&json!({
        "id": "p2",
        "category": { "_id": "c7", "name": "Snacks" },
        "brand": { "id": "b7", "name": "Lala" },
    }));
    assert_eq!(product.category, "Snacks");
    assert_eq!(product.category_id, "c7");
    assert_eq!(product.brand, "Lala");
    assert_eq!(product.brand_id, "b7");
}

#[test]
fn bare_string_category_is_treated_as_id() {
    let product = product_from_value(&json!({ "id": "p3", "category": "c42" }));
    assert_eq!(product.category_id, "c42");
    assert_eq!(product.category, "");
}

#[test]
fn created_product_defaults_to_draft_without_status() {
    let product = created_product_from_value(&json!({ "_id": "new", "name": "N" }));
    assert_eq!(product.status, ProductStatus::Draft);

    let explicit = created_product_from_value(&json!({ "_id": "new", "status": "active" }));
    assert_eq!(explicit.status, ProductStatus::Active);
}

#[test]
fn merge_retains_previous_status_when_response_omits_it() {
    let previous = product_from_value(&json!({
        "_id": "p5", "name": "Old", "status": "archived", "quantity": 2,
    }));
    let merged = merge_product_value(&json!({ "name": "New name" }), &previous);
    assert_eq!(merged.status, ProductStatus::Inactive);
    assert_eq!(merged.name, "New name");
    assert_eq!(merged.stock, 2);
    assert_eq!(merged.id, "p5");
}

#[test]
fn merge_fills_updated_at_with_current_time() {
    let previous = product_from_value(&json!({ "_id": "p6", "updatedAt": "2024-01-01" }));
    let merged = merge_product_value(&json!({ "name": "X" }), &previous);
    assert_ne!(merged.updated_at, "2024-01-01");
    assert!(!merged.updated_at.is_empty());
}

#[test]
fn list_shape_rules_in_order() {
    let items = json!([{ "id": "1" }, { "id": "2" }]);

    // Bare array.
    assert_eq!(list_from_value(&items).len(), 2);
    // data member, with and without a success flag.
    assert_eq!(list_from_value(&json!({ "success": true, "data": items })).len(), 2);
    assert_eq!(list_from_value(&json!({ "data": items })).len(), 2);
    // Double-wrapped gateways.
    assert_eq!(list_from_value(&json!({ "data": { "data": items } })).len(), 2);
    // Object with numeric keys.
    assert_eq!(
        list_from_value(&json!({ "data": { "0": { "id": "1" }, "1": { "id": "2" } } })).len(),
        2
    );
    // Anything else is empty, not an error.
    assert!(list_from_value(&json!({ "data": "nope" })).is_empty());
    assert!(list_from_value(&Value::Null).is_empty());
}

#[test]
fn category_mapping_has_name_placeholder_and_stringified_ids() {
    let named = category_from_value(&json!({ "_id": "c1", "name": "Tea" }));
    assert_eq!(named.id, "c1");
    assert_eq!(named.name, "Tea");

    let unnamed = category_from_value(&json!({ "id": 17 }));
    assert_eq!(unnamed.id, "17");
    assert_eq!(unnamed.name, "Unknown Category");
}

#[test]
fn statuses_unwrap_data_or_use_body() {
    assert_eq!(
        statuses_from_value(&json!({ "data": ["ACTIVE", "DRAFT"] })),
        vec!["ACTIVE", "DRAFT"]
    );
    assert_eq!(statuses_from_value(&json!(["ACTIVE"])), vec!["ACTIVE"]);
    assert!(statuses_from_value(&json!({ "data": {} })).is_empty());
}
