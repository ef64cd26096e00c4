use axum::http::{HeaderMap, HeaderValue};

use lychee_admin::util::{extract_bearer_token, slugify};

#[test]
fn bearer_token_extraction() {
    let mut headers = HeaderMap::new();
    headers.insert("Authorization", HeaderValue::from_static("Bearer abc123"));
    assert_eq!(extract_bearer_token(&headers), Some("abc123".to_string()));
}

#[test]
fn missing_or_malformed_authorization_yields_none() {
    assert_eq!(extract_bearer_token(&HeaderMap::new()), None);

    let mut basic = HeaderMap::new();
    basic.insert("Authorization", HeaderValue::from_static("Basic abc"));
    assert_eq!(extract_bearer_token(&basic), None);

    let mut empty = HeaderMap::new();
    empty.insert("Authorization", HeaderValue::from_static("Bearer   "));
    assert_eq!(extract_bearer_token(&empty), None);
}

#[test]
fn slugify_strips_vietnamese_diacritics() {
    assert_eq!(slugify("Đồ điện tử"), "do-dien-tu");
    assert_eq!(slugify("Trà sữa"), "tra-sua");
}

#[test]
fn slugify_collapses_punctuation_and_trims() {
    assert_eq!(slugify("  Tea & Coffee!!  "), "tea-coffee");
    assert_eq!(slugify("Snacks"), "snacks");
    assert_eq!(slugify(""), "");
}
