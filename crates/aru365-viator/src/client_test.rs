use super::*;

fn client(base_url: &str) -> ViatorClient {
    ViatorClient::new("test-key", base_url, 5).expect("client builds")
}

#[test]
fn endpoint_appends_below_partner_prefix() {
    let url = client("https://api.sandbox.viator.com/partner")
        .endpoint("products/bulk")
        .unwrap();
    assert_eq!(
        url.as_str(),
        "https://api.sandbox.viator.com/partner/products/bulk"
    );
}

#[test]
fn endpoint_tolerates_trailing_slash() {
    let url = client("https://api.viator.com/partner/")
        .endpoint("products/bulk")
        .unwrap();
    assert_eq!(url.as_str(), "https://api.viator.com/partner/products/bulk");
}

#[test]
fn endpoint_on_bare_origin() {
    let url = client("http://127.0.0.1:8080").endpoint("products").unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:8080/products");
}

#[test]
fn new_rejects_invalid_base_url() {
    let err = ViatorClient::new("k", "not-a-url", 5).unwrap_err();
    assert!(
        matches!(err, ViatorError::InvalidBaseUrl { .. }),
        "expected InvalidBaseUrl, got: {err:?}"
    );
}

#[test]
fn debug_redacts_api_key() {
    let rendered = format!("{:?}", client("https://api.viator.com/partner"));
    assert!(!rendered.contains("test-key"), "leaked key: {rendered}");
    assert!(rendered.contains("[redacted]"));
}

#[test]
fn bulk_request_serializes_camel_case() {
    let codes = vec!["A".to_string(), "B".to_string()];
    let body = serde_json::to_value(BulkRequest {
        product_codes: &codes,
    })
    .unwrap();
    assert_eq!(body, serde_json::json!({ "productCodes": ["A", "B"] }));
}
