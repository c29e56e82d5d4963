//! Tests for the storefront API client.

use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::StorefrontClient;
use parts_common::{CatalogError, GalleryEntry};

fn products_json() -> serde_json::Value {
    serde_json::json!([
        {
            "id": 1, "title": "Wheel A", "brand": "BBS", "gen": "e46", "cat": "wheels",
            "price": 500, "img": "https://cdn.example.com/a.jpg", "link": "https://shop.example.com/a"
        },
        {
            "id": 2, "title": "Wheel B", "brand": "OZ", "gen": "f80", "cat": "wheels",
            "price": null, "img": null, "link": "https://shop.example.com/b"
        }
    ])
}

#[test]
fn new_trims_trailing_slash() {
    let client = StorefrontClient::new("http://localhost:3000/");
    assert_eq!(client.base_url(), "http://localhost:3000");
}

// ── fetch_products ───────────────────────────────────────────────────

#[tokio::test]
async fn fetch_products_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(products_json()))
        .mount(&mock_server)
        .await;

    let client = StorefrontClient::new(&mock_server.uri());
    let products = client.fetch_products().await.unwrap();

    assert_eq!(products.len(), 2);
    assert_eq!(products[0].brand, "BBS");
    assert_eq!(products[0].price, Some(500.0));
    assert!(products[1].price.is_none());
    assert!(products[1].image.is_none());
}

#[tokio::test]
async fn fetch_products_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = StorefrontClient::new(&mock_server.uri());
    match client.fetch_products().await {
        Err(CatalogError::HttpStatus(status)) => assert_eq!(status.as_u16(), 503),
        other => panic!("Expected HttpStatus error, got: {other:?}"),
    }
}

#[tokio::test]
async fn fetch_products_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&mock_server)
        .await;

    let client = StorefrontClient::new(&mock_server.uri());
    let result = client.fetch_products().await;
    assert!(matches!(result, Err(CatalogError::Parse(_))));
}

#[tokio::test]
async fn fetch_products_skips_malformed_records() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": 1, "title": "Wheel A", "brand": "BBS", "gen": "e46", "cat": "wheels", "price": 500 },
            { "id": 2, "title": "Wheel B", "brand": "OZ", "gen": "f80", "cat": "wheels", "price": "call" },
            { "title": "No id", "brand": "KW" },
            { "id": 4, "title": 46, "brand": "Mann" },
            { "id": 5, "title": "Oil Filter", "brand": "Mann", "price": null }
        ])))
        .mount(&mock_server)
        .await;

    let client = StorefrontClient::new(&mock_server.uri());
    let products = client.fetch_products().await.unwrap();

    let ids: Vec<u64> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 5]);
    assert_eq!(products[0].price, Some(500.0));
    assert!(products[1].price.is_none());
}

#[tokio::test]
async fn fetch_products_non_array_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "error": "x" })))
        .mount(&mock_server)
        .await;

    let client = StorefrontClient::new(&mock_server.uri());
    let result = client.fetch_products().await;
    assert!(matches!(result, Err(CatalogError::Parse(_))));
}

// ── fetch_gallery ────────────────────────────────────────────────────

#[tokio::test]
async fn fetch_gallery_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/gallery"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "name": "Jane", "car": "2004 E46 M3", "imageUrl": "http://x/y.jpg" }
        ])))
        .mount(&mock_server)
        .await;

    let client = StorefrontClient::new(&mock_server.uri());
    let gallery = client.fetch_gallery().await.unwrap();

    assert_eq!(gallery.len(), 1);
    assert_eq!(gallery[0].name, "Jane");
    assert_eq!(gallery[0].image_url, "http://x/y.jpg");
}

#[tokio::test]
async fn fetch_gallery_skips_malformed_entries() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/gallery"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "name": "Jane", "car": "2004 E46 M3", "imageUrl": "http://x/y.jpg" },
            { "name": ["not", "a", "name"], "car": "E46" },
            "just a string"
        ])))
        .mount(&mock_server)
        .await;

    let client = StorefrontClient::new(&mock_server.uri());
    let gallery = client.fetch_gallery().await.unwrap();

    assert_eq!(gallery.len(), 1);
    assert_eq!(gallery[0].name, "Jane");
}

// ── post_gallery ─────────────────────────────────────────────────────

#[tokio::test]
async fn post_gallery_sends_json_body() {
    let mock_server = MockServer::start().await;
    let entry = GalleryEntry {
        name: "Jane".to_string(),
        car: "2004 E46 M3".to_string(),
        image_url: "http://x/y.jpg".to_string(),
    };

    Mock::given(method("POST"))
        .and(path("/api/gallery"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "name": "Jane", "car": "2004 E46 M3", "imageUrl": "http://x/y.jpg"
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = StorefrontClient::new(&mock_server.uri());
    client.post_gallery(&entry).await.unwrap();
}

#[tokio::test]
async fn post_gallery_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/gallery"))
        .respond_with(ResponseTemplate::new(422).set_body_string("invalid"))
        .mount(&mock_server)
        .await;

    let client = StorefrontClient::new(&mock_server.uri());
    let result = client.post_gallery(&GalleryEntry::default()).await;
    match result {
        Err(CatalogError::HttpStatus(status)) => assert_eq!(status.as_u16(), 422),
        other => panic!("Expected HttpStatus error, got: {other:?}"),
    }
}
