//! API integration tests
//!
//! Each test starts the full router on an ephemeral local port and talks to
//! it over real HTTP.

use book_catalog_server::{create_router, AppState, Catalog};
use pretty_assertions::assert_eq;
use reqwest::{Client, StatusCode};
use serde_json::{json, Value};

/// Spawn a server with a freshly seeded catalog and return its base URL
async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().expect("No local address");

    let app = create_router(AppState::new(Catalog::seeded()));
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    format!("http://{}", addr)
}

async fn patch(client: &Client, base: &str, path: &str, id: &str) -> (StatusCode, Value) {
    let response = client
        .patch(format!("{}/{}?id={}", base, path, id))
        .send()
        .await
        .expect("Failed to send request");
    let status = response.status();
    let body = response.json().await.expect("Failed to parse response");
    (status, body)
}

#[tokio::test]
async fn test_list_books() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/books", base))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = response.json().await.expect("Failed to parse response");
    let books = body.as_array().expect("Expected an array");
    assert_eq!(books.len(), 4);
    assert_eq!(books[1]["title"], "The Great Gatsby");
    assert_eq!(books[1]["original_quantity"], 5);
    assert_eq!(books[1]["current_quantity"], 5);
}

#[tokio::test]
async fn test_get_book() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/books/3", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["title"], "War and Peace");

    let response = client
        .get(format!("{}/books/404", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body, json!({ "message": "Book not found." }));
}

#[tokio::test]
async fn test_create_book() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .post(format!("{}/books", base))
        .json(&json!({
            "id": "5",
            "title": "Dune",
            "author": "Frank Herbert",
            "quantity": 4
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::CREATED);

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["message"], "Book is Successfully Created.");
    assert_eq!(
        body["Created-Book"],
        json!({
            "id": "5",
            "title": "Dune",
            "author": "Frank Herbert",
            "original_quantity": 4,
            "current_quantity": 4
        })
    );

    let books: Value = client
        .get(format!("{}/books", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(books.as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn test_create_duplicate_conflicts() {
    let base = spawn_server().await;
    let client = Client::new();

    for payload in [
        json!({ "id": "1", "title": "Brand New", "author": "X", "quantity": 1 }),
        json!({ "id": "77", "title": "NCERT Science", "author": "X", "quantity": 1 }),
    ] {
        let response = client
            .post(format!("{}/books", base))
            .json(&payload)
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    let books: Value = client
        .get(format!("{}/books", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(books.as_array().map(Vec::len), Some(4));
}

#[tokio::test]
async fn test_update_book() {
    let base = spawn_server().await;
    let client = Client::new();

    let (status, _) = patch(&client, &base, "checkout", "4").await;
    assert_eq!(status, StatusCode::OK);

    let response = client
        .put(format!("{}/books/4", base))
        .json(&json!({
            "id": "4",
            "title": "NCERT Physics",
            "author": "CBSE Board",
            "quantity": 10
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["updated_book"]["title"], "NCERT Physics");
    assert_eq!(body["updated_book"]["original_quantity"], 10);
    assert_eq!(body["updated_book"]["current_quantity"], 10);

    let response = client
        .put(format!("{}/books/nope", base))
        .json(&json!({ "id": "x", "title": "x", "author": "x", "quantity": 1 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_book_preserves_order() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .delete(format!("{}/books/2", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["deleted_book"]["id"], "2");

    let books: Value = client
        .get(format!("{}/books", base))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let ids: Vec<&str> = books
        .as_array()
        .expect("Expected an array")
        .iter()
        .filter_map(|b| b["id"].as_str())
        .collect();
    assert_eq!(ids, vec!["1", "3", "4"]);

    let response = client
        .delete(format!("{}/books/2", base))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_checkout_and_return_cycle() {
    let base = spawn_server().await;
    let client = Client::new();

    let (status, body) = patch(&client, &base, "checkout", "2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["checked-out book"]["current_quantity"], 4);

    for _ in 0..4 {
        let (status, _) = patch(&client, &base, "checkout", "2").await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, body) = patch(&client, &base, "checkout", "2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Book not available");

    for expected in 1..=5 {
        let (status, body) = patch(&client, &base, "return", "2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["current_quantity"], expected);
        assert_eq!(body["returned book"]["current_quantity"], expected);
    }

    let (status, _) = patch(&client, &base, "return", "2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_circulation_unknown_book() {
    let base = spawn_server().await;
    let client = Client::new();

    for path in ["checkout", "return"] {
        let (status, body) = patch(&client, &base, path, "999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Book doesn't exist.");
    }
}

#[tokio::test]
async fn test_health_check() {
    let base = spawn_server().await;
    let client = Client::new();

    let response = client
        .get(format!("{}/health", base))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["books"], 4);
}
