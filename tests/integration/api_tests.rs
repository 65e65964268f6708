//! API integration tests

use axum::{
    body::{to_bytes, Body},
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use bookshelf_server::{api, AppState};

fn app() -> Router {
    api::router(AppState::new())
}

/// Send a request and return status plus parsed JSON body
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).expect("Failed to build request"))
        .await
        .expect("Failed to send request");

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn book(name: &str, page_count: u32, read_page: u32, reading: bool) -> Value {
    json!({
        "name": name,
        "year": 2020,
        "author": "X",
        "summary": "s",
        "publisher": "P",
        "pageCount": page_count,
        "readPage": read_page,
        "reading": reading
    })
}

async fn create(app: &Router, payload: Value) -> String {
    let (status, body) = send(app, Method::POST, "/books", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    body["data"]["bookId"]
        .as_str()
        .expect("No book ID")
        .to_string()
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    assert!(body.get("books").is_none());

    let (status, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
    assert_eq!(body["books"], 0);

    create(&app, book("A", 1, 0, false)).await;
    let (_, body) = send(&app, Method::GET, "/ready", None).await;
    assert_eq!(body["books"], 1);
}

#[tokio::test]
async fn test_create_finished_book() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/books", Some(book("A", 100, 100, false))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Buku berhasil ditambahkan");
    let id = body["data"]["bookId"].as_str().expect("No book ID");
    assert_eq!(id.len(), 16);

    let (status, body) = send(&app, Method::GET, &format!("/books/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    let stored = &body["data"]["book"];
    assert_eq!(stored["id"], id);
    assert_eq!(stored["finished"], true);
    assert_eq!(stored["pageCount"], 100);
    assert_eq!(stored["insertedAt"], stored["updatedAt"]);
}

#[tokio::test]
async fn test_create_without_name() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "name": "", "pageCount": 10, "readPage": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Gagal menambahkan buku. Mohon isi nama buku");

    let (status, _) = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "pageCount": 10, "readPage": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_read_page_exceeds_page_count() {
    let app = app();
    let (status, body) = send(&app, Method::POST, "/books", Some(book("B", 10, 20, false))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
    assert_eq!(
        body["message"],
        "Gagal menambahkan buku. readPage tidak boleh lebih besar dari pageCount"
    );

    let (_, body) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(body["data"]["books"], json!([]));
}

#[tokio::test]
async fn test_create_malformed_body() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/books",
        Some(json!({ "name": "A", "pageCount": -1 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], "fail");
}

#[tokio::test]
async fn test_get_unknown_book() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/books/nonexistent", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["status"], "fail");
    assert_eq!(body["message"], "Buku tidak ditemukan");
}

#[tokio::test]
async fn test_list_projection_and_order() {
    let app = app();
    let first = create(&app, book("First", 10, 0, false)).await;
    let second = create(&app, book("Second", 10, 10, false)).await;

    let (status, body) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(
        body["data"]["books"],
        json!([
            { "id": first, "name": "First", "publisher": "P" },
            { "id": second, "name": "Second", "publisher": "P" }
        ])
    );
}

#[tokio::test]
async fn test_list_filters() {
    let app = app();
    let reading = create(&app, book("Belajar Dicoding", 10, 5, true)).await;
    let finished = create(&app, book("Kelas Rust", 10, 10, false)).await;
    let idle = create(&app, book("dicoding lanjutan", 10, 0, false)).await;

    let ids = |body: &Value| -> Vec<String> {
        body["data"]["books"]
            .as_array()
            .expect("books is not an array")
            .iter()
            .map(|b| b["id"].as_str().unwrap_or_default().to_string())
            .collect()
    };

    let (_, body) = send(&app, Method::GET, "/books?name=DICODING", None).await;
    assert_eq!(ids(&body), vec![reading.clone(), idle.clone()]);

    let (_, body) = send(&app, Method::GET, "/books?reading=1", None).await;
    assert_eq!(ids(&body), vec![reading.clone()]);

    let (_, body) = send(&app, Method::GET, "/books?reading=0", None).await;
    assert_eq!(ids(&body), vec![finished.clone(), idle.clone()]);

    // Anything other than "1" means false
    let (_, body) = send(&app, Method::GET, "/books?finished=yes", None).await;
    assert_eq!(ids(&body), vec![reading.clone(), idle.clone()]);

    let (_, body) = send(&app, Method::GET, "/books?finished=1", None).await;
    assert_eq!(ids(&body), vec![finished]);

    let (_, body) = send(&app, Method::GET, "/books?name=dicoding&reading=0", None).await;
    assert_eq!(ids(&body), vec![idle]);
}

#[tokio::test]
async fn test_list_repeated_query_key() {
    let app = app();
    let reading = create(&app, book("A", 10, 5, true)).await;
    let idle = create(&app, book("B", 10, 5, false)).await;

    let (status, body) = send(&app, Method::GET, "/books?reading=1&reading=0", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["data"]["books"].as_array().map(Vec::len), Some(1));
    assert_eq!(body["data"]["books"][0]["id"], idle);

    let (status, body) = send(&app, Method::GET, "/books?reading=0&reading=1&page=2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["books"][0]["id"], reading);
}

#[tokio::test]
async fn test_update_book() {
    let app = app();
    let id = create(&app, book("B", 100, 10, true)).await;
    let (_, body) = send(&app, Method::GET, &format!("/books/{}", id), None).await;
    let before = body["data"]["book"].clone();

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/books/{}", id),
        Some(book("B2", 50, 50, false)),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Buku berhasil diperbarui");

    let (_, body) = send(&app, Method::GET, &format!("/books/{}", id), None).await;
    let after = &body["data"]["book"];
    assert_eq!(after["id"], id);
    assert_eq!(after["name"], "B2");
    assert_eq!(after["finished"], true);
    assert_eq!(after["reading"], false);
    assert_eq!(after["insertedAt"], before["insertedAt"]);
    assert_ne!(after["updatedAt"], before["updatedAt"]);
}

#[tokio::test]
async fn test_update_validation_precedes_lookup() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::PUT,
        "/books/nonexistent",
        Some(json!({ "pageCount": 10, "readPage": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Gagal memperbarui buku. Mohon isi nama buku");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/books/nonexistent",
        Some(book("B", 10, 20, false)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Gagal memperbarui buku. readPage tidak boleh lebih besar dari pageCount"
    );

    let (status, body) = send(
        &app,
        Method::PUT,
        "/books/nonexistent",
        Some(book("B", 10, 5, false)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Gagal memperbarui buku. Id tidak ditemukan");
}

#[tokio::test]
async fn test_delete_book() {
    let app = app();
    let id = create(&app, book("A", 1, 0, false)).await;
    let keep = create(&app, book("Keep", 1, 0, false)).await;

    let (status, body) = send(&app, Method::DELETE, &format!("/books/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "success");
    assert_eq!(body["message"], "Buku berhasil dihapus");

    let (status, _) = send(&app, Method::GET, &format!("/books/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::DELETE, &format!("/books/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Buku gagal dihapus. Id tidak ditemukan");

    let (_, body) = send(&app, Method::GET, "/books", None).await;
    assert_eq!(body["data"]["books"][0]["id"], keep);
    assert_eq!(body["data"]["books"].as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn test_openapi_document() {
    let app = app();
    let (status, body) = send(&app, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["paths"]["/books"].is_object());
}
