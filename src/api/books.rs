//! Book endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{
        book::{BookPayload, BookQuery},
        response::{ApiResponse, BookDetail, BookList, CreatedBook, MessageResponse, ResponseStatus},
    },
};

use super::AppJson;

/// Add a book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created", body = crate::models::response::CreatedBookResponse),
        (status = 400, description = "Missing name, readPage above pageCount or malformed body", body = MessageResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    AppJson(data): AppJson<BookPayload>,
) -> AppResult<(StatusCode, Json<ApiResponse<CreatedBook>>)> {
    let book_id = state.services.books.create(&data).await?;
    let body = ApiResponse::success(CreatedBook { book_id })
        .with_message("Buku berhasil ditambahkan");
    Ok((StatusCode::CREATED, Json(body)))
}

/// List books, optionally filtered
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    params(BookQuery),
    responses(
        (status = 200, description = "Matching books in insertion order", body = crate::models::response::BookListResponse)
    )
)]
pub async fn list_books(
    State(state): State<crate::AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Json<ApiResponse<BookList>> {
    // Repeated keys must not reject the request; the last value wins
    let query: BookQuery = pairs.into_iter().collect();
    let books = state.services.books.list(&query).await;
    Json(ApiResponse::success(BookList { books }))
}

/// Get book details by ID
#[utoipa::path(
    get,
    path = "/books/{book_id}",
    tag = "books",
    params(("book_id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = crate::models::response::BookDetailResponse),
        (status = 404, description = "Book not found", body = MessageResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<ApiResponse<BookDetail>>> {
    let book = state.services.books.get_by_id(&book_id).await?;
    Ok(Json(ApiResponse::success(BookDetail { book })))
}

/// Replace a book's fields
#[utoipa::path(
    put,
    path = "/books/{book_id}",
    tag = "books",
    params(("book_id" = String, Path, description = "Book ID")),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = MessageResponse),
        (status = 400, description = "Missing name, readPage above pageCount or malformed body", body = MessageResponse),
        (status = 404, description = "Book not found", body = MessageResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
    AppJson(data): AppJson<BookPayload>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.update(&book_id, &data).await?;
    Ok(Json(MessageResponse::new(
        ResponseStatus::Success,
        "Buku berhasil diperbarui",
    )))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{book_id}",
    tag = "books",
    params(("book_id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 404, description = "Book not found", body = MessageResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(book_id): Path<String>,
) -> AppResult<Json<MessageResponse>> {
    state.services.books.delete(&book_id).await?;
    Ok(Json(MessageResponse::new(
        ResponseStatus::Success,
        "Buku berhasil dihapus",
    )))
}
