//! Catalog endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{error::AppResult, models::book::Book, AppState};

use super::AppJson;

/// List every book in the catalog
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books, in insertion order", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> Json<Vec<Book>> {
    Json(state.services.catalog.list_books().await)
}

/// Get a book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(("id" = String, Path, description = "Book ID")),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(&id).await?;
    Ok(Json(book))
}

/// Add a book to the end of the catalog
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = Book,
    responses(
        (status = 201, description = "Book created", body = Book),
        (status = 400, description = "Malformed request body", body = crate::error::ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    AppJson(book): AppJson<Book>,
) -> (StatusCode, Json<Book>) {
    let book = state.services.catalog.create_book(book).await;
    (StatusCode::CREATED, Json(book))
}
