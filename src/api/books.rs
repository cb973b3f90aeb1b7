//! Book (catalog) endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult, ErrorResponse},
    models::{Book, BookPayload},
};

use super::ValidatedJson;

/// Response for a newly created book
#[derive(Serialize, ToSchema)]
pub struct CreatedBookResponse {
    pub message: String,
    #[serde(rename = "Created-Book")]
    pub created_book: Book,
}

/// Response for an updated book
#[derive(Serialize, ToSchema)]
pub struct UpdatedBookResponse {
    pub message: String,
    pub updated_book: Book,
}

/// Response for a deleted book
#[derive(Serialize, ToSchema)]
pub struct DeletedBookResponse {
    pub message: String,
    pub deleted_book: Book,
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books in catalog order", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> Json<Vec<Book>> {
    Json(state.services.catalog.list_books().await)
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = Book),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.catalog.get_book(&id).await?;
    Ok(Json(book))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookPayload,
    responses(
        (status = 201, description = "Book created", body = CreatedBookResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 409, description = "Book with the same ID or title exists", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    ValidatedJson(payload): ValidatedJson<BookPayload>,
) -> AppResult<(StatusCode, Json<CreatedBookResponse>)> {
    let created = state.services.catalog.create_book(payload).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedBookResponse {
            message: "Book is Successfully Created.".to_string(),
            created_book: created,
        }),
    ))
}

/// Update an existing book.
///
/// Overwrites every field and resets both quantities. Uniqueness of the new
/// ID and title is not checked.
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    request_body = BookPayload,
    responses(
        (status = 200, description = "Book updated", body = UpdatedBookResponse),
        (status = 400, description = "Invalid request body", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    payload: Result<ValidatedJson<BookPayload>, AppError>,
) -> AppResult<Json<UpdatedBookResponse>> {
    // An unknown ID wins over a bad body
    state.services.catalog.get_book(&id).await?;
    let ValidatedJson(payload) = payload?;

    let updated = state.services.catalog.update_book(&id, payload).await?;
    Ok(Json(UpdatedBookResponse {
        message: "Book is Successfully Updated".to_string(),
        updated_book: updated,
    }))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = DeletedBookResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeletedBookResponse>> {
    let deleted = state.services.catalog.delete_book(&id).await?;
    Ok(Json(DeletedBookResponse {
        message: "Book is Successfully Deleted".to_string(),
        deleted_book: deleted,
    }))
}
