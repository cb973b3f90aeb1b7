//! Checkout and return endpoints

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
    error::{AppError, AppResult, ErrorResponse},
    models::Book,
};

pub const MISSING_ID: &str = "Missing id query parameter.";

/// Query string shared by checkout and return, as documented in OpenAPI
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CirculationQuery {
    /// Book ID
    pub id: Option<String>,
}

impl CirculationQuery {
    /// First `id` in the query string; an empty `id=` is passed through as-is
    fn require_id(query: Result<Query<Vec<(String, String)>>, QueryRejection>) -> AppResult<String> {
        query
            .ok()
            .and_then(|Query(pairs)| pairs.into_iter().find(|(key, _)| key == "id"))
            .map(|(_, id)| id)
            .ok_or_else(|| AppError::BadRequest(MISSING_ID.to_string()))
    }
}

/// Checkout response
#[derive(Serialize, ToSchema)]
pub struct CheckoutResponse {
    pub message: String,
    #[serde(rename = "checked-out book")]
    pub book: Book,
}

/// Return response
#[derive(Serialize, ToSchema)]
pub struct ReturnResponse {
    pub message: String,
    #[serde(rename = "returned book")]
    pub book: Book,
    /// Copies available after the return
    pub current_quantity: i32,
}

/// Check out one copy of a book
#[utoipa::path(
    patch,
    path = "/checkout",
    tag = "circulation",
    params(CirculationQuery),
    responses(
        (status = 200, description = "Book checked out", body = CheckoutResponse),
        (status = 400, description = "Missing id or no copies available", body = ErrorResponse),
        (status = 404, description = "Book doesn't exist", body = ErrorResponse)
    )
)]
pub async fn checkout_book(
    State(state): State<crate::AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<CheckoutResponse>> {
    let id = CirculationQuery::require_id(query)?;
    let book = state.services.catalog.checkout_book(&id).await?;

    Ok(Json(CheckoutResponse {
        message: "Book is Successfully Checked-Out".to_string(),
        book,
    }))
}

/// Return one copy of a book
#[utoipa::path(
    patch,
    path = "/return",
    tag = "circulation",
    params(CirculationQuery),
    responses(
        (status = 200, description = "Book returned", body = ReturnResponse),
        (status = 400, description = "Missing id or all copies already returned", body = ErrorResponse),
        (status = 404, description = "Book doesn't exist", body = ErrorResponse)
    )
)]
pub async fn return_book(
    State(state): State<crate::AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> AppResult<Json<ReturnResponse>> {
    let id = CirculationQuery::require_id(query)?;
    let book = state.services.catalog.return_book(&id).await?;

    Ok(Json(ReturnResponse {
        message: "Book is Successfully Returned".to_string(),
        current_quantity: book.current_quantity,
        book,
    }))
}
