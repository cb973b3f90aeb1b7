//! API handlers for the book catalog REST endpoints

pub mod books;
pub mod circulation;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};
use serde::de::DeserializeOwned;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use validator::Validate;

use crate::{error::AppError, AppState};

pub const INVALID_BODY: &str = "Invalid request body";

/// JSON body extractor that also runs `validator` checks.
///
/// The body is decoded whatever its `Content-Type`. Malformed JSON and failed
/// validation are both reported as `400 {"message":"Invalid request body"}`.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!("Unreadable request body: {}", rejection.body_text());
            AppError::BadRequest(INVALID_BODY.to_string())
        })?;

        let Json(value) = Json::<T>::from_bytes(&bytes).map_err(|rejection| {
            tracing::debug!("Rejected request body: {}", rejection.body_text());
            AppError::BadRequest(INVALID_BODY.to_string())
        })?;

        value.validate().map_err(|errors| {
            tracing::debug!("Request body failed validation: {}", errors);
            AppError::BadRequest(INVALID_BODY.to_string())
        })?;

        Ok(ValidatedJson(value))
    }
}

/// Root route; answers with an empty 200
async fn root() -> StatusCode {
    StatusCode::OK
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/", get(root))
        // Health check
        .route("/health", get(health::health_check))
        // Books
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        // Circulation
        .route("/checkout", patch(circulation::checkout_book))
        .route("/return", patch(circulation::return_book))
        .with_state(state);

    Router::new()
        .merge(api)
        .merge(openapi::create_openapi_router())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
