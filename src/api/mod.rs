//! API handlers for the library inventory REST endpoints

pub mod books;
pub mod circulation;
pub mod health;
pub mod openapi;

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    routing::{get, post},
    Router,
};
use serde::de::DeserializeOwned;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// JSON body extractor whose rejections render as `{"ERROR": ...}`.
///
/// The body is decoded as JSON whatever the `Content-Type` header says.
pub struct AppJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await?;
        let value = serde_json::from_slice(&bytes).map_err(|e| {
            AppError::MalformedBody(format!("Failed to parse the request body as JSON: {}", e))
        })?;
        Ok(AppJson(value))
    }
}

/// Query string extractor whose rejections render as `{"ERROR": ...}`
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct AppQuery<T>(pub T);

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Catalog
        .route("/books", get(books::list_books).post(books::create_book))
        .route("/books/:id", get(books::get_book))
        // Circulation
        .route("/checkout", post(circulation::checkout))
        .route("/checkin", post(circulation::checkin))
        // OpenAPI documentation
        .route("/api-docs/openapi.json", get(openapi::openapi_json))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
