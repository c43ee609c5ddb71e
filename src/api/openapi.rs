//! OpenAPI documentation

use axum::Json;
use utoipa::OpenApi;

use crate::api::{books, circulation, health};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Library Inventory API",
        version = "0.1.0",
        description = "In-memory book catalog with checkout and check-in"
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::get_book,
        books::create_book,
        // Circulation
        circulation::checkout,
        circulation::checkin,
    ),
    components(
        schemas(
            crate::models::book::Book,
            health::HealthResponse,
            health::ReadyResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Catalog management"),
        (name = "circulation", description = "Checkout and check-in")
    )
)]
pub struct ApiDoc;

/// Serve the OpenAPI document as JSON
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
