//! Checkout and check-in endpoints

use axum::{extract::State, Json};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, CirculationQuery},
    AppState,
};

use super::AppQuery;

impl CirculationQuery {
    fn require_id(self) -> AppResult<String> {
        self.id.ok_or(AppError::MissingQueryParameter("id"))
    }
}

/// Check a copy of a book out
#[utoipa::path(
    post,
    path = "/checkout",
    tag = "circulation",
    params(CirculationQuery),
    responses(
        (status = 200, description = "Book with its quantity decremented", body = Book),
        (status = 400, description = "Missing id or no copies left", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn checkout(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<CirculationQuery>,
) -> AppResult<Json<Book>> {
    let id = query.require_id()?;
    let book = state.services.catalog.checkout(&id).await?;
    Ok(Json(book))
}

/// Check a copy of a book back in
#[utoipa::path(
    post,
    path = "/checkin",
    tag = "circulation",
    params(CirculationQuery),
    responses(
        (status = 200, description = "Book with its quantity incremented", body = Book),
        (status = 400, description = "Missing id", body = crate::error::ErrorResponse),
        (status = 404, description = "Book not found", body = crate::error::ErrorResponse)
    )
)]
pub async fn checkin(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<CirculationQuery>,
) -> AppResult<Json<Book>> {
    let id = query.require_id()?;
    let book = state.services.catalog.checkin(&id).await?;
    Ok(Json(book))
}
