//! Handler for the visit-count lookup.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::VisitsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns how many times a short link has been visited.
///
/// # Endpoint
///
/// `GET /{token}/visits`
///
/// # Errors
///
/// Returns 404 when the token is unknown.
pub async fn visits_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<VisitsResponse>, AppError> {
    let link = state.link_service.find_by_token(&token).await?;

    Ok(Json(VisitsResponse {
        visits: link.visits,
    }))
}
