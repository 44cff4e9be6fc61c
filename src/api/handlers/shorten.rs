//! Handler for the shorten endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::{CreateUrlRequest, UrlResponse};
use crate::api::extract::AppJson;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for the submitted destination URL.
///
/// # Endpoint
///
/// `POST /shorten` with body `{"url": "<destination>"}`
///
/// Responds `201 Created` with the token, destination, and a QR code link.
///
/// # Errors
///
/// Returns 400 for an invalid destination URL and 500 when storage fails or
/// token generation keeps colliding.
pub async fn shorten_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUrlRequest>,
) -> Result<(StatusCode, Json<UrlResponse>), AppError> {
    let link = state.link_service.shorten(&payload.url).await?;

    Ok((StatusCode::CREATED, Json(UrlResponse::from_link(&link))))
}
