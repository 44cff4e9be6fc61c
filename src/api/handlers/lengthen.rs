//! Handler for the lengthen endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::{CreateUrlRequest, UrlResponse};
use crate::api::extract::AppJson;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a deliberately oversized link for the submitted destination URL.
///
/// # Endpoint
///
/// `POST /lengthen` with body `{"url": "<destination>"}`
///
/// Same contract as the shorten endpoint, except the token comes out at
/// `max(42, 2 × len(url))` characters. The point is the joke.
pub async fn lengthen_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateUrlRequest>,
) -> Result<(StatusCode, Json<UrlResponse>), AppError> {
    let link = state.link_service.lengthen(&payload.url).await?;

    Ok((StatusCode::CREATED, Json(UrlResponse::from_link(&link))))
}
