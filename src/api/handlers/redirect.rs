//! Handler for short link redirection.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a token to its stored destination, counting the visit.
///
/// # Endpoint
///
/// `GET /{token}`
///
/// Responds `301 Moved Permanently` with the destination in `Location`.
/// The visit is persisted before the redirect is returned; a failed persist
/// fails the request rather than silently losing the count.
///
/// # Errors
///
/// Returns 404 when the token is unknown.
pub async fn redirect_handler(
    Path(token): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let mut link = state.link_service.find_by_token(&token).await?;

    state.link_service.increment_visits(&mut link).await?;

    debug!(token = %link.token, target = %link.target_url, "redirecting");

    Ok((
        StatusCode::MOVED_PERMANENTLY,
        [(header::LOCATION, link.target_url)],
    ))
}
