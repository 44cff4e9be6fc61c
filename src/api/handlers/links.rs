//! Handler for the development-only link enumeration.

use axum::{Json, extract::State};

use crate::api::dto::LinkSummary;
use crate::error::AppError;
use crate::state::AppState;

/// Lists every stored link.
///
/// # Endpoint
///
/// `GET /all`
///
/// Only routed when the configured environment is `development`; production
/// routers never expose it.
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkSummary>>, AppError> {
    let links = state.link_service.list_all().await?;

    Ok(Json(links.into_iter().map(LinkSummary::from).collect()))
}
