#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};

use url_shortener_api::api::extract::MAX_REQUEST_BODY_SIZE;
use url_shortener_api::api::handlers::{
    lengthen_handler, list_links_handler, redirect_handler, shorten_handler, visits_handler,
};
use url_shortener_api::application::services::LinkService;
use url_shortener_api::domain::entities::ShortLink;
use url_shortener_api::infrastructure::persistence::MemoryLinkRepository;
use url_shortener_api::state::AppState;
use url_shortener_api::utils::token_generator::RandomTokenGenerator;

/// State wired over the in-memory store; each test gets a fresh one.
pub fn create_test_state() -> AppState {
    let repository = Arc::new(MemoryLinkRepository::new());
    let link_service = Arc::new(LinkService::new(repository, Arc::new(RandomTokenGenerator)));

    AppState { link_service }
}

/// Router carrying every handler, without rate limiting so tests stay
/// independent of client-address plumbing.
pub fn test_router(state: AppState) -> Router {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/lengthen", post(lengthen_handler))
        .route("/all", get(list_links_handler))
        .route("/{token}", get(redirect_handler))
        .route("/{token}/visits", get(visits_handler))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_SIZE))
        .with_state(state)
}

pub async fn seed_link(state: &AppState, url: &str) -> ShortLink {
    state.link_service.shorten(url).await.unwrap()
}
