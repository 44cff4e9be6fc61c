//! Router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten`         - Create a short link (rate limited)
//! - `POST /lengthen`        - Create a deliberately long link (rate limited)
//! - `GET  /{token}`         - Redirect to the destination, counting the visit
//! - `GET  /{token}/visits`  - Visit count for a token
//! - `GET  /health`          - Liveness probe
//! - `GET  /all`             - Every stored record; development only
//!
//! # Middleware
//!
//! - **Tracing** - structured request/response logging
//! - **Rate limiting** - per-IP token bucket on the creation endpoints
//! - **Body limit** - JSON bodies over 1 MiB are refused
//! - **CORS** - optional, from configuration
//! - **Path normalization** - trailing slash handling

use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::extract::MAX_REQUEST_BODY_SIZE;
use crate::api::handlers::{
    health_handler, lengthen_handler, list_links_handler, redirect_handler, shorten_handler,
    visits_handler,
};
use crate::api::middleware::{cors, rate_limit, tracing};
use crate::config::Config;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
///
/// The enumeration endpoint is only wired up in the development environment;
/// a production router has no route for it at all.
pub fn app_router(state: AppState, config: &Config) -> Result<NormalizePath<Router>> {
    let create_routes = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/lengthen", post(lengthen_handler))
        .layer(rate_limit::layer());

    let mut router = Router::new()
        .merge(create_routes)
        .route("/health", get(health_handler))
        .route("/{token}", get(redirect_handler))
        .route("/{token}/visits", get(visits_handler));

    if config.environment.is_development() {
        router = router.route("/all", get(list_links_handler));
    }

    let router = router
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_SIZE))
        .with_state(state)
        .layer(tracing::layer());

    let router = cors::apply(router, &config.cors_allowed_origins)?;

    Ok(NormalizePathLayer::trim_trailing_slash().layer(router))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::LinkService;
    use crate::config::Environment;
    use crate::infrastructure::persistence::MemoryLinkRepository;
    use crate::utils::token_generator::RandomTokenGenerator;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let repository = Arc::new(MemoryLinkRepository::new());
        let link_service = Arc::new(LinkService::new(repository, Arc::new(RandomTokenGenerator)));
        AppState { link_service }
    }

    fn test_config(environment: Environment) -> Config {
        Config {
            database_url: None,
            listen_addr: "0.0.0.0:3000".to_string(),
            environment,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            cors_allowed_origins: vec![],
            db_max_connections: 10,
            db_connect_timeout: 30,
        }
    }

    async fn send(app: NormalizePath<Router>, uri: &str) -> StatusCode {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        response.status()
    }

    #[tokio::test]
    async fn test_health_is_routed() {
        let app = app_router(test_state(), &test_config(Environment::Production)).unwrap();
        assert_eq!(send(app, "/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_trailing_slashes_are_normalized() {
        let app = app_router(test_state(), &test_config(Environment::Production)).unwrap();
        assert_eq!(send(app, "/health/").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_enumeration_only_exists_in_development() {
        let dev = app_router(test_state(), &test_config(Environment::Development)).unwrap();
        assert_eq!(send(dev, "/all").await, StatusCode::OK);

        // In production "/all" falls through to the token route and misses.
        let prod = app_router(test_state(), &test_config(Environment::Production)).unwrap();
        assert_eq!(send(prod, "/all").await, StatusCode::NOT_FOUND);
    }
}
