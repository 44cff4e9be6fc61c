//! CORS configuration.

use anyhow::{Context, Result};
use axum::{
    Router,
    http::{HeaderValue, Method, header::CONTENT_TYPE},
};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Applies CORS to the router based on the configured origin list.
///
/// An empty list leaves the router untouched; `*` allows any origin
/// (credentials stay disabled); otherwise only the listed origins are
/// allowed.
pub fn apply(router: Router, allowed_origins: &[String]) -> Result<Router> {
    if allowed_origins.is_empty() {
        tracing::info!("CORS not configured, no cross-origin access");
        return Ok(router);
    }

    let mut cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    if allowed_origins.iter().any(|origin| origin == "*") {
        cors = cors.allow_origin(AllowOrigin::any());
        tracing::info!("CORS enabled for any origin");
    } else {
        let origins = allowed_origins
            .iter()
            .map(|origin| {
                origin
                    .parse::<HeaderValue>()
                    .with_context(|| format!("Invalid CORS origin '{origin}'"))
            })
            .collect::<Result<Vec<_>>>()?;

        cors = cors.allow_origin(AllowOrigin::list(origins));
        tracing::info!(origins = ?allowed_origins, "CORS enabled for configured origins");
    }

    Ok(router.layer(cors))
}
