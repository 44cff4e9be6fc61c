//! Rate limiting middleware using a per-IP token bucket.

use std::sync::Arc;

use axum::response::IntoResponse;
use governor::clock::QuantaInstant;
use governor::middleware::NoOpMiddleware;
use tower_governor::{
    GovernorLayer, errors::GovernorError, governor::GovernorConfigBuilder,
    key_extractor::PeerIpKeyExtractor,
};

use crate::error::AppError;

/// Creates the rate limiter applied to the link-creation endpoints.
///
/// 2 requests per second with a burst of 100, keyed by the client's socket
/// peer address. Exceeding the limit answers with the application's error
/// body at `429 Too Many Requests`.
pub fn layer() -> GovernorLayer<PeerIpKeyExtractor, NoOpMiddleware<QuantaInstant>, axum::body::Body>
{
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(2)
            .burst_size(100)
            .finish()
            .unwrap(),
    );

    GovernorLayer::new(governor_conf).error_handler(|err| match err {
        GovernorError::TooManyRequests { .. } => AppError::too_many_requests(
            "request/rate-limited",
            "Too many requests, slow down.",
        )
        .into_response(),
        GovernorError::UnableToExtractKey => {
            AppError::internal("request/unextractable-client-key").into_response()
        }
        GovernorError::Other { msg, .. } => {
            AppError::internal("request/rate-limiter-error")
                .with_debug(msg.unwrap_or_default())
                .into_response()
        }
    })
}
