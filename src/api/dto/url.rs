//! DTOs for the URL endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::ShortLink;
use crate::utils::qr_code::qr_code_link;

/// Request body shared by the shorten and lengthen endpoints.
///
/// Unknown fields are rejected so typos fail loudly instead of silently
/// shortening the wrong thing.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateUrlRequest {
    pub url: String,
}

/// Response for a freshly created link.
#[derive(Debug, Serialize)]
pub struct UrlResponse {
    pub token: String,
    pub target_url: String,
    pub qr_code: String,
}

impl UrlResponse {
    pub fn from_link(link: &ShortLink) -> Self {
        Self {
            token: link.token.clone(),
            target_url: link.target_url.clone(),
            qr_code: qr_code_link(&link.target_url),
        }
    }
}

/// Response for the visit-count endpoint.
#[derive(Debug, Serialize)]
pub struct VisitsResponse {
    pub visits: i64,
}

/// Full record shape returned by the development-only enumeration endpoint.
#[derive(Debug, Serialize)]
pub struct LinkSummary {
    pub token: String,
    pub target_url: String,
    pub visits: i64,
    pub created_at: DateTime<Utc>,
}

impl From<ShortLink> for LinkSummary {
    fn from(link: ShortLink) -> Self {
        Self {
            token: link.token,
            target_url: link.target_url,
            visits: link.visits,
            created_at: link.created_at,
        }
    }
}
