//! Short link entity mapping a token to its destination URL.

use chrono::{DateTime, Utc};

/// A stored short link.
///
/// The token is the primary key; the destination is immutable after creation.
/// Only the visit counter changes over a record's lifetime, and only through
/// the service's increment operation.
#[derive(Debug, Clone, PartialEq)]
pub struct ShortLink {
    pub token: String,
    pub target_url: String,
    pub visits: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a fresh record with zero visits, stamped now.
    pub fn new(token: impl Into<String>, target_url: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            target_url: target_url.into(),
            visits: 0,
            created_at: Utc::now(),
        }
    }
}
