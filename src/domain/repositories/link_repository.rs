//! Repository trait for short link data access.

use crate::domain::entities::ShortLink;
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface for short links.
///
/// Uniqueness of tokens is enforced here: [`LinkRepository::create`] is the
/// single insertion point, and a duplicate token must fail with the
/// collision variant so the service can retry with a fresh token.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] -
///   lock-guarded in-process map
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new record.
    ///
    /// # Errors
    ///
    /// Returns the already-exists variant if the token is taken (recoverable,
    /// retried by the service) and an internal error for any other storage
    /// fault.
    async fn create(&self, link: &ShortLink) -> Result<(), AppError>;

    /// Looks up the record stored under `token`.
    ///
    /// # Errors
    ///
    /// Returns the not-found variant if the token is absent and an internal
    /// error for any other storage fault.
    async fn find_by_token(&self, token: &str) -> Result<ShortLink, AppError>;

    /// Replaces the stored record matching `link.token`.
    ///
    /// Used exclusively to persist visit-count increments.
    ///
    /// # Errors
    ///
    /// Returns the not-found variant if no record matches the token and an
    /// internal error for any other storage fault.
    async fn update(&self, link: &ShortLink) -> Result<(), AppError>;

    /// Returns every stored record, in no particular order.
    ///
    /// Backs the development-only enumeration endpoint.
    async fn list_all(&self) -> Result<Vec<ShortLink>, AppError>;
}
