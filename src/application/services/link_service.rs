//! Link creation, lookup, and visit accounting.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::ShortLink;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::token_generator::TokenGenerator;
use crate::utils::validation::is_valid_url;

/// Token length for regular short links.
const SHORT_TOKEN_LENGTH: usize = 6;

/// Lengthened tokens scale with the destination URL.
const LENGTHEN_TOKEN_SCALE_FACTOR: usize = 2;

/// Floor for lengthened tokens; short destinations still get a long token.
const MINIMUM_LONG_TOKEN_LENGTH: usize = 42;

/// Creation attempts before a collision streak is treated as a system fault.
/// Three independent uniform draws from 62^6 colliding means something is
/// broken, not unlucky.
const MAX_CREATE_ATTEMPTS: u32 = 3;

/// Facade consumed by the HTTP layer.
///
/// Validates destinations, drives the token collision-retry protocol against
/// the store, and accounts visits. Backend and randomness are injected as
/// trait objects: the store is chosen at runtime by configuration and both
/// are swapped for mocks in tests.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    generator: Arc<dyn TokenGenerator>,
}

impl LinkService {
    pub fn new(repository: Arc<dyn LinkRepository>, generator: Arc<dyn TokenGenerator>) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Shortens a destination URL, returning the freshly stored record.
    ///
    /// # Errors
    ///
    /// Returns a bad-request error for destinations that are not absolute
    /// http(s) URLs with a host, and an internal error when storage fails or
    /// every creation attempt collided.
    pub async fn shorten(&self, target_url: &str) -> Result<ShortLink, AppError> {
        self.create_with_retry(target_url, SHORT_TOKEN_LENGTH, "url/couldnt-shorten")
            .await
    }

    /// Deliberately produces an oversized token for the destination.
    ///
    /// The token length is `max(42, 2 × len(target_url))`. A gimmick, but a
    /// deliberate one; the creation protocol is identical to [`Self::shorten`].
    pub async fn lengthen(&self, target_url: &str) -> Result<ShortLink, AppError> {
        let length = MINIMUM_LONG_TOKEN_LENGTH.max(target_url.len() * LENGTHEN_TOKEN_SCALE_FACTOR);
        self.create_with_retry(target_url, length, "url/couldnt-lengthen")
            .await
    }

    /// Looks up the record stored under `token`.
    ///
    /// # Errors
    ///
    /// Returns a not-found error naming the token when absent; any other
    /// storage fault surfaces as internal with the fault kept in the debug
    /// field.
    pub async fn find_by_token(&self, token: &str) -> Result<ShortLink, AppError> {
        match self.repository.find_by_token(token).await {
            Ok(link) => Ok(link),
            Err(e) if e.is_not_found() => Err(AppError::not_found(
                "url/not-found",
                format!("Couldn't find URL with token ({token})."),
            )),
            Err(e) => Err(AppError::internal("url/internal").with_debug(e.into_debug())),
        }
    }

    /// Increments the visit count on `link` and persists it.
    ///
    /// The caller's record is bumped before the store write; if persisting
    /// fails the increment is rolled back on that record before the error
    /// returns, so the reference is only authoritative after success.
    pub async fn increment_visits(&self, link: &mut ShortLink) -> Result<(), AppError> {
        link.visits += 1;

        if let Err(e) = self.repository.update(link).await {
            link.visits -= 1;
            return Err(e);
        }

        Ok(())
    }

    /// Returns every stored record. Development-only surface.
    pub async fn list_all(&self) -> Result<Vec<ShortLink>, AppError> {
        self.repository
            .list_all()
            .await
            .map_err(|e| AppError::internal("url/internal").with_debug(e.into_debug()))
    }

    /// Creation protocol shared by shorten and lengthen.
    ///
    /// A bounded loop, not recursion: each pass generates a fresh token and
    /// attempts the insert, consuming one attempt on collision. Exhausting
    /// the budget or hitting any non-collision fault yields an internal
    /// error tagged with `failure_code`.
    async fn create_with_retry(
        &self,
        target_url: &str,
        token_length: usize,
        failure_code: &str,
    ) -> Result<ShortLink, AppError> {
        if !is_valid_url(target_url) {
            return Err(AppError::bad_request(
                "url/invalid",
                format!("The provided URL ({target_url}) is invalid."),
            ));
        }

        let mut last_error = None;

        for attempt in 1..=MAX_CREATE_ATTEMPTS {
            let link = ShortLink::new(self.generator.generate(token_length), target_url);

            match self.repository.create(&link).await {
                Ok(()) => return Ok(link),
                Err(e) if e.is_already_exists() => {
                    debug!(attempt, token = %link.token, "token collision, retrying");
                    last_error = Some(e);
                }
                Err(e) => {
                    warn!(code = failure_code, "storing link failed");
                    return Err(AppError::internal(failure_code).with_debug(e.into_debug()));
                }
            }
        }

        warn!(
            code = failure_code,
            attempts = MAX_CREATE_ATTEMPTS,
            "token collisions exhausted every attempt"
        );

        let debug = last_error.map(AppError::into_debug).unwrap_or_default();
        Err(AppError::internal(failure_code).with_debug(debug))
    }
}
