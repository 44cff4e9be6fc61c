//! Random token generation.
//!
//! Tokens are drawn uniformly from the 62-symbol alphanumeric alphabet.
//! Collision resistance is not a generator concern: the service retries on
//! store conflicts, so a statistically uniform (non-cryptographic) source is
//! sufficient.

use rand::{Rng, distr::Alphanumeric};

/// Source of random URL-safe tokens.
///
/// Abstracted behind a trait so service tests can script exact tokens, the
/// same way collisions are provoked against the store mock.
#[cfg_attr(test, mockall::automock)]
pub trait TokenGenerator: Send + Sync {
    /// Produces a random string of `length` alphanumeric characters.
    ///
    /// Each character is sampled independently and uniformly. A zero length
    /// yields an empty string; callers never ask for one.
    fn generate(&self, length: usize) -> String;
}

/// Thread-local-RNG implementation used everywhere outside tests.
pub struct RandomTokenGenerator;

impl TokenGenerator for RandomTokenGenerator {
    fn generate(&self, length: usize) -> String {
        rand::rng()
            .sample_iter(Alphanumeric)
            .take(length)
            .map(char::from)
            .collect()
    }
}
