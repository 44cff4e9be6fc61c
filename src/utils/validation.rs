//! Destination URL validation.

use url::Url;

/// Returns true when `candidate` is a well-formed absolute URL with an
/// `http` or `https` scheme and a non-empty host.
pub fn is_valid_url(candidate: &str) -> bool {
    Url::parse(candidate)
        .is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host())
}
