//! QR code link construction.
//!
//! Create responses carry a link to a rendered QR code for the destination
//! rather than an inline image; the external renderer handles the rest.

use url::form_urlencoded;

const QR_CODE_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";

/// Builds a QR code image URL for `target_url`, query-escaped.
pub fn qr_code_link(target_url: &str) -> String {
    let escaped: String = form_urlencoded::byte_serialize(target_url.as_bytes()).collect();
    format!("{QR_CODE_ENDPOINT}?data={escaped}")
}
