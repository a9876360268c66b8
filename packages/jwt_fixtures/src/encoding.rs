//! Base64url helpers (RFC 7515, no padding)

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};

/// Base64 URL-safe encoding without padding
#[inline]
pub(crate) fn base64_url_encode(input: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(input)
}

/// Base64 URL-safe decoding without padding
#[inline]
pub(crate) fn base64_url_decode(input: &str) -> Result<Vec<u8>, base64::DecodeError> {
    URL_SAFE_NO_PAD.decode(input)
}
