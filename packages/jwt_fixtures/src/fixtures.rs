//! Canned tokens and small string helpers for test scripts
//!
//! The ES256 tokens were signed with the RFC 7515 Appendix A.3 key under
//! `kid` `key1`; the RS256 token is reproduced exactly by
//! `jwt("RS256")?.key_id("key2").claim("iss", "test issuer").sign()`.

use crate::encoding::base64_url_encode;
use crate::error::{JwtError, JwtResult};

/// RS256, `kid` `key2`, `{"iss":"test issuer"}`
pub const VALID_RS256_SIGNED_JWT: &str = concat!(
    "eyJraWQiOiJrZXkyIiwiYWxnIjoiUlMyNTYifQ.",
    "eyJpc3MiOiJ0ZXN0IGlzc3VlciJ9.",
    "JYrWm0k-_u04FwVM_eY5NjpSYvYPi2AtQ5GY0nfOl2glXUSbMYc47t2GpOvMb59gmwSf7YaFn2LNVKdFGrIf8jElotgXhGHLAj2-",
    "Hww_AILjlj7Brwkw_tv4nvsx6oIHxHt5Md5z00SUrJPJHl5WIKk8KibQ8IHb_RU1G_pwhUHqItm-Ayt91IY-f4FBZc4yCVb9PXS7",
    "TPv9IwwJPkW14pZs9qjypejhTFc1okCm5tz9T0mPRNt_BoqBQJvTP571lRtyQ6bTcnN0aY8sreXY_jNxPXrTLgg6zooYWp1y_OW2",
    "87BSVHKmAWBmtG-XoMbRaZbxEe07M29uDu0GZjZhQg",
);

/// ES256, `kid` `key1`, `{"iss":"jwt test"}`
pub const VALID_ES256_SIGNED_JWT: &str = concat!(
    "eyJraWQiOiJrZXkxIiwiYWxnIjoiRVMyNTYifQ.",
    "eyJpc3MiOiJqd3QgdGVzdCJ9.",
    "PJ0yFl_eVoIMyLPYgDL_SUMk6fZ3RqafBbGpmW2bZMs-BHv3Sd-hWup6VWqItLnJgAUNHZJIztiwLfjl9hSWWw",
);

/// ES256, `kid` `key1`, `{"iss":"test issuer","exp":1493539200}`
pub const EXPIRED_ES256_SIGNED_JWT: &str = concat!(
    "eyJraWQiOiJrZXkxIiwiYWxnIjoiRVMyNTYifQ.",
    "eyJpc3MiOiJ0ZXN0IGlzc3VlciIsImV4cCI6MTQ5MzUzOTIwMH0.",
    "hWhi3Wmve1AQLQHUuN8PR9qElutw378ydEPtZWub2Qkh7Ei46mfW-zwaoloyj57cRS7G2R-GtkA6LjNKX0WSDA",
);

/// ES256, `kid` `key1`, `{"iss":"test issuer","nbf":1809072000}`
pub const UNREADY_ES256_SIGNED_JWT: &str = concat!(
    "eyJraWQiOiJrZXkxIiwiYWxnIjoiRVMyNTYifQ.",
    "eyJpc3MiOiJ0ZXN0IGlzc3VlciIsIm5iZiI6MTgwOTA3MjAwMH0.",
    "IamaLKCC-m31Zrb513OM9funekwAqf7HVe0MW5xbFBP99MXME7r1GRao8c8XN-XvMelqwkPDVxJoUCGzBGcnSw",
);

/// Unpadded base64url of the UTF-8 bytes of `value`
#[must_use]
pub fn base64_encode(value: &str) -> String {
    base64_url_encode(value.as_bytes())
}

/// Concatenate `parts` in order
#[must_use]
pub fn append(parts: &[&str]) -> String {
    parts.concat()
}

/// Byte length of `value` as a single byte
///
/// # Errors
/// Returns [`JwtError::LengthOverflow`] above 255 bytes.
pub fn length8(value: &str) -> JwtResult<u8> {
    u8::try_from(value.len()).map_err(|_| JwtError::LengthOverflow {
        len: value.len(),
        max: usize::from(u8::MAX),
    })
}
