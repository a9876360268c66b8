//! Token value types

use serde::Serialize;
use std::fmt;

/// JOSE header of a fixture token, serialized in `kid`, `alg` order
#[derive(Debug, Clone, Copy, Serialize)]
pub(crate) struct TokenHeader<'a> {
    pub kid: &'a str,
    pub alg: &'a str,
}

/// JWS compact serialization `header64.payload64.signature64`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignedToken(String);

impl SignedToken {
    pub(crate) fn from_parts(signing_input: String, signature64: &str) -> Self {
        let mut token = signing_input;
        token.reserve(1 + signature64.len());
        token.push('.');
        token.push_str(signature64);
        Self(token)
    }

    /// The whole token
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the token string
    #[inline]
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// `header64.payload64`, the bytes the signature covers
    #[must_use]
    pub fn signing_input(&self) -> &str {
        self.0.rsplit_once('.').map_or("", |(input, _)| input)
    }

    /// Base64url header segment
    #[must_use]
    pub fn header_segment(&self) -> &str {
        self.segment(0)
    }

    /// Base64url payload segment
    #[must_use]
    pub fn payload_segment(&self) -> &str {
        self.segment(1)
    }

    /// Base64url signature segment
    #[must_use]
    pub fn signature_segment(&self) -> &str {
        self.segment(2)
    }

    /// Decoded signature bytes
    ///
    /// # Errors
    /// Returns the base64 error if the signature segment is not unpadded
    /// base64url.
    pub fn signature_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        crate::encoding::base64_url_decode(self.signature_segment())
    }

    fn segment(&self, index: usize) -> &str {
        self.0.split('.').nth(index).unwrap_or("")
    }
}

impl AsRef<str> for SignedToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<SignedToken> for String {
    fn from(token: SignedToken) -> Self {
        token.0
    }
}

impl PartialEq<str> for SignedToken {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for SignedToken {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for SignedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
