//! Binary resolve-extension record carrying an issuer and an audience
//!
//! Layout, in order issuer then audience: one length byte followed by the
//! UTF-8 bytes of the value. An unset field is the single byte `0xFF`.

use crate::error::{JwtError, JwtResult};

/// Length byte marking an unset field
pub const NULL_LENGTH: u8 = 0xFF;

/// Longest encodable field, one below [`NULL_LENGTH`]
pub const MAX_FIELD_LENGTH: usize = 254;

/// Builder for the resolve-extension record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveExBuilder {
    issuer: Option<String>,
    audience: Option<String>,
}

impl ResolveExBuilder {
    /// Both fields unset
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Expected token issuer
    #[must_use]
    pub fn issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Expected token audience
    #[must_use]
    pub fn audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Encode the record
    ///
    /// # Errors
    /// Returns [`JwtError::LengthOverflow`] if a field is longer than
    /// [`MAX_FIELD_LENGTH`] bytes.
    pub fn build(&self) -> JwtResult<Vec<u8>> {
        let capacity = 2
            + self.issuer.as_ref().map_or(0, String::len)
            + self.audience.as_ref().map_or(0, String::len);
        let mut record = Vec::with_capacity(capacity);
        put_field(&mut record, self.issuer.as_deref())?;
        put_field(&mut record, self.audience.as_deref())?;
        Ok(record)
    }
}

fn put_field(record: &mut Vec<u8>, value: Option<&str>) -> JwtResult<()> {
    let Some(value) = value else {
        record.push(NULL_LENGTH);
        return Ok(());
    };
    let len = value.len();
    let len8 = u8::try_from(len)
        .ok()
        .filter(|&n| usize::from(n) <= MAX_FIELD_LENGTH)
        .ok_or(JwtError::LengthOverflow {
            len,
            max: MAX_FIELD_LENGTH,
        })?;
    record.push(len8);
    record.extend_from_slice(value.as_bytes());
    Ok(())
}
