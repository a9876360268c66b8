//! Ordered claim set rendered into a byte-exact JSON payload
//!
//! Claims are emitted in insertion order and duplicates are kept, so a test
//! can build exactly the payload it expects the system under test to see.
//! Text renders quoted, integers render bare, multi-valued claims render as
//! a JSON array. There is no whitespace anywhere in the output.

use crate::error::JwtResult;
use chrono::Utc;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// A single claim scalar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimValue {
    /// Rendered as a JSON string
    Text(String),
    /// Rendered as a bare JSON number
    Integer(i64),
}

impl From<&str> for ClaimValue {
    fn from(value: &str) -> Self {
        ClaimValue::Text(value.to_string())
    }
}

impl From<String> for ClaimValue {
    fn from(value: String) -> Self {
        ClaimValue::Text(value)
    }
}

impl From<&String> for ClaimValue {
    fn from(value: &String) -> Self {
        ClaimValue::Text(value.clone())
    }
}

impl From<i64> for ClaimValue {
    fn from(value: i64) -> Self {
        ClaimValue::Integer(value)
    }
}

impl From<i32> for ClaimValue {
    fn from(value: i32) -> Self {
        ClaimValue::Integer(i64::from(value))
    }
}

impl From<u32> for ClaimValue {
    fn from(value: u32) -> Self {
        ClaimValue::Integer(i64::from(value))
    }
}

impl Serialize for ClaimValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ClaimValue::Text(text) => serializer.serialize_str(text),
            ClaimValue::Integer(number) => serializer.serialize_i64(*number),
        }
    }
}

/// One or many scalars attached to a claim name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimValues {
    /// `"name":value`
    Single(ClaimValue),
    /// `"name":[v1,v2,...]`
    ///
    /// Elements are rendered one by one, so text and integers may be mixed
    /// in one array.
    Many(Vec<ClaimValue>),
}

impl From<ClaimValue> for ClaimValues {
    fn from(value: ClaimValue) -> Self {
        ClaimValues::Single(value)
    }
}

macro_rules! single_claim_values {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ClaimValues {
                fn from(value: $ty) -> Self {
                    ClaimValues::Single(value.into())
                }
            }
        )*
    };
}

single_claim_values!(&str, String, &String, i64, i32, u32);

impl<T: Into<ClaimValue>> From<Vec<T>> for ClaimValues {
    fn from(values: Vec<T>) -> Self {
        ClaimValues::Many(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClaimValue>, const N: usize> From<[T; N]> for ClaimValues {
    fn from(values: [T; N]) -> Self {
        ClaimValues::Many(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClaimValue> + Clone> From<&[T]> for ClaimValues {
    fn from(values: &[T]) -> Self {
        ClaimValues::Many(values.iter().cloned().map(Into::into).collect())
    }
}

impl Serialize for ClaimValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ClaimValues::Single(value) => value.serialize(serializer),
            ClaimValues::Many(values) => values.serialize(serializer),
        }
    }
}

/// A named claim
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Claim {
    name: String,
    values: ClaimValues,
}

impl Claim {
    /// Claim name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Claim value(s)
    #[must_use]
    pub fn values(&self) -> &ClaimValues {
        &self.values
    }
}

/// Insertion-ordered claim set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimSet {
    claims: Vec<Claim>,
}

impl ClaimSet {
    /// Create an empty claim set
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self { claims: Vec::new() }
    }

    /// Append a claim; an existing claim with the same name is kept
    ///
    /// Collections always render as a JSON array, a one-element `Vec` or
    /// array included (`{"aud":["a"]}`). Pass the scalar itself for
    /// `{"aud":"a"}`.
    pub fn add_claim(&mut self, name: impl Into<String>, values: impl Into<ClaimValues>) -> &mut Self {
        self.claims.push(Claim {
            name: name.into(),
            values: values.into(),
        });
        self
    }

    /// Append `exp` set to the current epoch second plus `offset_seconds`
    pub fn add_expiry_seconds(&mut self, offset_seconds: i64) -> &mut Self {
        let expiry = Utc::now().timestamp().saturating_add(offset_seconds);
        self.add_claim("exp", expiry)
    }

    /// Number of claims, duplicates included
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.claims.len()
    }

    /// Whether no claim has been added
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    /// Claims in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Claim> {
        self.claims.iter()
    }

    /// Render the payload JSON
    ///
    /// # Errors
    /// Returns [`JwtError::Serialization`](crate::JwtError::Serialization) if
    /// serde_json rejects the output.
    pub fn render(&self) -> JwtResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl Serialize for ClaimSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.claims.len()))?;
        for claim in &self.claims {
            map.serialize_entry(&claim.name, &claim.values)?;
        }
        map.end()
    }
}
