//! Fixture defaults loaded from an in-memory JSON document

use crate::algorithms::{AlgorithmDescriptor, lookup};
use crate::builder::{Jwt, TokenBuilder};
use crate::error::JwtResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-suite overrides applied on top of the built-in descriptors
///
/// ```json
/// { "key_ids": { "RS256": "key2" }, "default_expiry_seconds": 300 }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    /// `kid` override per JOSE algorithm name
    pub key_ids: BTreeMap<String, String>,
    /// `exp` offset added to every token built through [`FixtureConfig::jwt`]
    pub default_expiry_seconds: Option<i64>,
}

impl FixtureConfig {
    /// Parse a JSON document
    ///
    /// # Errors
    /// Returns [`JwtError::Serialization`](crate::JwtError::Serialization) for
    /// malformed JSON and
    /// [`JwtError::UnknownAlgorithm`](crate::JwtError::UnknownAlgorithm) if a
    /// `key_ids` entry names an unregistered algorithm.
    pub fn from_json(json: &str) -> JwtResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        for name in config.key_ids.keys() {
            lookup(name)?;
        }
        tracing::debug!(
            overrides = config.key_ids.len(),
            default_expiry_seconds = ?config.default_expiry_seconds,
            "loaded fixture config"
        );
        Ok(config)
    }

    /// Override the `kid` used for `algorithm`
    #[must_use]
    pub fn with_key_id(mut self, algorithm: impl Into<String>, key_id: impl Into<String>) -> Self {
        self.key_ids.insert(algorithm.into(), key_id.into());
        self
    }

    /// Set the default expiry offset
    #[must_use]
    pub fn with_default_expiry_seconds(mut self, seconds: i64) -> Self {
        self.default_expiry_seconds = Some(seconds);
        self
    }

    /// Descriptor for `name` with this config's `kid` override applied
    ///
    /// # Errors
    /// Returns [`JwtError::UnknownAlgorithm`](crate::JwtError::UnknownAlgorithm)
    /// for an unregistered name.
    pub fn descriptor(&self, name: &str) -> JwtResult<AlgorithmDescriptor> {
        let descriptor = lookup(name)?;
        Ok(match self.key_ids.get(name) {
            Some(key_id) => descriptor.with_key_id(key_id.as_str()),
            None => descriptor,
        })
    }

    /// Builder for `name` using the built-in key, the `kid` override and the
    /// default expiry
    ///
    /// # Errors
    /// Same as [`Jwt::builder`].
    pub fn jwt(&self, name: &str) -> JwtResult<TokenBuilder> {
        let mut builder = Jwt::builder(name)?;
        if let Some(key_id) = self.key_ids.get(name) {
            builder = builder.key_id(key_id.as_str());
        }
        if let Some(seconds) = self.default_expiry_seconds {
            builder = builder.expires_in_seconds(seconds);
        }
        Ok(builder)
    }
}
