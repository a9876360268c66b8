//! Fluent builder for fixture tokens

use crate::algorithms::{AlgorithmDescriptor, lookup};
use crate::claims::{ClaimSet, ClaimValues};
use crate::composer::compose;
use crate::crypto::SignerRegistry;
use crate::error::JwtResult;
use crate::keys::KeyPair;
use crate::types::SignedToken;

/// Start a token signed with the RFC 7515 example key for `kind`
///
/// Shorthand for [`Jwt::builder`].
///
/// # Errors
/// Returns [`JwtError::UnknownAlgorithm`](crate::JwtError::UnknownAlgorithm)
/// for an unregistered name and
/// [`JwtError::MissingKey`](crate::JwtError::MissingKey) for `ES384`.
pub fn jwt(kind: &str) -> JwtResult<TokenBuilder> {
    Jwt::builder(kind)
}

/// Entry points for [`TokenBuilder`]
#[derive(Debug, Clone, Copy)]
pub struct Jwt;

impl Jwt {
    /// Builder bound to the built-in example key for `kind`
    ///
    /// # Errors
    /// See [`jwt`].
    pub fn builder(kind: &str) -> JwtResult<TokenBuilder> {
        let descriptor = lookup(kind)?;
        let key_pair = KeyPair::rfc7515_for(descriptor.algorithm())?;
        Ok(TokenBuilder::new(descriptor, key_pair))
    }

    /// Builder bound to an explicit key pair
    ///
    /// # Errors
    /// Returns [`JwtError::UnknownAlgorithm`](crate::JwtError::UnknownAlgorithm)
    /// for an unregistered name. A key of the wrong family is reported when
    /// signing.
    pub fn with_key_pair(kind: &str, key_pair: KeyPair) -> JwtResult<TokenBuilder> {
        Ok(TokenBuilder::new(lookup(kind)?, key_pair))
    }
}

/// Accumulates claims for one token
#[derive(Debug, Clone)]
#[must_use = "builders do nothing unless signed"]
pub struct TokenBuilder {
    descriptor: AlgorithmDescriptor,
    key_pair: KeyPair,
    claims: ClaimSet,
}

impl TokenBuilder {
    /// Builder for an already resolved descriptor
    pub fn new(descriptor: AlgorithmDescriptor, key_pair: KeyPair) -> Self {
        Self {
            descriptor,
            key_pair,
            claims: ClaimSet::new(),
        }
    }

    /// Override the `kid` header
    pub fn key_id(mut self, key_id: impl Into<String>) -> Self {
        self.descriptor = self.descriptor.with_key_id(key_id);
        self
    }

    /// Append a claim
    pub fn claim(mut self, name: impl Into<String>, values: impl Into<ClaimValues>) -> Self {
        self.claims.add_claim(name, values);
        self
    }

    /// Append `exp` as now plus `seconds`
    pub fn expires_in_seconds(mut self, seconds: i64) -> Self {
        self.claims.add_expiry_seconds(seconds);
        self
    }

    /// Claims accumulated so far
    #[must_use]
    pub fn claims(&self) -> &ClaimSet {
        &self.claims
    }

    /// Descriptor the token will be signed under
    #[must_use]
    pub fn descriptor(&self) -> &AlgorithmDescriptor {
        &self.descriptor
    }

    /// Key pair the token will be signed with
    #[must_use]
    pub fn key_pair(&self) -> &KeyPair {
        &self.key_pair
    }

    /// Sign and serialize the token
    ///
    /// # Errors
    /// See [`compose`](crate::compose).
    pub fn sign(&self) -> JwtResult<SignedToken> {
        compose(&self.descriptor, &self.key_pair, &self.claims)
    }

    /// Sign through a shared signer cache
    ///
    /// # Errors
    /// See [`compose`](crate::compose).
    pub fn sign_with(&self, registry: &SignerRegistry) -> JwtResult<SignedToken> {
        registry.compose(&self.descriptor, &self.key_pair, &self.claims)
    }
}
