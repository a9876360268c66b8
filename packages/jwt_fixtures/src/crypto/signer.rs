//! Per-algorithm signers and the caller-owned signer cache

use super::{ecdsa, rsa};
use crate::algorithms::{Algorithm, AlgorithmDescriptor};
use crate::claims::ClaimSet;
use crate::error::{JwtError, JwtResult};
use crate::keys::KeyPair;
use crate::types::SignedToken;
use dashmap::DashMap;
use std::sync::Arc;

/// Signature primitive bound to one algorithm
///
/// ECDSA output is already rewritten to raw R‖S; RSA output is the
/// PKCS#1 v1.5 signature as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signer {
    algorithm: Algorithm,
}

impl Signer {
    /// Signer for `algorithm`
    #[inline]
    #[must_use]
    pub const fn new(algorithm: Algorithm) -> Self {
        Self { algorithm }
    }

    /// Algorithm this signer implements
    #[inline]
    #[must_use]
    pub const fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Sign `message` with `key`
    ///
    /// # Errors
    /// Returns [`JwtError::SigningFailure`] if the key does not belong to this
    /// algorithm's family or the primitive fails.
    pub fn sign(&self, key: &KeyPair, message: &[u8]) -> JwtResult<Vec<u8>> {
        match (self.algorithm, key) {
            (Algorithm::Rs256 | Algorithm::Rs384 | Algorithm::Rs512, KeyPair::Rsa { private, .. }) => {
                rsa::sign_rsa(self.algorithm, private, message)
            }
            (Algorithm::Es256, KeyPair::P256 { signing, .. }) => ecdsa::sign_es256(signing, message),
            (Algorithm::Es384, KeyPair::P384 { signing, .. }) => ecdsa::sign_es384(signing, message),
            (algorithm, key) => Err(JwtError::signing_failure(
                algorithm.jose_name(),
                format!("{} key cannot sign {}", key.key_type(), algorithm.primitive()),
            )),
        }
    }
}

/// Thread-safe cache of signers, one per algorithm
///
/// Owned by the caller rather than held in a process-wide static. Lookups
/// from several threads are safe and each algorithm's signer is created at
/// most once per registry.
#[derive(Debug, Default)]
pub struct SignerRegistry {
    signers: DashMap<Algorithm, Arc<Signer>>,
}

impl SignerRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            signers: DashMap::new(),
        }
    }

    /// Signer for `algorithm`, created on first use
    pub fn signer(&self, algorithm: Algorithm) -> Arc<Signer> {
        self.signers
            .entry(algorithm)
            .or_insert_with(|| {
                tracing::debug!(%algorithm, primitive = algorithm.primitive(), "creating signer");
                Arc::new(Signer::new(algorithm))
            })
            .clone()
    }

    /// Sign `message` with the cached signer for `descriptor`
    ///
    /// # Errors
    /// See [`Signer::sign`].
    pub fn sign(&self, descriptor: &AlgorithmDescriptor, key: &KeyPair, message: &[u8]) -> JwtResult<Vec<u8>> {
        self.signer(descriptor.algorithm()).sign(key, message)
    }

    /// Compose a signed token through the cached signer for `descriptor`
    ///
    /// # Errors
    /// See [`compose`](crate::compose).
    pub fn compose(
        &self,
        descriptor: &AlgorithmDescriptor,
        key: &KeyPair,
        claims: &ClaimSet,
    ) -> JwtResult<SignedToken> {
        let signer = self.signer(descriptor.algorithm());
        crate::composer::compose_with(&signer, descriptor, key, claims)
    }

    /// Number of signers created so far
    #[must_use]
    pub fn len(&self) -> usize {
        self.signers.len()
    }

    /// Whether no signer has been created yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.signers.is_empty()
    }
}

/// Sign `message` for `descriptor` without a cache
///
/// # Errors
/// See [`Signer::sign`].
pub fn sign(descriptor: &AlgorithmDescriptor, key: &KeyPair, message: &[u8]) -> JwtResult<Vec<u8>> {
    Signer::new(descriptor.algorithm()).sign(key, message)
}
