//! Supported JOSE signature algorithms and their descriptors
//!
//! The set of algorithms is closed: dispatch happens by `match` on
//! [`Algorithm`]. The only string-keyed entry point is [`lookup`] (and the
//! equivalent `FromStr` impl), which fails with
//! [`JwtError::UnknownAlgorithm`] for unregistered names.

use crate::error::{JwtError, JwtResult};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Asymmetric signature algorithms usable for fixture tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Algorithm {
    /// RSASSA-PKCS1-v1_5 using SHA-256
    Rs256,
    /// RSASSA-PKCS1-v1_5 using SHA-384
    Rs384,
    /// RSASSA-PKCS1-v1_5 using SHA-512
    Rs512,
    /// ECDSA using P-256 and SHA-256
    Es256,
    /// ECDSA using P-384 and SHA-384
    Es384,
}

impl Algorithm {
    /// Every registered algorithm
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Rs256,
        Algorithm::Rs384,
        Algorithm::Rs512,
        Algorithm::Es256,
        Algorithm::Es384,
    ];

    /// JOSE `alg` header value
    #[must_use]
    pub const fn jose_name(self) -> &'static str {
        match self {
            Algorithm::Rs256 => "RS256",
            Algorithm::Rs384 => "RS384",
            Algorithm::Rs512 => "RS512",
            Algorithm::Es256 => "ES256",
            Algorithm::Es384 => "ES384",
        }
    }

    /// Name of the underlying signature primitive
    #[must_use]
    pub const fn primitive(self) -> &'static str {
        match self {
            Algorithm::Rs256 => "SHA256withRSA",
            Algorithm::Rs384 => "SHA384withRSA",
            Algorithm::Rs512 => "SHA512withRSA",
            Algorithm::Es256 => "SHA256withECDSA",
            Algorithm::Es384 => "SHA384withECDSA",
        }
    }

    /// Default descriptor, keyed by the JOSE name
    #[must_use]
    pub fn descriptor(self) -> AlgorithmDescriptor {
        AlgorithmDescriptor {
            key_id: Cow::Borrowed(self.jose_name()),
            algorithm: self,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.jose_name())
    }
}

impl FromStr for Algorithm {
    type Err = JwtError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|alg| alg.jose_name() == name)
            .ok_or_else(|| JwtError::unknown_algorithm(name))
    }
}

/// Immutable {key id, JOSE name, primitive name} triple for one algorithm
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlgorithmDescriptor {
    key_id: Cow<'static, str>,
    algorithm: Algorithm,
}

impl AlgorithmDescriptor {
    /// Key identifier written to the `kid` header
    #[inline]
    #[must_use]
    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /// JOSE `alg` header value
    #[inline]
    #[must_use]
    pub fn jose_name(&self) -> &'static str {
        self.algorithm.jose_name()
    }

    /// Underlying signature primitive name
    #[inline]
    #[must_use]
    pub fn primitive(&self) -> &'static str {
        self.algorithm.primitive()
    }

    /// The algorithm this descriptor selects
    #[inline]
    #[must_use]
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Same algorithm under a different key identifier
    #[must_use]
    pub fn with_key_id(self, key_id: impl Into<String>) -> Self {
        Self {
            key_id: Cow::Owned(key_id.into()),
            algorithm: self.algorithm,
        }
    }
}

/// Look up the descriptor registered for a JOSE algorithm name
///
/// # Errors
/// Returns [`JwtError::UnknownAlgorithm`] if `name` is not registered.
pub fn lookup(name: &str) -> JwtResult<AlgorithmDescriptor> {
    name.parse::<Algorithm>().map(Algorithm::descriptor)
}
