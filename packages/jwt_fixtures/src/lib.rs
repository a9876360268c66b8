//! Signed JWT fixtures for authorization tests
//!
//! This crate provides:
//! - RS256, RS384, RS512, ES256 and ES384 token composition
//! - Insertion-ordered claim sets rendered byte for byte
//! - DER to raw (and back) ECDSA signature conversion
//! - The RFC 7515 example keys and canned fixture tokens
//!
//! ```no_run
//! # fn main() -> jwt_fixtures::JwtResult<()> {
//! let token = jwt_fixtures::jwt("RS256")?
//!     .key_id("key2")
//!     .claim("iss", "test issuer")
//!     .sign()?;
//! assert_eq!(token, jwt_fixtures::fixtures::VALID_RS256_SIGNED_JWT);
//! # Ok(())
//! # }
//! ```

mod algorithms;
mod builder;
mod claims;
mod composer;
mod config;
mod crypto;
mod encoding;
mod error;
pub mod fixtures;
mod keys;
pub mod resolve_ex;
mod types;

pub use algorithms::{Algorithm, AlgorithmDescriptor, lookup};
pub use builder::{Jwt, TokenBuilder, jwt};
pub use claims::{Claim, ClaimSet, ClaimValue, ClaimValues};
pub use composer::compose;
pub use config::FixtureConfig;
pub use crypto::{Signer, SignerRegistry, der_to_raw, raw_to_der, sign};
pub use error::*;
pub use keys::{KeyPair, KeyType};
pub use resolve_ex::ResolveExBuilder;
pub use types::SignedToken;
