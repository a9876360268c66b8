//! JWS compact serialization of a claim set

use crate::algorithms::AlgorithmDescriptor;
use crate::claims::ClaimSet;
use crate::crypto::Signer;
use crate::encoding::base64_url_encode;
use crate::error::JwtResult;
use crate::keys::KeyPair;
use crate::types::{SignedToken, TokenHeader};

/// Compose `header64.payload64.signature64`
///
/// The header is `{"kid":"<key id>","alg":"<jose name>"}` and the payload is
/// the rendered claim set. RSA tokens are reproducible; ECDSA tokens carry a
/// fresh signature on every call.
///
/// # Errors
/// Returns [`JwtError::SigningFailure`](crate::JwtError::SigningFailure) if
/// the key does not match the descriptor's algorithm, or
/// [`JwtError::Serialization`](crate::JwtError::Serialization) if rendering
/// fails.
pub fn compose(descriptor: &AlgorithmDescriptor, key: &KeyPair, claims: &ClaimSet) -> JwtResult<SignedToken> {
    compose_with(&Signer::new(descriptor.algorithm()), descriptor, key, claims)
}

pub(crate) fn compose_with(
    signer: &Signer,
    descriptor: &AlgorithmDescriptor,
    key: &KeyPair,
    claims: &ClaimSet,
) -> JwtResult<SignedToken> {
    let header = serde_json::to_string(&TokenHeader {
        kid: descriptor.key_id(),
        alg: descriptor.jose_name(),
    })?;
    let payload = claims.render()?;

    let mut signing_input = base64_url_encode(header.as_bytes());
    signing_input.push('.');
    signing_input.push_str(&base64_url_encode(payload.as_bytes()));

    let signature = signer.sign(key, signing_input.as_bytes())?;
    tracing::debug!(
        alg = descriptor.jose_name(),
        kid = descriptor.key_id(),
        claims = claims.len(),
        signature_len = signature.len(),
        "composed signed token"
    );
    Ok(SignedToken::from_parts(signing_input, &base64_url_encode(&signature)))
}
