//! ECDSA signing (ES256, ES384) with DER to raw rewriting
//!
//! Each call draws a fresh random nonce, so signatures over the same input
//! differ. A signature whose R or S happens to start with a zero byte does
//! not fit the parity padding convention of [`der_to_raw`]; such a draw is
//! discarded and signing repeats with a new nonce.

use super::der::der_to_raw;
use crate::algorithms::Algorithm;
use crate::error::{JwtError, JwtResult};
use p256::ecdsa::signature::RandomizedSigner;
use p256::elliptic_curve::rand_core::OsRng;

/// Upper bound on nonce draws for one signature
const MAX_NONCE_DRAWS: usize = 16;

/// Sign with ECDSA P-256 and SHA-256, returning raw R‖S
pub(crate) fn sign_es256(signing_key: &p256::ecdsa::SigningKey, message: &[u8]) -> JwtResult<Vec<u8>> {
    sign_full_width(Algorithm::Es256, || {
        let signature: p256::ecdsa::Signature = signing_key
            .try_sign_with_rng(&mut OsRng, message)
            .map_err(|e| JwtError::signing_failure("ES256", e))?;
        let (r, s) = signature.split_bytes();
        Ok(DerDraw {
            full_width: r[0] != 0 && s[0] != 0,
            der: signature.to_der().as_bytes().to_vec(),
        })
    })
}

/// Sign with ECDSA P-384 and SHA-384, returning raw R‖S
pub(crate) fn sign_es384(signing_key: &p384::ecdsa::SigningKey, message: &[u8]) -> JwtResult<Vec<u8>> {
    sign_full_width(Algorithm::Es384, || {
        let signature: p384::ecdsa::Signature = signing_key
            .try_sign_with_rng(&mut OsRng, message)
            .map_err(|e| JwtError::signing_failure("ES384", e))?;
        let (r, s) = signature.split_bytes();
        Ok(DerDraw {
            full_width: r[0] != 0 && s[0] != 0,
            der: signature.to_der().as_bytes().to_vec(),
        })
    })
}

struct DerDraw {
    full_width: bool,
    der: Vec<u8>,
}

fn sign_full_width<F>(algorithm: Algorithm, mut draw: F) -> JwtResult<Vec<u8>>
where
    F: FnMut() -> JwtResult<DerDraw>,
{
    for attempt in 1..=MAX_NONCE_DRAWS {
        let DerDraw { full_width, der } = draw()?;
        if full_width {
            return der_to_raw(&der);
        }
        tracing::debug!(%algorithm, attempt, "short ECDSA component, drawing a new nonce");
    }
    Err(JwtError::signing_failure(
        algorithm.jose_name(),
        format!("no full-width signature after {MAX_NONCE_DRAWS} nonces"),
    ))
}
