//! RSASSA-PKCS1-v1_5 signing (RS256, RS384, RS512)
//!
//! PKCS#1 v1.5 is deterministic: the same key and message always produce
//! the same signature, which is what makes RSA fixtures reproducible.

use crate::algorithms::Algorithm;
use crate::error::{JwtError, JwtResult};
use rsa::RsaPrivateKey;
use rsa::pkcs1v15::SigningKey;
use rsa::signature::{SignatureEncoding, Signer};
use sha2::{Sha256, Sha384, Sha512};

/// Sign `message` with the digest selected by `algorithm`
pub(crate) fn sign_rsa(
    algorithm: Algorithm,
    private_key: &RsaPrivateKey,
    message: &[u8],
) -> JwtResult<Vec<u8>> {
    let key = private_key.clone();
    let signature = match algorithm {
        Algorithm::Rs256 => SigningKey::<Sha256>::new(key).try_sign(message),
        Algorithm::Rs384 => SigningKey::<Sha384>::new(key).try_sign(message),
        Algorithm::Rs512 => SigningKey::<Sha512>::new(key).try_sign(message),
        Algorithm::Es256 | Algorithm::Es384 => {
            return Err(JwtError::signing_failure(
                algorithm.jose_name(),
                "not an RSA algorithm",
            ));
        }
    }
    .map_err(|e| JwtError::signing_failure(algorithm.jose_name(), e))?;
    Ok(signature.to_vec())
}
