//! Tests for signed token composition and the fluent builder

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::Utc;
use jwt_fixtures::fixtures::VALID_RS256_SIGNED_JWT;
use jwt_fixtures::{
    Algorithm, ClaimSet, Jwt, JwtError, JwtResult, KeyPair, SignedToken, SignerRegistry, compose,
    jwt, lookup, sign,
};
use rsa::signature::Verifier as _;

fn verify_rsa<D>(key: &KeyPair, token: &SignedToken) -> bool
where
    D: sha2::Digest + der::oid::AssociatedOid,
{
    let KeyPair::Rsa { public, .. } = key else {
        return false;
    };
    let Ok(bytes) = token.signature_bytes() else {
        return false;
    };
    let Ok(signature) = rsa::pkcs1v15::Signature::try_from(bytes.as_slice()) else {
        return false;
    };
    rsa::pkcs1v15::VerifyingKey::<D>::new(public.clone())
        .verify(token.signing_input().as_bytes(), &signature)
        .is_ok()
}

fn verify_es256(key: &KeyPair, token: &SignedToken) -> bool {
    let KeyPair::P256 { verifying, .. } = key else {
        return false;
    };
    let Ok(raw) = token.signature_bytes() else {
        return false;
    };
    let Ok(signature) = p256::ecdsa::Signature::from_slice(&raw) else {
        return false;
    };
    raw.len() == 64
        && verifying
            .verify(token.signing_input().as_bytes(), &signature)
            .is_ok()
}

fn verify_es384(key: &KeyPair, token: &SignedToken) -> bool {
    let KeyPair::P384 { verifying, .. } = key else {
        return false;
    };
    let Ok(raw) = token.signature_bytes() else {
        return false;
    };
    let Ok(signature) = p384::ecdsa::Signature::from_slice(&raw) else {
        return false;
    };
    raw.len() == 96
        && verifying
            .verify(token.signing_input().as_bytes(), &signature)
            .is_ok()
}

fn decode_segment(segment: &str) -> String {
    let bytes = URL_SAFE_NO_PAD
        .decode(segment)
        .unwrap_or_else(|e| panic!("bad segment {segment}: {e}"));
    String::from_utf8(bytes).unwrap_or_else(|e| panic!("segment is not UTF-8: {e}"))
}

#[test]
fn test_lookup_every_algorithm() {
    for name in ["RS256", "RS384", "RS512", "ES256", "ES384"] {
        let descriptor = lookup(name).unwrap_or_else(|e| panic!("{name}: {e}"));
        assert_eq!(descriptor.jose_name(), name);
        assert_eq!(descriptor.key_id(), name);
    }
    assert!(matches!(lookup("HS256"), Err(JwtError::UnknownAlgorithm(n)) if n == "HS256"));
    assert!(matches!(lookup(""), Err(JwtError::UnknownAlgorithm(_))));
}

#[test]
fn test_rs256_reproduces_canned_token() -> JwtResult<()> {
    let key = KeyPair::rfc7515_rs256()?;
    let mut claims = ClaimSet::new();
    claims.add_claim("iss", "test issuer");
    let descriptor = Algorithm::Rs256.descriptor().with_key_id("key2");

    let token = compose(&descriptor, &key, &claims)?;
    assert_eq!(token, VALID_RS256_SIGNED_JWT);
    assert!(verify_rsa::<sha2::Sha256>(&key, &token));

    // deterministic
    assert_eq!(compose(&descriptor, &key, &claims)?, token);
    Ok(())
}

#[test]
fn test_builder_reproduces_canned_token() -> JwtResult<()> {
    let token = jwt("RS256")?
        .key_id("key2")
        .claim("iss", "test issuer")
        .sign()?;
    assert_eq!(token.as_str(), VALID_RS256_SIGNED_JWT);
    Ok(())
}

#[test]
fn test_default_header_uses_jose_name_as_kid() -> JwtResult<()> {
    let token = jwt("RS384")?.claim("iss", "test issuer").sign()?;
    assert_eq!(decode_segment(token.header_segment()), r#"{"kid":"RS384","alg":"RS384"}"#);
    assert_eq!(decode_segment(token.payload_segment()), r#"{"iss":"test issuer"}"#);
    assert!(verify_rsa::<sha2::Sha384>(&KeyPair::rfc7515_rs256()?, &token));
    Ok(())
}

#[test]
fn test_rs512_signature_verifies() -> JwtResult<()> {
    let token = jwt("RS512")?.claim("sub", "alice").sign()?;
    assert!(verify_rsa::<sha2::Sha512>(&KeyPair::rfc7515_rs256()?, &token));
    assert!(!verify_rsa::<sha2::Sha256>(&KeyPair::rfc7515_rs256()?, &token));
    Ok(())
}

#[test]
fn test_es256_tokens_verify_and_differ() -> JwtResult<()> {
    let key = KeyPair::rfc7515_es256()?;
    let builder = jwt("ES256")?.key_id("key1").claim("iss", "jwt test");

    let first = builder.sign()?;
    let second = builder.sign()?;
    assert_eq!(first.signing_input(), second.signing_input());
    assert_ne!(first.signature_segment(), second.signature_segment());
    assert!(verify_es256(&key, &first));
    assert!(verify_es256(&key, &second));
    Ok(())
}

#[test]
fn test_es256_many_signatures_are_full_width() -> JwtResult<()> {
    let key = KeyPair::generate_es256();
    let builder = Jwt::with_key_pair("ES256", key.clone())?.claim("iss", "jwt test");
    for _ in 0..256 {
        assert!(verify_es256(&key, &builder.sign()?));
    }
    Ok(())
}

#[test]
fn test_es384_requires_explicit_key() -> JwtResult<()> {
    assert!(matches!(jwt("ES384"), Err(JwtError::MissingKey(_))));

    let key = KeyPair::generate_es384();
    let token = Jwt::with_key_pair("ES384", key.clone())?
        .claim("iss", "test issuer")
        .sign()?;
    assert!(verify_es384(&key, &token));
    Ok(())
}

#[test]
fn test_expiry_claim_is_near_now() -> JwtResult<()> {
    let before = Utc::now().timestamp();
    let token = jwt("RS256")?.claim("iss", "test issuer").expires_in_seconds(5).sign()?;
    let after = Utc::now().timestamp();

    let payload: serde_json::Value = serde_json::from_str(&decode_segment(token.payload_segment()))?;
    let exp = payload["exp"].as_i64().unwrap_or_default();
    assert!(exp >= before + 5 && exp <= after + 5, "exp {exp} outside [{before}, {after}] + 5");
    Ok(())
}

#[test]
fn test_key_family_mismatch_fails() -> JwtResult<()> {
    let result = Jwt::with_key_pair("RS256", KeyPair::rfc7515_es256()?)?.sign();
    assert!(matches!(
        result,
        Err(JwtError::SigningFailure { algorithm, .. }) if algorithm == "RS256"
    ));

    let result = Jwt::with_key_pair("ES384", KeyPair::rfc7515_es256()?)?.sign();
    assert!(matches!(result, Err(JwtError::SigningFailure { .. })));
    Ok(())
}

#[test]
fn test_unknown_algorithm_fails() {
    assert!(matches!(jwt("none"), Err(JwtError::UnknownAlgorithm(_))));
    assert!(matches!(
        Jwt::with_key_pair("PS256", KeyPair::generate_es256()),
        Err(JwtError::UnknownAlgorithm(_))
    ));
}

#[test]
fn test_registry_signs_like_direct_compose() -> JwtResult<()> {
    let registry = SignerRegistry::new();
    assert!(registry.is_empty());

    let builder = jwt("RS256")?.key_id("key2").claim("iss", "test issuer");
    assert_eq!(builder.sign_with(&registry)?, VALID_RS256_SIGNED_JWT);
    assert_eq!(builder.sign_with(&registry)?, VALID_RS256_SIGNED_JWT);
    assert_eq!(registry.len(), 1);

    let es = jwt("ES256")?.claim("iss", "jwt test");
    assert!(verify_es256(es.key_pair(), &es.sign_with(&registry)?));
    assert_eq!(registry.len(), 2);
    Ok(())
}

#[test]
fn test_sign_rs256_is_deterministic_and_verifies() -> JwtResult<()> {
    let key = KeyPair::rfc7515_rs256()?;
    let descriptor = lookup("RS256")?;
    let message = b"eyJraWQiOiJrZXkyIiwiYWxnIjoiUlMyNTYifQ.eyJpc3MiOiJ0ZXN0IGlzc3VlciJ9";

    let first = sign(&descriptor, &key, message)?;
    let second = sign(&descriptor, &key, message)?;
    assert_eq!(first, second);
    assert_eq!(first.len(), 256);

    let KeyPair::Rsa { public, .. } = &key else {
        panic!("expected an RSA key");
    };
    let signature = rsa::pkcs1v15::Signature::try_from(first.as_slice())
        .unwrap_or_else(|e| panic!("bad RSA signature: {e}"));
    assert!(
        rsa::pkcs1v15::VerifyingKey::<sha2::Sha256>::new(public.clone())
            .verify(message, &signature)
            .is_ok()
    );

    let canned = VALID_RS256_SIGNED_JWT.rsplit_once('.').map(|(_, sig)| sig);
    assert_eq!(
        canned.map(|sig| URL_SAFE_NO_PAD.decode(sig).ok()),
        Some(Some(first))
    );
    Ok(())
}

#[test]
fn test_sign_ecdsa_returns_raw_signatures() -> JwtResult<()> {
    let message = b"abc";

    let key = KeyPair::rfc7515_es256()?;
    let raw = sign(&lookup("ES256")?, &key, message)?;
    assert_eq!(raw.len(), 64);
    let KeyPair::P256 { verifying, .. } = &key else {
        panic!("expected a P-256 key");
    };
    let signature = p256::ecdsa::Signature::from_slice(&raw)
        .unwrap_or_else(|e| panic!("bad P-256 signature: {e}"));
    assert!(verifying.verify(message, &signature).is_ok());

    let key = KeyPair::generate_es384();
    let raw = sign(&lookup("ES384")?, &key, message)?;
    assert_eq!(raw.len(), 96);
    let KeyPair::P384 { verifying, .. } = &key else {
        panic!("expected a P-384 key");
    };
    let signature = p384::ecdsa::Signature::from_slice(&raw)
        .unwrap_or_else(|e| panic!("bad P-384 signature: {e}"));
    assert!(verifying.verify(message, &signature).is_ok());
    Ok(())
}

#[test]
fn test_sign_rejects_wrong_key_family() -> JwtResult<()> {
    let result = sign(&lookup("ES256")?, &KeyPair::rfc7515_rs256()?, b"abc");
    assert!(matches!(
        result,
        Err(JwtError::SigningFailure { algorithm, .. }) if algorithm == "ES256"
    ));

    let result = sign(&lookup("RS512")?, &KeyPair::generate_es384(), b"abc");
    assert!(matches!(result, Err(JwtError::SigningFailure { .. })));
    Ok(())
}

#[test]
fn test_registry_sign_matches_free_sign() -> JwtResult<()> {
    let registry = SignerRegistry::new();
    let key = KeyPair::rfc7515_rs256()?;
    let descriptor = lookup("RS384")?;

    assert_eq!(
        registry.sign(&descriptor, &key, b"abc")?,
        sign(&descriptor, &key, b"abc")?
    );
    assert_eq!(registry.len(), 1);

    let es256 = KeyPair::rfc7515_es256()?;
    assert_eq!(registry.sign(&lookup("ES256")?, &es256, b"abc")?.len(), 64);
    assert!(matches!(
        registry.sign(&descriptor, &es256, b"abc"),
        Err(JwtError::SigningFailure { .. })
    ));
    assert_eq!(registry.len(), 2);
    Ok(())
}

#[test]
fn test_generated_rsa_key_signs_verifiable_token() -> JwtResult<()> {
    let key = KeyPair::generate_rsa(2048)?;
    let token = Jwt::with_key_pair("RS256", key.clone())?
        .claim("iss", "test issuer")
        .sign()?;
    assert!(verify_rsa::<sha2::Sha256>(&key, &token));
    assert!(!verify_rsa::<sha2::Sha256>(&KeyPair::rfc7515_rs256()?, &token));
    Ok(())
}
