//! Tests for fixture configuration

use jwt_fixtures::fixtures::VALID_RS256_SIGNED_JWT;
use jwt_fixtures::{FixtureConfig, JwtError, JwtResult};

#[test]
fn test_empty_document_uses_defaults() -> JwtResult<()> {
    let config = FixtureConfig::from_json("{}")?;
    assert_eq!(config, FixtureConfig::default());
    assert_eq!(config.descriptor("ES256")?.key_id(), "ES256");
    Ok(())
}

#[test]
fn test_key_id_override_reproduces_canned_token() -> JwtResult<()> {
    let config = FixtureConfig::from_json(r#"{"key_ids":{"RS256":"key2"}}"#)?;
    assert_eq!(config.descriptor("RS256")?.key_id(), "key2");
    assert_eq!(config.descriptor("RS384")?.key_id(), "RS384");

    let token = config.jwt("RS256")?.claim("iss", "test issuer").sign()?;
    assert_eq!(token, VALID_RS256_SIGNED_JWT);
    Ok(())
}

#[test]
fn test_default_expiry_is_applied() -> JwtResult<()> {
    let config = FixtureConfig::default().with_default_expiry_seconds(60);
    let builder = config.jwt("ES256")?;
    let names: Vec<&str> = builder.claims().iter().map(|c| c.name()).collect();
    assert_eq!(names, ["exp"]);
    Ok(())
}

#[test]
fn test_unknown_algorithm_in_document_is_rejected() {
    assert!(matches!(
        FixtureConfig::from_json(r#"{"key_ids":{"HS256":"k"}}"#),
        Err(JwtError::UnknownAlgorithm(name)) if name == "HS256"
    ));
}

#[test]
fn test_malformed_document_is_rejected() {
    assert!(matches!(
        FixtureConfig::from_json(r#"{"key_ids":"#),
        Err(JwtError::Serialization(_))
    ));
}

#[test]
fn test_config_serializes_back() -> JwtResult<()> {
    let config = FixtureConfig::default()
        .with_key_id("ES256", "key1")
        .with_default_expiry_seconds(300);
    let json = serde_json::to_string(&config)?;
    assert_eq!(FixtureConfig::from_json(&json)?, config);
    Ok(())
}
