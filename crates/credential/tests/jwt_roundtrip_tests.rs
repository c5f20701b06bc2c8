//! Default JWT generator round-trip tests
//!
//! Tokens produced against the fixture RSA key must decode with the
//! matching public key and carry the expected claims.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::Deserialize;

use meridian_credential::Credentials;

const PRIVATE_PEM: &str = include_str!("fixtures/test_key.pem");
const PUBLIC_PEM: &str = include_str!("fixtures/test_key.pub.pem");

#[derive(Debug, Deserialize)]
struct TokenClaims {
    application_id: Option<String>,
    iat: i64,
    exp: i64,
    jti: String,
}

fn decode_claims(token: &str) -> TokenClaims {
    let key = DecodingKey::from_rsa_pem(PUBLIC_PEM.as_bytes()).unwrap();
    let validation = Validation::new(Algorithm::RS256);
    decode::<TokenClaims>(token, &key, &validation).unwrap().claims
}

#[test]
fn test_generated_token_decodes_with_public_key() {
    let credentials = Credentials::builder("KEY", "SECRET")
        .application_id("app-1")
        .private_key(PRIVATE_PEM)
        .build()
        .unwrap();

    let token = credentials.generate_jwt(None, None).unwrap();
    let claims = decode_claims(&token);

    assert_eq!(claims.application_id.as_deref(), Some("app-1"));
    assert!(!claims.jti.is_empty());
    assert!(claims.exp > claims.iat);
}

#[test]
fn test_application_id_override_lands_in_claims() {
    let credentials = Credentials::builder("KEY", "SECRET")
        .application_id("stored-app")
        .private_key(PRIVATE_PEM)
        .build()
        .unwrap();

    let token = credentials.generate_jwt(Some("override-app"), None).unwrap();
    let claims = decode_claims(&token);

    assert_eq!(claims.application_id.as_deref(), Some("override-app"));
}

#[test]
fn test_each_token_gets_a_fresh_jti() {
    let credentials = Credentials::builder("KEY", "SECRET")
        .private_key(PRIVATE_PEM)
        .build()
        .unwrap();

    let first = decode_claims(&credentials.generate_jwt(None, None).unwrap());
    let second = decode_claims(&credentials.generate_jwt(None, None).unwrap());

    assert_ne!(first.jti, second.jti);
}

/// Inline PEM text as the key reference works end to end: the string is not
/// a path, so its own bytes are the key.
#[test]
fn test_inline_pem_signs_end_to_end() {
    let credentials = Credentials::parse(("KEY", "SECRET", PRIVATE_PEM, "app-1")).unwrap();

    let token = credentials.generate_jwt(None, None).unwrap();
    let claims = decode_claims(&token);
    assert_eq!(claims.application_id.as_deref(), Some("app-1"));
}
