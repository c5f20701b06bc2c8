//! Basic Credential Usage Example
//!
//! This example demonstrates the normalization entry point:
//! - Building credentials from the positional shape
//! - Building credentials from a config object (camelCase keys)
//! - Generating a request signature with the default strategy
//!
//! JWT generation needs a real RSA key; see the `jwt_generation` example.

use std::collections::BTreeMap;

use meridian_credential::{CredentialConfig, Credentials};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_env_filter("debug").init();

    // Step 1: positional shape, the minimal key/secret pair
    let minimal = Credentials::new("KEY", "SECRET");
    println!("positional: api_key = {}", minimal.api_key());

    // Step 2: config-object shape, as it would arrive from a config file
    let config: CredentialConfig = serde_json::from_str(
        r#"{
            "apiKey": "KEY",
            "apiSecret": "SECRET",
            "signatureSecret": "sig-secret",
            "signatureMethod": "sha256"
        }"#,
    )?;
    let credentials = Credentials::parse(config)?;
    println!(
        "config: api_key = {}, method = {:?}",
        credentials.api_key(),
        credentials.signature_method()
    );

    // Step 3: sign a parameter set with the stored defaults
    let mut params = BTreeMap::new();
    params.insert("to".to_string(), "447700900000".to_string());
    params.insert("text".to_string(), "hello".to_string());

    let signature = credentials.generate_signature(&params, None, None)?;
    println!("signature: {signature}");

    // Per-call overrides win over the stored defaults
    let sha512 = credentials.generate_signature(&params, Some("sha512"), None)?;
    println!("signature (sha512 override): {sha512}");

    Ok(())
}
