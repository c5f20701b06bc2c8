//! Custom Generator Strategy Example
//!
//! The generator slots are duck-typed only at the trait seam: anything
//! implementing `TokenGenerator` or `SignatureGenerator` can replace the
//! defaults per instance. This example binds a token strategy that talks to
//! no crypto library at all.

use std::sync::Arc;

use meridian_credential::{Claims, Credentials, GeneratorError, PrivateKey, TokenGenerator};

/// A toy strategy: renders the claims as the "token".
struct DebugToken;

impl TokenGenerator for DebugToken {
    fn generate(
        &self,
        private_key: Option<&PrivateKey>,
        claims: Claims,
    ) -> Result<String, GeneratorError> {
        let keyed = if private_key.is_some() { "keyed" } else { "unkeyed" };
        Ok(format!("debug-token({keyed}): {}", serde_json::Value::Object(claims)))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let credentials = Credentials::builder("KEY", "SECRET")
        .application_id("app-1")
        .build()?;

    // The slot starts unset; binding replaces the lazy default before it is
    // ever constructed.
    credentials.set_jwt_generator(Arc::new(DebugToken));

    let token = credentials.generate_jwt(None, None)?;
    println!("{token}");

    // Overrides still flow through the custom strategy unchanged.
    let token = credentials.generate_jwt(Some("other-app"), None)?;
    println!("{token}");

    Ok(())
}
