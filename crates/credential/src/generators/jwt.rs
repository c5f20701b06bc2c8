//! Default token strategy: RS256-signed JWT
//!
//! Signs over the account private key (PEM). Every token is stamped with
//! `iat`, `jti`, and `exp` at generation time; caller-supplied claims are
//! merged on top and win on collision, so an explicit `exp` or `jti` from
//! the caller survives.

use std::time::Duration;

use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde_json::Value;
use tracing::trace;
use uuid::Uuid;

use crate::core::{GeneratorError, PrivateKey};
use crate::traits::{Claims, TokenGenerator};

/// Token lifetime stamped into `exp` unless the caller overrides it
pub const DEFAULT_TOKEN_TTL: Duration = Duration::from_secs(900);

/// Default [`TokenGenerator`] implementation
///
/// # Examples
///
/// ```no_run
/// use meridian_credential::generators::JwtGenerator;
/// use meridian_credential::{Claims, PrivateKey, TokenGenerator};
///
/// let generator = JwtGenerator::new();
/// let key = PrivateKey::new(std::fs::read("account.pem")?);
///
/// let mut claims = Claims::new();
/// claims.insert("application_id".into(), "app-1".into());
/// let token = generator.generate(Some(&key), claims)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct JwtGenerator {
    ttl: Duration,
}

impl JwtGenerator {
    /// Generator with the default token lifetime
    #[must_use]
    pub fn new() -> Self {
        Self {
            ttl: DEFAULT_TOKEN_TTL,
        }
    }

    /// Generator with a custom token lifetime
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self { ttl }
    }

    /// Configured token lifetime
    pub fn ttl(&self) -> Duration {
        self.ttl
    }
}

impl Default for JwtGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenGenerator for JwtGenerator {
    fn generate(
        &self,
        private_key: Option<&PrivateKey>,
        claims: Claims,
    ) -> Result<String, GeneratorError> {
        let key = private_key.ok_or(GeneratorError::MissingPrivateKey)?;
        let encoding_key = EncodingKey::from_rsa_pem(key.as_bytes())
            .map_err(|source| GeneratorError::InvalidKey { source })?;

        let now = Utc::now().timestamp();
        let ttl = i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX);

        let mut payload = Claims::new();
        payload.insert("iat".to_owned(), Value::from(now));
        payload.insert("jti".to_owned(), Value::from(Uuid::new_v4().to_string()));
        payload.insert("exp".to_owned(), Value::from(now.saturating_add(ttl)));
        // caller claims win on collision
        payload.extend(claims);

        trace!(claims = payload.len(), "signing JWT");
        jsonwebtoken::encode(&Header::new(Algorithm::RS256), &payload, &encoding_key)
            .map_err(|source| GeneratorError::Signing { source })
    }
}
