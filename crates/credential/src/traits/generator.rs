//! Generator strategy capabilities
//!
//! [`Credentials`](crate::Credentials) delegates token and signature
//! production to whichever strategy is bound in the matching slot. Both
//! capabilities are single-method traits, so a test double is one impl
//! block, with no mocking framework needed.

use std::collections::BTreeMap;

use crate::core::{GeneratorError, PrivateKey};
use crate::utils::SecretString;

/// JSON-object claims handed to a token generator
///
/// Carries at least `application_id` whenever one is known to the caller.
/// Strategies may stamp additional claims of their own.
pub type Claims = serde_json::Map<String, serde_json::Value>;

/// Request/query parameters covered by a signature
///
/// Keyed collection in canonical (sorted) order; passed through to the
/// strategy unmodified.
pub type SignatureParams = BTreeMap<String, String>;

/// Capability to produce an auth token from key material and claims
///
/// A missing key is the strategy's error to raise, not the caller's to
/// pre-check; that keeps the failure in one place regardless of which
/// strategy is bound.
pub trait TokenGenerator: Send + Sync {
    /// Produce a token over the supplied claims
    fn generate(
        &self,
        private_key: Option<&PrivateKey>,
        claims: Claims,
    ) -> Result<String, GeneratorError>;
}

/// Capability to produce a request signature over a parameter set
///
/// Argument order is part of the contract: secret, then method, then
/// params. Strategies interoperating with the wire format depend on it.
pub trait SignatureGenerator: Send + Sync {
    /// Produce a signature value for `params`
    fn generate(
        &self,
        secret: Option<&SecretString>,
        method: Option<&str>,
        params: &SignatureParams,
    ) -> Result<String, GeneratorError>;
}
