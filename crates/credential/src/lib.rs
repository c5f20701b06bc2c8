//! Meridian Credential - credential core for the Meridian API client
//!
//! Normalizes heterogeneous credential inputs into one canonical value and
//! delegates token/signature generation to pluggable strategies.
//!
//! # Features
//!
//! - **One entry point, three shapes** - positional fields, config objects,
//!   or an already-canonical instance, classified once
//! - **Key materialization up front** - path, inline PEM, or raw bytes all
//!   resolve to key bytes before construction returns
//! - **Swappable generators** - JWT and signature strategies are
//!   single-method traits, rebindable per instance at runtime
//! - **Secret hygiene** - secrets and key material are zeroized on drop and
//!   redacted in output
//!
//! # Examples
//!
//! ```
//! use std::collections::BTreeMap;
//! use meridian_credential::Credentials;
//!
//! let credentials = Credentials::builder("KEY", "SECRET")
//!     .signature_secret("sig-secret")
//!     .build()?;
//!
//! let mut params = BTreeMap::new();
//! params.insert("to".to_string(), "447700900000".to_string());
//! let signature = credentials.generate_signature(&params, Some("sha256"), None)?;
//! assert_eq!(signature.len(), 64);
//! # Ok::<(), meridian_credential::CredentialError>(())
//! ```
#![deny(unsafe_code)]
#![forbid(unsafe_code)]

/// Core types, errors, and the credential aggregate
pub mod core;
/// Default generator strategies
pub mod generators;
/// Capability traits the credential core delegates to
pub mod traits;
/// Utilities for secret handling
pub mod utils;

// ── Root re-exports ─────────────────────────────────────────────────────────
// Commonly-used types available directly as `meridian_credential::TypeName`.

// Core types & errors
pub use crate::core::{
    CredentialConfig, CredentialError, CredentialInput, Credentials, CredentialsBuilder,
    GeneratorError, PrivateKey, PrivateKeyInput, Result, SecretString,
};

// Traits
pub use crate::traits::{Claims, SignatureGenerator, SignatureParams, TokenGenerator};

// Default strategies
pub use crate::generators::{HashGenerator, JwtGenerator, SignatureMethod};

/// Commonly used types and traits
pub mod prelude {
    pub use crate::core::{
        CredentialConfig, CredentialError, Credentials, PrivateKey, PrivateKeyInput, Result,
        SecretString,
    };

    pub use crate::traits::{Claims, SignatureGenerator, SignatureParams, TokenGenerator};

    pub use crate::generators::{HashGenerator, JwtGenerator, SignatureMethod};
}
