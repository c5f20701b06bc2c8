//! Error types for credential operations
//!
//! Two tiers:
//! - [`CredentialError`]: construction-time and delegation failures surfaced
//!   by [`Credentials`](crate::Credentials) itself
//! - [`GeneratorError`]: failures raised inside a generator strategy,
//!   propagated to the caller unchanged
//!
//! There are no retries anywhere in this crate; every failure surfaces
//! immediately. The single deliberately-swallowed condition is the
//! not-found fallback during key materialization (see
//! [`PrivateKeyInput`](crate::core::PrivateKeyInput)).

use std::path::PathBuf;

use thiserror::Error;

/// Top-level credential error
#[derive(Debug, Error)]
pub enum CredentialError {
    /// A private-key reference named a real filesystem entry that could not
    /// be read (permission denied, unreadable directory entry, ...).
    /// Raised at construction time; a partially-keyed instance is never
    /// observable.
    #[error("Failed to read private key from '{}': {source}", path.display())]
    KeyRead {
        /// Path the reference resolved to
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failure raised by the bound generator strategy, passed through
    /// untranslated.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
}

/// Errors raised by generator strategies
///
/// Custom strategies report through the same type; [`GeneratorError::Other`]
/// is the escape hatch for failure modes the built-in variants don't cover.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// No private key on the credentials and none supplied per call
    #[error("No private key available for token generation")]
    MissingPrivateKey,

    /// Key bytes could not be parsed as a signing key
    #[error("Private key is not a usable signing key: {source}")]
    InvalidKey {
        /// Underlying JWT library error
        #[source]
        source: jsonwebtoken::errors::Error,
    },

    /// Token encoding/signing failed
    #[error("Token signing failed: {source}")]
    Signing {
        /// Underlying JWT library error
        #[source]
        source: jsonwebtoken::errors::Error,
    },

    /// No signature secret on the credentials and none supplied per call
    #[error("No signature secret available for signature generation")]
    MissingSecret,

    /// Signature method string not understood by the strategy
    #[error("Unsupported signature method '{method}'")]
    UnsupportedMethod {
        /// The rejected method name
        method: String,
    },

    /// Strategy-specific failure
    #[error("{0}")]
    Other(String),
}

/// Result type alias for credential operations
pub type Result<T> = std::result::Result<T, CredentialError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_key_read_error_display() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = CredentialError::KeyRead {
            path: PathBuf::from("/etc/keys/account.pem"),
            source: io_err,
        };
        let msg = err.to_string();
        assert!(msg.contains("/etc/keys/account.pem"));
        assert!(msg.contains("access denied"));
    }

    #[test]
    fn test_key_read_error_source_chain() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = CredentialError::KeyRead {
            path: PathBuf::from("key.pem"),
            source: io_err,
        };
        assert!(err.source().is_some());
    }

    #[test]
    fn test_generator_error_passes_through_transparently() {
        let gen_err = GeneratorError::MissingPrivateKey;
        let expected = gen_err.to_string();

        let cred_err: CredentialError = gen_err.into();
        assert!(matches!(cred_err, CredentialError::Generator(_)));
        // transparent: the wrapper adds no prefix of its own
        assert_eq!(cred_err.to_string(), expected);
    }

    #[test]
    fn test_unsupported_method_names_the_method() {
        let err = GeneratorError::UnsupportedMethod {
            method: "rot13".to_string(),
        };
        assert!(err.to_string().contains("rot13"));
    }

    #[test]
    fn test_other_error_is_verbatim() {
        let err = GeneratorError::Other("vault unreachable".to_string());
        assert_eq!(err.to_string(), "vault unreachable");
    }
}
