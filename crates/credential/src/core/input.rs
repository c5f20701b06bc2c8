//! Construction-input classification and normalization
//!
//! Credentials are built from one of three call shapes: positional fields,
//! a config object, or an instance that is already canonical. The shape is
//! resolved once, into [`CredentialInput`], before any field is touched;
//! no type tests scattered through field access.

use serde::{Deserialize, Serialize};

use crate::core::credentials::Credentials;
use crate::core::key::PrivateKeyInput;
use crate::utils::SecretString;

/// Config-object shape for credentials
///
/// This is how credentials appear in SDK configuration files and
/// environment bundles. Keys are camelCase on the wire; unrecognized keys
/// are ignored.
///
/// `privateKey` takes either a filesystem path or inline PEM text; the
/// distinction is resolved during materialization, not here.
///
/// # Examples
///
/// ```
/// use meridian_credential::{CredentialConfig, Credentials};
///
/// let config: CredentialConfig = serde_json::from_str(
///     r#"{"apiKey": "KEY", "apiSecret": "SECRET", "applicationId": "app-1"}"#,
/// )?;
/// let credentials = Credentials::parse(config)?;
/// assert_eq!(credentials.api_key(), "KEY");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialConfig {
    /// Account API key
    pub api_key: String,
    /// Account API secret
    pub api_secret: String,
    /// Default application for JWT generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application_id: Option<String>,
    /// Private-key reference: path or inline PEM
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub private_key: Option<String>,
    /// Default secret for signature generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_secret: Option<String>,
    /// Default method for signature generation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature_method: Option<String>,
}

/// A construction input in one of the three recognized shapes
///
/// Built via `From` conversions so `Credentials::parse` accepts every shape
/// through one entry point. Classification is the variant itself; there is
/// no further inspection downstream.
#[derive(Debug)]
pub enum CredentialInput {
    /// Positional `(api_key, api_secret, ...)` shape
    Positional {
        /// Account API key
        api_key: String,
        /// Account API secret
        api_secret: SecretString,
        /// Private-key reference in any source form
        private_key: Option<PrivateKeyInput>,
        /// Default application for JWT generation
        application_id: Option<String>,
        /// Default secret for signature generation
        signature_secret: Option<SecretString>,
        /// Default method for signature generation
        signature_method: Option<String>,
    },
    /// Single config-object shape
    Config(CredentialConfig),
    /// Already-canonical instance; normalization passes it through untouched
    Canonical(Credentials),
}

impl From<CredentialConfig> for CredentialInput {
    fn from(config: CredentialConfig) -> Self {
        Self::Config(config)
    }
}

impl From<Credentials> for CredentialInput {
    fn from(credentials: Credentials) -> Self {
        Self::Canonical(credentials)
    }
}

impl<K, S> From<(K, S)> for CredentialInput
where
    K: Into<String>,
    S: Into<SecretString>,
{
    fn from((api_key, api_secret): (K, S)) -> Self {
        Self::Positional {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            private_key: None,
            application_id: None,
            signature_secret: None,
            signature_method: None,
        }
    }
}

impl<K, S, P> From<(K, S, P)> for CredentialInput
where
    K: Into<String>,
    S: Into<SecretString>,
    P: Into<PrivateKeyInput>,
{
    fn from((api_key, api_secret, private_key): (K, S, P)) -> Self {
        Self::Positional {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            private_key: Some(private_key.into()),
            application_id: None,
            signature_secret: None,
            signature_method: None,
        }
    }
}

impl<K, S, P, A> From<(K, S, P, A)> for CredentialInput
where
    K: Into<String>,
    S: Into<SecretString>,
    P: Into<PrivateKeyInput>,
    A: Into<String>,
{
    fn from((api_key, api_secret, private_key, application_id): (K, S, P, A)) -> Self {
        Self::Positional {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            private_key: Some(private_key.into()),
            application_id: Some(application_id.into()),
            signature_secret: None,
            signature_method: None,
        }
    }
}

impl<K, S, P, A, G, M> From<(K, S, P, A, G, M)> for CredentialInput
where
    K: Into<String>,
    S: Into<SecretString>,
    P: Into<PrivateKeyInput>,
    A: Into<String>,
    G: Into<SecretString>,
    M: Into<String>,
{
    fn from(
        (api_key, api_secret, private_key, application_id, signature_secret, signature_method): (
            K,
            S,
            P,
            A,
            G,
            M,
        ),
    ) -> Self {
        Self::Positional {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            private_key: Some(private_key.into()),
            application_id: Some(application_id.into()),
            signature_secret: Some(signature_secret.into()),
            signature_method: Some(signature_method.into()),
        }
    }
}
