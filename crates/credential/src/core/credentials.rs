//! The canonical credential aggregate
//!
//! [`Credentials`] owns the normalized account fields, the materialized
//! private key, and two independently-rebindable generator slots. All
//! account fields are immutable after construction; the slots are the only
//! mutable state, and only through the explicit `set_*_generator` calls.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use serde_json::Value;
use tracing::debug;

use crate::core::error::Result;
use crate::core::input::{CredentialConfig, CredentialInput};
use crate::core::key::{PrivateKey, PrivateKeyInput, materialize};
use crate::generators::{HashGenerator, JwtGenerator};
use crate::traits::{Claims, SignatureGenerator, SignatureParams, TokenGenerator};
use crate::utils::SecretString;

/// One rebindable strategy slot
///
/// State machine: `Unset -> Bound` on first use or explicit set,
/// `Bound -> Bound` on re-bind, never back to `Unset`. Lazy binding is
/// double-checked under the write lock so concurrent first calls construct
/// the default exactly once.
struct GeneratorSlot<T: ?Sized> {
    inner: RwLock<Option<Arc<T>>>,
}

impl<T: ?Sized> GeneratorSlot<T> {
    fn unset() -> Self {
        Self {
            inner: RwLock::new(None),
        }
    }

    fn bind(&self, strategy: Arc<T>) {
        *self.inner.write() = Some(strategy);
    }

    fn resolve(&self, default: impl FnOnce() -> Arc<T>) -> Arc<T> {
        if let Some(bound) = self.inner.read().as_ref() {
            return Arc::clone(bound);
        }
        let mut slot = self.inner.write();
        Arc::clone(slot.get_or_insert_with(default))
    }
}

// Cloning snapshots the current binding into an independent slot; the
// instances never share slot state afterwards.
impl<T: ?Sized> Clone for GeneratorSlot<T> {
    fn clone(&self) -> Self {
        Self {
            inner: RwLock::new(self.inner.read().clone()),
        }
    }
}

/// Canonical API credentials for one account
///
/// Normalizes every accepted construction shape into one value, resolves
/// the private-key reference up front, and delegates token/signature
/// production to the bound generator strategies.
///
/// # Examples
///
/// Positional construction:
///
/// ```
/// use meridian_credential::Credentials;
///
/// let credentials = Credentials::new("KEY", "SECRET");
/// assert_eq!(credentials.api_key(), "KEY");
/// ```
///
/// Full shape via the builder:
///
/// ```no_run
/// use meridian_credential::Credentials;
///
/// let credentials = Credentials::builder("KEY", "SECRET")
///     .application_id("app-1")
///     .private_key("/path/to/account.pem")
///     .signature_secret("sig-secret")
///     .signature_method("sha256")
///     .build()?;
/// # Ok::<(), meridian_credential::CredentialError>(())
/// ```
pub struct Credentials {
    api_key: String,
    api_secret: SecretString,
    application_id: Option<String>,
    private_key: Option<PrivateKey>,
    signature_secret: Option<SecretString>,
    signature_method: Option<String>,
    jwt_generator: GeneratorSlot<dyn TokenGenerator>,
    signature_generator: GeneratorSlot<dyn SignatureGenerator>,
}

impl Credentials {
    /// Credentials from the minimal key/secret pair
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<SecretString>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            application_id: None,
            private_key: None,
            signature_secret: None,
            signature_method: None,
            jwt_generator: GeneratorSlot::unset(),
            signature_generator: GeneratorSlot::unset(),
        }
    }

    /// Builder for the full positional shape
    pub fn builder(
        api_key: impl Into<String>,
        api_secret: impl Into<SecretString>,
    ) -> CredentialsBuilder {
        CredentialsBuilder {
            api_key: api_key.into(),
            api_secret: api_secret.into(),
            application_id: None,
            private_key: None,
            signature_secret: None,
            signature_method: None,
        }
    }

    /// Normalizes any accepted construction shape into credentials
    ///
    /// An input that is already a [`Credentials`] instance is returned
    /// unchanged: no re-materialization, no slot reset, no default
    /// inference. Everything else goes through the ordinary construction
    /// path, including key materialization.
    ///
    /// # Errors
    ///
    /// [`CredentialError::KeyRead`](crate::CredentialError::KeyRead) when a
    /// private-key reference names a filesystem entry that exists but
    /// cannot be read.
    pub fn parse(input: impl Into<CredentialInput>) -> Result<Self> {
        match input.into() {
            CredentialInput::Canonical(credentials) => Ok(credentials),
            CredentialInput::Config(config) => Self::try_from(config),
            CredentialInput::Positional {
                api_key,
                api_secret,
                private_key,
                application_id,
                signature_secret,
                signature_method,
            } => {
                let mut builder = Self::builder(api_key, api_secret);
                builder.private_key = private_key;
                builder.application_id = application_id;
                builder.signature_secret = signature_secret;
                builder.signature_method = signature_method;
                builder.build()
            }
        }
    }

    /// Account API key
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Account API secret
    pub fn api_secret(&self) -> &SecretString {
        &self.api_secret
    }

    /// Default application for JWT generation, if set
    pub fn application_id(&self) -> Option<&str> {
        self.application_id.as_deref()
    }

    /// Materialized private key, if one was supplied
    pub fn private_key(&self) -> Option<&PrivateKey> {
        self.private_key.as_ref()
    }

    /// Default secret for signature generation, if set
    pub fn signature_secret(&self) -> Option<&SecretString> {
        self.signature_secret.as_ref()
    }

    /// Default method for signature generation, if set
    ///
    /// Opaque at this layer; the bound signature strategy decides what
    /// method names mean.
    pub fn signature_method(&self) -> Option<&str> {
        self.signature_method.as_deref()
    }

    /// Generates an auth token via the bound JWT strategy
    ///
    /// Per-call overrides win over the stored defaults. Key presence is not
    /// pre-checked here; a missing key is the strategy's error to raise.
    ///
    /// # Errors
    ///
    /// Whatever the bound strategy raises, propagated unchanged.
    pub fn generate_jwt(
        &self,
        application_id: Option<&str>,
        private_key: Option<&PrivateKey>,
    ) -> Result<String> {
        let generator = self.jwt_generator();

        let effective_key = private_key.or(self.private_key.as_ref());
        let effective_app = application_id.or(self.application_id.as_deref());

        let mut claims = Claims::new();
        if let Some(app_id) = effective_app {
            claims.insert(
                "application_id".to_owned(),
                Value::String(app_id.to_owned()),
            );
        }

        Ok(generator.generate(effective_key, claims)?)
    }

    /// Generates a request signature via the bound hash strategy
    ///
    /// `params` passes through unmodified. The delegated call receives
    /// secret before method, in exactly the order the strategy contract names.
    ///
    /// # Errors
    ///
    /// Whatever the bound strategy raises, propagated unchanged.
    pub fn generate_signature(
        &self,
        params: &SignatureParams,
        method: Option<&str>,
        secret: Option<&SecretString>,
    ) -> Result<String> {
        let generator = self.signature_generator();

        let effective_secret = secret.or(self.signature_secret.as_ref());
        let effective_method = method.or(self.signature_method.as_deref());

        Ok(generator.generate(effective_secret, effective_method, params)?)
    }

    /// The bound JWT strategy, binding the default first if the slot was
    /// never used
    pub fn jwt_generator(&self) -> Arc<dyn TokenGenerator> {
        self.jwt_generator.resolve(|| {
            debug!("binding default JWT generator");
            Arc::new(JwtGenerator::new())
        })
    }

    /// The bound signature strategy, binding the default first if the slot
    /// was never used
    pub fn signature_generator(&self) -> Arc<dyn SignatureGenerator> {
        self.signature_generator.resolve(|| {
            debug!("binding default signature generator");
            Arc::new(HashGenerator::new())
        })
    }

    /// Rebinds the JWT strategy slot, effective on the next generation call
    ///
    /// The supplied strategy is taken as-is; no shape validation happens
    /// here.
    pub fn set_jwt_generator(&self, generator: Arc<dyn TokenGenerator>) {
        self.jwt_generator.bind(generator);
    }

    /// Rebinds the signature strategy slot, effective on the next
    /// generation call
    pub fn set_signature_generator(&self, generator: Arc<dyn SignatureGenerator>) {
        self.signature_generator.bind(generator);
    }
}

impl TryFrom<CredentialConfig> for Credentials {
    type Error = crate::core::error::CredentialError;

    fn try_from(config: CredentialConfig) -> Result<Self> {
        let mut builder = Self::builder(config.api_key, config.api_secret);
        builder.private_key = config.private_key.map(PrivateKeyInput::Text);
        builder.application_id = config.application_id;
        builder.signature_secret = config.signature_secret.map(SecretString::new);
        builder.signature_method = config.signature_method;
        builder.build()
    }
}

impl Clone for Credentials {
    fn clone(&self) -> Self {
        Self {
            api_key: self.api_key.clone(),
            api_secret: self.api_secret.clone(),
            application_id: self.application_id.clone(),
            private_key: self.private_key.clone(),
            signature_secret: self.signature_secret.clone(),
            signature_method: self.signature_method.clone(),
            jwt_generator: self.jwt_generator.clone(),
            signature_generator: self.signature_generator.clone(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &self.api_secret)
            .field("application_id", &self.application_id)
            .field("private_key", &self.private_key)
            .field("signature_secret", &self.signature_secret)
            .field("signature_method", &self.signature_method)
            .finish_non_exhaustive()
    }
}

/// Builder for the full construction shape
///
/// `build` is where key materialization happens; a failed read means no
/// instance comes into existence.
#[derive(Debug)]
pub struct CredentialsBuilder {
    pub(crate) api_key: String,
    pub(crate) api_secret: SecretString,
    pub(crate) application_id: Option<String>,
    pub(crate) private_key: Option<PrivateKeyInput>,
    pub(crate) signature_secret: Option<SecretString>,
    pub(crate) signature_method: Option<String>,
}

impl CredentialsBuilder {
    /// Default application for JWT generation
    #[must_use]
    pub fn application_id(mut self, application_id: impl Into<String>) -> Self {
        self.application_id = Some(application_id.into());
        self
    }

    /// Private-key reference: raw bytes, inline PEM, or a path
    #[must_use]
    pub fn private_key(mut self, private_key: impl Into<PrivateKeyInput>) -> Self {
        self.private_key = Some(private_key.into());
        self
    }

    /// Default secret for signature generation
    #[must_use]
    pub fn signature_secret(mut self, signature_secret: impl Into<SecretString>) -> Self {
        self.signature_secret = Some(signature_secret.into());
        self
    }

    /// Default method for signature generation
    #[must_use]
    pub fn signature_method(mut self, signature_method: impl Into<String>) -> Self {
        self.signature_method = Some(signature_method.into());
        self
    }

    /// Materializes the key and constructs the credentials
    ///
    /// # Errors
    ///
    /// [`CredentialError::KeyRead`](crate::CredentialError::KeyRead) when
    /// the private-key reference names a filesystem entry that exists but
    /// cannot be read. A nonexistent path is not an error: the string
    /// falls back to inline key content.
    pub fn build(self) -> Result<Credentials> {
        let private_key = materialize(self.private_key)?;

        Ok(Credentials {
            api_key: self.api_key,
            api_secret: self.api_secret,
            application_id: self.application_id,
            private_key,
            signature_secret: self.signature_secret,
            signature_method: self.signature_method,
            jwt_generator: GeneratorSlot::unset(),
            signature_generator: GeneratorSlot::unset(),
        })
    }
}
