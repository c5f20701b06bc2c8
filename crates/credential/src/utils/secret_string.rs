//! Secret string type with automatic zeroization
//!
//! Provides [`SecretString`] for the account secret and signature secret
//! fields. Access goes through a closure scope so the secret cannot escape
//! accidentally; memory is zeroed on drop.

use serde::{Deserialize, Serialize};
use std::fmt;
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret string with automatic memory zeroization
///
/// Secrets are never exposed directly - they must be accessed within a
/// closure scope using [`expose_secret`] to prevent accidental copying.
/// Debug, Display, and Serialize output is redacted.
///
/// [`expose_secret`]: SecretString::expose_secret
///
/// # Examples
///
/// ```
/// use meridian_credential::SecretString;
///
/// let secret = SecretString::new("my-api-secret");
///
/// let len = secret.expose_secret(|value| value.len());
/// assert_eq!(len, 13);
///
/// println!("{:?}", secret); // Prints: [REDACTED]
/// ```
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecretString {
    inner: String,
}

impl SecretString {
    /// Creates a new secret from any string-like value
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self { inner: s.into() }
    }

    /// Accesses the secret value within a closure scope
    ///
    /// The secret value cannot escape the closure, so call sites stay easy
    /// to audit for leakage.
    pub fn expose_secret<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&str) -> R,
    {
        f(&self.inner)
    }

    /// Returns the length without exposing content
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Checks if empty without exposing content
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl From<String> for SecretString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecretString {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

// Comparing two secrets must not leak where they diverge.
impl PartialEq for SecretString {
    fn eq(&self, other: &Self) -> bool {
        self.inner.as_bytes().ct_eq(other.inner.as_bytes()).into()
    }
}

impl Eq for SecretString {}

// Prevent accidental secret leakage via Debug/Display
impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

// Serialize as redacted so a config round-trip can never write the secret back out
impl Serialize for SecretString {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str("[REDACTED]")
    }
}

// Deserialize from string
impl<'de> Deserialize<'de> for SecretString {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(SecretString::new)
    }
}
