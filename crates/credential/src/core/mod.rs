//! Core types for credential normalization and generation delegation

mod credentials;
mod error;
mod input;
mod key;

pub use credentials::{Credentials, CredentialsBuilder};
pub use error::{CredentialError, GeneratorError, Result};
pub use input::{CredentialConfig, CredentialInput};
pub use key::{PrivateKey, PrivateKeyInput};

// Re-exports from utils
pub use crate::utils::SecretString;
