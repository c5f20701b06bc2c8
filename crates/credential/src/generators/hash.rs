//! Default signature strategy: HMAC family over a canonical parameter string
//!
//! The canonical string renders the parameters in key order, each as
//! `&key=value` with `&` and `=` inside values replaced by `_` so the
//! rendering stays unambiguous. The output is the uppercase hex digest.

use std::fmt;
use std::str::FromStr;

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use sha2::{Digest, Sha256, Sha512};

use crate::core::GeneratorError;
use crate::traits::{SignatureGenerator, SignatureParams};
use crate::utils::SecretString;

/// Named signature methods understood by the default strategy
///
/// The credential layer treats the method as an opaque string; parsing and
/// rejection happen here, at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureMethod {
    /// HMAC-SHA-256 over the canonical string (`"sha256"`)
    HmacSha256,
    /// HMAC-SHA-512 over the canonical string (`"sha512"`)
    HmacSha512,
    /// Plain SHA-256 digest of canonical string + secret (`"sha256hash"`)
    Sha256Digest,
}

impl SignatureMethod {
    /// Method used when the credentials carry none
    pub const DEFAULT: Self = Self::HmacSha256;

    /// Wire name of the method
    pub fn as_str(self) -> &'static str {
        match self {
            Self::HmacSha256 => "sha256",
            Self::HmacSha512 => "sha512",
            Self::Sha256Digest => "sha256hash",
        }
    }
}

impl FromStr for SignatureMethod {
    type Err = GeneratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sha256" => Ok(Self::HmacSha256),
            "sha512" => Ok(Self::HmacSha512),
            "sha256hash" => Ok(Self::Sha256Digest),
            other => Err(GeneratorError::UnsupportedMethod {
                method: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SignatureMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default [`SignatureGenerator`] implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct HashGenerator;

impl HashGenerator {
    /// New default strategy
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

fn canonical_string(params: &SignatureParams) -> String {
    let mut out = String::new();
    for (key, value) in params {
        let clean = value.replace(['&', '='], "_");
        out.push('&');
        out.push_str(key);
        out.push('=');
        out.push_str(&clean);
    }
    out
}

fn hmac_bytes<M: Mac + KeyInit>(key: &[u8], message: &[u8]) -> Result<Vec<u8>, GeneratorError> {
    let mut mac = <M as KeyInit>::new_from_slice(key)
        .map_err(|err| GeneratorError::Other(format!("HMAC key rejected: {err}")))?;
    mac.update(message);
    Ok(mac.finalize().into_bytes().to_vec())
}

impl SignatureGenerator for HashGenerator {
    fn generate(
        &self,
        secret: Option<&SecretString>,
        method: Option<&str>,
        params: &SignatureParams,
    ) -> Result<String, GeneratorError> {
        let secret = secret.ok_or(GeneratorError::MissingSecret)?;
        let method = match method {
            Some(name) => name.parse::<SignatureMethod>()?,
            None => SignatureMethod::DEFAULT,
        };

        let input = canonical_string(params);
        let digest = secret.expose_secret(|value| {
            let key = value.as_bytes();
            match method {
                SignatureMethod::HmacSha256 => hmac_bytes::<Hmac<Sha256>>(key, input.as_bytes()),
                SignatureMethod::HmacSha512 => hmac_bytes::<Hmac<Sha512>>(key, input.as_bytes()),
                SignatureMethod::Sha256Digest => {
                    let mut hasher = Sha256::new();
                    hasher.update(input.as_bytes());
                    hasher.update(key);
                    Ok(hasher.finalize().to_vec())
                }
            }
        })?;

        Ok(hex::encode_upper(digest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn params(pairs: &[(&str, &str)]) -> SignatureParams {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_canonical_string_orders_by_key() {
        let p = params(&[("to", "447700900000"), ("from", "Acme"), ("text", "hi")]);
        assert_eq!(canonical_string(&p), "&from=Acme&text=hi&to=447700900000");
    }

    #[test]
    fn test_canonical_string_sanitizes_delimiters() {
        let p = params(&[("text", "a=b&c")]);
        assert_eq!(canonical_string(&p), "&text=a_b_c");
    }

    #[test]
    fn test_canonical_string_empty_params() {
        assert_eq!(canonical_string(&SignatureParams::new()), "");
    }

    #[rstest]
    #[case("sha256", SignatureMethod::HmacSha256)]
    #[case("sha512", SignatureMethod::HmacSha512)]
    #[case("sha256hash", SignatureMethod::Sha256Digest)]
    fn test_method_parse_roundtrip(#[case] name: &str, #[case] expected: SignatureMethod) {
        let method: SignatureMethod = name.parse().unwrap();
        assert_eq!(method, expected);
        assert_eq!(method.to_string(), name);
    }

    #[test]
    fn test_unknown_method_is_rejected() {
        let err = "md5".parse::<SignatureMethod>().unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::UnsupportedMethod { method } if method == "md5"
        ));
    }

    #[test]
    fn test_missing_secret_is_the_strategy_error() {
        let generator = HashGenerator::new();
        let err = generator
            .generate(None, None, &SignatureParams::new())
            .unwrap_err();
        assert!(matches!(err, GeneratorError::MissingSecret));
    }

    #[test]
    fn test_output_is_uppercase_hex() {
        let generator = HashGenerator::new();
        let secret = SecretString::new("secret");
        let signature = generator
            .generate(Some(&secret), Some("sha256"), &params(&[("a", "1")]))
            .unwrap();

        assert_eq!(signature.len(), 64); // SHA-256 hex
        assert!(
            signature
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        );
    }

    #[test]
    fn test_sha512_digest_width() {
        let generator = HashGenerator::new();
        let secret = SecretString::new("secret");
        let signature = generator
            .generate(Some(&secret), Some("sha512"), &params(&[("a", "1")]))
            .unwrap();
        assert_eq!(signature.len(), 128); // SHA-512 hex
    }

    #[test]
    fn test_absent_method_defaults_to_hmac_sha256() {
        let generator = HashGenerator::new();
        let secret = SecretString::new("secret");
        let p = params(&[("a", "1")]);

        let explicit = generator.generate(Some(&secret), Some("sha256"), &p).unwrap();
        let defaulted = generator.generate(Some(&secret), None, &p).unwrap();
        assert_eq!(explicit, defaulted);
    }

    #[test]
    fn test_signature_is_deterministic() {
        let generator = HashGenerator::new();
        let secret = SecretString::new("secret");
        let p = params(&[("to", "447700900000"), ("text", "hello")]);

        let first = generator.generate(Some(&secret), Some("sha512"), &p).unwrap();
        let second = generator.generate(Some(&secret), Some("sha512"), &p).unwrap();
        assert_eq!(first, second);
    }

    // Vector computed independently:
    //   printf '&text=hello&to=447700900000' | openssl dgst -sha256 -hmac secret
    #[test]
    fn test_hmac_sha256_known_vector() {
        let generator = HashGenerator::new();
        let secret = SecretString::new("secret");
        let p = params(&[("to", "447700900000"), ("text", "hello")]);

        let signature = generator.generate(Some(&secret), Some("sha256"), &p).unwrap();
        assert_eq!(
            signature,
            "D9A3C5C7303199A1E1B4529622C9894D608110384E9321ECF9AE9BCB9CE4D990"
        );
    }

    // Vector computed independently:
    //   printf '&text=hello&to=447700900000secret' | openssl dgst -sha256
    #[test]
    fn test_sha256_digest_known_vector() {
        let generator = HashGenerator::new();
        let secret = SecretString::new("secret");
        let p = params(&[("to", "447700900000"), ("text", "hello")]);

        let signature = generator
            .generate(Some(&secret), Some("sha256hash"), &p)
            .unwrap();
        assert_eq!(
            signature,
            "556ED5E163DBFC4BA6A37151B1699CFC158AFD4AF16786D40AFF255E1FFD2E5D"
        );
    }
}
