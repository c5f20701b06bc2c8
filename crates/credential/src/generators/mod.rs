//! Default generator strategies
//!
//! These are the strategies [`Credentials`](crate::Credentials) binds lazily
//! when a slot is used before being set explicitly. Anything implementing
//! the traits in [`crate::traits`] can replace them per instance.

mod hash;
mod jwt;

pub use hash::{HashGenerator, SignatureMethod};
pub use jwt::{DEFAULT_TOKEN_TTL, JwtGenerator};
