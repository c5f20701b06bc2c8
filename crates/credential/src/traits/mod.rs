//! Capability traits for generator strategies

mod generator;

pub use generator::{Claims, SignatureGenerator, SignatureParams, TokenGenerator};
