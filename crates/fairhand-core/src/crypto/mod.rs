//! Cryptographic primitives for the commit-reveal scheme.
//!
//! This module provides:
//! - SecretKey and KeyProvider for per-round key material
//! - Commitment for the keyed tag published before the human's choice

mod commitment;
mod key;

pub use commitment::Commitment;
pub use key::{KeyProvider, OsKeyProvider, SecretKey, KEY_LEN};
