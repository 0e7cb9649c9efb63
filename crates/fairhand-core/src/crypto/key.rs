//! Secret key generation for the commit-reveal scheme.

use crate::error::GameError;
use rand::rngs::OsRng;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Length of a round key in bytes.
pub const KEY_LEN: usize = 32;

/// Per-round secret key.
///
/// Generated once per round and kept hidden until the reveal, at which
/// point it becomes a read-only disclosed value. Never reused.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecretKey([u8; KEY_LEN]);

impl SecretKey {
    /// Generate a new key from the operating system entropy source.
    pub fn random() -> Result<Self, GameError> {
        let mut bytes = [0u8; KEY_LEN];
        OsRng.try_fill_bytes(&mut bytes)?;
        Ok(Self(bytes))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Parse a 64-character hex rendering back into a key.
    pub fn from_hex(s: &str) -> Result<Self, GameError> {
        let bytes = hex::decode(s).map_err(|e| GameError::MalformedKey(e.to_string()))?;
        let bytes: [u8; KEY_LEN] = bytes
            .try_into()
            .map_err(|_| GameError::MalformedKey(format!("expected {} bytes", KEY_LEN)))?;
        Ok(Self(bytes))
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }

    /// Hex rendering used for transport and display.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// Source of per-round secret keys.
///
/// Implementations can be:
/// - OsKeyProvider for real play
/// - A fixed-key provider for deterministic tests
pub trait KeyProvider {
    fn generate_key(&mut self) -> Result<SecretKey, GameError>;
}

/// Default provider backed by the operating system entropy source.
pub struct OsKeyProvider;

impl KeyProvider for OsKeyProvider {
    fn generate_key(&mut self) -> Result<SecretKey, GameError> {
        SecretKey::random()
    }
}
