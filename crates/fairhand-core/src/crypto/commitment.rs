//! Commitment tags for the commit-reveal scheme.

use super::key::SecretKey;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha2::Sha256;
use std::fmt;

type HmacSha256 = Hmac<Sha256>;

fn hmac_sha256(key: &[u8], message: &[u8]) -> [u8; 32] {
    // HMAC accepts keys of any length, so this cannot fail.
    let mut mac = HmacSha256::new_from_slice(key).expect("HMAC key of any length");
    mac.update(message);
    mac.finalize().into_bytes().into()
}

/// Commitment = HMAC-SHA-256(key, move name)
///
/// Published before the opposing party chooses; deterministic, so the
/// same (key, move) pair can be recomputed by anyone after the reveal.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Commitment([u8; 32]);

impl Commitment {
    /// Compute the tag over a move's canonical string form.
    pub fn new(key: &SecretKey, move_name: &str) -> Self {
        Self(hmac_sha256(key.as_bytes(), move_name.as_bytes()))
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Hex rendering used for transport and display.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Verify that the given key and move produce this commitment
    pub fn verify(&self, key: &SecretKey, move_name: &str) -> bool {
        *self == Self::new(key, move_name)
    }
}

impl fmt::Debug for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Commitment({})", hex::encode(&self.0[..8]))
    }
}

impl fmt::Display for Commitment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::key::KEY_LEN;

    #[test]
    fn test_hmac_sha256_rfc4231_case_2() {
        // RFC 4231 test case 2: key "Jefe"
        let tag = hmac_sha256(b"Jefe", b"what do ya want for nothing?");
        assert_eq!(
            hex::encode(tag),
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_commitment_deterministic() {
        let key = SecretKey::from_bytes([7; KEY_LEN]);
        let commitment1 = Commitment::new(&key, "Rock");
        let commitment2 = Commitment::new(&key, "Rock");
        assert_eq!(commitment1, commitment2);
    }

    #[test]
    fn test_different_moves_different_commitments() {
        let key = SecretKey::from_bytes([7; KEY_LEN]);
        assert_ne!(Commitment::new(&key, "Rock"), Commitment::new(&key, "Paper"));
    }

    #[test]
    fn test_different_keys_different_commitments() {
        let key1 = SecretKey::from_bytes([1; KEY_LEN]);
        let key2 = SecretKey::from_bytes([2; KEY_LEN]);
        assert_ne!(
            Commitment::new(&key1, "Rock"),
            Commitment::new(&key2, "Rock")
        );
    }

    #[test]
    fn test_commitment_verification() {
        let key = SecretKey::random().unwrap();
        let commitment = Commitment::new(&key, "Scissors");
        assert!(commitment.verify(&key, "Scissors"));
        assert!(!commitment.verify(&key, "Rock"));
    }

    #[test]
    fn test_wrong_key_fails_verification() {
        let key1 = SecretKey::random().unwrap();
        let key2 = SecretKey::random().unwrap();
        let commitment = Commitment::new(&key1, "Rock");
        assert!(!commitment.verify(&key2, "Rock"));
    }

    #[test]
    fn test_hex_rendering_is_64_chars() {
        let key = SecretKey::from_bytes([0; KEY_LEN]);
        assert_eq!(Commitment::new(&key, "Rock").to_hex().len(), 64);
    }
}
