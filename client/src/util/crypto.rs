//! One-way hashing of credentials before they leave the client.
//!
//! This is transport obfuscation only. The backend is still expected to salt
//! and hash whatever it receives.

#[cfg(test)]
#[path = "crypto_test.rs"]
mod crypto_test;

use serde::Serialize;
use sha2::{Digest, Sha256};

/// Hashed password. Only [`hash`] can produce one, so a payload holding a
/// `PasswordDigest` never carries plaintext.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// SHA-256 of `plaintext`, lowercase hex.
#[must_use]
pub fn hash(plaintext: &str) -> PasswordDigest {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    let bytes = hasher.finalize();
    PasswordDigest(bytes.iter().map(|b| format!("{b:02x}")).collect())
}
