//! Passphrase-to-key derivation
//!
//! The key is the SHA-256 digest of the raw passphrase bytes: unsalted and
//! deterministic, so the same passphrase always opens payloads sealed under
//! it. This is not a password-storage KDF.

use sha2::{Digest, Sha256};
use tracing::debug;

use super::DerivedKey;

/// Derive a 256-bit key from `passphrase`. Any string, including `""`, is accepted.
pub fn derive_key(passphrase: &str) -> DerivedKey {
    let digest = Sha256::digest(passphrase.as_bytes());
    debug!("Derived passphrase key");
    DerivedKey::new(digest.into())
}
