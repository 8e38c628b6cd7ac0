//! Passphrase-keyed AES-256-GCM sealing
//!
//! Sealed format: `base64(nonce || ciphertext || auth_tag)`
//! - Nonce: 12 bytes (96 bits) - standard for GCM, fresh per encryption
//! - Ciphertext: same length as the plaintext
//! - Auth tag: 16 bytes (128 bits), as appended by aes-gcm
//!
//! There is no version byte or algorithm identifier; payloads produced by
//! earlier releases must keep opening, so nonce placement and the base64
//! alphabet are fixed.

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use tracing::debug;

use super::{derive_key, SecretString};
use crate::codec;
use crate::error::{GuardError, Result};

/// GCM nonce length in bytes
pub const NONCE_SIZE: usize = 12;
/// GCM authentication tag length in bytes
pub const TAG_SIZE: usize = 16;

/// Seals and opens secrets under a passphrase.
///
/// Holds only the nonce source; keys are derived per call and wiped on
/// return. `CipherBox::new()` draws nonces from the operating system.
#[derive(Debug, Clone, Default)]
pub struct CipherBox<R = OsRng> {
    rng: R,
}

impl CipherBox<OsRng> {
    pub fn new() -> Self {
        Self { rng: OsRng }
    }
}

impl<R: RngCore + CryptoRng> CipherBox<R> {
    /// Use a caller-supplied secure randomness source for nonces
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Encrypt `plaintext` under `passphrase` and return the base64 sealed payload
    pub fn encrypt(&mut self, plaintext: &[u8], passphrase: &str) -> Result<String> {
        let key = derive_key(passphrase);
        let cipher = Aes256Gcm::new_from_slice(key.as_bytes())
            .map_err(|e| GuardError::Encryption(e.to_string()))?;

        let mut nonce = [0u8; NONCE_SIZE];
        self.rng
            .try_fill_bytes(&mut nonce)
            .map_err(|e| GuardError::Encryption(e.to_string()))?;

        // aes-gcm appends the auth tag to the ciphertext
        let ciphertext = cipher
            .encrypt(Nonce::from_slice(&nonce), plaintext)
            .map_err(|e| GuardError::Encryption(e.to_string()))?;

        let mut sealed = Vec::with_capacity(NONCE_SIZE + ciphertext.len());
        sealed.extend_from_slice(&nonce);
        sealed.extend_from_slice(&ciphertext);

        debug!(sealed_len = sealed.len(), "Sealed payload");
        Ok(codec::encode(sealed))
    }

    /// Encrypt a UTF-8 secret
    pub fn encrypt_string(&mut self, plaintext: &str, passphrase: &str) -> Result<String> {
        self.encrypt(plaintext.as_bytes(), passphrase)
    }

    /// Open a sealed payload.
    ///
    /// Malformed base64, truncated payloads, a wrong passphrase and tampered
    /// ciphertext all fail with the same [`GuardError::Decryption`].
    pub fn decrypt(&self, sealed: &str, passphrase: &str) -> Result<Vec<u8>> {
        let data = codec::decode(sealed).map_err(|e| {
            debug!(reason = %e, "Rejected sealed payload");
            GuardError::Decryption
        })?;

        if data.len() < NONCE_SIZE {
            debug!(len = data.len(), "Sealed payload shorter than nonce");
            return Err(GuardError::Decryption);
        }
        let (nonce, ciphertext) = data.split_at(NONCE_SIZE);

        let key = derive_key(passphrase);
        let cipher = Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|e| {
            debug!(reason = %e, "Cipher construction failed");
            GuardError::Decryption
        })?;

        cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|_| {
                debug!("Authentication tag verification failed");
                GuardError::Decryption
            })
    }

    /// Open a sealed payload whose plaintext is UTF-8 text
    pub fn decrypt_string(&self, sealed: &str, passphrase: &str) -> Result<SecretString> {
        let plaintext = self.decrypt(sealed, passphrase)?;
        String::from_utf8(plaintext)
            .map(SecretString::new)
            .map_err(|_| GuardError::Decryption)
    }
}

/// Encrypt a secret string with OS-sourced nonces
pub fn encrypt_secret(plaintext: &str, passphrase: &str) -> Result<String> {
    CipherBox::new().encrypt_string(plaintext, passphrase)
}

/// Decrypt a payload produced by [`encrypt_secret`]
pub fn decrypt_secret(sealed: &str, passphrase: &str) -> Result<String> {
    CipherBox::new()
        .decrypt_string(sealed, passphrase)
        .map(SecretString::into_inner)
}
