//! Cryptographic primitives for passphrase-protected secrets
//!
//! This module provides:
//! - AES-256-GCM authenticated encryption with per-call random nonces
//! - SHA-256 key derivation from passphrases
//! - Secure memory handling with zeroize

mod cipher_box;
mod key_derivation;
mod secure_memory;

pub use cipher_box::{decrypt_secret, encrypt_secret, CipherBox, NONCE_SIZE, TAG_SIZE};
pub use key_derivation::derive_key;
pub use secure_memory::{DerivedKey, SecretString, KEY_SIZE};
