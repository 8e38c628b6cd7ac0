//! # guard-core
//!
//! Credential protection core:
//! - Random password generation with an owned randomness source
//! - Fixed password strength policy
//! - AES-256-GCM sealing of secrets under a SHA-256-derived passphrase key
//! - Base64 transcoding of sealed payloads
//! - Settings loading and validation for front ends

pub mod codec;
pub mod crypto;
pub mod error;
pub mod password;
pub mod settings;

pub use crypto::{decrypt_secret, encrypt_secret, CipherBox, SecretString};
pub use error::{ErrorResult, GuardError, Result};
pub use password::{
    evaluate, generate_password, verify_password, PasswordGenerator, PolicyVerdict,
};
pub use settings::Settings;
