//! Password generation and strength checking
//!
//! The two halves are deliberately independent: generated passwords are
//! alphanumeric only and will fail the policy until a special character is added.

mod generator;
mod policy;

pub use generator::{generate_password, PasswordGenerator, PASSWORD_LENGTH};
pub use policy::{evaluate, verify_password, CharacterClasses, PolicyVerdict, MIN_CLASSIFIED_CHARS};
