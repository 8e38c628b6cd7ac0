//! Subcommands of the `credential-guard` binary

use clap::Subcommand;
use tracing::{info, warn};

use guard_core::password::{verify_password, PasswordGenerator};
use guard_core::{codec, CipherBox, Result};

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate random 23-character alphanumeric passwords
    Generate {
        /// Number of passwords to generate
        #[arg(long, default_value = "1")]
        count: usize,
    },
    /// Check a password against the strength policy
    Verify { password: String },
    /// Seal a secret under the passphrase
    Encrypt { plaintext: String },
    /// Open a sealed payload with the passphrase
    Decrypt { payload: String },
    /// Base64-encode text
    Encode { text: String },
    /// Base64-decode text
    Decode { text: String },
}

impl Command {
    /// Execute the command. `passphrase` is only consulted by encrypt/decrypt.
    pub fn run(&self, passphrase: &str) -> Result<String> {
        match self {
            Command::Generate { count } => {
                warn!("Generated passwords contain no special character and do not pass the strength policy");
                let mut generator = PasswordGenerator::new();
                let passwords: Vec<String> = (0..*count).map(|_| generator.generate()).collect();
                Ok(passwords.join("\n"))
            }
            Command::Verify { password } => {
                verify_password(password)?;
                Ok("Password is strong".to_string())
            }
            Command::Encrypt { plaintext } => {
                let sealed = CipherBox::new().encrypt_string(plaintext, passphrase)?;
                info!("Secret sealed");
                Ok(sealed)
            }
            Command::Decrypt { payload } => {
                let secret = CipherBox::new().decrypt_string(payload, passphrase)?;
                Ok(secret.into_inner())
            }
            Command::Encode { text } => Ok(codec::encode(text)),
            Command::Decode { text } => codec::decode_string(text),
        }
    }
}
