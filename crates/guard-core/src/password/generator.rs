//! Random password generation

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Length of every generated password
pub const PASSWORD_LENGTH: usize = 23;

const DIGITS: &[u8] = b"0123456789";
const ALPHANUMERIC: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates 23-character alphanumeric passwords containing at least one digit.
///
/// The generator owns its randomness source. Output never contains a
/// punctuation or symbol character, so it does **not** satisfy
/// [`verify_password`](super::verify_password) on its own; callers that need
/// a policy-compliant password must append or substitute a special character.
#[derive(Debug)]
pub struct PasswordGenerator<R = StdRng> {
    rng: R,
}

impl PasswordGenerator<StdRng> {
    /// Create a generator seeded from operating system entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for PasswordGenerator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PasswordGenerator<R> {
    /// Create a generator over a caller-supplied randomness source
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Produce a new password.
    ///
    /// The first slot is forced to a digit, the rest are drawn from
    /// `A-Z a-z 0-9`, then the whole buffer is shuffled.
    pub fn generate(&mut self) -> String {
        let mut buf = Vec::with_capacity(PASSWORD_LENGTH);
        buf.push(DIGITS[self.rng.gen_range(0..DIGITS.len())]);
        for _ in 1..PASSWORD_LENGTH {
            buf.push(ALPHANUMERIC[self.rng.gen_range(0..ALPHANUMERIC.len())]);
        }
        buf.shuffle(&mut self.rng);

        buf.into_iter().map(char::from).collect()
    }
}

/// Generate a single password with a freshly seeded generator
pub fn generate_password() -> String {
    PasswordGenerator::new().generate()
}
