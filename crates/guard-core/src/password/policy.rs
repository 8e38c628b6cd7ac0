//! Password strength policy
//!
//! A password passes when it holds more than [`MIN_CLASSIFIED_CHARS`]
//! classified characters and at least one of each category: number,
//! punctuation or symbol, uppercase letter, lowercase letter or space.
//! The comparison is strict, so nine classified characters is the real
//! minimum even though the failure message says eight.

use unicode_general_category::{get_general_category, GeneralCategory};

use crate::error::{GuardError, Result, INVALID_PASSWORD_MESSAGE};

/// The classified-character count must be strictly greater than this
pub const MIN_CLASSIFIED_CHARS: usize = 8;

/// Per-category character counts for a candidate password
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterClasses {
    pub digits: usize,
    pub specials: usize,
    pub uppercase: usize,
    pub lowercase: usize,
    /// Characters that matched any category
    pub total: usize,
}

impl CharacterClasses {
    /// Classify every character of `password` in a single pass
    pub fn tally(password: &str) -> Self {
        let mut classes = Self::default();
        for c in password.chars() {
            let counter = match get_general_category(c) {
                GeneralCategory::DecimalNumber
                | GeneralCategory::LetterNumber
                | GeneralCategory::OtherNumber => &mut classes.digits,
                GeneralCategory::ConnectorPunctuation
                | GeneralCategory::DashPunctuation
                | GeneralCategory::OpenPunctuation
                | GeneralCategory::ClosePunctuation
                | GeneralCategory::InitialPunctuation
                | GeneralCategory::FinalPunctuation
                | GeneralCategory::OtherPunctuation
                | GeneralCategory::MathSymbol
                | GeneralCategory::CurrencySymbol
                | GeneralCategory::ModifierSymbol
                | GeneralCategory::OtherSymbol => &mut classes.specials,
                GeneralCategory::UppercaseLetter => &mut classes.uppercase,
                GeneralCategory::LowercaseLetter => &mut classes.lowercase,
                _ if c == ' ' => &mut classes.lowercase,
                _ => continue,
            };
            *counter += 1;
            classes.total += 1;
        }
        classes
    }

    fn is_strong(&self) -> bool {
        self.total > MIN_CLASSIFIED_CHARS
            && self.digits > 0
            && self.specials > 0
            && self.uppercase > 0
            && self.lowercase > 0
    }
}

/// Outcome of evaluating a password against the policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyVerdict {
    Pass,
    Fail { reason: &'static str },
}

impl PolicyVerdict {
    pub fn is_pass(&self) -> bool {
        matches!(self, PolicyVerdict::Pass)
    }

    /// Convert into a `Result`, mapping failure to [`GuardError::InvalidPassword`]
    pub fn into_result(self) -> Result<()> {
        match self {
            PolicyVerdict::Pass => Ok(()),
            PolicyVerdict::Fail { .. } => Err(GuardError::InvalidPassword),
        }
    }
}

/// Evaluate `password` against the strength policy
pub fn evaluate(password: &str) -> PolicyVerdict {
    if CharacterClasses::tally(password).is_strong() {
        PolicyVerdict::Pass
    } else {
        PolicyVerdict::Fail {
            reason: INVALID_PASSWORD_MESSAGE,
        }
    }
}

/// Check that `password` is strong, failing with [`GuardError::InvalidPassword`]
pub fn verify_password(password: &str) -> Result<()> {
    evaluate(password).into_result()
}
