//! Validation failure reasons.
//!
//! Variants are listed in the order the pipeline detects them. Only the
//! first failure is ever reported for a given input.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why an input is not a valid ABN.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AbnError {
    /// Input was absent, not text, or contained nothing but whitespace.
    #[error("no ABN supplied")]
    EmptyInput,

    /// Input contained something other than ASCII digits and whitespace.
    #[error("ABN contains invalid character {found:?} at position {position}")]
    InvalidCharacters { found: char, position: usize },

    /// Digit count is not one of the accepted lengths.
    #[error(
        "ABN must contain {} digits, found {actual}",
        describe_lengths(.expected)
    )]
    InvalidLength {
        expected: &'static [usize],
        actual: usize,
    },

    /// Group suffix `000` is never allocated.
    #[error("group number 000 is not a valid ABN group")]
    InvalidGroupNumber,

    /// Weighted checksum did not reduce to zero.
    #[error("ABN checksum does not match (remainder {remainder})")]
    ChecksumMismatch { remainder: u32 },
}

/// Field-less discriminant of [`AbnError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbnErrorKind {
    EmptyInput,
    InvalidCharacters,
    InvalidLength,
    InvalidGroupNumber,
    ChecksumMismatch,
}

impl AbnErrorKind {
    /// All kinds, in detection order.
    pub const ALL: [AbnErrorKind; 5] = [
        AbnErrorKind::EmptyInput,
        AbnErrorKind::InvalidCharacters,
        AbnErrorKind::InvalidLength,
        AbnErrorKind::InvalidGroupNumber,
        AbnErrorKind::ChecksumMismatch,
    ];

    /// Stable machine-readable code.
    pub fn code(self) -> &'static str {
        match self {
            AbnErrorKind::EmptyInput => "empty_input",
            AbnErrorKind::InvalidCharacters => "invalid_characters",
            AbnErrorKind::InvalidLength => "invalid_length",
            AbnErrorKind::InvalidGroupNumber => "invalid_group_number",
            AbnErrorKind::ChecksumMismatch => "checksum_mismatch",
        }
    }
}

impl std::fmt::Display for AbnErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl AbnError {
    pub fn kind(&self) -> AbnErrorKind {
        match self {
            AbnError::EmptyInput => AbnErrorKind::EmptyInput,
            AbnError::InvalidCharacters { .. } => AbnErrorKind::InvalidCharacters,
            AbnError::InvalidLength { .. } => AbnErrorKind::InvalidLength,
            AbnError::InvalidGroupNumber => AbnErrorKind::InvalidGroupNumber,
            AbnError::ChecksumMismatch { .. } => AbnErrorKind::ChecksumMismatch,
        }
    }

    /// Shorthand for `self.kind().code()`.
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

fn describe_lengths(lengths: &[usize]) -> String {
    match lengths {
        [] => "no".to_string(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let head: Vec<String> = init.iter().map(ToString::to_string).collect();
            format!("{} or {last}", head.join(", "))
        }
    }
}

pub type Result<T> = std::result::Result<T, AbnError>;
