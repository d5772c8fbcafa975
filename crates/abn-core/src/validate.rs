//! Top-level validation entry points.
//!
//! Every call style in this crate reduces to [`parse_with`]: sanitize,
//! classify, checksum, then format. Nothing is shared between calls.

use tracing::{debug, trace};

use crate::abn::Abn;
use crate::checksum::{self, ChecksumBreakdown};
use crate::classify::{Classified, classify};
use crate::error::{AbnError, Result};
use crate::options::ValidationOptions;
use crate::sanitize::sanitize;

/// Everything `validate` accepts.
///
/// `Validated` is the trusted path: the value already passed validation, so
/// it is rendered without re-checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbnInput<'a> {
    /// No value was supplied.
    Missing,
    Text(&'a str),
    /// Raw bytes; anything that is not UTF-8 counts as missing text.
    Bytes(&'a [u8]),
    Validated(&'a Abn),
}

impl<'a> From<&'a str> for AbnInput<'a> {
    fn from(value: &'a str) -> Self {
        AbnInput::Text(value)
    }
}

impl<'a> From<&'a String> for AbnInput<'a> {
    fn from(value: &'a String) -> Self {
        AbnInput::Text(value.as_str())
    }
}

impl<'a> From<&'a [u8]> for AbnInput<'a> {
    fn from(value: &'a [u8]) -> Self {
        AbnInput::Bytes(value)
    }
}

impl<'a> From<&'a Abn> for AbnInput<'a> {
    fn from(value: &'a Abn) -> Self {
        AbnInput::Validated(value)
    }
}

impl<'a, T> From<Option<T>> for AbnInput<'a>
where
    T: Into<AbnInput<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(AbnInput::Missing, Into::into)
    }
}

/// Validate raw text into an [`Abn`].
///
/// # Errors
///
/// Returns the first failure in detection order: empty input, invalid
/// characters, invalid length, invalid group number, checksum mismatch.
pub fn parse_with(raw: &str, options: &ValidationOptions) -> Result<Abn> {
    trace!(input_len = raw.len(), "validating ABN");
    let result = sanitize(raw)
        .and_then(|digits| classify(&digits, options.group_numbers))
        .and_then(|Classified { core, group }| {
            let remainder = checksum::remainder(&core);
            if remainder == 0 {
                Ok(Abn::from_validated(core, group))
            } else {
                Err(AbnError::ChecksumMismatch { remainder })
            }
        });
    match &result {
        Ok(abn) => debug!(group = abn.is_group(), "ABN accepted"),
        Err(error) => debug!(reason = error.code(), "ABN rejected"),
    }
    result
}

/// Resolve any [`AbnInput`] to an [`Abn`].
///
/// # Errors
///
/// See [`parse_with`]. Missing and non-UTF-8 input fail with
/// [`AbnError::EmptyInput`]; `Validated` never fails.
pub fn resolve_with<'a>(input: impl Into<AbnInput<'a>>, options: &ValidationOptions) -> Result<Abn> {
    match input.into() {
        AbnInput::Missing => Err(AbnError::EmptyInput),
        AbnInput::Text(raw) => parse_with(raw, options),
        AbnInput::Bytes(bytes) => match std::str::from_utf8(bytes) {
            Ok(raw) => parse_with(raw, options),
            Err(_) => Err(AbnError::EmptyInput),
        },
        AbnInput::Validated(abn) => Ok(*abn),
    }
}

/// Validate input and return its canonical form, `DD DDD DDD DDD [GGG]`.
///
/// # Errors
///
/// See [`resolve_with`].
pub fn validate<'a>(input: impl Into<AbnInput<'a>>) -> Result<String> {
    validate_with(input, &ValidationOptions::default())
}

/// [`validate`] with explicit options.
///
/// # Errors
///
/// See [`resolve_with`].
pub fn validate_with<'a>(
    input: impl Into<AbnInput<'a>>,
    options: &ValidationOptions,
) -> Result<String> {
    resolve_with(input, options).map(|abn| abn.to_string())
}

/// Checksum working for the core of `raw`, whether or not it passes.
///
/// # Errors
///
/// Failures detected before the checksum stage (empty input, invalid
/// characters, invalid length, invalid group number).
pub fn explain(raw: &str, options: &ValidationOptions) -> Result<ChecksumBreakdown> {
    let digits = sanitize(raw)?;
    let Classified { core, .. } = classify(&digits, options.group_numbers)?;
    Ok(checksum::breakdown(&core))
}

/// Boolean adapter over [`validate`].
pub fn is_valid<'a>(input: impl Into<AbnInput<'a>>) -> bool {
    resolve_with(input, &ValidationOptions::default()).is_ok()
}
