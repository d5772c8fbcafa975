//! Length classification and group-suffix split.

use crate::abn::GroupNumber;
use crate::error::{AbnError, Result};
use crate::options::{CORE_LEN, GROUP_ABN_LEN, GROUP_LEN, GroupNumberPolicy};
use crate::sanitize::Digits;

/// Sanitized digits split into their roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classified {
    pub core: [u8; CORE_LEN],
    pub group: Option<GroupNumber>,
}

/// Decide whether `digits` is a single-entity or group ABN.
///
/// # Errors
///
/// - [`AbnError::InvalidLength`] when the digit count is not accepted by
///   `policy`.
/// - [`AbnError::InvalidGroupNumber`] when a 14-digit input ends in `000`.
pub fn classify(digits: &Digits, policy: GroupNumberPolicy) -> Result<Classified> {
    let accepted = policy.accepted_lengths();
    if !accepted.contains(&digits.len()) {
        return Err(AbnError::InvalidLength {
            expected: accepted,
            actual: digits.len(),
        });
    }
    let values = digits.as_slice();
    let mut core = [0u8; CORE_LEN];
    core.copy_from_slice(&values[..CORE_LEN]);
    let group = if values.len() == GROUP_ABN_LEN {
        let mut suffix = [0u8; GROUP_LEN];
        suffix.copy_from_slice(&values[CORE_LEN..]);
        Some(GroupNumber::from_digits(suffix).ok_or(AbnError::InvalidGroupNumber)?)
    } else {
        None
    };
    Ok(Classified { core, group })
}
