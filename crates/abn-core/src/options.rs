//! Configuration options for ABN validation.

use serde::{Deserialize, Serialize};

/// Digit count of a single-entity ABN.
pub const CORE_LEN: usize = 11;

/// Digit count of the group suffix.
pub const GROUP_LEN: usize = 3;

/// Digit count of a group ABN (core plus suffix).
pub const GROUP_ABN_LEN: usize = CORE_LEN + GROUP_LEN;

/// Whether 14-digit group ABNs are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupNumberPolicy {
    /// Accept 11 or 14 digits; a 14-digit input carries a group suffix.
    #[default]
    Accept,
    /// Accept 11 digits only.
    Reject,
}

impl GroupNumberPolicy {
    /// Digit counts this policy accepts, shortest first.
    pub fn accepted_lengths(self) -> &'static [usize] {
        match self {
            GroupNumberPolicy::Accept => &[CORE_LEN, GROUP_ABN_LEN],
            GroupNumberPolicy::Reject => &[CORE_LEN],
        }
    }
}

/// Options controlling ABN validation behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOptions {
    /// Group ABN handling.
    pub group_numbers: GroupNumberPolicy,
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options for the 11-digit-only core, rejecting group ABNs.
    pub fn strict() -> Self {
        Self {
            group_numbers: GroupNumberPolicy::Reject,
        }
    }

    #[must_use]
    pub fn with_group_numbers(mut self, policy: GroupNumberPolicy) -> Self {
        self.group_numbers = policy;
        self
    }
}
