//! Validated ABN and group number value types.

use std::fmt;
use std::str::FromStr;

use crate::error::AbnError;
use crate::format::{format_compact, write_canonical};
use crate::options::{CORE_LEN, GROUP_LEN, ValidationOptions};
use crate::validate::parse_with;

/// Three-digit group suffix of a group ABN, `001` through `999`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GroupNumber(u16);

impl GroupNumber {
    pub const MAX: u16 = 999;

    /// Returns `None` for 0 and anything above 999.
    pub fn new(value: u16) -> Option<Self> {
        (1..=Self::MAX).contains(&value).then_some(Self(value))
    }

    pub(crate) fn from_digits(digits: [u8; GROUP_LEN]) -> Option<Self> {
        let value = digits
            .iter()
            .fold(0u16, |acc, &digit| acc * 10 + u16::from(digit));
        Self::new(value)
    }

    pub fn value(self) -> u16 {
        self.0
    }
}

impl fmt::Display for GroupNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:03}", self.0)
    }
}

/// A validated Australian Business Number.
///
/// Holding an `Abn` means the checksum has already passed; rendering it
/// never re-validates. Construct one with [`Abn::parse`] or `str::parse`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Abn {
    core: [u8; CORE_LEN],
    group: Option<GroupNumber>,
}

impl Abn {
    /// Validate `raw` with default options.
    ///
    /// # Errors
    ///
    /// Returns the first [`AbnError`] detected.
    pub fn parse(raw: &str) -> Result<Self, AbnError> {
        parse_with(raw, &ValidationOptions::default())
    }

    /// Only called once the checksum has passed.
    pub(crate) fn from_validated(core: [u8; CORE_LEN], group: Option<GroupNumber>) -> Self {
        Self { core, group }
    }

    /// The 11 core digit values.
    pub fn digits(&self) -> &[u8; CORE_LEN] {
        &self.core
    }

    pub fn group(&self) -> Option<GroupNumber> {
        self.group
    }

    pub fn is_group(&self) -> bool {
        self.group.is_some()
    }

    /// The same ABN without its group suffix.
    #[must_use]
    pub fn without_group(&self) -> Self {
        Self {
            core: self.core,
            group: None,
        }
    }

    /// Digits with no separators: 11 characters, or 14 for a group ABN.
    pub fn compact(&self) -> String {
        format_compact(&self.core, self.group)
    }
}

impl fmt::Display for Abn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_canonical(f, &self.core, self.group)
    }
}

impl FromStr for Abn {
    type Err = AbnError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Abn {
    type Error = AbnError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl serde::Serialize for Abn {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Abn {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
