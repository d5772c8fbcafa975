//! Batch validation results.

use std::collections::BTreeMap;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::abn::Abn;
use crate::error::{AbnError, AbnErrorKind};
use crate::options::ValidationOptions;
use crate::validate::parse_with;

/// Outcome for a single input in a batch.
///
/// Serializes as `record`, `input`, then either `abn` or `error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    /// 1-based record number in the source.
    pub record: usize,
    pub input: String,
    pub result: Result<Abn, AbnError>,
}

impl CheckOutcome {
    pub fn check(record: usize, input: impl Into<String>, options: &ValidationOptions) -> Self {
        let input = input.into();
        let result = parse_with(&input, options);
        Self {
            record,
            input,
            result,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }

    pub fn abn(&self) -> Option<&Abn> {
        self.result.as_ref().ok()
    }

    pub fn error(&self) -> Option<&AbnError> {
        self.result.as_ref().err()
    }
}

impl Serialize for CheckOutcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("CheckOutcome", 3)?;
        state.serialize_field("record", &self.record)?;
        state.serialize_field("input", &self.input)?;
        match &self.result {
            Ok(abn) => state.serialize_field("abn", abn)?,
            Err(error) => state.serialize_field("error", error)?,
        }
        state.end()
    }
}

/// Totals across a batch.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub valid: usize,
    pub invalid: usize,
    pub group_abns: usize,
    pub by_kind: BTreeMap<AbnErrorKind, usize>,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[CheckOutcome]) -> Self {
        let mut summary = Self::default();
        for outcome in outcomes {
            summary.total += 1;
            match &outcome.result {
                Ok(abn) => {
                    summary.valid += 1;
                    if abn.is_group() {
                        summary.group_abns += 1;
                    }
                }
                Err(error) => {
                    summary.invalid += 1;
                    *summary.by_kind.entry(error.kind()).or_default() += 1;
                }
            }
        }
        summary
    }
}

/// Per-record outcomes plus totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub outcomes: Vec<CheckOutcome>,
    pub summary: BatchSummary,
}

impl BatchReport {
    /// Validate each input independently, numbering records from 1.
    pub fn check_all<I, S>(inputs: I, options: &ValidationOptions) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let outcomes: Vec<CheckOutcome> = inputs
            .into_iter()
            .enumerate()
            .map(|(index, input)| CheckOutcome::check(index + 1, input, options))
            .collect();
        Self::from_outcomes(outcomes)
    }

    pub fn from_outcomes(outcomes: Vec<CheckOutcome>) -> Self {
        let summary = BatchSummary::from_outcomes(&outcomes);
        Self { outcomes, summary }
    }

    pub fn has_errors(&self) -> bool {
        self.summary.invalid > 0
    }

    /// Failed records only, in input order.
    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.is_valid())
    }
}
