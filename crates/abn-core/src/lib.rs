//! Australian Business Number validation and canonical formatting.
//!
//! An ABN is 11 digits protected by a weighted checksum (mod 89). Group
//! ABNs append a 3-digit suffix, `001` or higher, that takes no part in the
//! checksum.
//!
//! ```
//! use abn_core::{AbnError, validate};
//!
//! assert_eq!(validate("31103572158").as_deref(), Ok("31 103 572 158"));
//! assert!(matches!(validate("31 103 572 157"), Err(AbnError::ChecksumMismatch { .. })));
//! ```

pub mod abn;
pub mod checksum;
pub mod classify;
pub mod error;
pub mod format;
pub mod options;
pub mod report;
pub mod sanitize;
pub mod validate;

pub use abn::{Abn, GroupNumber};
pub use checksum::{ChecksumBreakdown, ChecksumTerm, WEIGHTS};
pub use error::{AbnError, AbnErrorKind, Result};
pub use options::{GroupNumberPolicy, ValidationOptions};
pub use report::{BatchReport, BatchSummary, CheckOutcome};
pub use validate::{AbnInput, explain, is_valid, parse_with, resolve_with, validate, validate_with};
