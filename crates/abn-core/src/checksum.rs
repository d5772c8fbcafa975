//! ATO weighted checksum over the 11-digit core.
//!
//! Subtract one from the leading digit, weight each digit, sum, and the
//! number is valid when the sum is divisible by 89.

use crate::options::CORE_LEN;

/// Per-position weights published by the ATO.
pub const WEIGHTS: [i32; CORE_LEN] = [10, 1, 3, 5, 7, 9, 11, 13, 15, 17, 19];

/// Checksum modulus.
pub const MODULUS: i32 = 89;

/// One row of the checksum working, used by `explain`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct ChecksumTerm {
    pub position: usize,
    pub digit: u8,
    /// Digit after the leading-digit adjustment (may be -1).
    pub adjusted: i32,
    pub weight: i32,
    pub product: i32,
}

/// Full checksum working for an 11-digit core.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ChecksumBreakdown {
    pub terms: Vec<ChecksumTerm>,
    pub sum: i32,
    pub remainder: u32,
}

impl ChecksumBreakdown {
    pub fn is_valid(&self) -> bool {
        self.remainder == 0
    }
}

/// Per-position signed terms. A leading zero becomes -1 and contributes -10.
fn terms(core: &[u8; CORE_LEN]) -> impl Iterator<Item = ChecksumTerm> + '_ {
    core.iter()
        .zip(WEIGHTS)
        .enumerate()
        .map(|(position, (&digit, weight))| {
            let adjusted = if position == 0 {
                i32::from(digit) - 1
            } else {
                i32::from(digit)
            };
            ChecksumTerm {
                position,
                digit,
                adjusted,
                weight,
                product: adjusted * weight,
            }
        })
}

/// Weighted sum reduced into `0..89`.
pub fn remainder(core: &[u8; CORE_LEN]) -> u32 {
    let sum: i32 = terms(core).map(|term| term.product).sum();
    sum.rem_euclid(MODULUS).unsigned_abs()
}

pub fn is_valid_core(core: &[u8; CORE_LEN]) -> bool {
    remainder(core) == 0
}

/// Checksum working, step by step.
pub fn breakdown(core: &[u8; CORE_LEN]) -> ChecksumBreakdown {
    let terms: Vec<ChecksumTerm> = terms(core).collect();
    let sum = terms.iter().map(|term| term.product).sum::<i32>();
    ChecksumBreakdown {
        terms,
        sum,
        remainder: sum.rem_euclid(MODULUS).unsigned_abs(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn core(text: &str) -> [u8; CORE_LEN] {
        let mut out = [0u8; CORE_LEN];
        for (slot, ch) in out.iter_mut().zip(text.chars()) {
            *slot = ch.to_digit(10).unwrap() as u8;
        }
        out
    }

    #[test]
    fn known_valid_numbers() {
        for abn in [
            "31103572158",
            "51824753556",
            "53004085616",
            "33102417032",
            "83914571673",
        ] {
            assert!(is_valid_core(&core(abn)), "{abn} should be valid");
        }
    }

    #[test]
    fn altered_last_digit_fails() {
        assert_eq!(remainder(&core("31103572157")), 70);
    }

    #[test]
    fn leading_zero_is_signed() {
        // Sum is -10; a wrapping or clamping implementation would not get 79.
        assert_eq!(remainder(&core("00000000000")), 79);
        assert!(is_valid_core(&core("00000894847")));
    }

    #[test]
    fn breakdown_matches_remainder() {
        let working = breakdown(&core("31103572158"));
        assert_eq!(working.terms.len(), 11);
        assert_eq!(working.terms[0].adjusted, 2);
        assert_eq!(working.terms[0].product, 20);
        assert_eq!(working.sum % 89, 0);
        assert!(working.is_valid());

        let bad = breakdown(&core("00000000000"));
        assert_eq!(bad.sum, -10);
        assert_eq!(bad.remainder, 79);
    }
}
