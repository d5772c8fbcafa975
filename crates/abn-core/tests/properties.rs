//! Property tests for ABN validation.

use abn_core::checksum::{WEIGHTS, is_valid_core};
use abn_core::{AbnError, AbnErrorKind, validate};
use proptest::prelude::*;

/// Build a checksum-valid core from 9 free digits by solving for the last
/// two positions.
fn complete_core(prefix: [u8; 9]) -> Option<[u8; 11]> {
    let mut core = [0u8; 11];
    core[..9].copy_from_slice(&prefix);
    for tenth in 0..10u8 {
        for last in 0..10u8 {
            core[9] = tenth;
            core[10] = last;
            if is_valid_core(&core) {
                return Some(core);
            }
        }
    }
    None
}

fn render(core: &[u8; 11]) -> String {
    core.iter().map(|digit| char::from(b'0' + digit)).collect()
}

fn arb_valid_core() -> impl Strategy<Value = [u8; 11]> {
    proptest::array::uniform9(0u8..10).prop_filter_map("no checksum completion", complete_core)
}

/// Interleave whitespace runs between the characters of `digits`.
fn spread(digits: &str, gaps: &[usize]) -> String {
    let mut out = String::new();
    for (index, ch) in digits.chars().enumerate() {
        let gap = gaps.get(index).copied().unwrap_or(0);
        for n in 0..gap {
            out.push(if n % 2 == 0 { ' ' } else { '\t' });
        }
        out.push(ch);
    }
    out
}

proptest! {
    #[test]
    fn canonical_form_is_a_fixed_point(core in arb_valid_core()) {
        let canonical = validate(render(&core).as_str()).expect("valid core");
        prop_assert_eq!(validate(canonical.as_str()), Ok(canonical.clone()));
    }

    #[test]
    fn whitespace_does_not_change_outcome(
        digits in "[0-9]{11}",
        gaps in proptest::collection::vec(0usize..3, 11),
        tail in 0usize..3,
    ) {
        let spaced = format!("{}{}", spread(&digits, &gaps), " ".repeat(tail));
        prop_assert_eq!(validate(spaced.as_str()), validate(digits.as_str()));
    }

    #[test]
    fn foreign_characters_win_over_checksum(
        digits in "[0-9]{11}",
        index in 0usize..11,
        bad in "[a-zA-Z\\-./#]",
    ) {
        let mut text = digits.clone();
        text.insert_str(index, &bad);
        let kind = validate(text.as_str()).map_err(|error| error.kind());
        prop_assert_eq!(kind, Err(AbnErrorKind::InvalidCharacters));
    }

    #[test]
    fn wrong_lengths_are_rejected(digits in "[0-9]{1,40}") {
        prop_assume!(digits.len() != 11 && digits.len() != 14);
        prop_assert_eq!(
            validate(digits.as_str()),
            Err(AbnError::InvalidLength { expected: &[11, 14], actual: digits.len() })
        );
    }

    #[test]
    fn any_eleven_digits_get_a_verdict(digits in "[0-9]{11}") {
        match validate(digits.as_str()) {
            Ok(canonical) => prop_assert_eq!(canonical.len(), 14),
            Err(error) => prop_assert_eq!(error.kind(), AbnErrorKind::ChecksumMismatch),
        }
    }
}

#[test]
fn weights_are_published_table() {
    assert_eq!(WEIGHTS, [10, 1, 3, 5, 7, 9, 11, 13, 15, 17, 19]);
}

#[test]
fn adjacent_transpositions_are_detected() {
    let valid = "31103572158";
    for index in 0..10 {
        let mut swapped: Vec<char> = valid.chars().collect();
        if swapped[index] == swapped[index + 1] {
            continue;
        }
        swapped.swap(index, index + 1);
        let swapped: String = swapped.into_iter().collect();
        assert!(
            matches!(validate(swapped.as_str()), Err(AbnError::ChecksumMismatch { .. })),
            "swap at {index} ({swapped}) should fail"
        );
    }
}
