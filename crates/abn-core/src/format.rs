//! Canonical `DD DDD DDD DDD [GGG]` rendering.

use std::fmt::{self, Write};

use crate::abn::GroupNumber;
use crate::options::CORE_LEN;

/// Where the separators go in an 11-digit core.
const BREAKS: [usize; 3] = [2, 5, 8];

/// Write the canonical form of a validated core and optional suffix.
pub fn write_canonical<W: Write>(
    out: &mut W,
    core: &[u8; CORE_LEN],
    group: Option<GroupNumber>,
) -> fmt::Result {
    for (index, digit) in core.iter().enumerate() {
        if BREAKS.contains(&index) {
            out.write_char(' ')?;
        }
        out.write_char(char::from(b'0' + digit))?;
    }
    if let Some(group) = group {
        write!(out, " {group}")?;
    }
    Ok(())
}

/// Canonical form as an owned string.
pub fn format_canonical(core: &[u8; CORE_LEN], group: Option<GroupNumber>) -> String {
    let mut out = String::with_capacity(18);
    // Writing into a String cannot fail.
    let _ = write_canonical(&mut out, core, group);
    out
}

/// Digits only, no separators.
pub fn format_compact(core: &[u8; CORE_LEN], group: Option<GroupNumber>) -> String {
    let mut out: String = core.iter().map(|digit| char::from(b'0' + digit)).collect();
    if let Some(group) = group {
        let _ = write!(out, "{group}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const CORE: [u8; CORE_LEN] = [3, 1, 1, 0, 3, 5, 7, 2, 1, 5, 8];

    #[test]
    fn groups_two_three_three_three() {
        assert_eq!(format_canonical(&CORE, None), "31 103 572 158");
    }

    #[test]
    fn appends_group_suffix() {
        let group = GroupNumber::new(1).expect("group");
        assert_eq!(format_canonical(&CORE, Some(group)), "31 103 572 158 001");
        assert_eq!(format_compact(&CORE, Some(group)), "31103572158001");
    }

    #[test]
    fn compact_has_no_spaces() {
        assert_eq!(format_compact(&CORE, None), "31103572158");
    }
}
