//! Single code point classification

use std::fmt;

use crate::interval::bisearch;
use crate::tables::{WIDE, ZERO_WIDTH};

/// Number of terminal cells a code point occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellWidth {
    /// C0/C1 control character or DEL, no defined width
    Unprintable,
    /// NUL, combining marks, format characters
    Zero,
    /// Everything not covered by another class, including East Asian Ambiguous
    Single,
    /// East Asian Wide and Fullwidth
    Double,
}

impl CellWidth {
    /// Sentinel form: `-1` for unprintable, otherwise the column count
    pub fn as_i32(self) -> i32 {
        match self {
            CellWidth::Unprintable => -1,
            CellWidth::Zero => 0,
            CellWidth::Single => 1,
            CellWidth::Double => 2,
        }
    }

    /// Column count, or `None` for unprintable code points
    pub fn columns(self) -> Option<usize> {
        match self {
            CellWidth::Unprintable => None,
            CellWidth::Zero => Some(0),
            CellWidth::Single => Some(1),
            CellWidth::Double => Some(2),
        }
    }

    pub fn is_printable(self) -> bool {
        self != CellWidth::Unprintable
    }
}

impl fmt::Display for CellWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i32())
    }
}

/// Check for the C0 range (without NUL), DEL and the C1 range
fn is_control(c: u32) -> bool {
    matches!(c, 0x01..=0x1F | 0x7F..=0x9F)
}

/// Classify one code point
///
/// The checks run in a fixed order and the first match wins:
/// 1. NUL is zero width
/// 2. other C0/C1 controls and DEL are unprintable
/// 3. combining and format characters are zero width
/// 4. East Asian Wide/Fullwidth characters take two cells
/// 5. everything else takes one cell
///
/// Some code points sit in both tables (U+302A..=U+302D, for example); the zero-width
/// table is consulted first so those come out as zero width.
#[inline]
pub fn classify(c: u32) -> CellWidth {
    if c == 0 {
        return CellWidth::Zero;
    }
    if is_control(c) {
        return CellWidth::Unprintable;
    }
    if bisearch(c, ZERO_WIDTH) {
        return CellWidth::Zero;
    }
    if bisearch(c, WIDE) {
        return CellWidth::Double;
    }
    CellWidth::Single
}

/// Width of one code point in `{-1, 0, 1, 2}`, where `-1` marks a control character
#[inline]
pub fn width_of(c: u32) -> i32 {
    classify(c).as_i32()
}

/// Width of a `char`, or `None` for control characters
#[inline]
pub fn char_width(c: char) -> Option<usize> {
    classify(c as u32).columns()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nul_is_zero_width() {
        assert_eq!(classify(0), CellWidth::Zero);
        assert_eq!(width_of(0), 0);
    }

    #[test]
    fn test_controls_are_unprintable() {
        for c in (0x01..=0x1F).chain(0x7F..=0x9F) {
            assert_eq!(width_of(c), -1, "U+{:04X}", c);
        }
        assert_eq!(width_of(0x20), 1);
        assert_eq!(width_of(0x7E), 1);
        assert_eq!(width_of(0xA0), 1);
    }

    #[test]
    fn test_basic_classes() {
        assert_eq!(width_of(0x0041), 1);
        assert_eq!(width_of(0x4E2D), 2);
        assert_eq!(width_of(0x0301), 0);
        assert_eq!(width_of(0x0009), -1);
    }

    #[test]
    fn test_soft_hyphen_is_single() {
        assert_eq!(classify(0x00AD), CellWidth::Single);
    }

    #[test]
    fn test_special_zero_width_entries() {
        assert_eq!(width_of(0x1160), 0);
        assert_eq!(width_of(0x11FF), 0);
        assert_eq!(width_of(0x200B), 0);
        // Hangul leading consonants stay wide
        assert_eq!(width_of(0x1100), 2);
        assert_eq!(width_of(0x115F), 2);
    }

    #[test]
    fn test_zero_width_takes_precedence_over_wide() {
        assert_eq!(width_of(0x3000), 2);
        assert_eq!(width_of(0x302A), 0);
        assert_eq!(width_of(0x302D), 0);
        assert_eq!(width_of(0x302E), 2);
        assert_eq!(width_of(0x3099), 0);
        assert_eq!(width_of(0x309A), 0);
        assert_eq!(width_of(0x309B), 2);
        assert_eq!(width_of(0x16FE3), 2);
        assert_eq!(width_of(0x16FE4), 0);
    }

    #[test]
    fn test_beyond_unicode_is_single() {
        assert_eq!(width_of(0x110000), 1);
        assert_eq!(width_of(u32::MAX), 1);
    }

    #[test]
    fn test_char_width() {
        assert_eq!(char_width('a'), Some(1));
        assert_eq!(char_width('中'), Some(2));
        assert_eq!(char_width('\u{0301}'), Some(0));
        assert_eq!(char_width('\n'), None);
    }

    #[test]
    fn test_cell_width_conversions() {
        assert_eq!(CellWidth::Unprintable.columns(), None);
        assert_eq!(CellWidth::Double.columns(), Some(2));
        assert_eq!(CellWidth::Unprintable.to_string(), "-1");
        assert_eq!(CellWidth::Single.to_string(), "1");
        assert!(!CellWidth::Unprintable.is_printable());
        assert!(CellWidth::Zero.is_printable());
    }
}
