//! Invariants of the generated interval tables and agreement with the classifier
use cellwidth::{
    bisearch, is_well_formed, width_of, Interval, MAX_CODE_POINT, UNICODE_VERSION, WIDE,
    ZERO_WIDTH,
};
use unicode_width::UnicodeWidthChar;

/// Reference membership: mark every code point each interval covers
fn sweep_membership(table: &[Interval]) -> Vec<bool> {
    let mut member = vec![false; MAX_CODE_POINT as usize + 1];
    for range in table {
        for c in range.first..=range.last {
            member[c as usize] = true;
        }
    }
    member
}

#[test]
fn test_unicode_version() {
    assert_eq!(UNICODE_VERSION, (14, 0, 0));
}

#[test]
fn test_tables_are_sorted_and_disjoint() {
    assert!(is_well_formed(ZERO_WIDTH));
    assert!(is_well_formed(WIDE));
}

#[test]
fn test_table_sizes() {
    assert_eq!(ZERO_WIDTH.len(), 348);
    assert_eq!(WIDE.len(), 121);
}

#[test]
fn test_tables_fit_code_space() {
    assert!(ZERO_WIDTH.last().unwrap().last <= MAX_CODE_POINT);
    assert!(WIDE.last().unwrap().last <= MAX_CODE_POINT);
}

#[test]
fn test_zero_width_edges() {
    let head = ZERO_WIDTH[0];
    let tail = ZERO_WIDTH[ZERO_WIDTH.len() - 1];
    assert_eq!(head, Interval::new(0x0300, 0x036F));
    assert_eq!(tail, Interval::new(0xE0100, 0xE01EF));
    assert!(!bisearch(head.first - 1, ZERO_WIDTH));
    assert!(bisearch(head.first, ZERO_WIDTH));
    assert!(bisearch(tail.last, ZERO_WIDTH));
    assert!(!bisearch(tail.last + 1, ZERO_WIDTH));
    assert_eq!(width_of(head.first - 1), 1);
    assert_eq!(width_of(tail.last + 1), 1);
}

#[test]
fn test_wide_edges() {
    let head = WIDE[0];
    let tail = WIDE[WIDE.len() - 1];
    assert_eq!(head, Interval::new(0x1100, 0x115F));
    assert_eq!(tail, Interval::new(0x30000, 0x3FFFD));
    assert!(!bisearch(head.first - 1, WIDE));
    assert!(bisearch(head.first, WIDE));
    assert!(bisearch(tail.last, WIDE));
    assert!(!bisearch(tail.last + 1, WIDE));
    assert_eq!(width_of(head.first - 1), 1);
    assert_eq!(width_of(head.first), 2);
    assert_eq!(width_of(tail.last), 2);
    assert_eq!(width_of(tail.last + 1), 1);
}

#[test]
fn test_soft_hyphen_excluded() {
    assert!(!bisearch(0x00AD, ZERO_WIDTH));
}

#[test]
fn test_explicit_zero_width_entries() {
    assert!(bisearch(0x1160, ZERO_WIDTH));
    assert!(bisearch(0x11FF, ZERO_WIDTH));
    assert!(bisearch(0x200B, ZERO_WIDTH));
}

#[test]
fn test_every_interval_endpoint() {
    for range in ZERO_WIDTH {
        assert_eq!(width_of(range.first), 0, "{:X?}", range);
        assert_eq!(width_of(range.last), 0, "{:X?}", range);
    }
    for range in WIDE {
        for c in [range.first, range.last] {
            let expected = if bisearch(c, ZERO_WIDTH) { 0 } else { 2 };
            assert_eq!(width_of(c), expected, "U+{:04X}", c);
        }
    }
}

#[test]
fn test_full_code_space_matches_reference() {
    let zero = sweep_membership(ZERO_WIDTH);
    let wide = sweep_membership(WIDE);
    for c in 0..=MAX_CODE_POINT {
        let expected = match c {
            0 => 0,
            0x01..=0x1F | 0x7F..=0x9F => -1,
            _ if zero[c as usize] => 0,
            _ if wide[c as usize] => 2,
            _ => 1,
        };
        assert_eq!(width_of(c), expected, "U+{:04X}", c);
    }
}

#[test]
fn test_agrees_with_unicode_width_on_stable_ranges() {
    let ranges = [
        0x0020..=0x007E, // printable ASCII
        0x0300..=0x036F, // combining diacritical marks
        0x4E00..=0x9FFF, // CJK unified ideographs
        0xAC00..=0xD7A3, // Hangul syllables
    ];
    for range in ranges {
        for c in range {
            let ch = char::from_u32(c).unwrap();
            let ours = usize::try_from(width_of(c)).ok();
            assert_eq!(ours, ch.width(), "U+{:04X}", c);
        }
    }
}
