//! Inclusive code point ranges and membership search over sorted tables

/// Closed range of code points `[first, last]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub first: u32,
    pub last: u32,
}

impl Interval {
    pub const fn new(first: u32, last: u32) -> Self {
        Self { first, last }
    }

    /// Check if the code point lies inside the range (both ends inclusive)
    pub fn contains(&self, c: u32) -> bool {
        self.first <= c && c <= self.last
    }
}

/// Binary search for `c` in a table of sorted, non-overlapping intervals
///
/// Values below the first range or above the last one are rejected before searching.
pub fn bisearch(c: u32, table: &[Interval]) -> bool {
    let (Some(head), Some(tail)) = (table.first(), table.last()) else {
        return false;
    };
    if c < head.first || c > tail.last {
        return false;
    }

    // Half-open window [min, max) so the upper bound never underflows
    let mut min = 0;
    let mut max = table.len();
    while min < max {
        let mid = (min + max) / 2;
        let range = &table[mid];
        if c > range.last {
            min = mid + 1;
        } else if c < range.first {
            max = mid;
        } else {
            return true;
        }
    }

    false
}

/// Check that every interval is ordered and that neighbours are strictly increasing
/// without overlap
pub fn is_well_formed(table: &[Interval]) -> bool {
    table.iter().all(|r| r.first <= r.last) && table.windows(2).all(|w| w[0].last < w[1].first)
}
