//! Width of code point runs

use log::trace;

use crate::error::WidthError;
use crate::width::classify;

/// Sum the widths of a run of code points
///
/// The scan stops at the first `0` element, after `max_count` elements, or at the end of
/// the slice, whichever comes first. The terminating `0` is not counted.
///
/// # Returns
/// * `Ok(usize)` - Total number of cells
/// * `Err(WidthError::Unprintable)` - First control character met during the scan
pub fn sequence_width(code_points: &[u32], max_count: usize) -> Result<usize, WidthError> {
    let mut total = 0;

    for (index, &c) in code_points
        .iter()
        .take(max_count)
        .take_while(|&&c| c != 0)
        .enumerate()
    {
        match classify(c).columns() {
            Some(cols) => total += cols,
            None => {
                trace!(
                    "sequence_width: U+{:04X} at index {} is unprintable, discarding {} cells",
                    c,
                    index,
                    total
                );
                return Err(WidthError::Unprintable {
                    index,
                    code_point: c,
                });
            }
        }
    }

    Ok(total)
}

/// Sentinel form of [`sequence_width`]: `-1` if any scanned element is unprintable
pub fn width_of_sequence(code_points: &[u32], max_count: usize) -> i32 {
    match sequence_width(code_points, max_count) {
        Ok(total) => clamp_total(total),
        Err(_) => -1,
    }
}

/// Totals past `i32::MAX` saturate instead of wrapping into the `-1` sentinel
fn clamp_total(total: usize) -> i32 {
    i32::try_from(total).unwrap_or(i32::MAX)
}

/// Width of a string, or `None` if it contains a control character
///
/// An embedded U+0000 ends the measurement.
pub fn str_width(s: &str) -> Option<usize> {
    let mut total = 0;
    for c in s.chars().take_while(|&c| c != '\0') {
        total += classify(c as u32).columns()?;
    }
    Some(total)
}
