//! Cell width as a method on text types

use crate::sequence::str_width;
use crate::width::char_width;

/// Terminal cell width of a character or string.
///
/// `None` means the value contains a control character and has no defined width.
pub trait CellWidthExt {
    fn cell_width(&self) -> Option<usize>;
}

impl CellWidthExt for char {
    fn cell_width(&self) -> Option<usize> {
        char_width(*self)
    }
}

impl CellWidthExt for str {
    fn cell_width(&self) -> Option<usize> {
        str_width(self)
    }
}
