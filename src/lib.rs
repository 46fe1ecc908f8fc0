//! cellwidth - Terminal cell width of Unicode code points
//!
//! Answers how many monospace cells a code point occupies: `0` for NUL, combining and
//! format characters, `2` for East Asian Wide/Fullwidth, `1` for everything else, and
//! `-1` for C0/C1 control characters, which have no width. Data comes from a frozen
//! Unicode snapshot, see [`UNICODE_VERSION`].
//!
//! # Single Code Point
//! ```
//! use cellwidth::width_of;
//!
//! assert_eq!(width_of('A' as u32), 1);
//! assert_eq!(width_of(0x4E2D), 2); // 中
//! assert_eq!(width_of(0x0301), 0); // combining acute accent
//! assert_eq!(width_of(0x0009), -1); // TAB
//! ```
//!
//! # Sequences
//! ```
//! use cellwidth::{sequence_width, width_of_sequence, WidthError};
//!
//! assert_eq!(width_of_sequence(&[0x41, 0x4E2D], 2), 3);
//! assert_eq!(width_of_sequence(&[0x41, 0x09, 0x42], 3), -1);
//!
//! // The Result form reports where the scan stopped
//! let err = sequence_width(&[0x41, 0x09, 0x42], 3).unwrap_err();
//! assert_eq!(err, WidthError::Unprintable { index: 1, code_point: 0x09 });
//! ```
//!
//! # Strings
//! ```
//! use cellwidth::CellWidthExt;
//!
//! assert_eq!("A中".cell_width(), Some(3));
//! assert_eq!('\t'.cell_width(), None);
//! ```
//!
//! # Code Point Notation
//! ```
//! use cellwidth::{parse_code_points, width_of_sequence};
//!
//! let cps = parse_code_points("U+0041, U+4E2D").unwrap();
//! assert_eq!(width_of_sequence(&cps, cps.len()), 3);
//! ```

mod error;
mod interval;
mod notation;
mod sequence;
mod tables;
mod text;
mod width;

pub use error::WidthError;
pub use interval::{bisearch, is_well_formed, Interval};
pub use notation::{format_code_point, parse_code_points, MAX_CODE_POINT};
pub use sequence::{sequence_width, str_width, width_of_sequence};
pub use tables::{UNICODE_VERSION, WIDE, ZERO_WIDTH};
pub use text::CellWidthExt;
pub use width::{char_width, classify, width_of, CellWidth};
