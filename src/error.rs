use std::fmt;

/// Errors reported by the fallible width and notation APIs
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidthError {
    /// A control character was found while measuring a sequence
    Unprintable {
        /// Position of the offending element in the scanned sequence
        index: usize,
        code_point: u32,
    },
    /// Code point notation could not be parsed
    InvalidNotation { offset: usize, message: String },
    /// Value lies beyond U+10FFFF (`u64::MAX` when it does not even fit in 64 bits)
    OutOfRange(u64),
}

impl fmt::Display for WidthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WidthError::Unprintable { index, code_point } => write!(
                f,
                "Unprintable code point U+{:04X} at index {}",
                code_point, index
            ),
            WidthError::InvalidNotation { offset, message } => {
                write!(f, "Offset {}: {}", offset, message)
            }
            WidthError::OutOfRange(value) => {
                write!(f, "Value 0x{:X} is outside the Unicode code space", value)
            }
        }
    }
}

impl std::error::Error for WidthError {}
