//! Code point notation: `U+4E2D`, `0x4E2D` or `20013`, separated by spaces or commas

use std::num::{IntErrorKind, ParseIntError};

use log::debug;
use winnow::ascii::{digit1, hex_digit1, Caseless};
use winnow::combinator::{alt, preceded};
use winnow::token::{take_till, take_while};
use winnow::ModalResult;
use winnow::Parser;

use crate::error::WidthError;

/// Highest valid Unicode scalar position
pub const MAX_CODE_POINT: u32 = 0x10FFFF;

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == ','
}

// ===== Winnow parsers =====

/// Skip separators between tokens
fn w_separators<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(0.., is_separator).parse_next(input)
}

/// Take one token up to the next separator
fn w_token<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_till(1.., is_separator).parse_next(input)
}

/// Parse a single code point in any supported notation
///
/// Range is not checked here; digits too long for a `u64` yield `u64::MAX`.
fn w_code_point(input: &mut &str) -> ModalResult<u64> {
    alt((
        preceded(Caseless("u+"), hex_digit1).try_map(|hex: &str| digits_value(hex, 16)),
        preceded(Caseless("0x"), hex_digit1).try_map(|hex: &str| digits_value(hex, 16)),
        digit1.try_map(|dec: &str| digits_value(dec, 10)),
    ))
    .parse_next(input)
}

fn digits_value(digits: &str, radix: u32) -> Result<u64, ParseIntError> {
    match u64::from_str_radix(digits, radix) {
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Ok(u64::MAX),
        other => other,
    }
}

// ===== Public API =====

/// Parse a list of code points
///
/// # Arguments
/// * `input` - Tokens such as `U+0041`, `u+4e2d`, `0x301` or `9`, separated by
///   whitespace and/or commas
///
/// # Returns
/// * `Ok(Vec<u32>)` - Code points in input order (empty for blank input)
/// * `Err(WidthError)` - Malformed token or value above U+10FFFF
pub fn parse_code_points(input: &str) -> Result<Vec<u32>, WidthError> {
    let mut rest = input;
    let mut code_points = Vec::new();

    loop {
        w_separators(&mut rest).map_err(|_| invalid(input.len() - rest.len(), rest))?;
        if rest.is_empty() {
            break;
        }

        let offset = input.len() - rest.len();
        let token = w_token(&mut rest).map_err(|_| invalid(offset, rest))?;
        let value = w_code_point.parse(token).map_err(|_| invalid(offset, token))?;
        match u32::try_from(value) {
            Ok(code_point) if code_point <= MAX_CODE_POINT => code_points.push(code_point),
            _ => {
                debug!("parse_code_points: 0x{:X} at offset {} out of range", value, offset);
                return Err(WidthError::OutOfRange(value));
            }
        }
    }

    Ok(code_points)
}

fn invalid(offset: usize, token: &str) -> WidthError {
    debug!("parse_code_points: bad token '{}' at offset {}", token, offset);
    WidthError::InvalidNotation {
        offset,
        message: format!("Expected U+XXXX, 0xXXXX or a decimal value, found '{}'", token),
    }
}

/// Render a code point as `U+XXXX` (at least four hex digits)
pub fn format_code_point(c: u32) -> String {
    format!("U+{:04X}", c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_u_plus() {
        assert_eq!(parse_code_points("U+0041 U+4E2D").unwrap(), vec![0x41, 0x4E2D]);
    }

    #[test]
    fn test_parse_mixed_notations() {
        let parsed = parse_code_points("u+4e2d, 0x301,9\n65").unwrap();
        assert_eq!(parsed, vec![0x4E2D, 0x301, 9, 65]);
    }

    #[test]
    fn test_parse_blank_input() {
        assert!(parse_code_points("").unwrap().is_empty());
        assert!(parse_code_points(" , \t").unwrap().is_empty());
    }

    #[test]
    fn test_parse_invalid_token() {
        let err = parse_code_points("U+0041 U+XYZ").unwrap_err();
        assert!(matches!(err, WidthError::InvalidNotation { offset: 7, .. }));
        assert!(err.to_string().contains("U+XYZ"));
    }

    #[test]
    fn test_parse_trailing_garbage() {
        assert!(matches!(
            parse_code_points("0x41g"),
            Err(WidthError::InvalidNotation { offset: 0, .. })
        ));
        assert!(matches!(
            parse_code_points("12ab"),
            Err(WidthError::InvalidNotation { offset: 0, .. })
        ));
    }

    #[test]
    fn test_parse_out_of_range() {
        assert_eq!(
            parse_code_points("U+110000"),
            Err(WidthError::OutOfRange(0x110000))
        );
        assert_eq!(parse_code_points("U+10FFFF").unwrap(), vec![0x10FFFF]);
    }

    #[test]
    fn test_parse_out_of_range_beyond_u32() {
        assert_eq!(
            parse_code_points("U+100000000"),
            Err(WidthError::OutOfRange(0x1_0000_0000))
        );
        assert_eq!(
            parse_code_points("0x1FFFFFFFF"),
            Err(WidthError::OutOfRange(0x1_FFFF_FFFF))
        );
        assert_eq!(
            parse_code_points("4294967296"),
            Err(WidthError::OutOfRange(4_294_967_296))
        );
    }

    #[test]
    fn test_parse_out_of_range_beyond_u64() {
        assert_eq!(
            parse_code_points("U+123456789ABCDEF012"),
            Err(WidthError::OutOfRange(u64::MAX))
        );
        assert_eq!(
            parse_code_points("U+0041 99999999999999999999999"),
            Err(WidthError::OutOfRange(u64::MAX))
        );
    }

    #[test]
    fn test_format_code_point() {
        assert_eq!(format_code_point(0x41), "U+0041");
        assert_eq!(format_code_point(0x1F600), "U+1F600");
    }
}
