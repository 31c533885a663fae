//! Leading-prefix integer parsing.
//!
//! Strings are read the forgiving way: leading whitespace and byte order marks
//! are skipped, an optional sign is accepted, and then the longest run of
//! digits is taken.
//! Anything after the digits is ignored, so `"12abc"` reads as `12`. A `0x`
//! or `0X` prefix switches to hexadecimal.

use crate::types::ParseError;
use log::debug;
use regex::Regex;
use std::num::IntErrorKind;
use std::sync::OnceLock;

/// Compiled regex matching an optional sign followed by a hex or decimal digit run
fn prefix_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[\s\u{FEFF}]*(?P<sign>[+-]?)(?:(?P<hex>0[xX])(?P<hex_digits>[0-9a-fA-F]*)|(?P<dec_digits>[0-9]*))")
            .expect("prefix regex is valid")
    })
}

/// Parse the leading integer of `input`.
///
/// # Returns
/// * `Ok(value)` - the signed value of the numeric prefix
/// * `Err(ParseError::Empty)` - the input is empty or only whitespace
/// * `Err(ParseError::NoDigits)` - there is no numeric prefix (`"abc"`, `"-"`, `"0x"`)
/// * `Err(ParseError::Overflow)` - the prefix does not fit in an `i64`
///
/// # Example
/// ```
/// use array_utils::parse_leading_int;
///
/// assert_eq!(parse_leading_int("  -42px"), Ok(-42));
/// assert_eq!(parse_leading_int("0x1A"), Ok(26));
/// assert!(parse_leading_int("abc").is_err());
/// ```
pub fn parse_leading_int(input: &str) -> Result<i64, ParseError> {
    if input
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
        .is_empty()
    {
        return Err(ParseError::Empty);
    }

    let no_digits = || ParseError::NoDigits {
        input: input.to_string(),
    };

    let caps = prefix_regex().captures(input).ok_or_else(no_digits)?;
    let sign = caps.name("sign").map_or("", |m| m.as_str());

    let (digits, radix) = if caps.name("hex").is_some() {
        (caps.name("hex_digits").map_or("", |m| m.as_str()), 16)
    } else {
        (caps.name("dec_digits").map_or("", |m| m.as_str()), 10)
    };

    if digits.is_empty() {
        return Err(no_digits());
    }

    // from_str_radix takes the sign itself so that i64::MIN stays representable
    i64::from_str_radix(&format!("{sign}{digits}"), radix).map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParseError::Overflow {
            input: input.to_string(),
            negative: sign == "-",
        },
        _ => no_digits(),
    })
}

/// Parse the leading integer of `input`, substituting 0 when there is no
/// numeric prefix.
///
/// A prefix too large for an `i64` still counts as a number and saturates to
/// `i64::MAX` or `i64::MIN`.
pub fn parse_int_or_zero(input: &str) -> i64 {
    match parse_leading_int(input) {
        Ok(value) => value,
        Err(ParseError::Overflow { negative, .. }) => {
            debug!("Saturating out-of-range integer {:?}", input);
            if negative {
                i64::MIN
            } else {
                i64::MAX
            }
        }
        Err(err) => {
            debug!("Defaulting to 0: {}", err);
            0
        }
    }
}
