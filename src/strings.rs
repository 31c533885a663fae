//! Transformations over string slices.
//!
//! Every function takes `&[S]` where `S: AsRef<str>`, so both `&[&str]` and
//! `&[String]` are accepted.

use crate::parse::parse_int_or_zero;
use crate::types::PrimaryColor;
use log::debug;

/// Words shorter than this many UTF-16 code units count as short.
pub const SHORT_WORD_LIMIT: usize = 4;

const DOLLAR: char = '$';
const QUESTION: char = '?';
const EXCLAMATION: char = '!';

/// Parse every string as an integer, using 0 where there is no numeric prefix.
///
/// # Example
/// ```
/// use array_utils::parse_ints_default_zero;
///
/// assert_eq!(parse_ints_default_zero(&["3", "x", "12abc"]), vec![3, 0, 12]);
/// ```
pub fn parse_ints_default_zero<S: AsRef<str>>(numbers: &[S]) -> Vec<i64> {
    numbers
        .iter()
        .map(|number| parse_int_or_zero(number.as_ref()))
        .collect()
}

/// Drop one leading `$` from each amount, then parse it like
/// [`parse_ints_default_zero`].
///
/// # Example
/// ```
/// use array_utils::strip_dollars_and_parse;
///
/// assert_eq!(strip_dollars_and_parse(&["$5", "10", "$abc"]), vec![5, 10, 0]);
/// ```
pub fn strip_dollars_and_parse<S: AsRef<str>>(amounts: &[S]) -> Vec<i64> {
    amounts
        .iter()
        .map(|amount| {
            let amount = amount.as_ref();
            parse_int_or_zero(amount.strip_prefix(DOLLAR).unwrap_or(amount))
        })
        .collect()
}

/// Remove questions and shout exclamations.
///
/// Messages ending in `?` are dropped. Messages ending in `!` are
/// uppercased. Everything else is kept as is, in the original order.
pub fn shout_filter_questions<S: AsRef<str>>(messages: &[S]) -> Vec<String> {
    messages
        .iter()
        .map(|message| message.as_ref())
        .filter(|message| !message.ends_with(QUESTION))
        .map(|message| {
            if message.ends_with(EXCLAMATION) {
                message.to_uppercase()
            } else {
                message.to_string()
            }
        })
        .collect()
}

/// Count the words shorter than [`SHORT_WORD_LIMIT`].
///
/// Length is measured in UTF-16 code units, so characters outside the Basic
/// Multilingual Plane (most emoji) count as two.
pub fn count_short_words<S: AsRef<str>>(words: &[S]) -> usize {
    words
        .iter()
        .filter(|word| word.as_ref().encode_utf16().count() < SHORT_WORD_LIMIT)
        .count()
}

/// True when every color is exactly `"red"`, `"blue"` or `"green"`.
///
/// An empty slice is vacuously all primary.
pub fn all_primary_colors<S: AsRef<str>>(colors: &[S]) -> bool {
    colors.iter().all(|color| match color.as_ref().parse::<PrimaryColor>() {
        Ok(_) => true,
        Err(err) => {
            debug!("{}", err);
            false
        }
    })
}
