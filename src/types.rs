//! Shared types for the array utilities.
//!
//! - [`PrimaryColor`]: the closed set of color names accepted by
//!   [`all_primary_colors`](crate::strings::all_primary_colors)
//! - [`ParseError`]: why a string could not be turned into a value

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// Errors
// =============================================================================

/// Failure reasons for the strict parsers.
///
/// The default-zero helpers swallow these; they exist for callers that want
/// to know why a value was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty input")]
    Empty,

    #[error("no numeric prefix in {input:?}")]
    NoDigits { input: String },

    #[error("numeric prefix of {input:?} does not fit in i64")]
    Overflow { input: String, negative: bool },

    #[error("{input:?} is not a primary color")]
    UnknownColor { input: String },
}

// =============================================================================
// Colors
// =============================================================================

/// One of the three accepted color names. Matching is exact and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimaryColor {
    Red,
    Blue,
    Green,
}

impl PrimaryColor {
    pub const ALL: [PrimaryColor; 3] = [PrimaryColor::Red, PrimaryColor::Blue, PrimaryColor::Green];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrimaryColor::Red => "red",
            PrimaryColor::Blue => "blue",
            PrimaryColor::Green => "green",
        }
    }
}

impl fmt::Display for PrimaryColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrimaryColor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PrimaryColor::ALL
            .into_iter()
            .find(|color| color.as_str() == s)
            .ok_or_else(|| ParseError::UnknownColor {
                input: s.to_string(),
            })
    }
}
