//! # array-utils
//!
//! Small, pure transformations over number and string slices.
//!
//! ## Modules
//!
//! - [`numbers`]: bookends, tripling, sum equations and running-total injection
//! - [`strings`]: default-zero integer parsing, question filtering, word and color checks
//! - [`parse`]: leading-prefix integer parsing
//! - [`types`]: shared types ([`PrimaryColor`], [`ParseError`])
//! - [`logging`]: Logging utilities
//!
//! None of the functions mutate their input; each returns a fresh value.
//!
//! ```
//! use array_utils::{bookend, make_math, shout_filter_questions};
//!
//! assert_eq!(bookend(&[1, 2, 3, 4]), vec![1, 4]);
//! assert_eq!(make_math(&[1, 2, 3]), "6=1+2+3");
//! assert_eq!(shout_filter_questions(&["hi?", "go!", "ok"]), vec!["GO!", "ok"]);
//! ```

pub mod numbers;
pub mod parse;
pub mod strings;
pub mod types;

/// Logging utilities
pub mod logging {
    use log::LevelFilter;
    use std::env;

    /// Initialize logger based on debug flag or environment variable.
    ///
    /// Calling this more than once is harmless; only the first call installs
    /// a logger.
    pub fn init_logger(debug: bool) {
        let log_level = if debug {
            LevelFilter::Debug
        } else if env::var("RUST_LOG").is_ok() {
            // Allow RUST_LOG to override if set
            let _ = env_logger::try_init();
            return;
        } else {
            LevelFilter::Warn
        };

        let _ = env_logger::Builder::new()
            .filter_level(log_level)
            .try_init();
    }

}

// Re-export commonly used items
pub use numbers::{bookend, inject_positive, make_math, summarize, triple, MathSummary, Number};
pub use parse::{parse_int_or_zero, parse_leading_int};
pub use strings::{
    all_primary_colors, count_short_words, parse_ints_default_zero, shout_filter_questions,
    strip_dollars_and_parse,
};
pub use types::{ParseError, PrimaryColor};
