//! Property tests for the array utilities
//!
//! These check structural laws that hold for every input:
//! - Shape: output lengths follow from input lengths
//! - Totality: default-zero parsing accepts any string
//! - Consistency: `make_math` agrees with `summarize`

use array_utils::logging::init_logger;
use array_utils::*;
use proptest::prelude::*;

// Keep sums well inside i64 so additions cannot overflow
fn small_ints() -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-1_000_000i64..1_000_000i64, 0..50)
}

proptest! {
    #[test]
    fn test_bookend_shape(values in small_ints()) {
        let ends = bookend(&values);
        match values.len() {
            0 => prop_assert!(ends.is_empty()),
            _ => {
                prop_assert_eq!(ends.len(), 2);
                prop_assert_eq!(ends[0], values[0]);
                prop_assert_eq!(ends[1], values[values.len() - 1]);
            }
        }
    }

    #[test]
    fn test_triple_preserves_length_and_scales(values in small_ints()) {
        let tripled = triple(&values);
        prop_assert_eq!(tripled.len(), values.len());
        for (t, v) in tripled.iter().zip(&values) {
            prop_assert_eq!(*t, v * 3);
        }
    }

    #[test]
    fn test_inject_positive_grows_by_one(values in small_ints()) {
        let injected = inject_positive(&values);
        prop_assert_eq!(injected.len(), values.len() + 1);

        match values.iter().position(|&v| v < 0) {
            Some(i) => {
                prop_assert_eq!(&injected[..=i], &values[..=i]);
                prop_assert_eq!(injected[i + 1], values[..i].iter().sum::<i64>());
                prop_assert_eq!(&injected[i + 2..], &values[i + 1..]);
            }
            None => {
                prop_assert_eq!(&injected[..values.len()], &values[..]);
                prop_assert_eq!(injected[values.len()], values.iter().sum::<i64>());
            }
        }
    }

    #[test]
    fn test_make_math_matches_summarize(values in small_ints()) {
        let rendered = make_math(&values);
        prop_assert_eq!(&rendered, &summarize(&values).to_string());
        let expected_prefix = format!("{}=", values.iter().sum::<i64>());
        prop_assert!(rendered.starts_with(&expected_prefix));
    }

    #[test]
    fn test_parse_ints_default_zero_is_total(inputs in prop::collection::vec(".*", 0..20)) {
        init_logger(false);
        let parsed = parse_ints_default_zero(&inputs);
        prop_assert_eq!(parsed.len(), inputs.len());
    }

    #[test]
    fn test_parse_leading_int_reads_integer_text(value in any::<i64>(), suffix in "[a-wyz .]{0,5}") {
        let text = format!("{value}{suffix}");
        prop_assert_eq!(parse_leading_int(&text), Ok(value));
    }

    #[test]
    fn test_shout_filter_questions_never_keeps_questions(
        messages in prop::collection::vec("[a-z]{0,4}[?!.]?", 0..20)
    ) {
        let kept = shout_filter_questions(&messages);
        prop_assert!(kept.len() <= messages.len());
        prop_assert!(kept.iter().all(|m| !m.ends_with('?')));
    }

    #[test]
    fn test_count_short_words_bounded(words in prop::collection::vec("[a-z]{0,8}", 0..20)) {
        let expected = words.iter().filter(|w| w.len() < 4).count();
        prop_assert_eq!(count_short_words(&words), expected);
    }
}
