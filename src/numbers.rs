//! Transformations over number slices.
//!
//! - `bookend` - Keep only the first and last element
//! - `triple` - Multiply every element by 3
//! - `summarize` / `make_math` - Render a sum as `"<total>=<a>+<b>+..."`
//! - `inject_positive` - Insert a running total after the first negative value
//!
//! All functions are generic over [`Number`], so they work the same for
//! integer and floating-point slices.

use log::trace;
use serde::Serialize;
use std::fmt;

/// Numeric element type accepted by this module.
///
/// Integer arithmetic saturates at the type's bounds instead of overflowing,
/// so none of the functions here can panic on large inputs. Floats use plain
/// IEEE arithmetic.
pub trait Number: Copy + PartialOrd + Default + fmt::Display {
    /// The tripling factor.
    fn three() -> Self;

    /// `self + other`, clamped to the representable range.
    fn plus(self, other: Self) -> Self;

    /// `self * other`, clamped to the representable range.
    fn times(self, other: Self) -> Self;

    /// The value as it should be rendered. Maps `-0.0` to `0.0`.
    fn canonical(self) -> Self {
        self
    }
}

macro_rules! impl_number_for_int {
    ($($t:ty),*) => {
        $(
            impl Number for $t {
                fn three() -> Self {
                    3
                }

                fn plus(self, other: Self) -> Self {
                    self.saturating_add(other)
                }

                fn times(self, other: Self) -> Self {
                    self.saturating_mul(other)
                }
            }
        )*
    };
}

macro_rules! impl_number_for_float {
    ($($t:ty),*) => {
        $(
            impl Number for $t {
                fn three() -> Self {
                    3.0
                }

                fn plus(self, other: Self) -> Self {
                    self + other
                }

                fn times(self, other: Self) -> Self {
                    self * other
                }

                fn canonical(self) -> Self {
                    if self == 0.0 {
                        0.0
                    } else {
                        self
                    }
                }
            }
        )*
    };
}

impl_number_for_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_number_for_float!(f32, f64);

fn sum<T: Number>(values: &[T]) -> T {
    values.iter().fold(T::default(), |total, &value| total.plus(value))
}

/// Return `[first, last]`, `[only, only]` for a single element, or `[]`.
pub fn bookend<T: Number>(numbers: &[T]) -> Vec<T> {
    match (numbers.first(), numbers.last()) {
        (Some(&first), Some(&last)) => vec![first, last],
        _ => Vec::new(),
    }
}

/// Return a new vector with every element multiplied by 3.
///
/// Integers saturate: `triple(&[i32::MAX])` is `[i32::MAX]`.
pub fn triple<T: Number>(numbers: &[T]) -> Vec<T> {
    let three = T::three();
    numbers.iter().map(|&number| number.times(three)).collect()
}

/// A sum together with the addends that produced it.
///
/// Displays as `"<sum>=<a0>+<a1>+...+<an>"`. With no addends it displays
/// as `"0=0"`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MathSummary<T> {
    pub sum: T,
    pub addends: Vec<T>,
}

impl<T: Number> fmt::Display for MathSummary<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.addends.is_empty() {
            return f.write_str("0=0");
        }

        write!(f, "{}=", self.sum.canonical())?;
        for (i, addend) in self.addends.iter().enumerate() {
            if i > 0 {
                f.write_str("+")?;
            }
            write!(f, "{}", addend.canonical())?;
        }
        Ok(())
    }
}

/// Sum `addends`, keeping the addends in their original order.
pub fn summarize<T: Number>(addends: &[T]) -> MathSummary<T> {
    MathSummary {
        sum: sum(addends),
        addends: addends.to_vec(),
    }
}

/// Render the sum of `addends` as an equation, e.g. `[1, 2, 3]` → `"6=1+2+3"`.
///
/// Values use their `Display` form, with `-0.0` shown as `0`. Very large or
/// very small floats are written out in full (`1e21` becomes
/// `"1000000000000000000000"`), never in exponent notation. Integer sums
/// saturate at the type's bounds.
///
/// # Example
/// ```
/// use array_utils::make_math;
///
/// assert_eq!(make_math::<i32>(&[]), "0=0");
/// assert_eq!(make_math(&[1, 2, 3]), "6=1+2+3");
/// ```
pub fn make_math<T: Number>(addends: &[T]) -> String {
    summarize(addends).to_string()
}

/// Insert a running total after the first strictly negative value.
///
/// If `values[i]` is the first negative element, the sum of `values[..i]`
/// is inserted at position `i + 1`. Without any negative element the sum of
/// all values is appended instead. The result is always one element longer
/// than the input.
///
/// # Example
/// ```
/// use array_utils::inject_positive;
///
/// assert_eq!(inject_positive(&[1, 9, -5, 7]), vec![1, 9, -5, 10, 7]);
/// assert_eq!(inject_positive(&[1, 9, 7]), vec![1, 9, 7, 17]);
/// ```
pub fn inject_positive<T: Number>(values: &[T]) -> Vec<T> {
    let zero = T::default();
    let mut injected = Vec::with_capacity(values.len() + 1);

    match values.iter().position(|&value| value < zero) {
        Some(first_negative) => {
            trace!("First negative value at index {}", first_negative);
            let (head, tail) = values.split_at(first_negative + 1);
            injected.extend_from_slice(head);
            injected.push(sum(&values[..first_negative]));
            injected.extend_from_slice(tail);
        }
        None => {
            trace!("No negative values among {} elements", values.len());
            injected.extend_from_slice(values);
            injected.push(sum(values));
        }
    }

    injected
}
