//! Generic numeric helpers.
//!
//! This module provides the [`Numeric`] trait, a closed set of primitive
//! integer and floating-point types, together with reductions and
//! conversions over slices of them:
//!
//! - [`max`] / [`min`]: extreme value of a slice
//! - [`sum`]: total of a slice
//! - [`convert_slice`]: element-wise primitive cast
//! - [`parse`]: string parsing with unsigned-aware error reporting
//!
//! # Examples
//!
//! ```rust
//! use utilkit::numeric::{max, min, sum, convert_slice};
//!
//! assert_eq!(max(&[-2, 3, 15, 28, 4]), Some(28));
//! assert_eq!(min(&[1.1, -2.2, 3.2]), Some(-2.2));
//! assert_eq!(sum(&[4_u8, 2, 3]), 9);
//!
//! let widened: Vec<u64> = convert_slice(&[1_i32, 2, 3]);
//! assert_eq!(widened, vec![1, 2, 3]);
//! ```

mod parse;

pub use parse::{ParseNumericError, parse};

use std::fmt::{Debug, Display};
use std::ops::Add;
use std::str::FromStr;

mod sealed {
    pub trait Sealed {}
}

/// Intermediate value used to cast between two [`Numeric`] types.
///
/// Every integer fits into `i128` or `u128` and every float into `f64`
/// without loss, so casting through this representation gives the same
/// result as a direct `as` cast between the two primitives.
#[doc(hidden)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumericRepr {
    /// A signed integer.
    Signed(i128),
    /// An unsigned integer.
    Unsigned(u128),
    /// A floating-point value.
    Float(f64),
}

/// Primitive numeric types accepted by the helpers of this module.
///
/// The set is closed: `i8`, `i16`, `i32`, `i64`, `isize`, `u8`, `u16`,
/// `u32`, `u64`, `usize`, `f32` and `f64`. The trait is sealed and cannot
/// be implemented outside this crate.
pub trait Numeric:
    sealed::Sealed
    + Copy
    + PartialOrd
    + Add<Output = Self>
    + Default
    + FromStr
    + Debug
    + Display
    + Send
    + Sync
    + 'static
{
    /// `true` for types that can hold negative values.
    const SIGNED: bool;

    /// `true` for `f32` and `f64`.
    const FLOAT: bool;

    #[doc(hidden)]
    fn to_repr(self) -> NumericRepr;

    #[doc(hidden)]
    fn from_repr(repr: NumericRepr) -> Self;

    /// Casts `self` into another numeric type with `as` semantics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use utilkit::numeric::Numeric;
    ///
    /// assert_eq!(300_i32.cast::<u8>(), 44);
    /// assert_eq!((-1.5_f64).cast::<i32>(), -1);
    /// ```
    #[inline]
    fn cast<R: Numeric>(self) -> R {
        R::from_repr(self.to_repr())
    }
}

macro_rules! impl_numeric {
    ($variant:ident, $wide:ty, $signed:expr, $float:expr; $($ty:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl Numeric for $ty {
                const SIGNED: bool = $signed;
                const FLOAT: bool = $float;

                #[inline]
                #[allow(
                    clippy::cast_lossless,
                    clippy::cast_possible_wrap,
                    clippy::cast_sign_loss,
                    clippy::unnecessary_cast
                )]
                fn to_repr(self) -> NumericRepr {
                    NumericRepr::$variant(self as $wide)
                }

                #[inline]
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_possible_wrap,
                    clippy::cast_sign_loss,
                    clippy::cast_precision_loss,
                    clippy::cast_lossless,
                    clippy::unnecessary_cast
                )]
                fn from_repr(repr: NumericRepr) -> Self {
                    match repr {
                        NumericRepr::Signed(value) => value as Self,
                        NumericRepr::Unsigned(value) => value as Self,
                        NumericRepr::Float(value) => value as Self,
                    }
                }
            }
        )+
    };
}

impl_numeric!(Signed, i128, true, false; i8, i16, i32, i64, isize);
impl_numeric!(Unsigned, u128, false, false; u8, u16, u32, u64, usize);
impl_numeric!(Float, f64, true, true; f32, f64);

static_assertions::assert_impl_all!(i8: Numeric);
static_assertions::assert_impl_all!(u64: Numeric);
static_assertions::assert_impl_all!(f32: Numeric);
static_assertions::assert_not_impl_any!(i128: Numeric);
static_assertions::assert_not_impl_any!(u128: Numeric);

/// Returns the largest value of the slice, or `None` when it is empty.
///
/// When several elements compare equal to the maximum, the first one is
/// returned. `NaN` never replaces the running maximum.
///
/// # Examples
///
/// ```rust
/// use utilkit::numeric::max;
///
/// assert_eq!(max(&[2_u32, 3, 15, 28, 4]), Some(28));
/// assert_eq!(max::<i8>(&[]), None);
/// ```
pub fn max<T: Numeric>(values: &[T]) -> Option<T> {
    let (first, rest) = values.split_first()?;
    let mut largest = *first;
    for &value in rest {
        if value > largest {
            largest = value;
        }
    }
    Some(largest)
}

/// Returns the smallest value of the slice, or `None` when it is empty.
///
/// # Examples
///
/// ```rust
/// use utilkit::numeric::min;
///
/// assert_eq!(min(&[4_i8, -2, 3, 15]), Some(-2));
/// ```
pub fn min<T: Numeric>(values: &[T]) -> Option<T> {
    let (first, rest) = values.split_first()?;
    let mut smallest = *first;
    for &value in rest {
        if value < smallest {
            smallest = value;
        }
    }
    Some(smallest)
}

/// Sums all values of the slice. An empty slice sums to zero.
///
/// Overflow behaves like the primitive `+` operator of `T`.
///
/// # Panics
///
/// Integer overflow panics in builds with debug assertions enabled and
/// wraps otherwise, exactly as `+` does on the primitive.
///
/// # Examples
///
/// ```rust
/// use utilkit::numeric::sum;
///
/// assert_eq!(sum(&[1, -2, 3, 15, 28, 4]), 49);
/// assert_eq!(sum::<f64>(&[]), 0.0);
/// ```
pub fn sum<T: Numeric>(values: &[T]) -> T {
    values.iter().fold(T::default(), |total, &value| total + value)
}

/// Casts every element of `values` into `R`.
///
/// The cast follows Rust's `as` rules: integers truncate or wrap, floats
/// saturate towards the integer range and drop their fraction.
///
/// # Examples
///
/// ```rust
/// use utilkit::numeric::convert_slice;
///
/// let converted: Vec<u8> = convert_slice(&[1_i32, 256, -1]);
/// assert_eq!(converted, vec![1, 0, 255]);
/// ```
pub fn convert_slice<T: Numeric, R: Numeric>(values: &[T]) -> Vec<R> {
    values.iter().map(|value| value.cast()).collect()
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    macro_rules! reduction_tests {
        ($($ty:ident),+ $(,)?) => {
            paste::paste! {
                $(
                    #[rstest]
                    fn [<test_reductions_ $ty>]() {
                        let values: Vec<$ty> = [4_u8, 2, 3, 15, 28, 4]
                            .iter()
                            .map(|value| value.cast::<$ty>())
                            .collect();

                        assert_eq!(max(&values), Some((28_u8).cast::<$ty>()));
                        assert_eq!(min(&values), Some((2_u8).cast::<$ty>()));
                        assert_eq!(sum(&values), (56_u8).cast::<$ty>());
                    }
                )+
            }
        };
    }

    reduction_tests!(i8, i16, i32, i64, isize, u8);
    reduction_tests!(u16, u32, u64, usize, f32, f64);

    #[rstest]
    #[case(&[-2, 3, 15, 28, 4], Some(28))]
    #[case(&[-5], Some(-5))]
    #[case(&[], None)]
    fn test_max_signed(#[case] values: &[i32], #[case] expected: Option<i32>) {
        assert_eq!(max(values), expected);
    }

    #[rstest]
    #[case(&[1, -2, 3, 15, 28, 4], Some(-2))]
    #[case(&[], None)]
    fn test_min_signed(#[case] values: &[i32], #[case] expected: Option<i32>) {
        assert_eq!(min(values), expected);
    }

    #[rstest]
    fn test_max_and_min_floats() {
        let values = [-2.2, 3.2, 15.0, 28.1, 4.4];
        assert_eq!(max(&values), Some(28.1));
        assert_eq!(min(&values), Some(-2.2));
    }

    #[rstest]
    fn test_sum_floats() {
        let total: f64 = sum(&[1.1, -2.2, 3.2, 15.0, 28.1, 4.4]);
        assert!((total - 49.6).abs() < 1e-9);
    }

    #[rstest]
    fn test_sum_f32() {
        let total: f32 = sum(&[0.5, 0.25, 0.25]);
        assert!((total - 1.0).abs() < f32::EPSILON);
    }

    #[cfg(debug_assertions)]
    #[rstest]
    #[should_panic(expected = "overflow")]
    fn test_sum_overflow_panics_in_debug() {
        let _ = sum(&[u8::MAX, 1]);
    }

    #[cfg(not(debug_assertions))]
    #[rstest]
    fn test_sum_overflow_wraps_in_release() {
        assert_eq!(sum(&[u8::MAX, 1]), 0);
    }

    #[rstest]
    fn test_sum_empty_is_zero() {
        assert_eq!(sum::<u64>(&[]), 0);
        assert_eq!(sum::<i8>(&[]), 0);
    }

    #[rstest]
    fn test_sum_signed_small_width() {
        assert_eq!(sum(&[4_i8, -2, 3, 15, 28, 4]), 52);
    }

    #[rstest]
    fn test_max_ignores_nan() {
        assert_eq!(max(&[1.0, f64::NAN, 3.0]), Some(3.0));
    }

    #[rstest]
    fn test_signedness_flags() {
        assert!(i32::SIGNED);
        assert!(!u32::SIGNED);
        assert!(f32::SIGNED);
        assert!(f64::FLOAT);
        assert!(!usize::FLOAT);
    }

    #[rstest]
    #[case(300_i32, 44_u8)]
    #[case(-1_i32, 255_u8)]
    #[case(7_i32, 7_u8)]
    fn test_cast_wraps_like_as(#[case] input: i32, #[case] expected: u8) {
        assert_eq!(input.cast::<u8>(), expected);
    }

    #[rstest]
    fn test_cast_float_saturates() {
        assert_eq!(1e10_f64.cast::<i32>(), i32::MAX);
        assert_eq!((-3.9_f32).cast::<i64>(), -3);
        assert_eq!((-3.9_f32).cast::<u16>(), 0);
    }

    #[rstest]
    fn test_cast_large_unsigned_to_float() {
        assert_eq!(u64::MAX.cast::<f64>(), u64::MAX as f64);
    }

    #[rstest]
    fn test_convert_slice_widening() {
        let converted: Vec<i64> = convert_slice(&[1_u8, 2, 255]);
        assert_eq!(converted, vec![1, 2, 255]);
    }

    #[rstest]
    fn test_convert_slice_empty() {
        let converted: Vec<f32> = convert_slice::<i32, f32>(&[]);
        assert!(converted.is_empty());
    }
}
