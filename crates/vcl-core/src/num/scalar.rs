// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! The `Scalar` trait: primitive numeric component types.

use crate::num::wide::Wide;
use core::fmt::{Debug, Display};
use num_traits::{Bounded, One, Zero};

/// A primitive numeric type usable as a tuple component.
///
/// Implemented for every signed and unsigned integer up to 64 bits (plus
/// `isize`/`usize`) and for `f32`/`f64`. Conversions go through [`Wide`]:
/// [`Scalar::to_wide`] lifts a value without loss (except `f64` rounding of
/// values already in the floating domain) and [`Scalar::from_wide`] narrows
/// with the semantics of Rust's `as` operator:
///
/// - integer to integer wraps around, also for results that left `i128`,
/// - float to integer truncates toward zero and saturates at the type's
///   bounds (NaN becomes zero),
/// - anything to float rounds to the nearest representable value.
///
/// # Examples
///
/// ```rust
/// # use vcl_core::num::{Scalar, Wide};
/// assert_eq!(u8::from_wide(Wide::Int(257)), 1);
/// assert_eq!(i16::from_wide(Wide::Float(-3.7)), -3);
/// assert_eq!(300_i32.cast::<u8>(), 44);
/// assert!(!f32::IS_INTEGER);
/// ```
pub trait Scalar:
    Copy + Default + Debug + Display + PartialEq + PartialOrd + Zero + One + Bounded + Send + Sync + 'static
{
    /// `true` for integer types, `false` for floating types.
    const IS_INTEGER: bool;

    /// Lifts the value into the widened domain.
    fn to_wide(self) -> Wide;

    /// Narrows a widened value with native `as` semantics.
    fn from_wide(value: Wide) -> Self;

    /// Converts to another scalar type with native `as` semantics.
    #[inline]
    fn cast<U: Scalar>(self) -> U {
        U::from_wide(self.to_wide())
    }
}

macro_rules! scalar_impl_int {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const IS_INTEGER: bool = true;

                #[inline(always)]
                fn to_wide(self) -> Wide {
                    Wide::Int(self as i128)
                }

                #[inline(always)]
                fn from_wide(value: Wide) -> Self {
                    match value {
                        Wide::Int(v) | Wide::Overflowed { wrapped: v, .. } => v as $t,
                        Wide::Float(v) => v as $t,
                    }
                }
            }
        )*
    };
}

macro_rules! scalar_impl_float {
    ($($t:ty),*) => {
        $(
            impl Scalar for $t {
                const IS_INTEGER: bool = false;

                #[inline(always)]
                fn to_wide(self) -> Wide {
                    Wide::Float(self as f64)
                }

                #[inline(always)]
                fn from_wide(value: Wide) -> Self {
                    match value {
                        Wide::Int(v) => v as $t,
                        Wide::Float(v) | Wide::Overflowed { approx: v, .. } => v as $t,
                    }
                }
            }
        )*
    };
}

scalar_impl_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
scalar_impl_float!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    fn round_trip<T: Scalar>(value: T) -> T {
        T::from_wide(value.to_wide())
    }

    #[test]
    fn test_round_trip_is_identity() {
        assert_eq!(round_trip(i64::MIN), i64::MIN);
        assert_eq!(round_trip(u64::MAX), u64::MAX);
        assert_eq!(round_trip(-0.1_f32), -0.1_f32);
        assert_eq!(round_trip(f64::MAX), f64::MAX);
    }

    #[test]
    fn test_integer_narrowing_wraps() {
        assert_eq!(u8::from_wide(Wide::Int(256)), 0);
        assert_eq!(u8::from_wide(Wide::Int(-1)), 255);
        assert_eq!(i16::from_wide(Wide::Int(32768)), -32768);
    }

    #[test]
    fn test_float_to_integer_truncates_and_saturates() {
        assert_eq!(i32::from_wide(Wide::Float(2.9)), 2);
        assert_eq!(i32::from_wide(Wide::Float(-2.9)), -2);
        assert_eq!(u8::from_wide(Wide::Float(-1.0)), 0);
        assert_eq!(u8::from_wide(Wide::Float(1e9)), 255);
        assert_eq!(i32::from_wide(Wide::Float(f64::NAN)), 0);
    }

    #[test]
    fn test_overflowed_values_narrow_natively() {
        let max = u64::MAX.to_wide();
        assert_eq!(u64::from_wide(max * max), 1);
        assert_eq!(u8::from_wide(Wide::Int(i128::MAX) * Wide::Int(-2)), 2);
        assert!(f64::from_wide(max * max) > 3.4e38);
    }

    #[test]
    fn test_integer_flag() {
        assert!(u16::IS_INTEGER);
        assert!(isize::IS_INTEGER);
        assert!(!f64::IS_INTEGER);
    }

    #[test]
    fn test_cast() {
        assert_eq!(2.5_f64.cast::<i8>(), 2);
        assert_eq!((-1_i32).cast::<u16>(), u16::MAX);
        assert_eq!(7_u8.cast::<f32>(), 7.0);
    }
}
