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

//! Widened intermediate values.
//!
//! Every conversion and every elementwise arithmetic step in the library runs
//! on a [`Wide`] value: integers are carried as `i128`, floating values as
//! `f64`. Mixing the two promotes to `f64`. The widened value is narrowed back
//! to a concrete scalar only once, when it is stored.

use core::cmp::Ordering;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

/// A scalar value lifted into the widest domain of its category.
///
/// Integer arithmetic is exact in `i128`. A result outside that range, such as
/// `u64::MAX * u64::MAX`, becomes [`Wide::Overflowed`], which keeps both the
/// bits wrapped modulo 2^128 and an `f64` approximation carrying the sign.
/// Any operation that involves a floating value is carried out in `f64`.
///
/// # Examples
///
/// ```rust
/// # use vcl_core::num::Wide;
/// let a = Wide::Int(7);
/// let b = Wide::Float(0.5);
///
/// assert_eq!(a + a, Wide::Int(14));
/// assert_eq!(a * b, Wide::Float(3.5));
/// assert_eq!(a.checked_div(Wide::Int(2)), Some(Wide::Int(3)));
/// assert_eq!(a.checked_div(Wide::Int(0)), None);
///
/// let huge = Wide::Int(u64::MAX as i128) * Wide::Int(u64::MAX as i128);
/// assert!(huge > Wide::Int(i128::MAX));
/// ```
#[derive(Clone, Copy, Debug)]
pub enum Wide {
    /// An integer value.
    Int(i128),
    /// A floating value.
    Float(f64),
    /// An integer result that left the `i128` range.
    Overflowed {
        /// The exact result modulo 2^128.
        wrapped: i128,
        /// The result rounded to `f64`.
        approx: f64,
    },
}

impl Wide {
    /// The integer zero.
    pub const ZERO: Wide = Wide::Int(0);

    /// The integer one.
    pub const ONE: Wide = Wide::Int(1);

    /// Returns the value as `f64`.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Wide::Int(v) => v as f64,
            Wide::Float(v) => v,
            Wide::Overflowed { approx, .. } => approx,
        }
    }

    /// Returns `true` if the value is integer or floating zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        match self {
            Wide::Int(v) => v == 0,
            Wide::Float(v) => v == 0.0,
            Wide::Overflowed { .. } => false,
        }
    }

    /// Returns `true` if the value is a floating NaN.
    #[inline]
    pub fn is_nan(self) -> bool {
        matches!(self, Wide::Float(v) if v.is_nan())
    }

    /// Returns `true` if the value is carried in the floating domain.
    #[inline]
    pub fn is_float(self) -> bool {
        matches!(self, Wide::Float(_))
    }

    /// Divides `self` by `rhs`, returning `None` if `rhs` is zero.
    ///
    /// Integer division truncates toward zero. An overflowed operand divides
    /// in the floating domain.
    #[inline]
    pub fn checked_div(self, rhs: Wide) -> Option<Wide> {
        if rhs.is_zero() {
            return None;
        }
        match (self, rhs) {
            (Wide::Int(a), Wide::Int(b)) => Some(match a.checked_div(b) {
                Some(v) => Wide::Int(v),
                None => Wide::Overflowed {
                    wrapped: a.wrapping_div(b),
                    approx: a as f64 / b as f64,
                },
            }),
            (a, b) => Some(Wide::Float(a.as_f64() / b.as_f64())),
        }
    }

    /// Returns half of the value; integers truncate toward zero.
    #[inline]
    pub fn halved(self) -> Wide {
        match self {
            Wide::Int(v) => Wide::Int(v / 2),
            Wide::Float(v) => Wide::Float(v / 2.0),
            Wide::Overflowed { approx, .. } => Wide::Float(approx / 2.0),
        }
    }

    /// Drops the fractional part of a floating value.
    #[inline]
    pub fn truncated(self) -> Wide {
        match self {
            Wide::Float(v) => Wide::Float(v.trunc()),
            other => other,
        }
    }

    /// The integer bits of the value, wrapped modulo 2^128.
    #[inline(always)]
    fn integer_bits(self) -> Option<i128> {
        match self {
            Wide::Int(v) | Wide::Overflowed { wrapped: v, .. } => Some(v),
            Wide::Float(_) => None,
        }
    }

    /// Builds an integer result from its wrapped bits and approximation.
    ///
    /// The bits are exact whenever the approximation lies well inside `i128`.
    #[inline(always)]
    fn integer_result(wrapped: i128, approx: f64) -> Wide {
        if approx.abs() < (i128::MAX / 2) as f64 {
            Wide::Int(wrapped)
        } else {
            Wide::Overflowed { wrapped, approx }
        }
    }

    /// Returns the larger of two values, preferring `self` on ties.
    #[inline]
    pub fn max(self, other: Wide) -> Wide {
        if other > self { other } else { self }
    }

    /// Returns the smaller of two values, preferring `self` on ties.
    #[inline]
    pub fn min(self, other: Wide) -> Wide {
        if other < self { other } else { self }
    }

    /// Parses a decimal literal, preferring the integer domain.
    ///
    /// ```rust
    /// # use vcl_core::num::Wide;
    /// assert_eq!(Wide::parse("-12"), Some(Wide::Int(-12)));
    /// assert_eq!(Wide::parse(" 2.5 "), Some(Wide::Float(2.5)));
    /// assert_eq!(Wide::parse("abc"), None);
    /// ```
    pub fn parse(text: &str) -> Option<Wide> {
        let text = text.trim();
        match text.parse::<i128>() {
            Ok(v) => Some(Wide::Int(v)),
            Err(_) => text.parse::<f64>().ok().map(Wide::Float),
        }
    }
}

impl Default for Wide {
    #[inline]
    fn default() -> Self {
        Wide::ZERO
    }
}

impl PartialEq for Wide {
    #[inline]
    fn eq(&self, other: &Wide) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Wide {
    #[inline]
    fn partial_cmp(&self, other: &Wide) -> Option<Ordering> {
        match (*self, *other) {
            (Wide::Int(a), Wide::Int(b)) => Some(a.cmp(&b)),
            (a, b) => a.as_f64().partial_cmp(&b.as_f64()),
        }
    }
}

macro_rules! wide_impl_binary_op {
    ($trait_name:ident, $method:ident, $checked:ident, $wrapping:ident, $op:tt) => {
        impl $trait_name for Wide {
            type Output = Wide;

            #[inline(always)]
            fn $method(self, rhs: Wide) -> Wide {
                match (self, rhs) {
                    (Wide::Int(a), Wide::Int(b)) => match a.$checked(b) {
                        Some(v) => Wide::Int(v),
                        None => Wide::Overflowed {
                            wrapped: a.$wrapping(b),
                            approx: (a as f64) $op (b as f64),
                        },
                    },
                    (a, b) => match (a.integer_bits(), b.integer_bits()) {
                        (Some(x), Some(y)) => {
                            Wide::integer_result(x.$wrapping(y), a.as_f64() $op b.as_f64())
                        }
                        _ => Wide::Float(a.as_f64() $op b.as_f64()),
                    },
                }
            }
        }
    };
}

wide_impl_binary_op!(Add, add, checked_add, wrapping_add, +);
wide_impl_binary_op!(Sub, sub, checked_sub, wrapping_sub, -);
wide_impl_binary_op!(Mul, mul, checked_mul, wrapping_mul, *);

impl Neg for Wide {
    type Output = Wide;

    #[inline(always)]
    fn neg(self) -> Wide {
        match self {
            Wide::Int(v) => match v.checked_neg() {
                Some(n) => Wide::Int(n),
                None => Wide::Overflowed {
                    wrapped: v.wrapping_neg(),
                    approx: -(v as f64),
                },
            },
            Wide::Float(v) => Wide::Float(-v),
            Wide::Overflowed { wrapped, approx } => {
                Wide::integer_result(wrapped.wrapping_neg(), -approx)
            }
        }
    }
}

impl fmt::Display for Wide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Wide::Int(v) => write!(f, "{v}"),
            Wide::Float(v) | Wide::Overflowed { approx: v, .. } => write!(f, "{v}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_arithmetic_stays_integer() {
        assert_eq!(Wide::Int(250) + Wide::Int(10), Wide::Int(260));
        assert!(!(Wide::Int(3) - Wide::Int(10)).is_float());
        assert_eq!(Wide::Int(3) - Wide::Int(10), Wide::Int(-7));
        assert_eq!(Wide::Int(-4) * Wide::Int(6), Wide::Int(-24));
    }

    #[test]
    fn test_mixed_arithmetic_promotes_to_float() {
        let sum = Wide::Int(138) + Wide::Float(-5.2);
        assert!(sum.is_float());
        assert!((sum.as_f64() - 132.8).abs() < 1e-9);
        assert_eq!(Wide::Float(0.5) * Wide::Int(126), Wide::Float(63.0));
    }

    #[test]
    fn test_division() {
        assert_eq!(Wide::Int(7).checked_div(Wide::Int(2)), Some(Wide::Int(3)));
        assert_eq!(Wide::Int(-7).checked_div(Wide::Int(2)), Some(Wide::Int(-3)));
        assert_eq!(Wide::Int(3).checked_div(Wide::Float(0.5)), Some(Wide::Float(6.0)));
        assert_eq!(Wide::Int(3).checked_div(Wide::Int(0)), None);
        assert_eq!(Wide::Float(3.0).checked_div(Wide::Float(0.0)), None);
        assert_eq!(Wide::Float(3.0).checked_div(Wide::Float(-0.0)), None);
    }

    #[test]
    fn test_halved_truncates_integers() {
        assert_eq!(Wide::Int(-15).halved(), Wide::Int(-7));
        assert_eq!(Wide::Int(31).halved(), Wide::Int(15));
        assert_eq!(Wide::Float(3.0).halved(), Wide::Float(1.5));
    }

    #[test]
    fn test_truncated() {
        assert_eq!(Wide::Float(-3.7).truncated(), Wide::Float(-3.0));
        assert_eq!(Wide::Float(11.1).truncated(), Wide::Float(11.0));
        assert_eq!(Wide::Int(5).truncated(), Wide::Int(5));
    }

    #[test]
    fn test_mixed_comparison() {
        assert_eq!(Wide::Int(1), Wide::Float(1.0));
        assert!(Wide::Int(255) < Wide::Float(255.5));
        assert!(Wide::Float(-0.5) < Wide::Int(0));
        assert!(Wide::Float(f64::NAN).partial_cmp(&Wide::Int(0)).is_none());
        assert_eq!(Wide::Int(2).max(Wide::Float(2.5)), Wide::Float(2.5));
        assert_eq!(Wide::Int(2).min(Wide::Float(2.5)), Wide::Int(2));
    }

    #[test]
    fn test_negation() {
        assert_eq!(-Wide::Int(5), Wide::Int(-5));
        assert_eq!(-Wide::Float(0.25), Wide::Float(-0.25));
    }

    #[test]
    fn test_integer_overflow_keeps_sign_and_bits() {
        let max = Wide::Int(u64::MAX as i128);
        let square = max * max;
        assert!(matches!(square, Wide::Overflowed { .. }));
        assert!(square > Wide::Int(i128::MAX));
        assert!(!square.is_zero());
        assert!(!square.is_float());

        let negative = Wide::Int(i128::MAX) * Wide::Int(-2);
        assert!(negative < Wide::Int(i128::MIN));
        assert!(matches!(negative, Wide::Overflowed { wrapped: 2, .. }));

        assert!(matches!(-Wide::Int(i128::MIN), Wide::Overflowed { .. }));
        assert!(matches!(Wide::Int(i128::MAX) + Wide::Int(1), Wide::Overflowed { .. }));
    }

    #[test]
    fn test_overflow_settles_back_into_range() {
        let over = Wide::Int(i128::MAX) + Wide::Int(1);
        assert!(matches!(over - Wide::Int(i128::MAX), Wide::Int(1)));

        let doubled = Wide::Int(i128::MAX) * Wide::Int(2);
        let back = doubled - Wide::Int(i128::MAX) - Wide::Int(i128::MAX);
        assert!(matches!(back, Wide::Int(0)));

        assert!((over * Wide::Float(0.5)).is_float());

        let quotient = Wide::Int(i128::MIN).checked_div(Wide::Int(-1));
        assert!(matches!(quotient, Some(Wide::Overflowed { .. })));
        assert!(quotient.is_some_and(|q| q.as_f64() > 0.0));
    }

    #[test]
    fn test_parse() {
        assert_eq!(Wide::parse("257"), Some(Wide::Int(257)));
        assert_eq!(Wide::parse("1e3"), Some(Wide::Float(1000.0)));
        assert_eq!(Wide::parse(""), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Wide::Int(-3).to_string(), "-3");
        assert_eq!(Wide::Float(0.25).to_string(), "0.25");
    }
}
