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

//! Compile-time clipping bounds and the shared clamp primitive.
//!
//! Bounds are expressed as zero-sized marker types implementing
//! [`ClipBounds`], so a saturating tuple carries its interval in its type:
//! `ClippedTuple<u8, 2, IntBounds<10, 20>>` and
//! `ClippedTuple<u8, 2, TypeBounds>` are distinct types.
//!
//! [`clamp`] is the only place where a widened value is saturated. The
//! effective interval is the intersection of the marker's bounds with the
//! scalar's representable range, and the comparison happens before the value
//! is narrowed:
//!
//! - integer bounds against integer values compare in `i128`,
//! - anything involving a floating bound or value compares in `f64`.

use crate::log::trace;
use crate::num::scalar::Scalar;
use crate::num::wide::Wide;
use core::fmt::Debug;
use core::hash::Hash;

/// Marker type describing an inclusive `[lower, upper]` interval.
///
/// The bounds may depend on the scalar they are applied to, which is how
/// [`TypeBounds`] expresses "the full range of `T`".
pub trait ClipBounds:
    Copy + Clone + Debug + Default + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Inclusive lower bound when clamping values of type `T`.
    fn lower<T: Scalar>() -> Wide;

    /// Inclusive upper bound when clamping values of type `T`.
    fn upper<T: Scalar>() -> Wide;
}

/// The full representable range of the scalar type.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct TypeBounds;

impl ClipBounds for TypeBounds {
    #[inline(always)]
    fn lower<T: Scalar>() -> Wide {
        T::min_value().to_wide()
    }

    #[inline(always)]
    fn upper<T: Scalar>() -> Wide {
        T::max_value().to_wide()
    }
}

/// Integer bounds `[MIN, MAX]`, checked for `MIN <= MAX` at compile time.
///
/// # Examples
///
/// ```rust
/// # use vcl_core::num::{clamp, IntBounds, Wide};
/// type Percent = IntBounds<0, 100>;
///
/// assert_eq!(clamp::<u8, Percent>(Wide::Int(250)), 100);
/// assert_eq!(clamp::<i32, Percent>(Wide::Int(-7)), 0);
/// assert_eq!(clamp::<i32, Percent>(Wide::Float(42.9)), 42);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntBounds<const MIN: i64, const MAX: i64>;

impl<const MIN: i64, const MAX: i64> ClipBounds for IntBounds<MIN, MAX> {
    #[inline(always)]
    fn lower<T: Scalar>() -> Wide {
        const { assert!(MIN <= MAX, "IntBounds requires MIN <= MAX") };
        Wide::Int(MIN as i128)
    }

    #[inline(always)]
    fn upper<T: Scalar>() -> Wide {
        const { assert!(MIN <= MAX, "IntBounds requires MIN <= MAX") };
        Wide::Int(MAX as i128)
    }
}

/// Declares a marker type with floating-domain bounds.
///
/// # Examples
///
/// ```rust
/// # use vcl_core::clip_bounds;
/// # use vcl_core::num::{clamp, Wide};
/// clip_bounds! {
///     /// Signed unit interval.
///     pub struct SignedUnit = -1.0 ..= 1.0;
/// }
///
/// assert_eq!(clamp::<f32, SignedUnit>(Wide::Float(-3.0)), -1.0);
/// assert_eq!(clamp::<f32, SignedUnit>(Wide::Float(0.5)), 0.5);
/// ```
#[macro_export]
macro_rules! clip_bounds {
    ($(#[$meta:meta])* $vis:vis struct $name:ident = $lower:literal ..= $upper:literal;) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        $vis struct $name;

        impl $crate::num::ClipBounds for $name {
            #[inline(always)]
            fn lower<T: $crate::num::Scalar>() -> $crate::num::Wide {
                $crate::num::Wide::Float($lower as f64)
            }

            #[inline(always)]
            fn upper<T: $crate::num::Scalar>() -> $crate::num::Wide {
                $crate::num::Wide::Float($upper as f64)
            }
        }
    };
}

clip_bounds! {
    /// The unit interval `[0.0, 1.0]`, the usual range of normalized values.
    pub struct UnitBounds = 0.0 ..= 1.0;
}

/// Saturates `value` into `B`'s interval and narrows it to `T`.
///
/// NaN saturates to the lower bound. Values strictly inside the interval are
/// narrowed with [`Scalar::from_wide`], so floating values stored into
/// integer scalars truncate toward zero.
///
/// # Examples
///
/// ```rust
/// # use vcl_core::num::{clamp, TypeBounds, UnitBounds, Wide};
/// assert_eq!(clamp::<u8, TypeBounds>(Wide::Int(257)), 255);
/// assert_eq!(clamp::<u8, TypeBounds>(Wide::Int(-1)), 0);
/// assert_eq!(clamp::<i16, TypeBounds>(Wide::Int(32768)), 32767);
/// assert_eq!(clamp::<f64, UnitBounds>(Wide::Float(1.05)), 1.0);
/// ```
#[inline]
pub fn clamp<T: Scalar, B: ClipBounds>(value: Wide) -> T {
    let type_lower = T::min_value().to_wide();
    let type_upper = T::max_value().to_wide();
    let lower = B::lower::<T>().max(type_lower).min(type_upper);
    let upper = B::upper::<T>().min(type_upper).max(lower);

    if value.is_nan() || value < lower {
        trace!("clamped {} to lower bound {}", value, lower);
        T::from_wide(lower)
    } else if value > upper {
        trace!("clamped {} to upper bound {}", value, upper);
        T::from_wide(upper)
    } else {
        T::from_wide(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    clip_bounds! {
        struct Tenths = 0.1 ..= 0.9;
    }

    #[test]
    fn test_type_bounds_saturate() {
        assert_eq!(clamp::<u8, TypeBounds>(Wide::Int(300)), 255);
        assert_eq!(clamp::<i8, TypeBounds>(Wide::Int(-129)), -128);
        assert_eq!(clamp::<u16, TypeBounds>(Wide::Float(-0.5)), 0);
        assert_eq!(clamp::<u64, TypeBounds>(Wide::Float(1e30)), u64::MAX);
        assert_eq!(clamp::<i64, TypeBounds>(Wide::Int(i64::MIN as i128)), i64::MIN);
    }

    #[test]
    fn test_interior_values_are_narrowed() {
        assert_eq!(clamp::<u8, TypeBounds>(Wide::Int(128)), 128);
        assert_eq!(clamp::<i32, TypeBounds>(Wide::Float(-3.7)), -3);
        assert_eq!(clamp::<f32, TypeBounds>(Wide::Float(0.25)), 0.25);
    }

    #[test]
    fn test_int_bounds() {
        type Teen = IntBounds<13, 19>;
        assert_eq!(clamp::<u8, Teen>(Wide::Int(0)), 13);
        assert_eq!(clamp::<u8, Teen>(Wide::Int(16)), 16);
        assert_eq!(clamp::<u8, Teen>(Wide::Int(257)), 19);
        assert_eq!(clamp::<f64, Teen>(Wide::Float(19.5)), 19.0);
    }

    #[test]
    fn test_bounds_are_intersected_with_the_type_range() {
        type Wider = IntBounds<{ -1000 }, 1000>;
        assert_eq!(clamp::<u8, Wider>(Wide::Int(-5)), 0);
        assert_eq!(clamp::<u8, Wider>(Wide::Int(999)), 255);

        type Outside = IntBounds<300, 400>;
        assert_eq!(clamp::<u8, Outside>(Wide::Int(0)), 255);
        assert_eq!(clamp::<u8, Outside>(Wide::Int(350)), 255);
    }

    #[test]
    fn test_float_bounds() {
        assert_eq!(clamp::<f64, UnitBounds>(Wide::Float(-0.1)), 0.0);
        assert_eq!(clamp::<f64, UnitBounds>(Wide::Float(0.8)), 0.8);
        assert_eq!(clamp::<f64, UnitBounds>(Wide::Int(2)), 1.0);
        assert_eq!(clamp::<f64, Tenths>(Wide::Float(0.95)), 0.9);
        assert_eq!(clamp::<u8, UnitBounds>(Wide::Int(7)), 1);
    }

    #[test]
    fn test_nan_saturates_to_lower_bound() {
        assert_eq!(clamp::<f64, UnitBounds>(Wide::Float(f64::NAN)), 0.0);
        assert_eq!(clamp::<u8, IntBounds<3, 9>>(Wide::Float(f64::NAN)), 3);
    }

    #[test]
    fn test_overflowed_integers_saturate_by_sign() {
        let max = Wide::Int(u64::MAX as i128);
        assert_eq!(clamp::<u64, TypeBounds>(max * max), u64::MAX);
        assert_eq!(clamp::<i64, TypeBounds>(-(max * max)), i64::MIN);
        assert_eq!(clamp::<u8, TypeBounds>(Wide::Int(i128::MAX) * Wide::Int(-2)), 0);
        assert_eq!(clamp::<u8, IntBounds<3, 9>>(max * max), 9);
    }

    #[test]
    fn test_bounds_are_inclusive() {
        type Teen = IntBounds<13, 19>;
        assert_eq!(clamp::<i32, Teen>(Wide::Int(13)), 13);
        assert_eq!(clamp::<i32, Teen>(Wide::Int(19)), 19);
    }
}
