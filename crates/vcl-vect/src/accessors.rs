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

//! Named component access for 2-, 3- and 4-component tuples.
//!
//! [`XY`], [`XYZ`] and [`XYZW`] are extension traits implemented for the
//! matching arities only, so `z()` simply does not exist on a 2-component
//! tuple. Setters accept any scalar and store it through the tuple's
//! conversion rule.

use crate::tuple::{ClippedTuple, Conversion, Tuple};
use vcl_core::num::{Scalar, TypeBounds, UnitBounds};

/// Access to the first two components as `x` and `y`.
///
/// # Examples
///
/// ```rust
/// # use vcl_vect::accessors::{Vect2s, XY};
/// let mut v = Vect2s::from_xy(3, 4);
/// v.set_y(40_000_u32);
/// assert_eq!((v.x(), v.y()), (3, -25536));
/// ```
pub trait XY {
    /// The component scalar type.
    type Component: Scalar;

    fn x(&self) -> Self::Component;
    fn y(&self) -> Self::Component;
    fn set_x<U: Scalar>(&mut self, value: U);
    fn set_y<U: Scalar>(&mut self, value: U);
}

/// Adds `z` to [`XY`] for tuples of at least three components.
pub trait XYZ: XY {
    fn z(&self) -> Self::Component;
    fn set_z<U: Scalar>(&mut self, value: U);
}

/// Adds `w` to [`XYZ`] for four-component tuples.
pub trait XYZW: XYZ {
    fn w(&self) -> Self::Component;
    fn set_w<U: Scalar>(&mut self, value: U);
}

macro_rules! accessors_impl_xy {
    ($n:literal) => {
        impl<T: Scalar, C: Conversion> XY for Tuple<T, $n, C> {
            type Component = T;

            #[inline(always)]
            fn x(&self) -> T {
                self[0]
            }

            #[inline(always)]
            fn y(&self) -> T {
                self[1]
            }

            #[inline]
            fn set_x<U: Scalar>(&mut self, value: U) {
                self.set(0, value);
            }

            #[inline]
            fn set_y<U: Scalar>(&mut self, value: U) {
                self.set(1, value);
            }
        }
    };
}

macro_rules! accessors_impl_xyz {
    ($n:literal) => {
        impl<T: Scalar, C: Conversion> XYZ for Tuple<T, $n, C> {
            #[inline(always)]
            fn z(&self) -> T {
                self[2]
            }

            #[inline]
            fn set_z<U: Scalar>(&mut self, value: U) {
                self.set(2, value);
            }
        }
    };
}

accessors_impl_xy!(2);
accessors_impl_xy!(3);
accessors_impl_xy!(4);
accessors_impl_xyz!(3);
accessors_impl_xyz!(4);

impl<T: Scalar, C: Conversion> XYZW for Tuple<T, 4, C> {
    #[inline(always)]
    fn w(&self) -> T {
        self[3]
    }

    #[inline]
    fn set_w<U: Scalar>(&mut self, value: U) {
        self.set(3, value);
    }
}

impl<T: Scalar, C: Conversion> Tuple<T, 2, C> {
    /// Creates a 2-component tuple from two scalars of any types.
    #[inline]
    pub fn from_xy<X: Scalar, Y: Scalar>(x: X, y: Y) -> Self {
        Self::from_components(&(x, y))
    }
}

impl<T: Scalar, C: Conversion> Tuple<T, 3, C> {
    /// Creates a 3-component tuple from three scalars of any types.
    #[inline]
    pub fn from_xyz<X: Scalar, Y: Scalar, Z: Scalar>(x: X, y: Y, z: Z) -> Self {
        Self::from_components(&(x, y, z))
    }
}

impl<T: Scalar, C: Conversion> Tuple<T, 4, C> {
    /// Creates a 4-component tuple from four scalars of any types.
    #[inline]
    pub fn from_xyzw<X: Scalar, Y: Scalar, Z: Scalar, W: Scalar>(x: X, y: Y, z: Z, w: W) -> Self {
        Self::from_components(&(x, y, z, w))
    }
}

pub type Vect2<T> = Tuple<T, 2>;
pub type Vect3<T> = Tuple<T, 3>;
pub type Vect4<T> = Tuple<T, 4>;

pub type ClipVect2<T, B = TypeBounds> = ClippedTuple<T, 2, B>;
pub type ClipVect3<T, B = TypeBounds> = ClippedTuple<T, 3, B>;
pub type ClipVect4<T, B = TypeBounds> = ClippedTuple<T, 4, B>;

pub type Vect2b = Vect2<u8>;
pub type Vect2s = Vect2<i16>;
pub type Vect2us = Vect2<u16>;
pub type Vect2i = Vect2<i32>;
pub type Vect2ui = Vect2<u32>;
pub type Vect2f = Vect2<f32>;
pub type Vect2d = Vect2<f64>;

pub type Vect3b = Vect3<u8>;
pub type Vect3s = Vect3<i16>;
pub type Vect3us = Vect3<u16>;
pub type Vect3i = Vect3<i32>;
pub type Vect3ui = Vect3<u32>;
pub type Vect3f = Vect3<f32>;
pub type Vect3d = Vect3<f64>;

pub type Vect4b = Vect4<u8>;
pub type Vect4s = Vect4<i16>;
pub type Vect4us = Vect4<u16>;
pub type Vect4i = Vect4<i32>;
pub type Vect4ui = Vect4<u32>;
pub type Vect4f = Vect4<f32>;
pub type Vect4d = Vect4<f64>;

// Floating clipped shortcuts hold normalized values.
pub type ClipVect2c = ClipVect2<i8>;
pub type ClipVect2b = ClipVect2<u8>;
pub type ClipVect2s = ClipVect2<i16>;
pub type ClipVect2us = ClipVect2<u16>;
pub type ClipVect2i = ClipVect2<i32>;
pub type ClipVect2ui = ClipVect2<u32>;
pub type ClipVect2f = ClipVect2<f32, UnitBounds>;
pub type ClipVect2d = ClipVect2<f64, UnitBounds>;

pub type ClipVect3c = ClipVect3<i8>;
pub type ClipVect3b = ClipVect3<u8>;
pub type ClipVect3s = ClipVect3<i16>;
pub type ClipVect3us = ClipVect3<u16>;
pub type ClipVect3i = ClipVect3<i32>;
pub type ClipVect3ui = ClipVect3<u32>;
pub type ClipVect3f = ClipVect3<f32, UnitBounds>;
pub type ClipVect3d = ClipVect3<f64, UnitBounds>;

pub type ClipVect4c = ClipVect4<i8>;
pub type ClipVect4b = ClipVect4<u8>;
pub type ClipVect4s = ClipVect4<i16>;
pub type ClipVect4us = ClipVect4<u16>;
pub type ClipVect4i = ClipVect4<i32>;
pub type ClipVect4ui = ClipVect4<u32>;
pub type ClipVect4f = ClipVect4<f32, UnitBounds>;
pub type ClipVect4d = ClipVect4<f64, UnitBounds>;

#[cfg(test)]
mod tests {
    use super::*;
    use vcl_core::num::IntBounds;

    #[test]
    fn test_xy_getters_and_setters() {
        let mut v = Vect2i::from_xy(1, 2);
        assert_eq!((v.x(), v.y()), (1, 2));
        v.set_x(-7.9_f64);
        v.set_y(8_u8);
        assert_eq!(v.to_array(), [-7, 8]);
    }

    #[test]
    fn test_xyz_and_xyzw() {
        let mut v3 = Vect3f::from_xyz(1, 2.5_f64, 3_u8);
        assert_eq!((v3.x(), v3.y(), v3.z()), (1.0, 2.5, 3.0));
        v3.set_z(-1_i32);
        assert_eq!(v3.z(), -1.0);

        let mut v4 = Vect4us::from_xyzw(1, 2, 3, 4);
        v4.set_w(70_000_u32);
        assert_eq!(v4.to_array(), [1, 2, 3, 70_000_u32 as u16]);
        assert_eq!(v4.w(), 4464);
    }

    #[test]
    fn test_clipped_setters_saturate() {
        let mut v = ClipVect2b::from_xy(-5, 300);
        assert_eq!(v.to_array(), [0, 255]);
        v.set_x(128_i32);
        v.set_y(-0.5_f32);
        assert_eq!((v.x(), v.y()), (128, 0));

        let mut c = ClipVect2c::zero();
        c.set_x(128_i32);
        assert_eq!(c.x(), 127);
    }

    #[test]
    fn test_unit_interval_shortcuts() {
        let mut v = ClipVect2d::from_xy(0.8, 0.25);
        v += 0.25_f64;
        assert_eq!(v.to_array(), [1.0, 0.5]);
        assert_eq!(ClipVect3f::from_xyz(-1, 2, 0.5).to_array(), [0.0, 1.0, 0.5]);
    }

    #[test]
    fn test_custom_bounds_alias() {
        let mut v = ClipVect4::<u8, IntBounds<10, 20>>::from_xyzw(0, 15, 25, 20);
        assert_eq!(v.to_array(), [10, 15, 20, 20]);
        v.set_w(9_i32);
        assert_eq!(v.w(), 10);
    }

    #[test]
    fn test_from_xy_truncates_floats() {
        assert_eq!(Vect2s::from_xy(1.9, -1.9).to_array(), [1, -1]);
        assert_eq!(Vect2b::from_xy(256, -1).to_array(), [0, 255]);
    }

    #[test]
    fn test_vectors_of_each_arity_interoperate() {
        let mut v4 = Vect4i::from_xyzw(1, 1, 1, 1);
        v4 += Vect2i::from_xy(10, 20);
        assert_eq!(v4.to_array(), [11, 21, 1, 1]);
        let v3 = Vect3d::from_components(&v4);
        assert_eq!(v3.to_array(), [11.0, 21.0, 1.0]);
    }
}
