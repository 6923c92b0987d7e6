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

//! Two-dimensional positions.

use crate::planar::planar_type;
use vcl_core::num::Scalar;

planar_type! {
    /// A point `(x, y)` whose coordinates saturate to `T`'s range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use vcl_geom::pos::Pos;
    /// let mut p = Pos::<i16>::new(10, 11);
    /// p += (15_i32, 15_i32);
    /// assert_eq!((p.x(), p.y()), (25, 26));
    ///
    /// p.set_x(32768_i32);
    /// assert_eq!(p.x(), 32767);
    /// ```
    Pos { x / set_x, y / set_y }
}

impl<T: Scalar> Pos<T> {
    /// The origin `(0, 0)`, saturated into `T`'s range.
    #[inline]
    pub fn origin() -> Self {
        Self::splat(T::zero())
    }
}
