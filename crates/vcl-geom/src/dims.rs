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

//! Two-dimensional extents.

use crate::planar::planar_type;
use vcl_core::num::Scalar;

planar_type! {
    /// A size `(width, height)` whose components saturate to `T`'s range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use vcl_geom::dims::Dims;
    /// let mut d = Dims::<u16>::new(35, 26);
    /// d *= 1.5_f32;
    /// assert_eq!((d.width(), d.height()), (52, 39));
    /// assert_eq!(d.area(), 2028.0);
    /// ```
    Dims { width / set_width, height / set_height }
}

impl<T: Scalar> Dims<T> {
    /// Returns `width * height`.
    #[inline]
    pub fn area(&self) -> f64 {
        self.width().to_wide().as_f64() * self.height().to_wide().as_f64()
    }

    /// Returns `true` if either extent is zero or negative.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() <= T::zero() || self.height() <= T::zero()
    }
}
