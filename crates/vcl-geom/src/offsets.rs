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

//! Two-dimensional displacements.

use crate::planar::planar_type;

planar_type! {
    /// A displacement `(dx, dy)` whose components saturate to `T`'s range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use vcl_geom::offsets::Offsets;
    /// # use vcl_geom::pos::Pos;
    /// let step = Offsets::<i32>::new(3, -4);
    /// let p = Pos::<u8>::new(1, 2) + step;
    /// assert_eq!((p.x(), p.y()), (4, 0));
    /// ```
    Offsets { dx / set_dx, dy / set_dy }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pos::Pos;

    #[test]
    fn test_accessors() {
        let mut o = Offsets::<f32>::new(1.8, -3.7);
        assert_eq!((o.dx(), o.dy()), (1.8, -3.7));
        o.set_dx(2_u8);
        o.set_dy(0.5_f64);
        assert_eq!((o.dx(), o.dy()), (2.0, 0.5));
    }

    #[test]
    fn test_offsets_combine() {
        let a = Offsets::<i16>::new(1, 2);
        let b = Offsets::<i16>::new(10, 20);
        assert_eq!(a + b, Offsets::<i16>::new(11, 22));
        assert_eq!(b - a, Offsets::<i16>::new(9, 18));
        assert_eq!(a * 3_i32, Offsets::<i16>::new(3, 6));
    }

    #[test]
    fn test_offsets_move_positions() {
        let mut p = Pos::<i32>::new(10, 10);
        p -= Offsets::<i8>::new(-5, 5);
        assert_eq!(p, Pos::<i32>::new(15, 5));
    }

    #[test]
    fn test_unsigned_offsets_saturate() {
        let o = Offsets::<u16>::new(-1, 70_000);
        assert_eq!((o.dx(), o.dy()), (0, 65535));
    }
}
