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

//! Line segments between two saturating points.

use crate::pos::Pos;
use core::fmt;
use core::ops::{Add, AddAssign, Sub, SubAssign};
use vcl_core::log::debug;
use vcl_core::num::{Scalar, Wide};
use vcl_vect::components::{Components, Operand};
use vcl_vect::ops::ElementOp;
use vcl_vect::tuple::{ClippedTuple, Tuple};

/// A segment from `start` to `end`.
///
/// # Examples
///
/// ```rust
/// # use vcl_geom::line::LineSegment;
/// let mut line = LineSegment::<u8>::new(1, 2, 0, 255);
/// line.set_length(14.0);
/// assert_eq!((line.end.x(), line.end.y()), (1, 16));
///
/// line += (-1_i32, 4_i32);
/// assert_eq!((line.start.x(), line.start.y()), (0, 6));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct LineSegment<T>
where
    T: Scalar,
{
    pub start: Pos<T>,
    pub end: Pos<T>,
}

impl<T: Scalar> LineSegment<T> {
    /// Creates a segment from `(x1, y1)` to `(x2, y2)`.
    #[inline]
    pub fn new<U: Scalar>(x1: U, y1: U, x2: U, y2: U) -> Self {
        Self::from_components(&(x1, y1, x2, y2))
    }

    /// Creates a segment between two points of any component source.
    #[inline]
    pub fn from_points<P, Q>(start: &P, end: &Q) -> Self
    where
        P: Components + ?Sized,
        Q: Components + ?Sized,
    {
        Self {
            start: Pos::from_components(start),
            end: Pos::from_components(end),
        }
    }

    /// Creates a segment from `(x1, y1, x2, y2)` components.
    ///
    /// Missing components are zero.
    pub fn from_components<S: Components + ?Sized>(source: &S) -> Self {
        let at = |index: usize| source.component_at(index).unwrap_or(Wide::ZERO);
        Self {
            start: Pos {
                coords: ClippedTuple::from_fn(|index| at(index)),
            },
            end: Pos {
                coords: ClippedTuple::from_fn(|index| at(index + 2)),
            },
        }
    }

    #[inline]
    fn delta(&self, index: usize) -> f64 {
        self.end[index].to_wide().as_f64() - self.start[index].to_wide().as_f64()
    }

    /// The Euclidean distance between the end points.
    ///
    /// ```rust
    /// # use vcl_geom::line::LineSegment;
    /// assert_eq!(LineSegment::<i32>::new(0, 0, 3, 4).length(), 5.0);
    /// ```
    #[inline]
    pub fn length(&self) -> f64 {
        self.delta(0).hypot(self.delta(1))
    }

    /// Moves `end` along the current direction so the segment is `length`
    /// long.
    ///
    /// Integer coordinates round to nearest. A segment whose points coincide
    /// has no direction and is left unchanged.
    pub fn set_length(&mut self, length: f64) {
        let current = self.length();
        if current == 0.0 {
            debug!("segment {} has no direction, length left unchanged", self);
            return;
        }
        let ratio = length / current;
        for index in 0..2 {
            let mut value = self.start[index].to_wide().as_f64() + self.delta(index) * ratio;
            if T::IS_INTEGER {
                value = value.round();
            }
            self.end.coords.set(index, value);
        }
    }

    /// Changes the length by `delta`.
    #[inline]
    pub fn resize(&mut self, delta: f64) {
        self.set_length(self.length() + delta);
    }

    /// Moves both points by `offset`, saturating each coordinate.
    #[inline]
    pub fn translate<R: Operand + ?Sized>(&mut self, offset: &R) {
        self.shift(ElementOp::Add, offset);
    }

    fn shift<R: Operand + ?Sized>(&mut self, op: ElementOp, offset: &R) {
        self.start.coords.apply(op, offset);
        self.end.coords.apply(op, offset);
    }

    /// Moves `start` to `point` and shifts `end` by the same distance.
    ///
    /// The distance is measured after `start` has saturated, so a clamped
    /// start keeps the direction the segment had before the move.
    ///
    /// ```rust
    /// # use vcl_geom::{line::LineSegment, pos::Pos};
    /// let mut line = LineSegment::<u16>::new(10, 12, 10, 253);
    /// line.move_to(&Pos::<i16>::new(-1, -1));
    /// assert_eq!(line, LineSegment::new(0, 0, 0, 241));
    /// ```
    pub fn move_to<S: Components + ?Sized>(&mut self, point: &S) {
        let before = self.start;
        self.start.assign(point);
        for index in 0..2 {
            let moved = self.start[index].to_wide() - before[index].to_wide();
            let end = self.end[index].to_wide() + moved;
            self.end.coords.set_wide(index, end);
        }
    }

    /// Returns `(x1, y1, x2, y2)` as a tuple.
    #[inline]
    pub fn to_tuple(&self) -> Tuple<T, 4> {
        Tuple::new([self.start.x(), self.start.y(), self.end.x(), self.end.y()])
    }
}

impl<T: Scalar> Components for LineSegment<T> {
    #[inline]
    fn component_count(&self) -> usize {
        4
    }

    #[inline]
    fn component_at(&self, index: usize) -> Option<Wide> {
        match index {
            0 | 1 => self.start.component_at(index),
            2 | 3 => self.end.component_at(index - 2),
            _ => None,
        }
    }
}

impl<T: Scalar> fmt::Display for LineSegment<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

impl<T: Scalar, R: Operand> AddAssign<R> for LineSegment<T> {
    #[inline]
    fn add_assign(&mut self, offset: R) {
        self.shift(ElementOp::Add, &offset);
    }
}

impl<T: Scalar, R: Operand> SubAssign<R> for LineSegment<T> {
    #[inline]
    fn sub_assign(&mut self, offset: R) {
        self.shift(ElementOp::Sub, &offset);
    }
}

impl<T: Scalar, R: Operand> Add<R> for LineSegment<T> {
    type Output = Self;

    #[inline]
    fn add(mut self, offset: R) -> Self {
        self += offset;
        self
    }
}

impl<T: Scalar, R: Operand> Sub<R> for LineSegment<T> {
    type Output = Self;

    #[inline]
    fn sub(mut self, offset: R) -> Self {
        self -= offset;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::offsets::Offsets;

    fn points<T: Scalar>(line: &LineSegment<T>) -> [T; 4] {
        line.to_tuple().to_array()
    }

    #[test]
    fn test_construction() {
        let line = LineSegment::<i32>::new(1, 2, 3, 4);
        assert_eq!(points(&line), [1, 2, 3, 4]);

        let from_points = LineSegment::<i32>::from_points(&Pos::<u8>::new(1, 2), &(3_i64, 4_i64));
        assert_eq!(from_points, line);

        let short = LineSegment::<i32>::from_components(&[5_u8, 6, 7]);
        assert_eq!(points(&short), [5, 6, 7, 0]);
    }

    #[test]
    fn test_construction_saturates() {
        let line = LineSegment::<u8>::new(-5, 300, 1, 1);
        assert_eq!(points(&line), [0, 255, 1, 1]);
    }

    #[test]
    fn test_length() {
        let line = LineSegment::<i32>::new(1, 2, 3, 4);
        assert!((line.length() - 8.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(LineSegment::<u8>::new(7, 7, 7, 7).length(), 0.0);
        assert_eq!(LineSegment::<u8>::new(0, 0, 0, 255).length(), 255.0);
    }

    #[test]
    fn test_set_length_rounds_integer_end() {
        let mut line = LineSegment::<u8>::new(1, 2, 0, 255);
        line.set_length(14.0);
        assert_eq!(points(&line), [1, 2, 1, 16]);
    }

    #[test]
    fn test_set_length_float() {
        let mut line = LineSegment::<f64>::new(0.0, 0.0, 3.0, 4.0);
        line.set_length(10.0);
        assert_eq!(points(&line), [0.0, 0.0, 6.0, 8.0]);
    }

    #[test]
    fn test_set_length_on_degenerate_segment() {
        let mut line = LineSegment::<i32>::new(3, 3, 3, 3);
        line.set_length(10.0);
        assert_eq!(points(&line), [3, 3, 3, 3]);
    }

    #[test]
    fn test_resize() {
        let mut grown = LineSegment::<i32>::new(1, 2, 11, 22);
        grown.resize(2.0);
        assert_eq!((grown.end.x(), grown.end.y()), (12, 24));

        let mut shrunk = LineSegment::<i32>::new(1, 2, 11, 22);
        shrunk.resize(-2.0);
        assert_eq!((shrunk.end.x(), shrunk.end.y()), (10, 20));
    }

    #[test]
    fn test_translation_saturates() {
        let mut line = LineSegment::<u8>::new(1, 2, 0, 255);
        line += (-1_i32, 4_i32);
        assert_eq!(points(&line), [0, 6, 0, 255]);

        let mut line = LineSegment::<u8>::new(7, 11, 7, 253);
        line.translate(&(-6.1_f64, 3_i32));
        assert_eq!(points(&line), [0, 14, 0, 255]);
    }

    #[test]
    fn test_binary_operators() {
        let line = LineSegment::<i32>::new(1, 2, 3, 4);
        let moved = line + 1_i32 - Offsets::<i8>::new(0, 2);
        assert_eq!(points(&moved), [2, 1, 4, 3]);
        let mut back = moved;
        back -= (1_i32, -1_i32);
        assert_eq!(back, line);
    }

    #[test]
    fn test_move_to_keeps_clamped_direction() {
        let mut line = LineSegment::<u16>::new(10, 12, 10, 253);
        line.move_to(&Pos::<i16>::new(-1, -1));
        assert_eq!(points(&line), [0, 0, 0, 241]);

        let mut line = LineSegment::<i32>::new(1, 2, 3, 4);
        line.move_to(&[10_u8, 20]);
        assert_eq!(points(&line), [10, 20, 12, 22]);
    }

    #[test]
    fn test_components() {
        let line = LineSegment::<i16>::new(1, 2, 3, 4);
        assert_eq!(line.component_count(), 4);
        assert_eq!(line.component_at(3), Some(Wide::Int(4)));
        assert_eq!(line.component_at(4), None);
        let t = Tuple::<i64, 4>::from_components(&line);
        assert_eq!(t.to_array(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_display() {
        let line = LineSegment::<i32>::new(1, 2, 3, 4);
        assert_eq!(line.to_string(), "[(1, 2), (3, 4)]");
    }
}
