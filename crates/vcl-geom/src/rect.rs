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

//! Axis-aligned rectangles.
//!
//! A [`Rect`] stores `(x, y, width, height)`. Its right and bottom edges are
//! inclusive and derived on every read:
//!
//! - `right_x = x + width - 1`
//! - `bottom_y = y + height - 1`
//!
//! so they can never disagree with the stored fields. All computations run in
//! the widened domain and are stored through a `ClippedTuple`, saturating to
//! `T`'s range.

use crate::dims::Dims;
use crate::pos::Pos;
use core::fmt;
use core::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, Div, DivAssign, Mul, MulAssign, Sub,
    SubAssign,
};
use vcl_core::log::debug;
use vcl_core::num::{Scalar, TypeBounds, Wide, clamp};
use vcl_core::utils::range::in_range_closed;
use vcl_vect::components::{Components, Operand};
use vcl_vect::ops::ElementOp;
use vcl_vect::tuple::{ClippedTuple, Tuple};

const X: usize = 0;
const Y: usize = 1;
const WIDTH: usize = 2;
const HEIGHT: usize = 3;

/// An axis-aligned rectangle with inclusive edges.
///
/// # Examples
///
/// ```rust
/// # use vcl_geom::rect::Rect;
/// let mut r = Rect::<i32>::new(3, 31, 156, 257);
/// assert_eq!((r.right_x(), r.bottom_y()), (158, 287));
///
/// r.scale_from_center(1.1_f64);
/// assert_eq!(r, Rect::new(-4, 19, 171, 282));
///
/// let other = Rect::<i32>::from_ltrb(0, 0, 10, 30);
/// assert_eq!(r & other, Rect::new(0, 19, 11, 12));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Rect<T>
where
    T: Scalar,
{
    coords: ClippedTuple<T, 4>,
}

#[inline]
fn first_two<S: Components + ?Sized>(source: &S) -> (Wide, Wide) {
    (
        source.component_at(0).unwrap_or(Wide::ZERO),
        source.component_at(1).unwrap_or(Wide::ZERO),
    )
}

impl<T: Scalar> Rect<T> {
    /// Creates a rectangle from its top-left corner and its size.
    #[inline]
    pub fn new<U: Scalar>(x: U, y: U, width: U, height: U) -> Self {
        Self::from_components(&(x, y, width, height))
    }

    /// Creates a rectangle from `(x, y, width, height)` components.
    ///
    /// Missing components are zero, extra ones are ignored.
    #[inline]
    pub fn from_components<S: Components + ?Sized>(source: &S) -> Self {
        Self {
            coords: ClippedTuple::from_components(source),
        }
    }

    /// Creates a rectangle from its inclusive edges.
    ///
    /// ```rust
    /// # use vcl_geom::rect::Rect;
    /// let r = Rect::<i16>::from_ltrb(2, 1, 21, 11);
    /// assert_eq!(r, Rect::new(2, 1, 20, 11));
    /// ```
    #[inline]
    pub fn from_ltrb<U: Scalar>(left: U, top: U, right: U, bottom: U) -> Self {
        Self::from_edges(left.to_wide(), top.to_wide(), right.to_wide(), bottom.to_wide())
    }

    /// Creates a rectangle from a top-left point and a size.
    #[inline]
    pub fn from_pos_dims<P, D>(pos: &P, dims: &D) -> Self
    where
        P: Components + ?Sized,
        D: Components + ?Sized,
    {
        let (x, y) = first_two(pos);
        let (width, height) = first_two(dims);
        Self::from_wides([x, y, width, height])
    }

    /// Creates a rectangle from its inclusive top-left and bottom-right
    /// corners.
    #[inline]
    pub fn from_corners<P, Q>(top_left: &P, bottom_right: &Q) -> Self
    where
        P: Components + ?Sized,
        Q: Components + ?Sized,
    {
        let (left, top) = first_two(top_left);
        let (right, bottom) = first_two(bottom_right);
        Self::from_edges(left, top, right, bottom)
    }

    #[inline]
    fn from_edges(left: Wide, top: Wide, right: Wide, bottom: Wide) -> Self {
        Self::from_wides([left, top, right - left + Wide::ONE, bottom - top + Wide::ONE])
    }

    #[inline]
    fn from_wides(values: [Wide; 4]) -> Self {
        Self {
            coords: ClippedTuple::from_fn(|index| values[index]),
        }
    }

    /// Replaces all four fields from `(x, y, width, height)` components.
    #[inline]
    pub fn assign<S: Components + ?Sized>(&mut self, source: &S) {
        self.coords.assign(source);
    }

    #[inline(always)]
    fn wide(&self, index: usize) -> Wide {
        self.coords[index].to_wide()
    }

    #[inline(always)]
    fn store(&mut self, index: usize, value: Wide) {
        self.coords.set_wide(index, value);
    }

    // Offsets and margins move whole units on integer rectangles.
    #[inline]
    fn to_scalar_domain(value: Wide) -> Wide {
        if T::IS_INTEGER { value.truncated() } else { value }
    }

    #[inline]
    fn right_wide(&self) -> Wide {
        self.wide(X) + self.wide(WIDTH) - Wide::ONE
    }

    #[inline]
    fn bottom_wide(&self) -> Wide {
        self.wide(Y) + self.wide(HEIGHT) - Wide::ONE
    }

    #[inline(always)]
    pub fn x(&self) -> T {
        self.coords[X]
    }

    #[inline(always)]
    pub fn y(&self) -> T {
        self.coords[Y]
    }

    #[inline(always)]
    pub fn width(&self) -> T {
        self.coords[WIDTH]
    }

    #[inline(always)]
    pub fn height(&self) -> T {
        self.coords[HEIGHT]
    }

    /// Sets `x`, keeping the width.
    #[inline]
    pub fn set_x<U: Scalar>(&mut self, x: U) {
        self.coords.set(X, x);
    }

    /// Sets `y`, keeping the height.
    #[inline]
    pub fn set_y<U: Scalar>(&mut self, y: U) {
        self.coords.set(Y, y);
    }

    #[inline]
    pub fn set_width<U: Scalar>(&mut self, width: U) {
        self.coords.set(WIDTH, width);
    }

    #[inline]
    pub fn set_height<U: Scalar>(&mut self, height: U) {
        self.coords.set(HEIGHT, height);
    }

    /// The left edge, equal to `x`.
    #[inline]
    pub fn left_x(&self) -> T {
        self.x()
    }

    /// The inclusive right edge, `x + width - 1`.
    #[inline]
    pub fn right_x(&self) -> T {
        clamp::<T, TypeBounds>(self.right_wide())
    }

    /// The top edge, equal to `y`.
    #[inline]
    pub fn top_y(&self) -> T {
        self.y()
    }

    /// The inclusive bottom edge, `y + height - 1`.
    #[inline]
    pub fn bottom_y(&self) -> T {
        clamp::<T, TypeBounds>(self.bottom_wide())
    }

    /// Moves the left edge, keeping the right edge fixed.
    #[inline]
    pub fn set_left_x<U: Scalar>(&mut self, left: U) {
        self.set_left_wide(left.to_wide());
    }

    /// Moves the right edge, keeping the left edge fixed.
    #[inline]
    pub fn set_right_x<U: Scalar>(&mut self, right: U) {
        self.store(WIDTH, right.to_wide() - self.wide(X) + Wide::ONE);
    }

    /// Moves the top edge, keeping the bottom edge fixed.
    #[inline]
    pub fn set_top_y<U: Scalar>(&mut self, top: U) {
        self.set_top_wide(top.to_wide());
    }

    /// Moves the bottom edge, keeping the top edge fixed.
    #[inline]
    pub fn set_bottom_y<U: Scalar>(&mut self, bottom: U) {
        self.store(HEIGHT, bottom.to_wide() - self.wide(Y) + Wide::ONE);
    }

    fn set_left_wide(&mut self, left: Wide) {
        let right = self.right_wide();
        self.store(X, left);
        self.store(WIDTH, right - self.wide(X) + Wide::ONE);
    }

    fn set_top_wide(&mut self, top: Wide) {
        let bottom = self.bottom_wide();
        self.store(Y, top);
        self.store(HEIGHT, bottom - self.wide(Y) + Wide::ONE);
    }

    /// The top-left corner.
    #[inline]
    pub fn top_left(&self) -> Pos<T> {
        Pos::new(self.x(), self.y())
    }

    /// Moves the top-left corner, keeping the bottom-right corner fixed.
    pub fn set_top_left<S: Components + ?Sized>(&mut self, corner: &S) {
        let (left, top) = first_two(corner);
        self.set_left_wide(left);
        self.set_top_wide(top);
    }

    /// The inclusive bottom-right corner.
    #[inline]
    pub fn bottom_right(&self) -> Pos<T> {
        Pos::new(self.right_x(), self.bottom_y())
    }

    /// Moves the bottom-right corner, keeping the top-left corner fixed.
    pub fn set_bottom_right<S: Components + ?Sized>(&mut self, corner: &S) {
        let (right, bottom) = first_two(corner);
        self.store(WIDTH, right - self.wide(X) + Wide::ONE);
        self.store(HEIGHT, bottom - self.wide(Y) + Wide::ONE);
    }

    /// The center point `(x + width / 2, y + height / 2)`.
    ///
    /// Integer halving truncates toward zero.
    #[inline]
    pub fn center(&self) -> Pos<T> {
        let cx = self.wide(X) + self.wide(WIDTH).halved();
        let cy = self.wide(Y) + self.wide(HEIGHT).halved();
        Pos::new(
            clamp::<T, TypeBounds>(cx),
            clamp::<T, TypeBounds>(cy),
        )
    }

    /// Moves the rectangle so that its center lands on `center`.
    pub fn set_center<S: Components + ?Sized>(&mut self, center: &S) {
        let (cx, cy) = first_two(center);
        self.store(X, cx - self.wide(WIDTH).halved());
        self.store(Y, cy - self.wide(HEIGHT).halved());
    }

    /// The top-left corner.
    #[inline]
    pub fn pos(&self) -> Pos<T> {
        self.top_left()
    }

    /// The size.
    #[inline]
    pub fn dims(&self) -> Dims<T> {
        Dims::new(self.width(), self.height())
    }

    /// Sets the size from the first two components of `dims`, keeping the
    /// top-left corner.
    pub fn set_dims<S: Components + ?Sized>(&mut self, dims: &S) {
        let (width, height) = first_two(dims);
        self.store(WIDTH, width);
        self.store(HEIGHT, height);
    }

    /// Returns `width * height`.
    #[inline]
    pub fn area(&self) -> f64 {
        self.wide(WIDTH).as_f64() * self.wide(HEIGHT).as_f64()
    }

    /// Returns the fields as an unclipped `(x, y, width, height)` tuple.
    #[inline]
    pub fn to_tuple(&self) -> Tuple<T, 4> {
        self.coords.unclipped()
    }

    /// Translates by `(dx, dy)`.
    #[inline]
    pub fn move_by<U: Scalar, V: Scalar>(&mut self, dx: U, dy: V) {
        self.translate(&(dx, dy));
    }

    /// Translates by the first two values of `offset`.
    ///
    /// On integer rectangles the offset is truncated to whole units first.
    ///
    /// ```rust
    /// # use vcl_geom::rect::Rect;
    /// let mut r = Rect::<i16>::new(3, 31, 10, 10);
    /// r.translate(&(1.8_f32, -3.7_f32));
    /// assert_eq!((r.x(), r.y()), (4, 28));
    /// ```
    #[inline]
    pub fn translate<R: Operand + ?Sized>(&mut self, offset: &R) {
        self.shift(ElementOp::Add, offset);
    }

    fn shift<R: Operand + ?Sized>(&mut self, op: ElementOp, offset: &R) {
        for index in [X, Y] {
            let Some(delta) = offset.operand_at(index) else {
                break;
            };
            if let Some(value) = op.eval(self.wide(index), Self::to_scalar_domain(delta)) {
                self.store(index, value);
            }
        }
    }

    /// Moves the top-left corner to `(x, y)`, keeping the size.
    #[inline]
    pub fn move_to<U: Scalar, V: Scalar>(&mut self, x: U, y: V) {
        self.move_to_point(&(x, y));
    }

    /// Moves the top-left corner to the first two values of `point`.
    #[inline]
    pub fn move_to_point<S: Components + ?Sized>(&mut self, point: &S) {
        let (x, y) = first_two(point);
        self.store(X, x);
        self.store(Y, y);
    }

    fn update_dims<R: Operand + ?Sized>(&mut self, op: ElementOp, rhs: &R) {
        let mut dims = ClippedTuple::<T, 2>::new([self.width(), self.height()]);
        dims.apply(op, rhs);
        self.coords.set(WIDTH, dims[0]);
        self.coords.set(HEIGHT, dims[1]);
    }

    /// Adds `delta` to the size, keeping the top-left corner.
    ///
    /// A scalar applies to both extents.
    #[inline]
    pub fn resize<R: Operand>(&mut self, delta: R) {
        self.update_dims(ElementOp::Add, &delta);
    }

    /// Multiplies the size by `factor`, keeping the top-left corner.
    #[inline]
    pub fn scale<R: Operand>(&mut self, factor: R) {
        self.update_dims(ElementOp::Mul, &factor);
    }

    /// Divides the size by `divisor`, keeping the top-left corner.
    ///
    /// An extent whose divisor is zero is left unchanged.
    #[inline]
    pub fn shrink<R: Operand>(&mut self, divisor: R) {
        self.update_dims(ElementOp::Div, &divisor);
    }

    fn recenter_after<R: Operand + ?Sized>(&mut self, op: ElementOp, rhs: &R) {
        let (old_width, old_height) = (self.wide(WIDTH), self.wide(HEIGHT));
        self.update_dims(op, rhs);
        let dx = (old_width - self.wide(WIDTH)).halved();
        let dy = (old_height - self.wide(HEIGHT)).halved();
        self.store(X, self.wide(X) + dx);
        self.store(Y, self.wide(Y) + dy);
    }

    /// Multiplies the size by `factor`, keeping the center in place.
    #[inline]
    pub fn scale_from_center<R: Operand>(&mut self, factor: R) {
        self.recenter_after(ElementOp::Mul, &factor);
    }

    /// Divides the size by `divisor`, keeping the center in place.
    #[inline]
    pub fn shrink_from_center<R: Operand>(&mut self, divisor: R) {
        self.recenter_after(ElementOp::Div, &divisor);
    }

    /// Moves every edge inward by `margins` (horizontal, vertical).
    ///
    /// On integer rectangles margins are truncated to whole units first.
    ///
    /// ```rust
    /// # use vcl_geom::rect::Rect;
    /// let mut r = Rect::<i32>::new(3, 31, 156, 257);
    /// r.inset((6_i32, 11.1_f64));
    /// assert_eq!(r, Rect::new(9, 42, 144, 235));
    /// ```
    #[inline]
    pub fn inset<R: Operand>(&mut self, margins: R) {
        self.pad(ElementOp::Add, &margins);
    }

    /// Moves every edge outward by `margins` (horizontal, vertical).
    #[inline]
    pub fn outset<R: Operand>(&mut self, margins: R) {
        self.pad(ElementOp::Sub, &margins);
    }

    fn pad<R: Operand + ?Sized>(&mut self, op: ElementOp, margins: &R) {
        for (origin, extent) in [(X, WIDTH), (Y, HEIGHT)] {
            let Some(margin) = margins.operand_at(origin) else {
                break;
            };
            let margin = Self::to_scalar_domain(margin);
            let (Some(moved), Some(sized)) = (
                op.eval(self.wide(origin), margin),
                op.eval(self.wide(extent), -(margin + margin)),
            ) else {
                continue;
            };
            self.store(origin, moved);
            self.store(extent, sized);
        }
    }

    /// Returns `true` if `(x, y)` lies inside the rectangle, edges included.
    #[inline]
    pub fn contains_point<U: Scalar, V: Scalar>(&self, x: U, y: V) -> bool {
        self.contains(&(x, y))
    }

    /// Returns `true` if the point given by the first two values of `point`
    /// lies inside the rectangle, edges included.
    pub fn contains<S: Components + ?Sized>(&self, point: &S) -> bool {
        let (px, py) = first_two(point);
        in_range_closed(px, self.wide(X), self.right_wide())
            && in_range_closed(py, self.wide(Y), self.bottom_wide())
    }

    /// Returns `true` if `other` lies entirely inside this rectangle.
    pub fn does_embed<U: Scalar>(&self, other: &Rect<U>) -> bool {
        other.wide(X) >= self.wide(X)
            && other.right_wide() <= self.right_wide()
            && other.wide(Y) >= self.wide(Y)
            && other.bottom_wide() <= self.bottom_wide()
    }

    /// Returns `true` if the two rectangles share at least one point.
    pub fn does_intersect<U: Scalar>(&self, other: &Rect<U>) -> bool {
        let left = self.wide(X).max(other.wide(X));
        let right = self.right_wide().min(other.right_wide());
        let top = self.wide(Y).max(other.wide(Y));
        let bottom = self.bottom_wide().min(other.bottom_wide());
        left <= right && top <= bottom
    }

    /// Returns the overlapping area, or the all-zero rectangle when the two
    /// do not intersect.
    pub fn intersection_rect<U: Scalar>(&self, other: &Rect<U>) -> Rect<T> {
        if !self.does_intersect(other) {
            debug!("rectangles {} and {} do not intersect", self, other);
            return Rect::default();
        }
        Self::from_edges(
            self.wide(X).max(other.wide(X)),
            self.wide(Y).max(other.wide(Y)),
            self.right_wide().min(other.right_wide()),
            self.bottom_wide().min(other.bottom_wide()),
        )
    }

    /// Returns the smallest rectangle enclosing both.
    pub fn union_rect<U: Scalar>(&self, other: &Rect<U>) -> Rect<T> {
        Self::from_edges(
            self.wide(X).min(other.wide(X)),
            self.wide(Y).min(other.wide(Y)),
            self.right_wide().max(other.right_wide()),
            self.bottom_wide().max(other.bottom_wide()),
        )
    }
}

impl<T: Scalar> fmt::Display for Rect<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.coords, f)
    }
}

impl<T: Scalar, R: Operand> AddAssign<R> for Rect<T> {
    #[inline]
    fn add_assign(&mut self, offset: R) {
        self.shift(ElementOp::Add, &offset);
    }
}

impl<T: Scalar, R: Operand> SubAssign<R> for Rect<T> {
    #[inline]
    fn sub_assign(&mut self, offset: R) {
        self.shift(ElementOp::Sub, &offset);
    }
}

impl<T: Scalar, R: Operand> MulAssign<R> for Rect<T> {
    #[inline]
    fn mul_assign(&mut self, factor: R) {
        self.scale(factor);
    }
}

impl<T: Scalar, R: Operand> DivAssign<R> for Rect<T> {
    #[inline]
    fn div_assign(&mut self, divisor: R) {
        self.shrink(divisor);
    }
}

macro_rules! rect_impl_binary_op {
    ($trait_name:ident, $method:ident, $assign_method:ident) => {
        impl<T: Scalar, R: Operand> $trait_name<R> for Rect<T> {
            type Output = Self;

            #[inline]
            fn $method(mut self, rhs: R) -> Self {
                self.$assign_method(rhs);
                self
            }
        }
    };
}

rect_impl_binary_op!(Add, add, add_assign);
rect_impl_binary_op!(Sub, sub, sub_assign);
rect_impl_binary_op!(Mul, mul, mul_assign);
rect_impl_binary_op!(Div, div, div_assign);

impl<T: Scalar, U: Scalar> BitAnd<Rect<U>> for Rect<T> {
    type Output = Rect<T>;

    #[inline]
    fn bitand(self, other: Rect<U>) -> Rect<T> {
        self.intersection_rect(&other)
    }
}

impl<T: Scalar, U: Scalar> BitAndAssign<Rect<U>> for Rect<T> {
    #[inline]
    fn bitand_assign(&mut self, other: Rect<U>) {
        *self = self.intersection_rect(&other);
    }
}

impl<T: Scalar, U: Scalar> BitOr<Rect<U>> for Rect<T> {
    type Output = Rect<T>;

    #[inline]
    fn bitor(self, other: Rect<U>) -> Rect<T> {
        self.union_rect(&other)
    }
}

impl<T: Scalar, U: Scalar> BitOrAssign<Rect<U>> for Rect<T> {
    #[inline]
    fn bitor_assign(&mut self, other: Rect<U>) {
        *self = self.union_rect(&other);
    }
}
