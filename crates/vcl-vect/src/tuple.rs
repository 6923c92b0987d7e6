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

//! The fixed-size numeric tuple.
//!
//! [`Tuple<T, N, C>`] holds exactly `N` components of scalar type `T`. The
//! conversion rule `C` decides how every widened value is narrowed when it is
//! stored:
//!
//! - [`Native`] narrows with Rust's `as` semantics (integer wraparound,
//!   float-to-integer truncation).
//! - [`Clipped<B>`] saturates into the bounds `B` through
//!   [`clamp`](vcl_core::num::clamp), the one clamp shared by every
//!   construction, assignment, setter and arithmetic path.
//!
//! [`ClippedTuple<T, N, B>`] names the saturating form.

use crate::components::{Components, Operand};
use crate::ops::ElementOp;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::marker::PhantomData;
use core::ops::{Index, IndexMut};
use vcl_core::log::debug;
use vcl_core::num::{ClipBounds, Scalar, TypeBounds, Wide, clamp};

/// How a widened value is narrowed into a component.
pub trait Conversion:
    Copy + Clone + fmt::Debug + Default + PartialEq + Eq + Hash + Send + Sync + 'static
{
    /// Narrows `value` into a component of type `T`.
    fn store<T: Scalar>(value: Wide) -> T;
}

/// Unclipped storage: narrowing follows Rust's `as` operator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Native;

impl Conversion for Native {
    #[inline(always)]
    fn store<T: Scalar>(value: Wide) -> T {
        T::from_wide(value)
    }
}

/// Saturating storage: values are clamped into `B` before narrowing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Clipped<B>(PhantomData<B>)
where
    B: ClipBounds;

impl<B: ClipBounds> Conversion for Clipped<B> {
    #[inline(always)]
    fn store<T: Scalar>(value: Wide) -> T {
        clamp::<T, B>(value)
    }
}

/// A fixed-size tuple of `N` numeric components.
///
/// Construction and assignment accept any [`Components`] source. A source
/// shorter than `N` is zero-filled, extra source components are ignored.
/// Arithmetic accepts any [`Operand`]: a scalar is applied to every
/// component, a sequence to the first `min(N, len)` components only.
///
/// # Examples
///
/// ```rust
/// # use vcl_vect::tuple::Tuple;
/// let mut t = Tuple::<i16, 3>::from_components(&[10_i32, 11]);
/// assert_eq!(t.to_array(), [10, 11, 0]);
///
/// t += 5_u8;
/// assert_eq!(t.to_array(), [15, 16, 5]);
///
/// t *= (2_i64, 0.5_f32);
/// assert_eq!(t.to_array(), [30, 8, 5]);
///
/// t /= 0_i32;
/// assert_eq!(t.to_array(), [30, 8, 5]);
/// ```
#[derive(Clone, Copy)]
pub struct Tuple<T, const N: usize, C = Native>
where
    T: Scalar,
    C: Conversion,
{
    components: [T; N],
    conversion: PhantomData<C>,
}

/// A tuple whose components saturate into the bounds `B`.
///
/// # Examples
///
/// ```rust
/// # use vcl_core::num::IntBounds;
/// # use vcl_vect::tuple::ClippedTuple;
/// let t = ClippedTuple::<u8, 2>::splat(257_i32);
/// assert_eq!(t.to_array(), [255, 255]);
///
/// let mut teen = ClippedTuple::<u8, 2, IntBounds<13, 19>>::zero();
/// assert_eq!(teen.to_array(), [13, 13]);
/// teen += 100_u8;
/// assert_eq!(teen.to_array(), [19, 19]);
/// ```
pub type ClippedTuple<T, const N: usize, B = TypeBounds> = Tuple<T, N, Clipped<B>>;

impl<T, const N: usize, C> Tuple<T, N, C>
where
    T: Scalar,
    C: Conversion,
{
    /// Number of components.
    pub const LEN: usize = N;

    /// Creates a tuple from an array, storing each value through the
    /// conversion rule.
    #[inline]
    pub fn new(components: [T; N]) -> Self {
        Self::from_fn(|index| components[index].to_wide())
    }

    /// Creates a tuple whose components are all zero.
    ///
    /// For a clipped tuple zero itself is clamped, so bounds that exclude it
    /// yield the nearest bound.
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Creates a tuple with every component set to `value`.
    #[inline]
    pub fn splat<U: Scalar>(value: U) -> Self {
        Self::from_array_unchecked([C::store::<T>(value.to_wide()); N])
    }

    /// Creates a tuple from any component source.
    ///
    /// Missing components are zero, extra ones are ignored.
    #[inline]
    pub fn from_components<S: Components + ?Sized>(source: &S) -> Self {
        Self::from_fn(|index| source.component_at(index).unwrap_or(Wide::ZERO))
    }

    /// Creates a tuple by storing `f(i)` into component `i`.
    #[inline]
    pub fn from_fn<F: FnMut(usize) -> Wide>(mut f: F) -> Self {
        Self::from_array_unchecked(core::array::from_fn(|index| C::store::<T>(f(index))))
    }

    #[inline(always)]
    const fn from_array_unchecked(components: [T; N]) -> Self {
        Self {
            components,
            conversion: PhantomData,
        }
    }

    /// Replaces every component from `source`, zero-filling past its end.
    #[inline]
    pub fn assign<S: Components + ?Sized>(&mut self, source: &S) {
        *self = Self::from_components(source);
    }

    /// Overwrites the leading components with those of `source`.
    ///
    /// Components past the end of `source` keep their values.
    ///
    /// ```rust
    /// # use vcl_vect::tuple::Tuple;
    /// let mut t = Tuple::<i32, 4>::new([1, 2, 3, 4]);
    /// t.copy_from(&[9_u8, 8]);
    /// assert_eq!(t.to_array(), [9, 8, 3, 4]);
    /// ```
    pub fn copy_from<S: Components + ?Sized>(&mut self, source: &S) {
        for (index, component) in self.components.iter_mut().enumerate() {
            match source.component_at(index) {
                Some(value) => *component = C::store(value),
                None => break,
            }
        }
    }

    /// Sets every component to `value`.
    #[inline]
    pub fn fill<U: Scalar>(&mut self, value: U) {
        *self = Self::splat(value);
    }

    /// Stores `value` into component `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline]
    pub fn set<U: Scalar>(&mut self, index: usize, value: U) {
        self.set_wide(index, value.to_wide());
    }

    /// Stores a widened `value` into component `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`.
    #[inline]
    pub fn set_wide(&mut self, index: usize, value: Wide) {
        self.components[index] = C::store(value);
    }

    /// Returns component `index`, or `None` if it is out of range.
    #[inline]
    pub fn get(&self, index: usize) -> Option<T> {
        self.components.get(index).copied()
    }

    /// Returns the number of components.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` for the zero-arity tuple.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Borrows the components as an array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.components
    }

    /// Borrows the components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.components
    }

    /// Returns the components as an array.
    #[inline]
    pub fn to_array(self) -> [T; N] {
        self.components
    }

    /// Returns the components as a vector.
    #[inline]
    pub fn to_vec(&self) -> Vec<T> {
        self.components.to_vec()
    }

    /// Iterates over the components by value.
    #[inline]
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.components.iter().copied()
    }

    /// Converts to an unclipped tuple of another scalar type and arity.
    ///
    /// ```rust
    /// # use vcl_vect::tuple::Tuple;
    /// let t = Tuple::<f32, 3>::new([1.5, -2.5, 300.0]);
    /// assert_eq!(t.cast::<i16, 2>().to_array(), [1, -2]);
    /// assert_eq!(t.cast::<u8, 4>().to_array(), [1, 0, 255, 0]);
    /// ```
    #[inline]
    pub fn cast<U: Scalar, const M: usize>(&self) -> Tuple<U, M> {
        Tuple::from_components(self)
    }

    /// Converts to a tuple of any scalar type, arity and conversion rule.
    #[inline]
    pub fn convert<U: Scalar, const M: usize, D: Conversion>(&self) -> Tuple<U, M, D> {
        Tuple::from_components(self)
    }

    /// Combines each component with the matching value of `rhs`.
    ///
    /// Stops at the end of `rhs`. A division whose divisor is zero leaves
    /// that component unchanged.
    pub fn apply<R: Operand + ?Sized>(&mut self, op: ElementOp, rhs: &R) {
        for (index, component) in self.components.iter_mut().enumerate() {
            let Some(operand) = rhs.operand_at(index) else {
                break;
            };
            match op.eval(component.to_wide(), operand) {
                Some(result) => *component = C::store(result),
                None => {
                    debug!("division by zero left component {} unchanged", index);
                }
            }
        }
    }
}

impl<T, const N: usize> Tuple<T, N, Native>
where
    T: Scalar,
{
    /// Converts to a tuple saturating into `B`.
    #[inline]
    pub fn clipped<B: ClipBounds>(&self) -> ClippedTuple<T, N, B> {
        ClippedTuple::from_components(self)
    }

    /// Mutably borrows the components.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.components
    }
}

impl<T, const N: usize, B> ClippedTuple<T, N, B>
where
    T: Scalar,
    B: ClipBounds,
{
    /// The smallest value a component can hold.
    #[inline]
    pub fn lower_bound() -> T {
        clamp::<T, B>(B::lower::<T>())
    }

    /// The largest value a component can hold.
    #[inline]
    pub fn upper_bound() -> T {
        clamp::<T, B>(B::upper::<T>())
    }

    /// Converts to an unclipped tuple with the same components.
    #[inline]
    pub fn unclipped(&self) -> Tuple<T, N> {
        Tuple::from_components(self)
    }
}

impl<T, const N: usize, C> Default for Tuple<T, N, C>
where
    T: Scalar,
    C: Conversion,
{
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl<T, const N: usize, C> fmt::Debug for Tuple<T, N, C>
where
    T: Scalar,
    C: Conversion,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Tuple").field(&self.components).finish()
    }
}

impl<T, const N: usize, C> Components for Tuple<T, N, C>
where
    T: Scalar,
    C: Conversion,
{
    #[inline]
    fn component_count(&self) -> usize {
        N
    }

    #[inline]
    fn component_at(&self, index: usize) -> Option<Wide> {
        self.components.get(index).map(|value| value.to_wide())
    }
}

impl<T, const N: usize, C> Index<usize> for Tuple<T, N, C>
where
    T: Scalar,
    C: Conversion,
{
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.components[index]
    }
}

// Clipped tuples have no `IndexMut`: a raw write would bypass the clamp.
impl<T, const N: usize> IndexMut<usize> for Tuple<T, N, Native>
where
    T: Scalar,
{
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.components[index]
    }
}

impl<T, const N: usize, C, U, const M: usize, D> PartialEq<Tuple<U, M, D>> for Tuple<T, N, C>
where
    T: Scalar,
    C: Conversion,
    U: Scalar,
    D: Conversion,
{
    /// Tuples are equal when they have the same arity and equal values.
    #[inline]
    fn eq(&self, other: &Tuple<U, M, D>) -> bool {
        N == M
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.to_wide() == b.to_wide())
    }
}

impl<T, const N: usize, C> Eq for Tuple<T, N, C>
where
    T: Scalar + Eq,
    C: Conversion,
{
}

impl<T, const N: usize, C> Hash for Tuple<T, N, C>
where
    T: Scalar + Hash,
    C: Conversion,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.components.hash(state);
    }
}

impl<T, const N: usize, C, U, const M: usize> From<[U; M]> for Tuple<T, N, C>
where
    T: Scalar,
    C: Conversion,
    U: Scalar,
{
    #[inline]
    fn from(source: [U; M]) -> Self {
        Self::from_components(&source)
    }
}

impl<T, const N: usize, C, U> From<&[U]> for Tuple<T, N, C>
where
    T: Scalar,
    C: Conversion,
    U: Scalar,
{
    #[inline]
    fn from(source: &[U]) -> Self {
        Self::from_components(source)
    }
}

impl<T, const N: usize, C, U> From<Vec<U>> for Tuple<T, N, C>
where
    T: Scalar,
    C: Conversion,
    U: Scalar,
{
    #[inline]
    fn from(source: Vec<U>) -> Self {
        Self::from_components(&source)
    }
}
