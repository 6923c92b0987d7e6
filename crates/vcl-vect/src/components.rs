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

//! Sources of components.
//!
//! [`Components`] abstracts over anything that yields an ordered run of
//! scalar values: arrays, slices, vectors, Rust tuples of scalars, other
//! [`Tuple`](crate::tuple::Tuple)s and the derived geometry types. Values are
//! yielded already widened, so a source may mix scalar types freely.
//!
//! [`Operand`] is the right-hand side of an elementwise operator. Every
//! component source is an operand covering its own length; every primitive
//! scalar is an operand broadcast to all components.

use vcl_core::num::{Scalar, Wide};

/// An ordered, finite run of scalar components.
///
/// # Examples
///
/// ```rust
/// # use vcl_core::num::Wide;
/// # use vcl_vect::components::Components;
/// let source = (3_u8, -1.5_f32);
/// assert_eq!(source.component_count(), 2);
/// assert_eq!(source.component_at(0), Some(Wide::Int(3)));
/// assert_eq!(source.component_at(1), Some(Wide::Float(-1.5)));
/// assert_eq!(source.component_at(2), None);
/// ```
pub trait Components {
    /// Number of components the source yields.
    fn component_count(&self) -> usize;

    /// Returns the widened component at `index`, or `None` past the end.
    fn component_at(&self, index: usize) -> Option<Wide>;
}

impl<U: Scalar, const M: usize> Components for [U; M] {
    #[inline]
    fn component_count(&self) -> usize {
        M
    }

    #[inline]
    fn component_at(&self, index: usize) -> Option<Wide> {
        self.get(index).map(|value| value.to_wide())
    }
}

impl<U: Scalar> Components for [U] {
    #[inline]
    fn component_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn component_at(&self, index: usize) -> Option<Wide> {
        self.get(index).map(|value| value.to_wide())
    }
}

impl<U: Scalar> Components for Vec<U> {
    #[inline]
    fn component_count(&self) -> usize {
        self.len()
    }

    #[inline]
    fn component_at(&self, index: usize) -> Option<Wide> {
        self.as_slice().component_at(index)
    }
}

impl<S: Components + ?Sized> Components for &S {
    #[inline]
    fn component_count(&self) -> usize {
        (**self).component_count()
    }

    #[inline]
    fn component_at(&self, index: usize) -> Option<Wide> {
        (**self).component_at(index)
    }
}

macro_rules! components_impl_tuple {
    ($len:literal; $($name:ident $idx:tt),+) => {
        impl<$($name: Scalar),+> Components for ($($name,)+) {
            #[inline]
            fn component_count(&self) -> usize {
                $len
            }

            #[inline]
            fn component_at(&self, index: usize) -> Option<Wide> {
                match index {
                    $($idx => Some(self.$idx.to_wide()),)+
                    _ => None,
                }
            }
        }
    };
}

components_impl_tuple!(1; A 0);
components_impl_tuple!(2; A 0, B 1);
components_impl_tuple!(3; A 0, B 1, C 2);
components_impl_tuple!(4; A 0, B 1, C 2, D 3);

/// The right-hand side of an elementwise operation.
///
/// `operand_at` returns the value to combine with component `index`. A
/// `None` ends the operation: the remaining left-hand components keep their
/// values.
pub trait Operand {
    /// Returns the widened value paired with component `index`.
    fn operand_at(&self, index: usize) -> Option<Wide>;
}

impl<S: Components + ?Sized> Operand for S {
    #[inline(always)]
    fn operand_at(&self, index: usize) -> Option<Wide> {
        self.component_at(index)
    }
}

macro_rules! operand_impl_scalar {
    ($($t:ty),*) => {
        $(
            impl Operand for $t {
                #[inline(always)]
                fn operand_at(&self, _index: usize) -> Option<Wide> {
                    Some(self.to_wide())
                }
            }
        )*
    };
}

operand_impl_scalar!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
