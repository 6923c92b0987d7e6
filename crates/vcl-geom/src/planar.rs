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

//! Shared shape of the two-component geometry types.
//!
//! `Pos`, `Offsets` and `Dims` differ only in the names of their two
//! components and a few extra methods, so their common surface is generated
//! here: constructors, named getters and setters, `Components`, the
//! elementwise operators and `Display`. Each type stores a
//! `ClippedTuple<T, 2>`, saturating every write to `T`'s range.

macro_rules! planar_type {
    (
        $(#[$meta:meta])*
        $name:ident { $first:ident / $set_first:ident, $second:ident / $set_second:ident }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
        pub struct $name<T>
        where
            T: ::vcl_core::num::Scalar,
        {
            pub(crate) coords: ::vcl_vect::tuple::ClippedTuple<T, 2>,
        }

        impl<T: ::vcl_core::num::Scalar> $name<T> {
            #[doc = concat!("Creates a `", stringify!($name), "` from two scalars of any types.")]
            #[inline]
            pub fn new<U: ::vcl_core::num::Scalar, V: ::vcl_core::num::Scalar>($first: U, $second: V) -> Self {
                Self::from_components(&($first, $second))
            }

            /// Creates a value with both components set to `value`.
            #[inline]
            pub fn splat<U: ::vcl_core::num::Scalar>(value: U) -> Self {
                Self {
                    coords: ::vcl_vect::tuple::ClippedTuple::splat(value),
                }
            }

            /// Creates a value from the first two components of `source`.
            #[inline]
            pub fn from_components<S: ::vcl_vect::components::Components + ?Sized>(source: &S) -> Self {
                Self {
                    coords: ::vcl_vect::tuple::ClippedTuple::from_components(source),
                }
            }

            /// Replaces both components from `source`, zero-filling past its end.
            #[inline]
            pub fn assign<S: ::vcl_vect::components::Components + ?Sized>(&mut self, source: &S) {
                self.coords.assign(source);
            }

            #[doc = concat!("Returns the `", stringify!($first), "` component.")]
            #[inline(always)]
            pub fn $first(&self) -> T {
                self.coords[0]
            }

            #[doc = concat!("Returns the `", stringify!($second), "` component.")]
            #[inline(always)]
            pub fn $second(&self) -> T {
                self.coords[1]
            }

            #[doc = concat!("Sets the `", stringify!($first), "` component, saturating to `T`'s range.")]
            #[inline]
            pub fn $set_first<U: ::vcl_core::num::Scalar>(&mut self, value: U) {
                self.coords.set(0, value);
            }

            #[doc = concat!("Sets the `", stringify!($second), "` component, saturating to `T`'s range.")]
            #[inline]
            pub fn $set_second<U: ::vcl_core::num::Scalar>(&mut self, value: U) {
                self.coords.set(1, value);
            }

            /// Borrows the underlying saturating tuple.
            #[inline]
            pub fn as_tuple(&self) -> &::vcl_vect::tuple::ClippedTuple<T, 2> {
                &self.coords
            }

            /// Returns the components as an unclipped tuple.
            #[inline]
            pub fn to_tuple(&self) -> ::vcl_vect::tuple::Tuple<T, 2> {
                self.coords.unclipped()
            }

            /// Converts to another scalar type, saturating to its range.
            #[inline]
            pub fn cast<U: ::vcl_core::num::Scalar>(&self) -> $name<U> {
                $name::from_components(self)
            }
        }

        impl<T: ::vcl_core::num::Scalar> ::vcl_vect::components::Components for $name<T> {
            #[inline]
            fn component_count(&self) -> usize {
                2
            }

            #[inline]
            fn component_at(&self, index: usize) -> Option<::vcl_core::num::Wide> {
                ::vcl_vect::components::Components::component_at(&self.coords, index)
            }
        }

        impl<T: ::vcl_core::num::Scalar> ::core::ops::Index<usize> for $name<T> {
            type Output = T;

            #[inline]
            fn index(&self, index: usize) -> &T {
                &self.coords[index]
            }
        }

        impl<T: ::vcl_core::num::Scalar> ::core::ops::Neg for $name<T> {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self { coords: -self.coords }
            }
        }

        impl<T: ::vcl_core::num::Scalar> ::core::fmt::Display for $name<T> {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Display::fmt(&self.coords, f)
            }
        }

        $crate::planar::planar_impl_op!($name, AddAssign, add_assign, Add, add, Add);
        $crate::planar::planar_impl_op!($name, SubAssign, sub_assign, Sub, sub, Sub);
        $crate::planar::planar_impl_op!($name, MulAssign, mul_assign, Mul, mul, Mul);
        $crate::planar::planar_impl_op!($name, DivAssign, div_assign, Div, div, Div);
    };
}

macro_rules! planar_impl_op {
    ($name:ident, $assign_trait:ident, $assign_method:ident, $trait_name:ident, $method:ident, $op:ident) => {
        impl<T, R> ::core::ops::$assign_trait<R> for $name<T>
        where
            T: ::vcl_core::num::Scalar,
            R: ::vcl_vect::components::Operand,
        {
            #[inline]
            fn $assign_method(&mut self, rhs: R) {
                self.coords.apply(::vcl_vect::ops::ElementOp::$op, &rhs);
            }
        }

        impl<T, R> ::core::ops::$trait_name<R> for $name<T>
        where
            T: ::vcl_core::num::Scalar,
            R: ::vcl_vect::components::Operand,
        {
            type Output = Self;

            #[inline]
            fn $method(mut self, rhs: R) -> Self {
                self.coords.apply(::vcl_vect::ops::ElementOp::$op, &rhs);
                self
            }
        }
    };
}

pub(crate) use planar_impl_op;
pub(crate) use planar_type;
