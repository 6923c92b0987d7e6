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

//! # Numeric Foundations
//!
//! The scalar model every tuple and geometry type is built on.
//!
//! ## Submodules
//!
//! - `wide`: The widened intermediate domain (`Wide`): `i128` for integers,
//!   `f64` for floating values, promotion to `f64` when both meet.
//! - `scalar`: The `Scalar` trait, implemented for the primitive integer and
//!   floating types, with native `as`-style narrowing.
//! - `clamp`: Compile-time bounds markers (`ClipBounds`, `TypeBounds`,
//!   `IntBounds`, `UnitBounds`, the `clip_bounds!` macro) and the single
//!   saturating conversion primitive `clamp`.
//!
//! ## Motivation
//!
//! Components of mixed scalar types meet constantly: a `u8` color tuple is
//! scaled by an `f32`, a `i16` position is offset by an `i64`. Routing every
//! step through one widened domain keeps the results independent of the order
//! in which the types meet, and gives saturating types one place to clamp.

pub mod clamp;
pub mod scalar;
pub mod wide;

pub use clamp::{ClipBounds, IntBounds, TypeBounds, UnitBounds, clamp};
pub use scalar::Scalar;
pub use wide::Wide;
