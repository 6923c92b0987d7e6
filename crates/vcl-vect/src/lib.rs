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

//! # VCL Vect
//!
//! Fixed-size numeric tuples with elementwise arithmetic across scalar types
//! and arities.
//!
//! ## Modules
//!
//! - `tuple`: `Tuple<T, N, C>`, the value type, and `ClippedTuple<T, N, B>`,
//!   its saturating form. The conversion rule (`Native` or `Clipped<B>`) is
//!   part of the type.
//! - `components`: The `Components` source trait (arrays, slices, vectors,
//!   Rust tuples, tuples, geometry types) and the `Operand` trait that adds
//!   scalar broadcasting for operators.
//! - `ops`: `+ - * /`, their assigning forms, commuted scalar forms and
//!   negation, all evaluated in the widened domain with zero-divisor skipping.
//! - `accessors`: `XY`, `XYZ`, `XYZW` named accessors and the `Vect2/3/4`,
//!   `ClipVect2/3/4` aliases with their scalar shortcuts.
//! - `repr`: `Display` as `(c0, c1, ...)` and the matching `FromStr`.
//!
//! ## Example
//!
//! ```rust
//! use vcl_vect::prelude::*;
//!
//! let mut p = Vect2s::from_xy(10, 11);
//! p += 8_i32;
//! p += Vect2s::from_xy(15, 15);
//! assert_eq!(p.to_string(), "(33, 34)");
//!
//! let mut c = ClipVect2b::from_components(&p);
//! c *= 10_i32;
//! assert_eq!((c.x(), c.y()), (255, 255));
//! ```

pub mod accessors;
pub mod components;
pub mod ops;
pub mod repr;
pub mod tuple;

/// Glob-importable set of the commonly used items.
pub mod prelude {
    pub use crate::accessors::*;
    pub use crate::components::{Components, Operand};
    pub use crate::ops::ElementOp;
    pub use crate::repr::ParseTupleError;
    pub use crate::tuple::{Clipped, ClippedTuple, Conversion, Native, Tuple};
    pub use vcl_core::num::{ClipBounds, IntBounds, Scalar, TypeBounds, UnitBounds, Wide};
}
