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

//! # VCL Geom
//!
//! Two-dimensional geometry built on saturating tuples. Every coordinate is
//! stored through a `ClippedTuple`, so arithmetic that leaves `T`'s range
//! saturates instead of wrapping.
//!
//! ## Modules
//!
//! - `pos`, `offsets`, `dims`: two-component values with named accessors
//!   (`x/y`, `dx/dy`, `width/height`) and the full operator surface of the
//!   tuple core.
//! - `rect`: `Rect<T>` with inclusive edges, intersection and union,
//!   containment, insets and scaling around the center.
//! - `line`: `LineSegment<T>` with length, rescaling and translation.
//!
//! ## Example
//!
//! ```rust
//! use vcl_geom::prelude::*;
//!
//! let mut area = Rect::<u16>::new(10, 10, 100, 50);
//! area += Offsets::<i32>::new(-20, 5);
//! assert_eq!(area.top_left(), Pos::new(0, 15));
//! assert!(area.contains(&Pos::<i32>::new(99, 64)));
//! ```

mod planar;

pub mod dims;
pub mod line;
pub mod offsets;
pub mod pos;
pub mod rect;

/// Glob-importable set of the geometry types.
pub mod prelude {
    pub use crate::dims::Dims;
    pub use crate::line::LineSegment;
    pub use crate::offsets::Offsets;
    pub use crate::pos::Pos;
    pub use crate::rect::Rect;
    pub use vcl_vect::components::{Components, Operand};
}
