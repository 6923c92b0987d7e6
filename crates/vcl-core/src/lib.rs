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

//! # VCL Core
//!
//! Numeric foundations and small utilities for the vcl vector library. The
//! tuple and geometry crates build every component conversion on the scalar
//! model defined here.
//!
//! ## Modules
//!
//! - `num`: The `Scalar` trait over primitive numbers, the widened
//!   intermediate domain `Wide`, compile-time clipping bounds
//!   (`ClipBounds`, `TypeBounds`, `IntBounds`, `UnitBounds`) and the shared
//!   saturating conversion `clamp`.
//! - `utils`: Frame-rate typed timecodes, a performance meter and interval
//!   membership predicates.
//! - `log`: `debug!`/`trace!` macros backed by `tracing` when the `tracing`
//!   feature is enabled and compiled out otherwise.

pub mod log;
pub mod num;
pub mod utils;
