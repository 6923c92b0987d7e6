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

//! Interval membership predicates.
//!
//! The suffix names which ends are included: `closed` includes both bounds,
//! `open` excludes both, and the mixed forms name the lower end first.

/// Returns `true` if `lower <= value <= upper`.
///
/// ```rust
/// # use vcl_core::utils::range::in_range_closed;
/// assert!(in_range_closed(5, 5, 7));
/// assert!(in_range_closed(7, 5, 7));
/// assert!(!in_range_closed(8, 5, 7));
/// ```
#[inline]
pub fn in_range_closed<T: PartialOrd>(value: T, lower: T, upper: T) -> bool {
    lower <= value && value <= upper
}

/// Returns `true` if `lower <= value < upper`.
#[inline]
pub fn in_range_closed_open<T: PartialOrd>(value: T, lower: T, upper: T) -> bool {
    lower <= value && value < upper
}

/// Returns `true` if `lower < value <= upper`.
#[inline]
pub fn in_range_open_closed<T: PartialOrd>(value: T, lower: T, upper: T) -> bool {
    lower < value && value <= upper
}

/// Returns `true` if `lower < value < upper`.
#[inline]
pub fn in_range_open<T: PartialOrd>(value: T, lower: T, upper: T) -> bool {
    lower < value && value < upper
}
