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

//! Text representation of tuples: `(c0, c1, ...)`.

use crate::tuple::{Conversion, Tuple};
use core::fmt;
use core::str::FromStr;
use vcl_core::num::{Scalar, Wide};

impl<T, const N: usize, C> fmt::Display for Tuple<T, N, C>
where
    T: Scalar,
    C: Conversion,
{
    /// Formats the components as `(c0, c1, ...)`.
    ///
    /// ```rust
    /// # use vcl_vect::accessors::{Vect2f, Vect3s};
    /// assert_eq!(Vect3s::from_xyz(1, -2, 3).to_string(), "(1, -2, 3)");
    /// assert_eq!(Vect2f::from_xy(0.5, 2).to_string(), "(0.5, 2)");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        for (index, component) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(&component, f)?;
        }
        f.write_str(")")
    }
}

/// Error returned when parsing a tuple literal fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseTupleError {
    /// The text is not enclosed in `(` and `)`.
    #[error("tuple literal must be enclosed in parentheses")]
    MissingParentheses,
    /// A component is not a decimal number.
    #[error("component {index} is not a number: {text:?}")]
    InvalidComponent { index: usize, text: String },
    /// The literal has more components than the tuple.
    #[error("expected at most {expected} components, found {found}")]
    TooManyComponents { expected: usize, found: usize },
}

impl<T, const N: usize, C> FromStr for Tuple<T, N, C>
where
    T: Scalar,
    C: Conversion,
{
    type Err = ParseTupleError;

    /// Parses `(c0, c1, ...)`.
    ///
    /// Values go through the tuple's conversion rule like any other source.
    /// Fewer than `N` values are zero-filled, more are rejected.
    ///
    /// ```rust
    /// # use vcl_vect::accessors::{ClipVect3b, Vect2s};
    /// let v: Vect2s = "(10, 11)".parse().unwrap();
    /// assert_eq!(v.to_array(), [10, 11]);
    ///
    /// let c: ClipVect3b = "(257, -1.5)".parse().unwrap();
    /// assert_eq!(c.to_array(), [255, 0, 0]);
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or(ParseTupleError::MissingParentheses)?
            .trim();

        let texts: Vec<&str> = if inner.is_empty() {
            Vec::new()
        } else {
            inner.split(',').map(str::trim).collect()
        };
        if texts.len() > N {
            return Err(ParseTupleError::TooManyComponents {
                expected: N,
                found: texts.len(),
            });
        }

        let values = texts
            .iter()
            .enumerate()
            .map(|(index, text)| {
                Wide::parse(text).ok_or_else(|| ParseTupleError::InvalidComponent {
                    index,
                    text: text.to_string(),
                })
            })
            .collect::<Result<Vec<Wide>, _>>()?;

        Ok(Self::from_fn(|index| {
            values.get(index).copied().unwrap_or(Wide::ZERO)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuple::ClippedTuple;

    #[test]
    fn test_display() {
        assert_eq!(Tuple::<i32, 2>::new([1, 2]).to_string(), "(1, 2)");
        assert_eq!(Tuple::<u8, 1>::new([7]).to_string(), "(7)");
        assert_eq!(Tuple::<f64, 0>::new([]).to_string(), "()");
        assert_eq!(ClippedTuple::<u8, 2>::splat(300_i32).to_string(), "(255, 255)");
    }

    #[test]
    fn test_parse_back_display() {
        let written = Tuple::<f32, 3>::new([0.5, -1.25, 3.0]);
        let parsed: Tuple<f32, 3> = written.to_string().parse().unwrap();
        assert_eq!(parsed, written);
    }

    #[test]
    fn test_parse_zero_fills() {
        let t: Tuple<i16, 3> = "( 4 )".parse().unwrap();
        assert_eq!(t.to_array(), [4, 0, 0]);
        let empty: Tuple<i16, 2> = "()".parse().unwrap();
        assert_eq!(empty.to_array(), [0, 0]);
    }

    #[test]
    fn test_parse_converts_natively() {
        let t: Tuple<u8, 2> = "(257, 2.9)".parse().unwrap();
        assert_eq!(t.to_array(), [1, 2]);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "1, 2".parse::<Tuple<i32, 2>>(),
            Err(ParseTupleError::MissingParentheses)
        );
        assert_eq!(
            "(1, x)".parse::<Tuple<i32, 2>>(),
            Err(ParseTupleError::InvalidComponent {
                index: 1,
                text: "x".to_string()
            })
        );
        assert_eq!(
            "(1, 2, 3)".parse::<Tuple<i32, 2>>(),
            Err(ParseTupleError::TooManyComponents {
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            "(1,,2)".parse::<Tuple<i32, 3>>(),
            Err(ParseTupleError::InvalidComponent {
                index: 1,
                text: String::new()
            })
        );
    }

    #[test]
    fn test_error_messages() {
        let err = ParseTupleError::TooManyComponents {
            expected: 2,
            found: 3,
        };
        assert_eq!(err.to_string(), "expected at most 2 components, found 3");
    }
}
