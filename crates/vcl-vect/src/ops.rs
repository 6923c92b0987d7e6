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

//! Elementwise arithmetic.
//!
//! Every operator funnels into [`Tuple::apply`] with one [`ElementOp`]:
//!
//! - `tuple op operand` and `tuple op= operand` for any [`Operand`]: a
//!   scalar, an array, slice or vector, a Rust tuple of scalars, another
//!   `Tuple` of any type and arity, or a derived geometry type,
//! - `scalar + tuple` and `scalar * tuple` (commuted),
//! - `scalar - tuple` and `scalar / tuple`, evaluated as the scalar broadcast
//!   to a tuple of the right-hand type, then combined,
//! - unary `-`, evaluated as `zero() - tuple`,
//! - `array op= tuple` and `vec op= tuple` for primitive element types, which
//!   update the prefix both sides share with native `as` narrowing.
//!
//! Each step is computed in the widened domain and stored through the
//! tuple's conversion rule, so clipped tuples saturate after every operation.

use crate::components::Operand;
use crate::tuple::{Conversion, Tuple};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};
use vcl_core::log::debug;
use vcl_core::num::{Scalar, Wide};

/// One elementwise arithmetic step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ElementOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ElementOp {
    /// Evaluates `lhs op rhs`, or `None` for a division by zero.
    ///
    /// ```rust
    /// # use vcl_core::num::Wide;
    /// # use vcl_vect::ops::ElementOp;
    /// assert_eq!(ElementOp::Sub.eval(Wide::Int(3), Wide::Int(5)), Some(Wide::Int(-2)));
    /// assert_eq!(ElementOp::Div.eval(Wide::Int(3), Wide::Float(0.0)), None);
    /// ```
    #[inline(always)]
    pub fn eval(self, lhs: Wide, rhs: Wide) -> Option<Wide> {
        match self {
            ElementOp::Add => Some(lhs + rhs),
            ElementOp::Sub => Some(lhs - rhs),
            ElementOp::Mul => Some(lhs * rhs),
            ElementOp::Div => lhs.checked_div(rhs),
        }
    }
}

macro_rules! tuple_impl_elementwise_op {
    ($assign_trait:ident, $assign_method:ident, $trait_name:ident, $method:ident, $op:expr) => {
        impl<T, const N: usize, C, R> $assign_trait<R> for Tuple<T, N, C>
        where
            T: Scalar,
            C: Conversion,
            R: Operand,
        {
            #[inline]
            fn $assign_method(&mut self, rhs: R) {
                self.apply($op, &rhs);
            }
        }

        impl<T, const N: usize, C, R> $trait_name<R> for Tuple<T, N, C>
        where
            T: Scalar,
            C: Conversion,
            R: Operand,
        {
            type Output = Self;

            #[inline]
            fn $method(mut self, rhs: R) -> Self {
                self.apply($op, &rhs);
                self
            }
        }
    };
}

tuple_impl_elementwise_op!(AddAssign, add_assign, Add, add, ElementOp::Add);
tuple_impl_elementwise_op!(SubAssign, sub_assign, Sub, sub, ElementOp::Sub);
tuple_impl_elementwise_op!(MulAssign, mul_assign, Mul, mul, ElementOp::Mul);
tuple_impl_elementwise_op!(DivAssign, div_assign, Div, div, ElementOp::Div);

macro_rules! tuple_impl_scalar_lhs_ops {
    ($($t:ty),*) => {
        $(
            impl<T: Scalar, const N: usize, C: Conversion> Add<Tuple<T, N, C>> for $t {
                type Output = Tuple<T, N, C>;

                #[inline]
                fn add(self, rhs: Tuple<T, N, C>) -> Tuple<T, N, C> {
                    rhs + self
                }
            }

            impl<T: Scalar, const N: usize, C: Conversion> Sub<Tuple<T, N, C>> for $t {
                type Output = Tuple<T, N, C>;

                #[inline]
                fn sub(self, rhs: Tuple<T, N, C>) -> Tuple<T, N, C> {
                    Tuple::<T, N, C>::splat(self) - rhs
                }
            }

            impl<T: Scalar, const N: usize, C: Conversion> Mul<Tuple<T, N, C>> for $t {
                type Output = Tuple<T, N, C>;

                #[inline]
                fn mul(self, rhs: Tuple<T, N, C>) -> Tuple<T, N, C> {
                    rhs * self
                }
            }

            impl<T: Scalar, const N: usize, C: Conversion> Div<Tuple<T, N, C>> for $t {
                type Output = Tuple<T, N, C>;

                #[inline]
                fn div(self, rhs: Tuple<T, N, C>) -> Tuple<T, N, C> {
                    Tuple::<T, N, C>::splat(self) / rhs
                }
            }
        )*
    };
}

tuple_impl_scalar_lhs_ops!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Applies `op` to the shared prefix of a primitive slice, storing natively.
fn apply_to_slice<U: Scalar, R: Operand + ?Sized>(op: ElementOp, lhs: &mut [U], rhs: &R) {
    for (index, component) in lhs.iter_mut().enumerate() {
        let Some(operand) = rhs.operand_at(index) else {
            break;
        };
        match op.eval(component.to_wide(), operand) {
            Some(result) => *component = U::from_wide(result),
            None => {
                debug!("division by zero left element {} unchanged", index);
            }
        }
    }
}

macro_rules! slice_impl_assign_op {
    ($assign_trait:ident, $assign_method:ident, $op:expr, $($t:ty),*) => {
        $(
            impl<T, const N: usize, C, const M: usize> $assign_trait<Tuple<T, N, C>> for [$t; M]
            where
                T: Scalar,
                C: Conversion,
            {
                #[inline]
                fn $assign_method(&mut self, rhs: Tuple<T, N, C>) {
                    apply_to_slice($op, self, &rhs);
                }
            }

            impl<T, const N: usize, C> $assign_trait<Tuple<T, N, C>> for Vec<$t>
            where
                T: Scalar,
                C: Conversion,
            {
                #[inline]
                fn $assign_method(&mut self, rhs: Tuple<T, N, C>) {
                    apply_to_slice($op, self, &rhs);
                }
            }
        )*
    };
}

macro_rules! slice_impl_assign_ops {
    ($($t:ty),*) => {
        slice_impl_assign_op!(AddAssign, add_assign, ElementOp::Add, $($t),*);
        slice_impl_assign_op!(SubAssign, sub_assign, ElementOp::Sub, $($t),*);
        slice_impl_assign_op!(MulAssign, mul_assign, ElementOp::Mul, $($t),*);
        slice_impl_assign_op!(DivAssign, div_assign, ElementOp::Div, $($t),*);
    };
}

slice_impl_assign_ops!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl<T, const N: usize, C> Neg for Tuple<T, N, C>
where
    T: Scalar,
    C: Conversion,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::zero() - self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuple::ClippedTuple;
    use vcl_core::num::{IntBounds, UnitBounds};

    type T2s = Tuple<i16, 2>;
    type T3s = Tuple<i16, 3>;
    type C2b = ClippedTuple<u8, 2>;

    #[test]
    fn test_add_scalar_and_tuple() {
        let t = T2s::new([10, 11]);
        assert_eq!((t + T2s::splat(5_i32)).to_array(), [15, 16]);
        assert_eq!((t + 5_i64).to_array(), [15, 16]);
        assert_eq!((5_u8 + t).to_array(), [15, 16]);
    }

    #[test]
    fn test_in_place_shortfall_leaves_trailing_components() {
        let mut p = T3s::new([10, 11, 12]);
        p += 8_i32;
        p += [15_i16, 15];
        assert_eq!(p.to_array(), [33, 34, 20]);
        p += vec![10_i32];
        assert_eq!(p.to_array(), [43, 34, 20]);
        p -= (3_u8, 4.5_f32, 1_i8, 99_i8);
        assert_eq!(p.to_array(), [40, 29, 19]);
    }

    #[test]
    fn test_binary_ops_return_new_values() {
        let a = T2s::new([6, 8]);
        let b = a * 2_i32;
        assert_eq!(a.to_array(), [6, 8]);
        assert_eq!(b.to_array(), [12, 16]);
        assert_eq!((a - b).to_array(), [-6, -8]);
        assert_eq!((b / a).to_array(), [2, 2]);
    }

    #[test]
    fn test_mixed_scalar_types_compute_wide() {
        let t = Tuple::<i32, 2>::new([10, 7]);
        assert_eq!((t * 0.5_f64).to_array(), [5, 3]);
        assert_eq!((t / 0.5_f32).to_array(), [20, 14]);
        assert_eq!((t + (-2.5_f64)).to_array(), [7, 4]);
    }

    #[test]
    fn test_division_by_zero_is_skipped() {
        let mut t = Tuple::<i32, 3>::new([10, 20, 30]);
        t /= [2_i32, 0, 5];
        assert_eq!(t.to_array(), [5, 20, 6]);
        t /= 0_i32;
        assert_eq!(t.to_array(), [5, 20, 6]);

        let mut f = Tuple::<f32, 2>::new([1.0, 2.0]);
        f /= [0.0_f64, 4.0];
        assert_eq!(f.to_array(), [1.0, 0.5]);
        assert!(f.iter().all(|c| c.is_finite()));
    }

    #[test]
    fn test_scalar_minus_tuple() {
        let t = T2s::new([3, 4]);
        assert_eq!((10_i32 - t).to_array(), [7, 6]);
        assert_eq!((12_i32 / t).to_array(), [4, 3]);
        assert_eq!((12_i32 / T2s::new([0, 4])).to_array(), [12, 3]);
    }

    #[test]
    fn test_negation() {
        let t = T2s::new([3, -4]);
        assert_eq!((-t).to_array(), [-3, 4]);
        assert_eq!((-C2b::new([3, 0])).to_array(), [0, 0]);
        assert_eq!((-Tuple::<u8, 1>::new([1])).to_array(), [255]);
    }

    #[test]
    fn test_native_wraparound() {
        let t = Tuple::<u8, 2>::new([250, 5]);
        assert_eq!((t + 10_i32).to_array(), [4, 15]);
        assert_eq!((t - 10_i32).to_array(), [240, 251]);
    }

    #[test]
    fn test_clipped_arithmetic_saturates() {
        let t = C2b::new([250, 5]);
        assert_eq!((t + 10_i32).to_array(), [255, 15]);
        assert_eq!((t - 10_i32).to_array(), [240, 0]);
        assert_eq!((t * 2.5_f64).to_array(), [255, 12]);
        assert_eq!((t * -1_i32).to_array(), [0, 0]);
    }

    #[test]
    fn test_clipped_custom_bounds() {
        let mut t = ClippedTuple::<u8, 2, IntBounds<13, 19>>::new([16, 16]);
        t += 2_i32;
        assert_eq!(t.to_array(), [18, 18]);
        t += 2_i32;
        assert_eq!(t.to_array(), [19, 19]);
        t -= 100_i32;
        assert_eq!(t.to_array(), [13, 13]);

        let mut unit = ClippedTuple::<f64, 2, UnitBounds>::new([0.8, 0.5]);
        unit += 0.25_f64;
        assert_eq!(unit.to_array(), [1.0, 0.75]);
    }

    #[test]
    fn test_mixed_arity_operands() {
        let mut t = Tuple::<i16, 2>::new([1, 2]);
        t += Tuple::<f32, 3>::new([0.5, 1.5, 100.0]);
        assert_eq!(t.to_array(), [1, 3]);

        let mut long = Tuple::<i16, 4>::new([1, 1, 1, 1]);
        long *= Tuple::<i64, 2>::new([5, 6]);
        assert_eq!(long.to_array(), [5, 6, 1, 1]);
    }

    #[test]
    fn test_clipped_operands_add_into_native() {
        let mut native = Tuple::<i32, 2>::new([-100, 100]);
        native += C2b::splat(300_i32);
        assert_eq!(native.to_array(), [155, 355]);
    }

    #[test]
    fn test_chained_mixed_operations() {
        let a = Tuple::<i32, 2>::new([1, 2]);
        let b = Tuple::<i64, 2>::new([10, 20]);
        let c = Tuple::<u8, 2>::new([3, 4]);
        let left = (a + b) + c;
        let right = a + (b + c).cast::<i32, 2>();
        assert_eq!(left, right);
        assert_eq!(left.to_array(), [14, 26]);
    }

    #[test]
    fn test_chained_operations_across_arities() {
        let a = Tuple::<i32, 4>::new([1, 2, 3, 4]);
        let b = Tuple::<i64, 3>::new([10, 20, 30]);
        let c = [100_u8, 101];
        let left = (a + b) + c;
        let right = a + (b + c);
        assert_eq!(left, right);
        assert_eq!(left.to_array(), [111, 123, 33, 4]);
    }

    #[test]
    fn test_clipped_chain_saturates_at_every_step() {
        let t = ClippedTuple::<u8, 1>::new([250]);
        let ten = ClippedTuple::<u8, 1>::new([10]);
        assert_eq!(((t + ten) - ten).to_array(), [245]);
        assert_eq!((t + (ten - ten)).to_array(), [250]);
    }

    #[test]
    fn test_products_beyond_i128_saturate_when_clipped() {
        let clipped = ClippedTuple::<u64, 1>::new([u64::MAX]);
        assert_eq!((clipped * u64::MAX).to_array(), [u64::MAX]);

        let native = Tuple::<u64, 1>::new([u64::MAX]);
        assert_eq!((native * u64::MAX).to_array(), [1]);

        let pair = ClippedTuple::<u64, 2>::new([u64::MAX, 2]);
        assert_eq!((pair * [u64::MAX, u64::MAX]).to_array(), [u64::MAX, u64::MAX]);
    }

    #[test]
    fn test_array_and_vec_update_from_tuple() {
        let t = Tuple::<i32, 3>::new([10, 20, 30]);

        let mut short = [1_u8, 2];
        short += t;
        assert_eq!(short, [11, 22]);

        let mut long = [100.0_f64, 100.0, 100.0, 100.0];
        long -= t;
        assert_eq!(long, [90.0, 80.0, 70.0, 100.0]);

        let mut values = vec![250_u8, 3, 4];
        values *= ClippedTuple::<u8, 2>::new([2, 3]);
        assert_eq!(values, vec![244, 9, 4]);

        let mut divided = vec![7_i16, 8];
        divided /= Tuple::<i32, 2>::new([0, 2]);
        assert_eq!(divided, vec![7, 4]);
    }

    #[test]
    fn test_empty_sequence_operand_is_a_no_op() {
        let empty: Vec<i32> = Vec::new();
        let mut t = T2s::new([1, 2]);
        t += &empty;
        t /= &empty[..];
        assert_eq!(t.to_array(), [1, 2]);
    }
}
