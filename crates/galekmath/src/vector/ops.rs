//! Implementations of `std::ops`.

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use crate::{approx::ApproxEq, Real};

use super::Vector;

impl<const N: usize> Index<usize> for Vector<N> {
    type Output = Real;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<const N: usize> IndexMut<usize> for Vector<N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<const N: usize> PartialEq<[Real; N]> for Vector<N> {
    fn eq(&self, other: &[Real; N]) -> bool {
        self.0 == *other
    }
}

impl<const N: usize> PartialEq<Vector<N>> for [Real; N] {
    fn eq(&self, other: &Vector<N>) -> bool {
        *self == other.0
    }
}

impl<const N: usize> ApproxEq for Vector<N> {
    fn abs_diff_eq(&self, other: &Self, tolerance: Real) -> bool {
        self.0.abs_diff_eq(&other.0, tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: Real) -> bool {
        self.0.rel_diff_eq(&other.0, tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, max_ulps: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, max_ulps)
    }
}

impl<const N: usize> Neg for Vector<N> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.map(Real::neg)
    }
}

// Element-wise vector-vector operators, plus their assigning forms.
macro_rules! elementwise {
    ($($trait:ident::$method:ident, $assign:ident::$assign_method:ident, $op:tt;)+) => {$(
        impl<const N: usize> $trait for Vector<N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                self.zip(rhs, |l, r| l $op r)
            }
        }

        impl<const N: usize> $assign for Vector<N> {
            #[inline]
            fn $assign_method(&mut self, rhs: Self) {
                *self = self.zip(rhs, |l, r| l $op r);
            }
        }
    )+};
}

elementwise! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
    Mul::mul, MulAssign::mul_assign, *;
    Div::div, DivAssign::div_assign, /;
}

// Vector-scalar operators. Adding a scalar offsets every element.
macro_rules! scalar {
    ($($trait:ident::$method:ident, $assign:ident::$assign_method:ident, $op:tt;)+) => {$(
        impl<const N: usize> $trait<Real> for Vector<N> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Real) -> Self {
                self.map(|elem| elem $op rhs)
            }
        }

        impl<const N: usize> $assign<Real> for Vector<N> {
            #[inline]
            fn $assign_method(&mut self, rhs: Real) {
                self.as_mut_slice().iter_mut().for_each(|elem| *elem = *elem $op rhs);
            }
        }
    )+};
}

scalar! {
    Add::add, AddAssign::add_assign, +;
    Sub::sub, SubAssign::sub_assign, -;
    Mul::mul, MulAssign::mul_assign, *;
    Div::div, DivAssign::div_assign, /;
}

/// Scalar-Vector multiplication (scaling).
impl<const N: usize> Mul<Vector<N>> for Real {
    type Output = Vector<N>;

    #[inline]
    fn mul(self, rhs: Vector<N>) -> Vector<N> {
        rhs.map(|elem| self * elem)
    }
}

/// Divides the scalar by each element of the vector.
///
/// # Examples
///
/// ```
/// # use galekmath::*;
/// assert_eq!(1.0 / vec2(2.0, 4.0), vec2(0.5, 0.25));
/// ```
impl<const N: usize> Div<Vector<N>> for Real {
    type Output = Vector<N>;

    #[inline]
    fn div(self, rhs: Vector<N>) -> Vector<N> {
        rhs.map(|elem| self / elem)
    }
}
