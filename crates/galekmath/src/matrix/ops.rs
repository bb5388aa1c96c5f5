use std::ops::{Index, IndexMut, Mul, MulAssign};

use crate::{approx::ApproxEq, Matrix, Real, Vector};

impl<const N: usize> Index<(usize, usize)> for Matrix<N> {
    type Output = Real;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.0[col][row]
    }
}

impl<const N: usize> IndexMut<(usize, usize)> for Matrix<N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.0[col][row]
    }
}

/// Column-major linear indexing.
impl<const N: usize> Index<usize> for Matrix<N> {
    type Output = Real;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index / N][index % N]
    }
}

impl<const N: usize> IndexMut<usize> for Matrix<N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index / N][index % N]
    }
}

impl<const N: usize> ApproxEq for Matrix<N> {
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

/// Matrix * Column Vector.
impl<const N: usize> Mul<Vector<N>> for Matrix<N> {
    type Output = Vector<N>;

    fn mul(self, rhs: Vector<N>) -> Self::Output {
        Vector::from_fn(|row| (0..N).fold(0.0, |acc, col| acc + self.0[col][row] * rhs[col]))
    }
}

/// Matrix * Matrix.
///
/// The result applies `rhs` first, then `self`.
impl<const N: usize> Mul for Matrix<N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Matrix::from_fn(|i, j| (0..N).fold(0.0, |acc, k| acc + self.0[k][i] * rhs.0[j][k]))
    }
}

impl<const N: usize> MulAssign for Matrix<N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Matrix * Scalar.
impl<const N: usize> Mul<Real> for Matrix<N> {
    type Output = Self;

    fn mul(self, rhs: Real) -> Self {
        self.map(|elem| elem * rhs)
    }
}

impl<const N: usize> MulAssign<Real> for Matrix<N> {
    #[inline]
    fn mul_assign(&mut self, rhs: Real) {
        *self = *self * rhs;
    }
}
