use std::ops::{Index, IndexMut, Mul, MulAssign, Neg};

use crate::{approx::ApproxEq, Quat, Real};

/// The Hamilton product.
///
/// `a * b` represents the rotation `b` followed by the rotation `a`.
impl Mul for Quat {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let [x, y, z, w] = self.vec.into_array();
        let [bx, by, bz, bw] = rhs.vec.into_array();
        Quat::from_components(
            w * bx + x * bw + y * bz - z * by,
            w * by + y * bw + z * bx - x * bz,
            w * bz + z * bw + x * by - y * bx,
            w * bw - x * bx - y * by - z * bz,
        )
    }
}

impl MulAssign for Quat {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

/// Negates all 4 components. The result represents the same rotation.
impl Neg for Quat {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Quat::from_vec(-self.vec)
    }
}

/// Components in `x`, `y`, `z`, `w` order.
impl Index<usize> for Quat {
    type Output = Real;

    #[inline]
    fn index(&self, index: usize) -> &Real {
        &self.vec[index]
    }
}

impl IndexMut<usize> for Quat {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Real {
        &mut self.vec[index]
    }
}

impl ApproxEq for Quat {
    fn abs_diff_eq(&self, other: &Self, tolerance: Real) -> bool {
        self.vec.abs_diff_eq(&other.vec, tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: Real) -> bool {
        self.vec.rel_diff_eq(&other.vec, tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, max_ulps: u32) -> bool {
        self.vec.ulps_diff_eq(&other.vec, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec3, Mat3, Vec3};

    use super::*;

    #[test]
    fn identity() {
        let q = Quat::from_components(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q * Quat::IDENTITY, q);
        assert_eq!(Quat::IDENTITY * q, q);
    }

    #[test]
    fn basis_products() {
        let i = Quat::from_components(1.0, 0.0, 0.0, 0.0);
        let j = Quat::from_components(0.0, 1.0, 0.0, 0.0);
        let k = Quat::from_components(0.0, 0.0, 1.0, 0.0);
        let minus_one = Quat::from_components(0.0, 0.0, 0.0, -1.0);

        assert_eq!(i * i, minus_one);
        assert_eq!(i * j, k);
        assert_eq!(j * k, i);
        assert_eq!(k * i, j);
        assert_eq!(j * i, -k);
        assert_eq!(i * j * k, minus_one);
    }

    #[test]
    fn composes_like_matrices() {
        let a = Quat::from_axis_angle(40.0, vec3(1.0, 2.0, 0.5));
        let b = Quat::from_axis_angle(-75.0, Vec3::Y);
        assert_approx_eq!((a * b).to_matrix(), a.to_matrix() * b.to_matrix()).abs(1e-5);

        let v = vec3(1.0, 0.0, -2.0);
        assert_approx_eq!((a * b).rotate(v), a.rotate(b.rotate(v))).abs(1e-5);

        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
    }

    #[test]
    fn conjugate_is_inverse() {
        let q = Quat::from_axis_angle(123.0, vec3(-1.0, 0.5, 2.0));
        assert_approx_eq!(q * q.conjugate(), Quat::IDENTITY);
        assert_approx_eq!((q * q.conjugate()).to_matrix(), Mat3::IDENTITY);
    }

    #[test]
    fn index() {
        let mut q = Quat::from_components(1.0, 2.0, 3.0, 4.0);
        assert_eq!(q[0], 1.0);
        assert_eq!(q[3], 4.0);
        q[1] = -2.0;
        assert_eq!(q.y, -2.0);
    }
}
