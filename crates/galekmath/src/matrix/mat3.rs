use std::ops::Mul;

use crate::{scalar, Mat3, Mat4, Matrix, Real, Vec3, Vec4};

impl Matrix<3> {
    /// Returns the [determinant] of the matrix.
    ///
    /// [determinant]: https://en.wikipedia.org/wiki/Determinant
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// #[rustfmt::skip]
    /// let m = Mat3::from_rows([
    ///     [-2.0, -1.0,  2.0],
    ///     [ 2.0,  1.0,  4.0],
    ///     [-3.0,  3.0, -1.0],
    /// ]);
    /// assert_eq!(m.determinant(), 54.0);
    /// ```
    pub fn determinant(&self) -> Real {
        let e = self.as_array();
        e[0] * e[4] * e[8] + e[3] * e[7] * e[2] + e[6] * e[1] * e[5]
            - e[6] * e[4] * e[2]
            - e[3] * e[1] * e[8]
            - e[0] * e[7] * e[5]
    }

    /// Inverts this matrix via its adjugate.
    ///
    /// The determinant is not checked: a singular matrix produces infinite or `NaN` elements. Use
    /// [`Mat3::try_inverse`] when the input is not known to be invertible.
    pub fn inverse(&self) -> Self {
        let e = self.as_array();
        let inv_det = 1.0 / self.determinant();

        #[rustfmt::skip]
        let adjugate = [
            e[4] * e[8] - e[7] * e[5],
            -(e[1] * e[8] - e[7] * e[2]),
            e[1] * e[5] - e[4] * e[2],

            -(e[3] * e[8] - e[6] * e[5]),
            e[0] * e[8] - e[6] * e[2],
            -(e[0] * e[5] - e[3] * e[2]),

            e[3] * e[7] - e[6] * e[4],
            -(e[0] * e[7] - e[6] * e[1]),
            e[0] * e[4] - e[3] * e[1],
        ];
        Self::from(adjugate) * inv_det
    }

    /// Inverts this matrix, or returns [`None`] if it is singular.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let m = Mat3::scale(vec3(2.0, 4.0, 8.0));
    /// assert_eq!(m.try_inverse(), Some(Mat3::scale(vec3(0.5, 0.25, 0.125))));
    /// assert_eq!(Mat3::ZERO.try_inverse(), None);
    /// ```
    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            log::trace!("matrix with determinant {det} is not invertible: {self:?}");
            return None;
        }
        Some(self.inverse())
    }

    /// Creates a rotation of `degrees` around `axis`, following the right-hand rule.
    ///
    /// `axis` is expected to have unit length. It is not normalized; a non-unit axis yields a
    /// matrix that also scales and shears.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let m = Mat3::rotate(90.0, Vec3::Z);
    /// assert_approx_eq!(m * Vec3::X, Vec3::Y);
    /// assert_approx_eq!(m * Vec3::Y, -Vec3::X);
    /// ```
    pub fn rotate(degrees: Real, axis: Vec3) -> Self {
        let (s, c) = scalar::degrees_to_radians(degrees).sin_cos();
        let t = 1.0 - c;
        let [ux, uy, uz] = axis.into_array();

        Self::from_columns([
            [c + t * ux * ux, t * ux * uy + s * uz, t * ux * uz - s * uy],
            [t * uy * ux - s * uz, c + t * uy * uy, t * uy * uz + s * ux],
            [t * uz * ux + s * uy, t * uz * uy - s * ux, c + t * uz * uz],
        ])
    }

    /// Creates a matrix scaling each axis by the matching element of `scale`.
    #[inline]
    pub fn scale(scale: Vec3) -> Self {
        Self::from_diagonal(scale)
    }

    /// Views the matrix as its 9 elements in column-major order.
    #[inline]
    pub fn as_array(&self) -> &[Real; 9] {
        bytemuck::cast_ref(self)
    }

    /// Views the matrix as its 9 mutable elements in column-major order.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [Real; 9] {
        bytemuck::cast_mut(self)
    }
}

/// Column-major elements.
impl From<[Real; 9]> for Mat3 {
    #[inline]
    fn from(elements: [Real; 9]) -> Self {
        bytemuck::cast(elements)
    }
}

impl From<Mat3> for [Real; 9] {
    #[inline]
    fn from(m: Mat3) -> Self {
        bytemuck::cast(m)
    }
}

/// Takes the upper-left 3x3 block, which holds rotation and scale.
impl From<Mat4> for Mat3 {
    fn from(m: Mat4) -> Self {
        Self::from_fn(|row, col| m[(row, col)])
    }
}

/// Transforms the `xyz` part of `rhs`, passing `w` through unchanged.
impl Mul<Vec4> for Mat3 {
    type Output = Vec4;

    fn mul(self, rhs: Vec4) -> Vec4 {
        (self * rhs.xyz()).extend(rhs.w)
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec3, vec4, Mat4};

    use super::*;

    #[rustfmt::skip]
    fn sample() -> Mat3 {
        Mat3::from_rows([
            [ 2.0, -1.0, 0.5],
            [ 0.0,  3.0, 1.0],
            [-1.0,  0.0, 4.0],
        ])
    }

    #[test]
    fn determinant() {
        assert_eq!(Mat3::ZERO.determinant(), 0.0);
        assert_eq!(Mat3::IDENTITY.determinant(), 1.0);
        assert_eq!(sample().determinant(), sample().transpose().determinant());
        assert_approx_eq!(Mat3::rotate(33.0, vec3(0.0, 0.6, 0.8)).determinant(), 1.0);
    }

    #[test]
    fn inverse() {
        let m = sample();
        assert_approx_eq!(m * m.inverse(), Mat3::IDENTITY);
        assert_approx_eq!(m.inverse() * m, Mat3::IDENTITY);
        assert_eq!(Mat3::IDENTITY.inverse(), Mat3::IDENTITY);
    }

    #[test]
    fn singular_inverse() {
        #[rustfmt::skip]
        let singular = Mat3::from_rows([
            [1.0, 2.0, 3.0],
            [2.0, 4.0, 6.0],
            [0.0, 1.0, 1.0],
        ]);
        assert_eq!(singular.determinant(), 0.0);
        assert!(singular.try_inverse().is_none());
        assert!(singular
            .inverse()
            .as_array()
            .iter()
            .any(|e| !e.is_finite()));
    }

    #[test]
    fn rotate() {
        let m = Mat3::rotate(90.0, Vec3::Z);
        assert_approx_eq!(m * Vec3::X, Vec3::Y);
        assert_approx_eq!(Mat3::rotate(90.0, Vec3::X) * Vec3::Y, Vec3::Z);
        assert_approx_eq!(Mat3::rotate(90.0, Vec3::Y) * Vec3::Z, Vec3::X);
        assert_approx_eq!(Mat3::rotate(-90.0, Vec3::Y) * Vec3::X, Vec3::Z);

        // Rotations are orthonormal, so the inverse is the transpose.
        let r = Mat3::rotate(47.0, vec3(1.0, 2.0, 2.0) / 3.0);
        assert_approx_eq!(r.inverse(), r.transpose()).abs(1e-5);

        // The axis is an eigenvector.
        let axis = vec3(1.0, 2.0, 2.0) / 3.0;
        assert_approx_eq!(r * axis, axis).abs(1e-5);
    }

    #[test]
    fn scale() {
        let m = Mat3::scale(vec3(1.0, 2.0, 3.0));
        assert_eq!(m * vec3(1.0, 1.0, 1.0), vec3(1.0, 2.0, 3.0));
    }

    #[test]
    fn vec4_passes_w() {
        let m = Mat3::rotate(90.0, Vec3::Z);
        assert_approx_eq!(m * vec4(1.0, 0.0, 0.0, 7.0), vec4(0.0, 1.0, 0.0, 7.0));
    }

    #[test]
    fn flat_array() {
        let m = sample();
        let flat: [Real; 9] = m.into();
        assert_eq!(flat[1], 0.0);
        assert_eq!(flat[2], -1.0);
        assert_eq!(flat[3], -1.0);
        assert_eq!(Mat3::from(flat), m);
        assert_eq!(m.as_array(), &flat);
    }

    #[test]
    fn from_mat4() {
        let m4 = Mat4::translate(vec3(5.0, 6.0, 7.0)) * Mat4::from(sample());
        assert_eq!(Mat3::from(m4), sample());
    }
}
