use std::ops::Mul;

use crate::{scalar, vec3, Mat3, Mat4, Matrix, Real, Vec3, Vec4};

impl Matrix<4> {
    /// All zero, except for the `w` diagonal element, which is 1.
    pub const ZERO_AFFINE: Self = {
        let mut m = Self::ZERO;
        m.0[3][3] = 1.0;
        m
    };

    /// Maps clip space `x` and `y` (`-1..=1`, Y up) to image space (`0..=1`, Y down).
    #[rustfmt::skip]
    pub const CLIP_SPACE_TO_IMAGE_SPACE: Self = Self([
        [0.5,  0.0, 0.0, 0.0],
        [0.0, -0.5, 0.0, 0.0],
        [0.0,  0.0, 1.0, 0.0],
        [0.5,  0.5, 0.0, 1.0],
    ]);

    /// Returns the determinant of the upper-left 3x3 block (rotation and scale).
    ///
    /// For affine transforms, whose bottom row is `(0, 0, 0, 1)`, this equals the determinant of
    /// the whole matrix.
    pub fn determinant(&self) -> Real {
        let e = self.as_array();
        e[0] * e[5] * e[10] + e[4] * e[9] * e[2] + e[8] * e[1] * e[6]
            - e[8] * e[5] * e[2]
            - e[4] * e[1] * e[10]
            - e[0] * e[9] * e[6]
    }

    /// Inverts an affine transform.
    ///
    /// The upper-left 3x3 block is inverted via its adjugate, and the translation is recomputed
    /// as `-R⁻¹ · T`. The bottom row of `self` is ignored and set to `(0, 0, 0, 1)` in the result,
    /// so this is *not* a general 4x4 inverse (projection matrices can't be inverted with it).
    ///
    /// The determinant is not checked: a singular matrix produces infinite or `NaN` elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let m = Mat4::translate(vec3(1.0, 2.0, 3.0)) * Mat4::rotate(30.0, Vec3::Y);
    /// assert_approx_eq!(m * m.inverse(), Mat4::IDENTITY);
    /// ```
    pub fn inverse(&self) -> Self {
        let e = self.as_array();
        let inv_det = 1.0 / self.determinant();

        let mut inv = Self::ZERO_AFFINE;
        {
            let i = inv.as_mut_array();
            i[0] = (e[5] * e[10] - e[9] * e[6]) * inv_det;
            i[1] = -(e[1] * e[10] - e[9] * e[2]) * inv_det;
            i[2] = (e[1] * e[6] - e[5] * e[2]) * inv_det;

            i[4] = -(e[4] * e[10] - e[8] * e[6]) * inv_det;
            i[5] = (e[0] * e[10] - e[8] * e[2]) * inv_det;
            i[6] = -(e[0] * e[6] - e[4] * e[2]) * inv_det;

            i[8] = (e[4] * e[9] - e[8] * e[5]) * inv_det;
            i[9] = -(e[0] * e[9] - e[8] * e[1]) * inv_det;
            i[10] = (e[0] * e[5] - e[4] * e[1]) * inv_det;

            i[12] = -(e[12] * i[0] + e[13] * i[4] + e[14] * i[8]);
            i[13] = -(e[12] * i[1] + e[13] * i[5] + e[14] * i[9]);
            i[14] = -(e[12] * i[2] + e[13] * i[6] + e[14] * i[10]);
        }
        inv
    }

    /// Inverts an affine transform, or returns [`None`] if it is singular.
    ///
    /// See [`Mat4::inverse`] for the restrictions on `self`.
    pub fn try_inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            log::trace!("matrix with determinant {det} is not invertible: {self:?}");
            return None;
        }
        Some(self.inverse())
    }

    /// Creates a translation by `translation`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let m = Mat4::translate(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(m * Vec3::ZERO, vec3(1.0, 2.0, 3.0));
    /// assert_eq!(m * Vec3::X.to_direction(), Vec3::X.to_direction());
    /// ```
    pub fn translate(translation: Vec3) -> Self {
        let mut m = Self::IDENTITY;
        m.0[3] = translation.to_point().into_array();
        m
    }

    /// Creates a rotation of `degrees` around `axis`. See [`Mat3::rotate`].
    pub fn rotate(degrees: Real, axis: Vec3) -> Self {
        Mat3::rotate(degrees, axis).into()
    }

    /// Creates a matrix scaling each axis by the matching element of `scale`.
    pub fn scale(scale: Vec3) -> Self {
        Self::from_diagonal(scale.to_point())
    }

    /// Creates a right-handed view matrix for a camera at `eye` looking at `center`.
    ///
    /// The camera looks down its local -Z axis, with local +Y pointing roughly towards `up`.
    /// `up` must not be parallel to the view direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let view = Mat4::look_at(vec3(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    /// assert_approx_eq!(view * vec3(0.0, 0.0, 5.0), Vec3::ZERO);
    /// assert_approx_eq!(view * Vec3::ZERO, vec3(0.0, 0.0, -5.0));
    /// ```
    pub fn look_at(eye: Vec3, center: Vec3, up: Vec3) -> Self {
        let z = (eye - center).normalize();
        let x = up.cross(z).normalize();
        let y = z.cross(x).normalize();

        let rotation = Self::from_rows([
            x.to_direction(),
            y.to_direction(),
            z.to_direction(),
            Vec4::W,
        ]);
        rotation * Self::translate(-eye)
    }

    /// Creates a perspective projection for a right-handed view space, mapping depth to
    /// `-1..=1`.
    ///
    /// `fovy` is the vertical field of view in degrees. Degenerate parameters (`near == far`,
    /// `aspect == 0`, or a field of view whose half-angle has a sine of zero) produce the
    /// identity matrix instead.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let proj = Mat4::perspective(60.0, 1.0, 0.1, 100.0);
    /// let near = proj * vec4(0.0, 0.0, -0.1, 1.0);
    /// assert_approx_eq!(near.z / near.w, -1.0);
    /// let far = proj * vec4(0.0, 0.0, -100.0, 1.0);
    /// assert_approx_eq!(far.z / far.w, 1.0);
    /// ```
    pub fn perspective(fovy: Real, aspect: Real, near: Real, far: Real) -> Self {
        let (sine, cosine) = scalar::degrees_to_radians(fovy / 2.0).sin_cos();
        let delta_z = far - near;
        if delta_z == 0.0 || sine == 0.0 || aspect == 0.0 {
            log::warn!(
                "degenerate perspective projection (fovy={fovy}, aspect={aspect}, near={near}, \
                 far={far}), using identity"
            );
            return Self::IDENTITY;
        }

        let cotangent = cosine / sine;
        let mut m = Self::IDENTITY;
        m[0] = cotangent / aspect;
        m[5] = cotangent;
        m[10] = -(far + near) / delta_z;
        m[11] = -1.0;
        m[14] = -2.0 * near * far / delta_z;
        m[15] = 0.0;
        m
    }

    /// Creates an orthographic projection of the box `left..right`, `bottom..top`,
    /// `-near..-far` to the `-1..=1` cube.
    pub fn ortho(left: Real, right: Real, bottom: Real, top: Real, near: Real, far: Real) -> Self {
        let mut m = Self::IDENTITY;
        m[0] = 2.0 / (right - left);
        m[5] = 2.0 / (top - bottom);
        m[10] = -2.0 / (far - near);
        m[12] = -(right + left) / (right - left);
        m[13] = -(top + bottom) / (top - bottom);
        m[14] = -(far + near) / (far - near);
        m
    }

    /// Creates a reflection across `plane`.
    ///
    /// The plane is given as `(normal, d)` with a unit normal, and contains the points `p` with
    /// `normal · p + d == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// // The plane y = 1.
    /// let m = Mat4::reflect(vec4(0.0, 1.0, 0.0, -1.0));
    /// assert_eq!(m * vec3(3.0, 0.0, 4.0), vec3(3.0, 2.0, 4.0));
    /// ```
    pub fn reflect(plane: Vec4) -> Self {
        let [x, y, z, d] = plane.into_array();
        let (x2, y2, z2) = (x * 2.0, y * 2.0, z * 2.0);

        Self::from_rows([
            [1.0 - x * x2, -y * x2, -z * x2, -d * x2],
            [-x * y2, 1.0 - y * y2, -z * y2, -d * y2],
            [-x * z2, -y * z2, 1.0 - z * z2, -d * z2],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Modifies the perspective projection `proj` so that its near plane becomes `plane`
    /// (oblique near-plane clipping).
    ///
    /// `plane` is given in view space, in the same `(normal, d)` form as [`Mat4::reflect`], and
    /// must face away from the camera. This is the technique from Eric Lengyel's "Oblique View
    /// Frustum Depth Projection and Clipping", used to clip geometry behind mirrors and water
    /// surfaces.
    pub fn reflect_projection(proj: &Self, plane: Vec4) -> Self {
        let q = Vec4::from([
            (scalar::sign(plane.x) + proj[8]) / proj[0],
            (scalar::sign(plane.y) + proj[9]) / proj[5],
            -1.0,
            (1.0 + proj[10]) / proj[14],
        ]);
        let c = plane * (2.0 / plane.dot(q));

        let mut m = *proj;
        m[2] = c.x;
        m[6] = c.y;
        m[10] = c.z + 1.0;
        m[14] = c.w;
        m
    }

    /// Creates the view matrix for rendering face `face` of a cube map centered on `position`.
    ///
    /// Faces are numbered in the usual order: +X, -X, +Y, -Y, +Z, -Z.
    ///
    /// # Panics
    ///
    /// Debug builds panic if `face` is greater than 5. Release builds log a warning and return
    /// the un-rotated translation.
    pub fn cube(position: Vec3, face: usize) -> Self {
        debug_assert!(face < 6, "cube map face index {face} out of range");

        let mut m = Self::IDENTITY;
        match face {
            0 => {
                m *= Self::rotate(90.0, Vec3::Y);
                m *= Self::rotate(180.0, Vec3::X);
            }
            1 => {
                m *= Self::rotate(-90.0, Vec3::Y);
                m *= Self::rotate(180.0, Vec3::X);
            }
            2 => m *= Self::rotate(-90.0, Vec3::X),
            3 => m *= Self::rotate(90.0, Vec3::X),
            4 => m *= Self::rotate(180.0, Vec3::X),
            5 => {
                m *= Self::rotate(180.0, Vec3::X);
                m *= Self::rotate(180.0, Vec3::Y);
            }
            _ => log::warn!("cube map face index {face} out of range"),
        }

        m * Self::translate(-position)
    }

    /// Maps clip space coordinates (`-1..=1` on every axis) to texture coordinates and depth
    /// (`0..=1`).
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let bias = Mat4::tex_bias();
    /// assert_eq!(bias * vec3(-1.0, -1.0, -1.0), Vec3::ZERO);
    /// assert_eq!(bias * Vec3::ONE, Vec3::ONE);
    /// ```
    pub fn tex_bias() -> Self {
        Self::translate(Vec3::splat(0.5)) * Self::scale(Vec3::splat(0.5))
    }

    /// Returns the upper-left 3x3 block (rotation and scale) as a [`Mat4`] without translation.
    pub fn rotation(&self) -> Self {
        Mat3::from(*self).into()
    }

    /// Returns the translation stored in elements 12, 13 and 14.
    #[inline]
    pub fn translation(&self) -> Vec3 {
        vec3(self[12], self[13], self[14])
    }

    /// Replaces the translation of this transform with `translation`.
    ///
    /// The rotation and scale block is kept, the bottom row is reset to `(0, 0, 0, 1)`.
    pub fn set_translation(&mut self, translation: Vec3) {
        *self = Self::translate(translation) * self.rotation();
    }

    /// Returns the diagonal of the upper-left 3x3 block.
    ///
    /// This is the scale of transforms that don't rotate.
    #[inline]
    pub fn scale_factors(&self) -> Vec3 {
        vec3(self[0], self[5], self[10])
    }

    /// Overwrites the diagonal of the upper-left 3x3 block with `scale`.
    #[inline]
    pub fn set_scale_factors(&mut self, scale: Vec3) {
        self[0] = scale.x;
        self[5] = scale.y;
        self[10] = scale.z;
    }

    /// Transforms the point `v` by the full matrix, including the perspective division.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let proj = Mat4::perspective(90.0, 1.0, 1.0, 10.0);
    /// let ndc = proj.transform_coord(vec3(1.0, 0.0, -1.0));
    /// assert_approx_eq!(ndc, vec3(1.0, 0.0, -1.0));
    /// ```
    pub fn transform_coord(&self, v: Vec3) -> Vec3 {
        let clip = *self * v.to_point();
        clip.xyz() / clip.w
    }

    /// Applies a rotation of `degrees` around `axis` *after* this transform.
    pub fn pre_rotate(&mut self, degrees: Real, axis: Vec3) {
        *self = Self::rotate(degrees, axis) * *self;
    }

    /// Views the matrix as its 16 elements in column-major order.
    #[inline]
    pub fn as_array(&self) -> &[Real; 16] {
        bytemuck::cast_ref(self)
    }

    /// Views the matrix as its 16 mutable elements in column-major order.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [Real; 16] {
        bytemuck::cast_mut(self)
    }
}

/// Column-major elements.
impl From<[Real; 16]> for Mat4 {
    #[inline]
    fn from(elements: [Real; 16]) -> Self {
        bytemuck::cast(elements)
    }
}

impl From<Mat4> for [Real; 16] {
    #[inline]
    fn from(m: Mat4) -> Self {
        bytemuck::cast(m)
    }
}

/// Embeds `m` as the upper-left block of an affine transform without translation.
impl From<Mat3> for Mat4 {
    fn from(m: Mat3) -> Self {
        Self::from_fn(|row, col| match (row, col) {
            (3, 3) => 1.0,
            (3, _) | (_, 3) => 0.0,
            _ => m[(row, col)],
        })
    }
}

/// Transforms `rhs` as a point (with implied `w = 1`), ignoring the bottom row of the matrix.
impl Mul<Vec3> for Mat4 {
    type Output = Vec3;

    fn mul(self, rhs: Vec3) -> Vec3 {
        (self * rhs.to_point()).xyz()
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, assert_approx_ne, vec4, Vec4};

    use super::*;

    fn sample_transform() -> Mat4 {
        Mat4::translate(vec3(3.0, -2.0, 7.5))
            * Mat4::rotate(-37.0, vec3(0.0, 0.6, 0.8))
            * Mat4::scale(vec3(2.0, 0.5, 1.5))
    }

    #[test]
    fn constants() {
        assert_eq!(Mat4::ZERO_AFFINE[15], 1.0);
        assert_eq!(Mat4::ZERO_AFFINE.trace(), 1.0);
        assert_eq!(
            Mat4::CLIP_SPACE_TO_IMAGE_SPACE * vec3(-1.0, 1.0, 0.5),
            vec3(0.0, 0.0, 0.5)
        );
        assert_eq!(
            Mat4::CLIP_SPACE_TO_IMAGE_SPACE * vec3(1.0, -1.0, 0.5),
            vec3(1.0, 1.0, 0.5)
        );
    }

    #[test]
    fn affine_inverse() {
        let m = sample_transform();
        assert_approx_eq!(m * m.inverse(), Mat4::IDENTITY).abs(1e-5);
        assert_approx_eq!(m.inverse() * m, Mat4::IDENTITY).abs(1e-5);
        assert_eq!(m.try_inverse(), Some(m.inverse()));

        let p = vec3(1.0, 2.0, 3.0);
        assert_approx_eq!(m.inverse() * (m * p), p).abs(1e-5);
    }

    #[test]
    fn singular_inverse() {
        let flat = Mat4::scale(vec3(1.0, 0.0, 1.0));
        assert_eq!(flat.determinant(), 0.0);
        assert_eq!(flat.try_inverse(), None);
    }

    #[test]
    fn determinant_ignores_projection_row() {
        let scale = Mat4::scale(vec3(2.0, 3.0, 4.0));
        assert_eq!(scale.determinant(), 24.0);
        let mut projective = scale;
        projective[3] = 5.0;
        assert_eq!(projective.determinant(), 24.0);
    }

    #[test]
    fn rotate_matches_mat3() {
        let axis = vec3(0.0, 0.6, 0.8);
        let m3 = Mat3::rotate(71.0, axis);
        let m4 = Mat4::rotate(71.0, axis);
        let v = vec3(1.0, -2.0, 0.5);
        assert_eq!(m4 * v, m3 * v);
        assert_eq!(m4.translation(), Vec3::ZERO);
        assert_eq!(m4.row(3), Vec4::W);
    }

    #[test]
    fn translation_accessors() {
        let mut m = sample_transform();
        assert_eq!(m.translation(), vec3(3.0, -2.0, 7.5));
        assert_eq!(m.rotation().translation(), Vec3::ZERO);
        assert_eq!(Mat3::from(m.rotation()), Mat3::from(m));

        m.set_translation(vec3(-1.0, 0.0, 1.0));
        assert_eq!(m.translation(), vec3(-1.0, 0.0, 1.0));
        assert_eq!(Mat3::from(m), Mat3::from(sample_transform()));
    }

    #[test]
    fn scale_accessors() {
        let mut m = Mat4::scale(vec3(1.0, 2.0, 3.0));
        assert_eq!(m.scale_factors(), vec3(1.0, 2.0, 3.0));
        m.set_scale_factors(vec3(4.0, 5.0, 6.0));
        assert_eq!(m, Mat4::scale(vec3(4.0, 5.0, 6.0)));
    }

    #[test]
    fn pre_rotate() {
        let mut m = Mat4::translate(vec3(1.0, 0.0, 0.0));
        m.pre_rotate(90.0, Vec3::Z);
        // Translated first, then rotated around the origin.
        assert_approx_eq!(m * Vec3::ZERO, vec3(0.0, 1.0, 0.0));
    }

    #[test]
    fn perspective() {
        let proj = Mat4::perspective(60.0, 1.0, 0.1, 100.0);
        let near = proj * vec4(0.0, 0.0, -0.1, 1.0);
        assert_approx_eq!(near.z / near.w, -1.0);
        let far = proj * vec4(0.0, 0.0, -100.0, 1.0);
        assert_approx_eq!(far.z / far.w, 1.0).abs(1e-4);

        // Top edge of the frustum at the near plane.
        let half_height = 0.1 * scalar::degrees_to_radians(30.0).tan();
        let top = proj.transform_coord(vec3(0.0, half_height, -0.1));
        assert_approx_eq!(top.y, 1.0).abs(1e-5);

        let wide = Mat4::perspective(60.0, 2.0, 0.1, 100.0);
        assert_approx_eq!(wide[0] * 2.0, wide[5]);
    }

    #[test]
    fn degenerate_perspective() {
        assert_eq!(Mat4::perspective(60.0, 1.0, 1.0, 1.0), Mat4::IDENTITY);
        assert_eq!(Mat4::perspective(0.0, 1.0, 0.1, 100.0), Mat4::IDENTITY);
        assert_eq!(Mat4::perspective(60.0, 0.0, 0.1, 100.0), Mat4::IDENTITY);
    }

    #[test]
    fn ortho() {
        let proj = Mat4::ortho(-2.0, 2.0, -1.0, 1.0, 1.0, 11.0);
        assert_approx_eq!(proj * vec3(-2.0, -1.0, -1.0), vec3(-1.0, -1.0, -1.0));
        assert_approx_eq!(proj * vec3(2.0, 1.0, -11.0), vec3(1.0, 1.0, 1.0));
        assert_approx_eq!(proj * vec3(0.0, 0.0, -6.0), Vec3::ZERO);
    }

    #[test]
    fn look_at() {
        let eye = vec3(1.0, 2.0, 3.0);
        let view = Mat4::look_at(eye, vec3(1.0, 2.0, -7.0), Vec3::Y);
        // Looking down -Z already, so only the translation remains.
        assert_approx_eq!(view, Mat4::translate(-eye));

        let view = Mat4::look_at(vec3(5.0, 0.0, 0.0), Vec3::ZERO, Vec3::Y);
        assert_approx_eq!(view * Vec3::ZERO, vec3(0.0, 0.0, -5.0));
        assert_approx_eq!(view * vec3(5.0, 1.0, 0.0), Vec3::Y);
        assert_approx_eq!(view.determinant(), 1.0);
    }

    #[test]
    fn reflect() {
        let plane = vec4(0.0, 0.0, 1.0, 0.0);
        let m = Mat4::reflect(plane);
        assert_eq!(m * vec3(1.0, 2.0, 3.0), vec3(1.0, 2.0, -3.0));
        assert_eq!(m.determinant(), -1.0);

        // Reflecting twice is the identity.
        let n = vec3(1.0, 1.0, 0.0).normalize();
        let m = Mat4::reflect(n.extend(-2.0));
        assert_approx_eq!(m * m, Mat4::IDENTITY);
        // Points on the plane are fixed.
        let on_plane = n * 2.0 + vec3(0.0, 0.0, 9.0);
        assert_approx_eq!(m * on_plane, on_plane).abs(1e-5);
    }

    #[test]
    fn reflect_projection() {
        let proj = Mat4::perspective(60.0, 1.0, 0.1, 100.0);
        // The plane z = -2, facing away from the camera.
        let plane = vec4(0.0, 0.0, -1.0, -2.0);
        let oblique = Mat4::reflect_projection(&proj, plane);

        let on_plane = vec4(0.3, -0.2, -2.0, 1.0);
        let clip = oblique * on_plane;
        assert_approx_eq!(clip.z / clip.w, -1.0);

        // Only the third row changes.
        for row in [0, 1, 3] {
            assert_eq!(oblique.row(row), proj.row(row));
        }
        assert_approx_ne!(oblique.row(2), proj.row(2));
    }

    #[test]
    fn cube_faces() {
        let position = vec3(1.0, 2.0, 3.0);
        let expected_forward = [
            Vec3::X,
            -Vec3::X,
            Vec3::Y,
            -Vec3::Y,
            Vec3::Z,
            -Vec3::Z,
        ];
        for (face, forward) in expected_forward.into_iter().enumerate() {
            let view = Mat4::cube(position, face);
            // The camera sits at `position` and looks down its local -Z.
            assert_approx_eq!(view * position, Vec3::ZERO, "face {face}");
            assert_approx_eq!(view * (position + forward), -Vec3::Z, "face {face}").abs(1e-6);
            assert_approx_eq!(view.determinant(), 1.0, "face {face}");
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "out of range")]
    fn cube_invalid_face() {
        Mat4::cube(Vec3::ZERO, 6);
    }

    #[test]
    fn tex_bias() {
        let bias = Mat4::tex_bias();
        assert_eq!(bias * vec3(-1.0, -1.0, -1.0), Vec3::ZERO);
        assert_eq!(bias * Vec3::ZERO, Vec3::splat(0.5));
        assert_eq!(bias * Vec3::ONE, Vec3::ONE);
    }

    #[test]
    fn flat_array() {
        let m = Mat4::translate(vec3(4.0, 5.0, 6.0));
        let flat: [Real; 16] = m.into();
        assert_eq!(&flat[12..15], &[4.0, 5.0, 6.0]);
        assert_eq!(Mat4::from(flat), m);
        assert_eq!(m.as_array(), &flat);
    }

    #[test]
    fn embed_mat3() {
        let m3 = Mat3::from_fn(|row, col| (row * 3 + col + 1) as Real);
        let m4 = Mat4::from(m3);
        assert_eq!(Mat3::from(m4), m3);
        assert_eq!(m4.row(3), Vec4::W);
        assert_eq!(m4.column(3), Vec4::W);
    }
}
