mod ops;

use std::{
    fmt,
    ops::{Deref, DerefMut},
};

use crate::{scalar, vec4, Mat3, Real, Vec3, Vec4, XYZW};

/// A quaternion consisting of 3 imaginary numbers and a real number.
///
/// Unit-length quaternions ("*versors*") are commonly used to represent rotations in 3D space.
/// Keeping them at unit length is up to the caller; [`Quat::normalize`] can be used to correct
/// accumulated drift.
///
/// Quaternions are represented similar to a 4-dimensional vector, with an `x`, `y`, `z` and `w`
/// component, which can be accessed as fields or by index.
///
/// Multiplication is the Hamilton product and composes rotations like matrices do: `a * b`
/// rotates by `b` first, then by `a`.
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Quat {
    vec: Vec4,
}

unsafe impl bytemuck::Zeroable for Quat {}
unsafe impl bytemuck::Pod for Quat {}

impl Quat {
    /// The multiplicative identity.
    ///
    /// This is a unit quaternion that will not change a vector it is multiplied with.
    pub const IDENTITY: Self = Self {
        vec: vec4(0.0, 0.0, 0.0, 1.0),
    };

    /// The quaternion with all components set to 0.
    pub const ZERO: Self = Self { vec: Vec4::ZERO };

    /// Creates a quaternion from a 4-dimensional [`Vec4`].
    ///
    /// The `x`, `y`, and `z` coordinates correspond to the `i`, `j`, and `k` imaginary parts, while
    /// the `w` component corresponds to the real number part of the quaternion.
    #[inline]
    pub const fn from_vec(vec: Vec4) -> Self {
        Self { vec }
    }

    #[inline]
    pub const fn from_components(x: Real, y: Real, z: Real, w: Real) -> Self {
        Self {
            vec: vec4(x, y, z, w),
        }
    }

    /// Creates a quaternion representing a rotation of `degrees` around `axis`.
    ///
    /// `axis` is normalized first, so it may have any non-zero length. A zero axis results in
    /// [`Quat::IDENTITY`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let q = Quat::from_axis_angle(90.0, vec3(0.0, 0.0, 2.0));
    /// assert_approx_eq!(q.rotate(Vec3::X), Vec3::Y);
    /// assert_approx_eq!(q.to_matrix(), Mat3::rotate(90.0, Vec3::Z));
    /// ```
    pub fn from_axis_angle(degrees: Real, axis: Vec3) -> Self {
        let length = axis.length();
        if length == 0.0 {
            log::trace!("zero rotation axis, using identity quaternion");
            return Self::IDENTITY;
        }

        let (sin, cos) = (scalar::degrees_to_radians(degrees) * 0.5).sin_cos();
        (axis * (sin / length)).extend(cos).into()
    }

    /// Returns the rotation matrix equivalent to this quaternion.
    ///
    /// `self` is assumed to have unit length.
    pub fn to_matrix(&self) -> Mat3 {
        let [x, y, z, w] = self.vec.into_array();
        let (x2, y2, z2) = (x + x, y + y, z + z);
        let (xx, yy, zz) = (x * x2, y * y2, z * z2);
        let (xy, yz, xz) = (x * y2, y * z2, z * x2);
        let (wx, wy, wz) = (w * x2, w * y2, w * z2);

        Mat3::from_columns([
            [1.0 - (yy + zz), xy + wz, xz - wy],
            [xy - wz, 1.0 - (xx + zz), yz + wx],
            [xz + wy, yz - wx, 1.0 - (xx + yy)],
        ])
    }

    /// Spherically interpolates between `from` and `to`.
    ///
    /// The shorter arc is taken: if the quaternions point into opposite hemispheres, `to` is
    /// negated first. Nearly identical inputs are interpolated linearly, which avoids dividing
    /// by a vanishing sine.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let a = Quat::IDENTITY;
    /// let b = Quat::from_axis_angle(90.0, Vec3::Y);
    /// let half = Quat::slerp(a, b, 0.5);
    /// assert_approx_eq!(half, Quat::from_axis_angle(45.0, Vec3::Y));
    /// ```
    pub fn slerp(from: Self, to: Self, t: Real) -> Self {
        let mut cos = from.dot(to);
        let mut to = to;
        if cos < 0.0 {
            cos = -cos;
            to = -to;
        }

        let (from_weight, to_weight) = if 1.0 - cos > 1e-6 {
            let omega = cos.acos();
            let sin = omega.sin();
            (((1.0 - t) * omega).sin() / sin, (t * omega).sin() / sin)
        } else {
            (1.0 - t, t)
        };

        Self::from_vec(from.vec * from_weight + to.vec * to_weight)
    }

    /// Negates the imaginary part.
    ///
    /// For unit quaternions, the conjugate is the inverse rotation.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::from_components(-self.x, -self.y, -self.z, self.w)
    }

    /// Rotates `v` by this quaternion, computing `q * v * q⁻¹`.
    ///
    /// `self` is assumed to have unit length.
    pub fn rotate(&self, v: Vec3) -> Vec3 {
        let p = Self::from_vec(v.extend(0.0));
        (*self * p * self.conjugate()).vec.xyz()
    }

    /// Returns the 4-dimensional dot product of `self` and `other`.
    #[inline]
    pub fn dot(self, other: Self) -> Real {
        self.vec.dot(other.vec)
    }

    /// Returns the squared length of this quaternion.
    ///
    /// If the squared length is not equal to one, multiplying a vector with this quaternion will
    /// scale the vector in addition to rotating it.
    #[inline]
    pub fn length2(&self) -> Real {
        self.vec.length2()
    }

    /// Returns the length of this quaternion.
    #[doc(alias = "norm", alias = "magnitude")]
    #[inline]
    pub fn length(&self) -> Real {
        self.vec.length()
    }

    /// Returns a normalized copy of this quaternion (whose length equals one).
    #[inline]
    pub fn normalize(self) -> Self {
        Self::from_vec(self.vec.normalize())
    }

    #[inline]
    pub const fn as_vec(&self) -> Vec4 {
        self.vec
    }
}

impl Default for Quat {
    /// Returns [`Quat::IDENTITY`].
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<Vec4> for Quat {
    #[inline]
    fn from(vec: Vec4) -> Self {
        Self { vec }
    }
}

impl From<Quat> for Vec4 {
    #[inline]
    fn from(q: Quat) -> Self {
        q.vec
    }
}

/// Extracts the rotation from a (pure rotation) matrix.
///
/// Uses the trace when it is positive, and otherwise solves for the component belonging to the
/// largest diagonal element first, which keeps the square root well away from zero.
impl From<Mat3> for Quat {
    fn from(m: Mat3) -> Self {
        let e = m.as_array();
        let trace = e[0] + e[4] + e[8];

        if trace > 0.0 {
            let s = (trace + 1.0).sqrt();
            let w = 0.5 * s;
            let s = 0.5 / s;
            return Self::from_components(
                (e[5] - e[7]) * s,
                (e[6] - e[2]) * s,
                (e[1] - e[3]) * s,
                w,
            );
        }

        const NEXT: [usize; 3] = [1, 2, 0];
        let mut i = 0;
        if e[4] > e[0] {
            i = 1;
        }
        if e[8] > e[3 * i + i] {
            i = 2;
        }
        let j = NEXT[i];
        let k = NEXT[j];

        let mut s = (e[3 * i + i] - e[3 * j + j] - e[3 * k + k] + 1.0).sqrt();
        let mut q: [Real; 4] = [0.0; 4];
        q[i] = 0.5 * s;
        if s != 0.0 {
            s = 0.5 / s;
        }
        q[3] = (e[3 * j + k] - e[3 * k + j]) * s;
        q[j] = (e[3 * i + j] + e[3 * j + i]) * s;
        q[k] = (e[3 * i + k] + e[3 * k + i]) * s;

        Self::from_vec(q.into())
    }
}

impl fmt::Debug for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quat")
            .field("x", &self.x)
            .field("y", &self.y)
            .field("z", &self.z)
            .field("w", &self.w)
            .finish()
    }
}

impl Deref for Quat {
    type Target = XYZW;

    #[inline]
    fn deref(&self) -> &XYZW {
        &self.vec
    }
}

impl DerefMut for Quat {
    #[inline]
    fn deref_mut(&mut self) -> &mut XYZW {
        &mut self.vec
    }
}
