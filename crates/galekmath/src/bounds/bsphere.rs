use std::ops::Mul;

use crate::{scalar, Mat4, Real, Vec3};

/// A bounding sphere.
#[derive(Debug, Clone, Copy)]
pub struct BSphere {
    pub center: Vec3,
    pub radius: Real,
}

impl BSphere {
    #[inline]
    pub const fn new(center: Vec3, radius: Real) -> Self {
        Self { center, radius }
    }

    /// Grows the radius until `point` is inside the sphere. The center does not move.
    pub fn add_point(&mut self, point: Vec3) {
        let distance = (point - self.center).length();
        if self.radius < distance {
            self.radius = distance;
        }
    }

    /// Replaces `self` with the smallest sphere enclosing both `self` and `other`.
    ///
    /// If one sphere already contains the other (including when both share a center), the
    /// larger sphere is the result.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let mut a = BSphere::new(vec3(-2.0, 0.0, 0.0), 1.0);
    /// a.add_sphere(&BSphere::new(vec3(3.0, 0.0, 0.0), 2.0));
    /// assert_approx_eq!(a.center, vec3(1.0, 0.0, 0.0));
    /// assert_approx_eq!(a.radius, 4.0);
    /// ```
    pub fn add_sphere(&mut self, other: &BSphere) {
        let dc = other.center - self.center;
        let lc = dc.length();

        if lc + other.radius <= self.radius {
            log::trace!("{other:?} is inside {self:?}, keeping the latter");
            return;
        }
        if lc + self.radius <= other.radius {
            log::trace!("{self:?} is inside {other:?}, replacing it");
            *self = *other;
            return;
        }

        let dr = other.radius - self.radius;
        self.radius = 0.5 * (self.radius + other.radius + lc);
        self.center += dc * (0.5 * (lc + dr) / lc);
    }

    /// Returns whether `point` lies strictly inside the sphere.
    pub fn contains_point(&self, point: Vec3) -> bool {
        (point - self.center).length() < self.radius
    }

    /// Returns whether the spheres overlap. Touching spheres intersect.
    pub fn intersects_sphere(&self, other: &BSphere) -> bool {
        (self.center - other.center).length() <= self.radius + other.radius
    }
}

impl Default for BSphere {
    /// Returns the unit sphere around the origin.
    fn default() -> Self {
        Self::new(Vec3::ZERO, 1.0)
    }
}

/// Centers compare exactly, radii within [`Real::EPSILON`].
impl PartialEq for BSphere {
    fn eq(&self, other: &Self) -> bool {
        self.center == other.center && scalar::is_equal(self.radius, other.radius)
    }
}

/// Transforms the center as a point. The radius is kept, so `self` should not scale.
impl Mul<BSphere> for Mat4 {
    type Output = BSphere;

    fn mul(self, rhs: BSphere) -> BSphere {
        BSphere::new(self * rhs.center, rhs.radius)
    }
}
