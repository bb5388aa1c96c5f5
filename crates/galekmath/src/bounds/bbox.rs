use std::ops::Mul;

use crate::{scalar, vec3, Mat4, Real, Vec3, Vec4};

/// An axis-aligned bounding box.
///
/// The box caches its center and half extent, which are kept up to date by every method that
/// modifies it.
///
/// A box can be *empty* (see [`BBox::EMPTY`] and [`BBox::clear`]), in which case its minimum
/// corner lies beyond its maximum corner on every axis. Adding the first point to an empty box
/// shrinks it to exactly that point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BBox {
    mins: Vec3,
    maxes: Vec3,
    center: Vec3,
    half_size: Vec3,
}

impl BBox {
    /// A box that contains nothing. Any point added to it becomes its only content.
    pub const EMPTY: Self = Self {
        mins: Vec3::MAX,
        maxes: Vec3::MIN,
        center: Vec3::ZERO,
        half_size: Vec3::splat(Real::NEG_INFINITY),
    };

    /// Creates a box spanning from `mins` to `maxes`.
    ///
    /// No ordering is enforced between the two corners.
    pub fn new(mins: Vec3, maxes: Vec3) -> Self {
        let mut this = Self {
            mins,
            maxes,
            center: Vec3::ZERO,
            half_size: Vec3::ZERO,
        };
        this.update_center();
        this
    }

    fn update_center(&mut self) {
        self.center = (self.mins + self.maxes) * 0.5;
        self.half_size = (self.maxes - self.mins) * 0.5;
    }

    #[inline]
    pub fn mins(&self) -> Vec3 {
        self.mins
    }

    #[inline]
    pub fn maxes(&self) -> Vec3 {
        self.maxes
    }

    #[inline]
    pub fn center(&self) -> Vec3 {
        self.center
    }

    /// Returns the distance from the center to the maximum corner along each axis.
    #[inline]
    pub fn half_size(&self) -> Vec3 {
        self.half_size
    }

    /// Returns the radius of the sphere through all 8 corners.
    pub fn radius(&self) -> Real {
        (self.mins - self.maxes).length() * 0.5
    }

    /// Returns whether the minimum corner lies beyond the maximum corner on any axis.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// assert!(BBox::EMPTY.is_empty());
    /// assert!(!BBox::default().is_empty());
    /// // A single point is not empty.
    /// assert!(!BBox::new(Vec3::ONE, Vec3::ONE).is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        (0..3).any(|i| self.mins[i] > self.maxes[i])
    }

    /// Resets the box to [`BBox::EMPTY`].
    pub fn clear(&mut self) {
        *self = Self::EMPTY;
    }

    /// Grows the box to contain `point`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let mut bbox = BBox::EMPTY;
    /// bbox.add_point(vec3(1.0, 2.0, 3.0));
    /// bbox.add_point(vec3(-1.0, 0.0, 5.0));
    /// assert_eq!(bbox.mins(), vec3(-1.0, 0.0, 3.0));
    /// assert_eq!(bbox.maxes(), vec3(1.0, 2.0, 5.0));
    /// assert_eq!(bbox.center(), vec3(0.0, 1.0, 4.0));
    /// ```
    pub fn add_point(&mut self, point: Vec3) {
        self.mins = self.mins.min(point);
        self.maxes = self.maxes.max(point);
        self.update_center();
    }

    /// Grows the box to contain `other`.
    pub fn add_bbox(&mut self, other: &BBox) {
        self.mins = self.mins.min(other.mins);
        self.maxes = self.maxes.max(other.maxes);
        self.update_center();
    }

    /// Returns whether `point` lies inside the box or on its boundary.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let bbox = BBox::new(vec3(-1.0, -1.0, -1.0), vec3(1.0, 1.0, 1.0));
    /// assert!(bbox.contains_point(vec3(1.0, 1.0, 1.0)));
    /// assert!(!bbox.contains_point(vec3(1.01, 0.0, 0.0)));
    /// ```
    pub fn contains_point(&self, point: Vec3) -> bool {
        (0..3).all(|i| point[i] >= self.mins[i] && point[i] <= self.maxes[i])
    }

    /// Returns the 8 corners of the box.
    ///
    /// `x` alternates fastest, then `y`, then `z`, starting at [`BBox::mins`] and ending at
    /// [`BBox::maxes`].
    pub fn corners(&self) -> [Vec3; 8] {
        let (lo, hi) = (self.mins, self.maxes);
        [
            vec3(lo.x, lo.y, lo.z),
            vec3(hi.x, lo.y, lo.z),
            vec3(lo.x, hi.y, lo.z),
            vec3(hi.x, hi.y, lo.z),
            vec3(lo.x, lo.y, hi.z),
            vec3(hi.x, lo.y, hi.z),
            vec3(lo.x, hi.y, hi.z),
            vec3(hi.x, hi.y, hi.z),
        ]
    }

    /// Transforms all corners by `transform` and replaces `self` with the axis-aligned box
    /// enclosing the results.
    ///
    /// Unlike `transform * bbox`, this yields a valid (and conservative) box under rotation.
    /// Corners go through [`Mat4::transform_coord`], so projective transforms are supported too.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let mut bbox = BBox::new(vec3(-1.0, -1.0, -1.0), vec3(1.0, 1.0, 1.0));
    /// bbox.transform_axis_aligned(&Mat4::rotate(45.0, Vec3::Z));
    /// let r = Real::sqrt(2.0);
    /// assert_approx_eq!(bbox.maxes(), vec3(r, r, 1.0));
    /// assert_approx_eq!(bbox.mins(), vec3(-r, -r, -1.0));
    /// ```
    pub fn transform_axis_aligned(&mut self, transform: &Mat4) {
        let corners = self.corners().map(|corner| transform.transform_coord(corner));
        self.clear();
        for corner in corners {
            self.add_point(corner);
        }
    }

    /// Returns the smallest value of `plane · (corner, 1)` over all corners.
    ///
    /// For a plane with a unit normal, this is the signed distance of the corner closest to (or
    /// farthest behind) the plane.
    pub fn nearest(&self, plane: Vec4) -> Real {
        self.corners()
            .into_iter()
            .map(|corner| plane.dot(corner.to_point()))
            .fold(Real::MAX, scalar::min)
    }

    /// Returns the largest value of `plane · (corner, 1)` over all corners.
    pub fn farthest(&self, plane: Vec4) -> Real {
        self.corners()
            .into_iter()
            .map(|corner| plane.dot(corner.to_point()))
            .fold(-Real::MAX, scalar::max)
    }

    /// Computes near and far clip distances for a camera at `eye` looking towards `look`, so
    /// that the whole box lies between them.
    ///
    /// A margin of 0.02 is added on both sides, and the results are clamped to at least 0.1
    /// (near) and 0.2 (far).
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let bbox = BBox::new(vec3(-1.0, -1.0, -1.0), vec3(1.0, 1.0, 1.0));
    /// let (near, far) = bbox.fit_to_box(vec3(0.0, 0.0, 10.0), Vec3::ZERO);
    /// assert_approx_eq!(near, 8.98).abs(1e-5);
    /// assert_approx_eq!(far, 11.02).abs(1e-5);
    /// ```
    pub fn fit_to_box(&self, eye: Vec3, look: Vec3) -> (Real, Real) {
        let dir = look - eye;
        let plane = dir.extend(-dir.dot(eye)) / dir.length();

        let near = self.nearest(plane) - 0.02;
        let far = self.farthest(plane) + 0.02;
        (scalar::max(near, 0.1), scalar::max(far, 0.2))
    }
}

impl Default for BBox {
    /// Returns the box from `(-1, -1, -1)` to `(1, 1, 1)`.
    fn default() -> Self {
        Self::new(-Vec3::ONE, Vec3::ONE)
    }
}

/// Transforms the minimum and maximum corner as points.
///
/// The result is only axis-aligned with correctly ordered corners if `self` does not rotate or
/// mirror. Use [`BBox::transform_axis_aligned`] for arbitrary transforms.
impl Mul<BBox> for Mat4 {
    type Output = BBox;

    fn mul(self, rhs: BBox) -> BBox {
        BBox::new(self * rhs.mins, self * rhs.maxes)
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, vec4};

    use super::*;

    fn unit_box() -> BBox {
        BBox::new(vec3(-1.0, -1.0, -1.0), vec3(1.0, 1.0, 1.0))
    }

    #[test]
    fn default_box() {
        let bbox = BBox::default();
        assert_eq!(bbox, unit_box());
        assert_eq!(bbox.center(), Vec3::ZERO);
        assert_eq!(bbox.half_size(), Vec3::ONE);
        assert_approx_eq!(bbox.radius(), Real::sqrt(3.0));
    }

    #[test]
    fn contains_point_is_inclusive() {
        let bbox = unit_box();
        assert!(bbox.contains_point(vec3(1.0, 1.0, 1.0)));
        assert!(bbox.contains_point(vec3(-1.0, 0.0, 1.0)));
        assert!(bbox.contains_point(Vec3::ZERO));
        assert!(!bbox.contains_point(vec3(1.01, 0.0, 0.0)));
        assert!(!bbox.contains_point(vec3(0.0, -1.01, 0.0)));
        assert!(!bbox.contains_point(vec3(0.0, 0.0, 2.0)));
    }

    #[test]
    fn clear_then_add() {
        let mut bbox = unit_box();
        bbox.clear();
        assert!(bbox.is_empty());
        assert_eq!(bbox, BBox::EMPTY);
        assert!(!bbox.contains_point(Vec3::ZERO));

        bbox.add_point(vec3(5.0, 6.0, 7.0));
        assert!(!bbox.is_empty());
        assert_eq!(bbox.mins(), vec3(5.0, 6.0, 7.0));
        assert_eq!(bbox.maxes(), vec3(5.0, 6.0, 7.0));
        assert_eq!(bbox.center(), vec3(5.0, 6.0, 7.0));
        assert_eq!(bbox.half_size(), Vec3::ZERO);
    }

    #[test]
    fn add_point_never_shrinks() {
        let mut bbox = unit_box();
        bbox.add_point(Vec3::ZERO);
        assert_eq!(bbox, unit_box());
        bbox.add_point(vec3(3.0, 0.0, 0.0));
        assert_eq!(bbox.maxes(), vec3(3.0, 1.0, 1.0));
        assert_eq!(bbox.mins(), vec3(-1.0, -1.0, -1.0));
        assert_eq!(bbox.center(), vec3(1.0, 0.0, 0.0));
        assert_eq!(bbox.half_size(), vec3(2.0, 1.0, 1.0));
    }

    #[test]
    fn add_bbox() {
        let mut bbox = unit_box();
        bbox.add_bbox(&BBox::new(vec3(0.0, 0.0, 0.0), vec3(4.0, 0.5, 0.5)));
        assert_eq!(bbox.mins(), vec3(-1.0, -1.0, -1.0));
        assert_eq!(bbox.maxes(), vec3(4.0, 1.0, 1.0));

        let mut empty = BBox::EMPTY;
        empty.add_bbox(&unit_box());
        assert_eq!(empty, unit_box());
    }

    #[test]
    fn corners() {
        let bbox = BBox::new(vec3(0.0, 1.0, 2.0), vec3(3.0, 4.0, 5.0));
        let corners = bbox.corners();
        assert_eq!(corners[0], bbox.mins());
        assert_eq!(corners[1], vec3(3.0, 1.0, 2.0));
        assert_eq!(corners[2], vec3(0.0, 4.0, 2.0));
        assert_eq!(corners[4], vec3(0.0, 1.0, 5.0));
        assert_eq!(corners[7], bbox.maxes());
        assert!(corners.iter().all(|&c| bbox.contains_point(c)));
    }

    #[test]
    fn transform_axis_aligned_translation() {
        let mut bbox = unit_box();
        bbox.transform_axis_aligned(&Mat4::translate(vec3(10.0, 0.0, -2.0)));
        assert_eq!(bbox.mins(), vec3(9.0, -1.0, -3.0));
        assert_eq!(bbox.maxes(), vec3(11.0, 1.0, -1.0));
        assert_eq!(bbox.center(), vec3(10.0, 0.0, -2.0));
    }

    #[test]
    fn transform_axis_aligned_contains_rotated_corners() {
        let original = BBox::new(vec3(-1.0, 0.0, 2.0), vec3(3.0, 0.5, 4.0));
        let transform = Mat4::translate(vec3(1.0, 2.0, 3.0))
            * Mat4::rotate(30.0, vec3(1.0, 1.0, 0.0).normalize());
        let mut bbox = original;
        bbox.transform_axis_aligned(&transform);

        let slack = Vec3::splat(1e-5);
        let grown = BBox::new(bbox.mins() - slack, bbox.maxes() + slack);
        for corner in original.corners() {
            let p = transform * corner;
            assert!(grown.contains_point(p), "{p} not in {bbox:?}");
        }
    }

    #[test]
    fn mat4_mul_transforms_corners_only() {
        let bbox = Mat4::translate(vec3(1.0, 2.0, 3.0)) * unit_box();
        assert_eq!(bbox.mins(), vec3(0.0, 1.0, 2.0));
        assert_eq!(bbox.maxes(), vec3(2.0, 3.0, 4.0));
        assert_eq!(bbox.center(), vec3(1.0, 2.0, 3.0));

        // Mirroring swaps the corners instead of rebuilding the box.
        let flipped = Mat4::scale(vec3(-1.0, -1.0, -1.0)) * BBox::new(Vec3::ZERO, Vec3::ONE);
        assert_eq!(flipped.mins(), vec3(-0.0, -0.0, -0.0));
        assert_eq!(flipped.maxes(), -Vec3::ONE);
        assert!(flipped.is_empty());
    }

    #[test]
    fn nearest_farthest() {
        let bbox = unit_box();
        // The plane z = 3, facing +z.
        let plane = vec4(0.0, 0.0, 1.0, -3.0);
        assert_eq!(bbox.nearest(plane), -4.0);
        assert_eq!(bbox.farthest(plane), -2.0);

        let diagonal = Vec3::ONE.normalize().extend(0.0);
        assert_approx_eq!(bbox.nearest(diagonal), -Real::sqrt(3.0));
        assert_approx_eq!(bbox.farthest(diagonal), Real::sqrt(3.0));
    }

    #[test]
    fn fit_to_box() {
        let bbox = unit_box();
        let (near, far) = bbox.fit_to_box(vec3(0.0, 0.0, 10.0), vec3(0.0, 0.0, 9.0));
        assert_approx_eq!(near, 9.0 - 0.02).abs(1e-5);
        assert_approx_eq!(far, 11.0 + 0.02).abs(1e-5);

        // The distance to `look` does not matter.
        let (near2, far2) = bbox.fit_to_box(vec3(0.0, 0.0, 10.0), vec3(0.0, 0.0, -100.0));
        assert_approx_eq!(near, near2).abs(1e-5);
        assert_approx_eq!(far, far2).abs(1e-5);
    }

    #[test]
    fn fit_to_box_clamps() {
        // Eye inside the box.
        let (near, far) = unit_box().fit_to_box(Vec3::ZERO, vec3(1.0, 0.0, 0.0));
        assert_eq!(near, 0.1);
        assert_approx_eq!(far, 1.02);

        // Box entirely behind the eye.
        let (near, far) = unit_box().fit_to_box(vec3(0.0, 0.0, -5.0), vec3(0.0, 0.0, -6.0));
        assert_eq!(near, 0.1);
        assert_eq!(far, 0.2);
    }
}
