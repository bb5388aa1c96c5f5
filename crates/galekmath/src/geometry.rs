//! Triangle and ray queries.
//!
//! Triangles are given by their vertices in counter-clockwise order, which determines the
//! direction of their normal (see [`compute_normal`]). Rays are given by two points, a start
//! point `src` and a second point `dst` that only determines the direction; rays extend past
//! `dst`.

use crate::{scalar, vec3, Real, Vec2, Vec3};

/// Returns the unsigned angle between `a` and `b` in radians.
///
/// Angles below [`scalar::EPSILON`] are snapped to 0. If either vector has zero length, the
/// result is `NaN`.
///
/// # Examples
///
/// ```
/// # use galekmath::{*, geometry::angle_between};
/// assert_approx_eq!(angle_between(Vec3::X, Vec3::Y), scalar::HALF_PI);
/// assert_eq!(angle_between(Vec3::X, vec3(2.0, 0.0, 0.0)), 0.0);
/// ```
pub fn angle_between(a: Vec3, b: Vec3) -> Real {
    let cos = a.dot(b) / (a.length() * b.length());
    // Rounding can push the cosine of (anti)parallel vectors just outside of -1..=1.
    let angle = cos.clamp(-1.0, 1.0).acos();
    if angle < scalar::EPSILON {
        return 0.0;
    }
    angle
}

/// Computes the (non-normalized) normal of the triangle `p0`, `p1`, `p2`.
///
/// The normal points towards the side from which the vertices appear in counter-clockwise order,
/// and its length is twice the triangle's area.
#[inline]
pub fn compute_normal(p0: Vec3, p1: Vec3, p2: Vec3) -> Vec3 {
    (p1 - p0).cross(p2 - p0)
}

/// Intersects the ray from `src` through `dst` with the plane of the triangle `v0`, `v1`, `v2`.
///
/// The test is single-sided: if `src` lies on or behind the plane (on the side the normal points
/// away from), [`None`] is returned. [`None`] is also returned when the ray runs parallel to the
/// plane. Otherwise the intersection point is returned, which may lie *behind* `src` when the ray
/// points away from the plane.
///
/// # Examples
///
/// ```
/// # use galekmath::{*, geometry::intersect_plane_by_ray};
/// // The plane z = 0, facing +z.
/// let (v0, v1, v2) = (Vec3::ZERO, Vec3::X, Vec3::Y);
/// let hit = intersect_plane_by_ray(v0, v1, v2, vec3(3.0, 4.0, 5.0), vec3(3.0, 4.0, 4.0));
/// assert_eq!(hit, Some(vec3(3.0, 4.0, 0.0)));
///
/// // Starting behind the plane.
/// let miss = intersect_plane_by_ray(v0, v1, v2, vec3(3.0, 4.0, -5.0), Vec3::ZERO);
/// assert_eq!(miss, None);
/// ```
pub fn intersect_plane_by_ray(
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    src: Vec3,
    dst: Vec3,
) -> Option<Vec3> {
    let normal = compute_normal(v0, v1, v2);
    let distance = -normal.dot(v0);

    let src_distance = normal.dot(src) + distance;
    if src_distance <= 0.0 {
        return None;
    }

    let dir = (dst - src).normalize();
    let d = normal.dot(dir);
    if d == 0.0 {
        return None;
    }

    Some(src + dir * (-src_distance / d))
}

/// Returns whether `point`, which must lie in the plane of the triangle `v0`, `v1`, `v2`, is
/// inside of the triangle.
///
/// The angles between the vertices as seen from `point` add up to a full circle for points inside
/// the triangle (and on its edges). 1% of slack is allowed for rounding.
pub fn inside_polygon(v0: Vec3, v1: Vec3, v2: Vec3, point: Vec3) -> bool {
    const MATCH_FACTOR: Real = 0.99;

    let (a, b, c) = (v0 - point, v1 - point, v2 - point);
    let angle = angle_between(a, b) + angle_between(b, c) + angle_between(c, a);
    angle >= MATCH_FACTOR * scalar::TAU
}

/// Intersects the ray from `src` through `dst` with the triangle `v0`, `v1`, `v2`.
///
/// This combines [`intersect_plane_by_ray`] and [`inside_polygon`], and has the same
/// single-sidedness.
///
/// # Examples
///
/// ```
/// # use galekmath::{*, geometry::intersect_polygon_by_ray};
/// let (v0, v1, v2) = (Vec3::ZERO, Vec3::X, Vec3::Y);
/// let src = vec3(0.25, 0.25, 1.0);
/// let hit = intersect_polygon_by_ray(v0, v1, v2, src, vec3(0.25, 0.25, 0.0));
/// assert_approx_eq!(hit.unwrap(), vec3(0.25, 0.25, 0.0));
///
/// let miss = intersect_polygon_by_ray(v0, v1, v2, vec3(1.0, 1.0, 1.0), vec3(1.0, 1.0, 0.0));
/// assert_eq!(miss, None);
/// ```
pub fn intersect_polygon_by_ray(
    v0: Vec3,
    v1: Vec3,
    v2: Vec3,
    src: Vec3,
    dst: Vec3,
) -> Option<Vec3> {
    intersect_plane_by_ray(v0, v1, v2, src, dst)
        .filter(|&point| inside_polygon(v0, v1, v2, point))
}

/// Returns whether the ray from `src` through `dst` passes through the sphere at `center` with
/// radius `radius`.
///
/// A ray starting inside of the sphere always intersects it. The ray must pass strictly within
/// `radius` of `center`, so tangent rays do not count.
///
/// # Examples
///
/// ```
/// # use galekmath::{*, geometry::intersect_sphere_by_ray};
/// assert!(intersect_sphere_by_ray(Vec3::ZERO, 1.0, vec3(0.0, 0.0, 5.0), vec3(0.0, 0.0, -5.0)));
/// // Sphere is behind the ray.
/// assert!(!intersect_sphere_by_ray(Vec3::ZERO, 1.0, vec3(0.0, 0.0, 5.0), vec3(0.0, 0.0, 6.0)));
/// ```
pub fn intersect_sphere_by_ray(center: Vec3, radius: Real, src: Vec3, dst: Vec3) -> bool {
    let to_center = center - src;
    let dir = (dst - src).normalize();

    let t = dir.dot(to_center);
    if t <= 0.0 && to_center.length() > radius {
        return false;
    }

    let closest = src + dir * t;
    (closest - center).length() < radius
}

/// Computes the tangent and binormal of the triangle `p0`, `p1`, `p2` with texture coordinates
/// `t0`, `t1`, `t2`, for use in normal mapping.
///
/// The tangent follows increasing `u`, the binormal increasing `v`. Both are unnormalized. Axes
/// along which the texture mapping is degenerate get a zero component. The tangent is flipped if
/// needed, so that `normal`, the tangent and the binormal form a right-handed basis.
///
/// Returns `(tangent, binormal)`.
pub fn compute_tangent_basis(
    p0: Vec3,
    p1: Vec3,
    p2: Vec3,
    t0: Vec2,
    t1: Vec2,
    t2: Vec2,
    normal: Vec3,
) -> (Vec3, Vec3) {
    let (dt1, dt2) = (t1 - t0, t2 - t0);
    let (dp1, dp2) = (p1 - p0, p2 - p0);

    let mut tangent = Vec3::ZERO;
    let mut binormal = Vec3::ZERO;
    for axis in 0..3 {
        // Solves for d(axis)/du and d(axis)/dv.
        let cp = vec3(dp1[axis], dt1.x, dt1.y).cross(vec3(dp2[axis], dt2.x, dt2.y));
        if cp.x.abs() > scalar::EPSILON {
            tangent[axis] = -cp.y / cp.x;
            binormal[axis] = -cp.z / cp.x;
        }
    }

    if normal.dot(tangent.cross(binormal)) < 0.0 {
        tangent = -tangent;
    }
    (tangent, binormal)
}
