use std::{array, fmt};

use crate::{scalar, Real};

mod ops;
mod view;

pub use view::{XY, XYZ, XYZW};

/// A 2-dimensional vector.
pub type Vec2 = Vector<2>;
/// A 3-dimensional vector.
pub type Vec3 = Vector<3>;
/// A 4-dimensional vector.
pub type Vec4 = Vector<4>;

/// An `N`-element column vector of [`Real`]s.
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::splat`] copies the given value into each element.
/// - [`Vector::from_fn`] invokes a closure with the index of each element.
/// - Vectors can be created from arrays using their [`From`] implementation, and from slices of
///   matching length using [`TryFrom`].
/// - The [`Default`] implementation returns [`Vector::ZERO`].
/// - `Vector::X`, `Vector::Y`, `Vector::Z` and `Vector::W` are unit vectors pointing along the
///   given axis.
///
/// Conversions between dimensions are always explicit: [`Vec3::truncate`] drops the last element,
/// [`Vec3::extend`] appends one, and [`Vec3::to_point`] / [`Vec3::to_direction`] widen to
/// homogeneous coordinates.
///
/// # Element Access
///
/// - Elements can be accessed as fields `x`, `y`, `z`, or `w`.
/// - The [`Index`] and [`IndexMut`] impls can be used just like on arrays. Out of bounds access
///   panics.
/// - [`Vector::as_array`], [`Vector::as_slice`], and [`Vector::into_array`] expose the underlying
///   elements.
/// - [`bytemuck::Zeroable`] and [`bytemuck::Pod`] are implemented, so vectors can be uploaded to
///   the GPU without conversion.
///
/// # Equality
///
/// `==` compares elements exactly. Use [`assert_approx_eq!`][crate::assert_approx_eq] or
/// [`approx::approx_eq`][crate::approx::approx_eq] for computed values.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vector<const N: usize>([Real; N]);

unsafe impl<const N: usize> bytemuck::Zeroable for Vector<N> {}
unsafe impl<const N: usize> bytemuck::Pod for Vector<N> {}

impl<const N: usize> Vector<N> {
    /// A vector with each element set to 0.
    pub const ZERO: Self = Self([0.0; N]);
    /// A vector with each element set to 1.
    pub const ONE: Self = Self([1.0; N]);
    /// A vector with each element set to the smallest finite [`Real`].
    pub const MIN: Self = Self([-Real::MAX; N]);
    /// A vector with each element set to the largest finite [`Real`].
    pub const MAX: Self = Self([Real::MAX; N]);
}

impl Vector<2> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([1.0, 0.0]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([0.0, 1.0]);
}

impl Vector<3> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([1.0, 0.0, 0.0]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([0.0, 1.0, 0.0]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([0.0, 0.0, 1.0]);
}

impl Vector<4> {
    /// A unit vector pointing in the X direction.
    pub const X: Self = Self([1.0, 0.0, 0.0, 0.0]);
    /// A unit vector pointing in the Y direction.
    pub const Y: Self = Self([0.0, 1.0, 0.0, 0.0]);
    /// A unit vector pointing in the Z direction.
    pub const Z: Self = Self([0.0, 0.0, 1.0, 0.0]);
    /// A unit vector pointing in the W direction.
    pub const W: Self = Self([0.0, 0.0, 0.0, 1.0]);
}

impl<const N: usize> Vector<N> {
    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let v: Vec3 = Vector::splat(2.0);
    /// assert_eq!(v, vec3(2.0, 2.0, 2.0));
    /// ```
    #[inline]
    pub const fn splat(elem: Real) -> Self {
        Self([elem; N])
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let v: Vec3 = Vector::from_fn(|i| i as Real * 10.0);
    /// assert_eq!(v, vec3(0.0, 10.0, 20.0));
    /// ```
    #[inline]
    pub fn from_fn<F>(cb: F) -> Self
    where
        F: FnMut(usize) -> Real,
    {
        Self(array::from_fn(cb))
    }

    /// Applies a closure to each element, returning a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let v = vec3(1.0, -2.0, 3.0).map(Real::abs);
    /// assert_eq!(v, vec3(1.0, 2.0, 3.0));
    /// ```
    #[inline]
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnMut(Real) -> Real,
    {
        Self(self.0.map(f))
    }

    /// Combines the elements of `self` and `other` pairwise using a closure.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let v = vec2(1.0, 5.0).zip(vec2(4.0, 2.0), Real::max);
    /// assert_eq!(v, vec2(4.0, 5.0));
    /// ```
    #[inline]
    pub fn zip<F>(self, other: Self, mut f: F) -> Self
    where
        F: FnMut(Real, Real) -> Real,
    {
        Self::from_fn(|i| f(self.0[i], other.0[i]))
    }

    /// Returns a reference to the underlying elements as an array of length `N`.
    #[inline]
    pub const fn as_array(&self) -> &[Real; N] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as an array of length `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let mut v = vec3(1.0, 2.0, 3.0);
    /// v.as_mut_array()[1] = 777.0;
    /// assert_eq!(v, [1.0, 777.0, 3.0]);
    /// ```
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [Real; N] {
        &mut self.0
    }

    /// Returns a reference to the underlying elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[Real] {
        &self.0
    }

    /// Returns a mutable reference to the underlying elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [Real] {
        &mut self.0
    }

    /// Converts this [`Vector`] into an `N`-element array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// assert_eq!(vec3(1.0, 2.0, 3.0).into_array(), [1.0, 2.0, 3.0]);
    /// ```
    #[inline]
    pub const fn into_array(self) -> [Real; N] {
        self.0
    }

    /// Returns the squared length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// assert_eq!(vec2(4.0, 0.0).length2(), 16.0);
    /// ```
    #[inline]
    pub fn length2(&self) -> Real {
        self.dot(*self)
    }

    /// Returns the Euclidean length of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// assert_eq!(vec3(3.0, 0.0, 4.0).length(), 5.0);
    /// ```
    #[inline]
    pub fn length(&self) -> Real {
        self.length2().sqrt()
    }

    /// Returns the Euclidean distance between `self` and `other`.
    #[inline]
    pub fn distance(self, other: Self) -> Real {
        (self - other).length()
    }

    /// Divides this vector by its length, resulting in a unit vector.
    ///
    /// A zero-length vector produces `NaN` elements. Callers that may pass degenerate vectors
    /// have to check [`Vector::length`] first.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize();
    /// assert_eq!(z, Vec3::Z);
    ///
    /// assert!(Vec3::ZERO.normalize().x.is_nan());
    /// ```
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Computes the dot product between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let a = vec3(1.0, 3.0, -5.0);
    /// let b = vec3(4.0, -2.0, -1.0);
    /// assert_eq!(a.dot(b), 3.0);
    /// ```
    #[inline]
    pub fn dot(self, other: Self) -> Real {
        self.0
            .into_iter()
            .zip(other.0)
            .fold(0.0, |acc, (a, b)| acc + a * b)
    }

    /// Computes the smallest positive angle between `self` and `other`, in radians.
    ///
    /// Both vectors must have non-zero length for the result to be meaningful. Also see
    /// [`geometry::angle_between`][crate::geometry::angle_between], which snaps tiny angles to 0.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// use galekmath::scalar::{HALF_PI, PI};
    ///
    /// assert_approx_eq!(Vec3::Y.abs_angle_to(Vec3::X), HALF_PI);
    /// assert_approx_eq!(Vec3::Y.abs_angle_to(-Vec3::Y), PI);
    /// ```
    pub fn abs_angle_to(self, other: Self) -> Real {
        let cos = self.dot(other) / (self.length() * other.length());
        cos.acos()
    }

    /// Element-wise minimum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let a = vec3(-1.0, 2.0, 5.0);
    /// let b = vec3(3.0, Real::NEG_INFINITY, 0.0);
    /// assert_eq!(a.min(b), vec3(-1.0, Real::NEG_INFINITY, 0.0));
    /// ```
    #[inline]
    pub fn min(self, other: Self) -> Self {
        self.zip(other, scalar::min)
    }

    /// Element-wise maximum between `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let a = vec3(-1.0, 2.0, 5.0);
    /// let b = vec3(3.0, Real::NEG_INFINITY, 0.0);
    /// assert_eq!(a.max(b), vec3(3.0, 2.0, 5.0));
    /// ```
    #[inline]
    pub fn max(self, other: Self) -> Self {
        self.zip(other, scalar::max)
    }

    /// Element-wise range clamp of the elements in `self` between `min` and `max`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let v = vec3(-1.0, 0.5, 7.0).clamp(Vec3::ZERO, Vec3::splat(2.0));
    /// assert_eq!(v, vec3(0.0, 0.5, 2.0));
    /// ```
    #[inline]
    pub fn clamp(self, min: Self, max: Self) -> Self {
        Self::from_fn(|i| scalar::clamp(self[i], min[i], max[i]))
    }

    /// Clamps every element to the range `0.0..=1.0`.
    #[inline]
    pub fn saturate(self) -> Self {
        self.map(|v| scalar::clamp(v, 0.0, 1.0))
    }

    /// Rounds every element down to the nearest integer.
    #[inline]
    pub fn floor(self) -> Self {
        self.map(Real::floor)
    }
}

impl Vector<2> {
    /// Appends another value to the vector, yielding a [`Vec3`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let v = vec2(-1.0, 2.0).extend(5.0);
    /// assert_eq!(v, vec3(-1.0, 2.0, 5.0));
    /// ```
    #[inline]
    pub const fn extend(self, value: Real) -> Vec3 {
        let [x, y] = self.0;
        Vector([x, y, value])
    }

    /// Widens `self` to a homogeneous point with `z = 0` and `w = 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// assert_eq!(vec2(3.0, 4.0).to_point(), vec4(3.0, 4.0, 0.0, 1.0));
    /// ```
    #[inline]
    pub const fn to_point(self) -> Vec4 {
        let [x, y] = self.0;
        Vector([x, y, 0.0, 1.0])
    }

    /// Computes the [perpendicular dot product] of `self` and `other`.
    ///
    /// This is the Z coordinate of the cross product of both vectors extended with `z = 0`.
    ///
    /// [perpendicular dot product]: https://mathworld.wolfram.com/PerpDotProduct.html
    #[inline]
    pub fn perp_dot(self, other: Self) -> Real {
        self.x * other.y - self.y * other.x
    }
}

impl Vector<3> {
    /// Removes the last element of this vector, yielding a [`Vec2`].
    #[inline]
    pub const fn truncate(self) -> Vec2 {
        let [x, y, _] = self.0;
        Vector([x, y])
    }

    /// Returns the `x` and `y` elements. Same as [`Vec3::truncate`].
    #[inline]
    pub const fn xy(self) -> Vec2 {
        self.truncate()
    }

    /// Appends another value to the vector, yielding a [`Vec4`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(99.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 99.0));
    /// ```
    #[inline]
    pub const fn extend(self, value: Real) -> Vec4 {
        let [x, y, z] = self.0;
        Vector([x, y, z, value])
    }

    /// Widens `self` to a homogeneous point (`w = 1`), which is affected by translation.
    #[inline]
    pub const fn to_point(self) -> Vec4 {
        self.extend(1.0)
    }

    /// Widens `self` to a homogeneous direction (`w = 0`), which ignores translation.
    #[inline]
    pub const fn to_direction(self) -> Vec4 {
        self.extend(0.0)
    }

    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs. Swapping the arguments inverts its direction.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
    /// assert_eq!(Vec3::Y.cross(Vec3::X), -Vec3::Z);
    /// ```
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        let [a1, a2, a3] = self.0;
        let [b1, b2, b3] = other.0;

        #[rustfmt::skip]
        let cross = vec3(
            a2 * b3 - a3 * b2,
            a3 * b1 - a1 * b3,
            a1 * b2 - a2 * b1,
        );
        cross
    }
}

impl Vector<4> {
    /// Removes the `w` element, yielding a [`Vec3`].
    ///
    /// No perspective division is performed.
    #[inline]
    pub const fn truncate(self) -> Vec3 {
        let [x, y, z, _] = self.0;
        Vector([x, y, z])
    }

    /// Returns the `x`, `y` and `z` elements. Same as [`Vec4::truncate`].
    #[inline]
    pub const fn xyz(self) -> Vec3 {
        self.truncate()
    }

    /// Returns the `x` and `y` elements.
    #[inline]
    pub const fn xy(self) -> Vec2 {
        let [x, y, _, _] = self.0;
        Vector([x, y])
    }
}

impl<const N: usize> Default for Vector<N> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const N: usize> From<[Real; N]> for Vector<N> {
    #[inline]
    fn from(value: [Real; N]) -> Self {
        Self(value)
    }
}

impl<const N: usize> From<Vector<N>> for [Real; N] {
    #[inline]
    fn from(value: Vector<N>) -> Self {
        value.0
    }
}

impl<const N: usize> TryFrom<&[Real]> for Vector<N> {
    type Error = std::array::TryFromSliceError;

    #[inline]
    fn try_from(value: &[Real]) -> Result<Self, Self::Error> {
        <[Real; N]>::try_from(value).map(Self)
    }
}

impl<const N: usize> fmt::Debug for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<const N: usize> fmt::Display for Vector<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        write!(f, ")")
    }
}

impl<const N: usize> AsRef<[Real]> for Vector<N> {
    #[inline]
    fn as_ref(&self) -> &[Real] {
        &self.0
    }
}

impl<const N: usize> AsRef<[Real; N]> for Vector<N> {
    #[inline]
    fn as_ref(&self) -> &[Real; N] {
        &self.0
    }
}

impl<const N: usize> AsMut<[Real]> for Vector<N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [Real] {
        &mut self.0
    }
}

impl<const N: usize> AsMut<[Real; N]> for Vector<N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [Real; N] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2(x: Real, y: Real) -> Vec2 {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3(x: Real, y: Real, z: Real) -> Vec3 {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4(x: Real, y: Real, z: Real, w: Real) -> Vec4 {
    Vector([x, y, z, w])
}
