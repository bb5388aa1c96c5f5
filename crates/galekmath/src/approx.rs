//! Approximate equality for floats, vectors, matrices and the other types of this crate.
//!
//! Exact comparison (`==`) is implemented for every type, but almost nothing computed by this
//! crate will compare exactly equal to a hand-written expectation. The [`ApproxEq`] trait and the
//! [`assert_approx_eq!`][crate::assert_approx_eq] macro exist for that purpose.

mod impls;

use std::{fmt, panic::Location};

use crate::Real;

/// Absolute tolerance of [`approx_eq`] and of assertions that don't pick a comparison.
pub const DEFAULT_ABS: Real = 1e-6;

/// Relative tolerance of [`approx_eq`] and of assertions that don't pick a comparison.
pub const DEFAULT_REL: Real = 1e-6;

/// Types whose values can be compared with a tolerance.
///
/// Tolerances are always given as [`Real`]. Comparing `f64`s without the `double-precision`
/// feature widens an `f32` tolerance, which may end up slightly smaller than the literal it was
/// written as.
///
/// Vectors, matrices, quaternions and colors are equal when every component is.
///
/// Background on why there is more than one way to do this:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// `|self - other| <= tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, tolerance: Real) -> bool;

    /// `|self - other| <= max(|self|, |other|) * tolerance`.
    fn rel_diff_eq(&self, other: &Rhs, tolerance: Real) -> bool;

    /// Returns whether `self` and `other` are at most `max_ulps` representable values apart
    /// ([*units in the last place*]).
    ///
    /// `NaN` compares unequal to everything. Signed zeros are equal to each other, but otherwise
    /// values of opposite sign never are.
    ///
    /// [*units in the last place*]: https://en.wikipedia.org/wiki/Unit_in_the_last_place
    fn ulps_diff_eq(&self, other: &Rhs, max_ulps: u32) -> bool;
}

/// Returns whether `a` and `b` are within [`DEFAULT_ABS`] of each other, or within
/// [`DEFAULT_REL`] relative to the larger one.
///
/// # Examples
///
/// ```
/// # use galekmath::*;
/// let almost_one = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert!(approx::approx_eq(&almost_one, &1.0));
/// assert!(!approx::approx_eq(&Vec3::X, &Vec3::Y));
/// ```
pub fn approx_eq<T: ApproxEq>(a: &T, b: &T) -> bool {
    a.abs_diff_eq(b, DEFAULT_ABS) || a.rel_diff_eq(b, DEFAULT_REL)
}

/// The comparisons an [`Asserter`] was configured with.
#[derive(Default)]
struct Tolerances {
    abs: Option<Real>,
    rel: Option<Real>,
    ulps: Option<u32>,
}

impl Tolerances {
    fn accept<T: ApproxEq>(&self, left: &T, right: &T) -> bool {
        if self.abs.is_none() && self.rel.is_none() && self.ulps.is_none() {
            return approx_eq(left, right);
        }

        self.abs.map_or(false, |tol| left.abs_diff_eq(right, tol))
            || self.rel.map_or(false, |tol| left.rel_diff_eq(right, tol))
            || self.ulps.map_or(false, |max| left.ulps_diff_eq(right, max))
    }
}

/// Pending assertion created by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// Nothing is checked until the value is dropped, which happens at the end of the statement. The
/// builder methods [`abs`](Self::abs), [`rel`](Self::rel) and [`ulps`](Self::ulps) select the
/// comparison; if several are selected, passing any one of them is enough. Without any, the
/// values are compared with [`approx_eq`].
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    expect_equal: bool,
    caller: &'static Location<'static>,
    msg: Option<fmt::Arguments<'a>>,
    tolerances: Tolerances,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn new(
        left: &'a T,
        right: &'a T,
        kind: AssertionKind,
        msg: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            expect_equal: kind == AssertionKind::Eq,
            caller: Location::caller(),
            msg,
            tolerances: Tolerances::default(),
        }
    }

    /// Accepts values whose difference is at most `tolerance`.
    ///
    /// Use this near zero, where relative comparisons break down.
    pub fn abs(&mut self, tolerance: Real) -> &mut Self {
        self.tolerances.abs = Some(tolerance);
        self
    }

    /// Accepts values whose difference is at most `tolerance` times the larger magnitude.
    ///
    /// Use this for large values like far plane distances or world space positions.
    pub fn rel(&mut self, tolerance: Real) -> &mut Self {
        self.tolerances.rel = Some(tolerance);
        self
    }

    /// Accepts values at most `max_ulps` representable floats apart.
    pub fn ulps(&mut self, max_ulps: u32) -> &mut Self {
        self.tolerances.ulps = Some(max_ulps);
        self
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    fn drop(&mut self) {
        if self.tolerances.accept(self.left, self.right) != self.expect_equal {
            let op = if self.expect_equal { "==" } else { "!=" };
            report_failure(op, self.left, self.right, self.caller, self.msg);
        }
    }
}

// `Drop::drop` can't be `#[track_caller]`, so the macro's location is captured in `new` and
// printed here.
#[cold]
fn report_failure(
    op: &str,
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    caller: &Location<'_>,
    msg: Option<fmt::Arguments<'_>>,
) -> ! {
    let msg = msg.map(|args| format!(": {args}")).unwrap_or_default();
    panic!(
        "assertion `left {op} right` failed at {caller}{msg}\n  left: {left:?}\n right: {right:?}"
    )
}

#[doc(hidden)]
#[derive(Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AssertionKind {
    Eq,
    Ne,
}

/// [`assert_eq!`] for values compared through [`ApproxEq`].
///
/// Evaluates to an [`Asserter`], so a comparison and tolerance can be chained onto the
/// invocation.
///
/// # Examples
///
/// ```
/// # use galekmath::*;
/// let m = Mat3::rotate(90.0, Vec3::Z);
/// assert_approx_eq!(m * Vec3::X, Vec3::Y);
/// assert_approx_eq!(100.0 as Real, 99.0 as Real).abs(1.0);
/// assert_approx_eq!(100.0 as Real, 99.0 as Real).rel(0.02);
/// assert_approx_eq!(1.0, 1.0 + Real::EPSILON).ulps(1);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Eq,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

/// The negation of [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use galekmath::*;
/// assert_approx_ne!(Vec3::X, Vec3::Y);
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::None,
        )
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::new(
            &$lhs,
            &$rhs,
            $crate::approx::AssertionKind::Ne,
            ::core::option::Option::Some(::core::format_args!($($arg)+)),
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::{approx::ApproxEq, vec3, Real};

    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn fail_ne() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn fail_eq() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "near plane")]
    fn assertion_message() {
        assert_approx_eq!(-1.0, -0.9, "near plane");
    }

    #[test]
    fn default_tolerance() {
        let sum: Real = (0..10).fold(0.0, |acc, _| acc + 0.1);
        assert_approx_eq!(sum, 1.0);
        assert_approx_eq!(1.0, 1.0 + 5e-7);
        assert_approx_ne!(1.0, 1.0 + 1e-4);
        assert_approx_eq!(1e7, 1e7 + 1.0);
    }

    #[test]
    fn rel() {
        assert_approx_eq!(1.0, 1.001).rel(0.01);
        assert_approx_eq!(1.0, -1.0).rel(2.0);
        assert_approx_eq!(0.0, 0.00001).rel(1.0);
    }

    #[test]
    fn f64_operands_take_real_tolerance() {
        // Without `double-precision`, 0.01 is rounded to `f32` before it is widened.
        let tolerance: Real = 0.01;
        assert_eq!(
            100.0f64.rel_diff_eq(&99.0, tolerance),
            100.0 * f64::from(tolerance) >= 1.0
        );
        assert!(100.0f64.rel_diff_eq(&99.0, 0.011));
        assert!(100.0f64.abs_diff_eq(&99.0, 1.0));
        assert_approx_eq!(100.0f64, 99.0).rel(0.011);
    }

    #[test]
    fn ulps() {
        assert_approx_eq!(1.0, 1.0 + Real::EPSILON).ulps(1);
        assert_approx_ne!(1.0, 1.0 + Real::EPSILON).ulps(0);
        assert_approx_eq!(-0.0, 0.0).ulps(0);
    }

    #[test]
    fn nan() {
        assert_approx_ne!(Real::NAN, Real::NAN).abs(1.0);
        assert_approx_ne!(Real::NAN, Real::NAN).rel(1.0);
        assert_approx_ne!(Real::NAN, Real::NAN).ulps(100);
        assert_approx_ne!(Real::NAN, 0.0);
        assert_approx_ne!(vec3(0.0, Real::NAN, 0.0), vec3(0.0, Real::NAN, 0.0));
    }

    #[test]
    fn inf() {
        assert_approx_eq!(Real::INFINITY, Real::INFINITY).abs(0.0);
        assert_approx_eq!(Real::INFINITY, Real::INFINITY).rel(0.0);
        assert_approx_ne!(Real::INFINITY, Real::NEG_INFINITY);
        assert_approx_ne!(Real::INFINITY, Real::MAX).abs(10000.0);
        assert_approx_eq!(Real::MAX, Real::INFINITY).ulps(1);
    }

    #[test]
    fn compound() {
        assert_approx_eq!(vec3(1.0, 2.0, 3.0), vec3(1.0, 2.0, 3.0 + 1e-7));
        assert_approx_ne!(vec3(1.0, 2.0, 3.0), vec3(1.0, 2.1, 3.0));
        assert_approx_eq!(vec3(1.0, 2.0, 3.0), vec3(1.1, 2.1, 3.1)).abs(0.2);
    }
}
