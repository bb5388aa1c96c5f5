use super::ApproxEq;
use crate::Real;

// Tolerances are `Real`; with `double-precision` off, comparing `f64`s widens them.
macro_rules! float_impl {
    ($($ty:ty),*) => {$(
        impl ApproxEq for $ty {
            fn abs_diff_eq(&self, other: &Self, tolerance: Real) -> bool {
                // Non-finite values only equal themselves, and NaN nothing at all.
                if self.is_finite() && other.is_finite() {
                    (self - other).abs() <= tolerance as $ty
                } else {
                    self == other
                }
            }

            fn rel_diff_eq(&self, other: &Self, tolerance: Real) -> bool {
                if self.is_finite() && other.is_finite() {
                    let scale = self.abs().max(other.abs());
                    (self - other).abs() <= scale * tolerance as $ty
                } else {
                    self == other
                }
            }

            fn ulps_diff_eq(&self, other: &Self, max_ulps: u32) -> bool {
                if self.is_nan() || other.is_nan() {
                    false
                } else if self.is_sign_negative() != other.is_sign_negative() {
                    // -0.0 and +0.0
                    self == other
                } else {
                    self.to_bits().abs_diff(other.to_bits()) <= max_ulps.into()
                }
            }
        }
    )*};
}

float_impl!(f32, f64);

impl<T: ApproxEq<U> + ?Sized, U: ?Sized> ApproxEq<U> for &T {
    fn abs_diff_eq(&self, other: &U, tolerance: Real) -> bool {
        (**self).abs_diff_eq(other, tolerance)
    }

    fn rel_diff_eq(&self, other: &U, tolerance: Real) -> bool {
        (**self).rel_diff_eq(other, tolerance)
    }

    fn ulps_diff_eq(&self, other: &U, max_ulps: u32) -> bool {
        (**self).ulps_diff_eq(other, max_ulps)
    }
}

/// Slices of different length are never equal.
impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    fn abs_diff_eq(&self, other: &[U], tolerance: Real) -> bool {
        zip_all(self, other, |a, b| a.abs_diff_eq(b, tolerance))
    }

    fn rel_diff_eq(&self, other: &[U], tolerance: Real) -> bool {
        zip_all(self, other, |a, b| a.rel_diff_eq(b, tolerance))
    }

    fn ulps_diff_eq(&self, other: &[U], max_ulps: u32) -> bool {
        zip_all(self, other, |a, b| a.ulps_diff_eq(b, max_ulps))
    }
}

fn zip_all<T, U>(a: &[T], b: &[U], mut eq: impl FnMut(&T, &U) -> bool) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(a, b)| eq(a, b))
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    fn abs_diff_eq(&self, other: &[U; N], tolerance: Real) -> bool {
        self[..].abs_diff_eq(&other[..], tolerance)
    }

    fn rel_diff_eq(&self, other: &[U; N], tolerance: Real) -> bool {
        self[..].rel_diff_eq(&other[..], tolerance)
    }

    fn ulps_diff_eq(&self, other: &[U; N], max_ulps: u32) -> bool {
        self[..].ulps_diff_eq(&other[..], max_ulps)
    }
}
