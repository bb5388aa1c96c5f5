//! The scalar type and free-standing scalar helpers.

/// Scalar type used by every vector, matrix and bounding volume in this crate.
///
/// This is [`f32`], or [`f64`] if the `double-precision` feature is enabled.
#[cfg(not(feature = "double-precision"))]
pub type Real = f32;

/// Scalar type used by every vector, matrix and bounding volume in this crate.
///
/// This is [`f32`], or [`f64`] if the `double-precision` feature is enabled.
#[cfg(feature = "double-precision")]
pub type Real = f64;

/// Archimedes' constant (π).
pub const PI: Real = std::f64::consts::PI as Real;
/// A full turn (2π).
pub const TAU: Real = std::f64::consts::TAU as Real;
/// A quarter turn (π/2).
pub const HALF_PI: Real = std::f64::consts::FRAC_PI_2 as Real;
/// 1/π.
pub const INV_PI: Real = std::f64::consts::FRAC_1_PI as Real;

/// Tolerance used by the geometric routines when testing values for "zero".
///
/// This is much larger than [`Real::EPSILON`] (the machine epsilon), since it has to absorb the
/// rounding errors of whole computations, not of a single operation.
pub const EPSILON: Real = 1e-6;

/// Returns the smaller of `a` and `b`.
///
/// Unlike [`f32::min`], this returns `b` when the two compare equal or when either is `NaN`.
#[inline]
pub fn min(a: Real, b: Real) -> Real {
    if a < b {
        a
    } else {
        b
    }
}

/// Returns the larger of `a` and `b`.
///
/// Unlike [`f32::max`], this returns `b` when the two compare equal or when either is `NaN`.
#[inline]
pub fn max(a: Real, b: Real) -> Real {
    if a > b {
        a
    } else {
        b
    }
}

/// Clamps `v` to the range `min..=max`.
///
/// If `min > max`, the result is `max`.
///
/// # Examples
///
/// ```
/// # use galekmath::scalar::clamp;
/// assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
/// assert_eq!(clamp(-3.0, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(0.25, 0.0, 1.0), 0.25);
/// ```
#[inline]
pub fn clamp(v: Real, min: Real, max: Real) -> Real {
    self::min(max, self::max(min, v))
}

/// Linearly interpolates between `a` and `b`.
///
/// `w == 0.0` yields `a`, `w == 1.0` yields `b`. `w` is not clamped.
#[inline]
pub fn lerp(a: Real, b: Real, w: Real) -> Real {
    (1.0 - w) * a + w * b
}

/// Returns `-1.0`, `0.0` or `1.0` depending on the sign of `a`.
///
/// Both zeroes and `NaN` map to `0.0`.
#[inline]
pub fn sign(a: Real) -> Real {
    if a > 0.0 {
        1.0
    } else if a < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[inline]
pub fn degrees_to_radians(degrees: Real) -> Real {
    degrees * (PI / 180.0)
}

#[inline]
pub fn radians_to_degrees(radians: Real) -> Real {
    radians * (180.0 / PI)
}

/// Returns whether `a` and `b` differ by at most the machine epsilon.
///
/// This is a very strict comparison that only absorbs the error of a single rounding step. Use
/// the [`approx`][crate::approx] module for anything that went through more than one operation.
#[inline]
pub fn is_equal(a: Real, b: Real) -> bool {
    (a - b).abs() <= Real::EPSILON
}

/// Returns whether `f` is meaningfully different from zero.
///
/// `NaN` is treated as zero.
#[inline]
pub fn is_nonzero(f: Real) -> bool {
    !f.is_nan() && f.abs() > Real::EPSILON
}

/// Cheap polynomial approximation of the linear-to-sRGB curve for a single channel.
#[inline]
pub fn to_srgb_approx(channel: Real) -> Real {
    (channel * channel) * (channel * 0.2848 + 0.7152)
}

/// Floating-point remainder of `x / y`, with the sign of `x`. `y == 0` gives `NaN`.
#[inline]
pub fn fmod(x: Real, y: Real) -> Real {
    x % y
}

/// Returns whether `x` is a positive power of two.
#[inline]
pub fn is_power_of_two(x: i32) -> bool {
    x > 0 && x & (x - 1) == 0
}

/// Integer square root, rounded down.
///
/// Counts how many consecutive odd numbers fit into `n`, so the cost grows with `sqrt(n)`.
///
/// # Examples
///
/// ```
/// # use galekmath::scalar::isqrt;
/// assert_eq!(isqrt(15), 3);
/// assert_eq!(isqrt(16), 4);
/// ```
pub fn isqrt(n: u32) -> u32 {
    let mut remaining = n;
    let mut odd = 1;
    let mut root = 0;
    while remaining >= odd {
        remaining -= odd;
        odd += 2;
        root += 1;
    }
    root
}
