use std::{
    fmt,
    ops::{Deref, DerefMut},
};

use crate::{approx::ApproxEq, scalar, vec4, Real, Vec4};

/// A linear RGBA color with [`Real`] channels.
///
/// Channels are nominally in the range `0.0..=1.0`, but this is not enforced. Use
/// [`Color::saturate`] to clamp them.
///
/// Channels can be accessed as fields `r`, `g`, `b` and `a`. [`Color::as_vec`] and the [`From`]
/// impls convert to and from a plain [`Vec4`] for arithmetic.
#[derive(Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Color(Vec4);

unsafe impl bytemuck::Zeroable for Color {}
unsafe impl bytemuck::Pod for Color {}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    #[inline]
    pub const fn new(r: Real, g: Real, b: Real, a: Real) -> Self {
        Self(vec4(r, g, b, a))
    }

    /// Unpacks a color stored as `0xAARRGGBB`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let c = Color::from_argb32(0xff_ff_00_00);
    /// assert_eq!(c, Color::new(1.0, 0.0, 0.0, 1.0));
    /// ```
    pub fn from_argb32(argb: u32) -> Self {
        let [a, r, g, b] = argb.to_be_bytes().map(|byte| Real::from(byte) / 255.0);
        Self::new(r, g, b, a)
    }

    /// Converts 8-bit sRGB channels to a linear, opaque color.
    ///
    /// Values below 10 are on the linear toe of the sRGB curve, everything else goes through
    /// the 2.4 power segment.
    ///
    /// # Examples
    ///
    /// ```
    /// # use galekmath::*;
    /// let c = Color::srgb_to_linear(0, 255, 188);
    /// assert_eq!(c.r, 0.0);
    /// assert_approx_eq!(c.g, 1.0);
    /// assert_approx_eq!(c.b, 0.5).abs(0.01);
    /// assert_eq!(c.a, 1.0);
    /// ```
    pub fn srgb_to_linear(red: u8, green: u8, blue: u8) -> Self {
        fn channel(v: u8) -> Real {
            let v = Real::from(v);
            if v < 10.0 {
                v / 3294.6
            } else {
                ((v / 255.0 + 0.055) / 1.055).powf(2.4)
            }
        }

        Self::new(channel(red), channel(green), channel(blue), 1.0)
    }

    /// Blends `from` and `to` per channel. `frac == 0.0` yields `from`.
    pub fn lerp(from: Self, to: Self, frac: Real) -> Self {
        Self(Vec4::from_fn(|i| scalar::lerp(from.0[i], to.0[i], frac)))
    }

    /// Clamps every channel to `0.0..=1.0`.
    #[inline]
    pub fn saturate(self) -> Self {
        Self(self.0.saturate())
    }

    #[inline]
    pub const fn as_vec(&self) -> Vec4 {
        self.0
    }
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Vec4> for Color {
    #[inline]
    fn from(value: Vec4) -> Self {
        Self(value)
    }
}

impl From<Color> for Vec4 {
    #[inline]
    fn from(value: Color) -> Self {
        value.0
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Color")
            .field("r", &self.r)
            .field("g", &self.g)
            .field("b", &self.b)
            .field("a", &self.a)
            .finish()
    }
}

impl ApproxEq for Color {
    fn abs_diff_eq(&self, other: &Self, tolerance: Real) -> bool {
        self.0.abs_diff_eq(&other.0, tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: Real) -> bool {
        self.0.rel_diff_eq(&other.0, tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, max_ulps: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, max_ulps)
    }
}

#[repr(C)]
pub struct RGBA {
    pub r: Real,
    pub g: Real,
    pub b: Real,
    pub a: Real,
    _priv: (), // prevent external construction
}

impl Deref for Color {
    type Target = RGBA;

    #[inline]
    fn deref(&self) -> &RGBA {
        // Safety: `Color` is `repr(transparent)` over 4 `Real`s, and so is `RGBA` (plus a ZST).
        unsafe { &*(self as *const Self).cast::<RGBA>() }
    }
}

impl DerefMut for Color {
    #[inline]
    fn deref_mut(&mut self) -> &mut RGBA {
        // Safety: see `deref`.
        unsafe { &mut *(self as *mut Self).cast::<RGBA>() }
    }
}

#[cfg(test)]
mod tests {
    use crate::assert_approx_eq;

    use super::*;

    #[test]
    fn channels() {
        let mut c = Color::new(0.1, 0.2, 0.3, 0.4);
        assert_eq!(c.r, 0.1);
        assert_eq!(c.g, 0.2);
        assert_eq!(c.b, 0.3);
        assert_eq!(c.a, 0.4);

        c.g = 1.0;
        assert_eq!(c.as_vec(), vec4(0.1, 1.0, 0.3, 0.4));
        assert_eq!(Vec4::from(c).y, 1.0);
    }

    #[test]
    fn defaults() {
        assert_eq!(Color::default(), Color::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Color::WHITE.as_vec(), Vec4::ONE);
    }

    #[test]
    fn argb32() {
        let c = Color::from_argb32(0x80_ff_40_00);
        assert_approx_eq!(c.a, 128.0 / 255.0);
        assert_eq!(c.r, 1.0);
        assert_approx_eq!(c.g, 64.0 / 255.0);
        assert_eq!(c.b, 0.0);

        assert_eq!(Color::from_argb32(0), Color::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(Color::from_argb32(u32::MAX), Color::WHITE);
    }

    #[test]
    fn srgb() {
        let c = Color::srgb_to_linear(9, 10, 255);
        // 9 is still on the linear segment, 10 is not.
        assert_approx_eq!(c.r, 9.0 / 3294.6);
        assert_approx_eq!(c.g, ((10.0 / 255.0 + 0.055) / 1.055 as Real).powf(2.4));
        assert_approx_eq!(c.b, 1.0);
        assert_eq!(c.a, 1.0);

        // Both segments meet at roughly the same value.
        assert_approx_eq!(c.r, c.g).abs(1e-3);
    }

    #[test]
    fn lerp() {
        let from = Color::BLACK;
        let to = Color::new(1.0, 0.5, 0.0, 0.0);
        assert_eq!(Color::lerp(from, to, 0.0), from);
        assert_eq!(Color::lerp(from, to, 1.0), to);
        assert_approx_eq!(Color::lerp(from, to, 0.5), Color::new(0.5, 0.25, 0.0, 0.5));
    }

    #[test]
    fn saturate() {
        let c = Color::new(-0.5, 0.5, 1.5, 2.0).saturate();
        assert_eq!(c, Color::new(0.0, 0.5, 1.0, 1.0));
    }

    #[test]
    fn fmt() {
        assert_eq!(
            format!("{:?}", Color::WHITE),
            "Color { r: 1.0, g: 1.0, b: 1.0, a: 1.0 }"
        );
    }
}
