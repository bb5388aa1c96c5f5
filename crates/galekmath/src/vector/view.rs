//! Named field access (`v.x`, `v.y`, ...) for 2, 3 and 4 dimensional vectors.

use std::ops::{Deref, DerefMut};

use crate::{Real, Vector};

#[repr(C)]
pub struct XY {
    pub x: Real,
    pub y: Real,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZ {
    pub x: Real,
    pub y: Real,
    pub z: Real,
    _priv: (), // prevent external construction
}

#[repr(C)]
pub struct XYZW {
    pub x: Real,
    pub y: Real,
    pub z: Real,
    pub w: Real,
    _priv: (), // prevent external construction
}

macro_rules! view {
    ($n:literal => $view:ident) => {
        impl Deref for Vector<$n> {
            type Target = $view;

            #[inline]
            fn deref(&self) -> &Self::Target {
                // Safety: `Vector<N>` is `repr(transparent)` over `[Real; N]`, and the view is a
                // `repr(C)` struct of `N` `Real`s followed by a ZST, so both have the same layout.
                unsafe { &*(self as *const Self).cast::<$view>() }
            }
        }

        impl DerefMut for Vector<$n> {
            #[inline]
            fn deref_mut(&mut self) -> &mut Self::Target {
                // Safety: see `deref`.
                unsafe { &mut *(self as *mut Self).cast::<$view>() }
            }
        }
    };
}

view!(2 => XY);
view!(3 => XYZ);
view!(4 => XYZW);
