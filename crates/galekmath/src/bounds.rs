//! Bounding volumes used for culling and clip plane fitting.

mod bbox;
mod bsphere;

pub use bbox::BBox;
pub use bsphere::BSphere;
