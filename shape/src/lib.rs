mod interaction;
mod simple;

use geometry::ray::Ray;

pub use interaction::Interaction;
pub use simple::*;

/// Represents the characteristics of a shape: something a ray can hit.
/// See `simple.rs` for the implementations: `Sphere`, `Plane` and `ParallelQuad`.
///
/// `intersect` reports the nearest hit with `t` no smaller than [`geometry::ray::T_MIN`], and
/// never reports a hit for a ray whose direction is zero.
pub trait Shape: Send + Sync {
    fn summary(&self) -> String;
    fn intersect(&self, r: &Ray) -> Option<Interaction>;
}
