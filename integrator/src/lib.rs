/// Sampling strategies choosing which outgoing directions to explore at a hit:
/// - `DiscreteSampler`: one direction per hit, chosen by the material kind.
/// - `GridSampler`: a fixed, deterministic fan of directions from a subdivided cube.
pub mod sampler;

/// Reflectance models weighting the contribution of each sampled direction:
/// `DiffuseBrdf`, `PhongBrdf` and `DiscreteBrdf`.
pub mod brdf;

/// Recursive estimator of the radiance along a ray.
pub mod path;

pub use brdf::{Brdf, DiffuseBrdf, DiscreteBrdf, PhongBrdf};
pub use path::PathIntegrator;
pub use sampler::{DiscreteSampler, GridSampler, Sampler};
