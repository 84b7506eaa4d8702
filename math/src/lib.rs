/// Small helpers on floats: division that refuses a zero divisor, interval membership.
pub mod float;

/// Homogeneous-coordinate maths module.
/// - Types: 3D points and vectors.
/// - Function `reflect()` to mirror a direction about a surface normal.
/// - Functions `cos_between()` and `clamp_unit()` used by reflectance models.
pub mod hcm;

/// Random point generation inside the unit disk, used to jitter camera samples within a pixel.
pub mod sampling;

/// Threshold under which a direction is considered to be zero-length.
pub const EPSILON: f32 = 1e-4;
