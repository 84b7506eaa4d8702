/// Pinhole camera producing primary rays from image-plane coordinates.
pub mod camera;
pub mod ray;
