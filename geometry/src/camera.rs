use crate::ray;
use math::hcm;

/// Pinhole camera. Maps image-plane coordinates `(x, y)` in [-1, 1]^2 to primary rays through a
/// basis built from the camera position, the point it looks at and its field of view:
/// - `forward`: unit vector from `position` to `look_at`,
/// - `right`: horizontal axis scaled by half the image-plane width at distance 1,
/// - `up`: vertical axis scaled by half the image-plane height at distance 1.
///
/// `x = -1` is the left edge of the image and `y = -1` the bottom edge.
#[derive(Debug, Clone)]
pub struct Camera {
    position: hcm::Point3,
    forward: hcm::Vec3,
    right: hcm::Vec3,
    up: hcm::Vec3,
}

impl Camera {
    /// Builds a camera at `position` looking at `look_at`, with a horizontal field of view of
    /// `fov_deg` degrees. `aspect_ratio` is width / height of the image.
    pub fn new(
        position: hcm::Point3, look_at: hcm::Point3, fov_deg: f32, aspect_ratio: f32,
    ) -> Camera {
        assert!(fov_deg > 0.0 && fov_deg < 180.0, "fov = {}", fov_deg);
        assert!(aspect_ratio > 0.0 && aspect_ratio.is_finite());
        let forward = (look_at - position)
            .try_hat()
            .expect("camera position coincides with its look-at target");

        let mut world_up = hcm::Vec3::Y;
        if forward.cross(world_up).norm_squared() < 1e-8 {
            log::warn!("camera looks along the world up axis; using +Z as up instead");
            world_up = hcm::Vec3::Z;
        }
        let right = forward.cross(world_up).hat();
        let up = right.cross(forward); // adjusted up axis, orthogonal to both.

        let half_width = (fov_deg.to_radians() * 0.5).tan();
        let half_height = half_width / aspect_ratio;

        Camera {
            position,
            forward,
            right: right * half_width,
            up: up * half_height,
        }
    }

    /// Returns the ray from the camera through point `(x, y)` of the image plane, where both
    /// coordinates are between -1 and 1. The direction is unit-length.
    pub fn get_ray(&self, x: f32, y: f32) -> ray::Ray {
        let dir = self.forward + self.right * x + self.up * y;
        ray::Ray::new(self.position, dir.hat())
    }

    pub fn position(&self) -> hcm::Point3 {
        self.position
    }

    pub fn forward(&self) -> hcm::Vec3 {
        self.forward
    }
}
