use std::fmt::{Display, Formatter, Result};

use math::hcm;

/// Smallest ray parameter reported as a hit. Rays spawned at a surface point would otherwise hit
/// the surface they are leaving.
pub const T_MIN: f32 = 1e-3;

/// Represents a ray:
///
///   origin + t * direction
///
/// where t is positive.
///
/// The direction is not normalized on construction. A ray whose direction has (near-)zero length
/// is a *sentinel*: it carries no geometry and means "stop tracing here". Check
/// [`Ray::is_traceable`] before handing a ray to an intersection query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: hcm::Point3,
    pub dir: hcm::Vec3,
}

impl Ray {
    pub fn new(origin: hcm::Point3, dir: hcm::Vec3) -> Self {
        Ray { origin, dir }
    }

    /// Builds the "do not trace further" sentinel ray located at `origin`.
    pub fn sentinel(origin: hcm::Point3) -> Self {
        Ray {
            origin,
            dir: hcm::Vec3::ZERO,
        }
    }

    /// Returns true if the direction is long enough (at least `epsilon`) to be traced.
    pub fn is_traceable(&self, epsilon: f32) -> bool {
        self.dir.norm() >= epsilon
    }

    /// Returns `None` if the given `t` is outside the ray's extent [`T_MIN`, infinity).
    /// `Some(t)` otherwise.
    pub fn truncated_t(&self, t: f32) -> Option<f32> {
        if t < T_MIN || !t.is_finite() {
            None
        } else {
            Some(t)
        }
    }

    pub fn position_at(&self, t: f32) -> hcm::Point3 {
        self.origin + t * self.dir
    }
}

impl Display for Ray {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let precision = f.precision().unwrap_or(2);
        write!(
            f,
            "{:.precision$} + t{:.precision$}",
            self.origin,
            self.dir,
            precision = precision
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Ray, T_MIN};
    use math::hcm::{point3, vec3, Point3};

    #[test]
    fn sentinel_is_not_traceable() {
        let ray = Ray::sentinel(point3(1.0, 2.0, 3.0));
        assert!(!ray.is_traceable(math::EPSILON));
        assert!(Ray::new(Point3::ORIGIN, vec3(0.0, 0.0, 1e-5)).is_traceable(math::EPSILON) == false);
        assert!(Ray::new(Point3::ORIGIN, vec3(0.0, 0.0, 1.0)).is_traceable(math::EPSILON));
    }

    #[test]
    fn truncation_rejects_self_hits() {
        let ray = Ray::new(Point3::ORIGIN, vec3(1.0, 0.0, 0.0));
        assert_eq!(ray.truncated_t(T_MIN * 0.5), None);
        assert_eq!(ray.truncated_t(-1.0), None);
        assert_eq!(ray.truncated_t(f32::INFINITY), None);
        assert_eq!(ray.truncated_t(2.0), Some(2.0));
        assert_eq!(ray.position_at(2.0), point3(2.0, 0.0, 0.0));
    }
}
