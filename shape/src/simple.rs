use math::float::{Float, Inside};
use math::hcm::{point3, vec3, Point3, Vec3};

use crate::{Interaction, Shape};
use geometry::ray::Ray;

#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    center: Point3,
    radius: f32,
}

impl Sphere {
    pub fn new(center: Point3, radius: f32) -> Sphere {
        assert!(radius > 0.0, "sphere radius = {}", radius);
        Sphere { center, radius }
    }
    pub fn from_raw(center: (f32, f32, f32), radius: f32) -> Sphere {
        let (x, y, z) = center;
        let has_nan = x.is_nan() || y.is_nan() || z.is_nan() || radius.is_nan();
        assert!(!has_nan);
        Self::new(Point3::new(x, y, z), radius)
    }
}

/// Infinite plane through `point`. The reported normal always faces the incoming ray, so both
/// sides of the plane can be seen.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    point: Point3,
    normal: Vec3,
}

impl Plane {
    pub fn new(point: Point3, normal: Vec3) -> Self {
        Self {
            point,
            normal: normal.hat(),
        }
    }
    pub fn point(&self) -> Point3 {
        self.point
    }
    pub fn normal(&self) -> Vec3 {
        self.normal
    }
}

/// Parallelogram spanned by `side_u` and `side_v` from `origin`. Like [`Plane`], its normal faces
/// the incoming ray.
#[derive(Debug, Clone, Copy)]
pub struct ParallelQuad {
    pub origin: Point3,
    pub side_u: Vec3,
    pub side_v: Vec3,
}

impl ParallelQuad {
    pub fn new(origin: Point3, side_u: Vec3, side_v: Vec3) -> Self {
        assert!(!side_u.cross(side_v).is_zero(), "degenerate quad");
        Self {
            origin,
            side_u,
            side_v,
        }
    }
    pub fn new_xy(x_range: (f32, f32), y_range: (f32, f32), z: f32) -> Self {
        let (x0, x1) = x_range;
        let (y0, y1) = y_range;
        Self::new(point3(x0, y0, z), vec3(x1 - x0, 0.0, 0.0), vec3(0.0, y1 - y0, 0.0))
    }
    pub fn new_xz(x_range: (f32, f32), y: f32, z_range: (f32, f32)) -> Self {
        let (x0, x1) = x_range;
        let (z0, z1) = z_range;
        Self::new(point3(x0, y, z0), vec3(x1 - x0, 0.0, 0.0), vec3(0.0, 0.0, z1 - z0))
    }
    pub fn new_yz(x: f32, y_range: (f32, f32), z_range: (f32, f32)) -> Self {
        let (z0, z1) = z_range;
        let (y0, y1) = y_range;
        Self::new(point3(x, y0, z0), vec3(0.0, 0.0, z1 - z0), vec3(0.0, y1 - y0, 0.0))
    }
}

// Implementation of the `Shape` trait for the shape implementations.

impl Shape for Sphere {
    fn summary(&self) -> String {
        format!("Sphere{{ {}, radius = {} }}", self.center, self.radius)
    }
    fn intersect(&self, r: &Ray) -> Option<Interaction> {
        // r = o + td
        // sphere: (p-c)(p-c) = radius^2
        // (td + o - c)^2 = radius^2
        // t^2 d^2 + (o-c)^2 + 2t d * (o-c) = radius^2
        // delta = 4(d*(o-c))^2 - 4d^2((o-c)^2 - radius^2)

        let f = r.origin - self.center; // vector connecting the sphere center to ray origin.
        let a = r.dir.norm_squared();
        if a == 0.0 {
            return None;
        }
        let b_prime = -f.dot(r.dir);
        let delta = self.radius * self.radius - (f + b_prime / a * r.dir).norm_squared();
        let (t_low, t_high) = if delta < 0.0 {
            return None;
        } else {
            let c = f.norm_squared() - self.radius * self.radius;
            let q = b_prime + b_prime.signum() * (delta * a).sqrt();
            let (t0, t1) = (c / q, q / a);
            if t0 < t1 {
                (t0, t1)
            } else {
                (t1, t0)
            }
        };
        // Keeps only the roots that are within [T_MIN, infinity).
        let truncated_roots = (r.truncated_t(t_low), r.truncated_t(t_high));
        let ray_t = match truncated_roots {
            (None, None) => None,
            (None, Some(high)) => Some(high),
            (Some(low), _) => Some(low), // It doesn't matter if the greater one is valid or not.
        }?;

        let pos = r.position_at(ray_t);
        let normal = (pos - self.center).try_hat()?;
        Some(Interaction::new(pos, ray_t, normal))
    }
}

impl Shape for Plane {
    fn summary(&self) -> String {
        format!("Plane{{ {}, normal = {} }}", self.point, self.normal)
    }
    fn intersect(&self, r: &Ray) -> Option<Interaction> {
        // Ray:    r = o + td
        // Plane: (p-c) dot n = 0
        //        (o + td - c) dot n = (o-c) dot n + t d dot n = 0
        //        (c - o) dot n = t * d dot n
        let t = (self.point - r.origin)
            .dot(self.normal)
            .try_divide(r.dir.dot(self.normal))?;
        let t = r.truncated_t(t)?;
        Some(Interaction::new(
            r.position_at(t),
            t,
            self.normal.facing(r.dir),
        ))
    }
}

impl Shape for ParallelQuad {
    fn summary(&self) -> String {
        format!(
            "Parallelogram({:.3} + u{:.3} + v{:.3})",
            self.origin, self.side_u, self.side_v
        )
    }
    fn intersect(&self, r: &Ray) -> Option<Interaction> {
        let n = self.side_u.cross(self.side_v);
        // Let p be the point on the plane containing the quad, then
        // (p - origin) dot normal = 0
        // With p = r.o + r.d * t, (r.o + t * r.d - self.origin) dot normal = 0
        // (r.o - self.origin) dot normal + t * r.d dot normal = 0
        let t = (self.origin - r.origin).dot(n).try_divide(r.dir.dot(n))?;
        let t = r.truncated_t(t)?;
        let hit = r.position_at(t);
        // p - o = au + bv = d
        // cross(d, b) = u cross(a, b),  cross(a, d) = v cross(a, b)
        // Projecting both onto n = cross(a, b) gives signed coordinates.
        let (a, b, d) = (self.side_u, self.side_v, hit - self.origin);
        let n2 = n.norm_squared();
        let u = d.cross(b).dot(n) / n2;
        let v = a.cross(d).dot(n) / n2;
        (u.inside((0.0, 1.0)) && v.inside((0.0, 1.0)))
            .then(|| Interaction::new(hit, t, n.facing(r.dir)))
    }
}
