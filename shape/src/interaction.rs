use math::hcm::{Point3, Vec3};
use std::fmt::{Display, Formatter, Result};

/// Contains geometric information on a ray-surface intersection:
///  - `pos`: position of intersection
///  - `ray_t`: t-value of the ray at the intersection.
///  - `normal`: unit normal vector of the surface at `pos`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interaction {
    pub pos: Point3,
    pub ray_t: f32,
    pub normal: Vec3,
}

impl Interaction {
    pub fn new(pos: Point3, ray_t: f32, normal: Vec3) -> Interaction {
        Interaction {
            pos,
            ray_t,
            normal: normal.hat(),
        }
    }
}

impl Display for Interaction {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "pos = {}, t = {:.2}, normal = {}",
            self.pos, self.ray_t, self.normal
        )
    }
}
