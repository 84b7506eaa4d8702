use std::{
    fmt,
    ops::{Add, AddAssign, Index, Mul, Neg, Sub},
};

pub fn vec3(x: f32, y: f32, z: f32) -> Vec3 {
    Vec3::new(x, y, z)
}

pub fn point3(x: f32, y: f32, z: f32) -> Point3 {
    Point3::new(x, y, z)
}

/// Represents a 3D vector. Each component is a `f32` number.
/// Components can be accessed using `v.x` `v.y` `v.z`,
/// or indices `v[i]` where i is 0, 1, or 2.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl fmt::Display for Vec3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(
            f,
            "({:.p$}, {:.p$}, {:.p$})",
            self.x,
            self.y,
            self.z,
            p = precision
        )
    }
}
impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(
            f,
            "[{:.p$}, {:.p$}, {:.p$}]",
            self.x,
            self.y,
            self.z,
            p = precision
        )
    }
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }
    pub const fn splat(v: f32) -> Vec3 {
        Vec3 { x: v, y: v, z: v }
    }
    pub const X: Vec3 = Self::new(1.0, 0.0, 0.0);
    pub const Y: Vec3 = Self::new(0.0, 1.0, 0.0);
    pub const Z: Vec3 = Self::new(0.0, 0.0, 1.0);
    pub const ZERO: Vec3 = Self::new(0.0, 0.0, 0.0);

    pub fn dot(self, v: Vec3) -> f32 {
        self.x * v.x + self.y * v.y + self.z * v.z
    }
    pub fn cross(self, v: Vec3) -> Vec3 {
        // x1 y1 z1
        // x2 y2 z2
        // i  j  k
        Vec3::new(
            self.y * v.z - self.z * v.y,
            self.z * v.x - self.x * v.z,
            self.x * v.y - self.y * v.x,
        )
    }

    pub fn norm_squared(self) -> f32 {
        self.dot(self)
    }
    pub fn norm(self) -> f32 {
        f32::sqrt(self.norm_squared())
    }
    pub fn is_zero(self) -> bool {
        self.norm_squared() == 0.0
    }

    /// Returns a normalized (unit-length) `self` vector.
    /// Panics if the vector length is zero, NaN or infinite.
    pub fn hat(self) -> Vec3 {
        let norm2 = self.norm_squared();
        assert!(norm2 != 0.0 && norm2.is_finite());
        let inv_sqrt = 1.0 / self.norm();
        self * inv_sqrt
    }
    /// Returns a normalized `self`, or `None` if the vector has no usable direction.
    /// ```
    /// use math::hcm::{vec3, Vec3};
    /// assert_eq!(vec3(0.0, 3.0, 0.0).try_hat(), Some(Vec3::Y));
    /// assert_eq!(Vec3::ZERO.try_hat(), None);
    /// ```
    pub fn try_hat(self) -> Option<Self> {
        let inv_length = 1.0 / self.norm();
        (inv_length.is_finite() && inv_length != 0.0).then(|| inv_length * self)
    }

    /// Chooses from `self` or `-self`, whichever faces a surface having given `normal`.
    pub fn facing(self, normal: Self) -> Self {
        if self.dot(normal).is_sign_negative() {
            self
        } else {
            -self
        }
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Self;
    fn add(self, other: Self) -> Vec3 {
        Vec3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}
impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}
impl Add<Point3> for Vec3 {
    type Output = Point3;
    fn add(self, other: Point3) -> Point3 {
        Point3::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vec3 {
    type Output = Self;
    fn sub(self, other: Self) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}
impl Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}
impl Index<usize> for Vec3 {
    type Output = f32;
    fn index(&self, i: usize) -> &f32 {
        match i {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("invalid index"),
        }
    }
}
impl Mul<f32> for Vec3 {
    type Output = Self;
    fn mul(self, s: f32) -> Vec3 {
        Vec3::new(self.x * s, self.y * s, self.z * s)
    }
}
impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, v: Vec3) -> Vec3 {
        v * self
    }
}

// Implementation of Points
impl Point3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Point3 {
        Point3 { x, y, z }
    }
    pub const ORIGIN: Point3 = Point3::new(0.0, 0.0, 0.0);
}

impl Add<Vec3> for Point3 {
    type Output = Point3;
    fn add(self, v: Vec3) -> Point3 {
        Point3::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl Sub for Point3 {
    type Output = Vec3;
    fn sub(self, from: Point3) -> Vec3 {
        Vec3::new(self.x - from.x, self.y - from.y, self.z - from.z)
    }
}
impl Sub<Vec3> for Point3 {
    type Output = Point3;
    fn sub(self, t: Vec3) -> Point3 {
        Point3::new(self.x - t.x, self.y - t.y, self.z - t.z)
    }
}
// Free functions on vectors.
// -------------------------------------------------------------------------------------------------

/// Mirrors the travelling direction `dir` about the surface `normal`: `dir - 2 (dir . n) n`.
/// The normal doesn't have to be unit-length, and either orientation gives the same result.
/// ```
/// use math::hcm::{reflect, vec3};
/// let r = reflect(vec3(1.0, -1.0, 0.0), vec3(0.0, 2.0, 0.0));
/// assert_eq!(r, vec3(1.0, 1.0, 0.0));
/// ```
pub fn reflect(dir: Vec3, normal: Vec3) -> Vec3 {
    let perp = dir.dot(normal) / normal.norm_squared() * normal;
    dir - 2.0 * perp
}

/// Cosine of the angle between `a` and `b`. Returns 0 if either of them is zero-length, so that a
/// sentinel direction never produces a NaN weight.
pub fn cos_between(a: Vec3, b: Vec3) -> f32 {
    let denom = (a.norm_squared() * b.norm_squared()).sqrt();
    if denom > 0.0 && denom.is_finite() {
        a.dot(b) / denom
    } else {
        0.0
    }
}

/// Floors negative values to 0 and caps at 1.
pub fn clamp_unit(x: f32) -> f32 {
    if x > 0.0 {
        x.min(1.0)
    } else {
        0.0
    }
}
