use std::{iter::Sum, str::FromStr};

/// Radiance carried along a ray, one non-negative `f32` per RGB channel. Values are unbounded:
/// clamping only happens when converting to a display color with `to_u8()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

/// Clamps an f32 value to [0, 1], mutiplies it by 255 and casts it to u8.
/// Returns 0 if `f` is NaN.
fn saturate_cast_u8(f: f32) -> u8 {
    if f > 1.0 {
        255
    } else if f >= 0.0 {
        (f * 255.0) as u8
    } else {
        0
    }
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Color {
        Color { r, g, b }
    }
    pub fn black() -> Color {
        Color::new(0.0, 0.0, 0.0)
    }
    pub fn white() -> Color {
        Color::new(1.0, 1.0, 1.0)
    }
    pub fn gray(level: f32) -> Color {
        Color::new(level, level, level)
    }
    pub fn rgb(r: u8, g: u8, b: u8) -> Color {
        Color::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }
    pub fn is_black(&self) -> bool {
        self.r <= 0.0 && self.g <= 0.0 && self.b <= 0.0
    }
    /// Quantizes to a display color. Channels are clamped to [0, 1] first.
    pub fn to_u8(&self) -> [u8; 3] {
        [
            saturate_cast_u8(self.r),
            saturate_cast_u8(self.g),
            saturate_cast_u8(self.b),
        ]
    }
    /// Returns true iff all RGB components are finite and free of NaNs.
    pub fn is_finite(&self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite()
    }

    pub fn average(color_vec: &[Self]) -> Self {
        match color_vec.len() {
            0 => Self::black(),
            num => color_vec.iter().copied().sum::<Self>() * (1.0 / num as f32),
        }
    }

    /// Largest absolute per-channel difference, handy for approximate comparisons.
    pub fn max_abs_diff(&self, other: &Self) -> f32 {
        (self.r - other.r)
            .abs()
            .max((self.g - other.g).abs())
            .max((self.b - other.b).abs())
    }
}

impl std::ops::Add for Color {
    type Output = Color;
    fn add(self, rhs: Self) -> Self {
        Color::new(self.r + rhs.r, self.g + rhs.g, self.b + rhs.b)
    }
}

impl std::ops::AddAssign for Color {
    fn add_assign(&mut self, rhs: Self) {
        self.r += rhs.r;
        self.g += rhs.g;
        self.b += rhs.b;
    }
}

impl std::ops::Mul<f32> for Color {
    type Output = Color;
    fn mul(self, s: f32) -> Self {
        Color::new(self.r * s, self.g * s, self.b * s)
    }
}

impl std::ops::Mul<Color> for f32 {
    type Output = Color;
    fn mul(self, c: Color) -> Color {
        c * self
    }
}

impl std::ops::Mul for Color {
    type Output = Color;
    fn mul(self, rhs: Color) -> Self::Output {
        Color::new(self.r * rhs.r, self.g * rhs.g, self.b * rhs.b)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(
            f,
            "rgb({:.precision$}, {:.precision$}, {:.precision$})",
            self.r,
            self.g,
            self.b,
            precision = precision
        )
    }
}

impl Sum for Color {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Color::black(), |c0, c1| c0 + c1)
    }
}

/// Parses `"r,g,b"` with each channel a finite, non-negative number, e.g. `"0.5,0.7,1.0"`.
impl FromStr for Color {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let channels = s
            .split(',')
            .map(|c| c.trim().parse::<f32>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("invalid color '{}': {}", s, e))?;
        match channels.as_slice() {
            &[r, g, b] if !(r.is_finite() && g.is_finite() && b.is_finite()) => {
                Err(format!("color '{}' has a non-finite channel", s))
            }
            &[r, g, b] if r >= 0.0 && g >= 0.0 && b >= 0.0 => Ok(Color::new(r, g, b)),
            &[_, _, _] => Err(format!("color '{}' has a negative channel", s)),
            _ => Err(format!("color '{}' should have 3 channels", s)),
        }
    }
}
