use radiometry::color::Color;
use std::fmt::{Display, Formatter, Result};

/// How a surface scatters light. Sampling strategies and reflectance models dispatch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    /// Rough surface scattering light around the mirror direction.
    Diffuse,
    /// Perfect mirror.
    Specular,
    /// Light source or fully absorbing surface: paths end here.
    Emissive,
}

/// Surface properties attached to an actor of the scene: a kind, a base color and the radiance
/// the surface emits by itself. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub kind: MaterialKind,
    pub color: Color,
    pub emission: Color,
}

impl Material {
    pub fn new(kind: MaterialKind, color: Color) -> Self {
        Self {
            kind,
            color,
            emission: Color::black(),
        }
    }

    pub fn diffuse(color: Color) -> Self {
        Self::new(MaterialKind::Diffuse, color)
    }

    pub fn specular(color: Color) -> Self {
        Self::new(MaterialKind::Specular, color)
    }

    /// A light source whose surface has the given `color` and emits `emission`.
    pub fn emissive(color: Color, emission: Color) -> Self {
        Self::new(MaterialKind::Emissive, color).with_emission(emission)
    }

    /// Makes any kind of surface glow. Emission is added once per hit, regardless of how many
    /// directions are sampled there.
    pub fn with_emission(self, emission: Color) -> Self {
        Self { emission, ..self }
    }

    pub fn is_emissive(&self) -> bool {
        !self.emission.is_black()
    }
}

impl Display for Material {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "{:?}{{ color = {}, emission = {} }}",
            self.kind, self.color, self.emission
        )
    }
}
