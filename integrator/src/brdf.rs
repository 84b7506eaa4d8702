use geometry::ray::Ray;
use material::MaterialKind;
use math::hcm::{clamp_unit, cos_between, reflect};
use radiometry::color::Color;
use scene::Hit;

/// Reflectance model: how much of the light arriving along `outgoing` (traced away from the hit)
/// is sent back along `incoming`. The result is never negative.
pub trait Brdf: Send + Sync {
    fn evaluate(&self, incoming: &Ray, hit: &Hit, outgoing: &Ray) -> Color;
}

/// Lambertian-like model: material color scaled by the clamped cosine between the outgoing
/// direction and the normal.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffuseBrdf;

impl Brdf for DiffuseBrdf {
    fn evaluate(&self, _: &Ray, hit: &Hit, outgoing: &Ray) -> Color {
        hit.material.color * clamp_unit(cos_between(outgoing.dir, hit.normal))
    }
}

/// Phong model mixing a diffuse lobe and a specular lobe around the mirror direction. Specular
/// materials swap the two coefficients.
#[derive(Debug, Clone, Copy)]
pub struct PhongBrdf {
    k_diffuse: f32,
    k_specular: f32,
    shininess: i32,
}

impl PhongBrdf {
    pub const DEFAULT_SHININESS: i32 = 32;

    pub fn new(k_diffuse: f32, k_specular: f32, shininess: i32) -> Self {
        assert!(k_diffuse >= 0.0 && k_specular >= 0.0);
        Self {
            k_diffuse,
            k_specular,
            shininess,
        }
    }

    /// Returns `(kD, kS)` used for the given material kind.
    pub fn coefficients(&self, kind: MaterialKind) -> (f32, f32) {
        match kind {
            MaterialKind::Specular => (self.k_specular, self.k_diffuse),
            _ => (self.k_diffuse, self.k_specular),
        }
    }
}

impl Default for PhongBrdf {
    fn default() -> Self {
        Self::new(0.95, 0.05, Self::DEFAULT_SHININESS)
    }
}

impl Brdf for PhongBrdf {
    fn evaluate(&self, incoming: &Ray, hit: &Hit, outgoing: &Ray) -> Color {
        let (kd, ks) = self.coefficients(hit.material.kind);
        let diffuse = clamp_unit(cos_between(outgoing.dir, hit.normal));
        let mirrored = reflect(-outgoing.dir, hit.normal);
        let specular = clamp_unit(cos_between(mirrored, -incoming.dir)).powi(self.shininess);
        hit.material.color * (kd * diffuse + ks * specular)
    }
}

/// Companion of `DiscreteSampler`: the single sampled direction already encodes the scattering,
/// so only diffuse surfaces are weighted by the cosine term.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiscreteBrdf;

impl Brdf for DiscreteBrdf {
    fn evaluate(&self, _: &Ray, hit: &Hit, outgoing: &Ray) -> Color {
        match hit.material.kind {
            MaterialKind::Diffuse => {
                hit.material.color * clamp_unit(cos_between(outgoing.dir, hit.normal))
            }
            MaterialKind::Specular => Color::white(),
            MaterialKind::Emissive => hit.material.color,
        }
    }
}
