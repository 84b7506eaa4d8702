use geometry::ray::Ray;
use itertools::iproduct;
use material::MaterialKind;
use math::hcm::{reflect, vec3, Vec3};
use rand::Rng;
use scene::Hit;

/// Decides which outgoing rays to explore from a hit. Every ray produced by one invocation shares
/// the same weight, a constant of the strategy.
pub trait Sampler: Send + Sync {
    fn weight(&self) -> f32;

    /// Outgoing rays starting at `hit.pos`. A ray with a zero-length direction means the path
    /// stops there.
    fn sample_directions<R: Rng + ?Sized>(&self, incoming: &Ray, hit: &Hit, rng: &mut R)
        -> Vec<Ray>;

    fn sample<R: Rng + ?Sized>(&self, incoming: &Ray, hit: &Hit, rng: &mut R) -> (Vec<Ray>, f32) {
        (self.sample_directions(incoming, hit, rng), self.weight())
    }
}

pub const DEFAULT_JITTER: f32 = 0.4;

/// Follows exactly one direction per hit, chosen from the material kind:
/// - diffuse surfaces: the mirror direction, randomly perturbed by up to `jitter / 2` on each
///   component,
/// - specular surfaces: the exact mirror direction,
/// - emissive surfaces: nothing (the path ends).
#[derive(Debug, Clone, Copy)]
pub struct DiscreteSampler {
    jitter: f32,
}

impl DiscreteSampler {
    pub fn new(jitter: f32) -> Self {
        assert!(jitter >= 0.0 && jitter.is_finite(), "jitter = {}", jitter);
        Self { jitter }
    }

    pub fn jitter(&self) -> f32 {
        self.jitter
    }

    /// Adds an independent offset uniformly drawn from `[-jitter/2, jitter/2]` to each component of
    /// `mirror`. The result is not normalized.
    pub fn perturb<R: Rng + ?Sized>(&self, mirror: Vec3, rng: &mut R) -> Vec3 {
        let mut offset = || (rng.gen::<f32>() - 0.5) * self.jitter;
        mirror + vec3(offset(), offset(), offset())
    }
}

impl Default for DiscreteSampler {
    fn default() -> Self {
        Self::new(DEFAULT_JITTER)
    }
}

impl Sampler for DiscreteSampler {
    fn weight(&self) -> f32 {
        1.0
    }

    fn sample_directions<R: Rng + ?Sized>(
        &self, incoming: &Ray, hit: &Hit, rng: &mut R,
    ) -> Vec<Ray> {
        let out = match hit.material.kind {
            MaterialKind::Diffuse => {
                let mirror = reflect(incoming.dir, hit.normal);
                match self.perturb(mirror, rng).try_hat() {
                    Some(dir) => Ray::new(hit.pos, dir),
                    None => Ray::sentinel(hit.pos),
                }
            }
            MaterialKind::Specular => Ray::new(hit.pos, reflect(incoming.dir, hit.normal)),
            MaterialKind::Emissive => Ray::sentinel(hit.pos),
        };
        vec![out]
    }
}

pub const DEFAULT_GRID_SIZE: usize = 4;

/// Deterministic fan of directions: the 8 corners of the cube inscribed in the unit sphere, then
/// one direction per interior lattice point of that cube subdivided `N` times along each edge.
///
/// With `h = 2 / (sqrt(3) N)` the lattice spacing, every direction weighs `h^3`, the volume of one
/// lattice cell. The directions only depend on `N` and are computed once.
#[derive(Debug, Clone)]
pub struct GridSampler {
    resolution: usize,
    weight: f32,
    directions: Vec<Vec3>,
}

impl GridSampler {
    pub fn new(resolution: usize) -> Self {
        assert!(resolution > 0, "grid resolution must be positive");
        let n = resolution as f32;
        let half_side = 1.0 / 3f32.sqrt();
        let h = 2.0 * half_side / n;

        let signs = [-half_side, half_side];
        let corners = iproduct!(signs.iter(), signs.iter(), signs.iter())
            .map(|(&x, &y, &z)| vec3(x, y, z).hat());

        // The lattice starts at corner `v0` and steps along its three edges AB, AD and AF.
        let v0 = Vec3::splat(-half_side);
        let side = 2.0 * half_side;
        let (ab, ad, af) = (Vec3::X * side, Vec3::Y * side, Vec3::Z * side);
        // For even resolutions the cube center is a lattice point; it has no direction and becomes a
        // path-ending sample.
        let interior = iproduct!(1..resolution, 1..resolution, 1..resolution).map(|(i, j, k)| {
            let p = v0 + ab * (i as f32 / n) + ad * (j as f32 / n) + af * (k as f32 / n);
            p.try_hat().unwrap_or(Vec3::ZERO)
        });

        let directions: Vec<_> = corners.chain(interior).collect();
        debug_assert_eq!(directions.len(), 8 + (resolution - 1).pow(3));
        Self {
            resolution,
            weight: h * h * h,
            directions,
        }
    }

    pub fn resolution(&self) -> usize {
        self.resolution
    }

    pub fn sample_count(&self) -> usize {
        self.directions.len()
    }

    pub fn directions(&self) -> &[Vec3] {
        &self.directions
    }
}

impl Default for GridSampler {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE)
    }
}

impl Sampler for GridSampler {
    fn weight(&self) -> f32 {
        self.weight
    }

    fn sample_directions<R: Rng + ?Sized>(&self, _: &Ray, hit: &Hit, _: &mut R) -> Vec<Ray> {
        self.directions
            .iter()
            .map(|&dir| Ray::new(hit.pos, dir))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn perturbation_without_jitter_is_identity() {
        let mut rng = StdRng::seed_from_u64(3);
        let mirror = vec3(0.3, -0.4, 0.5);
        assert_eq!(DiscreteSampler::new(0.0).perturb(mirror, &mut rng), mirror);
    }

    #[test]
    fn first_grid_directions_are_cube_corners() {
        let grid = GridSampler::new(2);
        let c = 1.0 / 3f32.sqrt();
        for dir in grid.directions()[..8].iter() {
            for axis in 0..3 {
                assert!((dir[axis].abs() - c).abs() < 1e-6, "dir = {}", dir);
            }
        }
    }
}
