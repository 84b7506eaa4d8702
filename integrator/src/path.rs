use geometry::ray::Ray;
use radiometry::color::Color;
use rand::Rng;
use scene::Scene;

use crate::{Brdf, Sampler};

pub const DEFAULT_MAX_DEPTH: u32 = 5;
/// Largest accepted depth bound. `estimate` recurses once per bounce, and this many frames fit in
/// the 2 MiB stack of a worker thread.
pub const MAX_DEPTH_LIMIT: u32 = 512;
pub const DEFAULT_BACKGROUND: Color = Color::new(0.5, 0.7, 1.0);

/// Monte Carlo estimator of the radiance carried along a ray.
///
/// At every hit the sampler picks outgoing rays, each of which is traced recursively and weighted
/// by the BRDF and the sampler weight. The surface emission is added once per hit. Rays that
/// escape the scene, or paths longer than `max_depth`, see the background color.
pub struct PathIntegrator<'a, S: Sampler, B: Brdf> {
    scene: &'a Scene,
    sampler: S,
    brdf: B,
    max_depth: u32,
    background: Color,
    epsilon: f32,
}

impl<'a, S: Sampler, B: Brdf> PathIntegrator<'a, S, B> {
    pub fn new(scene: &'a Scene, sampler: S, brdf: B) -> Self {
        Self {
            scene,
            sampler,
            brdf,
            max_depth: DEFAULT_MAX_DEPTH,
            background: DEFAULT_BACKGROUND,
            epsilon: math::EPSILON,
        }
    }

    pub fn with_max_depth(self, max_depth: u32) -> Self {
        assert!(
            max_depth <= MAX_DEPTH_LIMIT,
            "max depth {} exceeds {}",
            max_depth,
            MAX_DEPTH_LIMIT
        );
        Self { max_depth, ..self }
    }

    pub fn with_background(self, background: Color) -> Self {
        Self { background, ..self }
    }

    /// Sets the length under which a sampled direction is treated as "stop here".
    pub fn with_epsilon(self, epsilon: f32) -> Self {
        assert!(epsilon >= 0.0);
        Self { epsilon, ..self }
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
    pub fn background(&self) -> Color {
        self.background
    }

    /// Radiance arriving at the origin of a primary ray.
    pub fn radiance<R: Rng + ?Sized>(&self, ray: &Ray, rng: &mut R) -> Color {
        self.estimate(ray, 0, rng)
    }

    /// Radiance along `ray`, which has already bounced `depth` times.
    pub fn estimate<R: Rng + ?Sized>(&self, ray: &Ray, depth: u32, rng: &mut R) -> Color {
        if depth >= self.max_depth {
            return self.background;
        }
        let hit = match self.scene.intersect(ray) {
            None => return self.background,
            Some(hit) => hit,
        };

        let (outgoing_rays, weight) = self.sampler.sample(ray, &hit, rng);
        let mut radiance = Color::black();
        for outgoing in outgoing_rays.iter() {
            let transport = if outgoing.is_traceable(self.epsilon) {
                self.estimate(outgoing, depth + 1, rng)
            } else {
                Color::white()
            };
            radiance += self.brdf.evaluate(ray, &hit, outgoing) * transport * weight;
        }
        radiance + hit.material.emission
    }
}
