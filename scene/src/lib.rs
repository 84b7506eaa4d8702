pub mod preset;

use std::fmt::{Display, Formatter};
use std::iter::FromIterator;

use geometry::ray::Ray;
use material::Material;
use math::hcm::{Point3, Vec3};
use shape::{Interaction, Shape};

/// A shape placed in the scene together with the material of its surface.
pub struct Actor {
    pub shape: Box<dyn Shape>,
    pub material: Material,
}

impl Actor {
    pub fn new<S: Shape + 'static>(shape: S, material: Material) -> Self {
        Self {
            shape: Box::new(shape),
            material,
        }
    }
}

impl Display for Actor {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} with {}", self.shape.summary(), self.material)
    }
}

/// Result of a closest-hit query. The material is borrowed from the scene, so a `Hit` lives no
/// longer than the query that produced it.
#[derive(Debug, Clone, Copy)]
pub struct Hit<'a> {
    pub pos: Point3,
    pub normal: Vec3,
    pub ray_t: f32,
    pub material: &'a Material,
}

impl<'a> Hit<'a> {
    pub fn new(isect: Interaction, material: &'a Material) -> Self {
        Self {
            pos: isect.pos,
            normal: isect.normal,
            ray_t: isect.ray_t,
            material,
        }
    }
}

/// Ordered collection of actors. Read-only while rendering, so it can be shared across threads.
#[derive(Default)]
pub struct Scene {
    actors: Vec<Actor>,
}

impl Scene {
    pub fn new() -> Self {
        Self { actors: vec![] }
    }

    pub fn with_actor<S: Shape + 'static>(mut self, shape: S, material: Material) -> Self {
        self.add(Actor::new(shape, material));
        self
    }

    pub fn add(&mut self, actor: Actor) {
        self.actors.push(actor);
    }

    pub fn len(&self) -> usize {
        self.actors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Finds the actor closest along `ray`. Actors are tested in insertion order and an actor only
    /// replaces the current best on a strictly smaller `t`, so ties go to the earlier one.
    pub fn intersect(&self, ray: &Ray) -> Option<Hit<'_>> {
        let mut closest: Option<Hit> = None;
        for actor in self.actors.iter() {
            if let Some(isect) = actor.shape.intersect(ray) {
                let is_closer = closest
                    .as_ref()
                    .map_or(true, |best| isect.ray_t < best.ray_t);
                if is_closer {
                    closest = Some(Hit::new(isect, &actor.material));
                }
            }
        }
        closest
    }

    pub fn summary(&self) -> String {
        let lines = self
            .actors
            .iter()
            .enumerate()
            .map(|(i, actor)| format!("  #{}: {}", i, actor))
            .collect::<Vec<_>>();
        format!("Scene of {} actors\n{}", self.len(), lines.join("\n"))
    }
}

impl FromIterator<Actor> for Scene {
    fn from_iter<T: IntoIterator<Item = Actor>>(iter: T) -> Self {
        Self {
            actors: iter.into_iter().collect(),
        }
    }
}
