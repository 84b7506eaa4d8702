use geometry::camera::Camera;
use material::Material;
use math::hcm::{point3, vec3, Point3, Vec3};
use radiometry::color::Color;
use shape::{ParallelQuad, Plane, Sphere};

use crate::Scene;

/// Names accepted by [`by_name`], in the order they are listed to the user.
pub const NAMES: [&str; 4] = ["empty", "single_light", "mirror_spheres", "cornell"];

/// Builds the preset called `name` together with its camera for an image of the given
/// `aspect_ratio` (width / height). Returns `None` for an unknown name.
pub fn by_name(name: &str, aspect_ratio: f32) -> Option<(Scene, Camera)> {
    let preset = match name {
        "empty" => empty(aspect_ratio),
        "single_light" => single_light(aspect_ratio),
        "mirror_spheres" => mirror_spheres(aspect_ratio),
        "cornell" => cornell(aspect_ratio),
        _ => return None,
    };
    log::debug!("preset '{}': {}", name, preset.0.summary());
    if preset.0.is_empty() {
        log::warn!("preset '{}' has no actors; every pixel will show the background", name);
    }
    Some(preset)
}

// Functions that build the scenes: collection of actors and a camera looking at them.
// ------------------------------------------------------------------------------------------------

pub fn empty(aspect_ratio: f32) -> (Scene, Camera) {
    let camera = Camera::new(point3(0.0, 0.0, -5.0), Point3::ORIGIN, 60.0, aspect_ratio);
    (Scene::new(), camera)
}

/// A glowing ball resting above a matte floor.
pub fn single_light(aspect_ratio: f32) -> (Scene, Camera) {
    let lamp = Material::emissive(Color::white(), Color::gray(4.0));
    let floor = Material::diffuse(Color::gray(0.6));

    let scene = Scene::new()
        .with_actor(Sphere::from_raw((0.0, 1.0, 0.0), 1.0), lamp)
        .with_actor(Plane::new(Point3::ORIGIN, Vec3::Y), floor);

    let camera = Camera::new(point3(0.0, 2.0, -6.0), point3(0.0, 1.0, 0.0), 50.0, aspect_ratio);
    (scene, camera)
}

pub fn mirror_spheres(aspect_ratio: f32) -> (Scene, Camera) {
    let red = Material::diffuse(Color::new(0.75, 0.15, 0.1));
    let blue = Material::diffuse(Color::new(0.1, 0.25, 0.75));
    let mirror = Material::specular(Color::gray(0.9));
    let floor = Material::diffuse(Color::rgb(200, 190, 170));
    let sun = Material::emissive(Color::white(), Color::gray(6.0));

    let scene = Scene::new()
        .with_actor(Sphere::from_raw((-2.2, 1.0, 0.5), 1.0), red)
        .with_actor(Sphere::from_raw((0.0, 1.0, 0.0), 1.0), mirror)
        .with_actor(Sphere::from_raw((2.2, 1.0, 0.5), 1.0), blue)
        .with_actor(Sphere::from_raw((0.0, 8.0, -2.0), 2.5), sun)
        .with_actor(Plane::new(Point3::ORIGIN, Vec3::Y), floor);

    let camera = Camera::new(point3(0.0, 2.5, -7.0), point3(0.0, 1.0, 0.0), 55.0, aspect_ratio);
    (scene, camera)
}

/// Box of side 2 centered at the origin, open towards the camera (-z), lit by a panel under the
/// ceiling.
pub fn cornell(aspect_ratio: f32) -> (Scene, Camera) {
    let red = Material::diffuse(Color::new(0.65, 0.05, 0.05));
    let green = Material::diffuse(Color::new(0.12, 0.45, 0.15));
    let white = Material::diffuse(Color::gray(0.73));
    let mirror = Material::specular(Color::white());
    let light = Material::emissive(Color::white(), Color::gray(15.0));

    let r = 1.0;
    let scene = Scene::new()
        .with_actor(ParallelQuad::new_yz(-r, (-r, r), (-r, r)), red)
        .with_actor(ParallelQuad::new_yz(r, (-r, r), (-r, r)), green)
        .with_actor(ParallelQuad::new_xz((-r, r), -r, (-r, r)), white) // floor
        .with_actor(ParallelQuad::new_xz((-r, r), r, (-r, r)), white) // ceiling
        .with_actor(ParallelQuad::new_xy((-r, r), (-r, r), r), white) // back
        .with_actor(
            ParallelQuad::new(
                point3(-0.25, r - 0.01, -0.25),
                vec3(0.5, 0.0, 0.0),
                vec3(0.0, 0.0, 0.5),
            ),
            light,
        )
        .with_actor(Sphere::from_raw((-0.4, -0.6, 0.3), 0.4), mirror)
        .with_actor(Sphere::from_raw((0.45, -0.7, -0.2), 0.3), white);

    let camera = Camera::new(point3(0.0, 0.0, -3.4), Point3::ORIGIN, 40.0, aspect_ratio);
    (scene, camera)
}
