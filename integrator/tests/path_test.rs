use geometry::camera::Camera;
use geometry::ray::Ray;
use integrator::path::MAX_DEPTH_LIMIT;
use integrator::{
    DiffuseBrdf, DiscreteBrdf, DiscreteSampler, GridSampler, PathIntegrator, PhongBrdf,
};
use material::Material;
use math::hcm::{point3, Point3, Vec3};
use radiometry::color::Color;
use rand::{rngs::StdRng, SeedableRng};
use scene::Scene;
use shape::{Plane, Sphere};

fn forward() -> Ray {
    Ray::new(Point3::ORIGIN, Vec3::Z)
}

fn lamp_scene(color: Color, emission: Color) -> Scene {
    Scene::new().with_actor(
        Sphere::from_raw((0.0, 0.0, 5.0), 1.0),
        Material::emissive(color, emission),
    )
}

#[test]
fn misses_return_the_background_at_every_depth() {
    let mut rng = StdRng::seed_from_u64(0);
    let background = Color::new(0.1, 0.2, 0.3);
    let scene = Scene::new();
    let integrator = PathIntegrator::new(&scene, DiscreteSampler::default(), DiscreteBrdf)
        .with_background(background)
        .with_max_depth(4);
    for depth in 0..4 {
        assert_eq!(integrator.estimate(&forward(), depth, &mut rng), background);
    }

    // A non-empty scene that the ray does not reach behaves the same.
    let scene = lamp_scene(Color::white(), Color::gray(5.0));
    let integrator = PathIntegrator::new(&scene, GridSampler::new(2), PhongBrdf::default())
        .with_background(background);
    let backwards = Ray::new(Point3::ORIGIN, -Vec3::Z);
    assert_eq!(integrator.radiance(&backwards, &mut rng), background);
}

#[test]
fn exhausted_depth_returns_the_background() {
    let mut rng = StdRng::seed_from_u64(0);
    let scene = lamp_scene(Color::white(), Color::gray(5.0));
    let integrator = PathIntegrator::new(&scene, DiscreteSampler::default(), DiscreteBrdf)
        .with_max_depth(3);
    assert_eq!(
        integrator.estimate(&forward(), 3, &mut rng),
        integrator.background()
    );
    assert_eq!(
        integrator.estimate(&forward(), 7, &mut rng),
        integrator.background()
    );
    assert_ne!(
        integrator.estimate(&forward(), 2, &mut rng),
        integrator.background()
    );
}

#[test]
fn zero_depth_bound_sees_only_background() {
    let mut rng = StdRng::seed_from_u64(0);
    let scene = lamp_scene(Color::white(), Color::gray(5.0));
    let integrator =
        PathIntegrator::new(&scene, GridSampler::new(3), DiffuseBrdf).with_max_depth(0);
    assert_eq!(integrator.radiance(&forward(), &mut rng), integrator.background());
}

#[test]
fn emissive_sphere_adds_emission_and_its_own_color() {
    let mut rng = StdRng::seed_from_u64(0);
    let color = Color::new(0.5, 0.2, 0.1);
    let emission = Color::gray(2.0);
    let scene = lamp_scene(color, emission);
    let camera = Camera::new(Point3::ORIGIN, point3(0.0, 0.0, 5.0), 60.0, 1.0);

    // The sampler ends the path with a sentinel whose transport is white, weighted by the raw
    // material color.
    let integrator = PathIntegrator::new(&scene, DiscreteSampler::default(), DiscreteBrdf)
        .with_max_depth(1);
    let pixel = integrator.radiance(&camera.get_ray(0.0, 0.0), &mut rng);
    assert!(pixel.max_abs_diff(&(color + emission)) < 1e-5, "pixel = {}", pixel);

    // A cosine-weighted model gives nothing to the sentinel: only the emission remains.
    let integrator = PathIntegrator::new(&scene, DiscreteSampler::default(), DiffuseBrdf);
    let pixel = integrator.radiance(&camera.get_ray(0.0, 0.0), &mut rng);
    assert!(pixel.max_abs_diff(&emission) < 1e-5, "pixel = {}", pixel);
}

#[test]
fn empty_scene_is_background_everywhere() {
    let mut rng = StdRng::seed_from_u64(9);
    let scene = Scene::new();
    let camera = Camera::new(point3(0.0, 1.0, -4.0), Point3::ORIGIN, 70.0, 1.5);
    let integrator = PathIntegrator::new(&scene, GridSampler::new(4), PhongBrdf::default());
    for i in 0..=8 {
        for j in 0..=8 {
            let (x, y) = (i as f32 / 4.0 - 1.0, j as f32 / 4.0 - 1.0);
            let ray = camera.get_ray(x, y);
            assert_eq!(integrator.radiance(&ray, &mut rng), integrator.background());
        }
    }
}

#[test]
fn facing_mirrors_terminate_at_the_depth_bound() {
    let mut rng = StdRng::seed_from_u64(0);
    let mirror = Material::specular(Color::white());
    let scene = Scene::new()
        .with_actor(Plane::new(point3(0.0, 0.0, 1.0), Vec3::Z), mirror)
        .with_actor(Plane::new(point3(0.0, 0.0, -1.0), Vec3::Z), mirror);
    let background = Color::new(0.25, 0.5, 0.75);
    let integrator = PathIntegrator::new(&scene, DiscreteSampler::default(), DiscreteBrdf)
        .with_background(background)
        .with_max_depth(6);
    // Every bounce multiplies by white, so the only light is the background seen at the bound.
    assert_eq!(integrator.radiance(&forward(), &mut rng), background);
}

#[test]
fn diffuse_floor_under_grid_sampler_is_finite_and_non_negative() {
    let mut rng = StdRng::seed_from_u64(4);
    let scene = Scene::new()
        .with_actor(Plane::new(Point3::ORIGIN, Vec3::Y), Material::diffuse(Color::gray(0.5)))
        .with_actor(
            Sphere::from_raw((2.0, 2.0, 4.0), 1.0),
            Material::emissive(Color::white(), Color::gray(3.0)),
        );
    let integrator =
        PathIntegrator::new(&scene, GridSampler::new(3), DiffuseBrdf).with_max_depth(3);
    let ray = Ray::new(point3(0.0, 1.0, -2.0), point3(0.0, 0.0, 2.0) - point3(0.0, 1.0, -2.0));
    let radiance = integrator.radiance(&ray, &mut rng);
    assert!(radiance.is_finite());
    assert!(radiance.r >= 0.0 && radiance.g >= 0.0 && radiance.b >= 0.0);
    assert!(!radiance.is_black());
}

#[test]
fn facing_mirrors_at_the_depth_limit_fit_a_worker_stack() {
    let handle = std::thread::Builder::new()
        .stack_size(2 << 20)
        .spawn(|| {
            let mut rng = StdRng::seed_from_u64(0);
            let mirror = Material::specular(Color::white());
            let scene = Scene::new()
                .with_actor(Plane::new(point3(0.0, 0.0, 1.0), Vec3::Z), mirror)
                .with_actor(Plane::new(point3(0.0, 0.0, -1.0), Vec3::Z), mirror);
            let integrator = PathIntegrator::new(&scene, DiscreteSampler::default(), DiscreteBrdf)
                .with_max_depth(MAX_DEPTH_LIMIT);
            integrator.radiance(&forward(), &mut rng) == integrator.background()
        })
        .unwrap();
    assert!(handle.join().unwrap());
}

#[test]
#[should_panic]
fn depth_bound_above_the_limit_is_refused() {
    let scene = Scene::new();
    PathIntegrator::new(&scene, GridSampler::new(2), DiffuseBrdf)
        .with_max_depth(MAX_DEPTH_LIMIT + 1);
}
