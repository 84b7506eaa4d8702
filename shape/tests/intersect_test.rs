use geometry::ray;
use math::hcm::{point3, vec3, Point3, Vec3};
use shape::{ParallelQuad, Plane, Shape, Sphere};

#[test]
fn plane_normal_faces_the_ray() {
    let floor = Plane::new(Point3::ORIGIN, Vec3::Y);
    let from_above = ray::Ray::new(point3(0.0, 2.0, 0.0), vec3(0.3, -1.0, 0.0));
    let isect = floor.intersect(&from_above).unwrap();
    assert!(isect.pos.y.abs() < 1e-5);
    assert_eq!(isect.normal, Vec3::Y);

    let from_below = ray::Ray::new(point3(0.0, -2.0, 0.0), vec3(0.0, 1.0, 0.0));
    let isect = floor.intersect(&from_below).unwrap();
    assert!((isect.ray_t - 2.0).abs() < 1e-5);
    assert_eq!(isect.normal, -Vec3::Y);
}

#[test]
fn plane_parallel_ray_misses() {
    let wall = Plane::new(point3(0.0, 0.0, 3.0), -Vec3::Z);
    let grazing = ray::Ray::new(Point3::ORIGIN, Vec3::X);
    assert!(wall.intersect(&grazing).is_none());
    let away = ray::Ray::new(Point3::ORIGIN, -Vec3::Z);
    assert!(wall.intersect(&away).is_none());
}

#[test]
fn quad_bounds_are_respected() {
    let quad = ParallelQuad::new_xy((-1.0, 1.0), (-1.0, 1.0), 2.0);
    let inside = ray::Ray::new(point3(0.5, -0.5, 0.0), Vec3::Z);
    let isect = quad.intersect(&inside).unwrap();
    assert!((isect.ray_t - 2.0).abs() < 1e-5);
    assert_eq!(isect.normal, -Vec3::Z);

    // Points on the opposite side of each edge must miss.
    for &(x, y) in [(1.5, 0.0), (-1.5, 0.0), (0.0, 1.5), (0.0, -1.5)].iter() {
        let outside = ray::Ray::new(point3(x, y, 0.0), Vec3::Z);
        assert!(quad.intersect(&outside).is_none(), "({}, {}) should miss", x, y);
    }
}

#[test]
fn slanted_quad_hit_from_behind() {
    let quad = ParallelQuad::new(
        point3(0.0, 0.0, 0.0),
        vec3(1.0, 0.0, 1.0),
        vec3(0.0, 1.0, 0.0),
    );
    let r = ray::Ray::new(point3(0.5, 0.5, -1.0), vec3(0.0, 0.0, 1.0));
    let isect = quad.intersect(&r).unwrap();
    assert!((isect.pos.z - 0.5).abs() < 1e-5);
    assert!(isect.normal.dot(r.dir) < 0.0);
    assert!((isect.normal.norm() - 1.0).abs() < 1e-5);
}

#[test]
fn shapes_ignore_sentinel_rays() {
    let shapes: Vec<Box<dyn Shape>> = vec![
        Box::new(Sphere::new(Point3::ORIGIN, 1.0)),
        Box::new(Plane::new(Point3::ORIGIN, Vec3::Y)),
        Box::new(ParallelQuad::new_xz((-1.0, 1.0), 0.0, (-1.0, 1.0))),
    ];
    let sentinel = ray::Ray::sentinel(point3(0.0, 0.5, 0.0));
    for s in shapes.iter() {
        assert!(s.intersect(&sentinel).is_none(), "{}", s.summary());
    }
}
