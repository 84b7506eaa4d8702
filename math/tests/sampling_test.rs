use math::sampling::{sample_unit_disk, sample_unit_disk_n, sample_unit_disk_polar};
use rand::rngs::StdRng;
use rand::SeedableRng;

#[test]
fn rejection_samples_stay_inside_disk() {
    let mut rng = StdRng::seed_from_u64(7);
    let points = sample_unit_disk_n(&mut rng, 2000, |r| sample_unit_disk(r));
    assert_eq!(points.len(), 2000);
    for (x, y) in points.iter().copied() {
        assert!(x * x + y * y <= 1.0, "({}, {}) outside the unit disk", x, y);
    }
}

#[test]
fn rejection_samples_cover_area_uniformly() {
    // Fraction of points inside radius 0.5 should be close to 0.25 for an area-uniform sampler.
    let mut rng = StdRng::seed_from_u64(11);
    let points = sample_unit_disk_n(&mut rng, 20000, |r| sample_unit_disk(r));
    let inner = points.iter().filter(|(x, y)| x * x + y * y < 0.25).count();
    let fraction = inner as f32 / points.len() as f32;
    assert!((fraction - 0.25).abs() < 0.02, "fraction = {}", fraction);
}

#[test]
fn polar_samples_concentrate_at_center() {
    let mut rng = StdRng::seed_from_u64(11);
    let points = sample_unit_disk_n(&mut rng, 20000, |r| sample_unit_disk_polar(r));
    for (x, y) in points.iter().copied() {
        assert!(x * x + y * y <= 1.0 + 1e-6);
    }
    // Uniform radius puts half of the points within r < 0.5.
    let inner = points.iter().filter(|(x, y)| x * x + y * y < 0.25).count();
    let fraction = inner as f32 / points.len() as f32;
    assert!((fraction - 0.5).abs() < 0.02, "fraction = {}", fraction);
}
