use rand::Rng;
use std::f32::consts::PI;

/// Draws a point uniformly distributed inside the unit disk by rejection: a point is drawn from
/// the square [-1, 1]^2 and kept only if it falls inside the disk. About 21% of the draws are
/// wasted on average.
pub fn sample_unit_disk<R: Rng + ?Sized>(rng: &mut R) -> (f32, f32) {
    loop {
        let x = rng.gen::<f32>() * 2.0 - 1.0;
        let y = rng.gen::<f32>() * 2.0 - 1.0;
        if x * x + y * y <= 1.0 {
            return (x, y);
        }
    }
}

/// Draws a point inside the unit disk from a uniform radius and a uniform angle.
///
/// Never rejects, but the result is NOT uniform over the area: points concentrate near the center
/// (the density is proportional to 1/r).
pub fn sample_unit_disk_polar<R: Rng + ?Sized>(rng: &mut R) -> (f32, f32) {
    let r = rng.gen::<f32>();
    let theta = 2.0 * PI * rng.gen::<f32>();
    let (sin_t, cos_t) = theta.sin_cos();
    (r * cos_t, r * sin_t)
}

/// Draws `n` points with the given disk sampler.
pub fn sample_unit_disk_n<R, F>(rng: &mut R, n: usize, sampler: F) -> Vec<(f32, f32)>
where
    R: Rng + ?Sized,
    F: Fn(&mut R) -> (f32, f32),
{
    (0..n).map(|_| sampler(rng)).collect()
}
