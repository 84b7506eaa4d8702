use std::str::FromStr;
use std::time::Instant;

use geometry::camera::Camera;
use indicatif::{ProgressBar, ProgressStyle};
use integrator::{Brdf, PathIntegrator, Sampler};
use math::sampling;
use radiometry::color::Color;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::image::Image;

/// Where the samples of a pixel land inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelJitter {
    /// Uniformly over the disk inscribed in the pixel.
    Uniform,
    /// Over the same disk, denser towards the pixel center.
    CenterWeighted,
    /// Always at the pixel center.
    Off,
}

impl FromStr for PixelJitter {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "uniform" => Ok(Self::Uniform),
            "center" => Ok(Self::CenterWeighted),
            "none" => Ok(Self::Off),
            _ => Err(format!(
                "unknown pixel jitter '{}', expected uniform|center|none",
                s
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderSettings {
    pub width: u32,
    pub height: u32,
    pub spp: u32,
    pub seed: u64,
    pub pixel_jitter: PixelJitter,
    pub use_multi_thread: bool,
    pub show_progress: bool,
}

impl RenderSettings {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            spp: 1,
            seed: 0,
            pixel_jitter: PixelJitter::Uniform,
            use_multi_thread: true,
            show_progress: false,
        }
    }

    /// Offsets, in pixels, of the `spp` samples within a pixel relative to its center.
    fn pixel_offsets(&self, rng: &mut StdRng) -> Vec<(f32, f32)> {
        let n = self.spp as usize;
        let disk = match self.pixel_jitter {
            PixelJitter::Off => return vec![(0.0, 0.0); n],
            PixelJitter::Uniform => {
                sampling::sample_unit_disk_n(rng, n, sampling::sample_unit_disk)
            }
            PixelJitter::CenterWeighted => {
                sampling::sample_unit_disk_n(rng, n, sampling::sample_unit_disk_polar)
            }
        };
        disk.into_iter().map(|(x, y)| (x * 0.5, y * 0.5)).collect()
    }
}

/// Renders the image seen by `camera`. Rows are independent tasks, each with its own random
/// generator derived from the seed and the row index, so the result does not depend on the thread
/// count.
///
/// Row 0 is the bottom of the image (`y = -1` on the camera's image plane).
pub fn render<S: Sampler, B: Brdf>(
    integrator: &PathIntegrator<S, B>, camera: &Camera, settings: &RenderSettings,
) -> Image {
    let (width, height) = (settings.width, settings.height);
    log::info!(
        "rendering {}x{} at {} spp, max depth {}, {}",
        width,
        height,
        settings.spp,
        integrator.max_depth(),
        if settings.use_multi_thread {
            "multi-threaded"
        } else {
            "single-threaded"
        }
    );

    let progress = if settings.show_progress {
        ProgressBar::new(height as u64)
    } else {
        ProgressBar::hidden()
    };
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{elapsed_precise} [{bar:40.cyan/blue}] {pos}/{len} rows ({eta})")
            .progress_chars("=> "),
    );

    let start_time = Instant::now();
    let render_row = |row: u32| -> Vec<Color> {
        let mut rng = StdRng::seed_from_u64(settings.seed.wrapping_add(row as u64));
        let pixels = (0..width)
            .map(|col| {
                let samples = settings
                    .pixel_offsets(&mut rng)
                    .into_iter()
                    .map(|(dx, dy)| {
                        let x = ((col as f32 + 0.5 + dx) / width as f32) * 2.0 - 1.0;
                        let y = ((row as f32 + 0.5 + dy) / height as f32) * 2.0 - 1.0;
                        integrator.radiance(&camera.get_ray(x, y), &mut rng)
                    })
                    .collect::<Vec<_>>();
                Color::average(&samples)
            })
            .collect::<Vec<_>>();
        progress.inc(1);
        pixels
    };

    let rows: Vec<Vec<Color>> = if settings.use_multi_thread {
        (0..height).into_par_iter().map(&render_row).collect()
    } else {
        (0..height).map(&render_row).collect()
    };
    progress.finish_and_clear();
    log::info!("rendering finished in {:.2?}", start_time.elapsed());

    let data = rows.into_iter().flatten().collect();
    Image::new(width, height, data)
}
