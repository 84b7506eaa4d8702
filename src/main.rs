mod cli_options;
mod image;
mod render;

use std::path::Path;

use cli_options::{BrdfKind, CliOptions, SamplerKind};
use geometry::camera::Camera;
use integrator::{
    Brdf, DiffuseBrdf, DiscreteBrdf, DiscreteSampler, GridSampler, PathIntegrator, PhongBrdf,
    Sampler,
};
use render::RenderSettings;
use scene::{preset, Scene};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();
    if let Err(message) = run(args) {
        log::error!("ERROR: {}", message);
        std::process::exit(1);
    }
}

fn run(args: Vec<String>) -> Result<(), String> {
    let options = cli_options::parse_args(args)?;
    if options.show_help {
        println!("usage: {}", CliOptions::message());
        return Ok(());
    }

    let (scene, camera) = preset::by_name(&options.scene_name, options.aspect_ratio())
        .ok_or_else(|| {
            format!(
                "Unknown scene '{}', expected one of: {}",
                options.scene_name,
                preset::NAMES.join(", ")
            )
        })?;
    log::info!("scene '{}' with {} actors", options.scene_name, scene.len());
    log::debug!("options: {:?}", options);
    log::debug!("camera at {} looking along {}", camera.position(), camera.forward());

    match options.sampler {
        SamplerKind::Discrete => {
            let sampler = DiscreteSampler::new(options.jitter);
            log::debug!("discrete sampler: jitter {}", sampler.jitter());
            with_brdf(&scene, &camera, &options, sampler)
        }
        SamplerKind::Grid => {
            let sampler = GridSampler::new(options.grid_size);
            log::debug!(
                "grid sampler: resolution {}, {} directions per hit",
                sampler.resolution(),
                sampler.sample_count()
            );
            with_brdf(&scene, &camera, &options, sampler)
        }
    }
}

/// Second half of the (sampler, BRDF) selection; each combination gets its own monomorphized
/// render loop.
fn with_brdf<S: Sampler>(
    scene: &Scene, camera: &Camera, options: &CliOptions, sampler: S,
) -> Result<(), String> {
    match options.brdf {
        BrdfKind::Discrete => render_and_save(scene, camera, options, sampler, DiscreteBrdf),
        BrdfKind::Diffuse => render_and_save(scene, camera, options, sampler, DiffuseBrdf),
        BrdfKind::Phong => render_and_save(scene, camera, options, sampler, PhongBrdf::default()),
    }
}

fn render_and_save<S: Sampler, B: Brdf>(
    scene: &Scene, camera: &Camera, options: &CliOptions, sampler: S, brdf: B,
) -> Result<(), String> {
    let integrator = PathIntegrator::new(scene, sampler, brdf)
        .with_max_depth(options.max_depth)
        .with_background(options.background)
        .with_epsilon(options.epsilon);
    let settings = RenderSettings {
        spp: options.spp,
        seed: options.seed,
        pixel_jitter: options.pixel_jitter,
        use_multi_thread: options.use_multi_thread,
        show_progress: true,
        ..RenderSettings::new(options.width, options.height)
    };

    let image = render::render(&integrator, camera, &settings);
    image.write(Path::new(&options.output))?;
    log::info!("image written to {}", options.output);
    Ok(())
}
