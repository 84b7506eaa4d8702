use std::collections::HashMap;
use std::fmt::Display;
use std::str::FromStr;

use integrator::path::MAX_DEPTH_LIMIT;
use radiometry::color::Color;

use crate::render::PixelJitter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamplerKind {
    Discrete,
    Grid,
}

impl FromStr for SamplerKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "discrete" => Ok(Self::Discrete),
            "grid" => Ok(Self::Grid),
            _ => Err(format!("unknown sampler '{}', expected discrete|grid", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrdfKind {
    Discrete,
    Diffuse,
    Phong,
}

impl FromStr for BrdfKind {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "discrete" => Ok(Self::Discrete),
            "diffuse" => Ok(Self::Diffuse),
            "phong" => Ok(Self::Phong),
            _ => Err(format!("unknown brdf '{}', expected discrete|diffuse|phong", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CliOptions {
    pub use_multi_thread: bool,
    pub scene_name: String,
    pub width: u32,
    pub height: u32,
    pub spp: u32,
    pub max_depth: u32,
    pub sampler: SamplerKind,
    pub brdf: BrdfKind,
    pub grid_size: usize,
    pub jitter: f32,
    pub epsilon: f32,
    pub background: Color,
    pub pixel_jitter: PixelJitter,
    pub seed: u64,
    pub output: String,
    pub show_help: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            use_multi_thread: true,
            scene_name: String::from("mirror_spheres"),
            width: 320,
            height: 240,
            spp: 4,
            max_depth: integrator::path::DEFAULT_MAX_DEPTH,
            sampler: SamplerKind::Discrete,
            brdf: BrdfKind::Discrete,
            grid_size: integrator::sampler::DEFAULT_GRID_SIZE,
            jitter: integrator::sampler::DEFAULT_JITTER,
            epsilon: math::EPSILON,
            background: integrator::path::DEFAULT_BACKGROUND,
            pixel_jitter: PixelJitter::Uniform,
            seed: 0,
            output: String::from("output.png"),
            show_help: false,
        }
    }
}

impl CliOptions {
    pub fn message() -> &'static str {
        r#"
        --use_multi_thread | --use_single_thread
        --scene <empty|single_light|mirror_spheres|cornell>
        --width <pixels> --height <pixels>
        --spp <samples per pixel>
        --max_depth <bounces, at most 512>
        --sampler <discrete|grid>     --grid_size <N>     --jitter <k>
        --brdf <discrete|diffuse|phong>
        --epsilon <sentinel length>
        --background <r,g,b>
        --pixel_jitter <uniform|center|none>
        --seed <u64>
        --output <file.png|file.exr>
        --help
        "#
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    fn validate(self) -> Result<Self, String> {
        if self.width == 0 || self.height == 0 {
            return Err(format!("Image size {}x{} is empty", self.width, self.height));
        }
        if self.spp == 0 {
            return Err(String::from("--spp must be at least 1"));
        }
        if self.max_depth > MAX_DEPTH_LIMIT {
            return Err(format!(
                "--max_depth must be at most {}, got {}",
                MAX_DEPTH_LIMIT, self.max_depth
            ));
        }
        if self.grid_size == 0 {
            return Err(String::from("--grid_size must be at least 1"));
        }
        if !(self.jitter >= 0.0 && self.jitter.is_finite()) {
            return Err(format!("--jitter must be non-negative, got {}", self.jitter));
        }
        if !(self.epsilon >= 0.0 && self.epsilon.is_finite()) {
            return Err(format!("--epsilon must be non-negative, got {}", self.epsilon));
        }
        let extension = std::path::Path::new(&self.output)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());
        match extension.as_deref() {
            Some("png") | Some("exr") => Ok(self),
            _ => Err(format!("Output '{}' should end with .png or .exr", self.output)),
        }
    }
}

/// Parses the value given to `key`, reporting a missing or malformed value.
fn parse_value<T>(key: &str, value: Option<String>) -> Result<T, String>
where
    T: FromStr,
    T::Err: Display,
{
    let value = value.ok_or_else(|| format!("Missing value for key {}", key))?;
    value
        .parse::<T>()
        .map_err(|e| format!("Invalid value '{}' for key {}: {}", value, key, e))
}

pub fn parse_args(args: Vec<String>) -> Result<CliOptions, String> {
    let mut pairs: HashMap<String, Option<String>> = HashMap::new();
    let mut args = args.into_iter().rev().collect::<Vec<_>>();
    args.pop(); // Removes args[0]

    let mut help_count = 0;
    while let Some(key) = args.pop() {
        if !key.starts_with('-') {
            return Err(format!("Unrecognized key {}", key));
        }
        if key == "--help" {
            help_count += 1;
        }
        match args.last() {
            None => {
                pairs.insert(key, None);
            }
            Some(value) => {
                if value.starts_with('-') {
                    pairs.insert(key, None);
                } else {
                    let value = args.pop();
                    pairs.insert(key, value);
                }
            }
        }
    }
    if help_count > 1 {
        log::warn!("--help given {} times", help_count);
    }

    let mut options = CliOptions::default();
    for (k, v) in pairs.into_iter() {
        match k.as_str() {
            "--use_multi_thread" => options.use_multi_thread = true,
            "--use_single_thread" => options.use_multi_thread = false,
            "--scene" => options.scene_name = parse_value(&k, v)?,
            "--width" => options.width = parse_value(&k, v)?,
            "--height" => options.height = parse_value(&k, v)?,
            "--spp" => options.spp = parse_value(&k, v)?,
            "--max_depth" => options.max_depth = parse_value(&k, v)?,
            "--sampler" => options.sampler = parse_value(&k, v)?,
            "--brdf" => options.brdf = parse_value(&k, v)?,
            "--grid_size" => options.grid_size = parse_value(&k, v)?,
            "--jitter" => options.jitter = parse_value(&k, v)?,
            "--epsilon" => options.epsilon = parse_value(&k, v)?,
            "--background" => options.background = parse_value(&k, v)?,
            "--pixel_jitter" => options.pixel_jitter = parse_value(&k, v)?,
            "--seed" => options.seed = parse_value(&k, v)?,
            "--output" => options.output = parse_value(&k, v)?,
            "--help" => options.show_help = true,
            _ => return Err(format!("Unrecognized key {}", k)),
        }
    }
    options.validate()
}
