use std::path::PathBuf;

use anyhow::ensure;
use clap::Parser;
use nalgebra::Vector3;

/// Command-line overrides for the viewer. Anything left unset keeps the value
/// from `Config::default()`.
#[derive(Debug, Parser)]
#[command(name = "solar-orrery", about = "Animated model of the Solar System")]
pub struct Args {
    /// JSON file describing the bodies, instead of the built-in catalog
    #[arg(long)]
    pub bodies: Option<PathBuf>,
    /// Directory holding the texture images
    #[arg(long)]
    pub assets: Option<PathBuf>,
    /// Number of positions kept in each planet's trail
    #[arg(long)]
    pub trail_length: Option<usize>,
    /// Number of background stars
    #[arg(long)]
    pub stars: Option<usize>,
    /// Seed for the starfield layout
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long)]
    pub width: Option<u32>,
    #[arg(long)]
    pub height: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct Config {
    // -- window --
    pub width: u32,
    pub height: u32,
    pub asset_dir: PathBuf,
    // -- speed --
    pub base_speed: f32,
    pub slow_speed: f32,
    pub speed_smoothing: f32,
    // -- trails and stars --
    pub trail_length: usize,
    pub star_count: usize,
    pub star_range: f32,
    pub star_seed: u64,
    // -- camera --
    pub chase_blend: f32,
    pub chase_distance: f32,
    pub default_eye: Vector3<f32>,
    pub star_eye: Vector3<f32>,
    pub reset_duration: f32,
    pub fly_to_star_duration: f32,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            width: 1280,
            height: 800,
            asset_dir: PathBuf::from("assets"),
            base_speed: 0.08,
            slow_speed: 0.015,
            speed_smoothing: 0.1,
            trail_length: 400,
            star_count: 8000,
            star_range: 2000.0,
            star_seed: 0x5eed,
            chase_blend: 0.1,
            chase_distance: 5.0,
            default_eye: Vector3::new(0.0, 50.0, 120.0),
            star_eye: Vector3::new(0.0, 20.0, 40.0),
            reset_duration: 1.5,
            fly_to_star_duration: 1.0,
        }
    }
}

impl Config {
    pub fn from_args(args: &Args) -> anyhow::Result<Self> {
        let mut config = Config::default();
        if let Some(dir) = &args.assets {
            config.asset_dir = dir.clone();
        }
        if let Some(n) = args.trail_length {
            config.trail_length = n;
        }
        if let Some(n) = args.stars {
            config.star_count = n;
        }
        if let Some(seed) = args.seed {
            config.star_seed = seed;
        }
        if let Some(w) = args.width {
            config.width = w;
        }
        if let Some(h) = args.height {
            config.height = h;
        }
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.trail_length > 0, "trail length must be at least 1");
        ensure!(
            self.base_speed > 0.0 && self.slow_speed > 0.0,
            "speeds must be positive (base {}, slow {})",
            self.base_speed,
            self.slow_speed
        );
        ensure!(
            self.speed_smoothing > 0.0 && self.speed_smoothing <= 1.0,
            "speed smoothing must be in (0, 1], got {}",
            self.speed_smoothing
        );
        ensure!(
            self.chase_blend > 0.0 && self.chase_blend <= 1.0,
            "chase blend must be in (0, 1], got {}",
            self.chase_blend
        );
        ensure!(self.star_range > 0.0, "star range must be positive");
        ensure!(self.width > 0 && self.height > 0, "window size must be non-zero");
        Ok(())
    }
}
