use std::path::Path;

use anyhow::Context;
use clap::Parser;
use kiss3d::light::Light;
use kiss3d::window::Window;
use log::info;

use solar_orrery::config::{Args, Config};
use solar_orrery::gui::Simulation;
use solar_orrery::model::catalog::{default_catalog, load_catalog};
use solar_orrery::model::{BodyInfo, Scene};

fn read_catalog(path: Option<&Path>) -> anyhow::Result<Vec<BodyInfo>> {
    match path {
        Some(path) => {
            info!("Loading bodies from {}", path.display());
            load_catalog(path)
        }
        None => {
            info!("Using the built-in Solar System");
            Ok(default_catalog())
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = Config::from_args(&args).context("Invalid configuration")?;
    let catalog = read_catalog(args.bodies.as_deref())?;
    let scene = Scene::new(catalog, &config);

    let mut window = Window::new_with_size("Solar System", config.width, config.height);
    window.set_light(Light::StickToCamera);
    window.set_framerate_limit(Some(60));

    let simulation = Simulation::new(scene, &config, &mut window);
    info!("Starting render loop");
    window.render_loop(simulation);
    Ok(())
}
