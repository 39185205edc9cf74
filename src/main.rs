use anyhow::Context;
use clap::Parser;
use winit::event_loop::{ControlFlow, EventLoop};

use camera_lab::app::App;
use camera_lab::cli::Cli;
use camera_lab::replay::{self, InputScript};
use camera_lab::{Camera, CameraKind, Settings};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };

    if cli.print_config {
        println!("{}", settings.to_json()?);
        return Ok(());
    }

    let mut camera = Camera::from_settings(cli.camera, &settings);

    if let Some(path) = &cli.replay {
        let script = InputScript::load(path)
            .with_context(|| format!("loading input script {}", path.display()))?;
        let records = replay::run(&mut camera, &script, cli.viewport());
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    match cli.camera {
        CameraKind::FreeLook => {
            log::info!("Free-look camera - Controls: WASD to move, mouse to look, wheel to zoom, Escape to quit")
        }
        CameraKind::Orbit => {
            log::info!("Orbit camera - Controls: left-drag to orbit, wheel to dolly, Escape to quit")
        }
    }

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(camera, cli.viewport());
    event_loop.run_app(&mut app)?;

    if let Some(error) = app.take_error() {
        return Err(error).context("viewer stopped");
    }
    Ok(())
}
