// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::camera::CameraKind;
use crate::core::Viewport;

#[derive(Parser, Debug, Clone)]
#[command(name = "camera-lab")]
#[command(about = "Free-look and orbit camera viewer", long_about = None)]
pub struct Cli {
    /// Camera model to drive
    #[arg(long, value_enum, default_value_t = CameraKind::FreeLook)]
    pub camera: CameraKind,

    /// JSON settings file; missing keys use the built-in defaults
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Initial window width in logical pixels (also the replay viewport width)
    #[arg(long, default_value_t = 800)]
    pub width: u32,

    /// Initial window height in logical pixels (also the replay viewport height)
    #[arg(long, default_value_t = 600)]
    pub height: u32,

    /// Replay a JSON input script without opening a window and print the
    /// resulting camera matrices as JSON
    #[arg(long)]
    pub replay: Option<PathBuf>,

    /// Print the effective settings as JSON and exit
    #[arg(long = "print-config", default_value = "false")]
    pub print_config: bool,
}

impl Cli {
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}
