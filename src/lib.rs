pub mod app;
pub mod camera;
pub mod cli;
pub mod core;
pub mod error;
pub mod renderer;
pub mod replay;
pub mod scene;
pub mod settings;
pub mod types;

pub use camera::{Camera, CameraKind, FreeLookCamera, Movement, OrbitCamera, ViewSource};
pub use error::{Error, Result};
pub use settings::Settings;
