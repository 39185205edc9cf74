use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid settings file: {0}")]
    Settings(#[source] serde_json::Error),

    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    #[error("Invalid input script: {0}")]
    Script(#[source] serde_json::Error),

    #[error("Event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("Window creation failed: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("Surface creation failed: {0}")]
    Surface(#[from] wgpu::CreateSurfaceError),

    #[error("No suitable GPU adapter: {0}")]
    Adapter(#[from] wgpu::RequestAdapterError),

    #[error("GPU device request failed: {0}")]
    Device(#[from] wgpu::RequestDeviceError),

    #[error("Failed to acquire frame: {0}")]
    Frame(#[from] wgpu::SurfaceError),

    #[error("Render error: {0}")]
    Render(String),
}
