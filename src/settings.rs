use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tuning constants for the free-look camera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FreeLookSettings {
    pub position: Vec3,
    pub world_up: Vec3,
    /// Degrees; -90 looks down -Z
    pub yaw: f32,
    /// Degrees
    pub pitch: f32,
    /// World units per second
    pub movement_speed: f32,
    /// Degrees per pixel
    pub mouse_sensitivity: f32,
    /// Vertical field of view in degrees
    pub zoom: f32,
}

impl Default for FreeLookSettings {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            world_up: Vec3::Y,
            yaw: -90.0,
            pitch: 0.0,
            movement_speed: 3.0,
            mouse_sensitivity: 0.25,
            zoom: 45.0,
        }
    }
}

/// Tuning constants for the orbit camera
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitSettings {
    pub look_at: Vec3,
    pub distance: f32,
    pub swivel: f32,
    pub pitch: f32,
    /// Distance change per scroll line
    pub zoom_scale: f32,
    /// Vertical field of view in degrees
    pub fov: f32,
    /// Keep pitch within +-89 degrees
    pub limit_pitch: bool,
}

impl Default for OrbitSettings {
    fn default() -> Self {
        Self {
            look_at: Vec3::ZERO,
            distance: 10.0,
            swivel: 0.0,
            pitch: 0.0,
            zoom_scale: 0.25,
            fov: 45.0,
            limit_pitch: true,
        }
    }
}

/// Clip planes shared by both camera models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionSettings {
    pub near: f32,
    pub far: f32,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        Self {
            near: 0.1,
            far: 100.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub free_look: FreeLookSettings,
    pub orbit: OrbitSettings,
    pub projection: ProjectionSettings,
}

impl Settings {
    /// Load settings from a JSON file. Missing keys keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&text)?;
        log::info!("Loaded camera settings from {}", path.display());
        Ok(settings)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let settings: Self = serde_json::from_str(text).map_err(Error::Settings)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::Settings)
    }

    /// Reject values no camera can work with
    pub fn validate(&self) -> Result<()> {
        let projection = &self.projection;
        if !(projection.near > 0.0 && projection.far > projection.near) {
            return Err(Error::InvalidSettings(format!(
                "clip planes must satisfy 0 < near < far, got near={} far={}",
                projection.near, projection.far
            )));
        }
        if self.free_look.world_up.length_squared() == 0.0 {
            return Err(Error::InvalidSettings("free_look.world_up must not be zero".into()));
        }
        if !(self.orbit.fov > 0.0 && self.orbit.fov < 180.0) {
            return Err(Error::InvalidSettings(format!(
                "orbit.fov must be within (0, 180) degrees, got {}",
                self.orbit.fov
            )));
        }
        Ok(())
    }
}
