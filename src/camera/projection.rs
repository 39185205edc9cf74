use glam::Mat4;

use crate::core::Viewport;
use crate::settings::ProjectionSettings;

/// Near and far clip distances
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipPlanes {
    pub near: f32,
    pub far: f32,
}

impl ClipPlanes {
    pub const fn new(near: f32, far: f32) -> Self {
        Self { near, far }
    }
}

impl Default for ClipPlanes {
    fn default() -> Self {
        Self::new(0.1, 100.0)
    }
}

impl From<&ProjectionSettings> for ClipPlanes {
    fn from(settings: &ProjectionSettings) -> Self {
        Self::new(settings.near, settings.far)
    }
}

/// Right-handed perspective with a [0, 1] depth range, as wgpu expects
pub fn perspective(fov_y_degrees: f32, viewport: Viewport, clip: ClipPlanes) -> Mat4 {
    Mat4::perspective_rh(
        fov_y_degrees.to_radians(),
        viewport.aspect(),
        clip.near,
        clip.far,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec4;

    #[test]
    fn test_near_plane_maps_to_zero_depth() {
        let clip = ClipPlanes::new(0.5, 50.0);
        let proj = perspective(45.0, Viewport::new(800, 600), clip);

        let near = proj * Vec4::new(0.0, 0.0, -0.5, 1.0);
        let far = proj * Vec4::new(0.0, 0.0, -50.0, 1.0);
        assert!((near.z / near.w).abs() < 1e-5);
        assert!((far.z / far.w - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_narrower_fov_magnifies() {
        let viewport = Viewport::new(800, 600);
        let wide = perspective(45.0, viewport, ClipPlanes::default());
        let narrow = perspective(10.0, viewport, ClipPlanes::default());
        assert!(narrow.y_axis.y > wide.y_axis.y);
    }
}
