use glam::{Mat4, Quat, Vec3};

use super::projection::{perspective, ClipPlanes};
use super::ViewSource;
use crate::core::Viewport;
use crate::settings::OrbitSettings;

/// Closest the eye may get to the focus point
pub const MIN_DISTANCE: f32 = 1e-3;

/// 89 degrees, the same bound the free-look camera uses
pub const PITCH_LIMIT_RADIANS: f32 = 89.0 * std::f32::consts::PI / 180.0;

/// Arc-ball camera circling a focus point
///
/// Only `(look_at, distance, swivel, pitch)` is stored; the eye position and view
/// matrix are rebuilt from scratch on every query.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    look_at: Vec3,
    distance: f32,
    swivel_radians: f32,
    pitch_radians: f32,
    /// Distance change per unit of scroll
    pub zoom_scale: f32,
    /// Vertical field of view in degrees
    pub fov: f32,
    pub limit_pitch: bool,
    pub clip: ClipPlanes,
}

impl OrbitCamera {
    pub fn new(look_at: Vec3, distance: f32) -> Self {
        Self::from_settings(
            &OrbitSettings {
                look_at,
                distance,
                ..OrbitSettings::default()
            },
            ClipPlanes::default(),
        )
    }

    pub fn from_settings(settings: &OrbitSettings, clip: ClipPlanes) -> Self {
        let mut camera = Self {
            look_at: settings.look_at,
            distance: settings.distance.max(MIN_DISTANCE),
            swivel_radians: settings.swivel,
            pitch_radians: settings.pitch,
            zoom_scale: settings.zoom_scale,
            fov: settings.fov,
            limit_pitch: settings.limit_pitch,
            clip,
        };
        camera.apply_pitch_limit();
        camera
    }

    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    pub fn set_look_at(&mut self, look_at: Vec3) {
        self.look_at = look_at;
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn swivel_radians(&self) -> f32 {
        self.swivel_radians
    }

    pub fn pitch_radians(&self) -> f32 {
        self.pitch_radians
    }

    /// Accumulate drag rotation. Swivel wraps freely; pitch honours `limit_pitch`.
    pub fn apply_swivel_pitch(&mut self, d_swivel: f32, d_pitch: f32) {
        self.swivel_radians += d_swivel;
        self.pitch_radians += d_pitch;
        self.apply_pitch_limit();
    }

    /// Dolly along the view ray; the distance never drops below [`MIN_DISTANCE`]
    pub fn apply_zoom(&mut self, d_scroll: f32) {
        self.distance = (self.distance + d_scroll * self.zoom_scale).max(MIN_DISTANCE);
    }

    pub fn eye_position(&self) -> Vec3 {
        let swivel = Quat::from_axis_angle(Vec3::Y, self.swivel_radians);
        let eye = swivel * Vec3::new(0.0, 0.0, self.distance);
        // Pitch about the already swivelled right axis, so it always tilts
        // relative to the current facing.
        let rotated_right = swivel * Vec3::X;
        let pitch = Quat::from_axis_angle(rotated_right, self.pitch_radians);
        pitch * eye + self.look_at
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye_position(), self.look_at, Vec3::Y)
    }

    pub fn projection_matrix(&self, viewport: Viewport) -> Mat4 {
        perspective(self.fov, viewport, self.clip)
    }

    fn apply_pitch_limit(&mut self) {
        if self.limit_pitch {
            self.pitch_radians = self
                .pitch_radians
                .clamp(-PITCH_LIMIT_RADIANS, PITCH_LIMIT_RADIANS);
        }
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_settings(&OrbitSettings::default(), ClipPlanes::default())
    }
}

impl ViewSource for OrbitCamera {
    fn view_matrix(&self) -> Mat4 {
        OrbitCamera::view_matrix(self)
    }

    fn projection_matrix(&self, viewport: Viewport) -> Mat4 {
        OrbitCamera::projection_matrix(self, viewport)
    }

    fn eye_position(&self) -> Vec3 {
        OrbitCamera::eye_position(self)
    }

    fn forward(&self) -> Vec3 {
        (self.look_at - self.eye_position()).normalize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_quarter_swivel_moves_eye_to_positive_x() {
        let mut camera = OrbitCamera::new(Vec3::ZERO, 4.0);
        camera.apply_swivel_pitch(FRAC_PI_2, 0.0);
        assert!(camera.eye_position().abs_diff_eq(Vec3::new(4.0, 0.0, 0.0), 1e-5));
    }

    #[test]
    fn test_pitch_tilts_around_swivelled_axis() {
        let mut camera = OrbitCamera::new(Vec3::ZERO, 2.0);
        camera.apply_swivel_pitch(FRAC_PI_2, -0.5);

        let eye = camera.eye_position();
        // After a quarter swivel the tilt axis is -Z, so the eye stays in the XY plane
        assert!(eye.z.abs() < 1e-5);
        assert!(eye.y > 0.0);
        assert!((eye.length() - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_settings_distance_is_clamped() {
        let settings = OrbitSettings {
            distance: -3.0,
            ..OrbitSettings::default()
        };
        let camera = OrbitCamera::from_settings(&settings, ClipPlanes::default());
        assert_eq!(camera.distance(), MIN_DISTANCE);
    }

    #[test]
    fn test_forward_points_at_focus() {
        let camera = OrbitCamera::new(Vec3::new(1.0, 2.0, 3.0), 5.0);
        assert!(camera.forward().abs_diff_eq(Vec3::NEG_Z, 1e-6));
    }
}
