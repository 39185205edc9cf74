use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use super::projection::{perspective, ClipPlanes};
use super::ViewSource;
use crate::core::{Button, Viewport};
use crate::settings::FreeLookSettings;

pub const PITCH_LIMIT: f32 = 89.0;
pub const MIN_ZOOM: f32 = 1.0;
pub const MAX_ZOOM: f32 = 45.0;

/// Keyboard movement commands, independent of the windowing system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Movement {
    Forward,
    Backward,
    Left,
    Right,
}

impl Movement {
    /// WASD layout
    pub fn from_button(button: Button) -> Option<Self> {
        match button {
            Button::KeyW => Some(Movement::Forward),
            Button::KeyS => Some(Movement::Backward),
            Button::KeyA => Some(Movement::Left),
            Button::KeyD => Some(Movement::Right),
            _ => None,
        }
    }
}

/// Orthonormal camera frame derived from yaw and pitch
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Basis {
    pub front: Vec3,
    pub right: Vec3,
    pub up: Vec3,
}

impl Basis {
    /// Angles in degrees. Every vector is derived fresh and normalized, so drift in
    /// the accumulated angles never leaks into the frame.
    pub fn from_angles(yaw: f32, pitch: f32, world_up: Vec3) -> Self {
        let (yaw_sin, yaw_cos) = yaw.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = pitch.to_radians().sin_cos();

        let front = Vec3::new(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize();
        // front is parallel to world_up only when the pitch constraint was bypassed
        let right = front
            .cross(world_up)
            .try_normalize()
            .unwrap_or_else(|| front.any_orthonormal_vector());
        let up = right.cross(front).normalize();

        Self { front, right, up }
    }
}

/// Euler-angle first-person camera
#[derive(Debug, Clone, PartialEq)]
pub struct FreeLookCamera {
    position: Vec3,
    world_up: Vec3,
    yaw: f32,
    pitch: f32,
    pub movement_speed: f32,
    pub mouse_sensitivity: f32,
    zoom: f32,
    pub clip: ClipPlanes,
}

impl FreeLookCamera {
    /// Camera at `position` looking down -Z with the default tuning
    pub fn new(position: Vec3, world_up: Vec3) -> Self {
        let defaults = FreeLookSettings::default();
        Self::with_angles(position, world_up, defaults.yaw, defaults.pitch)
    }

    /// Angles in degrees; pitch is clamped to the safe range
    pub fn with_angles(position: Vec3, world_up: Vec3, yaw: f32, pitch: f32) -> Self {
        let defaults = FreeLookSettings::default();
        Self {
            position,
            world_up: world_up.normalize(),
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            movement_speed: defaults.movement_speed,
            mouse_sensitivity: defaults.mouse_sensitivity,
            zoom: defaults.zoom,
            clip: ClipPlanes::default(),
        }
    }

    pub fn from_settings(settings: &FreeLookSettings, clip: ClipPlanes) -> Self {
        let mut camera =
            Self::with_angles(settings.position, settings.world_up, settings.yaw, settings.pitch);
        camera.movement_speed = settings.movement_speed;
        camera.mouse_sensitivity = settings.mouse_sensitivity;
        camera.zoom = settings.zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        camera.clip = clip;
        camera
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn basis(&self) -> Basis {
        Basis::from_angles(self.yaw, self.pitch, self.world_up)
    }

    pub fn front(&self) -> Vec3 {
        self.basis().front
    }

    pub fn right(&self) -> Vec3 {
        self.basis().right
    }

    pub fn up(&self) -> Vec3 {
        self.basis().up
    }

    /// Translate along the camera frame. `dt` is trusted as given.
    pub fn process_movement(&mut self, direction: Movement, dt: f32) {
        let velocity = self.movement_speed * dt;
        let basis = self.basis();
        match direction {
            Movement::Forward => self.position += basis.front * velocity,
            Movement::Backward => self.position -= basis.front * velocity,
            Movement::Left => self.position -= basis.right * velocity,
            Movement::Right => self.position += basis.right * velocity,
        }
    }

    /// Apply a pointer delta in pixels. `dy` is expected positive for upward motion.
    pub fn process_mouse_movement(&mut self, dx: f32, dy: f32, constrain_pitch: bool) {
        self.yaw += dx * self.mouse_sensitivity;
        self.pitch += dy * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch = self.pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        }
    }

    /// Field-of-view zoom: scrolling forward narrows the view
    pub fn process_mouse_scroll(&mut self, dy: f32) {
        self.zoom = (self.zoom - dy).clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn view_matrix(&self) -> Mat4 {
        let basis = self.basis();
        Mat4::look_at_rh(self.position, self.position + basis.front, basis.up)
    }

    pub fn projection_matrix(&self, viewport: Viewport) -> Mat4 {
        perspective(self.zoom, viewport, self.clip)
    }
}

impl Default for FreeLookCamera {
    fn default() -> Self {
        Self::from_settings(&FreeLookSettings::default(), ClipPlanes::default())
    }
}

impl ViewSource for FreeLookCamera {
    fn view_matrix(&self) -> Mat4 {
        FreeLookCamera::view_matrix(self)
    }

    fn projection_matrix(&self, viewport: Viewport) -> Mat4 {
        FreeLookCamera::projection_matrix(self, viewport)
    }

    fn eye_position(&self) -> Vec3 {
        self.position
    }

    fn forward(&self) -> Vec3 {
        self.front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_looks_down_negative_z() {
        let camera = FreeLookCamera::default();
        let basis = camera.basis();
        assert!(basis.front.abs_diff_eq(Vec3::NEG_Z, 1e-6));
        assert!(basis.right.abs_diff_eq(Vec3::X, 1e-6));
        assert!(basis.up.abs_diff_eq(Vec3::Y, 1e-6));
    }

    #[test]
    fn test_movement_mapping() {
        assert_eq!(Movement::from_button(Button::KeyW), Some(Movement::Forward));
        assert_eq!(Movement::from_button(Button::KeyS), Some(Movement::Backward));
        assert_eq!(Movement::from_button(Button::KeyA), Some(Movement::Left));
        assert_eq!(Movement::from_button(Button::KeyD), Some(Movement::Right));
        assert_eq!(Movement::from_button(Button::MouseLeft), None);
    }

    #[test]
    fn test_constructor_clamps_pitch() {
        let camera = FreeLookCamera::with_angles(Vec3::ZERO, Vec3::Y, 0.0, 120.0);
        assert_eq!(camera.pitch(), PITCH_LIMIT);
    }

    #[test]
    fn test_unconstrained_pole_keeps_finite_basis() {
        let mut camera = FreeLookCamera::default();
        camera.mouse_sensitivity = 1.0;
        camera.process_mouse_movement(0.0, 90.0, false);
        assert_eq!(camera.pitch(), 90.0);

        let basis = camera.basis();
        assert!(basis.right.is_finite());
        assert!(basis.up.is_finite());
        assert!(basis.front.dot(basis.right).abs() < 1e-5);
        assert!(camera.view_matrix().is_finite());
    }

    #[test]
    fn test_world_up_is_normalized() {
        let camera = FreeLookCamera::new(Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(camera.world_up(), Vec3::Y);
    }

    #[test]
    fn test_translation_keeps_orientation() {
        let mut camera = FreeLookCamera::default();
        let before = camera.basis();
        camera.process_movement(Movement::Right, 0.5);
        assert_eq!(camera.basis(), before);
    }
}
