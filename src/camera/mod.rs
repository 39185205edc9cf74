//! Camera models: the free-look (yaw/pitch) camera and the orbit (arc-ball) camera,
//! plus the [`Camera`] variant a render loop holds when the model is picked at start-up.

use std::f32::consts::{PI, TAU};

use glam::{Mat4, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::core::{Button, FrameInput, Viewport};
use crate::settings::Settings;

pub mod free_look;
pub mod orbit;
pub mod projection;

pub use free_look::{Basis, FreeLookCamera, Movement};
pub use orbit::OrbitCamera;
pub use projection::ClipPlanes;

/// Anything that can supply the matrices for a frame
pub trait ViewSource {
    /// World to eye transform
    fn view_matrix(&self) -> Mat4;

    /// Eye to clip transform for the given viewport
    fn projection_matrix(&self, viewport: Viewport) -> Mat4;

    /// Camera position in world space
    fn eye_position(&self) -> Vec3;

    /// Unit view direction in world space
    fn forward(&self) -> Vec3;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum CameraKind {
    FreeLook,
    Orbit,
}

/// The camera model an application uses for its whole lifetime
#[derive(Debug, Clone, PartialEq)]
pub enum Camera {
    FreeLook(FreeLookCamera),
    Orbit {
        camera: OrbitCamera,
        /// Radians per dragged pixel: a full-width drag is one turn of swivel,
        /// a full-height drag is half a turn of pitch
        drag_speed: Vec2,
    },
}

impl Camera {
    pub fn from_settings(kind: CameraKind, settings: &Settings) -> Self {
        let clip = ClipPlanes::from(&settings.projection);
        match kind {
            CameraKind::FreeLook => {
                Camera::FreeLook(FreeLookCamera::from_settings(&settings.free_look, clip))
            }
            CameraKind::Orbit => Camera::Orbit {
                camera: OrbitCamera::from_settings(&settings.orbit, clip),
                drag_speed: drag_speed_for(Viewport::default()),
            },
        }
    }

    pub fn kind(&self) -> CameraKind {
        match self {
            Camera::FreeLook(_) => CameraKind::FreeLook,
            Camera::Orbit { .. } => CameraKind::Orbit,
        }
    }

    /// Apply one frame of input. All of a frame's input must go through here before
    /// the frame's matrices are read.
    pub fn apply_input(&mut self, input: &FrameInput, dt: f32) {
        match self {
            Camera::FreeLook(camera) => {
                for movement in input.held.iter().copied().filter_map(Movement::from_button) {
                    camera.process_movement(movement, dt);
                }
                let delta = input.pointer_delta;
                if delta.x != 0.0 || delta.y != 0.0 {
                    // Window y grows downwards; looking up needs a positive dy
                    camera.process_mouse_movement(delta.x, -delta.y, true);
                }
                if input.scroll_delta != 0.0 {
                    camera.process_mouse_scroll(input.scroll_delta);
                }
            }
            Camera::Orbit { camera, drag_speed } => {
                if input.is_held(Button::MouseLeft) {
                    let delta = input.pointer_delta * *drag_speed;
                    if delta.x != 0.0 || delta.y != 0.0 {
                        // Window y grows downwards; dragging up raises pitch
                        camera.apply_swivel_pitch(delta.x, -delta.y);
                    }
                }
                if input.scroll_delta != 0.0 {
                    // Scrolling away from the user moves the eye outwards
                    camera.apply_zoom(input.scroll_delta);
                }
            }
        }
    }

    /// Rescale pointer-driven rotation to a new window size
    pub fn set_viewport(&mut self, viewport: Viewport) {
        if let Camera::Orbit { drag_speed, .. } = self {
            *drag_speed = drag_speed_for(viewport);
        }
    }

    /// Whether the viewer should hide and confine the cursor
    pub fn wants_cursor_grab(&self) -> bool {
        matches!(self, Camera::FreeLook(_))
    }

    fn source(&self) -> &dyn ViewSource {
        match self {
            Camera::FreeLook(camera) => camera,
            Camera::Orbit { camera, .. } => camera,
        }
    }
}

fn drag_speed_for(viewport: Viewport) -> Vec2 {
    Vec2::new(
        TAU / viewport.width.max(1) as f32,
        PI / viewport.height.max(1) as f32,
    )
}

impl ViewSource for Camera {
    fn view_matrix(&self) -> Mat4 {
        self.source().view_matrix()
    }

    fn projection_matrix(&self, viewport: Viewport) -> Mat4 {
        self.source().projection_matrix(viewport)
    }

    fn eye_position(&self) -> Vec3 {
        self.source().eye_position()
    }

    fn forward(&self) -> Vec3 {
        self.source().forward()
    }
}
