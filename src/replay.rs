//! Headless input replay: drives a camera through the same input path as the
//! viewer, frame by frame, and records the resulting matrices.

use std::path::Path;

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::camera::{Camera, ViewSource};
use crate::core::{Button, InputSession, Viewport};
use crate::error::{Error, Result};

const DEFAULT_FRAME_DT: f32 = 1.0 / 60.0;

fn default_dt() -> f32 {
    DEFAULT_FRAME_DT
}

/// Input for one frame of a script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptFrame {
    /// Seconds since the previous frame
    #[serde(default = "default_dt")]
    pub dt: f32,
    /// Buttons held during this frame; anything not listed is released.
    /// Buttons not held on the previous frame are pressed in the listed order.
    #[serde(default)]
    pub held: Vec<Button>,
    /// Cursor position in window pixels, if the cursor moved
    #[serde(default)]
    pub cursor: Option<[f32; 2]>,
    /// Wheel lines scrolled during this frame
    #[serde(default)]
    pub scroll: f32,
}

impl Default for ScriptFrame {
    fn default() -> Self {
        Self {
            dt: DEFAULT_FRAME_DT,
            held: Vec::new(),
            cursor: None,
            scroll: 0.0,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InputScript {
    pub frames: Vec<ScriptFrame>,
}

impl InputScript {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(Error::Script)
    }
}

/// Camera state after one replayed frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameRecord {
    pub number: u64,
    pub eye: Vec3,
    pub view: Mat4,
    pub projection: Mat4,
}

/// Replay `script` against `camera` sized to `viewport`, returning one record per frame
pub fn run(camera: &mut Camera, script: &InputScript, viewport: Viewport) -> Vec<FrameRecord> {
    let mut session = InputSession::new();
    camera.set_viewport(viewport);
    log::debug!(
        "Replaying {} frames with the {:?} camera",
        script.frames.len(),
        camera.kind()
    );

    script
        .frames
        .iter()
        .enumerate()
        .map(|(number, frame)| {
            sync_buttons(&mut session, &frame.held);
            if let Some([x, y]) = frame.cursor {
                session.cursor_moved(x, y);
            }
            if frame.scroll != 0.0 {
                session.scroll(frame.scroll);
            }

            let input = session.take_frame();
            camera.apply_input(&input, frame.dt);

            FrameRecord {
                number: number as u64,
                eye: camera.eye_position(),
                view: camera.view_matrix(),
                projection: camera.projection_matrix(viewport),
            }
        })
        .collect()
}

/// Release everything not in `held`, then press `held` in order
fn sync_buttons(session: &mut InputSession, held: &[Button]) {
    for button in Button::ALL {
        if !held.contains(&button) {
            session.set_button(button, false);
        }
    }
    for &button in held {
        session.set_button(button, true);
    }
}
