use std::collections::HashSet;

use glam::Vec2;
use winit::event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::controller::{Button, Controller};

/// Pixel-precise wheel deltas (trackpads) are converted to wheel lines at this rate.
pub const PIXELS_PER_SCROLL_LINE: f32 = 20.0;

/// One frame worth of input, drained from an [`InputSession`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameInput {
    /// Buttons held when the frame was taken, in press order
    pub held: Vec<Button>,
    /// Cursor movement since the previous frame, in window pixels (y grows downwards)
    pub pointer_delta: Vec2,
    /// Wheel movement since the previous frame, in lines (positive = away from the user)
    pub scroll_delta: f32,
}

impl FrameInput {
    pub fn is_held(&self, button: Button) -> bool {
        self.held.contains(&button)
    }
}

/// Input state owned by the application and fed by the window's event stream
#[derive(Debug, Clone, Default)]
pub struct InputSession {
    pressed_keys: HashSet<Button>,
    pressed_vec: Vec<Button>,
    /// Last cursor sample; `None` until the first sample arrives
    last_cursor: Option<Vec2>,
    pointer_delta: Vec2,
    scroll_delta: f32,
    /// Pointer deltas come from raw device motion instead of cursor positions
    relative: bool,
}

impl InputSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a winit WindowEvent. Returns true if the event changed input state.
    pub fn process_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                if event.repeat {
                    return false;
                }
                let PhysicalKey::Code(keycode) = event.physical_key else {
                    return false;
                };
                match Self::keycode_to_button(keycode) {
                    Some(button) => {
                        self.set_button(button, event.state == ElementState::Pressed);
                        true
                    }
                    None => false,
                }
            }
            WindowEvent::MouseInput { state, button, .. } => {
                match Self::mouse_button_to_button(*button) {
                    Some(btn) => {
                        self.set_button(btn, *state == ElementState::Pressed);
                        true
                    }
                    None => false,
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor_moved(position.x as f32, position.y as f32);
                true
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_SCROLL_LINE,
                };
                self.scroll(lines);
                true
            }
            WindowEvent::Focused(false) | WindowEvent::CursorLeft { .. } => {
                self.release_all();
                self.reset_pointer();
                true
            }
            _ => false,
        }
    }

    /// Record a press or release
    pub fn set_button(&mut self, button: Button, pressed: bool) {
        if pressed {
            if self.pressed_keys.insert(button) {
                self.pressed_vec.push(button);
            }
        } else if self.pressed_keys.remove(&button) {
            self.pressed_vec.retain(|&b| b != button);
        }
    }

    /// Record a cursor sample. The first sample after construction or
    /// [`reset_pointer`](Self::reset_pointer) only seeds the history.
    pub fn cursor_moved(&mut self, x: f32, y: f32) {
        let position = Vec2::new(x, y);
        if let (Some(last), false) = (self.last_cursor, self.relative) {
            self.pointer_delta += position - last;
        }
        self.last_cursor = Some(position);
    }

    /// Record raw device motion. Only counted in relative mode, where a grabbed
    /// cursor no longer reports useful positions.
    pub fn raw_motion(&mut self, dx: f32, dy: f32) {
        if self.relative {
            self.pointer_delta += Vec2::new(dx, dy);
        }
    }

    /// Switch between cursor-position deltas and raw device motion
    pub fn set_relative(&mut self, relative: bool) {
        if self.relative != relative {
            self.relative = relative;
            self.reset_pointer();
        }
    }

    /// Record wheel movement in lines
    pub fn scroll(&mut self, lines: f32) {
        self.scroll_delta += lines;
    }

    /// Forget the cursor history so the next sample does not produce a jump
    pub fn reset_pointer(&mut self) {
        self.last_cursor = None;
        self.pointer_delta = Vec2::ZERO;
    }

    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
        self.pressed_vec.clear();
    }

    /// Snapshot the current frame and clear the per-frame deltas
    pub fn take_frame(&mut self) -> FrameInput {
        let frame = FrameInput {
            held: self.pressed_vec.clone(),
            pointer_delta: self.pointer_delta,
            scroll_delta: self.scroll_delta,
        };
        self.pointer_delta = Vec2::ZERO;
        self.scroll_delta = 0.0;
        frame
    }

    pub fn last_cursor(&self) -> Option<Vec2> {
        self.last_cursor
    }

    pub fn pointer_delta(&self) -> Vec2 {
        self.pointer_delta
    }

    pub fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }

    /// Map winit KeyCode to Button
    fn keycode_to_button(keycode: KeyCode) -> Option<Button> {
        match keycode {
            KeyCode::KeyW => Some(Button::KeyW),
            KeyCode::KeyA => Some(Button::KeyA),
            KeyCode::KeyS => Some(Button::KeyS),
            KeyCode::KeyD => Some(Button::KeyD),
            KeyCode::Escape => Some(Button::Escape),
            _ => None,
        }
    }

    /// Map winit MouseButton to Button
    fn mouse_button_to_button(button: MouseButton) -> Option<Button> {
        match button {
            MouseButton::Left => Some(Button::MouseLeft),
            _ => None,
        }
    }
}

impl Controller for InputSession {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn get_down_keys(&self) -> &[Button] {
        &self.pressed_vec
    }
}
