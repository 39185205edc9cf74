use serde::{Deserialize, Serialize};

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Escape,
    MouseLeft,
}

impl Button {
    pub const ALL: [Button; 6] = [
        Button::KeyW,
        Button::KeyA,
        Button::KeyS,
        Button::KeyD,
        Button::Escape,
        Button::MouseLeft,
    ];
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons, in press order
    fn get_down_keys(&self) -> &[Button];
}
