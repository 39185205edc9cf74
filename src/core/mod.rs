pub mod clock;
pub mod controller;
pub mod input;
pub mod viewport;

pub use clock::{Clock, FrameInfo};
pub use controller::{Button, Controller};
pub use input::{FrameInput, InputSession};
pub use viewport::Viewport;
