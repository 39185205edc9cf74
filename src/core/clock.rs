use std::time::Instant;

/// Frame metadata - carries frame number and timing info
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    pub number: u64,
    /// Seconds since the clock started
    pub time: f32,
    /// Seconds since the previous tick
    pub delta: f32,
}

impl FrameInfo {
    pub fn new(number: u64, time: f32, delta: f32) -> Self {
        Self { number, time, delta }
    }
}

/// Frame clock - the time source for velocity-scaled camera movement
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
    frame_number: u64,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
            frame_number: 0,
        }
    }

    /// Advance the clock and describe the frame that starts now
    pub fn tick(&mut self) -> FrameInfo {
        let now = Instant::now();
        let info = FrameInfo::new(
            self.frame_number,
            now.duration_since(self.start).as_secs_f32(),
            now.duration_since(self.last_tick).as_secs_f32(),
        );
        self.last_tick = now;
        self.frame_number += 1;
        info
    }

    /// Restart delta measurement without touching the frame count,
    /// e.g. after the window was hidden for a while
    pub fn reset(&mut self) {
        self.last_tick = Instant::now();
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
