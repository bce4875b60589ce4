//! Fixed-timestep clock.
//!
//! `draw_web()` runs at the display refresh rate with a variable delta.
//! `GameTime` turns `performance.now()` readings into whole ticks so toast
//! and flash timers count the same on every device.

/// Game ticks per real-time second.
pub const TICKS_PER_SEC: u32 = 10;

/// Longest gap fed into the accumulator; a tab coming back from the
/// background does not burn through every timer at once.
const MAX_FRAME_MS: f64 = 500.0;

pub struct GameTime {
    ms_per_tick: f64,
    /// Milliseconds not yet consumed as ticks
    accumulator: f64,
    /// `None` until the first frame
    last_timestamp: Option<f64>,
}

impl GameTime {
    pub fn new(ticks_per_sec: u32) -> Self {
        Self {
            ms_per_tick: 1000.0 / ticks_per_sec as f64,
            accumulator: 0.0,
            last_timestamp: None,
        }
    }

    /// Feed a wall-clock timestamp in milliseconds; returns the number of
    /// ticks that elapsed since the previous call.
    pub fn update(&mut self, now_ms: f64) -> u32 {
        let delta = match self.last_timestamp {
            Some(prev) => (now_ms - prev).clamp(0.0, MAX_FRAME_MS),
            None => 0.0,
        };
        self.last_timestamp = Some(now_ms);

        self.accumulator += delta;
        let ticks = (self.accumulator / self.ms_per_tick) as u32;
        self.accumulator -= ticks as f64 * self.ms_per_tick;
        ticks
    }
}
