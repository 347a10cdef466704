use std::time::Instant;

/// Frame clock - hands out the seconds elapsed between redraws
/// Camera movement scales by this so speed is frame-rate independent
#[derive(Debug)]
pub struct Clock {
    last_tick: Instant,
    frames: u64,
}

impl Clock {
    /// Create new clock starting now
    pub fn new() -> Self {
        Self::starting_at(Instant::now())
    }

    pub fn starting_at(start: Instant) -> Self {
        Self {
            last_tick: start,
            frames: 0,
        }
    }

    /// Get delta time since last tick and advance clock
    /// Returns delta in seconds
    pub fn tick(&mut self) -> f32 {
        self.tick_at(Instant::now())
    }

    /// Advance to `now`. An instant earlier than the last tick counts as zero.
    pub fn tick_at(&mut self, now: Instant) -> f32 {
        let delta = now.saturating_duration_since(self.last_tick).as_secs_f32();
        self.last_tick = self.last_tick.max(now);
        self.frames += 1;
        delta
    }

    /// Number of ticks taken so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
