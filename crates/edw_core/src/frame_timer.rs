// crates/edw_core/src/frame_timer.rs

use std::time::Instant;

/// Measures wall-clock time between frames.
pub struct FrameTimer {
    last_frame_time: Instant,
    max_delta: f32,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self {
            last_frame_time: Instant::now(),
            max_delta: 0.25,
        }
    }

    /// Restart measuring from now, so the first frame doesn't include setup time.
    pub fn reset(&mut self) {
        self.last_frame_time = Instant::now();
    }

    /// Update the frame timer and return the clamped frame delta in seconds.
    /// Clamps to 0.25s to avoid giant spikes when dragging the window,
    /// hitting breakpoints, etc.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        self.tick_at(now)
    }

    fn tick_at(&mut self, now: Instant) -> f32 {
        let frame_dt = now
            .saturating_duration_since(self.last_frame_time)
            .as_secs_f32();
        self.last_frame_time = now;

        frame_dt.min(self.max_delta)
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn tick_reports_elapsed_seconds() {
        let mut timer = FrameTimer::new();
        let start = timer.last_frame_time;
        let dt = timer.tick_at(start + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-4);
    }

    #[test]
    fn tick_clamps_long_stalls() {
        let mut timer = FrameTimer::new();
        let start = timer.last_frame_time;
        assert_eq!(timer.tick_at(start + Duration::from_secs(3)), 0.25);
    }

    #[test]
    fn tick_never_goes_negative() {
        let mut timer = FrameTimer::new();
        let start = timer.last_frame_time;
        timer.tick_at(start + Duration::from_millis(10));
        assert_eq!(timer.tick_at(start), 0.0);
    }
}
