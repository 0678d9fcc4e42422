//! Slide-in animation driven by the carousel's `Direction`.

use crate::carousel::Direction;
use std::time::{Duration, Instant};

/// easeOutCubic
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideTransition {
    direction: Direction,
    started_at: Instant,
    duration: Duration,
}

impl SlideTransition {
    pub fn new(direction: Direction, started_at: Instant, duration: Duration) -> Self {
        Self {
            direction,
            started_at,
            duration,
        }
    }

    /// Linear progress in `0.0..=1.0`.
    pub fn progress(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Offset of the entering slide in columns.
    ///
    /// Forward enters from the right (positive), Backward from the left
    /// (negative); both ease to zero.
    pub fn offset(&self, width: u16, now: Instant) -> i32 {
        let remaining = 1.0 - ease_out_cubic(self.progress(now));
        let distance = (width as f32 * remaining).round() as i32;
        match self.direction {
            Direction::Forward => distance,
            Direction::Backward => -distance,
            Direction::None => 0,
        }
    }
}
