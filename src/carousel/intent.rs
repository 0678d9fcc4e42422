//! Intents for the carousel controller.

use crate::mvi::Intent;

/// Intents that can be dispatched to the carousel reducer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselIntent {
    /// Advance one slide, wrapping past the last.
    /// Sent by arrow buttons, left drags and autoplay ticks.
    Next,

    /// Step back one slide, wrapping before the first.
    Prev,

    /// Jump to a specific slide (dot navigation, plan selector).
    /// Out-of-range targets are rejected before dispatch.
    GoTo { index: usize },

    /// Stop autoplay without moving (hover, drag start).
    Pause,

    /// Restart autoplay without moving.
    Resume,
}

impl Intent for CarouselIntent {}

impl CarouselIntent {
    /// True for intents that move the slide position.
    pub fn is_navigation(&self) -> bool {
        matches!(self, Self::Next | Self::Prev | Self::GoTo { .. })
    }
}
