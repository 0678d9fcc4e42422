//! Drag-to-navigate gesture mapping.

/// Default minimum horizontal displacement for a drag to navigate.
pub const DEFAULT_DRAG_THRESHOLD: f32 = 50.0;

/// Pointer state at the end of a horizontal drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragRelease {
    /// Horizontal displacement from the drag start. Negative is leftwards.
    pub offset_x: f32,
    /// Horizontal velocity at release, in units per second.
    pub velocity_x: f32,
}

impl DragRelease {
    pub fn new(offset_x: f32, velocity_x: f32) -> Self {
        Self {
            offset_x,
            velocity_x,
        }
    }
}

/// What a released drag asks the carousel to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Dragged left past the threshold.
    Next,
    /// Dragged right past the threshold.
    Prev,
    /// Too short: the view springs back to the current slide.
    SnapBack,
}

/// Map a drag release onto a navigation.
///
/// Only the offset decides; the threshold is exclusive. A NaN offset never
/// clears the threshold and snaps back.
pub fn resolve(release: DragRelease, threshold: f32) -> DragOutcome {
    if release.offset_x.abs() > threshold {
        if release.offset_x < 0.0 {
            DragOutcome::Next
        } else {
            DragOutcome::Prev
        }
    } else {
        DragOutcome::SnapBack
    }
}
