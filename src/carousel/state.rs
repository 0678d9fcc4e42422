//! State for the carousel controller.

use crate::mvi::UiState;

/// Which way the most recent transition moved.
///
/// Consumed by the rendering layer to pick enter/exit animations. It never
/// feeds back into index arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Forward,
    Backward,
    #[default]
    None,
}

/// Slide position plus autoplay mode.
///
/// The two halves are independent: `current_index` moves only through
/// Next/Prev/GoTo, `is_autoplaying` only through Pause/Resume.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselState {
    /// Always in `0..slide_count`.
    pub current_index: usize,
    /// Fixed for the lifetime of the controller, at least 1.
    pub slide_count: usize,
    pub direction: Direction,
    pub is_autoplaying: bool,
}

impl Default for CarouselState {
    fn default() -> Self {
        Self {
            current_index: 0,
            slide_count: 1,
            direction: Direction::None,
            is_autoplaying: false,
        }
    }
}

impl UiState for CarouselState {}

impl CarouselState {
    pub fn new(slide_count: usize, initial_index: usize, autoplay: bool) -> Self {
        Self {
            current_index: initial_index,
            slide_count,
            direction: Direction::None,
            is_autoplaying: autoplay,
        }
    }

    /// True when `index` addresses an existing slide.
    pub fn contains(&self, index: usize) -> bool {
        index < self.slide_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_single_slide_at_rest() {
        let state = CarouselState::default();
        assert_eq!(state.current_index, 0);
        assert_eq!(state.slide_count, 1);
        assert_eq!(state.direction, Direction::None);
        assert!(!state.is_autoplaying);
    }

    #[test]
    fn new_starts_without_direction() {
        let state = CarouselState::new(4, 2, true);
        assert_eq!(state.current_index, 2);
        assert_eq!(state.direction, Direction::None);
        assert!(state.is_autoplaying);
    }

    #[test]
    fn contains_check() {
        let state = CarouselState::new(3, 0, false);
        assert!(state.contains(0));
        assert!(state.contains(2));
        assert!(!state.contains(3));
    }
}
