//! Reducer for the carousel controller.

use crate::mvi::Reducer;

use super::intent::CarouselIntent;
use super::state::{CarouselState, Direction};

/// Reducer for carousel state transitions.
///
/// Pure function. Timer re-arming and subscriber notification are handled
/// by the controller around the dispatch call.
///
/// Direction is set by the invoking intent: Next is always Forward and Prev
/// always Backward, even across the wrap edge. Only GoTo derives direction
/// from a linear comparison of indices.
pub struct CarouselReducer;

impl Reducer for CarouselReducer {
    type State = CarouselState;
    type Intent = CarouselIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let n = state.slide_count;
        if n == 0 {
            return state;
        }

        match intent {
            CarouselIntent::Next => CarouselState {
                current_index: (state.current_index + 1) % n,
                direction: Direction::Forward,
                ..state
            },
            CarouselIntent::Prev => CarouselState {
                current_index: (state.current_index + n - 1) % n,
                direction: Direction::Backward,
                ..state
            },
            CarouselIntent::GoTo { index } if index < n => {
                let direction = match index.cmp(&state.current_index) {
                    std::cmp::Ordering::Greater => Direction::Forward,
                    std::cmp::Ordering::Less => Direction::Backward,
                    std::cmp::Ordering::Equal => Direction::None,
                };
                CarouselState {
                    current_index: index,
                    direction,
                    ..state
                }
            }
            CarouselIntent::GoTo { .. } => state,
            CarouselIntent::Pause => CarouselState {
                is_autoplaying: false,
                ..state
            },
            CarouselIntent::Resume => CarouselState {
                is_autoplaying: true,
                ..state
            },
        }
    }
}
