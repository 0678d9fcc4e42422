//! Carousel controller feature module.
//!
//! One configurable state machine covers both flavours of slider: the
//! autoplaying hero and the manual testimonial/plan selectors.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Slide position and autoplay mode
//! - `intent.rs` - Next, Prev, GoTo, Pause, Resume
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `controller.rs` - Side effects around dispatch: timer, drag, subscribers
//! - `timer.rs` - Single-pending-timer autoplay scheduling
//! - `drag.rs` - Drag release to navigation mapping

pub mod config;
pub mod controller;
pub mod drag;
pub mod intent;
pub mod reducer;
pub mod state;
pub mod timer;

pub use config::CarouselConfig;
pub use controller::{Carousel, Snapshot, SubscriptionId};
pub use drag::{DragOutcome, DragRelease};
pub use intent::CarouselIntent;
pub use reducer::CarouselReducer;
pub use state::{CarouselState, Direction};
pub use timer::{AutoplayTimer, TimerDriver, TimerToken, TokioTimerDriver};
