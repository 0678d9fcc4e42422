//! Model-View-Intent (MVI) primitives.
//!
//! Every carousel mutation flows through one path:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ Subscribers (view)
//!    ↑                                  │
//!    └──────────────────────────────────┘
//! ```
//!
//! - **State**: plain value describing what the view shows
//! - **Intent**: user actions (clicks, drags) or system events (timer ticks)
//! - **Reducer**: pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
