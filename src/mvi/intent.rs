//! Base trait for intents (user/system actions).

/// Marker trait for intent objects.
///
/// Intents represent:
/// - User actions (arrow keys, dot clicks, drag releases)
/// - System events (autoplay ticks)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
