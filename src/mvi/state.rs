//! Base trait for view state.

/// Marker trait for state objects.
///
/// States should be:
/// - Cheap to clone (the controller keeps the previous value to diff)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq decides whether subscribers are notified)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
