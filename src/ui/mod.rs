//! Terminal showcase: the rendering layer for the carousels.

pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod screen;
pub mod theme;
pub mod transition;

pub use app::{App, Section};
pub use runtime::run;
