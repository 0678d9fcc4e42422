//! Carousel controller for the estate showcase, plus a terminal front end
//! that renders the hero slider, testimonials and floor-plan selector.

pub mod carousel;
pub mod config;
pub mod content;
pub mod error;
pub mod logging;
pub mod mvi;
pub mod ui;

pub use carousel::{Carousel, CarouselConfig, Direction};
pub use error::CarouselError;
