use thiserror::Error;

/// Errors surfaced by the carousel controller.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CarouselError {
    #[error("A carousel needs at least one slide")]
    NoSlides,

    #[error("Slide index {index} is out of range for {len} slides")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Invalid carousel config: {message}")]
    InvalidConfig { message: String },
}
