use thiserror::Error;

/// Errors surfaced by the simulation core.
/// All of them are structural and reported synchronously; nothing is retried.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum LifeError {
    /// Grid creation with a zero width or height
    #[error("grid dimensions must be positive, got {width}x{height}")]
    InvalidDimension { width: usize, height: usize },

    /// Blueprint does not fit; the grid has already been cleared
    #[error("not enough room for {pattern}: needs {min_width}x{min_height}, grid is {width}x{height}")]
    InsufficientSpace {
        pattern: &'static str,
        min_width: usize,
        min_height: usize,
        width: usize,
        height: usize,
    },

    /// Step interval that is zero, negative or not finite
    #[error("step interval must be a positive number of seconds, got {0}")]
    InvalidInterval(f32),
}
