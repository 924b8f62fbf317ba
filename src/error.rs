//! Error types for trueno-raster operations.
//!
//! Degenerate geometry and lines outside a clip window are not errors: the
//! former rasterize to a single point, the latter clip to `None`.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in trueno-raster operations.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (file operations, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Invalid dimensions for a framebuffer.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Clip window whose minimum corner exceeds its maximum corner on some axis.
    #[error("Invalid clip window: min ({min_x}, {min_y}) exceeds max ({max_x}, {max_y})")]
    InvalidClipWindow {
        /// Minimum x bound.
        min_x: f32,
        /// Minimum y bound.
        min_y: f32,
        /// Maximum x bound.
        max_x: f32,
        /// Maximum y bound.
        max_y: f32,
    },

    /// A coordinate was NaN or infinite.
    #[error("Non-finite coordinate: ({x}, {y})")]
    NonFiniteCoordinate {
        /// X value.
        x: f32,
        /// Y value.
        y: f32,
    },

    /// Configuration parsing or validation error.
    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidDimensions {
            width: 0,
            height: 100,
        };
        assert!(err.to_string().contains("Invalid dimensions"));
    }

    #[test]
    fn test_invalid_clip_window_display() {
        let err = Error::InvalidClipWindow {
            min_x: 10.0,
            min_y: 0.0,
            max_x: 5.0,
            max_y: 8.0,
        };
        let msg = err.to_string();
        assert!(msg.contains("(10, 0)"));
        assert!(msg.contains("(5, 8)"));
    }

    #[test]
    fn test_non_finite_display() {
        let err = Error::NonFiniteCoordinate { x: f32::NAN, y: 1.0 };
        assert!(err.to_string().contains("NaN"));
    }
}
