//! # Trueno-Raster
//!
//! Computational-geometry core for 2D drawing tools: rasterization of lines
//! and circles into pixel sequences, and clipping of line segments against a
//! rectangular window.
//!
//! ## Features
//!
//! - **Line rasterization**: DDA and Bresenham
//! - **Circle rasterization**: midpoint algorithm with eight-way symmetry
//! - **Line clipping**: Cohen-Sutherland and Liang-Barsky
//! - **Scenes**: ordered, colored primitives clipped and rendered together
//! - **Output**: RGBA framebuffer and PNG export
//!
//! ## Quick Start
//!
//! ```rust
//! use trueno_raster::prelude::*;
//!
//! let window = ClipWindow::from_corners(Point::new(10.0, 10.0), Point::new(0.0, 0.0))?;
//! let scene = Scene::new()
//!     .with(Line::from_coords(-5.0, 5.0, 15.0, 5.0))
//!     .with(Circle::with_radius(Point::new(5.0, 5.0), 3.0));
//!
//! let clipped = scene.clip(&window, ClipAlgorithm::LiangBarsky);
//! let fb = clipped.render(&RenderConfig::new().dimensions(16, 16))?;
//! assert_eq!(fb.width(), 16);
//! # Ok::<(), trueno_raster::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for configuration and color types
//! - `config`: YAML configuration loading
//!
//! ## References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Liang, Y.-D., & Barsky, B. A. (1984). "A new concept and method for line clipping."

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
// Allow unwrap() in tests only
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Geometric primitives (points, lines, circles, clip windows).
pub mod geometry;

/// Rasterization of lines and circles.
pub mod render;

/// Line clipping against a rectangular window.
pub mod clip;

/// Colored primitive collections.
pub mod scene;

// ============================================================================
// Canvas & Output
// ============================================================================

/// Color type carried by primitives.
pub mod color;

/// RGBA framebuffer for plotting pixel sequences.
pub mod framebuffer;

/// Output encoders (PNG).
pub mod output;

/// Render configuration.
pub mod config;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for trueno-raster operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use trueno_raster::prelude::*;
/// ```
pub mod prelude {
    pub use crate::clip::{clip_line, ClipAlgorithm};
    pub use crate::color::Rgba;
    pub use crate::config::RenderConfig;
    pub use crate::error::{Error, Result};
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Circle, ClipWindow, Line, Point};
    pub use crate::output::PngEncoder;
    pub use crate::render::{rasterize_circle, rasterize_line, Drawable, LineAlgorithm};
    pub use crate::scene::{clip_all, Primitive, Scene};
}
