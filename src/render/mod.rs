//! Rasterization of lines and circles into pixel sequences.
//!
//! # Algorithms
//!
//! - **DDA**: real-valued incremental line stepping
//! - **Bresenham's Line**: integer error-accumulation line stepping
//! - **Midpoint Circle**: one-octant stepping with eight-way symmetry
//!
//! # References
//!
//! - Bresenham, J. E. (1965). "Algorithm for computer control of a digital plotter."
//! - Bresenham, J. E. (1977). "A linear algorithm for incremental digital display of circular arcs."

mod circle;
mod line;
mod primitives;

pub use circle::{midpoint_circle, rasterize_circle};
pub use line::{bresenham, dda, rasterize_line, LineAlgorithm, MAX_LINE_STEPS};
pub use primitives::Drawable;
