//! Drawable capability for geometric shapes.

use super::circle::rasterize_circle;
use super::line::{rasterize_line, LineAlgorithm};
use crate::color::Rgba;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Circle, Line, Point};

/// Trait for shapes that can be turned into a pixel sequence.
pub trait Drawable {
    /// Rasterize this shape.
    ///
    /// `algorithm` selects the line stepping for line-based shapes; shapes
    /// with a single rasterizer ignore it.
    fn pixels(&self, algorithm: LineAlgorithm) -> Vec<Point>;

    /// Plot this shape into a framebuffer, returning how many pixels landed
    /// on the canvas.
    fn draw(&self, fb: &mut Framebuffer, color: Rgba, algorithm: LineAlgorithm) -> usize {
        fb.plot_all(&self.pixels(algorithm), color)
    }
}

impl Drawable for Line {
    fn pixels(&self, algorithm: LineAlgorithm) -> Vec<Point> {
        rasterize_line(self, algorithm)
    }
}

impl Drawable for Circle {
    fn pixels(&self, _algorithm: LineAlgorithm) -> Vec<Point> {
        rasterize_circle(self)
    }
}

impl Drawable for Point {
    fn pixels(&self, _algorithm: LineAlgorithm) -> Vec<Point> {
        vec![*self]
    }
}
