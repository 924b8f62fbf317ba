//! Geometric primitives for rasterization and clipping.
//!
//! All types are plain `Copy` values. Operations that trim or sample a shape
//! return fresh values and never write through to the caller's copy.

use crate::error::{Error, Result};

/// A 2D point with floating-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    /// X coordinate.
    pub x: f32,
    /// Y coordinate.
    pub y: f32,
}

impl Point {
    /// Origin point (0, 0).
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Create a point, rejecting NaN or infinite coordinates.
    pub fn checked(x: f32, y: f32) -> Result<Self> {
        if x.is_finite() && y.is_finite() {
            Ok(Self::new(x, y))
        } else {
            Err(Error::NonFiniteCoordinate { x, y })
        }
    }

    /// Whether both coordinates are finite.
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Calculate the distance to another point.
    #[must_use]
    pub fn distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation between two points.
    #[must_use]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Nearest integer pixel coordinates.
    #[must_use]
    pub fn to_pixel(self) -> (i32, i32) {
        (self.x.round() as i32, self.y.round() as i32)
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x as f32, y as f32)
    }
}

/// A line segment between two points.
///
/// `start` and `end` may coincide; such a line rasterizes to one point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    /// Start point.
    pub start: Point,
    /// End point.
    pub end: Point,
}

impl Line {
    /// Create a new line segment.
    #[must_use]
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Create a line from coordinates.
    #[must_use]
    pub const fn from_coords(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Create a line, rejecting non-finite endpoints.
    pub fn checked(start: Point, end: Point) -> Result<Self> {
        for p in [start, end] {
            if !p.is_finite() {
                return Err(Error::NonFiniteCoordinate { x: p.x, y: p.y });
            }
        }
        Ok(Self::new(start, end))
    }

    /// Whether both endpoints are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.start.is_finite() && self.end.is_finite()
    }

    /// Get the length of the line.
    #[must_use]
    pub fn length(&self) -> f32 {
        self.start.distance(self.end)
    }

    /// Whether both endpoints are the same point.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Offset from start to end as `(dx, dy)`.
    #[must_use]
    pub fn delta(&self) -> (f32, f32) {
        (self.end.x - self.start.x, self.end.y - self.start.y)
    }

    /// Point at parameter `u` along the segment (`0` is start, `1` is end).
    #[must_use]
    pub fn point_at(&self, u: f32) -> Point {
        self.start.lerp(self.end, u)
    }
}

/// A circle given by its center and a point on its circumference.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    /// Center point.
    pub center: Point,
    /// Any point on the circumference.
    pub rim: Point,
}

impl Circle {
    /// Create a circle through `rim` around `center`.
    #[must_use]
    pub const fn new(center: Point, rim: Point) -> Self {
        Self { center, rim }
    }

    /// Create a circle from a center and a radius.
    ///
    /// Negative radii are treated as their magnitude.
    #[must_use]
    pub fn with_radius(center: Point, radius: f32) -> Self {
        Self::new(center, Point::new(center.x + radius.abs(), center.y))
    }

    /// Euclidean distance from the center to the rim point.
    #[must_use]
    pub fn radius(&self) -> f32 {
        self.center.distance(self.rim)
    }
}

/// Axis-aligned clip rectangle with `min <= max` on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipWindow {
    min: Point,
    max: Point,
}

impl ClipWindow {
    /// Create a window from its minimum and maximum corners.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidClipWindow`] if `min` exceeds `max` on either
    /// axis, and [`Error::NonFiniteCoordinate`] for NaN or infinite bounds.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_raster::geometry::{ClipWindow, Point};
    ///
    /// let window = ClipWindow::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0)).unwrap();
    /// assert_eq!(window.width(), 10.0);
    /// assert!(ClipWindow::new(Point::new(5.0, 0.0), Point::new(1.0, 10.0)).is_err());
    /// ```
    pub fn new(min: Point, max: Point) -> Result<Self> {
        for p in [min, max] {
            if !p.is_finite() {
                return Err(Error::NonFiniteCoordinate { x: p.x, y: p.y });
            }
        }
        if min.x > max.x || min.y > max.y {
            return Err(Error::InvalidClipWindow {
                min_x: min.x,
                min_y: min.y,
                max_x: max.x,
                max_y: max.y,
            });
        }
        Ok(Self { min, max })
    }

    /// Create a window from any two opposite corners of a dragged rectangle.
    pub fn from_corners(a: Point, b: Point) -> Result<Self> {
        Self::new(
            Point::new(a.x.min(b.x), a.y.min(b.y)),
            Point::new(a.x.max(b.x), a.y.max(b.y)),
        )
    }

    /// Minimum corner.
    #[must_use]
    pub const fn min(&self) -> Point {
        self.min
    }

    /// Maximum corner.
    #[must_use]
    pub const fn max(&self) -> Point {
        self.max
    }

    /// Width of the window.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    /// Height of the window.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Center point of the window.
    #[must_use]
    pub fn center(&self) -> Point {
        self.min.lerp(self.max, 0.5)
    }

    /// Check if a point is inside the window (bounds inclusive).
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Clamp a point onto the window.
    #[must_use]
    pub fn clamp(&self, point: Point) -> Point {
        Point::new(
            point.x.clamp(self.min.x, self.max.x),
            point.y.clamp(self.min.y, self.max.y),
        )
    }
}
