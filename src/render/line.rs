//! Line rasterization: DDA and Bresenham.
//!
//! Both functions return the ordered pixel path from `start` towards `end`.
//! Neither allocates anything beyond the returned vector.

use crate::geometry::{Line, Point};

/// Longest path either line rasterizer emits, in steps along the major axis.
///
/// Longer spans are cut short after this many steps from `start`; every
/// emitted point still lies on the full line.
pub const MAX_LINE_STEPS: usize = 1 << 20;

/// Line rasterization algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum LineAlgorithm {
    /// Digital differential analyzer (real-valued accumulation).
    #[default]
    Dda,
    /// Bresenham integer error accumulation.
    Bresenham,
}

impl LineAlgorithm {
    /// Rasterize `line` with this algorithm.
    #[must_use]
    pub fn rasterize(self, line: &Line) -> Vec<Point> {
        rasterize_line(line, self)
    }
}

/// Rasterize a line with the chosen algorithm.
#[must_use]
pub fn rasterize_line(line: &Line, algorithm: LineAlgorithm) -> Vec<Point> {
    match algorithm {
        LineAlgorithm::Dda => dda(line.start, line.end),
        LineAlgorithm::Bresenham => bresenham(line.start, line.end),
    }
}

/// Rasterize a line with the digital differential analyzer.
///
/// `steps = round(max(|dx|, |dy|))`. The first point is `start`; each of the
/// following `steps + 1` points adds `(dx, dy) / steps` to the previous one,
/// so the sequence reaches `end` at index `steps` and then takes one further
/// increment past it. Output length is `steps + 2`.
///
/// Points are not snapped to the pixel grid. When `steps` is zero, including
/// segments shorter than half a pixel, the output is `[start]`.
///
/// # Example
///
/// ```
/// use trueno_raster::geometry::Point;
/// use trueno_raster::render::dda;
///
/// let pixels = dda(Point::new(0.0, 0.0), Point::new(3.0, 0.0));
/// assert_eq!(pixels.len(), 5);
/// assert_eq!(pixels[3], Point::new(3.0, 0.0));
/// ```
#[must_use]
pub fn dda(start: Point, end: Point) -> Vec<Point> {
    let dx = end.x - start.x;
    let dy = end.y - start.y;
    if !(dx.is_finite() && dy.is_finite()) {
        return vec![start];
    }

    let steps = dx.abs().max(dy.abs()).round();
    if steps < 1.0 {
        return vec![start];
    }

    let x_inc = dx / steps;
    let y_inc = dy / steps;
    let count = if steps > MAX_LINE_STEPS as f32 {
        tracing::trace!(steps, limit = MAX_LINE_STEPS, "dda span truncated");
        MAX_LINE_STEPS
    } else {
        steps as usize
    };

    let mut pixels = Vec::with_capacity(count + 2);
    pixels.push(start);

    let (mut x, mut y) = (start.x, start.y);
    for _ in 0..=count {
        x += x_inc;
        y += y_inc;
        pixels.push(Point::new(x, y));
    }

    pixels
}

/// Rasterize a line with Bresenham's algorithm.
///
/// Endpoints are truncated toward zero before stepping. The path steps one
/// pixel along the dominant axis per iteration and includes both endpoints,
/// so its length is `max(|dx|, |dy|) + 1` for the truncated deltas. Spans
/// longer than [`MAX_LINE_STEPS`] stop after that many steps.
///
/// # Example
///
/// ```
/// use trueno_raster::geometry::Point;
/// use trueno_raster::render::bresenham;
///
/// let pixels = bresenham(Point::new(0.0, 0.0), Point::new(5.0, 2.0));
/// assert_eq!(pixels.len(), 6);
/// assert_eq!(pixels[5], Point::new(5.0, 2.0));
/// ```
#[must_use]
pub fn bresenham(start: Point, end: Point) -> Vec<Point> {
    let (x0, y0) = (i64::from(start.x as i32), i64::from(start.y as i32));
    let (x1, y1) = (i64::from(end.x as i32), i64::from(end.y as i32));

    let sx = if x1 >= x0 { 1 } else { -1 };
    let sy = if y1 >= y0 { 1 } else { -1 };
    let dx = (x1 - x0).abs();
    let dy = (y1 - y0).abs();

    // Ties go to the y-major branch; both branches produce the diagonal.
    let (major, minor) = if dy < dx { (dx, dy) } else { (dy, dx) };
    let x_major = dy < dx;

    let steps = major.min(MAX_LINE_STEPS as i64);
    if steps < major {
        tracing::trace!(major, limit = MAX_LINE_STEPS, "bresenham span truncated");
    }

    let mut pixels = Vec::with_capacity(steps as usize + 1);
    let (mut x, mut y) = (x0, y0);
    pixels.push(grid_point(x, y));

    let mut err = 2 * minor - major;
    let straight = 2 * minor;
    let diagonal = 2 * (minor - major);

    for _ in 0..steps {
        if x_major {
            x += sx;
        } else {
            y += sy;
        }

        if err < 0 {
            err += straight;
        } else {
            if x_major {
                y += sy;
            } else {
                x += sx;
            }
            err += diagonal;
        }

        pixels.push(grid_point(x, y));
    }

    pixels
}

#[inline]
fn grid_point(x: i64, y: i64) -> Point {
    Point::new(x as f32, y as f32)
}
