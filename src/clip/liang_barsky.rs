//! Liang-Barsky parametric line clipping.
//!
//! The segment is written as `start + u * (end - start)` for `u` in `[0, 1]`
//! and each window edge narrows that interval.
//!
//! # References
//!
//! - Liang, Y.-D., & Barsky, B. A. (1984). "A new concept and method for line
//!   clipping." *ACM Transactions on Graphics*, 3(1), 1-22.

use crate::geometry::{ClipWindow, Line};

/// Visible parameter range `[u1, u2]` of a segment.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ParametricInterval {
    u1: f32,
    u2: f32,
}

impl ParametricInterval {
    const FULL: Self = Self { u1: 0.0, u2: 1.0 };

    /// Narrow the interval against one edge.
    ///
    /// `p` is the direction component towards the edge's outside and `q` the
    /// signed distance from the segment start to the edge. Returns `false`
    /// when the interval becomes empty.
    fn clip_test(&mut self, p: f32, q: f32) -> bool {
        if p < 0.0 {
            let r = q / p;
            if r > self.u2 {
                return false;
            }
            if r > self.u1 {
                self.u1 = r;
            }
        } else if p > 0.0 {
            let r = q / p;
            if r < self.u1 {
                return false;
            }
            if r < self.u2 {
                self.u2 = r;
            }
        } else if q < 0.0 {
            // Parallel to this edge and on its outside.
            return false;
        }
        true
    }
}

/// Clip `line` against `window` with the Liang-Barsky algorithm.
///
/// Returns `None` when no part of the line lies inside the window, or when
/// an endpoint is NaN or infinite. Edges are
/// tested left, right, bottom, top. Both clipped endpoints are recomputed
/// from the original start point and direction.
///
/// # Example
///
/// ```
/// use trueno_raster::clip::liang_barsky;
/// use trueno_raster::geometry::{ClipWindow, Line, Point};
///
/// let window = ClipWindow::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0)).unwrap();
/// let clipped = liang_barsky(Line::from_coords(-5.0, 5.0, 15.0, 5.0), &window).unwrap();
/// assert_eq!(clipped, Line::from_coords(0.0, 5.0, 10.0, 5.0));
/// assert!(liang_barsky(Line::from_coords(-5.0, -5.0, -1.0, -1.0), &window).is_none());
/// ```
#[must_use]
pub fn liang_barsky(line: Line, window: &ClipWindow) -> Option<Line> {
    if !line.is_finite() {
        return None;
    }

    let (min, max) = (window.min(), window.max());
    let (dx, dy) = line.delta();
    let start = line.start;

    let edges = [
        (-dx, start.x - min.x),
        (dx, max.x - start.x),
        (-dy, start.y - min.y),
        (dy, max.y - start.y),
    ];

    let mut interval = ParametricInterval::FULL;
    if !edges.iter().all(|&(p, q)| interval.clip_test(p, q)) {
        return None;
    }

    let clipped_start = if interval.u1 > 0.0 {
        line.point_at(interval.u1)
    } else {
        line.start
    };
    let clipped_end = if interval.u2 < 1.0 {
        line.point_at(interval.u2)
    } else {
        line.end
    };

    Some(Line::new(window.clamp(clipped_start), window.clamp(clipped_end)))
}
