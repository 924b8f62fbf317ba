//! Cohen-Sutherland line clipping.
//!
//! # References
//!
//! - Newman, W. M., & Sproull, R. F. (1979). *Principles of Interactive
//!   Computer Graphics*, 2nd ed. McGraw-Hill.

use super::outcode::Outcode;
use crate::geometry::{ClipWindow, Line, Point};

/// Upper bound on re-intersection passes before a line is given up on.
///
/// Exact arithmetic needs at most four; the slack absorbs float rounding that
/// can nudge an intersection a ulp past a neighbouring edge.
const MAX_PASSES: usize = 16;

/// Clip `line` against `window` with the Cohen-Sutherland algorithm.
///
/// Returns `None` when no part of the line lies inside the window, or when
/// an endpoint is NaN or infinite.
///
/// Each pass moves one outside endpoint (the start if it is outside, else the
/// end) onto a single window edge, chosen by fixed priority
/// LEFT > RIGHT > BOTTOM > TOP even when several outcode bits are set. A
/// corner point is therefore pulled onto the left or right edge first and
/// re-examined on the next pass.
///
/// # Example
///
/// ```
/// use trueno_raster::clip::cohen_sutherland;
/// use trueno_raster::geometry::{ClipWindow, Line, Point};
///
/// let window = ClipWindow::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0)).unwrap();
/// let clipped = cohen_sutherland(Line::from_coords(-5.0, 5.0, 15.0, 5.0), &window).unwrap();
/// assert_eq!(clipped, Line::from_coords(0.0, 5.0, 10.0, 5.0));
/// ```
#[must_use]
pub fn cohen_sutherland(line: Line, window: &ClipWindow) -> Option<Line> {
    if !line.is_finite() {
        return None;
    }

    let mut start = line.start;
    let mut end = line.end;

    for _ in 0..MAX_PASSES {
        let start_code = Outcode::of(start, window);
        let end_code = Outcode::of(end, window);

        if start_code.is_inside() && end_code.is_inside() {
            return Some(Line::new(window.clamp(start), window.clamp(end)));
        }
        if start_code.shares_side(end_code) {
            return None;
        }

        let clip_start = !start_code.is_inside();
        let code = if clip_start { start_code } else { end_code };

        let Some(hit) = edge_intersection(start, end, code, window) else {
            tracing::trace!(?line, ?code, "edge intersection undefined; rejecting");
            return None;
        };

        if clip_start {
            start = hit;
        } else {
            end = hit;
        }
    }

    tracing::trace!(?line, passes = MAX_PASSES, "clip did not converge; rejecting");
    None
}

/// Intersection of the segment `start -> end` with the highest-priority
/// window edge named in `code`.
///
/// `None` when the segment runs parallel to that edge or `code` is empty.
fn edge_intersection(start: Point, end: Point, code: Outcode, window: &ClipWindow) -> Option<Point> {
    let (min, max) = (window.min(), window.max());
    let dx = end.x - start.x;
    let dy = end.y - start.y;

    let at_x = |x: f32| (dx != 0.0).then(|| Point::new(x, start.y + dy * (x - start.x) / dx));
    let at_y = |y: f32| (dy != 0.0).then(|| Point::new(start.x + dx * (y - start.y) / dy, y));

    if code.contains(Outcode::LEFT) {
        at_x(min.x)
    } else if code.contains(Outcode::RIGHT) {
        at_x(max.x)
    } else if code.contains(Outcode::BOTTOM) {
        at_y(min.y)
    } else if code.contains(Outcode::TOP) {
        at_y(max.y)
    } else {
        None
    }
}
