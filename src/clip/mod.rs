//! Line clipping against an axis-aligned window.
//!
//! Both algorithms take the line by value and return a new [`Line`]; the
//! caller's copy is never modified. `None` means the line lies entirely
//! outside the window, which is distinct from a zero-length line inside it.
//! Lines with a NaN or infinite endpoint are never visible.
//!
//! # Algorithms
//!
//! - **Cohen-Sutherland**: outcode classification with iterative edge intersection
//! - **Liang-Barsky**: parametric interval intersection

mod cohen_sutherland;
mod liang_barsky;
mod outcode;

pub use cohen_sutherland::cohen_sutherland;
pub use liang_barsky::liang_barsky;
pub use outcode::Outcode;

use crate::geometry::{ClipWindow, Line};

/// Line clipping algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum ClipAlgorithm {
    /// Cohen-Sutherland region-code clipping.
    #[default]
    CohenSutherland,
    /// Liang-Barsky parametric clipping.
    LiangBarsky,
}

impl ClipAlgorithm {
    /// Clip `line` against `window` with this algorithm.
    #[must_use]
    pub fn clip(self, line: Line, window: &ClipWindow) -> Option<Line> {
        clip_line(line, window, self)
    }
}

/// Clip a line with the chosen algorithm.
#[must_use]
pub fn clip_line(line: Line, window: &ClipWindow, algorithm: ClipAlgorithm) -> Option<Line> {
    let clipped = match algorithm {
        ClipAlgorithm::CohenSutherland => cohen_sutherland(line, window),
        ClipAlgorithm::LiangBarsky => liang_barsky(line, window),
    };

    if clipped.is_none() {
        tracing::trace!(?algorithm, ?line, "line outside clip window");
    }

    clipped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    const ALGORITHMS: [ClipAlgorithm; 2] = [ClipAlgorithm::CohenSutherland, ClipAlgorithm::LiangBarsky];

    fn window() -> ClipWindow {
        ClipWindow::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0)).unwrap()
    }

    #[test]
    fn test_horizontal_scenario_both_algorithms() {
        let line = Line::from_coords(-5.0, 5.0, 15.0, 5.0);
        for algorithm in ALGORITHMS {
            let clipped = algorithm.clip(line, &window()).unwrap();
            assert_eq!(clipped.start, Point::new(0.0, 5.0), "{algorithm:?}");
            assert_eq!(clipped.end, Point::new(10.0, 5.0), "{algorithm:?}");
        }
    }

    #[test]
    fn test_diagonal_reject_both_algorithms() {
        let line = Line::from_coords(-5.0, -5.0, -1.0, -1.0);
        for algorithm in ALGORITHMS {
            assert_eq!(clip_line(line, &window(), algorithm), None, "{algorithm:?}");
        }
    }

    #[test]
    fn test_clip_is_idempotent() {
        let line = Line::from_coords(-3.0, 1.0, 14.0, 8.0);
        for algorithm in ALGORITHMS {
            let once = algorithm.clip(line, &window()).unwrap();
            let twice = algorithm.clip(once, &window()).unwrap();
            assert_eq!(once, twice, "{algorithm:?}");
        }
    }

    #[test]
    fn test_non_finite_lines_rejected() {
        let lines = [
            Line::from_coords(f32::NAN, 5.0, 5.0, 5.0),
            Line::from_coords(2.0, 2.0, 8.0, f32::NAN),
            Line::from_coords(f32::NEG_INFINITY, 5.0, 5.0, 5.0),
        ];
        for line in lines {
            assert!(!line.is_finite());
            for algorithm in ALGORITHMS {
                assert_eq!(clip_line(line, &window(), algorithm), None, "{algorithm:?} {line:?}");
            }
        }
    }

    #[test]
    fn test_default_algorithm() {
        assert_eq!(ClipAlgorithm::default(), ClipAlgorithm::CohenSutherland);
    }
}
