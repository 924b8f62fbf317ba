//! Midpoint (Bresenham) circle rasterization.

use crate::geometry::{Circle, Point};

/// Rasterize a circle outline.
#[must_use]
pub fn rasterize_circle(circle: &Circle) -> Vec<Point> {
    midpoint_circle(circle.center, circle.radius())
}

/// Rasterize a circle outline with the midpoint algorithm.
///
/// The radius is rounded to the nearest integer first, so offsets from the
/// center are integral while the center itself may be fractional. One octant
/// is stepped (`x` from 0 while `x < y`) and every step emits its eight
/// mirror images in the order
/// `(x, y) (-x, y) (x, -y) (-x, -y) (y, x) (-y, x) (y, -x) (-y, -x)`.
/// Mirror images that coincide (on the axes or the diagonals) are emitted
/// more than once.
///
/// A radius that rounds to zero yields just the center.
///
/// # Example
///
/// ```
/// use trueno_raster::geometry::Point;
/// use trueno_raster::render::midpoint_circle;
///
/// let pixels = midpoint_circle(Point::new(10.0, 10.0), 5.0);
/// assert!(pixels.contains(&Point::new(15.0, 10.0)));
/// assert!(pixels.contains(&Point::new(10.0, 5.0)));
/// ```
#[must_use]
pub fn midpoint_circle(center: Point, radius: f32) -> Vec<Point> {
    let r = i64::from(radius.abs().round() as i32);
    if r == 0 {
        return vec![center];
    }

    let mut pixels = Vec::with_capacity(8 * (r as usize + 1));
    let (mut x, mut y) = (0_i64, r);
    let mut p = 3 - 2 * r;

    plot_octants(&mut pixels, center, x, y);

    while x < y {
        if p < 0 {
            p += 4 * x + 6;
        } else {
            p += 4 * (x - y) + 10;
            y -= 1;
        }
        x += 1;
        plot_octants(&mut pixels, center, x, y);
    }

    pixels
}

fn plot_octants(pixels: &mut Vec<Point>, center: Point, x: i64, y: i64) {
    let (x, y) = (x as f32, y as f32);
    let (cx, cy) = (center.x, center.y);
    pixels.extend_from_slice(&[
        Point::new(cx + x, cy + y),
        Point::new(cx - x, cy + y),
        Point::new(cx + x, cy - y),
        Point::new(cx - x, cy - y),
        Point::new(cx + y, cy + x),
        Point::new(cx - y, cy + x),
        Point::new(cx + y, cy - x),
        Point::new(cx - y, cy - x),
    ]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn pixel_set(points: &[Point]) -> HashSet<(i32, i32)> {
        points.iter().map(|p| p.to_pixel()).collect()
    }

    #[test]
    fn test_circle_cardinal_points() {
        let pixels = midpoint_circle(Point::ORIGIN, 10.0);
        let set = pixel_set(&pixels);
        for p in [(10, 0), (-10, 0), (0, 10), (0, -10)] {
            assert!(set.contains(&p), "missing {p:?}");
        }
    }

    #[test]
    fn test_circle_emits_in_groups_of_eight() {
        let pixels = midpoint_circle(Point::new(3.0, 4.0), 7.0);
        assert_eq!(pixels.len() % 8, 0);
    }

    #[test]
    fn test_circle_radius_one() {
        // x=0,y=1 then one step to x=1,y=1 (p = 1 >= 0 decrements y to 0).
        let pixels = midpoint_circle(Point::ORIGIN, 1.0);
        assert_eq!(pixels.len(), 16);
        let set = pixel_set(&pixels);
        assert!(set.contains(&(1, 0)));
        assert!(set.contains(&(0, -1)));
    }

    #[test]
    fn test_circle_keeps_duplicates_on_axes() {
        let pixels = midpoint_circle(Point::ORIGIN, 5.0);
        let top = pixels.iter().filter(|p| **p == Point::new(0.0, 5.0)).count();
        // (x, y) and (-x, y) coincide when x == 0.
        assert_eq!(top, 2);
    }

    #[test]
    fn test_circle_points_near_radius() {
        let center = Point::new(50.0, 40.0);
        for r in [1.0_f32, 2.0, 5.0, 13.0, 40.0] {
            for p in midpoint_circle(center, r) {
                let d = p.distance(center);
                assert!((d.round() - r).abs() <= 1.0, "r={r} point {p:?} dist {d}");
            }
        }
    }

    #[test]
    fn test_circle_symmetry() {
        let pixels = midpoint_circle(Point::ORIGIN, 9.0);
        let set = pixel_set(&pixels);
        for &(x, y) in &set {
            assert!(set.contains(&(-x, y)));
            assert!(set.contains(&(x, -y)));
            assert!(set.contains(&(y, x)));
        }
    }

    #[test]
    fn test_circle_radius_rounds() {
        let a = pixel_set(&midpoint_circle(Point::ORIGIN, 4.6));
        let b = pixel_set(&midpoint_circle(Point::ORIGIN, 5.0));
        assert_eq!(a, b);
    }

    #[test]
    fn test_circle_zero_radius() {
        let center = Point::new(2.5, 7.0);
        assert_eq!(midpoint_circle(center, 0.0), vec![center]);
        assert_eq!(midpoint_circle(center, 0.4), vec![center]);
    }

    #[test]
    fn test_rasterize_circle_uses_rim_distance() {
        let circle = Circle::new(Point::ORIGIN, Point::new(3.0, 4.0));
        let set = pixel_set(&rasterize_circle(&circle));
        assert!(set.contains(&(5, 0)));
        assert!(set.contains(&(0, -5)));
    }
}
