//! Rasterization properties for lines and circles.
//!
//! Run: cargo test --test rasterization_properties

#![allow(clippy::unwrap_used, missing_docs)]

use approx::assert_relative_eq;
use proptest::prelude::*;
use trueno_raster::prelude::*;
use trueno_raster::render::{bresenham, dda, midpoint_circle};

fn pixels(points: &[Point]) -> Vec<(i32, i32)> {
    points.iter().map(|p| p.to_pixel()).collect()
}

#[test]
fn degenerate_line_is_single_point_for_both_algorithms() {
    let p = Point::new(7.0, -3.0);
    assert_eq!(dda(p, p), vec![p]);
    assert_eq!(bresenham(p, p), vec![p]);
}

#[test]
fn dda_overshoots_by_one_increment() {
    let points = dda(Point::new(1.0, 1.0), Point::new(6.0, 3.0));
    assert_eq!(points.len(), 7);
    let last = points[points.len() - 1];
    assert_relative_eq!(last.x, 7.0, epsilon = 1e-5);
    assert_relative_eq!(last.y, 3.4, epsilon = 1e-5);
}

#[test]
fn bresenham_gentle_slope_sequence() {
    let points = bresenham(Point::new(0.0, 0.0), Point::new(5.0, 2.0));
    assert_eq!(
        pixels(&points),
        vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]
    );
}

#[test]
fn circle_radius_five_cardinal_points() {
    let points = pixels(&midpoint_circle(Point::new(0.0, 0.0), 5.0));
    for cardinal in [(5, 0), (-5, 0), (0, 5), (0, -5)] {
        assert!(points.contains(&cardinal), "missing {cardinal:?}");
    }
    assert_eq!(points.len() % 8, 0);
}

#[test]
fn rendered_scene_matches_pixel_sequence() {
    let scene = Scene::new()
        .with(Primitive::line(Line::from_coords(1.0, 1.0, 12.0, 4.0)).with_color(Rgba::RED))
        .with(Primitive::circle(Circle::with_radius(Point::new(8.0, 8.0), 4.0)).with_color(Rgba::GREEN));
    let config = RenderConfig::new()
        .dimensions(20, 20)
        .line_algorithm(LineAlgorithm::Bresenham);

    let fb = scene.render(&config).unwrap();

    for (point, color) in scene.pixels(LineAlgorithm::Bresenham) {
        let (x, y) = point.to_pixel();
        let drawn = fb.get_pixel(x as u32, y as u32).unwrap();
        // Later primitives overwrite earlier ones where they overlap.
        assert!(drawn == color || drawn == Rgba::GREEN, "pixel ({x}, {y})");
    }
}

// ============================================================================
// Property-based tests
// ============================================================================

fn int_coord() -> impl Strategy<Value = i32> {
    -200..200
}

proptest! {
    /// Bresenham emits exactly one pixel per major-axis step, endpoints inclusive.
    #[test]
    fn prop_bresenham_count(x0 in int_coord(), y0 in int_coord(), x1 in int_coord(), y1 in int_coord()) {
        let points = bresenham(Point::new(x0 as f32, y0 as f32), Point::new(x1 as f32, y1 as f32));
        let expected = 1 + (x1 - x0).abs().max((y1 - y0).abs()) as usize;
        prop_assert_eq!(points.len(), expected);
        prop_assert_eq!(points[0].to_pixel(), (x0, y0));
        prop_assert_eq!(points[points.len() - 1].to_pixel(), (x1, y1));
    }

    /// Consecutive Bresenham pixels are 8-connected.
    #[test]
    fn prop_bresenham_connected(x0 in int_coord(), y0 in int_coord(), x1 in int_coord(), y1 in int_coord()) {
        let points = pixels(&bresenham(Point::new(x0 as f32, y0 as f32), Point::new(x1 as f32, y1 as f32)));
        for pair in points.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            prop_assert!((a.0 - b.0).abs() <= 1 && (a.1 - b.1).abs() <= 1, "{:?} -> {:?}", a, b);
            prop_assert_ne!(a, b);
        }
    }

    /// DDA emits steps + 2 points for non-degenerate integer lines.
    #[test]
    fn prop_dda_length(x0 in int_coord(), y0 in int_coord(), x1 in int_coord(), y1 in int_coord()) {
        let steps = (x1 - x0).abs().max((y1 - y0).abs()) as usize;
        let points = dda(Point::new(x0 as f32, y0 as f32), Point::new(x1 as f32, y1 as f32));
        if steps == 0 {
            prop_assert_eq!(points.len(), 1);
        } else {
            prop_assert_eq!(points.len(), steps + 2);
        }
    }

    /// On axis-aligned and diagonal lines DDA and Bresenham agree up to the endpoint.
    #[test]
    fn prop_dda_matches_bresenham_on_octant_axes(
        x0 in int_coord(),
        y0 in int_coord(),
        len in 1_i32..100,
        dir in 0_usize..8,
    ) {
        const DIRS: [(i32, i32); 8] = [(1, 0), (-1, 0), (0, 1), (0, -1), (1, 1), (-1, -1), (1, -1), (-1, 1)];
        let (sx, sy) = DIRS[dir];
        let start = Point::new(x0 as f32, y0 as f32);
        let end = Point::new((x0 + sx * len) as f32, (y0 + sy * len) as f32);

        let ideal = pixels(&bresenham(start, end));
        let stepped = pixels(&dda(start, end));
        prop_assert_eq!(&stepped[..ideal.len()], &ideal[..]);
    }

    /// Every circle pixel lies within one pixel of the true radius.
    #[test]
    fn prop_circle_within_radius(cx in -50_i32..50, cy in -50_i32..50, r in 1_i32..100) {
        let center = Point::new(cx as f32, cy as f32);
        let radius = r as f32;
        let points = midpoint_circle(center, radius);
        prop_assert_eq!(points.len() % 8, 0);
        for p in points {
            prop_assert!((p.distance(center) - radius).abs() <= 1.0, "{:?} at r={}", p, radius);
        }
    }

    /// The circle pixel set is symmetric about both axes through the center.
    #[test]
    fn prop_circle_symmetric(cx in -50_i32..50, cy in -50_i32..50, r in 0_i32..60) {
        let points = pixels(&midpoint_circle(Point::new(cx as f32, cy as f32), r as f32));
        for &(x, y) in &points {
            let (dx, dy) = (x - cx, y - cy);
            prop_assert!(points.contains(&(cx - dx, cy + dy)));
            prop_assert!(points.contains(&(cx + dx, cy - dy)));
            prop_assert!(points.contains(&(cx + dy, cy + dx)));
        }
    }
}
