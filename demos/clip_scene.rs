//! Build a small scene, clip it against a window and save both versions as PNG.
//!
//! Run: cargo run --example clip_scene -- [output-dir]

use std::path::PathBuf;

use trueno_raster::prelude::*;

fn main() -> Result<()> {
    let out_dir = std::env::args()
        .nth(1)
        .map_or_else(std::env::temp_dir, PathBuf::from);

    let scene = Scene::new()
        .with(Line::from_coords(-40.0, 120.0, 340.0, 120.0))
        .with(Primitive::line(Line::from_coords(20.0, 10.0, 290.0, 230.0)).with_color(Rgba::YELLOW))
        .with(Primitive::line(Line::from_coords(250.0, -30.0, 30.0, 270.0)).with_color(Rgba::PINK))
        .with(Primitive::line(Line::from_coords(0.0, 0.0, 40.0, 30.0)).with_color(Rgba::RED))
        .with(Primitive::circle(Circle::with_radius(Point::new(150.0, 120.0), 70.0)).with_color(Rgba::GREEN));

    // A selection dragged from bottom-right to top-left.
    let window = ClipWindow::from_corners(Point::new(240.0, 200.0), Point::new(60.0, 40.0))?;

    let config = RenderConfig::new()
        .dimensions(300, 240)
        .line_algorithm(LineAlgorithm::Bresenham)
        .clip_algorithm(ClipAlgorithm::LiangBarsky);

    let original = scene.render(&config)?;
    let clipped_scene = scene.clip(&window, config.clip_algorithm);
    let mut clipped = clipped_scene.render(&config)?;

    // Outline the window so the result is easy to read.
    let (min, max) = (window.min(), window.max());
    for edge in [
        Line::new(min, Point::new(max.x, min.y)),
        Line::new(Point::new(max.x, min.y), max),
        Line::new(max, Point::new(min.x, max.y)),
        Line::new(Point::new(min.x, max.y), min),
    ] {
        edge.draw(&mut clipped, Rgba::WHITE, LineAlgorithm::Bresenham);
    }

    println!(
        "{} primitives, {} after clipping against {:?}..{:?}",
        scene.len(),
        clipped_scene.len(),
        min,
        max
    );

    let before = out_dir.join("clip_scene_before.png");
    let after = out_dir.join("clip_scene_after.png");
    PngEncoder::write_to_file(&original, &before)?;
    PngEncoder::write_to_file(&clipped, &after)?;

    println!("wrote {}", before.display());
    println!("wrote {}", after.display());
    Ok(())
}
