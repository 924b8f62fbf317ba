//! Collections of colored primitives: clipping and rendering.
//!
//! A [`Scene`] is the ordered list of shapes on the canvas. Clipping a scene
//! trims every line against a window, drops lines that fall outside it, and
//! passes other shapes through untouched.

use crate::clip::{clip_line, ClipAlgorithm};
use crate::color::Rgba;
use crate::config::RenderConfig;
use crate::error::Result;
use crate::framebuffer::Framebuffer;
use crate::geometry::{Circle, ClipWindow, Line, Point};
use crate::render::{Drawable, LineAlgorithm};

/// A drawable shape together with its color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive {
    /// A line segment.
    Line {
        /// Geometry.
        line: Line,
        /// Display color.
        color: Rgba,
    },
    /// A circle outline.
    Circle {
        /// Geometry.
        circle: Circle,
        /// Display color.
        color: Rgba,
    },
}

impl Primitive {
    /// A line in the default color.
    #[must_use]
    pub const fn line(line: Line) -> Self {
        Self::Line {
            line,
            color: Rgba::PURPLE,
        }
    }

    /// A circle in the default color.
    #[must_use]
    pub const fn circle(circle: Circle) -> Self {
        Self::Circle {
            circle,
            color: Rgba::PURPLE,
        }
    }

    /// Replace the color.
    #[must_use]
    pub const fn with_color(self, color: Rgba) -> Self {
        match self {
            Self::Line { line, .. } => Self::Line { line, color },
            Self::Circle { circle, .. } => Self::Circle { circle, color },
        }
    }

    /// Display color.
    #[must_use]
    pub const fn color(&self) -> Rgba {
        match self {
            Self::Line { color, .. } | Self::Circle { color, .. } => *color,
        }
    }

    /// The line geometry, if this is a line.
    #[must_use]
    pub const fn as_line(&self) -> Option<&Line> {
        match self {
            Self::Line { line, .. } => Some(line),
            Self::Circle { .. } => None,
        }
    }

    /// Clip against `window`.
    ///
    /// Lines are trimmed, keeping their color, and yield `None` when entirely
    /// outside. Other shapes are returned unchanged.
    #[must_use]
    pub fn clip(&self, window: &ClipWindow, algorithm: ClipAlgorithm) -> Option<Self> {
        match *self {
            Self::Line { line, color } => {
                clip_line(line, window, algorithm).map(|line| Self::Line { line, color })
            }
            Self::Circle { .. } => Some(*self),
        }
    }
}

impl Drawable for Primitive {
    fn pixels(&self, algorithm: LineAlgorithm) -> Vec<Point> {
        match self {
            Self::Line { line, .. } => line.pixels(algorithm),
            Self::Circle { circle, .. } => circle.pixels(algorithm),
        }
    }
}

impl From<Line> for Primitive {
    fn from(line: Line) -> Self {
        Self::line(line)
    }
}

impl From<Circle> for Primitive {
    fn from(circle: Circle) -> Self {
        Self::circle(circle)
    }
}

/// Clip every primitive against `window`.
///
/// Rejected lines are omitted; surviving primitives keep their relative
/// order.
///
/// # Example
///
/// ```
/// use trueno_raster::clip::ClipAlgorithm;
/// use trueno_raster::geometry::{Circle, ClipWindow, Line, Point};
/// use trueno_raster::scene::{clip_all, Primitive};
///
/// let window = ClipWindow::new(Point::new(0.0, 0.0), Point::new(10.0, 10.0)).unwrap();
/// let shapes = [
///     Primitive::line(Line::from_coords(-5.0, -5.0, -1.0, -1.0)),
///     Primitive::circle(Circle::with_radius(Point::new(20.0, 20.0), 3.0)),
/// ];
/// let clipped = clip_all(&shapes, &window, ClipAlgorithm::LiangBarsky);
/// assert_eq!(clipped, vec![shapes[1]]);
/// ```
#[must_use]
pub fn clip_all(primitives: &[Primitive], window: &ClipWindow, algorithm: ClipAlgorithm) -> Vec<Primitive> {
    let clipped: Vec<Primitive> = primitives
        .iter()
        .filter_map(|primitive| primitive.clip(window, algorithm))
        .collect();

    tracing::debug!(
        ?algorithm,
        input = primitives.len(),
        kept = clipped.len(),
        dropped = primitives.len() - clipped.len(),
        "clipped primitives"
    );

    clipped
}

/// Ordered collection of primitives drawn on a canvas.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    primitives: Vec<Primitive>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a primitive (builder style).
    #[must_use]
    pub fn with(mut self, primitive: impl Into<Primitive>) -> Self {
        self.push(primitive);
        self
    }

    /// Add a primitive.
    pub fn push(&mut self, primitive: impl Into<Primitive>) {
        self.primitives.push(primitive.into());
    }

    /// Primitives in drawing order.
    #[must_use]
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Number of primitives.
    #[must_use]
    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    /// Whether the scene has no primitives.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    /// Remove every primitive.
    pub fn clear(&mut self) {
        self.primitives.clear();
    }

    /// A new scene with every primitive clipped against `window`.
    #[must_use]
    pub fn clip(&self, window: &ClipWindow, algorithm: ClipAlgorithm) -> Self {
        Self {
            primitives: clip_all(&self.primitives, window, algorithm),
        }
    }

    /// Rasterize every primitive, pairing each pixel with its color.
    #[must_use]
    pub fn pixels(&self, algorithm: LineAlgorithm) -> Vec<(Point, Rgba)> {
        self.primitives
            .iter()
            .flat_map(|primitive| {
                let color = primitive.color();
                primitive.pixels(algorithm).into_iter().map(move |p| (p, color))
            })
            .collect()
    }

    /// Render onto a fresh framebuffer described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn render(&self, config: &RenderConfig) -> Result<Framebuffer> {
        config.validate()?;

        let mut fb = Framebuffer::new(config.width, config.height)?;
        fb.clear(config.background);

        let plotted: usize = self
            .primitives
            .iter()
            .map(|primitive| primitive.draw(&mut fb, primitive.color(), config.line_algorithm))
            .sum();

        tracing::debug!(
            primitives = self.len(),
            plotted,
            width = config.width,
            height = config.height,
            "rendered scene"
        );

        Ok(fb)
    }

    /// Clip against `window` with the configured algorithm, then render.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn render_clipped(&self, window: &ClipWindow, config: &RenderConfig) -> Result<Framebuffer> {
        self.clip(window, config.clip_algorithm).render(config)
    }
}

impl FromIterator<Primitive> for Scene {
    fn from_iter<I: IntoIterator<Item = Primitive>>(iter: I) -> Self {
        Self {
            primitives: iter.into_iter().collect(),
        }
    }
}

impl Extend<Primitive> for Scene {
    fn extend<I: IntoIterator<Item = Primitive>>(&mut self, iter: I) {
        self.primitives.extend(iter);
    }
}
