//! Render configuration.
//!
//! Collects the choices a drawing front end offers: canvas size, background,
//! and which line and clipping algorithms to use. With the `config` feature
//! the same settings load from YAML; missing keys fall back to defaults.

use crate::clip::ClipAlgorithm;
use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::render::LineAlgorithm;

/// Canvas and algorithm settings used when rendering a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct RenderConfig {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Color the canvas is cleared to.
    pub background: Rgba,
    /// Algorithm used to rasterize lines.
    pub line_algorithm: LineAlgorithm,
    /// Algorithm used to clip lines.
    pub clip_algorithm: ClipAlgorithm,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: Rgba::BLACK,
            line_algorithm: LineAlgorithm::Dda,
            clip_algorithm: ClipAlgorithm::CohenSutherland,
        }
    }
}

impl RenderConfig {
    /// Creates a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set canvas dimensions.
    #[must_use]
    pub fn dimensions(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the background color.
    #[must_use]
    pub fn background(mut self, color: Rgba) -> Self {
        self.background = color;
        self
    }

    /// Set the line rasterization algorithm.
    #[must_use]
    pub fn line_algorithm(mut self, algorithm: LineAlgorithm) -> Self {
        self.line_algorithm = algorithm;
        self
    }

    /// Set the line clipping algorithm.
    #[must_use]
    pub fn clip_algorithm(mut self, algorithm: ClipAlgorithm) -> Self {
        self.clip_algorithm = algorithm;
        self
    }

    /// Check that the configuration describes a drawable canvas.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Parses configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] (including the line number) if parsing fails,
    /// or a validation error for a zero-sized canvas.
    #[cfg(feature = "config")]
    #[cfg_attr(docsrs, doc(cfg(feature = "config")))]
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self =
            serde_yaml_ng::from_str(content).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    #[cfg(feature = "config")]
    #[cfg_attr(docsrs, doc(cfg(feature = "config")))]
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Loads configuration, falling back to defaults on any error.
    #[cfg(feature = "config")]
    #[cfg_attr(docsrs, doc(cfg(feature = "config")))]
    #[must_use]
    pub fn load_or_default(path: impl AsRef<std::path::Path>) -> Self {
        Self::load(path).unwrap_or_default()
    }
}
