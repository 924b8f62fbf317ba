//! RGBA canvas that rasterized pixel sequences are plotted into.
//!
//! Rows are padded to a 64-byte stride. Coordinates grow right and down from
//! the top-left pixel, matching the drawing canvas.

use crate::color::Rgba;
use crate::error::{Error, Result};
use crate::geometry::Point;

/// Row alignment in bytes.
const ROW_ALIGNMENT: usize = 64;

/// Row-major RGBA pixel buffer.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    width: u32,
    height: u32,
    /// `height` rows of `stride` bytes; the first `4 * width` of each are pixels.
    pixels: Vec<u8>,
    stride: usize,
}

impl Framebuffer {
    /// Allocate a canvas cleared to transparent black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either side is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use trueno_raster::framebuffer::Framebuffer;
    ///
    /// let fb = Framebuffer::new(800, 600).unwrap();
    /// assert_eq!(fb.width(), 800);
    /// assert_eq!(fb.height(), 600);
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let stride = (width as usize * 4).next_multiple_of(ROW_ALIGNMENT);
        Ok(Self {
            width,
            height,
            pixels: vec![0; stride * height as usize],
            stride,
        })
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Unpadded RGBA bytes of row `y`.
    #[must_use]
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        (y < self.height).then(|| {
            let start = y as usize * self.stride;
            &self.pixels[start..start + self.row_bytes()]
        })
    }

    /// Clear the framebuffer to a solid color.
    pub fn clear(&mut self, color: Rgba) {
        let rgba = color.to_array();
        let row_bytes = self.row_bytes();
        for row in self.pixels.chunks_exact_mut(self.stride) {
            for pixel in row[..row_bytes].chunks_exact_mut(4) {
                pixel.copy_from_slice(&rgba);
            }
        }
    }

    /// Color at a pixel, or `None` off the canvas.
    #[must_use]
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        let idx = self.offset(x, y)?;
        let mut rgba = [0; 4];
        rgba.copy_from_slice(&self.pixels[idx..idx + 4]);
        Some(Rgba::from_array(rgba))
    }

    /// Overwrite a pixel. Coordinates off the canvas are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if let Some(idx) = self.offset(x, y) {
            self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
        }
    }

    /// Plot a rasterized point at its nearest pixel.
    ///
    /// Returns `false` when the point falls outside the canvas.
    pub fn plot(&mut self, point: Point, color: Rgba) -> bool {
        let (x, y) = point.to_pixel();
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return false;
        };
        let Some(idx) = self.offset(x, y) else {
            return false;
        };
        self.pixels[idx..idx + 4].copy_from_slice(&color.to_array());
        true
    }

    /// Plot every point of a pixel sequence, returning how many landed on the canvas.
    pub fn plot_all(&mut self, points: &[Point], color: Rgba) -> usize {
        points.iter().filter(|&&p| self.plot(p, color)).count()
    }

    /// Count pixels exactly matching `color`.
    #[must_use]
    pub fn count_color(&self, color: Rgba) -> usize {
        let target = color.to_array();
        (0..self.height)
            .filter_map(|y| self.row(y))
            .flat_map(|row| row.chunks_exact(4))
            .filter(|chunk| *chunk == target)
            .count()
    }

    /// Byte offset of a pixel, or `None` off the canvas.
    #[inline]
    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.stride + x as usize * 4)
    }

    #[inline]
    fn row_bytes(&self) -> usize {
        self.width as usize * 4
    }

    /// Pixel data with the row padding removed, as PNG expects.
    #[must_use]
    pub fn to_compact_pixels(&self) -> Vec<u8> {
        (0..self.height)
            .filter_map(|y| self.row(y))
            .flatten()
            .copied()
            .collect()
    }
}
