//! Color type used as the display attribute of drawable primitives.
//!
//! The rasterizers and clippers never read colors; they only travel with a
//! primitive until it is plotted into a [`Framebuffer`](crate::framebuffer::Framebuffer).

/// RGBA color with 8-bit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Rgba {
    /// Red component (0-255).
    pub r: u8,
    /// Green component (0-255).
    pub g: u8,
    /// Blue component (0-255).
    pub b: u8,
    /// Alpha component (0-255, 255 = fully opaque).
    #[cfg_attr(feature = "serde", serde(default = "opaque"))]
    pub a: u8,
}

#[cfg(feature = "serde")]
fn opaque() -> u8 {
    255
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0, 255);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0, 255);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0, 255);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255, 255);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::new(255, 255, 0, 255);
    /// Opaque purple, the default line color.
    pub const PURPLE: Self = Self::new(128, 0, 128, 255);
    /// Opaque pink, used for selection outlines.
    pub const PINK: Self = Self::new(255, 192, 203, 255);

    /// Create a new RGBA color.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color (alpha = 255).
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Convert to array representation.
    #[must_use]
    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Create from array representation.
    #[must_use]
    pub const fn from_array(arr: [u8; 4]) -> Self {
        Self::new(arr[0], arr[1], arr[2], arr[3])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_constants() {
        assert_eq!(Rgba::BLACK.to_array(), [0, 0, 0, 255]);
        assert_eq!(Rgba::WHITE.to_array(), [255, 255, 255, 255]);
        assert_eq!(Rgba::PURPLE, Rgba::rgb(128, 0, 128));
    }

    #[test]
    fn test_rgba_to_array_from_array() {
        let c = Rgba::new(10, 20, 30, 40);
        assert_eq!(Rgba::from_array(c.to_array()), c);
    }
}
