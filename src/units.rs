//! Physical print sizes and pixel-density conversion.
//!
//! The layout core is unit-agnostic; this module supplies the pixel values
//! callers feed it, converted from physical inches at a chosen density.

use crate::grid::Size;

/// Dots per inch.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Dpi(pub f64);

impl Dpi {
    /// CSS reference density, used for on-screen preview.
    pub const SCREEN: Self = Self(96.0);
    /// Common photo-print density.
    pub const PRINT: Self = Self(300.0);

    /// Convert a length in inches to pixels at this density.
    #[inline]
    pub fn pixels(self, inches: f64) -> f64 {
        inches * self.0
    }
}

/// A physical size in inches.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PhysicalSize {
    pub width_in: f64,
    pub height_in: f64,
}

impl PhysicalSize {
    /// 6×4 inch photo sheet, landscape.
    pub const SHEET_6X4: Self = Self::new(6.0, 4.0);
    /// 7×5 inch photo sheet, landscape.
    pub const SHEET_7X5: Self = Self::new(7.0, 5.0);
    /// A4 sheet, portrait.
    pub const SHEET_A4: Self = Self::new(8.27, 11.69);

    /// Create a physical size.
    pub const fn new(width_in: f64, height_in: f64) -> Self {
        Self {
            width_in,
            height_in,
        }
    }

    /// Pixel dimensions at the given density.
    pub fn to_pixels(self, dpi: Dpi) -> Size {
        Size::new(dpi.pixels(self.width_in), dpi.pixels(self.height_in))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn screen_and_print_densities() {
        assert!(close(Dpi::SCREEN.pixels(1.0), 96.0));
        assert!(close(Dpi::PRINT.pixels(1.0), 300.0));
        assert!(close(Dpi::SCREEN.pixels(0.6), 57.6));
    }

    #[test]
    fn sheet_6x4_at_screen_density() {
        let px = PhysicalSize::SHEET_6X4.to_pixels(Dpi::SCREEN);
        assert!(close(px.width, 576.0));
        assert!(close(px.height, 384.0));
    }

    #[test]
    fn sheet_6x4_at_print_density() {
        let px = PhysicalSize::SHEET_6X4.to_pixels(Dpi::PRINT);
        assert!(close(px.width, 1800.0));
        assert!(close(px.height, 1200.0));
    }

    #[test]
    fn wallet_print_at_screen_density() {
        let px = PhysicalSize::new(0.6, 1.0).to_pixels(Dpi::SCREEN);
        assert!(close(px.width, 57.6));
        assert!(close(px.height, 96.0));
    }
}
