//! Crop-region geometry for the source photo.
//!
//! The interactive selection UI and the pixel copy live elsewhere. This
//! module turns a selected region — absolute pixels or fractions of the
//! source — into a clamped raster rectangle a decoder or renderer can
//! execute.

#[cfg(not(feature = "std"))]
use num_traits::Float as _;

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    /// Create a new rect.
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Clamp to fit within a `source_w` × `source_h` raster.
    /// Width and height are kept at least 1.
    pub fn clamp_to(self, source_w: u32, source_h: u32) -> Self {
        let x = self.x.min(source_w.saturating_sub(1));
        let y = self.y.min(source_h.saturating_sub(1));
        Self {
            x,
            y,
            width: self.width.min(source_w.saturating_sub(x)).max(1),
            height: self.height.min(source_h.saturating_sub(y)).max(1),
        }
    }

    /// Whether this rect covers the whole source (no actual crop).
    pub fn covers(&self, source_w: u32, source_h: u32) -> bool {
        self.x == 0 && self.y == 0 && self.width == source_w && self.height == source_h
    }
}

/// A crop selection over the source photo.
///
/// Pixel regions come straight from the selection UI; fractional regions
/// survive a source being re-decoded at a different resolution.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum CropRegion {
    /// Absolute pixel coordinates.
    Pixels(Rect),
    /// Fractions of the source dimensions, all in `0.0..=1.0`.
    Fraction {
        x: f32,
        y: f32,
        width: f32,
        height: f32,
    },
}

impl CropRegion {
    /// Create a pixel-based crop region.
    pub const fn pixels(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self::Pixels(Rect::new(x, y, width, height))
    }

    /// Create a fraction-based crop region.
    pub const fn fraction(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self::Fraction {
            x,
            y,
            width,
            height,
        }
    }

    /// Resolve against the source dimensions to a clamped pixel rect.
    pub fn resolve(&self, source_w: u32, source_h: u32) -> Rect {
        match *self {
            Self::Pixels(r) => r.clamp_to(source_w, source_h),
            Self::Fraction {
                x,
                y,
                width,
                height,
            } => {
                let scale = |fraction: f32, extent: u32| -> u32 {
                    (f64::from(extent) * f64::from(fraction.clamp(0.0, 1.0))).round() as u32
                };
                Rect {
                    x: scale(x, source_w),
                    y: scale(y, source_h),
                    width: scale(width, source_w),
                    height: scale(height, source_h),
                }
                .clamp_to(source_w, source_h)
            }
        }
    }
}
