//! Print-job pipeline: from a decoded photo to a composed-sheet plan.
//!
//! Each stage is an immutable value: the plan says what region to crop out
//! of the source, what size to scale it to, and where every copy goes on
//! which canvas. A rendering collaborator executes the plan; this crate
//! never touches pixels.
//!
//! # Example
//!
//! ```
//! use sheetlayout::{PrintJob, Size};
//!
//! let plan = PrintJob::new(1600, 1200, Size::new(576.0, 384.0), Size::new(57.6, 96.0))
//!     .crop_fraction(0.1, 0.1, 0.8, 0.8)
//!     .plan()
//!     .unwrap();
//!
//! // The sheet is turned: 6×5 = 30 copies instead of 9×3 = 27.
//! assert!(plan.arrangement.rotated);
//! assert_eq!(plan.canvas, Size::new(384.0, 576.0));
//! assert_eq!(plan.crop.unwrap().width, 1280);
//! ```

use crate::crop::{CropRegion, Rect};
use crate::grid::{Arrangement, DEFAULT_GAP, GridError, SheetGrid, Size};

/// A single print job: one cropped photo replicated across a sheet.
///
/// All dimensions are pixels in one consistent density; see
/// [`units`](crate::units) for converting physical sizes.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PrintJob {
    source: (u32, u32),
    crop: Option<CropRegion>,
    sheet: Size,
    item: Size,
    gap: f64,
}

impl PrintJob {
    /// Create a job printing `item`-sized copies of a `source_w` ×
    /// `source_h` photo onto `sheet`.
    pub const fn new(source_w: u32, source_h: u32, sheet: Size, item: Size) -> Self {
        Self {
            source: (source_w, source_h),
            crop: None,
            sheet,
            item,
            gap: DEFAULT_GAP,
        }
    }

    /// Crop the source to an absolute pixel region before scaling.
    pub fn crop_pixels(mut self, x: u32, y: u32, width: u32, height: u32) -> Self {
        self.crop = Some(CropRegion::pixels(x, y, width, height));
        self
    }

    /// Crop the source to a fractional region before scaling.
    pub fn crop_fraction(mut self, x: f32, y: f32, width: f32, height: f32) -> Self {
        self.crop = Some(CropRegion::fraction(x, y, width, height));
        self
    }

    /// Override the spacing between copies.
    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Resolve the crop, pack the grid, and produce the plan.
    pub fn plan(&self) -> Result<SheetPlan, PlanError> {
        let (source_w, source_h) = self.source;
        if source_w == 0 || source_h == 0 {
            return Err(PlanError::InvalidSource);
        }

        let crop = self
            .crop
            .map(|region| region.resolve(source_w, source_h))
            .filter(|rect| !rect.covers(source_w, source_h));

        let arrangement = SheetGrid::new(self.sheet).gap(self.gap).arrange(self.item)?;
        log::debug!(
            "planned {} copies ({}x{}, rotated={}) of a {source_w}x{source_h} source",
            arrangement.count(),
            arrangement.columns,
            arrangement.rows,
            arrangement.rotated,
        );

        let canvas = arrangement.canvas();
        Ok(SheetPlan {
            crop,
            scale_to: self.item,
            arrangement,
            canvas,
        })
    }
}

/// Everything a renderer needs to compose the sheet.
#[derive(Clone, Debug, PartialEq)]
pub struct SheetPlan {
    /// Region of the source to extract. `None` means the full frame.
    pub crop: Option<Rect>,
    /// Size to scale the (cropped) photo to — one copy per placement.
    pub scale_to: Size,
    /// The chosen grid arrangement.
    pub arrangement: Arrangement,
    /// Output surface dimensions; axes come back swapped when the sheet is
    /// rotated.
    pub canvas: Size,
}

/// Print-job planning error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlanError {
    /// Source photo has a zero dimension.
    InvalidSource,
    /// Sheet, item, or gap failed validation.
    Grid(GridError),
}

impl From<GridError> for PlanError {
    fn from(err: GridError) -> Self {
        Self::Grid(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_pipeline_with_fractional_crop() {
        let plan = PrintJob::new(1600, 1200, Size::new(576.0, 384.0), Size::new(57.6, 96.0))
            .crop_fraction(0.1, 0.1, 0.8, 0.8)
            .plan()
            .unwrap();

        assert_eq!(plan.crop, Some(Rect::new(160, 120, 1280, 960)));
        assert_eq!(plan.scale_to, Size::new(57.6, 96.0));
        // ⌊576/62.6⌋ × ⌊384/101⌋ = 9 × 3 = 27 as given;
        // ⌊384/62.6⌋ × ⌊576/101⌋ = 6 × 5 = 30 turned.
        assert!(plan.arrangement.rotated);
        assert_eq!((plan.arrangement.columns, plan.arrangement.rows), (6, 5));
        assert_eq!(plan.canvas, Size::new(384.0, 576.0));
    }

    #[test]
    fn canvas_matches_given_sheet_when_not_rotated() {
        let plan = PrintJob::new(800, 600, Size::new(600.0, 400.0), Size::new(100.0, 60.0))
            .plan()
            .unwrap();
        assert!(!plan.arrangement.rotated);
        assert_eq!(plan.canvas, Size::new(600.0, 400.0));
    }

    #[test]
    fn full_frame_crop_normalizes_to_none() {
        let plan = PrintJob::new(800, 600, Size::new(600.0, 400.0), Size::new(60.0, 100.0))
            .crop_pixels(0, 0, 800, 600)
            .plan()
            .unwrap();
        assert_eq!(plan.crop, None);

        let plan = PrintJob::new(800, 600, Size::new(600.0, 400.0), Size::new(60.0, 100.0))
            .crop_fraction(0.0, 0.0, 1.0, 1.0)
            .plan()
            .unwrap();
        assert_eq!(plan.crop, None);
    }

    #[test]
    fn no_crop_stays_none() {
        let plan = PrintJob::new(800, 600, Size::new(600.0, 400.0), Size::new(60.0, 100.0))
            .plan()
            .unwrap();
        assert_eq!(plan.crop, None);
    }

    #[test]
    fn crop_clamped_to_source() {
        let plan = PrintJob::new(800, 600, Size::new(600.0, 400.0), Size::new(60.0, 100.0))
            .crop_pixels(700, 500, 400, 400)
            .plan()
            .unwrap();
        let crop = plan.crop.unwrap();
        assert!(crop.x + crop.width <= 800);
        assert!(crop.y + crop.height <= 600);
    }

    #[test]
    fn rejects_zero_source() {
        let job = PrintJob::new(0, 600, Size::new(600.0, 400.0), Size::new(60.0, 100.0));
        assert_eq!(job.plan(), Err(PlanError::InvalidSource));
    }

    #[test]
    fn grid_errors_pass_through() {
        let job = PrintJob::new(800, 600, Size::new(600.0, 400.0), Size::new(0.0, 100.0));
        assert_eq!(job.plan(), Err(PlanError::Grid(GridError::InvalidItem)));

        let job =
            PrintJob::new(800, 600, Size::new(600.0, 400.0), Size::new(60.0, 100.0)).gap(-2.0);
        assert_eq!(job.plan(), Err(PlanError::Grid(GridError::InvalidGap)));
    }

    #[test]
    fn degenerate_sheet_plans_zero_copies() {
        // Nothing fits, but planning still succeeds (soft failure).
        let plan = PrintJob::new(800, 600, Size::new(100.0, 100.0), Size::new(60.0, 100.0))
            .plan()
            .unwrap();
        assert!(plan.arrangement.is_empty());
        assert_eq!(plan.arrangement.placements().count(), 0);
    }
}
