//! Grid packing: how many whole copies of one print fit on a sheet.
//!
//! Evaluates the sheet in both orientations, keeps whichever fits more
//! copies, and enumerates the centered per-cell coordinates. Pure geometry —
//! no pixel operations, no allocations, `no_std` compatible.
//!
//! # Example
//!
//! ```
//! use sheetlayout::{SheetGrid, Size};
//!
//! let arrangement = SheetGrid::new(Size::new(600.0, 400.0))
//!     .arrange(Size::new(60.0, 100.0))
//!     .unwrap();
//!
//! // As given the sheet holds 9×3 = 27 copies; turned it holds 6×5 = 30.
//! assert!(arrangement.rotated);
//! assert_eq!((arrangement.columns, arrangement.rows), (6, 5));
//! ```

#[cfg(not(feature = "std"))]
use num_traits::Float as _;

/// Default spacing between adjacent prints, in the same unit as the sheet.
pub const DEFAULT_GAP: f64 = 5.0;

/// Width × height in a caller-chosen linear unit.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Size {
    /// Width.
    pub width: f64,
    /// Height.
    pub height: f64,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Swap axes (the sheet turned 90°).
    pub const fn transpose(self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Whether both dimensions are positive finite numbers.
    fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Grid packing input error.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Sheet width or height is not a positive finite number.
    InvalidSheet,
    /// Item width or height is not a positive finite number.
    InvalidItem,
    /// Gap is negative or not finite.
    InvalidGap,
}

/// Grid packing specification: a sheet and its spacing policy.
///
/// # Example
///
/// ```
/// use sheetlayout::{SheetGrid, Size};
///
/// let arrangement = SheetGrid::new(Size::new(130.0, 130.0))
///     .gap(5.0)
///     .arrange(Size::new(60.0, 60.0))
///     .unwrap();
///
/// assert_eq!((arrangement.columns, arrangement.rows), (2, 2));
/// assert!(!arrangement.rotated);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SheetGrid {
    /// Sheet dimensions.
    pub sheet: Size,
    /// Spacing between adjacent items on both axes.
    pub gap: f64,
}

impl SheetGrid {
    /// Create a packer for the given sheet with the default gap.
    pub const fn new(sheet: Size) -> Self {
        Self {
            sheet,
            gap: DEFAULT_GAP,
        }
    }

    /// Set the spacing between adjacent items.
    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Compute the best grid arrangement for `item`.
    ///
    /// Both sheet orientations are evaluated; the turned sheet wins only
    /// when it fits strictly more copies, so equal counts keep the sheet as
    /// given. Zero capacity is not an error: the arrangement comes back
    /// with zero columns or rows, a warning is logged, and enumeration
    /// yields no placements.
    pub fn arrange(&self, item: Size) -> Result<Arrangement, GridError> {
        if !self.sheet.is_valid() {
            return Err(GridError::InvalidSheet);
        }
        if !item.is_valid() {
            return Err(GridError::InvalidItem);
        }
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(GridError::InvalidGap);
        }

        let gap = self.gap;
        let step_w = item.width + gap;
        let step_h = item.height + gap;

        let columns = capacity(self.sheet.width, step_w);
        let rows = capacity(self.sheet.height, step_h);
        let turned_columns = capacity(self.sheet.height, step_w);
        let turned_rows = capacity(self.sheet.width, step_h);

        // Turn the sheet only when that fits strictly more copies.
        let rotated = u64::from(turned_columns) * u64::from(turned_rows)
            > u64::from(columns) * u64::from(rows);

        let (columns, rows, sheet) = if rotated {
            (turned_columns, turned_rows, self.sheet.transpose())
        } else {
            (columns, rows, self.sheet)
        };

        let start_x = centered_start(sheet.width, columns, step_w, gap);
        let start_y = centered_start(sheet.height, rows, step_h, gap);

        if columns == 0 || rows == 0 || start_x < 0.0 || start_y < 0.0 {
            log::warn!(
                "degenerate arrangement: {columns}x{rows} starting at ({start_x}, {start_y}), \
                 item {}x{} with gap {gap} on {}x{} sheet",
                item.width,
                item.height,
                sheet.width,
                sheet.height,
            );
        }

        Ok(Arrangement {
            columns,
            rows,
            start_x,
            start_y,
            rotated,
            sheet,
            item,
            gap,
        })
    }
}

/// Whole gapped steps that fit into `extent`.
fn capacity(extent: f64, step: f64) -> u32 {
    (extent / step).floor() as u32
}

/// Offset of the first cell: leftover space after `count` steps, split
/// evenly. The trailing step carries a gap the border does not need, so one
/// gap is handed back before splitting.
fn centered_start(extent: f64, count: u32, step: f64, gap: f64) -> f64 {
    (extent - f64::from(count) * step + gap) / 2.0
}

/// A chosen grid arrangement on a sheet.
///
/// Carries everything a renderer needs: counts, centering offsets, the
/// sheet in its chosen orientation, and the item size and gap that
/// generated it.
#[derive(Clone, Debug, PartialEq)]
pub struct Arrangement {
    /// Whole items across the sheet.
    pub columns: u32,
    /// Whole items down the sheet.
    pub rows: u32,
    /// Horizontal offset of the first column.
    pub start_x: f64,
    /// Vertical offset of the first row.
    pub start_y: f64,
    /// Whether the sheet is turned 90° relative to its given dimensions.
    pub rotated: bool,
    /// Sheet dimensions in the chosen orientation.
    pub sheet: Size,
    /// Item dimensions.
    pub item: Size,
    /// Spacing between adjacent items.
    pub gap: f64,
}

impl Arrangement {
    /// Total number of placements.
    pub fn count(&self) -> u64 {
        u64::from(self.columns) * u64::from(self.rows)
    }

    /// Whether nothing fits on the sheet.
    pub fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }

    /// Output surface dimensions — the sheet in its chosen orientation, so
    /// the axes come back swapped when [`rotated`](Self::rotated) is set.
    pub fn canvas(&self) -> Size {
        self.sheet
    }

    /// Enumerate per-cell top-left coordinates, columns outer, rows inner.
    pub fn placements(&self) -> Placements {
        Placements {
            columns: self.columns,
            rows: self.rows,
            start_x: self.start_x,
            start_y: self.start_y,
            step_x: self.item.width + self.gap,
            step_y: self.item.height + self.gap,
            column: 0,
            row: 0,
        }
    }
}

/// Top-left coordinate of one item instance on the sheet.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Horizontal offset.
    pub x: f64,
    /// Vertical offset.
    pub y: f64,
}

/// Iterator over the placements of an [`Arrangement`].
#[derive(Clone, Debug)]
pub struct Placements {
    columns: u32,
    rows: u32,
    start_x: f64,
    start_y: f64,
    step_x: f64,
    step_y: f64,
    column: u32,
    row: u32,
}

impl Placements {
    fn remaining(&self) -> usize {
        let total = u64::from(self.columns) * u64::from(self.rows);
        let done = u64::from(self.column) * u64::from(self.rows) + u64::from(self.row);
        (total - done) as usize
    }
}

impl Iterator for Placements {
    type Item = Placement;

    fn next(&mut self) -> Option<Placement> {
        if self.column >= self.columns || self.rows == 0 {
            return None;
        }
        let placement = Placement {
            x: self.start_x + self.step_x * f64::from(self.column),
            y: self.start_y + self.step_y * f64::from(self.row),
        };
        self.row += 1;
        if self.row == self.rows {
            self.row = 0;
            self.column += 1;
        }
        Some(placement)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for Placements {}

impl core::iter::FusedIterator for Placements {}
