//! Print-sheet layout computation: grid packing with orientation selection
//! and placement enumeration.
//!
//! Pure geometry — no pixel operations, no allocations in the core,
//! `no_std` compatible.
//!
//! # Modules
//!
//! - [`grid`] — Grid packing: per-axis capacity, sheet-rotation choice,
//!   centered placement enumeration
//! - [`crop`] — Crop-region resolution against source photo dimensions
//! - [`plan`] — Print-job pipeline from decoded photo to composed-sheet plan
//! - [`units`] — Physical sizes in inches and pixel-density conversion
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
//! // Turning the sheet fits 30 copies instead of 27.
//! assert!(arrangement.rotated);
//! assert_eq!(arrangement.count(), 30);
//!
//! let first = arrangement.placements().next().unwrap();
//! assert_eq!((first.x, first.y), (7.5, 40.0));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod crop;
pub mod grid;
pub mod plan;
pub mod units;

#[cfg(feature = "svg")]
pub mod svg;

// Re-exports: core types from the grid module
pub use crop::{CropRegion, Rect};
pub use grid::{
    Arrangement, DEFAULT_GAP, GridError, Placement, Placements, SheetGrid, Size,
};
pub use plan::{PlanError, PrintJob, SheetPlan};
pub use units::{Dpi, PhysicalSize};
