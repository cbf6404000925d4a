//! SVG visualization of a sheet arrangement.
//!
//! Draws the sheet outline and one rectangle per placement — a quick way to
//! eyeball a packing decision without wiring up a renderer.
//!
//! # Example
//!
//! ```
//! use sheetlayout::{SheetGrid, Size, svg::render_arrangement_svg};
//!
//! let arrangement = SheetGrid::new(Size::new(600.0, 400.0))
//!     .arrange(Size::new(60.0, 100.0))
//!     .unwrap();
//!
//! let svg = render_arrangement_svg(&arrangement);
//! assert!(svg.starts_with("<svg"));
//! ```

use alloc::format;
use alloc::string::String;

use crate::grid::Arrangement;

/// Margin around the sheet.
const MARGIN: f64 = 10.0;
/// Height reserved for the caption above the sheet.
const CAPTION_H: f64 = 18.0;
/// Sheet fill color.
const SHEET_FILL: &str = "#ffffff";
/// Sheet border color.
const SHEET_STROKE: &str = "#333333";
/// Item fill color.
const ITEM_FILL: &str = "#dbeafe";
/// Item border color.
const ITEM_STROKE: &str = "#1e3a5f";

/// Render an arrangement as a complete SVG document.
pub fn render_arrangement_svg(arrangement: &Arrangement) -> String {
    let sheet = arrangement.canvas();
    let total_w = sheet.width + 2.0 * MARGIN;
    let total_h = sheet.height + 2.0 * MARGIN + CAPTION_H;

    let mut svg = String::with_capacity(1024);
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{total_w}" height="{total_h}" viewBox="0 0 {total_w} {total_h}">"#
    ));
    svg.push('\n');

    // Caption
    let rotated = if arrangement.rotated { ", rotated" } else { "" };
    svg.push_str(&format!(
        r#"<text x="{MARGIN}" y="13" font-family="monospace" font-size="12">{}×{} copies{rotated}</text>"#,
        arrangement.columns, arrangement.rows,
    ));
    svg.push('\n');

    // Sheet outline
    svg.push_str(&format!(
        r#"<rect x="{MARGIN}" y="{top}" width="{}" height="{}" fill="{SHEET_FILL}" stroke="{SHEET_STROKE}"/>"#,
        sheet.width,
        sheet.height,
        top = MARGIN + CAPTION_H,
    ));
    svg.push('\n');

    // One rect per copy
    let item = arrangement.item;
    for p in arrangement.placements() {
        svg.push_str(&format!(
            r#"<rect x="{x}" y="{y}" width="{}" height="{}" fill="{ITEM_FILL}" stroke="{ITEM_STROKE}"/>"#,
            item.width,
            item.height,
            x = MARGIN + p.x,
            y = MARGIN + CAPTION_H + p.y,
        ));
        svg.push('\n');
    }

    svg.push_str("</svg>\n");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{SheetGrid, Size};

    #[test]
    fn renders_one_rect_per_copy_plus_sheet() {
        let arr = SheetGrid::new(Size::new(600.0, 400.0))
            .arrange(Size::new(60.0, 100.0))
            .unwrap();
        let svg = render_arrangement_svg(&arr);

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>\n"));
        assert_eq!(svg.matches("<rect").count(), 30 + 1);
        assert!(svg.contains("6×5 copies, rotated"));
    }

    #[test]
    fn empty_arrangement_renders_bare_sheet() {
        let arr = SheetGrid::new(Size::new(100.0, 100.0))
            .arrange(Size::new(60.0, 100.0))
            .unwrap();
        let svg = render_arrangement_svg(&arr);

        assert_eq!(svg.matches("<rect").count(), 1);
        assert!(svg.contains("1×0 copies"));
        assert!(!svg.contains("rotated"));
    }

    #[test]
    fn unrotated_caption_omits_flag() {
        let arr = SheetGrid::new(Size::new(130.0, 130.0))
            .arrange(Size::new(60.0, 60.0))
            .unwrap();
        let svg = render_arrangement_svg(&arr);
        assert!(svg.contains("2×2 copies</text>"));
    }
}
