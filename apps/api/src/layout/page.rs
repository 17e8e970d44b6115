//! Page geometry. All lengths are millimetres measured from the top-left
//! corner of the page; conversion to PDF user space happens at serialization.

use crate::layout::font_metrics::PT_PER_MM;

/// Physical page and margin layout for one report.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub width_mm: f32,
    pub height_mm: f32,
    pub margin_left_mm: f32,
    pub margin_top_mm: f32,
    pub margin_right_mm: f32,
    /// Distance from the bottom edge at which rows stop being placed.
    pub margin_bottom_mm: f32,
    /// Horizontal inset of text inside a cell.
    pub cell_margin_mm: f32,
}

/// A4 portrait with 10 mm side/top margins and a 20 mm bottom break zone.
pub fn default_page_config() -> PageConfig {
    PageConfig {
        width_mm: 210.0,
        height_mm: 297.0,
        margin_left_mm: 10.0,
        margin_top_mm: 10.0,
        margin_right_mm: 10.0,
        margin_bottom_mm: 20.0,
        cell_margin_mm: 1.0,
    }
}

impl PageConfig {
    /// Width available to a full-width row.
    pub fn content_width_mm(&self) -> f32 {
        self.width_mm - self.margin_left_mm - self.margin_right_mm
    }

    /// Lowest cursor position a row may extend to.
    pub fn break_trigger_mm(&self) -> f32 {
        self.height_mm - self.margin_bottom_mm
    }

    /// Vertical space available on an empty page.
    pub fn printable_height_mm(&self) -> f32 {
        self.break_trigger_mm() - self.margin_top_mm
    }

    pub fn width_pt(&self) -> f32 {
        self.width_mm * PT_PER_MM
    }

    pub fn height_pt(&self) -> f32 {
        self.height_mm * PT_PER_MM
    }
}
