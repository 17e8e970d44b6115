//! In-memory page model produced by the layout pass and consumed by the
//! PDF writer. Positions are millimetres from the page's top-left corner.

use crate::layout::font_metrics::FontStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);

    /// Components scaled to the 0.0–1.0 range PDF colour operators expect.
    pub fn components(self) -> [f32; 3] {
        [
            f32::from(self.0) / 255.0,
            f32::from(self.1) / 255.0,
            f32::from(self.2) / 255.0,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font: FontStyle,
    pub size_pt: f32,
    pub color: Rgb,
}

/// A rectangle of text, optionally with a background fill.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub x_mm: f32,
    pub y_mm: f32,
    pub width_mm: f32,
    pub height_mm: f32,
    pub text: String,
    pub style: TextStyle,
    pub align: Align,
    pub fill: Option<Rgb>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub cells: Vec<Cell>,
}

/// A finished, laid-out report. Immutable once the builder hands it over.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportDocument {
    pub pages: Vec<Page>,
}

impl ReportDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}

#[cfg(test)]
impl ReportDocument {
    /// Visual text lines in reading order: cells sharing a page and top edge
    /// are joined with a single space, blank cells contribute nothing.
    pub fn text_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for page in &self.pages {
            let mut current_y: Option<f32> = None;
            let mut parts: Vec<&str> = Vec::new();
            for cell in &page.cells {
                if current_y.is_some_and(|y| (y - cell.y_mm).abs() > 1e-3) {
                    lines.push(parts.join(" "));
                    parts.clear();
                }
                current_y = Some(cell.y_mm);
                if !cell.text.is_empty() {
                    parts.push(&cell.text);
                }
            }
            if current_y.is_some() {
                lines.push(parts.join(" "));
            }
        }
        lines
    }
}
