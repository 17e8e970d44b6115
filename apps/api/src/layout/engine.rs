//! Report layout engine.
//!
//! # Architecture
//! - `ReportBuilder` owns all mutable layout state (pages, cursor, active
//!   style). A fresh builder is created per render and consumed by `finish`,
//!   so concurrent renders share nothing.
//! - `layout_report` walks the static section/field tables and produces a
//!   `ReportDocument`; `render_on` serializes it with the PDF writer.
//! - The only page-break decision is `ensure_space`, called before every row.

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::layout::date::format_long_date;
use crate::layout::document::{Align, Cell, Page, ReportDocument, Rgb, TextStyle};
use crate::layout::fields::SECTIONS;
use crate::layout::font_metrics::{get_metrics, FontStyle};
use crate::layout::page::PageConfig;
use crate::layout::pdf::{write_pdf, RenderError};
use crate::models::student::StudentRecord;

// ────────────────────────────────────────────────────────────────────────────
// Visual constants (millimetres / points)
// ────────────────────────────────────────────────────────────────────────────

pub const REPORT_TITLE: &str = "STUDENT REPORT";
pub const FOOTER_TEXT: &str = "This is a computer-generated document. No signature required.";

const TITLE_STYLE: TextStyle = TextStyle {
    font: FontStyle::Bold,
    size_pt: 20.0,
    color: Rgb(0, 0, 128),
};
const TITLE_HEIGHT: f32 = 15.0;

const CAPTION_STYLE: TextStyle = TextStyle {
    font: FontStyle::Regular,
    size_pt: 10.0,
    color: Rgb(100, 100, 100),
};
const CAPTION_HEIGHT: f32 = 5.0;
const HEADER_GAP: f32 = 5.0;

const BANNER_STYLE: TextStyle = TextStyle {
    font: FontStyle::Bold,
    size_pt: 14.0,
    color: Rgb::BLACK,
};
const BANNER_FILL: Rgb = Rgb(240, 240, 240);
const BANNER_HEIGHT: f32 = 10.0;
const BANNER_GAP: f32 = 2.0;

const LABEL_STYLE: TextStyle = TextStyle {
    font: FontStyle::Bold,
    size_pt: 10.0,
    color: Rgb(50, 50, 50),
};
const VALUE_STYLE: TextStyle = TextStyle {
    font: FontStyle::Regular,
    size_pt: 10.0,
    color: Rgb::BLACK,
};
const LABEL_WIDTH: f32 = 50.0;
const ROW_HEIGHT: f32 = 8.0;

const SECTION_GAP: f32 = 5.0;

const FOOTER_STYLE: TextStyle = TextStyle {
    font: FontStyle::Oblique,
    size_pt: 8.0,
    color: Rgb(150, 150, 150),
};
const FOOTER_HEIGHT: f32 = 5.0;
const FOOTER_GAP: f32 = 10.0;

// ────────────────────────────────────────────────────────────────────────────
// Output types
// ────────────────────────────────────────────────────────────────────────────

/// A serialized report ready to be sent to the client.
#[derive(Debug, Clone)]
pub struct RenderedReport {
    pub bytes: Vec<u8>,
    pub page_count: usize,
}

// ────────────────────────────────────────────────────────────────────────────
// Public entry points
// ────────────────────────────────────────────────────────────────────────────

/// Renders a record, stamping it with today's local date.
pub fn render(record: &StudentRecord, config: &PageConfig) -> Result<RenderedReport, RenderError> {
    render_on(record, config, Local::now().date_naive())
}

/// Renders a record with an explicit "generated on" date.
pub fn render_on(
    record: &StudentRecord,
    config: &PageConfig,
    generated_on: NaiveDate,
) -> Result<RenderedReport, RenderError> {
    let document = layout_report(record, config, generated_on);
    let bytes = write_pdf(&document, config)?;
    Ok(RenderedReport {
        bytes,
        page_count: document.page_count(),
    })
}

/// Lays out the full report: header, the four sections, footer.
pub fn layout_report(
    record: &StudentRecord,
    config: &PageConfig,
    generated_on: NaiveDate,
) -> ReportDocument {
    let mut builder = ReportBuilder::new(config);

    builder.apply_style(TITLE_STYLE);
    builder.line(TITLE_HEIGHT, REPORT_TITLE, Align::Center, false);
    builder.gap(HEADER_GAP);

    builder.apply_style(CAPTION_STYLE);
    let caption = format!("Generated on: {}", format_long_date(generated_on));
    builder.line(CAPTION_HEIGHT, &caption, Align::Right, false);
    builder.gap(HEADER_GAP);

    for section in SECTIONS {
        builder.section_banner(section.title());
        for spec in section.fields() {
            builder.field_row(spec.label, &spec.display_value(record));
        }
        builder.gap(SECTION_GAP);
    }

    builder.gap(FOOTER_GAP);
    builder.apply_style(FOOTER_STYLE);
    builder.line(FOOTER_HEIGHT, FOOTER_TEXT, Align::Center, false);

    builder.finish()
}

// ────────────────────────────────────────────────────────────────────────────
// Builder
// ────────────────────────────────────────────────────────────────────────────

/// Single-owner layout state for one render.
///
/// Invariant: `cursor_mm` never exceeds `config.break_trigger_mm()`.
pub struct ReportBuilder<'a> {
    config: &'a PageConfig,
    finished: Vec<Page>,
    current: Page,
    cursor_mm: f32,
    style: TextStyle,
    fill_color: Rgb,
}

impl<'a> ReportBuilder<'a> {
    pub fn new(config: &'a PageConfig) -> Self {
        Self {
            config,
            finished: Vec::new(),
            current: Page::default(),
            cursor_mm: config.margin_top_mm,
            style: VALUE_STYLE,
            fill_color: Rgb(255, 255, 255),
        }
    }

    #[cfg(test)]
    pub fn cursor_mm(&self) -> f32 {
        self.cursor_mm
    }

    pub fn apply_style(&mut self, style: TextStyle) {
        self.style = style;
    }

    pub fn set_fill_color(&mut self, color: Rgb) {
        self.fill_color = color;
    }

    /// Advances the cursor by `height_mm`, stopping at the page-break trigger.
    pub fn gap(&mut self, height_mm: f32) {
        self.cursor_mm = (self.cursor_mm + height_mm).min(self.config.break_trigger_mm());
    }

    /// Places one full-width cell in the active style and advances past it.
    pub fn line(&mut self, height_mm: f32, text: &str, align: Align, filled: bool) {
        self.ensure_space(height_mm);
        self.place(
            self.config.margin_left_mm,
            self.cursor_mm,
            self.config.content_width_mm(),
            height_mm,
            text,
            align,
            filled,
        );
        self.cursor_mm += height_mm;
    }

    /// Grey banner introducing a section.
    pub fn section_banner(&mut self, title: &str) {
        self.apply_style(BANNER_STYLE);
        self.set_fill_color(BANNER_FILL);
        self.line(BANNER_HEIGHT, title, Align::Left, true);
        self.gap(BANNER_GAP);
    }

    /// Label cell plus a value cell wrapped to the remaining row width.
    ///
    /// A row moves to the next page as a whole. A value taller than an empty
    /// page is continued in further rows whose label cell is blank.
    pub fn field_row(&mut self, label: &str, value: &str) {
        let value_x = self.config.margin_left_mm + LABEL_WIDTH;
        let value_width = self.config.content_width_mm() - LABEL_WIDTH;
        let text_width = value_width - 2.0 * self.config.cell_margin_mm;

        let lines = get_metrics(VALUE_STYLE.font).wrap_text(value, text_width, VALUE_STYLE.size_pt);
        let lines_per_page = ((self.config.printable_height_mm() / ROW_HEIGHT).floor() as usize).max(1);

        for (chunk_index, chunk) in lines.chunks(lines_per_page).enumerate() {
            let row_height = ROW_HEIGHT * chunk.len() as f32;
            self.ensure_space(row_height);

            let row_label = if chunk_index == 0 { label } else { "" };
            self.apply_style(LABEL_STYLE);
            self.place(
                self.config.margin_left_mm,
                self.cursor_mm,
                LABEL_WIDTH,
                ROW_HEIGHT,
                row_label,
                Align::Left,
                false,
            );

            self.apply_style(VALUE_STYLE);
            for (line_index, line) in chunk.iter().enumerate() {
                let y = self.cursor_mm + ROW_HEIGHT * line_index as f32;
                self.place(value_x, y, value_width, ROW_HEIGHT, line, Align::Left, false);
            }

            self.cursor_mm += row_height;
        }
    }

    /// Consumes the builder and returns the finished pages.
    pub fn finish(mut self) -> ReportDocument {
        self.finished.push(self.current);
        ReportDocument {
            pages: self.finished,
        }
    }

    // ── internals ────────────────────────────────────────────────────────────

    /// Starts a new page when a row of `height_mm` does not fit below the
    /// cursor. A row taller than an empty page is placed at the top anyway.
    fn ensure_space(&mut self, height_mm: f32) {
        let fits = self.cursor_mm + height_mm <= self.config.break_trigger_mm();
        let at_top = self.cursor_mm <= self.config.margin_top_mm;
        if fits || at_top {
            return;
        }

        let full_page = std::mem::take(&mut self.current);
        self.finished.push(full_page);
        self.cursor_mm = self.config.margin_top_mm;
        debug!(
            page = self.finished.len() + 1,
            row_height_mm = height_mm,
            "Report layout: page break"
        );
    }

    #[allow(clippy::too_many_arguments)]
    fn place(
        &mut self,
        x_mm: f32,
        y_mm: f32,
        width_mm: f32,
        height_mm: f32,
        text: &str,
        align: Align,
        filled: bool,
    ) {
        self.current.cells.push(Cell {
            x_mm,
            y_mm,
            width_mm,
            height_mm,
            text: text.to_string(),
            style: self.style,
            align,
            fill: filled.then_some(self.fill_color),
        });
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
