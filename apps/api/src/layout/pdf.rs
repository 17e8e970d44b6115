//! Serializes a laid-out `ReportDocument` into PDF bytes with `lopdf`.
//!
//! Fonts are the base-14 Helvetica faces with WinAnsi encoding, shared by all
//! pages through the page tree's inherited `Resources`. No timestamps are
//! written, so the output depends only on the document.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, StringFormat, Stream};
use thiserror::Error;

use crate::layout::document::{Align, Cell, Page, ReportDocument};
use crate::layout::font_metrics::{get_metrics, FontStyle, PT_PER_MM};
use crate::layout::page::PageConfig;

const PDF_VERSION: &str = "1.4";
const DOCUMENT_TITLE: &str = "Student Report";
const PRODUCER: &str = concat!("student-report ", env!("CARGO_PKG_VERSION"));

/// Failure to turn a finished layout into bytes. This is the only error the
/// render path can produce.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to encode page content stream: {0}")]
    ContentEncoding(String),

    #[error("Failed to write PDF document: {0}")]
    Write(String),
}

/// Writes the full document and returns the PDF bytes.
pub fn write_pdf(report: &ReportDocument, config: &PageConfig) -> Result<Vec<u8>, RenderError> {
    let mut doc = Document::with_version(PDF_VERSION);
    let pages_id = doc.new_object_id();

    let mut fonts = Dictionary::new();
    for style in FontStyle::ALL {
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => style.base_font(),
            "Encoding" => "WinAnsiEncoding",
        });
        fonts.set(style.resource_name(), font_id);
    }
    let resources_id = doc.add_object(dictionary! {
        "Font" => fonts,
    });

    let mut kids: Vec<Object> = Vec::with_capacity(report.pages.len());
    for page in &report.pages {
        let content = Content {
            operations: page_operations(page, config),
        };
        let encoded = content
            .encode()
            .map_err(|e| RenderError::ContentEncoding(e.to_string()))?;
        let content_id = doc.add_object(Stream::new(dictionary! {}, encoded));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let page_count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => page_count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.into(), 0.into(), config.width_pt().into(), config.height_pt().into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(DOCUMENT_TITLE),
        "Producer" => Object::string_literal(PRODUCER),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);
    doc.compress();

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)
        .map_err(|e| RenderError::Write(e.to_string()))?;
    Ok(buffer)
}

// ────────────────────────────────────────────────────────────────────────────
// Content stream
// ────────────────────────────────────────────────────────────────────────────

fn page_operations(page: &Page, config: &PageConfig) -> Vec<Operation> {
    let mut operations = Vec::new();
    for cell in &page.cells {
        if let Some(fill) = cell.fill {
            let [r, g, b] = fill.components();
            let bottom_mm = config.height_mm - cell.y_mm - cell.height_mm;
            operations.push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
            operations.push(Operation::new(
                "re",
                vec![
                    (cell.x_mm * PT_PER_MM).into(),
                    (bottom_mm * PT_PER_MM).into(),
                    (cell.width_mm * PT_PER_MM).into(),
                    (cell.height_mm * PT_PER_MM).into(),
                ],
            ));
            operations.push(Operation::new("f", vec![]));
        }
        if !cell.text.is_empty() {
            push_text(&mut operations, cell, config);
        }
    }
    operations
}

fn push_text(operations: &mut Vec<Operation>, cell: &Cell, config: &PageConfig) {
    let (x_mm, baseline_mm) = text_origin(cell, config);
    let [r, g, b] = cell.style.color.components();

    operations.push(Operation::new("BT", vec![]));
    operations.push(Operation::new("rg", vec![r.into(), g.into(), b.into()]));
    operations.push(Operation::new(
        "Tf",
        vec![
            cell.style.font.resource_name().into(),
            cell.style.size_pt.into(),
        ],
    ));
    operations.push(Operation::new(
        "Td",
        vec![
            (x_mm * PT_PER_MM).into(),
            ((config.height_mm - baseline_mm) * PT_PER_MM).into(),
        ],
    ));
    operations.push(Operation::new(
        "Tj",
        vec![Object::String(
            encode_win_ansi(&cell.text),
            StringFormat::Literal,
        )],
    ));
    operations.push(Operation::new("ET", vec![]));
}

/// Left edge and baseline of a cell's text, in millimetres from the top-left.
/// The baseline sits slightly below the vertical centre of the cell.
fn text_origin(cell: &Cell, config: &PageConfig) -> (f32, f32) {
    let text_width = get_metrics(cell.style.font).measure_mm(&cell.text, cell.style.size_pt);
    let x = match cell.align {
        Align::Left => cell.x_mm + config.cell_margin_mm,
        Align::Right => cell.x_mm + cell.width_mm - config.cell_margin_mm - text_width,
        Align::Center => cell.x_mm + (cell.width_mm - text_width) / 2.0,
    };
    let baseline = cell.y_mm + 0.5 * cell.height_mm + 0.3 * cell.style.size_pt / PT_PER_MM;
    (x, baseline)
}

/// Maps text onto WinAnsiEncoding. Tabs become spaces; anything the encoding
/// cannot represent becomes `?`.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' => c as u8,
            '\t' => b' ',
            '\u{A0}'..='\u{FF}' => c as u32 as u8,
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8A,
            '‹' => 0x8B,
            'Œ' => 0x8C,
            'Ž' => 0x8E,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9A,
            '›' => 0x9B,
            'œ' => 0x9C,
            'ž' => 0x9E,
            'Ÿ' => 0x9F,
            _ => b'?',
        })
        .collect()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::document::{Rgb, TextStyle};
    use crate::layout::page::default_page_config;

    fn make_cell(y_mm: f32, text: &str, align: Align, fill: Option<Rgb>) -> Cell {
        Cell {
            x_mm: 10.0,
            y_mm,
            width_mm: 190.0,
            height_mm: 10.0,
            text: text.to_string(),
            style: TextStyle {
                font: FontStyle::Bold,
                size_pt: 14.0,
                color: Rgb::BLACK,
            },
            align,
            fill,
        }
    }

    /// Decoded `Tj` strings per page, in page order.
    fn page_strings(bytes: &[u8]) -> Vec<Vec<String>> {
        let doc = Document::load_mem(bytes).unwrap();
        doc.get_pages()
            .values()
            .map(|&page_id| {
                let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
                content
                    .operations
                    .iter()
                    .filter(|op| op.operator == "Tj")
                    .filter_map(|op| match op.operands.first() {
                        Some(Object::String(bytes, _)) => {
                            Some(String::from_utf8_lossy(bytes).into_owned())
                        }
                        _ => None,
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_write_pdf_produces_parseable_pages() {
        let config = default_page_config();
        let report = ReportDocument {
            pages: vec![
                Page {
                    cells: vec![make_cell(10.0, "First page", Align::Left, None)],
                },
                Page {
                    cells: vec![make_cell(10.0, "Second page", Align::Left, None)],
                },
            ],
        };
        let bytes = write_pdf(&report, &config).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.4"));
        assert_eq!(
            page_strings(&bytes),
            vec![vec!["First page".to_string()], vec!["Second page".to_string()]]
        );
    }

    #[test]
    fn test_special_characters_survive_round_trip() {
        let config = default_page_config();
        let text = r"Roll (B) \ back";
        let report = ReportDocument {
            pages: vec![Page {
                cells: vec![make_cell(10.0, text, Align::Left, None)],
            }],
        };
        let bytes = write_pdf(&report, &config).unwrap();
        assert_eq!(page_strings(&bytes), vec![vec![text.to_string()]]);
    }

    #[test]
    fn test_filled_cell_emits_rectangle() {
        let config = default_page_config();
        let page = Page {
            cells: vec![make_cell(
                40.0,
                "Personal Information",
                Align::Left,
                Some(Rgb(240, 240, 240)),
            )],
        };
        let operators: Vec<String> = page_operations(&page, &config)
            .into_iter()
            .map(|op| op.operator)
            .collect();
        assert_eq!(
            operators,
            vec!["rg", "re", "f", "BT", "rg", "Tf", "Td", "Tj", "ET"]
        );
    }

    #[test]
    fn test_blank_cell_emits_nothing() {
        let config = default_page_config();
        let page = Page {
            cells: vec![make_cell(40.0, "", Align::Left, None)],
        };
        assert!(page_operations(&page, &config).is_empty());
    }

    #[test]
    fn test_text_origin_alignment() {
        let config = default_page_config();
        let text = "Generated on: May 4, 2010";
        let width = get_metrics(FontStyle::Bold).measure_mm(text, 14.0);

        let (left, _) = text_origin(&make_cell(10.0, text, Align::Left, None), &config);
        let (right, _) = text_origin(&make_cell(10.0, text, Align::Right, None), &config);
        let (center, baseline) = text_origin(&make_cell(10.0, text, Align::Center, None), &config);

        assert_eq!(left, 11.0);
        assert!((right + width - 199.0).abs() < 1e-3);
        assert!((center + width / 2.0 - 105.0).abs() < 1e-3);
        // centre of a 10mm cell at y=10 is 15mm; baseline is just below it
        assert!(baseline > 15.0 && baseline < 17.0);
    }

    #[test]
    fn test_encode_win_ansi() {
        assert_eq!(encode_win_ansi("Name:"), b"Name:".to_vec());
        assert_eq!(encode_win_ansi("José"), vec![b'J', b'o', b's', 0xE9]);
        assert_eq!(encode_win_ansi("a–b"), vec![b'a', 0x96, b'b']);
        assert_eq!(encode_win_ansi("名前"), b"??".to_vec());
        assert_eq!(encode_win_ansi("a\tb"), b"a b".to_vec());
    }

    #[test]
    fn test_empty_report_still_writes() {
        let config = default_page_config();
        let report = ReportDocument {
            pages: vec![Page::default()],
        };
        let bytes = write_pdf(&report, &config).unwrap();
        assert_eq!(page_strings(&bytes), vec![Vec::<String>::new()]);
    }
}
