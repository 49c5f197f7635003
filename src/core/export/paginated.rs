//! Paginated-document (PDF) encoder
//!
//! Writes PDF 1.4 directly with the standard Helvetica fonts, so no font
//! files are embedded. Pages are US Letter landscape. The title appears on the
//! first page and the header row is repeated at the top of every page.
//!
//! Text is encoded as WinAnsi (Latin-1 for the printable range). Characters
//! outside it are replaced with `?`, and text wider than its column is cut and
//! suffixed with `...`.

use super::encoder::{SubmissionEncoder, REPORT_TITLE};
use super::format::ExportFormat;
use super::schema::{headers, prepare_rows, DateStyle, PAGE_COLUMNS};
use crate::domain::{EncodingError, Submission};

const PAGE_WIDTH: f64 = 792.0;
const PAGE_HEIGHT: f64 = 612.0;
const MARGIN: f64 = 36.0;

const TITLE_SIZE: f64 = 18.0;
const TITLE_BLOCK: f64 = 40.0;
const TEXT_SIZE: f64 = 10.0;
const CELL_PADDING: f64 = 3.0;
const HEADER_HEIGHT: f64 = 26.0;
const HEADER_BOTTOM_PADDING: f64 = 12.0;
const ROW_HEIGHT: f64 = 18.0;

/// Widths of the six page columns, in points
const COLUMN_WIDTHS: [f64; 6] = [72.0, 130.0, 140.0, 184.0, 82.0, 82.0];

// Fill colours (RGB, 0..1)
const GREY: &str = "0.502 0.502 0.502";
const WHITE_SMOKE: &str = "0.961 0.961 0.961";
const BEIGE: &str = "0.961 0.961 0.863";
const WHITE: &str = "1 1 1";
const BLACK: &str = "0 0 0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Font {
    Bold,
    Regular,
}

impl Font {
    fn resource(&self) -> &'static str {
        match self {
            Font::Bold => "/F1",
            Font::Regular => "/F2",
        }
    }
}

/// Letter-landscape PDF table with a six-column projection
#[derive(Debug, Clone, Copy, Default)]
pub struct PaginatedEncoder;

impl SubmissionEncoder for PaginatedEncoder {
    fn format(&self) -> ExportFormat {
        ExportFormat::Pdf
    }

    fn file_name(&self) -> &'static str {
        "submissions.pdf"
    }

    fn mime_type(&self) -> &'static str {
        "application/pdf"
    }

    fn encode(&self, records: &[Submission]) -> Result<Vec<u8>, EncodingError> {
        let rows = prepare_rows(records)?;

        let header_cells: Vec<Vec<u8>> = headers(&PAGE_COLUMNS)
            .iter()
            .zip(COLUMN_WIDTHS)
            .map(|(h, w)| fit_text(to_win_ansi(h), w - 2.0 * CELL_PADDING, Font::Bold, TEXT_SIZE))
            .collect();

        let body: Vec<Vec<Vec<u8>>> = rows
            .iter()
            .map(|row| {
                row.cells(&PAGE_COLUMNS, DateStyle::Day)
                    .iter()
                    .zip(COLUMN_WIDTHS)
                    .map(|(cell, w)| {
                        fit_text(to_win_ansi(cell), w - 2.0 * CELL_PADDING, Font::Regular, TEXT_SIZE)
                    })
                    .collect()
            })
            .collect();

        let mut pdf = PdfWriter::new();
        let mut remaining: &[Vec<Vec<u8>>] = &body;
        let mut first = true;
        loop {
            let table_top = if first {
                PAGE_HEIGHT - MARGIN - TITLE_BLOCK
            } else {
                PAGE_HEIGHT - MARGIN
            };
            let capacity = rows_per_page(table_top);
            let take = capacity.min(remaining.len());
            let (page_rows, rest) = remaining.split_at(take);

            let mut content = Vec::new();
            if first {
                draw_title(&mut content);
            }
            draw_table(&mut content, table_top, &header_cells, page_rows);
            pdf.add_page(content);

            remaining = rest;
            first = false;
            if remaining.is_empty() {
                break;
            }
        }

        Ok(pdf.finish(REPORT_TITLE))
    }
}

fn rows_per_page(table_top: f64) -> usize {
    let body_space = table_top - MARGIN - HEADER_HEIGHT;
    ((body_space / ROW_HEIGHT).floor() as usize).max(1)
}

fn table_width() -> f64 {
    COLUMN_WIDTHS.iter().sum()
}

fn table_left() -> f64 {
    (PAGE_WIDTH - table_width()) / 2.0
}

fn draw_title(out: &mut Vec<u8>) {
    let title = to_win_ansi(REPORT_TITLE);
    let x = (PAGE_WIDTH - text_width(&title, Font::Bold, TITLE_SIZE)) / 2.0;
    let y = PAGE_HEIGHT - MARGIN - TITLE_SIZE;
    put(out, &format!("{BLACK} rg\n"));
    draw_text(out, Font::Bold, TITLE_SIZE, x, y, &title);
}

fn draw_table(out: &mut Vec<u8>, top: f64, header: &[Vec<u8>], rows: &[Vec<Vec<u8>>]) {
    let left = table_left();
    let width = table_width();
    let header_bottom = top - HEADER_HEIGHT;
    let bottom = header_bottom - ROW_HEIGHT * rows.len() as f64;

    // Backgrounds
    put(out, &format!("{GREY} rg\n"));
    put(out, &format!("{left:.2} {header_bottom:.2} {width:.2} {HEADER_HEIGHT:.2} re f\n"));
    for i in 0..rows.len() {
        let y = header_bottom - ROW_HEIGHT * (i + 1) as f64;
        let fill = if i % 2 == 0 { BEIGE } else { WHITE };
        put(out, &format!("{fill} rg\n"));
        put(out, &format!("{left:.2} {y:.2} {width:.2} {ROW_HEIGHT:.2} re f\n"));
    }

    // Header text
    put(out, &format!("{WHITE_SMOKE} rg\n"));
    draw_row(out, Font::Bold, header_bottom + HEADER_BOTTOM_PADDING, header);

    // Body text
    put(out, &format!("{BLACK} rg\n"));
    for (i, cells) in rows.iter().enumerate() {
        let row_bottom = header_bottom - ROW_HEIGHT * (i + 1) as f64;
        let baseline = row_bottom + (ROW_HEIGHT - TEXT_SIZE) / 2.0 + 1.5;
        draw_row(out, Font::Regular, baseline, cells);
    }

    // Grid
    put(out, &format!("{BLACK} RG\n1 w\n"));
    let mut y_lines = vec![top, header_bottom];
    y_lines.extend((1..=rows.len()).map(|i| header_bottom - ROW_HEIGHT * i as f64));
    for y in y_lines {
        put(out, &format!("{left:.2} {y:.2} m {:.2} {y:.2} l S\n", left + width));
    }
    let mut x = left;
    for w in std::iter::once(0.0).chain(COLUMN_WIDTHS) {
        x += w;
        put(out, &format!("{x:.2} {top:.2} m {x:.2} {bottom:.2} l S\n"));
    }
}

fn draw_row(out: &mut Vec<u8>, font: Font, baseline: f64, cells: &[Vec<u8>]) {
    let mut x = table_left();
    for (cell, w) in cells.iter().zip(COLUMN_WIDTHS) {
        let text_x = x + (w - text_width(cell, font, TEXT_SIZE)) / 2.0;
        draw_text(out, font, TEXT_SIZE, text_x, baseline, cell);
        x += w;
    }
}

fn draw_text(out: &mut Vec<u8>, font: Font, size: f64, x: f64, y: f64, text: &[u8]) {
    put(out, &format!("BT\n{} {size:.0} Tf\n{x:.2} {y:.2} Td\n(", font.resource()));
    for &b in text {
        if matches!(b, b'\\' | b'(' | b')') {
            out.push(b'\\');
        }
        out.push(b);
    }
    put(out, ") Tj\nET\n");
}

fn put(out: &mut Vec<u8>, s: &str) {
    out.extend_from_slice(s.as_bytes());
}

/// Maps text to single-byte WinAnsi
///
/// Line breaks and tabs become spaces; anything above U+00FF becomes `?`.
fn to_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\t' | '\r' | '\n' => b' ',
            c if (c as u32) <= 0xFF => c as u32 as u8,
            _ => b'?',
        })
        .collect()
}

/// Cuts `text` so it fits `max_width` points, appending `...` when cut
fn fit_text(text: Vec<u8>, max_width: f64, font: Font, size: f64) -> Vec<u8> {
    if text_width(&text, font, size) <= max_width {
        return text;
    }

    let ellipsis = b"...";
    let budget = max_width - text_width(ellipsis, font, size);
    let mut used = 0.0;
    let mut fitted = Vec::with_capacity(text.len());
    for b in text {
        let w = glyph_width(b, font) * size / 1000.0;
        if used + w > budget {
            break;
        }
        used += w;
        fitted.push(b);
    }
    fitted.extend_from_slice(ellipsis);
    fitted
}

fn text_width(text: &[u8], font: Font, size: f64) -> f64 {
    text.iter().map(|&b| glyph_width(b, font)).sum::<f64>() * size / 1000.0
}

/// Helvetica advance widths for printable ASCII (0x20..=0x7E)
#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

/// Helvetica-Bold advance widths for printable ASCII (0x20..=0x7E)
#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

fn glyph_width(byte: u8, font: Font) -> f64 {
    let table = match font {
        Font::Bold => &HELVETICA_BOLD,
        Font::Regular => &HELVETICA,
    };
    match byte {
        0x20..=0x7E => f64::from(table[usize::from(byte - 0x20)]),
        // Latin-1 supplement: close to the average lowercase width
        _ => 556.0,
    }
}

/// Minimal multi-page PDF 1.4 writer
///
/// Fixed objects: 1 catalog, 2 page tree, 3 bold font, 4 regular font,
/// 5 document info. Each page adds a page object and a content stream.
struct PdfWriter {
    pages: Vec<Vec<u8>>,
}

impl PdfWriter {
    fn new() -> Self {
        Self { pages: Vec::new() }
    }

    fn add_page(&mut self, content: Vec<u8>) {
        self.pages.push(content);
    }

    fn page_object_id(index: usize) -> usize {
        6 + index * 2
    }

    fn finish(self, title: &str) -> Vec<u8> {
        let mut pdf: Vec<u8> = Vec::new();
        let mut offsets: Vec<usize> = Vec::new();

        pdf.extend_from_slice(b"%PDF-1.4\n%\xE2\xE3\xCF\xD3\n");

        offsets.push(pdf.len());
        put(&mut pdf, "1 0 obj\n<< /Type /Catalog /Pages 2 0 R >>\nendobj\n");

        let kids: Vec<String> = (0..self.pages.len())
            .map(|i| format!("{} 0 R", Self::page_object_id(i)))
            .collect();
        offsets.push(pdf.len());
        put(
            &mut pdf,
            &format!(
                "2 0 obj\n<< /Type /Pages /Kids [{}] /Count {} >>\nendobj\n",
                kids.join(" "),
                self.pages.len()
            ),
        );

        offsets.push(pdf.len());
        put(
            &mut pdf,
            "3 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica-Bold \
             /Encoding /WinAnsiEncoding >>\nendobj\n",
        );

        offsets.push(pdf.len());
        put(
            &mut pdf,
            "4 0 obj\n<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica \
             /Encoding /WinAnsiEncoding >>\nendobj\n",
        );

        offsets.push(pdf.len());
        put(&mut pdf, "5 0 obj\n<< /Title (");
        for b in to_win_ansi(title) {
            if matches!(b, b'\\' | b'(' | b')') {
                pdf.push(b'\\');
            }
            pdf.push(b);
        }
        put(&mut pdf, ") /Producer (WhatsFlow) >>\nendobj\n");

        for (i, content) in self.pages.iter().enumerate() {
            let page_id = Self::page_object_id(i);
            let content_id = page_id + 1;

            offsets.push(pdf.len());
            put(
                &mut pdf,
                &format!(
                    "{page_id} 0 obj\n<< /Type /Page /Parent 2 0 R \
                     /MediaBox [0 0 {PAGE_WIDTH:.0} {PAGE_HEIGHT:.0}] \
                     /Contents {content_id} 0 R \
                     /Resources << /Font << /F1 3 0 R /F2 4 0 R >> >> >>\nendobj\n"
                ),
            );

            offsets.push(pdf.len());
            put(
                &mut pdf,
                &format!("{content_id} 0 obj\n<< /Length {} >>\nstream\n", content.len()),
            );
            pdf.extend_from_slice(content);
            put(&mut pdf, "\nendstream\nendobj\n");
        }

        let xref_offset = pdf.len();
        let size = offsets.len() + 1;
        put(&mut pdf, &format!("xref\n0 {size}\n0000000000 65535 f \n"));
        for offset in &offsets {
            put(&mut pdf, &format!("{offset:010} 00000 n \n"));
        }
        put(
            &mut pdf,
            &format!("trailer\n<< /Size {size} /Root 1 0 R /Info 5 0 R >>\n"),
        );
        put(&mut pdf, &format!("startxref\n{xref_offset}\n%%EOF\n"));

        pdf
    }
}
