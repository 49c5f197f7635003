//! Word-processing (DOCX) encoder

use super::encoder::{SubmissionEncoder, REPORT_TITLE};
use super::format::ExportFormat;
use super::schema::{headers, prepare_rows, DateStyle, PAGE_COLUMNS};
use crate::domain::{EncodingError, Submission};
use docx_rs::{Docx, Paragraph, Run, Table, TableCell, TableRow};
use std::io::Cursor;

// docx sizes are half-points
const TITLE_SIZE: usize = 40;
const CELL_SIZE: usize = 20;

/// Title heading followed by a six-column table, header row first
#[derive(Debug, Clone, Copy, Default)]
pub struct WordEncoder;

impl SubmissionEncoder for WordEncoder {
    fn format(&self) -> ExportFormat {
        ExportFormat::Word
    }

    fn file_name(&self) -> &'static str {
        "submissions.docx"
    }

    fn mime_type(&self) -> &'static str {
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
    }

    fn encode(&self, records: &[Submission]) -> Result<Vec<u8>, EncodingError> {
        let rows = prepare_rows(records)?;

        let title = Run::new().add_text(REPORT_TITLE).bold().size(TITLE_SIZE);
        let mut docx = Docx::new()
            .add_paragraph(Paragraph::new().style("Title").add_run(title))
            .add_paragraph(Paragraph::new());

        let mut table_rows = Vec::with_capacity(rows.len() + 1);
        let header_cells: Vec<TableCell> = headers(&PAGE_COLUMNS)
            .into_iter()
            .map(|h| cell(Run::new().add_text(h).bold()))
            .collect();
        table_rows.push(TableRow::new(header_cells));

        for row in &rows {
            let cells: Vec<TableCell> = row
                .cells(&PAGE_COLUMNS, DateStyle::Day)
                .iter()
                .map(|value| cell(Run::new().add_text(value.as_ref())))
                .collect();
            table_rows.push(TableRow::new(cells));
        }

        docx = docx.add_table(Table::new(table_rows));

        let mut buf = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut buf)
            .map_err(|e| EncodingError::writer("word", e))?;

        Ok(buf.into_inner())
    }
}

fn cell(run: Run) -> TableCell {
    TableCell::new().add_paragraph(Paragraph::new().add_run(run.size(CELL_SIZE)))
}
