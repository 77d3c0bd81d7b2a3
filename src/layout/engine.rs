//! Layout engine: places headings, tables and notes on the page

use tracing::{debug, warn};

use crate::form::{Field, FieldSet};

use super::config::{LayoutSpec, NotesMode};
use super::metrics::{text_width, wrap_words};
use super::tables::{RECIPIENT_ROWS, SENDER_RECORD};
use super::types::{DrawOp, FontFace, PageLayout, Rect};

/// A label/value pair ready to be drawn as one table row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableRow<'a> {
    pub label: &'a str,
    pub value: &'a str,
}

/// Recipient rows with their current values, top to bottom
pub fn recipient_rows(fields: &FieldSet) -> Vec<TableRow<'_>> {
    RECIPIENT_ROWS
        .iter()
        .map(|row| TableRow {
            label: row.label,
            value: fields.get(row.field),
        })
        .collect()
}

/// Sender rows; never influenced by form input
pub fn sender_rows() -> Vec<TableRow<'static>> {
    SENDER_RECORD
        .iter()
        .map(|entry| TableRow {
            label: entry.label,
            value: entry.value,
        })
        .collect()
}

/// Compute the full page for a field snapshot
pub fn compute(fields: &FieldSet, geometry: &LayoutSpec, notes_mode: NotesMode) -> PageLayout {
    let mut page = PageLayout::new(geometry.page_width, geometry.page_height);

    page.push(DrawOp::Background(Rect::new(
        0.0,
        0.0,
        geometry.page_width,
        geometry.page_height,
    )));

    for heading in &geometry.headings {
        page.push_text(
            heading.text,
            heading.x,
            geometry.from_top(heading.top),
            heading.size,
            FontFace::Bold,
        );
    }

    let recipient = recipient_rows(fields);
    layout_table(&mut page, geometry, geometry.recipient_start_y(), &recipient);
    layout_table(&mut page, geometry, geometry.sender_start_y(), &sender_rows());
    layout_notes(&mut page, geometry, fields.get(Field::Notes), notes_mode);

    debug!(ops = page.ops.len(), "page layout computed");
    page
}

/// Lay out a two-column bordered table, one row per entry
fn layout_table(page: &mut PageLayout, geometry: &LayoutSpec, start_y: f64, rows: &[TableRow<'_>]) {
    let value_x = geometry.table_x + geometry.label_width;

    for (i, row) in rows.iter().enumerate() {
        let y = geometry.row_y(start_y, i);
        let text_y = y + geometry.cell_inset_y;

        page.push_stroke_rect(
            Rect::new(geometry.table_x, y, geometry.label_width, geometry.row_height),
            geometry.border_width,
        );
        page.push_text(
            row.label,
            geometry.table_x + geometry.cell_inset_x,
            text_y,
            geometry.cell_font_size,
            FontFace::Bold,
        );

        page.push_stroke_rect(
            Rect::new(value_x, y, geometry.value_width, geometry.row_height),
            geometry.border_width,
        );
        page.push_text(
            row.value,
            value_x + geometry.cell_inset_x,
            text_y,
            geometry.cell_font_size,
            FontFace::Bold,
        );
    }
}

fn layout_notes(page: &mut PageLayout, geometry: &LayoutSpec, notes: &str, mode: NotesMode) {
    let box_y = geometry.notes_y();
    page.push_stroke_rect(
        Rect::new(geometry.table_x, box_y, geometry.table_width(), geometry.notes_height),
        geometry.border_width,
    );

    let x = geometry.table_x + geometry.cell_inset_x;
    let first_baseline = box_y + geometry.notes_text_rise;
    let size = geometry.cell_font_size;
    let max_width = geometry.notes_text_width();

    match mode {
        NotesMode::SingleLine => {
            let line: String = notes
                .chars()
                .map(|c| if c.is_control() { ' ' } else { c })
                .collect();
            let width = text_width(&line, size);
            if width > max_width {
                warn!(width, max_width, "notes run past the edge of the notes box");
            }
            page.push_text(line, x, first_baseline, size, FontFace::Regular);
        }
        NotesMode::Wrap => {
            let lines = wrap_words(notes, size, max_width);
            let last_baseline = box_y + geometry.cell_inset_y;
            for (i, line) in lines.into_iter().enumerate() {
                let y = first_baseline - i as f64 * geometry.notes_line_height;
                if y < last_baseline {
                    warn!(line = i, "wrapped notes run past the bottom of the notes box");
                }
                page.push_text(line, x, y, size, FontFace::Regular);
            }
        }
    }
}
