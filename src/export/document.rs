//! Paginated document (PDF) serialization.
//!
//! Renders a table onto landscape A4 pages: a title and generation line on
//! the first page, a repeated colored header band, striped body rows with
//! numeric cells right-aligned, an optional totals block, and a
//! "Page X of N" footer on every page.
//!
//! Unlike the other two formats, an empty table is an error here: an empty
//! printable report is useless, so the caller is told there is no data.

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rect, Rgb,
};

use crate::error::{EngineError, EngineResult};
use crate::models::{Cell, Table};

use super::{ExportFormat, ExportOptions, export_failed};

const PAGE_WIDTH: f32 = 297.0;
const PAGE_HEIGHT: f32 = 210.0;
const MARGIN: f32 = 14.0;
const ROW_HEIGHT: f32 = 7.0;
const CELL_PADDING: f32 = 2.0;
const BOTTOM_LIMIT: f32 = 20.0;
const FOOTER_Y: f32 = 10.0;

const TITLE_SIZE: f32 = 16.0;
const META_SIZE: f32 = 10.0;
const BODY_SIZE: f32 = 9.0;
const TOTALS_SIZE: f32 = 11.0;
const FOOTER_SIZE: f32 = 8.0;

// Conversion factor from points to millimeters.
const PT_TO_MM: f32 = 0.352_778;

/// Serializes a table as a paginated landscape PDF document.
///
/// # Errors
///
/// Returns [`EngineError::NoExportData`] for an empty table and
/// [`EngineError::ExportFailed`] if the underlying PDF writer fails.
pub fn write_document(table: &Table, options: &ExportOptions) -> EngineResult<Vec<u8>> {
    if table.is_empty() {
        return Err(EngineError::NoExportData {
            format: ExportFormat::Document.label().to_string(),
        });
    }

    let (doc, first_page, first_layer) = PdfDocument::new(
        options.title.clone(),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Layer 1",
    );
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|err| export_failed(ExportFormat::Document, err))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|err| export_failed(ExportFormat::Document, err))?;

    let mut pages = vec![(first_page, first_layer)];
    let mut layer = doc.get_page(first_page).get_layer(first_layer);

    layer.set_fill_color(text_color());
    layer.use_text(
        options.title.clone(),
        TITLE_SIZE,
        Mm(MARGIN),
        Mm(PAGE_HEIGHT - 15.0),
        &bold,
    );
    let generated = format!(
        "Generated: {}",
        options.generated_at.format("%Y-%m-%d %H:%M UTC")
    );
    layer.use_text(generated, META_SIZE, Mm(MARGIN), Mm(PAGE_HEIGHT - 22.0), &font);

    let column_width = (PAGE_WIDTH - 2.0 * MARGIN) / table.column_count() as f32;

    // `y` tracks the bottom edge of the current row band.
    let mut y = PAGE_HEIGHT - 35.0;
    draw_header_row(&layer, table, &bold, column_width, y);
    y -= ROW_HEIGHT;

    for (index, row) in table.rows().iter().enumerate() {
        if y < BOTTOM_LIMIT {
            let (page, layer_index) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
            pages.push((page, layer_index));
            layer = doc.get_page(page).get_layer(layer_index);
            y = PAGE_HEIGHT - 20.0;
            draw_header_row(&layer, table, &bold, column_width, y);
            y -= ROW_HEIGHT;
        }
        draw_body_row(&layer, row, &font, column_width, y, index % 2 == 1);
        y -= ROW_HEIGHT;
    }

    if !options.totals.is_empty() {
        y -= 5.0;
        for total in &options.totals {
            if y < BOTTOM_LIMIT {
                let (page, layer_index) =
                    doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
                pages.push((page, layer_index));
                layer = doc.get_page(page).get_layer(layer_index);
                y = PAGE_HEIGHT - 20.0;
            }
            layer.set_fill_color(text_color());
            layer.use_text(
                format!("{}: {}", total.label, total.value),
                TOTALS_SIZE,
                Mm(MARGIN),
                Mm(y),
                &bold,
            );
            y -= ROW_HEIGHT;
        }
    }

    let page_count = pages.len();
    for (number, (page, layer_index)) in pages.iter().enumerate() {
        let footer_layer = doc.get_page(*page).get_layer(*layer_index);
        let text = format!("Page {} of {}", number + 1, page_count);
        let x = (PAGE_WIDTH - text_width_mm(&text, FOOTER_SIZE)) / 2.0;
        footer_layer.set_fill_color(text_color());
        footer_layer.use_text(text, FOOTER_SIZE, Mm(x), Mm(FOOTER_Y), &font);
    }

    doc.save_to_bytes()
        .map_err(|err| export_failed(ExportFormat::Document, err))
}

/// Draws the colored header band with bold white column names.
fn draw_header_row(
    layer: &PdfLayerReference,
    table: &Table,
    bold: &IndirectFontRef,
    column_width: f32,
    y: f32,
) {
    layer.set_fill_color(header_fill());
    layer.add_rect(band_rect(y));
    layer.set_fill_color(header_text_color());
    for (index, name) in table.columns().iter().enumerate() {
        let x = MARGIN + index as f32 * column_width + CELL_PADDING;
        layer.use_text(name.clone(), BODY_SIZE, Mm(x), Mm(y + 2.0), bold);
    }
}

/// Draws one body row, shading every other row for readability.
fn draw_body_row(
    layer: &PdfLayerReference,
    row: &[Cell],
    font: &IndirectFontRef,
    column_width: f32,
    y: f32,
    shaded: bool,
) {
    if shaded {
        layer.set_fill_color(stripe_fill());
        layer.add_rect(band_rect(y));
    }
    layer.set_fill_color(text_color());
    for (index, cell) in row.iter().enumerate() {
        let text = cell.to_string();
        let x = if cell.is_numeric() {
            // Right-align numeric cells against the cell's right edge.
            MARGIN + (index + 1) as f32 * column_width
                - CELL_PADDING
                - text_width_mm(&text, BODY_SIZE)
        } else {
            MARGIN + index as f32 * column_width + CELL_PADDING
        };
        layer.use_text(text, BODY_SIZE, Mm(x), Mm(y + 2.0), font);
    }
}

/// A full-width filled band for a row whose bottom edge sits at `y`.
fn band_rect(y: f32) -> Rect {
    Rect::new(
        Mm(MARGIN),
        Mm(y),
        Mm(PAGE_WIDTH - MARGIN),
        Mm(y + ROW_HEIGHT),
    )
    .with_mode(PaintMode::Fill)
}

// Approximate width of builtin Helvetica text: the average glyph is about
// half an em wide.
fn text_width_mm(text: &str, font_size: f32) -> f32 {
    text.chars().count() as f32 * font_size * 0.5 * PT_TO_MM
}

fn header_fill() -> Color {
    Color::Rgb(Rgb::new(59.0 / 255.0, 130.0 / 255.0, 246.0 / 255.0, None))
}

fn header_text_color() -> Color {
    Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None))
}

fn stripe_fill() -> Color {
    Color::Rgb(Rgb::new(245.0 / 255.0, 247.0 / 255.0, 250.0 / 255.0, None))
}

fn text_color() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}
