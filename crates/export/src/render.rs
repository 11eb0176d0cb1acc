//! The fixed invoice template.

use tracing::info;

use invoicekit_core::format_currency;
use invoicekit_draft::{Draft, LineItem, Totals, line_total};

use crate::pdf::{Font, PAGE_HEIGHT, PAGE_WIDTH, PdfWriter, text_width};

/// Fixed name of the emitted file.
pub const INVOICE_FILENAME: &str = "invoice.pdf";

const MARGIN: f64 = 54.0;
const BOTTOM: f64 = PAGE_HEIGHT - 72.0;

const TITLE_SIZE: f64 = 18.0;
const TITLE_Y: f64 = 72.0;

const BODY_SIZE: f64 = 11.0;
const META_Y: f64 = 110.0;
const META_LINE_HEIGHT: f64 = 16.0;

/// Table start: fixed offset below the metadata block.
const TABLE_Y: f64 = 196.0;
const ROW_SIZE: f64 = 10.0;
const ROW_HEIGHT: f64 = 15.0;

const COL_DESCRIPTION: f64 = MARGIN;
const COL_QUANTITY: f64 = 300.0;
const COL_UNIT_PRICE: f64 = 380.0;
const COL_TOTAL: f64 = 470.0;

/// A produced document ready for host-side delivery.
#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Render a validated draft into the single-template invoice PDF.
///
/// Callers validate first; the renderer assumes a well-formed draft and
/// cannot fail (all output goes to memory). Rendering is a pure function of
/// the draft, so exporting twice without edits yields identical bytes.
pub fn export_invoice(draft: &Draft) -> GeneratedDocument {
    let totals = Totals::compute(&draft.items);
    let mut writer = PdfWriter::new();
    writer.add_page();

    let title = "Invoice";
    writer.text(
        title,
        (PAGE_WIDTH - text_width(title, TITLE_SIZE)) / 2.0,
        TITLE_Y,
        TITLE_SIZE,
        Font::HelveticaBold,
    );

    let metadata = [
        ("Company", draft.header.company_name.as_str()),
        ("Customer", draft.header.customer_name.as_str()),
        ("Invoice Number", draft.header.invoice_number.as_str()),
        ("Date", draft.header.invoice_date.as_str()),
    ];
    for (i, (label, value)) in metadata.iter().enumerate() {
        writer.text(
            &format!("{label}: {value}"),
            MARGIN,
            META_Y + i as f64 * META_LINE_HEIGHT,
            BODY_SIZE,
            Font::Helvetica,
        );
    }

    let mut y = TABLE_Y;
    table_header(&mut writer, y);
    y += ROW_HEIGHT;
    for item in &draft.items {
        if y > BOTTOM {
            writer.add_page();
            y = MARGIN;
            table_header(&mut writer, y);
            y += ROW_HEIGHT;
        }
        table_row(&mut writer, item, y);
        y += ROW_HEIGHT;
    }

    // Totals block: placed after wherever the table ended, right-aligned.
    y += ROW_HEIGHT;
    if y > BOTTOM {
        writer.add_page();
        y = MARGIN;
    }
    let lines = [
        ("Subtotal", totals.subtotal, Font::Helvetica),
        ("Tax (10%)", totals.tax, Font::Helvetica),
        ("Total", totals.total, Font::HelveticaBold),
    ];
    for (label, amount, font) in lines {
        let line = format!("{label}: {}", format_currency(amount));
        writer.text(
            &line,
            PAGE_WIDTH - MARGIN - text_width(&line, BODY_SIZE),
            y,
            BODY_SIZE,
            font,
        );
        y += META_LINE_HEIGHT;
    }

    let pages = writer.page_count();
    let bytes = writer.finish();
    info!(
        filename = INVOICE_FILENAME,
        pages,
        size = bytes.len(),
        items = draft.items.len(),
        "invoice rendered"
    );
    GeneratedDocument {
        filename: INVOICE_FILENAME.to_string(),
        bytes,
    }
}

fn table_header(writer: &mut PdfWriter, y: f64) {
    writer.text("Description", COL_DESCRIPTION, y, ROW_SIZE, Font::HelveticaBold);
    writer.text("Quantity", COL_QUANTITY, y, ROW_SIZE, Font::HelveticaBold);
    writer.text("Unit Price", COL_UNIT_PRICE, y, ROW_SIZE, Font::HelveticaBold);
    writer.text("Total", COL_TOTAL, y, ROW_SIZE, Font::HelveticaBold);
}

fn table_row(writer: &mut PdfWriter, item: &LineItem, y: f64) {
    writer.text(&item.description, COL_DESCRIPTION, y, ROW_SIZE, Font::Helvetica);
    writer.text(&item.quantity.to_string(), COL_QUANTITY, y, ROW_SIZE, Font::Helvetica);
    writer.text(
        &format_currency(item.unit_price),
        COL_UNIT_PRICE,
        y,
        ROW_SIZE,
        Font::Helvetica,
    );
    writer.text(
        &format_currency(line_total(item)),
        COL_TOTAL,
        y,
        ROW_SIZE,
        Font::Helvetica,
    );
}
