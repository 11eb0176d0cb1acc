//! Headless demo driver: build a sample draft, export it, write the PDF to
//! the current directory. Delivery to durable storage is the host's job;
//! the libraries themselves never touch the filesystem.

use std::fs;

use anyhow::Context;
use chrono::Utc;

use invoicekit_app::{InvoiceSession, telemetry};
use invoicekit_draft::{HeaderField, LineItemPatch};
use invoicekit_notify::Sweeper;

fn main() -> anyhow::Result<()> {
    telemetry::init();

    let mut session = InvoiceSession::new();
    let sweeper = Sweeper::spawn(session.notifications());

    let store = session.store_mut();
    store.set_header_field(HeaderField::CompanyName, "Acme Corp");
    store.set_header_field(HeaderField::CustomerName, "Bob's Hardware");
    store.set_header_field(HeaderField::InvoiceNumber, "INV-001");
    store.set_header_field(
        HeaderField::InvoiceDate,
        Utc::now().date_naive().to_string(),
    );

    let widget = store.add_line_item();
    store.update_line_item(widget, LineItemPatch::Description("Widget".into()));
    store.update_line_item(widget, LineItemPatch::Quantity(2.0));
    store.update_line_item(widget, LineItemPatch::UnitPrice(10.0));

    let assembly = store.add_line_item();
    store.update_line_item(assembly, LineItemPatch::Description("Assembly".into()));
    store.update_line_item(assembly, LineItemPatch::Quantity(1.0));
    store.update_line_item(assembly, LineItemPatch::UnitPrice(45.50));

    let document = session.export().context("export failed")?;
    fs::write(&document.filename, &document.bytes)
        .with_context(|| format!("writing {}", document.filename))?;
    println!(
        "wrote {} ({} bytes)",
        document.filename,
        document.bytes.len()
    );

    sweeper.shutdown();
    Ok(())
}
