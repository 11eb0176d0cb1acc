//! Invoice document export: a minimal PDF writer plus the single fixed
//! invoice template.

pub mod pdf;
pub mod render;

pub use render::{GeneratedDocument, INVOICE_FILENAME, export_invoice};
