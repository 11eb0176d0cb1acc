//! Invoice draft domain: the form state store, derived totals and
//! export-time validation.
//!
//! Everything here is deterministic and IO-free; the store's only side
//! channel is the change subscription consumed by presentation layers.

pub mod header;
pub mod line_item;
pub mod store;
pub mod totals;
pub mod validate;

pub use header::{HeaderField, InvoiceHeader};
pub use line_item::{LineItem, LineItemPatch};
pub use store::{Draft, DraftChanged, DraftStore, Subscription};
pub use totals::{TAX_RATE, Totals, line_total, subtotal, tax, total};
pub use validate::validate;
