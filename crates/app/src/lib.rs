//! Session wiring: the export trigger connecting the draft store, the
//! validator, the renderer and the notification queue.

pub mod session;
pub mod telemetry;

pub use session::InvoiceSession;
