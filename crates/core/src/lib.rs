//! `invoicekit-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the draft,
//! notification and export crates (no IO, no rendering concerns).

pub mod error;
pub mod id;
pub mod money;

pub use error::{DomainError, DomainResult};
pub use id::{LineItemId, NotificationId};
pub use money::format_currency;
