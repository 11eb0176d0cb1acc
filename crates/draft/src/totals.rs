//! Derived totals.
//!
//! Pure functions of the current item list, recomputed fresh on every query
//! and never cached, so there is no staleness to invalidate.

use serde::{Deserialize, Serialize};

use crate::line_item::LineItem;

/// Fixed tax rate applied to the subtotal. Not configurable.
pub const TAX_RATE: f64 = 0.10;

pub fn line_total(item: &LineItem) -> f64 {
    item.quantity * item.unit_price
}

/// Sum of line totals; 0.0 for an empty draft.
pub fn subtotal(items: &[LineItem]) -> f64 {
    items.iter().map(line_total).sum()
}

pub fn tax(items: &[LineItem]) -> f64 {
    subtotal(items) * TAX_RATE
}

pub fn total(items: &[LineItem]) -> f64 {
    subtotal(items) + tax(items)
}

/// Subtotal, tax and grand total bundled for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Totals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl Totals {
    pub fn compute(items: &[LineItem]) -> Self {
        let subtotal = subtotal(items);
        let tax = subtotal * TAX_RATE;
        Self {
            subtotal,
            tax,
            total: subtotal + tax,
        }
    }
}
