//! Billable line items.

use serde::{Deserialize, Serialize};

use invoicekit_core::LineItemId;

/// One billable row of the draft.
///
/// Quantity and unit price may be transiently invalid while the user types
/// (zero quantity, negative price); validity is enforced only at export
/// time, never at edit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: LineItemId,
    pub description: String,
    pub quantity: f64,
    pub unit_price: f64,
}

impl LineItem {
    /// A fresh, empty item as appended by the add-row control.
    pub fn empty() -> Self {
        Self {
            id: LineItemId::new(),
            description: String::new(),
            quantity: 0.0,
            unit_price: 0.0,
        }
    }

    pub(crate) fn apply(&mut self, patch: LineItemPatch) {
        match patch {
            LineItemPatch::Description(description) => self.description = description,
            LineItemPatch::Quantity(quantity) => self.quantity = quantity,
            LineItemPatch::UnitPrice(unit_price) => self.unit_price = unit_price,
        }
    }
}

/// A single-field edit applied to an existing item by id.
///
/// The item's other fields and its position in the draft are left unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineItemPatch {
    Description(String),
    Quantity(f64),
    UnitPrice(f64),
}
