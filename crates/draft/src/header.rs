//! Invoice header metadata.

use serde::{Deserialize, Serialize};

/// Invoice header fields, all free-form text edited directly by the form.
///
/// All fields start empty. The date is an ISO-format date string; it is
/// never parsed, only checked non-empty at export time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceHeader {
    pub company_name: String,
    pub customer_name: String,
    pub invoice_number: String,
    pub invoice_date: String,
}

/// Names one header attribute for [`crate::DraftStore::set_header_field`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderField {
    CompanyName,
    CustomerName,
    InvoiceNumber,
    InvoiceDate,
}

impl InvoiceHeader {
    pub(crate) fn set(&mut self, field: HeaderField, value: String) {
        match field {
            HeaderField::CompanyName => self.company_name = value,
            HeaderField::CustomerName => self.customer_name = value,
            HeaderField::InvoiceNumber => self.invoice_number = value,
            HeaderField::InvoiceDate => self.invoice_date = value,
        }
    }
}
