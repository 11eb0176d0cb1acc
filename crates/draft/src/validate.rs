//! Export-time validation: fixed rule order, first failure wins.

use invoicekit_core::{DomainError, DomainResult};

use crate::header::InvoiceHeader;
use crate::line_item::LineItem;

/// Validate a draft for export.
///
/// Rules run in a fixed order and the first failing rule's message is
/// returned; the export flow surfaces that message to the user and aborts.
/// Item rules run per item in insertion order, sub-checks in the order
/// description, quantity, unit price.
pub fn validate(header: &InvoiceHeader, items: &[LineItem]) -> DomainResult<()> {
    if header.company_name.trim().is_empty() {
        return Err(DomainError::validation("Company name is required"));
    }
    if header.customer_name.trim().is_empty() {
        return Err(DomainError::validation("Customer name is required"));
    }
    if header.invoice_number.trim().is_empty() {
        return Err(DomainError::validation("Invoice number is required"));
    }
    if header.invoice_date.is_empty() {
        return Err(DomainError::validation("Invoice date is required"));
    }
    if items.is_empty() {
        return Err(DomainError::validation("At least one item is required"));
    }
    for item in items {
        if item.description.trim().is_empty() {
            return Err(DomainError::validation("All items must have a description"));
        }
        // NaN satisfies no comparison, so it must fail the rule explicitly.
        if item.quantity.is_nan() || item.quantity <= 0.0 {
            return Err(DomainError::validation(
                "All items must have a quantity greater than 0",
            ));
        }
        if item.unit_price.is_nan() || item.unit_price < 0.0 {
            return Err(DomainError::validation(
                "All items must have a unit price of 0 or more",
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use invoicekit_core::LineItemId;

    fn filled_header() -> InvoiceHeader {
        InvoiceHeader {
            company_name: "Acme".to_string(),
            customer_name: "Bob".to_string(),
            invoice_number: "INV-001".to_string(),
            invoice_date: "2024-01-01".to_string(),
        }
    }

    fn valid_item() -> LineItem {
        LineItem {
            id: LineItemId::new(),
            description: "Widget".to_string(),
            quantity: 2.0,
            unit_price: 10.0,
        }
    }

    fn reason(result: DomainResult<()>) -> String {
        result.unwrap_err().reason().to_string()
    }

    #[test]
    fn valid_draft_passes() {
        assert_eq!(validate(&filled_header(), &[valid_item()]), Ok(()));
    }

    #[test]
    fn first_rule_wins_when_several_fail() {
        // Company and customer both missing: company is reported.
        let header = InvoiceHeader {
            company_name: String::new(),
            customer_name: String::new(),
            ..filled_header()
        };
        assert_eq!(
            reason(validate(&header, &[valid_item()])),
            "Company name is required"
        );
    }

    #[test]
    fn whitespace_only_header_fields_fail() {
        let header = InvoiceHeader {
            customer_name: "   ".to_string(),
            ..filled_header()
        };
        assert_eq!(
            reason(validate(&header, &[valid_item()])),
            "Customer name is required"
        );
    }

    #[test]
    fn each_header_rule_has_its_message() {
        let mut header = filled_header();
        header.invoice_number.clear();
        assert_eq!(
            reason(validate(&header, &[valid_item()])),
            "Invoice number is required"
        );

        let mut header = filled_header();
        header.invoice_date.clear();
        assert_eq!(
            reason(validate(&header, &[valid_item()])),
            "Invoice date is required"
        );
    }

    #[test]
    fn empty_item_list_is_rejected() {
        assert_eq!(
            reason(validate(&filled_header(), &[])),
            "At least one item is required"
        );
    }

    #[test]
    fn item_sub_checks_run_in_order() {
        // Description missing trumps the also-invalid quantity.
        let mut item = valid_item();
        item.description = "  ".to_string();
        item.quantity = 0.0;
        assert_eq!(
            reason(validate(&filled_header(), &[item])),
            "All items must have a description"
        );

        let mut item = valid_item();
        item.quantity = 0.0;
        item.unit_price = -1.0;
        assert_eq!(
            reason(validate(&filled_header(), &[item])),
            "All items must have a quantity greater than 0"
        );

        let mut item = valid_item();
        item.unit_price = -0.01;
        assert_eq!(
            reason(validate(&filled_header(), &[item])),
            "All items must have a unit price of 0 or more"
        );
    }

    #[test]
    fn first_invalid_item_wins() {
        let mut bad = valid_item();
        bad.quantity = 0.0;
        let mut worse = valid_item();
        worse.description.clear();

        // The earlier item's failure is reported even though the later one
        // fails an earlier sub-check.
        assert_eq!(
            reason(validate(&filled_header(), &[bad, worse])),
            "All items must have a quantity greater than 0"
        );
    }

    #[test]
    fn nan_quantity_fails_the_quantity_rule() {
        // Reachable through the store: edits are unvalidated until export.
        let mut item = valid_item();
        item.quantity = f64::NAN;
        assert_eq!(
            reason(validate(&filled_header(), &[item])),
            "All items must have a quantity greater than 0"
        );
    }

    #[test]
    fn nan_unit_price_fails_the_price_rule() {
        let mut item = valid_item();
        item.unit_price = f64::NAN;
        assert_eq!(
            reason(validate(&filled_header(), &[item])),
            "All items must have a unit price of 0 or more"
        );
    }

    #[test]
    fn zero_unit_price_is_allowed() {
        let mut item = valid_item();
        item.unit_price = 0.0;
        assert_eq!(validate(&filled_header(), &[item]), Ok(()));
    }
}
