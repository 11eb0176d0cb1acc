//! Currency display formatting.

/// Format an amount as currency with exactly two decimal places.
///
/// Used by the invoice template for unit prices, line totals and the totals
/// block. Quantities and prices are plain `f64`; amounts are rounded (not
/// truncated) to cents by the formatter.
pub fn format_currency(amount: f64) -> String {
    format!("${amount:.2}")
}
