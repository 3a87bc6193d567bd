//! Lenient parsing for monetary text inputs.

use rust_decimal::Decimal;

/// Parses a monetary text field, substituting zero on failure.
///
/// Form fields for shipping cost and handling fee arrive as free text and
/// are frequently empty. This is a total function: whitespace is trimmed,
/// anything that does not parse as a decimal becomes zero, and a parsed
/// value is used as-is. Negative values are deliberately accepted so a fee
/// credit can be expressed; only unparsable input degrades.
#[must_use]
pub fn parse_money_or_zero(text: &str) -> Decimal {
    text.trim().parse().unwrap_or(Decimal::ZERO)
}
