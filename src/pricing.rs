//! Pricing

use rust_decimal::Decimal;
use thiserror::Error;

use crate::money::{Money, amount, to_money};

/// Errors that can occur while pricing an invoice.
#[derive(Debug, Error, PartialEq)]
pub enum PricingError {
    /// A count or price was negative.
    #[error("invalid {field}: {value} is negative")]
    InvalidInput {
        /// Name of the rejected input
        field: &'static str,

        /// The rejected value
        value: Decimal,
    },

    /// Decimal arithmetic or minor unit conversion overflowed.
    #[error("monetary amount overflowed")]
    Overflow,
}

/// Calculates the base price: `unit_price * quantity`, rounded.
///
/// # Errors
///
/// - [`PricingError::InvalidInput`]: `quantity` or `unit_price` is negative.
/// - [`PricingError::Overflow`]: the total cannot be represented.
pub fn base_price(quantity: i64, unit_price: &Money) -> Result<Money, PricingError> {
    let quantity = non_negative_count("quantity", quantity)?;

    non_negative_price("unit price", unit_price)?;

    line_total(quantity, unit_price)
}

/// Price of `quantity` units, for inputs that were validated on construction.
pub(crate) fn line_total(quantity: u64, unit_price: &Money) -> Result<Money, PricingError> {
    to_money(multiply(amount(unit_price), quantity)?, unit_price.currency())
}

/// Unrounded `value * quantity`.
pub(crate) fn multiply(value: Decimal, quantity: u64) -> Result<Decimal, PricingError> {
    value
        .checked_mul(Decimal::from(quantity))
        .ok_or(PricingError::Overflow)
}

/// Reject negative counts.
pub(crate) fn non_negative_count(field: &'static str, count: i64) -> Result<u64, PricingError> {
    u64::try_from(count).map_err(|_err| PricingError::InvalidInput {
        field,
        value: Decimal::from(count),
    })
}

/// Reject negative prices.
pub(crate) fn non_negative_price(field: &'static str, price: &Money) -> Result<(), PricingError> {
    let value = amount(price);

    if value < Decimal::ZERO {
        return Err(PricingError::InvalidInput { field, value });
    }

    Ok(())
}
