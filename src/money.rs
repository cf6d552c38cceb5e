//! Money
//!
//! Every price this crate hands back is rounded here: two fractional digits,
//! midpoints rounded away from zero.

use rust_decimal::{Decimal, RoundingStrategy};
use rusty_money::iso::Currency;

use crate::pricing::PricingError;

/// A monetary amount in a two-decimal currency.
pub type Money = rusty_money::Money<'static, Currency>;

/// Fractional digits carried by every rounded amount.
pub const SCALE: u32 = 2;

/// Round a decimal to two fractional digits, half-up.
///
/// The result always has a scale of exactly two, so `550` becomes `550.00`.
pub fn round(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(SCALE);

    rounded
}

/// Round a decimal and turn it into money of the given currency.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the rounded amount does not fit in minor units.
pub fn to_money(value: Decimal, currency: &'static Currency) -> Result<Money, PricingError> {
    let rounded = round(value);

    // `rescale` keeps a smaller scale when the mantissa would not fit.
    if rounded.scale() != SCALE {
        return Err(PricingError::Overflow);
    }

    let minor = i64::try_from(rounded.mantissa()).map_err(|_err| PricingError::Overflow)?;

    Ok(Money::from_minor(minor, currency))
}

/// Exact decimal amount of a money value, with a scale of two.
pub fn amount(money: &Money) -> Decimal {
    Decimal::new(money.to_minor_units(), SCALE)
}
