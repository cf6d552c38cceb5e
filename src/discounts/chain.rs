//! Discount Chain
//!
//! Applies discounts one after another, each to the price left by the previous one. A bulk
//! purchase discount therefore sees the already-discounted price, and moving it within the
//! chain can change whether it applies.

use rust_decimal::Decimal;
use tracing::trace;

use crate::{
    discounts::{DiscountStrategy, fraction},
    money::{Money, amount, to_money},
    pricing::PricingError,
};

/// An ordered, borrowed sequence of discount strategies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountChain<'a> {
    strategies: &'a [DiscountStrategy],
}

impl<'a> DiscountChain<'a> {
    /// Create a chain over the given strategies, applied in slice order.
    pub const fn new(strategies: &'a [DiscountStrategy]) -> Self {
        Self { strategies }
    }

    /// A chain with no discounts.
    pub const fn empty() -> Self {
        Self { strategies: &[] }
    }

    /// The strategies, in application order.
    pub const fn strategies(&self) -> &'a [DiscountStrategy] {
        self.strategies
    }

    /// Number of strategies in the chain.
    pub const fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Check if the chain has no strategies.
    pub const fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Apply every strategy in order without rounding.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if a discount step overflows.
    pub fn apply_to(&self, price: Decimal) -> Result<Decimal, PricingError> {
        self.strategies
            .iter()
            .enumerate()
            .try_fold(price, |current, (step, strategy)| {
                let discounted = strategy.apply(current)?;

                trace!(
                    step,
                    kind = ?strategy.kind(),
                    percentage = %fraction(strategy.percentage()),
                    applied = strategy.applies_to(current),
                    price = %current,
                    discounted = %discounted,
                    "applied discount"
                );

                Ok(discounted)
            })
    }

    /// Apply every strategy in order, then round the result once.
    ///
    /// An empty chain returns the price unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if a discount step or the final rounding overflows.
    pub fn apply_all(&self, price: &Money) -> Result<Money, PricingError> {
        let discounted = self.apply_to(amount(price))?;

        to_money(discounted, price.currency())
    }
}

impl<'a> From<&'a [DiscountStrategy]> for DiscountChain<'a> {
    fn from(strategies: &'a [DiscountStrategy]) -> Self {
        Self::new(strategies)
    }
}

/// Apply `strategies` to `price` in order and round the result.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if a discount step or the final rounding overflows.
pub fn apply_all(price: &Money, strategies: &[DiscountStrategy]) -> Result<Money, PricingError> {
    DiscountChain::new(strategies).apply_all(price)
}
