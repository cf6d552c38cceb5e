//! Discounts
//!
//! Percentage discounts that can be chained onto an invoice's base price.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;

use crate::pricing::PricingError;

pub mod chain;

/// Selects a discount by kind; the configured [`DiscountRates`] supply its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiscountKind {
    /// Discount for a customer's first purchase.
    FirstPurchase,

    /// Discount on large purchases, above a threshold.
    BulkPurchase,

    /// Holiday season discount.
    Seasonal,

    /// Discount for family members of existing customers.
    Family,
}

impl DiscountKind {
    /// Build the strategy for this kind using the given rates.
    pub fn strategy(self, rates: &DiscountRates) -> DiscountStrategy {
        match self {
            DiscountKind::FirstPurchase => DiscountStrategy::FirstPurchase(rates.first_purchase),
            DiscountKind::BulkPurchase => DiscountStrategy::BulkPurchase {
                percentage: rates.bulk_purchase,
                threshold: rates.bulk_purchase_threshold,
            },
            DiscountKind::Seasonal => DiscountStrategy::Seasonal(rates.seasonal),
            DiscountKind::Family => DiscountStrategy::Family(rates.family),
        }
    }
}

/// Percentages (and the bulk threshold) used to build discount strategies.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscountRates {
    /// First purchase discount
    pub first_purchase: Percentage,

    /// Bulk purchase discount
    pub bulk_purchase: Percentage,

    /// Minimum price, inclusive, before the bulk purchase discount applies
    pub bulk_purchase_threshold: Decimal,

    /// Seasonal discount
    pub seasonal: Percentage,

    /// Family discount
    pub family: Percentage,
}

impl DiscountRates {
    /// Resolve an ordered selection of kinds into strategies, keeping the order.
    pub fn strategies(&self, kinds: &[DiscountKind]) -> Vec<DiscountStrategy> {
        kinds.iter().map(|kind| kind.strategy(self)).collect()
    }
}

impl Default for DiscountRates {
    fn default() -> Self {
        Self {
            first_purchase: Percentage::from(Decimal::new(3, 2)),
            bulk_purchase: Percentage::from(Decimal::new(5, 2)),
            bulk_purchase_threshold: Decimal::new(500, 0),
            seasonal: Percentage::from(Decimal::new(10, 2)),
            family: Percentage::from(Decimal::new(15, 2)),
        }
    }
}

/// A single discount rule.
///
/// Strategies are plain values: two strategies of the same kind and rate behave identically.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DiscountStrategy {
    /// Unconditional percentage off.
    FirstPurchase(Percentage),

    /// Percentage off, only once the price reaches the threshold.
    BulkPurchase {
        /// Discount percentage
        percentage: Percentage,

        /// Minimum price, inclusive
        threshold: Decimal,
    },

    /// Unconditional percentage off.
    Seasonal(Percentage),

    /// Unconditional percentage off.
    Family(Percentage),
}

impl DiscountStrategy {
    /// First purchase discount at the default rate (3%).
    pub fn first_purchase() -> Self {
        DiscountKind::FirstPurchase.strategy(&DiscountRates::default())
    }

    /// Bulk purchase discount at the default rate (5% from 500).
    pub fn bulk_purchase() -> Self {
        DiscountKind::BulkPurchase.strategy(&DiscountRates::default())
    }

    /// Seasonal discount at the default rate (10%).
    pub fn seasonal() -> Self {
        DiscountKind::Seasonal.strategy(&DiscountRates::default())
    }

    /// Family discount at the default rate (15%).
    pub fn family() -> Self {
        DiscountKind::Family.strategy(&DiscountRates::default())
    }

    /// The kind of this strategy.
    pub fn kind(&self) -> DiscountKind {
        match self {
            DiscountStrategy::FirstPurchase(_) => DiscountKind::FirstPurchase,
            DiscountStrategy::BulkPurchase { .. } => DiscountKind::BulkPurchase,
            DiscountStrategy::Seasonal(_) => DiscountKind::Seasonal,
            DiscountStrategy::Family(_) => DiscountKind::Family,
        }
    }

    /// The discount percentage.
    pub fn percentage(&self) -> Percentage {
        match *self {
            DiscountStrategy::FirstPurchase(percentage)
            | DiscountStrategy::BulkPurchase { percentage, .. }
            | DiscountStrategy::Seasonal(percentage)
            | DiscountStrategy::Family(percentage) => percentage,
        }
    }

    /// Whether the discount applies to a price.
    pub fn applies_to(&self, price: Decimal) -> bool {
        match self {
            DiscountStrategy::BulkPurchase { threshold, .. } => price >= *threshold,
            _ => true,
        }
    }

    /// Apply the discount to an unrounded price.
    ///
    /// Prices the discount does not apply to are returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the decimal arithmetic overflows.
    pub fn apply(&self, price: Decimal) -> Result<Decimal, PricingError> {
        if !self.applies_to(price) {
            return Ok(price);
        }

        percentage_off(price, self.percentage())
    }
}

/// Take a percentage off a price: `price - price * percentage`.
///
/// The result is not rounded.
///
/// # Errors
///
/// Returns [`PricingError::Overflow`] if the decimal arithmetic overflows.
pub fn percentage_off(price: Decimal, percentage: Percentage) -> Result<Decimal, PricingError> {
    let discount = price
        .checked_mul(fraction(percentage))
        .ok_or(PricingError::Overflow)?;

    price.checked_sub(discount).ok_or(PricingError::Overflow)
}

/// The percentage as a fraction, e.g. `0.15` for 15%.
pub(crate) fn fraction(percentage: Percentage) -> Decimal {
    percentage * Decimal::ONE // decimal_percentage doesn't expose the underlying Decimal
}
