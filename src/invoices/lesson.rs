//! Lesson Invoice

use crate::{
    discounts::{DiscountStrategy, chain::DiscountChain},
    invoices::DiscountedLine,
    money::Money,
    pricing::{PricingError, non_negative_count, non_negative_price},
};

/// Invoice for a number of single lessons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LessonInvoice<'a> {
    line: DiscountedLine<'a>,
}

impl<'a> LessonInvoice<'a> {
    /// Product name shown for lesson invoices
    pub const PRODUCT_NAME: &'static str = "Single lessons";

    /// Create a new lesson invoice.
    ///
    /// `discounts` are applied in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidInput`] if `unit_price` or `quantity` is negative.
    pub fn new(
        unit_price: Money,
        quantity: i64,
        discounts: &'a [DiscountStrategy],
    ) -> Result<Self, PricingError> {
        let quantity = non_negative_count("quantity", quantity)?;

        non_negative_price("unit price", &unit_price)?;

        Ok(Self {
            line: DiscountedLine::new(unit_price, quantity, discounts),
        })
    }

    /// Price of a single lesson
    pub const fn unit_price(&self) -> &Money {
        &self.line.unit_price
    }

    /// Number of lessons
    pub const fn quantity(&self) -> u64 {
        self.line.quantity
    }

    /// Discounts, in application order
    pub const fn discounts(&self) -> DiscountChain<'a> {
        self.line.discounts
    }

    /// Base price: `unit_price * quantity`, rounded.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the price cannot be represented.
    pub fn undiscounted_price(&self) -> Result<Money, PricingError> {
        self.line.undiscounted_price()
    }

    /// Base price with every discount applied in order.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the price cannot be represented.
    pub fn total_price(&self) -> Result<Money, PricingError> {
        self.line.total_price(Self::PRODUCT_NAME)
    }
}
