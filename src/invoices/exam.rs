//! Exam Invoice
//!
//! Exams are never discounted.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use tracing::debug;

use crate::{
    config::PricingConfig,
    discounts::fraction,
    money::{Money, amount, to_money},
    pricing::{PricingError, line_total, multiply, non_negative_count, non_negative_price},
};

/// Invoice for a number of exams.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExamInvoice {
    exam_count: u64,
    busy_period: bool,
    exam_price: Money,
    surcharge: Percentage,
}

impl ExamInvoice {
    /// Product name shown for exam invoices
    pub const PRODUCT_NAME: &'static str = "Exam";

    /// Create a new exam invoice at the configured exam price and surcharge.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidInput`] if `exam_count` is negative.
    pub fn new(
        exam_count: i64,
        busy_period: bool,
        config: &PricingConfig,
    ) -> Result<Self, PricingError> {
        Self::with_rates(
            exam_count,
            busy_period,
            config.exam_price,
            config.exam_surcharge,
        )
    }

    /// Create a new exam invoice with an explicit exam price and busy period surcharge.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidInput`] if `exam_count` or `exam_price` is negative.
    pub fn with_rates(
        exam_count: i64,
        busy_period: bool,
        exam_price: Money,
        surcharge: Percentage,
    ) -> Result<Self, PricingError> {
        let exam_count = non_negative_count("exam count", exam_count)?;

        non_negative_price("exam price", &exam_price)?;

        Ok(Self {
            exam_count,
            busy_period,
            exam_price,
            surcharge,
        })
    }

    /// Number of exams
    pub const fn exam_count(&self) -> u64 {
        self.exam_count
    }

    /// Whether the exams are booked in a busy period
    pub const fn is_busy_period(&self) -> bool {
        self.busy_period
    }

    /// Price of a single exam
    pub const fn exam_price(&self) -> &Money {
        &self.exam_price
    }

    /// Price without the busy period surcharge.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the price cannot be represented.
    pub fn base_price(&self) -> Result<Money, PricingError> {
        line_total(self.exam_count, &self.exam_price)
    }

    /// Same as [`ExamInvoice::total_price`]: the surcharge is part of the price.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the price cannot be represented.
    pub fn undiscounted_price(&self) -> Result<Money, PricingError> {
        self.total_price()
    }

    /// `exam_price * exam_count`, raised by the surcharge in a busy period, rounded once.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the price cannot be represented.
    pub fn total_price(&self) -> Result<Money, PricingError> {
        let base = multiply(amount(&self.exam_price), self.exam_count)?;

        let total = base
            .checked_mul(self.surcharge_multiplier())
            .ok_or(PricingError::Overflow)?;

        let total = to_money(total, self.exam_price.currency())?;

        debug!(
            product = Self::PRODUCT_NAME,
            exam_count = self.exam_count,
            busy_period = self.busy_period,
            total = %amount(&total),
            "priced invoice"
        );

        Ok(total)
    }

    /// `1 + surcharge` in a busy period, otherwise `1`.
    fn surcharge_multiplier(&self) -> Decimal {
        if self.busy_period {
            Decimal::ONE + fraction(self.surcharge)
        } else {
            Decimal::ONE
        }
    }
}
