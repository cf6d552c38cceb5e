//! Invoices
//!
//! Lesson and lesson package invoices run their base price through a discount chain. Exam
//! invoices are never discounted; exams booked in a busy period carry a surcharge instead.

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::MoneyError;
use tracing::debug;

use crate::{
    discounts::{DiscountStrategy, chain::DiscountChain},
    money::{Money, amount},
    pricing::{PricingError, line_total},
};

mod exam;
mod lesson;
mod lesson_package;

pub use exam::*;
pub use lesson::*;
pub use lesson_package::*;

/// Any invoice that can be priced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Invoice<'a> {
    /// Single lessons
    Lesson(LessonInvoice<'a>),

    /// Lesson packages
    LessonPackage(LessonPackageInvoice<'a>),

    /// Exams
    Exam(ExamInvoice),
}

impl Invoice<'_> {
    /// Name of the invoiced product
    pub const fn product_name(&self) -> &'static str {
        match self {
            Invoice::Lesson(_) => LessonInvoice::PRODUCT_NAME,
            Invoice::LessonPackage(_) => LessonPackageInvoice::PRODUCT_NAME,
            Invoice::Exam(_) => ExamInvoice::PRODUCT_NAME,
        }
    }

    /// Price before discounts.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the price cannot be represented.
    pub fn undiscounted_price(&self) -> Result<Money, PricingError> {
        match self {
            Invoice::Lesson(invoice) => invoice.undiscounted_price(),
            Invoice::LessonPackage(invoice) => invoice.undiscounted_price(),
            Invoice::Exam(invoice) => invoice.undiscounted_price(),
        }
    }

    /// Price to be paid, after discounts or surcharges.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the price cannot be represented.
    pub fn total_price(&self) -> Result<Money, PricingError> {
        match self {
            Invoice::Lesson(invoice) => invoice.total_price(),
            Invoice::LessonPackage(invoice) => invoice.total_price(),
            Invoice::Exam(invoice) => invoice.total_price(),
        }
    }

    /// Both prices of the invoice, together with the product name.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if a price cannot be represented.
    pub fn summary(&self) -> Result<InvoiceSummary, PricingError> {
        Ok(InvoiceSummary {
            product_name: self.product_name(),
            undiscounted: self.undiscounted_price()?,
            total: self.total_price()?,
        })
    }
}

impl<'a> From<LessonInvoice<'a>> for Invoice<'a> {
    fn from(invoice: LessonInvoice<'a>) -> Self {
        Invoice::Lesson(invoice)
    }
}

impl<'a> From<LessonPackageInvoice<'a>> for Invoice<'a> {
    fn from(invoice: LessonPackageInvoice<'a>) -> Self {
        Invoice::LessonPackage(invoice)
    }
}

impl From<ExamInvoice> for Invoice<'_> {
    fn from(invoice: ExamInvoice) -> Self {
        Invoice::Exam(invoice)
    }
}

/// Computed prices of an invoice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvoiceSummary {
    product_name: &'static str,
    undiscounted: Money,
    total: Money,
}

impl InvoiceSummary {
    /// Name of the invoiced product
    pub const fn product_name(&self) -> &'static str {
        self.product_name
    }

    /// Price before discounts
    pub const fn undiscounted(&self) -> Money {
        self.undiscounted
    }

    /// Price to be paid
    pub const fn total(&self) -> Money {
        self.total
    }

    /// Amount saved through discounts.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings(&self) -> Result<Money, MoneyError> {
        self.undiscounted.sub(self.total)
    }

    /// Savings as a percentage of the undiscounted price.
    ///
    /// # Errors
    ///
    /// Returns a [`MoneyError`] if the subtraction operation fails.
    pub fn savings_percent(&self) -> Result<Percentage, MoneyError> {
        let savings = amount(&self.savings()?);
        let undiscounted = amount(&self.undiscounted);

        if undiscounted.is_zero() {
            return Ok(Percentage::from(Decimal::ZERO));
        }

        Ok(Percentage::from(savings / undiscounted))
    }
}

/// A quantity at a unit price, discounted by a chain.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DiscountedLine<'a> {
    unit_price: Money,
    quantity: u64,
    discounts: DiscountChain<'a>,
}

impl<'a> DiscountedLine<'a> {
    fn new(unit_price: Money, quantity: u64, discounts: &'a [DiscountStrategy]) -> Self {
        Self {
            unit_price,
            quantity,
            discounts: DiscountChain::new(discounts),
        }
    }

    fn undiscounted_price(&self) -> Result<Money, PricingError> {
        line_total(self.quantity, &self.unit_price)
    }

    fn total_price(&self, product: &'static str) -> Result<Money, PricingError> {
        let base = self.undiscounted_price()?;
        let total = self.discounts.apply_all(&base)?;

        debug!(
            product,
            quantity = self.quantity,
            discounts = self.discounts.len(),
            base = %amount(&base),
            total = %amount(&total),
            "priced invoice"
        );

        Ok(total)
    }
}
