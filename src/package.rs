//! Packages

use crate::{
    config::PricingConfig,
    money::Money,
    pricing::{PricingError, line_total, non_negative_count, non_negative_price},
};

/// A bundle of lessons sold at a fixed per-lesson rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Package {
    lesson_count: u64,
    per_lesson_rate: Money,
}

impl Package {
    /// Create a package at the configured per-lesson rate.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidInput`] if `lesson_count` is negative.
    pub fn new(lesson_count: i64, config: &PricingConfig) -> Result<Self, PricingError> {
        Self::with_rate(lesson_count, config.per_lesson_rate)
    }

    /// Create a package with an explicit per-lesson rate.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::InvalidInput`] if `lesson_count` or `per_lesson_rate` is
    /// negative.
    pub fn with_rate(lesson_count: i64, per_lesson_rate: Money) -> Result<Self, PricingError> {
        let lesson_count = non_negative_count("lesson count", lesson_count)?;

        non_negative_price("per lesson rate", &per_lesson_rate)?;

        Ok(Self {
            lesson_count,
            per_lesson_rate,
        })
    }

    /// Number of lessons in the package
    pub const fn lesson_count(&self) -> u64 {
        self.lesson_count
    }

    /// Price of a single lesson
    pub const fn per_lesson_rate(&self) -> &Money {
        &self.per_lesson_rate
    }

    /// Price of the whole package: `per_lesson_rate * lesson_count`, rounded.
    ///
    /// # Errors
    ///
    /// Returns [`PricingError::Overflow`] if the price cannot be represented.
    pub fn unit_price(&self) -> Result<Money, PricingError> {
        line_total(self.lesson_count, &self.per_lesson_rate)
    }
}
