//! Pricing configuration
//!
//! Rates and percentages used by packages, exams and discounts. The defaults are the
//! standard tariff; a YAML file can override any of them:
//!
//! ```yaml
//! currency: EUR
//! per_lesson_rate: "55.00 EUR"
//! exam_price: "150.00"
//! exam_surcharge: "10%"
//! discounts:
//!   first_purchase: "3%"
//!   bulk_purchase: "0.05"
//!   bulk_purchase_threshold: "500.00 EUR"
//!   seasonal: "10%"
//!   family: "15%"
//! ```

use std::{fs, path::Path};

use decimal_percentage::Percentage;
use rust_decimal::Decimal;
use rusty_money::iso::{Currency, EUR, GBP, USD};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::{
    discounts::DiscountRates,
    money::{Money, amount, to_money},
};

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error reading the configuration file
    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// Invalid price format
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// Invalid percentage format or out of range
    #[error("Invalid percentage: {0}")]
    InvalidPercentage(String),

    /// Unknown currency code
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// A price is in a different currency than the configuration
    #[error("Currency mismatch: expected {0}, found {1}")]
    CurrencyMismatch(String, String),
}

/// Rates and percentages used for pricing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PricingConfig {
    /// Currency every configured price is in
    pub currency: &'static Currency,

    /// Price of a single lesson inside a package
    pub per_lesson_rate: Money,

    /// Price of a single exam
    pub exam_price: Money,

    /// Surcharge on exams booked in a busy period
    pub exam_surcharge: Percentage,

    /// Discount percentages
    pub discounts: DiscountRates,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            currency: EUR,
            per_lesson_rate: Money::from_minor(5500, EUR),
            exam_price: Money::from_minor(15000, EUR),
            exam_surcharge: Percentage::from(Decimal::new(10, 2)),
            discounts: DiscountRates::default(),
        }
    }
}

impl PricingConfig {
    /// Parse a configuration from YAML. Missing keys keep their default value.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML cannot be parsed, or a price, percentage or currency in it
    /// is invalid.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let file: PricingConfigFile = serde_norway::from_str(yaml)?;
        let config = Self::try_from(file)?;

        debug!(
            currency = config.currency.iso_alpha_code,
            per_lesson_rate = %amount(&config.per_lesson_rate),
            exam_price = %amount(&config.exam_price),
            "loaded pricing configuration"
        );

        Ok(config)
    }

    /// Load a configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid.
    #[tracing::instrument(name = "config.load", skip_all, fields(path = %path.display()), err)]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;

        Self::from_yaml(&contents)
    }
}

/// Pricing configuration as written in YAML
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PricingConfigFile {
    /// Currency code (e.g., "EUR")
    pub currency: Option<String>,

    /// Per lesson rate (e.g., "55.00 EUR" or "55.00")
    pub per_lesson_rate: Option<String>,

    /// Exam price (e.g., "150.00 EUR")
    pub exam_price: Option<String>,

    /// Exam surcharge (e.g., "10%" or "0.10")
    pub exam_surcharge: Option<String>,

    /// Discount percentages
    pub discounts: DiscountRatesFile,
}

/// Discount rates as written in YAML
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DiscountRatesFile {
    /// First purchase percentage
    pub first_purchase: Option<String>,

    /// Bulk purchase percentage
    pub bulk_purchase: Option<String>,

    /// Bulk purchase threshold price (e.g., "500.00 EUR")
    pub bulk_purchase_threshold: Option<String>,

    /// Seasonal percentage
    pub seasonal: Option<String>,

    /// Family percentage
    pub family: Option<String>,
}

impl TryFrom<PricingConfigFile> for PricingConfig {
    type Error = ConfigError;

    fn try_from(file: PricingConfigFile) -> Result<Self, Self::Error> {
        let defaults = PricingConfig::default();

        let currency = match file.currency.as_deref() {
            Some(code) => parse_currency(code)?,
            None => defaults.currency,
        };

        let price = |value: Option<String>, default: Money| match value {
            Some(value) => parse_price(&value, currency),
            None => Ok(rebase(&default, currency)),
        };

        let percentage = |value: Option<String>, default: Percentage| match value {
            Some(value) => parse_percentage(&value),
            None => Ok(default),
        };

        let rates = file.discounts;
        let default_rates = defaults.discounts;

        let bulk_purchase_threshold = match rates.bulk_purchase_threshold {
            Some(value) => amount(&parse_price(&value, currency)?),
            None => default_rates.bulk_purchase_threshold,
        };

        Ok(PricingConfig {
            currency,
            per_lesson_rate: price(file.per_lesson_rate, defaults.per_lesson_rate)?,
            exam_price: price(file.exam_price, defaults.exam_price)?,
            exam_surcharge: percentage(file.exam_surcharge, defaults.exam_surcharge)?,
            discounts: DiscountRates {
                first_purchase: percentage(rates.first_purchase, default_rates.first_purchase)?,
                bulk_purchase: percentage(rates.bulk_purchase, default_rates.bulk_purchase)?,
                bulk_purchase_threshold,
                seasonal: percentage(rates.seasonal, default_rates.seasonal)?,
                family: percentage(rates.family, default_rates.family)?,
            },
        })
    }
}

/// Parse a currency code. Only two-decimal currencies are supported.
///
/// # Errors
///
/// Returns [`ConfigError::UnknownCurrency`] for any other code.
pub fn parse_currency(code: &str) -> Result<&'static Currency, ConfigError> {
    match code.trim() {
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(ConfigError::UnknownCurrency(other.to_string())),
    }
}

/// Parse a price string (e.g., "55.00 EUR", or "55.00" in the configured currency).
///
/// Amounts with more than two fractional digits are rounded half-up.
///
/// # Errors
///
/// Returns an error if the amount cannot be parsed, is negative, or names a different
/// currency than `currency`.
pub fn parse_price(s: &str, currency: &'static Currency) -> Result<Money, ConfigError> {
    let mut parts = s.split_whitespace();

    let value = parts
        .next()
        .ok_or_else(|| ConfigError::InvalidPrice(s.to_string()))?
        .parse::<Decimal>()
        .map_err(|_err| ConfigError::InvalidPrice(s.to_string()))?;

    if let Some(code) = parts.next() {
        let found = parse_currency(code)?;

        if found != currency {
            return Err(ConfigError::CurrencyMismatch(
                currency.iso_alpha_code.to_string(),
                found.iso_alpha_code.to_string(),
            ));
        }
    }

    if parts.next().is_some() || value < Decimal::ZERO {
        return Err(ConfigError::InvalidPrice(s.to_string()));
    }

    to_money(value, currency).map_err(|_err| ConfigError::InvalidPrice(s.to_string()))
}

/// Parse a percentage string (e.g., "15%" or "0.15") into a `Percentage`
///
/// Accepts two formats:
/// - Percentage format: "15%" for 15%
/// - Decimal format: "0.15" for 15%
///
/// # Errors
///
/// Returns an error if the string cannot be parsed or the value is outside 0% to 100%.
pub fn parse_percentage(s: &str) -> Result<Percentage, ConfigError> {
    let trimmed = s.trim();
    let invalid = || ConfigError::InvalidPercentage(s.to_string());

    let value = if let Some(points) = trimmed.strip_suffix('%') {
        points
            .trim()
            .parse::<Decimal>()
            .map_err(|_err| invalid())?
            .checked_div(Decimal::ONE_HUNDRED)
            .ok_or_else(invalid)?
    } else {
        trimmed.parse::<Decimal>().map_err(|_err| invalid())?
    };

    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(invalid());
    }

    Ok(Percentage::from(value))
}

/// Move a default price into the configured currency, keeping its amount.
fn rebase(price: &Money, currency: &'static Currency) -> Money {
    Money::from_minor(price.to_minor_units(), currency)
}
