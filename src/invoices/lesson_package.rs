//! Lesson Package Invoice

use crate::{
    discounts::{DiscountStrategy, chain::DiscountChain},
    invoices::DiscountedLine,
    money::Money,
    package::Package,
    pricing::{PricingError, non_negative_count},
};

/// Invoice for a number of lesson packages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LessonPackageInvoice<'a> {
    package: Package,
    line: DiscountedLine<'a>,
}

impl<'a> LessonPackageInvoice<'a> {
    /// Product name shown for lesson package invoices
    pub const PRODUCT_NAME: &'static str = "Lesson package";

    /// Create a new lesson package invoice. Each package is priced at
    /// [`Package::unit_price`].
    ///
    /// # Errors
    ///
    /// - [`PricingError::InvalidInput`]: `package_count` is negative.
    /// - [`PricingError::Overflow`]: the package price cannot be represented.
    pub fn new(
        package: &Package,
        package_count: i64,
        discounts: &'a [DiscountStrategy],
    ) -> Result<Self, PricingError> {
        let package_count = non_negative_count("package count", package_count)?;
        let unit_price = package.unit_price()?;

        Ok(Self {
            package: *package,
            line: DiscountedLine::new(unit_price, package_count, discounts),
        })
    }

    /// The invoiced package
    pub const fn package(&self) -> &Package {
        &self.package
    }

    /// Price of a single package
    pub const fn unit_price(&self) -> &Money {
        &self.line.unit_price
    }

    /// Number of packages
    pub const fn package_count(&self) -> u64 {
        self.line.quantity
    }

    /// Discounts, in application order
    pub const fn discounts(&self) -> DiscountChain<'a> {
        self.line.discounts
    }

    /// Base price: package price * package count, rounded.
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

#[cfg(test)]
mod tests {
    use rust_decimal_macros::dec;
    use rusty_money::iso::EUR;
    use testresult::TestResult;

    use crate::config::PricingConfig;

    use super::*;

    #[test]
    fn total_applies_discounts_to_all_packages() -> TestResult {
        let discounts = [
            DiscountStrategy::first_purchase(),
            DiscountStrategy::bulk_purchase(),
            DiscountStrategy::family(),
        ];
        let package = Package::new(10, &PricingConfig::default())?;
        let invoice = LessonPackageInvoice::new(&package, 2, &discounts)?;

        assert_eq!(invoice.unit_price(), &Money::from_minor(55000, EUR));
        assert_eq!(invoice.package_count(), 2);
        assert_eq!(invoice.undiscounted_price()?, Money::from_minor(110000, EUR));

        // 1100.00 -> 1067.00 -> 1013.65 -> 861.6025
        assert_eq!(invoice.total_price()?, Money::from_minor(86160, EUR));

        Ok(())
    }

    #[test]
    fn keeps_package() -> TestResult {
        let package = Package::new(5, &PricingConfig::default())?;
        let invoice = LessonPackageInvoice::new(&package, 1, &[])?;

        assert_eq!(invoice.package(), &package);
        assert_eq!(invoice.discounts().len(), 0);
        assert_eq!(invoice.total_price()?, Money::from_minor(27500, EUR));

        Ok(())
    }

    #[test]
    fn negative_package_count_errors() -> TestResult {
        let package = Package::new(10, &PricingConfig::default())?;
        let result = LessonPackageInvoice::new(&package, -1, &[]);

        assert_eq!(
            result,
            Err(PricingError::InvalidInput {
                field: "package count",
                value: dec!(-1),
            })
        );

        Ok(())
    }
}
