//! Property-based tests for base prices, discount chains and exam surcharges.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use rusty_money::iso::EUR;

use tuition::{
    money::{amount, round},
    prelude::{
        DiscountChain, DiscountStrategy, ExamInvoice, Money, PricingConfig, apply_all, base_price,
    },
};

proptest! {
    /// Property: base price = round(unit price × quantity), always with two decimals
    #[test]
    fn base_price_is_rounded_product(
        quantity in 0i64..100_000,
        unit_minor in 0i64..10_000_000,
    ) {
        let unit_price = Money::from_minor(unit_minor, EUR);
        let expected = round(amount(&unit_price) * Decimal::from(quantity));

        let price = base_price(quantity, &unit_price);

        prop_assert_eq!(price.map(|price| amount(&price)), Ok(expected));
        prop_assert_eq!(expected.scale(), 2);
    }

    /// Property: negative quantities are always rejected
    #[test]
    fn base_price_rejects_negative_quantity(
        quantity in i64::MIN..0,
        unit_minor in 0i64..10_000_000,
    ) {
        prop_assert!(base_price(quantity, &Money::from_minor(unit_minor, EUR)).is_err());
    }

    /// Property: an empty chain leaves any price unchanged
    #[test]
    fn empty_chain_is_identity(minor in 0i64..1_000_000_000) {
        let price = Money::from_minor(minor, EUR);

        prop_assert_eq!(DiscountChain::empty().apply_all(&price), Ok(price));
    }

    /// Property: bulk purchase applies exactly 5% off from 500, and nothing below it
    #[test]
    fn bulk_purchase_threshold(minor in 0i64..10_000_000) {
        let price = Money::from_minor(minor, EUR);
        let value = amount(&price);

        let discounted = DiscountStrategy::bulk_purchase().apply(value);

        if value < dec!(500) {
            prop_assert_eq!(discounted, Ok(value));
        } else {
            prop_assert_eq!(discounted, Ok(value * dec!(0.95)));
        }
    }

    /// Property: unconditional discounts never raise a price
    #[test]
    fn chain_never_raises_price(minor in 0i64..10_000_000) {
        let price = Money::from_minor(minor, EUR);
        let strategies = [
            DiscountStrategy::first_purchase(),
            DiscountStrategy::bulk_purchase(),
            DiscountStrategy::seasonal(),
            DiscountStrategy::family(),
        ];

        let discounted = apply_all(&price, &strategies).map(|price| amount(&price));

        prop_assert!(matches!(discounted, Ok(total) if total <= amount(&price)));
    }

    /// Property: a busy period costs 1.10× the quiet period, within rounding
    #[test]
    fn busy_period_is_ten_percent_more(exam_count in 0i64..10_000) {
        let config = PricingConfig::default();

        let busy = ExamInvoice::new(exam_count, true, &config)
            .and_then(|invoice| invoice.total_price())
            .map(|price| amount(&price));
        let quiet = ExamInvoice::new(exam_count, false, &config)
            .and_then(|invoice| invoice.total_price())
            .map(|price| amount(&price));

        prop_assert_eq!(busy, quiet.map(|quiet| round(quiet * dec!(1.10))));
    }
}
