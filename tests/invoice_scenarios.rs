//! Integration tests pricing the standard invoices.
//!
//! A first time family customer buys ten single lessons at 55.00, two packages of ten
//! lessons, and books three exams in a busy period:
//!
//! 1. Single lessons: 10 x 55.00 = 550.00
//!    - First purchase 3%: 533.50
//!    - Bulk purchase 5% (533.50 >= 500): 506.825
//!    - Family 15%: 430.80125 -> 430.80
//!
//! 2. Lesson packages: 2 x 550.00 = 1100.00
//!    - 1067.00 -> 1013.65 -> 861.6025 -> 861.60
//!
//! 3. Exams: 3 x 150.00 x 1.10 = 495.00, never discounted

use rust_decimal_macros::dec;
use rusty_money::iso::EUR;
use testresult::TestResult;

use tuition::{
    money::amount,
    prelude::{
        DiscountKind, DiscountStrategy, ExamInvoice, Invoice, LessonInvoice,
        LessonPackageInvoice, Money, Package, PricingConfig, PricingError,
    },
};

fn customer_discounts(config: &PricingConfig) -> Vec<DiscountStrategy> {
    config.discounts.strategies(&[
        DiscountKind::FirstPurchase,
        DiscountKind::BulkPurchase,
        DiscountKind::Family,
    ])
}

#[test]
fn standard_invoices() -> TestResult {
    let config = PricingConfig::default();
    let discounts = customer_discounts(&config);
    let package = Package::new(10, &config)?;

    let invoices = [
        Invoice::from(LessonInvoice::new(
            Money::from_minor(5500, EUR),
            10,
            &discounts,
        )?),
        Invoice::from(LessonPackageInvoice::new(&package, 2, &discounts)?),
        Invoice::from(ExamInvoice::new(3, true, &config)?),
    ];

    let summaries = invoices
        .iter()
        .map(Invoice::summary)
        .collect::<Result<Vec<_>, _>>()?;

    let expected = [
        ("Single lessons", 55000, 43080),
        ("Lesson package", 110000, 86160),
        ("Exam", 49500, 49500),
    ];

    assert_eq!(summaries.len(), expected.len());

    for (summary, (name, undiscounted, total)) in summaries.iter().zip(expected) {
        assert_eq!(summary.product_name(), name);
        assert_eq!(summary.undiscounted(), Money::from_minor(undiscounted, EUR));
        assert_eq!(summary.total(), Money::from_minor(total, EUR));
        assert_eq!(amount(&summary.total()).scale(), 2);
    }

    Ok(())
}

#[test]
fn discount_order_decides_bulk_purchase() -> TestResult {
    let config = PricingConfig::default();
    let unit_price = Money::from_minor(5100, EUR);

    let bulk_first = config
        .discounts
        .strategies(&[DiscountKind::BulkPurchase, DiscountKind::FirstPurchase]);
    let bulk_last = config
        .discounts
        .strategies(&[DiscountKind::FirstPurchase, DiscountKind::BulkPurchase]);

    let bulk_first = LessonInvoice::new(unit_price, 10, &bulk_first)?;
    let bulk_last = LessonInvoice::new(unit_price, 10, &bulk_last)?;

    assert_eq!(bulk_first.undiscounted_price()?, bulk_last.undiscounted_price()?);
    assert_eq!(bulk_first.total_price()?, Money::from_minor(46997, EUR));
    assert_eq!(bulk_last.total_price()?, Money::from_minor(49470, EUR));

    Ok(())
}

#[test]
fn custom_configuration_changes_prices() -> TestResult {
    let config = PricingConfig::from_yaml(
        "per_lesson_rate: \"60.00 EUR\"\nexam_price: \"100.00 EUR\"\nexam_surcharge: \"25%\"\ndiscounts:\n  seasonal: \"20%\"\n",
    )?;

    let discounts = config.discounts.strategies(&[DiscountKind::Seasonal]);
    let package = Package::new(5, &config)?;

    let package_invoice = LessonPackageInvoice::new(&package, 1, &discounts)?;
    let exam_invoice = ExamInvoice::new(2, true, &config)?;

    assert_eq!(package_invoice.undiscounted_price()?, Money::from_minor(30000, EUR));
    assert_eq!(package_invoice.total_price()?, Money::from_minor(24000, EUR));
    assert_eq!(exam_invoice.total_price()?, Money::from_minor(25000, EUR));

    Ok(())
}

#[test]
fn negative_inputs_are_rejected() -> TestResult {
    let config = PricingConfig::default();
    let package = Package::new(10, &config)?;

    assert!(matches!(
        LessonInvoice::new(config.per_lesson_rate, -1, &[]),
        Err(PricingError::InvalidInput { .. })
    ));
    assert!(matches!(
        LessonPackageInvoice::new(&package, -1, &[]),
        Err(PricingError::InvalidInput { .. })
    ));
    assert!(matches!(
        ExamInvoice::new(-1, false, &config),
        Err(PricingError::InvalidInput { .. })
    ));
    assert_eq!(
        Package::new(-1, &config),
        Err(PricingError::InvalidInput {
            field: "lesson count",
            value: dec!(-1),
        })
    );

    Ok(())
}

#[test]
fn discounts_are_shared_across_threads() -> TestResult {
    let discounts = customer_discounts(&PricingConfig::default());

    let totals = std::thread::scope(|scope| {
        let handles: Vec<_> = (1..=4)
            .map(|quantity| {
                let discounts = &discounts;

                scope.spawn(move || {
                    LessonInvoice::new(Money::from_minor(5500, EUR), quantity * 10, discounts)
                        .and_then(|invoice| invoice.total_price())
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join())
            .collect::<Vec<_>>()
    });

    assert_eq!(totals.len(), 4);

    for (total, quantity) in totals.into_iter().zip(1..=4) {
        let expected =
            LessonInvoice::new(Money::from_minor(5500, EUR), quantity * 10, &discounts)?
                .total_price()?;

        assert!(matches!(total, Ok(Ok(price)) if price == expected));
    }

    Ok(())
}
