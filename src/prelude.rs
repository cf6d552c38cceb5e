//! Tuition prelude.
//!
//! Convenience exports for common library consumers.

pub use crate::{
    config::{ConfigError, PricingConfig},
    discounts::{
        DiscountKind, DiscountRates, DiscountStrategy,
        chain::{DiscountChain, apply_all},
    },
    invoices::{ExamInvoice, Invoice, InvoiceSummary, LessonInvoice, LessonPackageInvoice},
    money::{Money, round},
    package::Package,
    pricing::{PricingError, base_price},
};
