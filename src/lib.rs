//! Tuition
//!
//! Tuition prices lesson, lesson package and exam invoices, applying ordered chains of
//! percentage discounts with exact two-decimal money.

pub mod config;
pub mod discounts;
pub mod invoices;
pub mod money;
pub mod package;
pub mod prelude;
pub mod pricing;
