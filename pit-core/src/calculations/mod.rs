//! Calculation modules for the annual personal income tax engine.
//!
//! Each module covers one rule set of the computation: allowances,
//! capped deductions, the progressive bracket walk, and the orchestration
//! that combines them into a final result. All calculators are pure
//! functions over an immutable [`crate::models::TaxConstants`] table.

pub mod common;

pub mod allowance;
pub mod annual;
pub mod bracket;
pub mod deduction;

pub use allowance::AllowanceCalculator;
pub use annual::AnnualTaxCalculator;
pub use bracket::BracketTaxEngine;
pub use deduction::DeductionCalculator;
