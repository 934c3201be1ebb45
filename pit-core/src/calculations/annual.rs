//! Annual tax orchestration: sequences the allowance, deduction, and
//! bracket calculations into a single result record.
//!
//! # Calculation steps
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Standard deduction from gross income |
//! | 2    | Total allowances from household facts |
//! | 3    | Income after allowances (gross - standard deduction - allowances, floored at 0) |
//! | 4    | Elective deduction breakdown against the step-3 income |
//! | 5    | Total deductions (standard + electives, reported inclusively) |
//! | 6    | Taxable income (step 3 minus the elective share only) |
//! | 7    | Tax owed from the bracket schedule |
//! | 8    | Refund or additional amount owed (withheld - owed) |
//! | 9    | Effective rate (owed / gross, as a percentage) |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use pit_core::AnnualTaxCalculator;
//! use pit_core::models::{
//!     DeductionClaims, EmploymentType, MaritalStatus, TaxBracket, TaxConstants,
//!     TaxpayerProfile,
//! };
//!
//! let bracket = |label: &str, max_income, rate| TaxBracket {
//!     max_income,
//!     rate,
//!     label: label.to_string(),
//! };
//! let constants = TaxConstants {
//!     tax_year: 2024,
//!     personal_allowance: dec!(60000),
//!     spouse_allowance: dec!(60000),
//!     senior_allowance: dec!(190000),
//!     child_allowance: dec!(30000),
//!     child_bonus_allowance: dec!(30000),
//!     child_bonus_birth_year: 2018,
//!     parent_allowance: dec!(30000),
//!     max_supported_parents: 4,
//!     standard_deduction_rate: dec!(0.50),
//!     standard_deduction_cap: dec!(100000),
//!     social_security_cap: dec!(9000),
//!     life_insurance_cap: dec!(100000),
//!     health_insurance_cap: dec!(25000),
//!     pension_fund_cap: dec!(200000),
//!     provident_fund_cap: dec!(500000),
//!     retirement_mutual_fund_cap: dec!(500000),
//!     savings_fund_cap: dec!(200000),
//!     donation_cap_rate: dec!(0.10),
//!     brackets: vec![
//!         bracket("exempt", Some(dec!(150000)), dec!(0)),
//!         bracket("5%", Some(dec!(300000)), dec!(0.05)),
//!         bracket("10%", Some(dec!(500000)), dec!(0.10)),
//!         bracket("15%", None, dec!(0.15)),
//!     ],
//! };
//!
//! let profile = TaxpayerProfile {
//!     employment: EmploymentType::Employee,
//!     gross_income: dec!(500000),
//!     marital_status: MaritalStatus::Single,
//!     spouse_has_no_income: false,
//!     is_senior: false,
//!     dependents: vec![],
//!     supported_parents: 0,
//!     claims: DeductionClaims::default(),
//!     tax_withheld: dec!(30000),
//! };
//!
//! let result = AnnualTaxCalculator::new(&constants).calculate(&profile);
//!
//! assert_eq!(result.taxable_income, dec!(340000));
//! assert_eq!(result.tax_owed, dec!(11500));
//! assert_eq!(result.refund_or_owed, dec!(18500));
//! assert_eq!(result.effective_rate, dec!(2.3));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::{max, round_half_up};
use crate::calculations::{AllowanceCalculator, BracketTaxEngine, DeductionCalculator};
use crate::models::{TaxConstants, TaxResult, TaxpayerProfile};

/// Orchestrator producing the full [`TaxResult`] for one profile.
///
/// Pure and synchronous: borrows an immutable constants table, keeps no
/// state of its own, and returns a fresh result on every call, so repeated
/// invocations with an identical profile yield identical results.
#[derive(Debug, Clone)]
pub struct AnnualTaxCalculator<'a> {
    constants: &'a TaxConstants,
}

impl<'a> AnnualTaxCalculator<'a> {
    pub fn new(constants: &'a TaxConstants) -> Self {
        Self { constants }
    }

    /// Runs the full calculation. Total over any numeric profile: derived
    /// values are clamped into range instead of signalling errors.
    pub fn calculate(
        &self,
        profile: &TaxpayerProfile,
    ) -> TaxResult {
        let allowance_calculator = AllowanceCalculator::new(self.constants);
        let deduction_calculator = DeductionCalculator::new(self.constants);
        let bracket_engine = BracketTaxEngine::new(&self.constants.brackets);

        let standard_deduction = deduction_calculator.standard_deduction(profile.gross_income);
        let allowances = allowance_calculator.calculate(profile);
        let total_allowances = allowances.total();

        let income_after_allowances = max(
            profile.gross_income - standard_deduction - total_allowances,
            Decimal::ZERO,
        );

        let deductions = deduction_calculator.calculate(profile, income_after_allowances);

        // total_deductions carries the standard deduction so reports show one
        // inclusive figure; income_after_allowances already consumed it, so
        // taxable income subtracts only the elective share.
        let total_deductions = deductions.total();
        let taxable_income = max(
            income_after_allowances - (total_deductions - deductions.standard),
            Decimal::ZERO,
        );

        let tax_owed = bracket_engine.tax_for(taxable_income);
        let bracket_lines = bracket_engine.bracket_lines(taxable_income);
        let refund_or_owed = profile.tax_withheld - tax_owed;
        let effective_rate = self.effective_rate(profile.gross_income, tax_owed);

        debug!(
            employment = profile.employment.as_str(),
            gross_income = %profile.gross_income,
            %total_allowances,
            %total_deductions,
            %taxable_income,
            %tax_owed,
            "annual tax computed"
        );

        TaxResult {
            gross_income: profile.gross_income,
            total_allowances,
            total_deductions,
            taxable_income,
            tax_owed,
            tax_withheld: profile.tax_withheld,
            refund_or_owed,
            effective_rate,
            allowances,
            deductions,
            bracket_lines,
        }
    }

    fn effective_rate(
        &self,
        gross_income: Decimal,
        tax_owed: Decimal,
    ) -> Decimal {
        if gross_income > Decimal::ZERO {
            round_half_up(tax_owed / gross_income * Decimal::ONE_HUNDRED)
        } else {
            Decimal::ZERO
        }
    }
}
