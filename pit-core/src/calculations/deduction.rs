//! Deduction calculations: the percentage-of-income standard deduction and
//! the elective, individually-capped deduction categories.
//!
//! Every elective category carries a fixed cap from the constants table,
//! except donations, which are capped at a fraction of the income remaining
//! after allowances and the standard deduction but before any elective
//! deduction. Claims are clamped into range rather than rejected; an absent
//! claim contributes exactly zero.

use rust_decimal::Decimal;
use tracing::warn;

use crate::calculations::common::{max, round_half_up};
use crate::models::{DeductionBreakdown, TaxConstants, TaxpayerProfile};

/// Calculator for the standard deduction and the elective categories.
#[derive(Debug, Clone)]
pub struct DeductionCalculator<'a> {
    constants: &'a TaxConstants,
}

impl<'a> DeductionCalculator<'a> {
    pub fn new(constants: &'a TaxConstants) -> Self {
        Self { constants }
    }

    /// Percentage-of-income deduction for presumed employment expenses,
    /// capped at a fixed ceiling.
    ///
    /// Monotonic non-decreasing up to the cap, constant above it.
    ///
    /// # Example
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use pit_core::DeductionCalculator;
    /// # use pit_core::models::{TaxBracket, TaxConstants};
    /// # let constants = TaxConstants {
    /// #     tax_year: 2024,
    /// #     personal_allowance: dec!(60000),
    /// #     spouse_allowance: dec!(60000),
    /// #     senior_allowance: dec!(190000),
    /// #     child_allowance: dec!(30000),
    /// #     child_bonus_allowance: dec!(30000),
    /// #     child_bonus_birth_year: 2018,
    /// #     parent_allowance: dec!(30000),
    /// #     max_supported_parents: 4,
    /// #     standard_deduction_rate: dec!(0.50),
    /// #     standard_deduction_cap: dec!(100000),
    /// #     social_security_cap: dec!(9000),
    /// #     life_insurance_cap: dec!(100000),
    /// #     health_insurance_cap: dec!(25000),
    /// #     pension_fund_cap: dec!(200000),
    /// #     provident_fund_cap: dec!(500000),
    /// #     retirement_mutual_fund_cap: dec!(500000),
    /// #     savings_fund_cap: dec!(200000),
    /// #     donation_cap_rate: dec!(0.10),
    /// #     brackets: vec![TaxBracket { max_income: None, rate: dec!(0.10), label: "all".into() }],
    /// # };
    /// let calculator = DeductionCalculator::new(&constants);
    ///
    /// assert_eq!(calculator.standard_deduction(dec!(150000)), dec!(75000));
    /// assert_eq!(calculator.standard_deduction(dec!(500000)), dec!(100000));
    /// ```
    pub fn standard_deduction(
        &self,
        gross_income: Decimal,
    ) -> Decimal {
        let by_rate = round_half_up(gross_income * self.constants.standard_deduction_rate);
        max(
            by_rate.min(self.constants.standard_deduction_cap),
            Decimal::ZERO,
        )
    }

    /// Produces the full deduction breakdown for the profile.
    ///
    /// `pre_deduction_income` is the income remaining after allowances and
    /// the standard deduction, floored at zero by the caller; the donation
    /// cap is a fraction of it, recomputed on every call.
    pub fn calculate(
        &self,
        profile: &TaxpayerProfile,
        pre_deduction_income: Decimal,
    ) -> DeductionBreakdown {
        let claims = &profile.claims;
        let donation_cap =
            round_half_up(pre_deduction_income * self.constants.donation_cap_rate);

        DeductionBreakdown {
            standard: self.standard_deduction(profile.gross_income),
            social_security: self.capped_claim(
                "social_security",
                claims.social_security,
                self.constants.social_security_cap,
            ),
            life_insurance: self.capped_claim(
                "life_insurance",
                claims.life_insurance,
                self.constants.life_insurance_cap,
            ),
            health_insurance: self.capped_claim(
                "health_insurance",
                claims.health_insurance,
                self.constants.health_insurance_cap,
            ),
            pension_fund: self.capped_claim(
                "pension_fund",
                claims.pension_fund,
                self.constants.pension_fund_cap,
            ),
            provident_fund: self.capped_claim(
                "provident_fund",
                claims.provident_fund,
                self.constants.provident_fund_cap,
            ),
            retirement_mutual_fund: self.capped_claim(
                "retirement_mutual_fund",
                claims.retirement_mutual_fund,
                self.constants.retirement_mutual_fund_cap,
            ),
            savings_fund: self.capped_claim(
                "savings_fund",
                claims.savings_fund,
                self.constants.savings_fund_cap,
            ),
            donations: self.capped_claim("donations", claims.donations, donation_cap),
        }
    }

    /// Applies a category cap to an elective claim.
    ///
    /// Absent claims contribute zero; claimed amounts are clamped into
    /// `[0, cap]`.
    fn capped_claim(
        &self,
        category: &'static str,
        claim: Option<Decimal>,
        cap: Decimal,
    ) -> Decimal {
        let Some(amount) = claim else {
            return Decimal::ZERO;
        };
        if amount > cap {
            warn!(category, %amount, %cap, "claimed amount exceeds cap, clamping");
        }
        max(amount.min(cap), Decimal::ZERO)
    }
}
