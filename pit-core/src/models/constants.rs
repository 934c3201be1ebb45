use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::TaxBracket;

/// Errors raised by [`TaxConstants::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaxConstantsError {
    /// A rate-valued field must lie within [0, 1].
    #[error("{0} must be between 0 and 1, got {1}")]
    RateOutOfRange(&'static str, Decimal),

    /// An allowance or cap amount must be non-negative.
    #[error("{0} must be non-negative, got {1}")]
    NegativeAmount(&'static str, Decimal),

    /// The bracket schedule contains no rows.
    #[error("bracket schedule is empty")]
    EmptySchedule,

    /// A bracket rate must lie within [0, 1].
    #[error("bracket '{0}' has rate {1}, expected between 0 and 1")]
    BracketRateOutOfRange(String, Decimal),

    /// Bracket upper bounds must be strictly ascending.
    #[error("bracket bound {0} does not exceed the previous bound {1}")]
    NonAscendingBound(Decimal, Decimal),

    /// Only the final bracket may omit its upper bound.
    #[error("bracket '{0}' is unbounded but is not the final bracket")]
    UnboundedBeforeEnd(String),

    /// The final bracket must omit its upper bound.
    #[error("final bracket '{0}' must be unbounded")]
    BoundedFinalBracket(String),
}

/// The immutable configuration table a calculation runs against: allowance
/// amounts, deduction caps, the standard deduction parameters, and the
/// ordered bracket schedule.
///
/// A table is plain data passed by reference into the calculators; nothing
/// reads it from global state, so alternate tables (future tax years, test
/// schedules) can be swapped in per call site. Validate a table once where
/// it is constructed or loaded; the calculators assume a valid table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxConstants {
    pub tax_year: i32,

    /// Granted to every taxpayer.
    pub personal_allowance: Decimal,

    /// Granted when married to a spouse with no income of their own.
    pub spouse_allowance: Decimal,

    /// Granted to taxpayers aged 65 or older.
    pub senior_allowance: Decimal,

    /// Granted per dependent child.
    pub child_allowance: Decimal,

    /// Extra allowance for second and later children born in or after
    /// [`child_bonus_birth_year`](Self::child_bonus_birth_year).
    pub child_bonus_allowance: Decimal,
    pub child_bonus_birth_year: i32,

    /// Granted per supported parent, up to
    /// [`max_supported_parents`](Self::max_supported_parents).
    pub parent_allowance: Decimal,
    pub max_supported_parents: u32,

    /// Fraction of gross income deducted for presumed employment expenses.
    pub standard_deduction_rate: Decimal,

    /// Hard ceiling on the standard deduction.
    pub standard_deduction_cap: Decimal,

    pub social_security_cap: Decimal,
    pub life_insurance_cap: Decimal,
    pub health_insurance_cap: Decimal,
    pub pension_fund_cap: Decimal,
    pub provident_fund_cap: Decimal,
    pub retirement_mutual_fund_cap: Decimal,
    pub savings_fund_cap: Decimal,

    /// Donations are capped at this fraction of pre-donation taxable income.
    pub donation_cap_rate: Decimal,

    /// Ordered rate schedule. The final bracket must be unbounded.
    pub brackets: Vec<TaxBracket>,
}

impl TaxConstants {
    /// Validates the table.
    ///
    /// # Errors
    ///
    /// Returns [`TaxConstantsError`] if:
    /// - `standard_deduction_rate` or `donation_cap_rate` is outside [0, 1]
    /// - any allowance or cap amount is negative
    /// - the bracket schedule is empty
    /// - a bracket rate is outside [0, 1]
    /// - bracket bounds are not strictly ascending
    /// - any bracket other than the last is unbounded, or the last is bounded
    pub fn validate(&self) -> Result<(), TaxConstantsError> {
        for (name, rate) in [
            ("standard_deduction_rate", self.standard_deduction_rate),
            ("donation_cap_rate", self.donation_cap_rate),
        ] {
            if rate < Decimal::ZERO || rate > Decimal::ONE {
                return Err(TaxConstantsError::RateOutOfRange(name, rate));
            }
        }

        for (name, amount) in [
            ("personal_allowance", self.personal_allowance),
            ("spouse_allowance", self.spouse_allowance),
            ("senior_allowance", self.senior_allowance),
            ("child_allowance", self.child_allowance),
            ("child_bonus_allowance", self.child_bonus_allowance),
            ("parent_allowance", self.parent_allowance),
            ("standard_deduction_cap", self.standard_deduction_cap),
            ("social_security_cap", self.social_security_cap),
            ("life_insurance_cap", self.life_insurance_cap),
            ("health_insurance_cap", self.health_insurance_cap),
            ("pension_fund_cap", self.pension_fund_cap),
            ("provident_fund_cap", self.provident_fund_cap),
            ("retirement_mutual_fund_cap", self.retirement_mutual_fund_cap),
            ("savings_fund_cap", self.savings_fund_cap),
        ] {
            if amount < Decimal::ZERO {
                return Err(TaxConstantsError::NegativeAmount(name, amount));
            }
        }

        self.validate_schedule()
    }

    fn validate_schedule(&self) -> Result<(), TaxConstantsError> {
        if self.brackets.is_empty() {
            return Err(TaxConstantsError::EmptySchedule);
        }

        let last_index = self.brackets.len() - 1;
        let mut previous_bound = Decimal::ZERO;

        for (index, bracket) in self.brackets.iter().enumerate() {
            if bracket.rate < Decimal::ZERO || bracket.rate > Decimal::ONE {
                return Err(TaxConstantsError::BracketRateOutOfRange(
                    bracket.label.clone(),
                    bracket.rate,
                ));
            }
            match bracket.max_income {
                Some(bound) => {
                    if index == last_index {
                        return Err(TaxConstantsError::BoundedFinalBracket(
                            bracket.label.clone(),
                        ));
                    }
                    if bound <= previous_bound {
                        return Err(TaxConstantsError::NonAscendingBound(bound, previous_bound));
                    }
                    previous_bound = bound;
                }
                None => {
                    if index != last_index {
                        return Err(TaxConstantsError::UnboundedBeforeEnd(bracket.label.clone()));
                    }
                }
            }
        }

        Ok(())
    }
}

/// Shared unit-test fixture mirroring the built-in 2024 table.
#[cfg(test)]
pub(crate) fn test_constants() -> TaxConstants {
    use rust_decimal_macros::dec;

    fn bracket(label: &str, max_income: Option<Decimal>, rate: Decimal) -> TaxBracket {
        TaxBracket {
            max_income,
            rate,
            label: label.to_string(),
        }
    }

    TaxConstants {
        tax_year: 2024,
        personal_allowance: dec!(60000),
        spouse_allowance: dec!(60000),
        senior_allowance: dec!(190000),
        child_allowance: dec!(30000),
        child_bonus_allowance: dec!(30000),
        child_bonus_birth_year: 2018,
        parent_allowance: dec!(30000),
        max_supported_parents: 4,
        standard_deduction_rate: dec!(0.50),
        standard_deduction_cap: dec!(100000),
        social_security_cap: dec!(9000),
        life_insurance_cap: dec!(100000),
        health_insurance_cap: dec!(25000),
        pension_fund_cap: dec!(200000),
        provident_fund_cap: dec!(500000),
        retirement_mutual_fund_cap: dec!(500000),
        savings_fund_cap: dec!(200000),
        donation_cap_rate: dec!(0.10),
        brackets: vec![
            bracket("0 - 150,000", Some(dec!(150000)), dec!(0)),
            bracket("150,001 - 300,000", Some(dec!(300000)), dec!(0.05)),
            bracket("300,001 - 500,000", Some(dec!(500000)), dec!(0.10)),
            bracket("500,001 - 750,000", Some(dec!(750000)), dec!(0.15)),
            bracket("750,001 - 1,000,000", Some(dec!(1000000)), dec!(0.20)),
            bracket("1,000,001 - 2,000,000", Some(dec!(2000000)), dec!(0.25)),
            bracket("2,000,001 - 5,000,000", Some(dec!(5000000)), dec!(0.30)),
            bracket("over 5,000,000", None, dec!(0.35)),
        ],
    }
}
