//! Allowance calculations: fixed reductions of gross income granted for
//! personal and household status, independent of actual spending.
//!
//! Five rules contribute to the total: the personal allowance (always
//! granted), the spouse allowance (married, spouse without income), the
//! senior allowance (age 65 or older), the per-child allowance with a
//! birth-year bonus for later children, and the per-parent allowance up to
//! a configured maximum.

use rust_decimal::Decimal;

use crate::models::{AllowanceBreakdown, Dependent, MaritalStatus, TaxConstants, TaxpayerProfile};

/// Calculator for household allowances.
#[derive(Debug, Clone)]
pub struct AllowanceCalculator<'a> {
    constants: &'a TaxConstants,
}

impl<'a> AllowanceCalculator<'a> {
    pub fn new(constants: &'a TaxConstants) -> Self {
        Self { constants }
    }

    /// Calculates every allowance sub-amount for the profile.
    pub fn calculate(
        &self,
        profile: &TaxpayerProfile,
    ) -> AllowanceBreakdown {
        AllowanceBreakdown {
            personal: self.constants.personal_allowance,
            spouse: self.spouse_allowance(profile),
            senior: self.senior_allowance(profile),
            child: self.child_allowance(&profile.dependents),
            parent: self.parent_allowance(profile.supported_parents),
        }
    }

    /// Granted only when married to a spouse with no income of their own.
    fn spouse_allowance(
        &self,
        profile: &TaxpayerProfile,
    ) -> Decimal {
        if profile.marital_status == MaritalStatus::Married && profile.spouse_has_no_income {
            self.constants.spouse_allowance
        } else {
            Decimal::ZERO
        }
    }

    fn senior_allowance(
        &self,
        profile: &TaxpayerProfile,
    ) -> Decimal {
        if profile.is_senior {
            self.constants.senior_allowance
        } else {
            Decimal::ZERO
        }
    }

    /// Total allowance for an ordered list of dependents.
    ///
    /// Every dependent contributes the base child allowance. A dependent
    /// that is not the first entry and was born in or after the bonus
    /// threshold year contributes the bonus on top. Position is taken from
    /// the order the dependents were supplied in; the list is never
    /// re-sorted, so a first-listed child born after the threshold still
    /// receives no bonus.
    pub fn child_allowance(
        &self,
        dependents: &[Dependent],
    ) -> Decimal {
        dependents
            .iter()
            .enumerate()
            .fold(Decimal::ZERO, |total, (index, dependent)| {
                let bonus = if index > 0
                    && dependent.birth_year >= self.constants.child_bonus_birth_year
                {
                    self.constants.child_bonus_allowance
                } else {
                    Decimal::ZERO
                };
                total + self.constants.child_allowance + bonus
            })
    }

    /// Supported parents count toward the allowance only up to the
    /// configured maximum.
    fn parent_allowance(
        &self,
        supported_parents: u32,
    ) -> Decimal {
        let counted = supported_parents.min(self.constants.max_supported_parents);
        self.constants.parent_allowance * Decimal::from(counted)
    }
}
