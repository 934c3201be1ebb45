use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Allowance sub-amounts, one per household rule, reported individually.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowanceBreakdown {
    pub personal: Decimal,
    pub spouse: Decimal,
    pub senior: Decimal,
    pub child: Decimal,
    pub parent: Decimal,
}

impl AllowanceBreakdown {
    pub fn total(&self) -> Decimal {
        self.personal + self.spouse + self.senior + self.child + self.parent
    }
}

/// Deduction amounts after caps have been applied.
///
/// Every elective field already reflects its category cap; an unclaimed
/// category is zero. `standard` is carried alongside the electives so a
/// report can show one inclusive deduction total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionBreakdown {
    pub standard: Decimal,
    pub social_security: Decimal,
    pub life_insurance: Decimal,
    pub health_insurance: Decimal,
    pub pension_fund: Decimal,
    pub provident_fund: Decimal,
    pub retirement_mutual_fund: Decimal,
    pub savings_fund: Decimal,
    pub donations: Decimal,
}

impl DeductionBreakdown {
    /// Sum of the elective categories, excluding the standard deduction.
    pub fn elective_total(&self) -> Decimal {
        self.social_security
            + self.life_insurance
            + self.health_insurance
            + self.pension_fund
            + self.provident_fund
            + self.retirement_mutual_fund
            + self.savings_fund
            + self.donations
    }

    /// Standard deduction plus all elective categories.
    pub fn total(&self) -> Decimal {
        self.standard + self.elective_total()
    }
}

/// Income taxed within one bracket and the tax accrued there.
///
/// Brackets the taxable income never reaches are omitted from reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BracketTaxLine {
    pub label: String,
    pub taxed_amount: Decimal,
    pub tax: Decimal,
}

/// The full numeric outcome of one annual calculation.
///
/// Owned by the caller once returned; the engine keeps nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    pub gross_income: Decimal,

    /// Sum of all allowance sub-amounts.
    pub total_allowances: Decimal,

    /// Standard deduction plus all capped elective deductions.
    pub total_deductions: Decimal,

    /// Income remaining after allowances and deductions, floored at zero.
    pub taxable_income: Decimal,

    pub tax_owed: Decimal,
    pub tax_withheld: Decimal,

    /// Withheld minus owed: positive is a refund due, negative is additional
    /// tax owed, zero is balanced.
    pub refund_or_owed: Decimal,

    /// Tax owed as a percentage of gross income; zero for zero income.
    pub effective_rate: Decimal,

    pub allowances: AllowanceBreakdown,
    pub deductions: DeductionBreakdown,
    pub bracket_lines: Vec<BracketTaxLine>,
}
