use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How the taxpayer earns the declared income.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmploymentType {
    Employee,
    SelfEmployed,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::SelfEmployed => "self-employed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaritalStatus {
    Single,
    Married,
}

impl MaritalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Married => "married",
        }
    }
}

/// A dependent child. Only the birth year matters for allowance purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependent {
    pub birth_year: i32,
}

/// Elective deduction claims, one optional amount per category.
///
/// `None` means the category is not claimed and contributes exactly zero.
/// A claimed amount is clamped to the category cap during calculation, never
/// here; the profile stores what the taxpayer declared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionClaims {
    /// Social security contributions withheld through the year.
    pub social_security: Option<Decimal>,

    /// Life insurance premiums.
    pub life_insurance: Option<Decimal>,

    /// Health insurance premiums.
    pub health_insurance: Option<Decimal>,

    /// Pension insurance premiums.
    pub pension_fund: Option<Decimal>,

    /// Employer-sponsored provident fund contributions.
    pub provident_fund: Option<Decimal>,

    /// Retirement mutual fund purchases.
    pub retirement_mutual_fund: Option<Decimal>,

    /// Tax-advantaged savings fund purchases.
    pub savings_fund: Option<Decimal>,

    /// Charitable donations. Capped as a fraction of pre-donation taxable
    /// income rather than at a fixed amount.
    pub donations: Option<Decimal>,
}

/// The taxpayer facts a single annual calculation runs over.
///
/// Amounts are expected non-negative; the calculators clamp rather than
/// reject out-of-range values. The order of `dependents` is significant:
/// the child allowance bonus never applies to the first entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxpayerProfile {
    pub employment: EmploymentType,

    /// Gross annual income.
    pub gross_income: Decimal,

    pub marital_status: MaritalStatus,

    /// Grants the spouse allowance when married.
    #[serde(default)]
    pub spouse_has_no_income: bool,

    /// Age 65 or older.
    #[serde(default)]
    pub is_senior: bool,

    /// Dependent children, in the order the taxpayer declared them.
    #[serde(default)]
    pub dependents: Vec<Dependent>,

    /// Number of parents the taxpayer supports. Counted up to the configured
    /// maximum during calculation.
    #[serde(default)]
    pub supported_parents: u32,

    #[serde(default)]
    pub claims: DeductionClaims,

    /// Tax already withheld during the year.
    #[serde(default)]
    pub tax_withheld: Decimal,
}
