//! Built-in constants tables.

use pit_core::{TaxBracket, TaxConstants};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn bracket(
    label: &str,
    max_income: Option<Decimal>,
    rate: Decimal,
) -> TaxBracket {
    TaxBracket {
        max_income,
        rate,
        label: label.to_string(),
    }
}

/// The built-in constants table for tax year 2024.
///
/// Allowances: personal 60,000; spouse 60,000 (no-income spouse only);
/// senior 190,000; child 30,000 with a 30,000 bonus for second and later
/// children born 2018 onwards; parent 30,000 each for at most 4 parents.
/// Standard deduction: 50% of income, capped at 100,000. Donations cap at
/// 10% of pre-donation taxable income.
pub fn tax_year_2024() -> TaxConstants {
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
