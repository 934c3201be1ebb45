//! End-to-end calculation scenarios against the built-in 2024 table.

use pit_core::{
    AnnualTaxCalculator, DeductionClaims, Dependent, EmploymentType, MaritalStatus,
    TaxpayerProfile,
};
use pit_data::tax_year_2024;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn single_employee(gross_income: Decimal) -> TaxpayerProfile {
    TaxpayerProfile {
        employment: EmploymentType::Employee,
        gross_income,
        marital_status: MaritalStatus::Single,
        spouse_has_no_income: false,
        is_senior: false,
        dependents: vec![],
        supported_parents: 0,
        claims: DeductionClaims::default(),
        tax_withheld: dec!(0),
    }
}

#[test]
fn single_employee_half_million_income_no_claims() {
    let constants = tax_year_2024();
    let calculator = AnnualTaxCalculator::new(&constants);

    let result = calculator.calculate(&single_employee(dec!(500000)));

    assert_eq!(result.total_allowances, dec!(60000));
    assert_eq!(result.total_deductions, dec!(100000));
    assert_eq!(result.taxable_income, dec!(340000));
    assert_eq!(result.tax_owed, dec!(11500));
    assert_eq!(result.effective_rate, dec!(2.3));
}

#[test]
fn married_sole_earner_with_two_children() {
    let constants = tax_year_2024();
    let calculator = AnnualTaxCalculator::new(&constants);
    let mut profile = single_employee(dec!(1000000));
    profile.marital_status = MaritalStatus::Married;
    profile.spouse_has_no_income = true;
    profile.dependents = vec![
        Dependent { birth_year: 2015 },
        Dependent { birth_year: 2020 },
    ];

    let result = calculator.calculate(&profile);

    assert_eq!(result.total_allowances, dec!(210000));
    assert_eq!(result.taxable_income, dec!(690000));
    assert_eq!(result.tax_owed, dec!(56000));
}

#[test]
fn donation_claim_capped_at_ten_percent_of_remaining_income() {
    let constants = tax_year_2024();
    let calculator = AnnualTaxCalculator::new(&constants);
    // Gross chosen so the pre-donation base lands on 500,000:
    // 660,000 - 100,000 standard - 60,000 personal.
    let mut profile = single_employee(dec!(660000));
    profile.claims.donations = Some(dec!(100000));

    let result = calculator.calculate(&profile);

    assert_eq!(result.deductions.donations, dec!(50000));
    assert_eq!(result.taxable_income, dec!(450000));
    assert_eq!(result.tax_owed, dec!(22500));
}

#[test]
fn zero_income_yields_zero_everything() {
    let constants = tax_year_2024();
    let calculator = AnnualTaxCalculator::new(&constants);

    let result = calculator.calculate(&single_employee(dec!(0)));

    assert_eq!(result.taxable_income, dec!(0));
    assert_eq!(result.tax_owed, dec!(0));
    assert_eq!(result.effective_rate, dec!(0));
}

#[test]
fn withholding_above_owed_is_a_refund() {
    let constants = tax_year_2024();
    let calculator = AnnualTaxCalculator::new(&constants);
    let mut profile = single_employee(dec!(500000));
    profile.tax_withheld = dec!(30000);

    let result = calculator.calculate(&profile);

    assert_eq!(result.refund_or_owed, dec!(18500));
}

#[test]
fn withholding_below_owed_is_a_balance_due() {
    let constants = tax_year_2024();
    let calculator = AnnualTaxCalculator::new(&constants);
    let mut profile = single_employee(dec!(500000));
    profile.tax_withheld = dec!(10000);

    let result = calculator.calculate(&profile);

    assert_eq!(result.refund_or_owed, dec!(-1500));
}

#[test]
fn every_elective_category_lands_on_its_cap_for_a_high_earner() {
    let constants = tax_year_2024();
    let calculator = AnnualTaxCalculator::new(&constants);
    let huge = dec!(10000000);
    let mut profile = single_employee(huge);
    profile.claims = DeductionClaims {
        social_security: Some(huge),
        life_insurance: Some(huge),
        health_insurance: Some(huge),
        pension_fund: Some(huge),
        provident_fund: Some(huge),
        retirement_mutual_fund: Some(huge),
        savings_fund: Some(huge),
        donations: Some(huge),
    };

    let result = calculator.calculate(&profile);

    let deductions = &result.deductions;
    assert_eq!(deductions.social_security, dec!(9000));
    assert_eq!(deductions.life_insurance, dec!(100000));
    assert_eq!(deductions.health_insurance, dec!(25000));
    assert_eq!(deductions.pension_fund, dec!(200000));
    assert_eq!(deductions.provident_fund, dec!(500000));
    assert_eq!(deductions.retirement_mutual_fund, dec!(500000));
    assert_eq!(deductions.savings_fund, dec!(200000));
    // 10% of 10,000,000 - 100,000 - 60,000.
    assert_eq!(deductions.donations, dec!(984000));
    assert_eq!(result.taxable_income, dec!(7322000));
}

#[test]
fn repeated_invocation_with_identical_profile_is_bit_identical() {
    let constants = tax_year_2024();
    let calculator = AnnualTaxCalculator::new(&constants);
    let mut profile = single_employee(dec!(1234567));
    profile.is_senior = true;
    profile.supported_parents = 3;
    profile.claims.retirement_mutual_fund = Some(dec!(98765));
    profile.tax_withheld = dec!(55000);

    let first = calculator.calculate(&profile);
    let second = calculator.calculate(&profile);

    assert_eq!(first, second);
}
