//! Text rendering of a calculation result.
//!
//! All string formatting lives here, outside the engine: the calculators
//! hand over plain numbers and this module decides how they read.

use std::fmt::Write;

use pit_core::TaxResult;
use rust_decimal::Decimal;

/// Formats a decimal amount with comma thousands separators,
/// e.g. `1234567.89` becomes `"1,234,567.89"`.
pub fn format_amount(amount: Decimal) -> String {
    let rendered = amount.normalize().to_string();
    let (sign, unsigned) = match rendered.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rendered.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (position, digit) in integer.chars().enumerate() {
        if position > 0 && (integer.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

fn line(
    out: &mut String,
    label: &str,
    amount: Decimal,
) {
    let _ = writeln!(out, "  {:<28}{:>16}", label, format_amount(amount));
}

/// Renders the full numeric breakdown as plain text.
pub fn render(result: &TaxResult) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Annual personal income tax");
    let _ = writeln!(out, "==========================");
    line(&mut out, "Gross income", result.gross_income);
    let _ = writeln!(out);

    let _ = writeln!(out, "Allowances");
    line(&mut out, "personal", result.allowances.personal);
    line(&mut out, "spouse", result.allowances.spouse);
    line(&mut out, "senior", result.allowances.senior);
    line(&mut out, "children", result.allowances.child);
    line(&mut out, "parents", result.allowances.parent);
    line(&mut out, "total", result.total_allowances);
    let _ = writeln!(out);

    let _ = writeln!(out, "Deductions");
    line(&mut out, "standard", result.deductions.standard);
    line(&mut out, "social security", result.deductions.social_security);
    line(&mut out, "life insurance", result.deductions.life_insurance);
    line(&mut out, "health insurance", result.deductions.health_insurance);
    line(&mut out, "pension fund", result.deductions.pension_fund);
    line(&mut out, "provident fund", result.deductions.provident_fund);
    line(
        &mut out,
        "retirement mutual fund",
        result.deductions.retirement_mutual_fund,
    );
    line(&mut out, "savings fund", result.deductions.savings_fund);
    line(&mut out, "donations", result.deductions.donations);
    line(&mut out, "total", result.total_deductions);
    let _ = writeln!(out);

    line(&mut out, "Taxable income", result.taxable_income);
    let _ = writeln!(out);

    if !result.bracket_lines.is_empty() {
        let _ = writeln!(out, "Tax by bracket");
        for bracket_line in &result.bracket_lines {
            let _ = writeln!(
                out,
                "  {:<28}{:>16}{:>16}",
                bracket_line.label,
                format_amount(bracket_line.taxed_amount),
                format_amount(bracket_line.tax),
            );
        }
        let _ = writeln!(out);
    }

    line(&mut out, "Tax owed", result.tax_owed);
    line(&mut out, "Tax withheld", result.tax_withheld);
    if result.refund_or_owed >= Decimal::ZERO {
        line(&mut out, "Refund due", result.refund_or_owed);
    } else {
        line(&mut out, "Additional tax owed", -result.refund_or_owed);
    }
    let rate = format!("{}%", result.effective_rate);
    let _ = writeln!(out, "  {:<28}{:>16}", "Effective rate", rate);

    out
}

#[cfg(test)]
mod tests {
    use pit_core::{AllowanceBreakdown, BracketTaxLine, DeductionBreakdown};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn sample_result() -> TaxResult {
        TaxResult {
            gross_income: dec!(500000),
            total_allowances: dec!(60000),
            total_deductions: dec!(100000),
            taxable_income: dec!(340000),
            tax_owed: dec!(11500),
            tax_withheld: dec!(30000),
            refund_or_owed: dec!(18500),
            effective_rate: dec!(2.3),
            allowances: AllowanceBreakdown {
                personal: dec!(60000),
                spouse: dec!(0),
                senior: dec!(0),
                child: dec!(0),
                parent: dec!(0),
            },
            deductions: DeductionBreakdown {
                standard: dec!(100000),
                social_security: dec!(0),
                life_insurance: dec!(0),
                health_insurance: dec!(0),
                pension_fund: dec!(0),
                provident_fund: dec!(0),
                retirement_mutual_fund: dec!(0),
                savings_fund: dec!(0),
                donations: dec!(0),
            },
            bracket_lines: vec![
                BracketTaxLine {
                    label: "0 - 150,000".to_string(),
                    taxed_amount: dec!(150000),
                    tax: dec!(0),
                },
                BracketTaxLine {
                    label: "150,001 - 300,000".to_string(),
                    taxed_amount: dec!(150000),
                    tax: dec!(7500),
                },
                BracketTaxLine {
                    label: "300,001 - 500,000".to_string(),
                    taxed_amount: dec!(40000),
                    tax: dec!(4000),
                },
            ],
        }
    }

    // =========================================================================
    // format_amount tests
    // =========================================================================

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(dec!(1234567.89)), "1,234,567.89");
    }

    #[test]
    fn format_amount_leaves_small_amounts_ungrouped() {
        assert_eq!(format_amount(dec!(999)), "999");
    }

    #[test]
    fn format_amount_handles_exact_group_width() {
        assert_eq!(format_amount(dec!(1000)), "1,000");
        assert_eq!(format_amount(dec!(100000)), "100,000");
    }

    #[test]
    fn format_amount_keeps_sign_outside_grouping() {
        assert_eq!(format_amount(dec!(-1500)), "-1,500");
    }

    #[test]
    fn format_amount_zero() {
        assert_eq!(format_amount(dec!(0)), "0");
    }

    #[test]
    fn format_amount_drops_trailing_zero_scale() {
        // Calculation results carry two decimal places; whole amounts
        // render without them.
        assert_eq!(format_amount(dec!(11500.00)), "11,500");
    }

    // =========================================================================
    // render tests
    // =========================================================================

    #[test]
    fn render_shows_refund_line_for_positive_balance() {
        let rendered = render(&sample_result());

        assert!(rendered.contains("Refund due"));
        assert!(rendered.contains("18,500"));
        assert!(!rendered.contains("Additional tax owed"));
    }

    #[test]
    fn render_shows_additional_tax_line_for_negative_balance() {
        let mut result = sample_result();
        result.tax_withheld = dec!(10000);
        result.refund_or_owed = dec!(-1500);

        let rendered = render(&result);

        assert!(rendered.contains("Additional tax owed"));
        assert!(rendered.contains("1,500"));
    }

    #[test]
    fn render_includes_every_bracket_line() {
        let rendered = render(&sample_result());

        assert!(rendered.contains("0 - 150,000"));
        assert!(rendered.contains("150,001 - 300,000"));
        assert!(rendered.contains("300,001 - 500,000"));
    }

    #[test]
    fn render_includes_key_figures() {
        let rendered = render(&sample_result());

        assert!(rendered.contains("340,000"));
        assert!(rendered.contains("11,500"));
        assert!(rendered.contains("2.3%"));
    }
}
