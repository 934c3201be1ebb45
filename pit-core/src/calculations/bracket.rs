//! Progressive bracket tax: taxable income to tax owed, by walking the
//! ordered rate schedule.
//!
//! The walk is a left fold carrying the remaining untaxed income, the bound
//! of the previous bracket, and the tax accumulated so far. Each bracket
//! taxes at most its own width; the unbounded final bracket absorbs whatever
//! remains. No bracket is revisited and the schedule is never mutated, so
//! the fold is referentially transparent.

use rust_decimal::Decimal;

use crate::calculations::common::{max, round_half_up};
use crate::models::{BracketTaxLine, TaxBracket};

/// Tax engine over an ordered bracket schedule.
///
/// The schedule must be sorted by ascending upper bound with only the final
/// bracket unbounded; `TaxConstants::validate` enforces this where a table
/// is constructed. An empty schedule yields zero tax.
#[derive(Debug, Clone)]
pub struct BracketTaxEngine<'a> {
    schedule: &'a [TaxBracket],
}

/// Fold state for one walk over the schedule.
struct BracketWalk {
    remaining: Decimal,
    previous_bound: Decimal,
    tax: Decimal,
    lines: Vec<BracketTaxLine>,
}

impl<'a> BracketTaxEngine<'a> {
    pub fn new(schedule: &'a [TaxBracket]) -> Self {
        Self { schedule }
    }

    /// Tax owed on `taxable_income`. Never negative; zero for incomes inside
    /// a zero-rate exempt band.
    pub fn tax_for(
        &self,
        taxable_income: Decimal,
    ) -> Decimal {
        round_half_up(self.walk(taxable_income).tax)
    }

    /// Per-bracket lines for reporting: the income taxed within each bracket
    /// and the tax accrued there. Brackets the income never reaches are
    /// omitted. Line amounts are rounded individually for display; the total
    /// from [`tax_for`](Self::tax_for) is rounded once over the full sum.
    pub fn bracket_lines(
        &self,
        taxable_income: Decimal,
    ) -> Vec<BracketTaxLine> {
        self.walk(taxable_income).lines
    }

    fn walk(
        &self,
        taxable_income: Decimal,
    ) -> BracketWalk {
        let start = BracketWalk {
            remaining: max(taxable_income, Decimal::ZERO),
            previous_bound: Decimal::ZERO,
            tax: Decimal::ZERO,
            lines: Vec::new(),
        };

        self.schedule.iter().fold(start, |mut walk, bracket| {
            if walk.remaining <= Decimal::ZERO {
                return walk;
            }
            let amount_in_bracket = match bracket.max_income {
                Some(bound) => walk.remaining.min(bound - walk.previous_bound),
                None => walk.remaining,
            };
            let bracket_tax = amount_in_bracket * bracket.rate;
            walk.lines.push(BracketTaxLine {
                label: bracket.label.clone(),
                taxed_amount: amount_in_bracket,
                tax: round_half_up(bracket_tax),
            });
            BracketWalk {
                remaining: walk.remaining - amount_in_bracket,
                previous_bound: bracket.max_income.unwrap_or(walk.previous_bound),
                tax: walk.tax + bracket_tax,
                lines: walk.lines,
            }
        })
    }
}
