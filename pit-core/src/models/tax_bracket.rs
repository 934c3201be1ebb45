use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One row of a progressive rate schedule.
///
/// Rows are ordered by ascending upper bound. The final row carries
/// `max_income: None` and absorbs all remaining income; every other row is
/// bounded. A zero `rate` on the lowest row models an exempt band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxBracket {
    /// Upper income bound of the bracket, `None` for the open-ended top bracket.
    pub max_income: Option<Decimal>,
    /// Marginal rate applied to income falling inside the bracket.
    pub rate: Decimal,
    /// Display label, e.g. `"150,001 - 300,000"`.
    pub label: String,
}
