mod constants;
mod profile;
mod result;
mod tax_bracket;

pub use constants::{TaxConstants, TaxConstantsError};
pub use profile::{DeductionClaims, Dependent, EmploymentType, MaritalStatus, TaxpayerProfile};
pub use result::{AllowanceBreakdown, BracketTaxLine, DeductionBreakdown, TaxResult};
pub use tax_bracket::TaxBracket;

#[cfg(test)]
pub(crate) use constants::test_constants;
