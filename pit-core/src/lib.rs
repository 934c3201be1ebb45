pub mod calculations;
pub mod models;

pub use calculations::{
    AllowanceCalculator, AnnualTaxCalculator, BracketTaxEngine, DeductionCalculator,
};
pub use models::*;
