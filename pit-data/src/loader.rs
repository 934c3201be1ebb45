//! Loaders for alternate constants tables: CSV bracket schedules and full
//! TOML constants files.

use std::io::Read;

use pit_core::{TaxBracket, TaxConstants, TaxConstantsError};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading a bracket schedule from CSV.
#[derive(Debug, Error)]
pub enum BracketScheduleError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),
}

impl From<csv::Error> for BracketScheduleError {
    fn from(err: csv::Error) -> Self {
        BracketScheduleError::CsvParse(err.to_string())
    }
}

/// A single record from a bracket schedule CSV file.
///
/// Columns:
/// - `label`: display label for the bracket
/// - `max_income`: upper income bound (empty for the unbounded top bracket)
/// - `rate`: marginal rate as a decimal fraction (e.g. 0.05 for 5%)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BracketScheduleRecord {
    pub label: String,
    #[serde(deserialize_with = "deserialize_optional_decimal")]
    pub max_income: Option<Decimal>,
    pub rate: Decimal,
}

fn deserialize_optional_decimal<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: Option<String> = Option::deserialize(deserializer)?;
    match s {
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .trim()
            .parse::<Decimal>()
            .map(Some)
            .map_err(serde::de::Error::custom),
        None => Ok(None),
    }
}

/// Loader for bracket schedule data from CSV files.
///
/// Ordering and well-formedness of the resulting schedule (ascending bounds,
/// exactly one unbounded top bracket) are checked by
/// [`TaxConstants::validate`] once the schedule is placed into a table.
pub struct BracketScheduleLoader;

impl BracketScheduleLoader {
    /// Parse bracket schedule records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or
    /// a string slice.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<BracketScheduleRecord>, BracketScheduleError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: BracketScheduleRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Converts parsed records into a schedule, preserving file order.
    pub fn into_schedule(records: Vec<BracketScheduleRecord>) -> Vec<TaxBracket> {
        records
            .into_iter()
            .map(|record| TaxBracket {
                max_income: record.max_income,
                rate: record.rate,
                label: record.label,
            })
            .collect()
    }
}

/// Errors that can occur when loading a constants table from TOML.
#[derive(Debug, Error)]
pub enum ConstantsFileError {
    #[error("TOML parse error: {0}")]
    TomlParse(String),

    #[error("invalid constants table: {0}")]
    Invalid(#[from] TaxConstantsError),
}

/// Deserializes a full constants table from TOML and validates it.
pub fn load_constants_toml(contents: &str) -> Result<TaxConstants, ConstantsFileError> {
    let constants: TaxConstants =
        toml::from_str(contents).map_err(|e| ConstantsFileError::TomlParse(e.to_string()))?;
    constants.validate()?;
    Ok(constants)
}
