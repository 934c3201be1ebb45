mod logging;
mod report;

use std::fs::{self, File};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pit_core::{AnnualTaxCalculator, TaxpayerProfile};
use pit_data::{BracketScheduleLoader, load_constants_toml, tax_year_2024};

/// Compute an annual personal income tax breakdown for a taxpayer profile.
///
/// The profile is a TOML file describing income, household facts, and
/// elective deduction claims. Re-run the command as the profile changes to
/// see the updated breakdown.
#[derive(Parser, Debug)]
#[command(name = "pit")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the taxpayer profile TOML file
    #[arg(short, long)]
    profile: PathBuf,

    /// Replace the built-in constants table with one loaded from TOML
    #[arg(short, long)]
    constants: Option<PathBuf>,

    /// Replace only the bracket schedule with one loaded from CSV
    #[arg(short, long)]
    brackets: Option<PathBuf>,

    /// Emit the result as JSON instead of text
    #[arg(long, default_value_t = false)]
    json: bool,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let mut constants = match &args.constants {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read constants file: {}", path.display()))?;
            load_constants_toml(&contents)
                .with_context(|| format!("Failed to load constants from: {}", path.display()))?
        }
        None => tax_year_2024(),
    };

    if let Some(path) = &args.brackets {
        let file = File::open(path)
            .with_context(|| format!("Failed to open bracket schedule: {}", path.display()))?;
        let records = BracketScheduleLoader::parse(file)
            .with_context(|| format!("Failed to parse bracket schedule: {}", path.display()))?;
        constants.brackets = BracketScheduleLoader::into_schedule(records);
        constants
            .validate()
            .context("Replacement bracket schedule failed validation")?;
    }

    let profile_contents = fs::read_to_string(&args.profile)
        .with_context(|| format!("Failed to read profile: {}", args.profile.display()))?;
    let profile: TaxpayerProfile = toml::from_str(&profile_contents)
        .with_context(|| format!("Failed to parse profile: {}", args.profile.display()))?;

    tracing::info!(
        tax_year = constants.tax_year,
        marital_status = profile.marital_status.as_str(),
        "computing annual tax"
    );

    let result = AnnualTaxCalculator::new(&constants).calculate(&profile);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", report::render(&result));
    }

    Ok(())
}
