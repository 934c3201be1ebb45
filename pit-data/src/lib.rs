pub mod dataset;
pub mod loader;

pub use dataset::tax_year_2024;
pub use loader::{
    BracketScheduleError, BracketScheduleLoader, BracketScheduleRecord, ConstantsFileError,
    load_constants_toml,
};
