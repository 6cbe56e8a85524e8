//! Dataset ingestion and cleaning.

mod clean;
mod loader;
mod record;

pub use clean::{clean, drop_duplicates, drop_missing, standardize, CleanReport};
pub use loader::{from_reader, load_csv};
pub use record::VehicleRecord;
