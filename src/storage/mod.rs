mod common;
mod csv_storage;

pub use common::*;
pub use csv_storage::CsvStorage;
