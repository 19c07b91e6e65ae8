pub mod archive;
pub mod csv_parser;
pub mod error;
pub mod executor;

#[cfg(test)]
pub mod fixtures;

pub use error::DataLoadError;
pub use executor::{load_archive, load_sales_table};
