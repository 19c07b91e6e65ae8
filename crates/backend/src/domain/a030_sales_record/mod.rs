#[cfg(test)]
pub mod fixtures;
pub mod repository;

pub use repository::{SalesSelection, SalesTable};
