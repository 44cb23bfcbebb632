use thiserror::Error;

pub mod catalog;
pub mod effectiveness;

pub use catalog::{SpeciesRow, find_by_id, find_by_name, parse_catalog};
pub use effectiveness::{EffectivenessChart, parse_chart};

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid table format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Empty table")]
    EmptyTable,
}
