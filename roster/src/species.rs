//! Species helpers over catalog rows

use counterpick_chart::{SpeciesRow, find_by_name};
use counterpick_engine::Typing;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Species not found in catalog: {0}")]
    UnknownSpecies(String),

    #[error("Opposing team is empty")]
    EmptyOpponents,
}

/// The battle typing of a catalog species
pub fn typing_of(row: &SpeciesRow) -> Typing {
    match &row.type2 {
        Some(second) => Typing::dual(&row.type1, second),
        None => Typing::single(&row.type1),
    }
}

/// Resolve species names against the catalog, preserving order
pub fn resolve_names(catalog: &[SpeciesRow], names: &[String]) -> Result<Vec<SpeciesRow>, RosterError> {
    names
        .iter()
        .map(|name| {
            find_by_name(catalog, name)
                .cloned()
                .ok_or_else(|| RosterError::UnknownSpecies(name.clone()))
        })
        .collect()
}
