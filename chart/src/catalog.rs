//! Species catalog parsing
//!
//! Catalog rows follow the scraped CSV layout: id, name, primary type,
//! optional secondary type, then the six base stats.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::ChartError;

/// One species entry from the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRow {
    /// Catalog id (national dex number in the reference data)
    pub id: u32,

    /// Species name
    pub name: String,

    /// Primary type
    pub type1: String,

    /// Secondary type, if the species is dual-typed
    pub type2: Option<String>,

    /// HP, Attack, Defense, Sp. Attack, Sp. Defense, Speed
    pub stats: [u16; 6],
}

impl SpeciesRow {
    /// Base stat total
    pub fn bst(&self) -> u32 {
        self.stats.iter().map(|&stat| u32::from(stat)).sum()
    }
}

/// Parse the species catalog CSV (header row is skipped)
pub fn parse_catalog(input: &str) -> Result<Vec<SpeciesRow>> {
    let mut lines = input.lines().filter(|line| !line.trim().is_empty());
    lines.next().ok_or(ChartError::EmptyTable)?;

    lines.map(parse_row).collect()
}

fn parse_row(line: &str) -> Result<SpeciesRow> {
    let fields: Vec<&str> = line.split(',').map(str::trim).collect();
    if fields.len() < 10 {
        return Err(ChartError::InvalidFormat(format!(
            "catalog row has {} fields, expected 10",
            fields.len()
        ))
        .into());
    }

    let id = fields[0]
        .parse::<u32>()
        .map_err(|_| ChartError::InvalidFormat(format!("bad species id {:?}", fields[0])))?;

    let name = fields[1].to_string();
    if name.is_empty() {
        return Err(ChartError::MissingField(format!("name for species {}", id)).into());
    }

    let type1 = fields[2].to_string();
    if type1.is_empty() {
        return Err(ChartError::MissingField(format!("primary type for {}", name)).into());
    }
    let type2 = if fields[3].is_empty() {
        None
    } else {
        Some(fields[3].to_string())
    };

    let mut stats = [0u16; 6];
    for (slot, field) in stats.iter_mut().zip(&fields[4..10]) {
        *slot = field
            .parse::<u16>()
            .map_err(|_| ChartError::InvalidFormat(format!("bad stat {:?} for {}", field, name)))?;
    }

    Ok(SpeciesRow {
        id,
        name,
        type1,
        type2,
        stats,
    })
}

/// Look up a species by name (case-insensitive)
pub fn find_by_name<'a>(catalog: &'a [SpeciesRow], name: &str) -> Option<&'a SpeciesRow> {
    catalog.iter().find(|row| row.name.eq_ignore_ascii_case(name))
}

/// Look up a species by catalog id
pub fn find_by_id(catalog: &[SpeciesRow], id: u32) -> Option<&SpeciesRow> {
    catalog.iter().find(|row| row.id == id)
}
