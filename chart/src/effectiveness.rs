//! Effectiveness table parsing
//!
//! The table is a square CSV matrix. The header row is a corner label
//! followed by the defending type names; each body row is an attacking type
//! name followed by one multiplier per defender.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::ChartError;

/// A fully parsed effectiveness table
///
/// `matrix[i][j]` is the effectiveness of `types[i]` attacking `types[j]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectivenessChart {
    /// Type names in table order
    pub types: Vec<String>,

    /// Square multiplier matrix, rows indexed like `types`
    pub matrix: Vec<Vec<f32>>,
}

impl EffectivenessChart {
    /// Number of types in the table
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the table holds no types
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Parse a type chart CSV into an [`EffectivenessChart`]
pub fn parse_chart(input: &str) -> Result<EffectivenessChart> {
    let mut lines = input.lines().filter(|line| !line.trim().is_empty());

    let header = lines.next().ok_or(ChartError::EmptyTable)?;
    let types: Vec<String> = header
        .split(',')
        .skip(1)
        .map(|name| name.trim().to_string())
        .collect();
    if types.is_empty() {
        return Err(ChartError::MissingField("defending type names".to_string()).into());
    }

    let mut matrix = Vec::with_capacity(types.len());
    for line in lines {
        let mut fields = line.split(',');
        let attacker = fields
            .next()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ChartError::MissingField("attacking type name".to_string()))?;

        let row = fields
            .map(|field| {
                field.trim().parse::<f32>().map_err(|_| {
                    ChartError::InvalidFormat(format!(
                        "bad multiplier {:?} in row {}",
                        field.trim(),
                        attacker
                    ))
                })
            })
            .collect::<Result<Vec<f32>, _>>()?;

        if row.len() != types.len() {
            return Err(ChartError::InvalidFormat(format!(
                "row {} has {} multipliers, expected {}",
                attacker,
                row.len(),
                types.len()
            ))
            .into());
        }
        matrix.push(row);
    }

    if matrix.len() != types.len() {
        return Err(ChartError::InvalidFormat(format!(
            "{} attacking rows for {} defending types",
            matrix.len(),
            types.len()
        ))
        .into());
    }

    Ok(EffectivenessChart { types, matrix })
}
