//! Counter team selection
//!
//! Mirrors the full matchup flow: recommend counter typings for the opposing
//! team, pull every catalog species carrying one of those typings, then trim
//! by base stat total so the suggestion stays in the opponents' power band.

use std::ops::RangeInclusive;

use anyhow::Result;
use counterpick_chart::{EffectivenessChart, SpeciesRow};
use counterpick_engine::{Recommendation, Typing, recommend_counters};
use tracing::debug;

use crate::species::{RosterError, typing_of};

/// Window around the opposing team's total when all entries share it
const UNIFORM_BST_MARGIN: u32 = 20;

/// A selected counter team plus the typing pairings that produced it
#[derive(Debug, Clone)]
pub struct CounterTeam {
    /// Chosen catalog species, strongest first
    pub members: Vec<SpeciesRow>,

    /// The engine's (counter, opponent) typing pairs
    pub recommendations: Vec<Recommendation>,
}

/// Mean base stat total of a team
pub fn team_bst(team: &[SpeciesRow]) -> u32 {
    if team.is_empty() {
        return 0;
    }
    team.iter().map(SpeciesRow::bst).sum::<u32>() / team.len() as u32
}

/// The base-stat window a counter team should fall into
///
/// A team with one uniform total gets a narrow margin around it; a spread
/// out team gets its own min..=max band.
pub fn ideal_bst_range(team: &[SpeciesRow]) -> RangeInclusive<u32> {
    let uniform = team
        .windows(2)
        .all(|pair| pair[0].bst() == pair[1].bst());
    if uniform {
        let mean = team_bst(team);
        mean.saturating_sub(UNIFORM_BST_MARGIN)..=mean + UNIFORM_BST_MARGIN
    } else {
        let min = team.iter().map(SpeciesRow::bst).min().unwrap_or(0);
        let max = team.iter().map(SpeciesRow::bst).max().unwrap_or(0);
        min..=max
    }
}

/// Pick a counter team for `opponents` out of `catalog`
///
/// Runs the engine over the opponents' typings, gathers every species whose
/// typing matches a recommendation (single-type recommendations also match
/// on primary type alone), then prefers species inside the opposing BST
/// window, backfilling from the remaining matches when the window is too
/// tight. Members come back sorted by base stat total, strongest first.
pub fn select_counter_team(
    catalog: &[SpeciesRow],
    chart: &EffectivenessChart,
    opponents: &[SpeciesRow],
    team_size: usize,
) -> Result<CounterTeam> {
    if opponents.is_empty() {
        return Err(RosterError::EmptyOpponents.into());
    }

    let opposing_typings: Vec<Typing> = opponents.iter().map(typing_of).collect();
    let recommendations = recommend_counters(chart, &opposing_typings, Some(opponents.len()))?;
    debug!(pairs = recommendations.len(), "engine produced typing pairings");

    let counters: Vec<&Typing> = recommendations.iter().map(|rec| &rec.counter).collect();
    let matches: Vec<&SpeciesRow> = catalog
        .iter()
        .filter(|row| matches_recommendation(row, &counters))
        .collect();
    debug!(candidates = matches.len(), "catalog species carry a recommended typing");

    let range = ideal_bst_range(opponents);
    let mut picked: Vec<SpeciesRow> = matches
        .iter()
        .filter(|row| range.contains(&row.bst()))
        .map(|&row| row.clone())
        .collect();

    if picked.len() < team_size {
        // Window too tight, top up from the matches it excluded
        let missing = team_size - picked.len();
        let backfill: Vec<SpeciesRow> = matches
            .iter()
            .filter(|row| !picked.iter().any(|kept| kept == **row))
            .take(missing)
            .map(|&row| row.clone())
            .collect();
        picked.extend(backfill);
    }

    picked.sort_by(|a, b| b.bst().cmp(&a.bst()));
    picked.truncate(team_size);
    debug!(members = picked.len(), "selected counter team");

    Ok(CounterTeam {
        members: picked,
        recommendations,
    })
}

fn matches_recommendation(row: &SpeciesRow, counters: &[&Typing]) -> bool {
    let typing = typing_of(row);
    counters.iter().any(|counter| {
        **counter == typing
            || matches!(counter, Typing::Single(name) if *name == row.type1)
    })
}
