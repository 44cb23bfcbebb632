//! Greedy assignment of ranked candidates to opposing slots

use std::collections::HashMap;

use counterpick_chart::EffectivenessChart;

use crate::EngineError;
use crate::graph::TypeGraph;
use crate::query;
use crate::recommend::{aggregate_profile, net_preference, rank_candidates};
use crate::types::Typing;

/// One assigned (counter, opponent) pair
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Recommendation {
    /// Recommended counter typing
    pub counter: Typing,

    /// The opposing entry this counter was assigned to
    pub opponent: Typing,
}

/// Recommend one counter per opposing entry
///
/// Builds a fresh graph from the table, derives the preference map, scores
/// the candidate space and greedily assigns the best candidates to the slots
/// they hit hardest. The result preserves the opposing roster's length and
/// order, and duplicate opposing entries receive identical recommendations.
///
/// `top_x` bounds how many ranked candidates the assigner may spend before
/// re-deriving recommendations for whatever is left; `None` (or zero) means
/// the roster length. A bound past the roster length changes nothing.
pub fn recommend_counters(
    chart: &EffectivenessChart,
    roster: &[Typing],
    top_x: Option<usize>,
) -> Result<Vec<Recommendation>, EngineError> {
    if roster.is_empty() {
        return Ok(Vec::new());
    }
    let graph = TypeGraph::from_chart(chart)?;
    recommend_against(&graph, roster, top_x)
}

/// Same as [`recommend_counters`] over an already-built graph
pub fn recommend_against(
    graph: &TypeGraph,
    roster: &[Typing],
    top_x: Option<usize>,
) -> Result<Vec<Recommendation>, EngineError> {
    if roster.is_empty() {
        return Ok(Vec::new());
    }
    let top_x = match top_x {
        None | Some(0) => roster.len(),
        Some(bound) => bound,
    };

    let mut pairs = Vec::with_capacity(roster.len());
    assign(graph, roster.to_vec(), top_x, &mut pairs)?;

    // Re-key by opponent so duplicate entries share one recommendation, then
    // restore the caller's roster order.
    let by_opponent: HashMap<&Typing, &Typing> = pairs
        .iter()
        .map(|pair| (&pair.opponent, &pair.counter))
        .collect();
    roster
        .iter()
        .map(|enemy| {
            let counter = by_opponent
                .get(enemy)
                .ok_or_else(|| EngineError::Unassigned(enemy.to_string()))?;
            Ok(Recommendation {
                counter: (*counter).clone(),
                opponent: enemy.clone(),
            })
        })
        .collect()
}

/// One greedy pass over a sub-roster, recursing while slots remain
///
/// Each pass re-derives the preference map from the entries still standing,
/// so candidate scarcity narrows the search to what is actually left to
/// counter.
fn assign(
    graph: &TypeGraph,
    mut pool: Vec<Typing>,
    top_x: usize,
    pairs: &mut Vec<Recommendation>,
) -> Result<(), EngineError> {
    let profile = aggregate_profile(graph, &pool)?;
    let preference = net_preference(graph, &profile);

    // An empty preference map widens the candidate pool to the whole
    // universe rather than recommending nothing.
    let types: Vec<String> = if preference.is_empty() {
        graph.type_names().map(str::to_string).collect()
    } else {
        preference.into_iter().map(|(name, _)| name).collect()
    };

    let ranked = rank_candidates(graph, &types, &pool)?;

    // With candidates to spare the requested bound applies; when they run
    // short, every one of them is spent before recursing.
    let budget = if ranked.len() >= pool.len() {
        top_x.min(ranked.len())
    } else {
        ranked.len()
    };

    for (candidate, _score) in ranked.into_iter().take(budget) {
        if pool.is_empty() {
            break;
        }
        let mut best_index = 0;
        let mut best_eff = f32::NEG_INFINITY;
        for (index, enemy) in pool.iter().enumerate() {
            let eff = query::overall_offense(graph, &candidate, enemy)?;
            // Strict comparison keeps the first slot on ties
            if eff > best_eff {
                best_eff = eff;
                best_index = index;
            }
        }
        let opponent = pool.remove(best_index);
        pairs.push(Recommendation {
            counter: candidate,
            opponent,
        });
    }

    if pool.is_empty() {
        return Ok(());
    }
    let remainder = pool.len();
    assign(graph, pool, remainder, pairs)
}
