//! Strong/weak aggregation over an opposing roster

use std::collections::HashMap;

use crate::EngineError;
use crate::graph::TypeGraph;
use crate::query;
use crate::types::{Typing, Weight};

/// Per-type tallies of how an opposing roster lines up against the universe
///
/// `weak[t]` counts matchups where the roster is vulnerable to type `t`,
/// either because `t` hits an entry hard or because the entry cannot hit `t`
/// back. `strong[t]` counts the reverse. Both axes are tallied on purpose: a
/// promising counter has to score on offense and on defense.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchupProfile {
    pub strong: HashMap<String, u32>,
    pub weak: HashMap<String, u32>,
}

/// Tally strong/weak counts for every universe type against a roster
///
/// Single entries are walked bucket by bucket on both sides of their vertex.
/// Dual entries are scored per universe type: the better of the two members'
/// attacks decides the offensive tally, and the combined multiplicative
/// vulnerability of the pair decides the defensive one.
pub fn aggregate_profile(
    graph: &TypeGraph,
    roster: &[Typing],
) -> Result<MatchupProfile, EngineError> {
    let mut profile = MatchupProfile::default();

    for entry in roster {
        match entry {
            Typing::Single(name) => tally_single(graph, name, &mut profile)?,
            Typing::Dual(..) => tally_dual(graph, entry, &mut profile)?,
        }
    }

    Ok(profile)
}

fn tally_single(
    graph: &TypeGraph,
    name: &str,
    profile: &mut MatchupProfile,
) -> Result<(), EngineError> {
    let id = graph.id(name)?;
    let vertex = graph.vertex(id);

    for weight in Weight::ALL {
        // Types this entry hits hard are handled; types it cannot hit are
        // promising counters.
        for &other in vertex.outgoing(weight) {
            match weight {
                Weight::Super => bump(&mut profile.strong, graph.name(other)),
                Weight::Resisted | Weight::Immune => bump(&mut profile.weak, graph.name(other)),
                Weight::Neutral => {}
            }
        }
        // Symmetric view: types that hit this entry hard are counters.
        for &other in vertex.incoming(weight) {
            match weight {
                Weight::Super => bump(&mut profile.weak, graph.name(other)),
                Weight::Resisted | Weight::Immune => bump(&mut profile.strong, graph.name(other)),
                Weight::Neutral => {}
            }
        }
    }
    Ok(())
}

fn tally_dual(
    graph: &TypeGraph,
    entry: &Typing,
    profile: &mut MatchupProfile,
) -> Result<(), EngineError> {
    for target in 0..graph.len() {
        let target_name = graph.name(target);
        let target_typing = Typing::single(target_name);

        let best = query::overall_offense(graph, entry, &target_typing)?;
        if best == 2.0 {
            bump(&mut profile.strong, target_name);
        } else if best == 0.5 || best == 0.0 {
            bump(&mut profile.weak, target_name);
        }

        let combined = query::effectiveness(graph, target_name, entry)?;
        if combined > 1.0 {
            bump(&mut profile.weak, target_name);
        } else if combined < 1.0 {
            bump(&mut profile.strong, target_name);
        }
    }
    Ok(())
}

fn bump(tally: &mut HashMap<String, u32>, name: &str) {
    *tally.entry(name.to_string()).or_insert(0) += 1;
}

/// Net preference per type: weak count minus strong count, kept only when
/// strictly positive
///
/// Types that only ever showed up on the strong axis are net non-threats and
/// are dropped entirely. Entries come back in graph registration order so
/// downstream candidate generation is deterministic.
pub fn net_preference(graph: &TypeGraph, profile: &MatchupProfile) -> Vec<(String, i64)> {
    graph
        .type_names()
        .filter_map(|name| {
            let weak = i64::from(*profile.weak.get(name)?);
            let strong = i64::from(profile.strong.get(name).copied().unwrap_or(0));
            let net = weak - strong;
            (net > 0).then(|| (name.to_string(), net))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use counterpick_chart::EffectivenessChart;

    fn toy_graph() -> TypeGraph {
        let chart = EffectivenessChart {
            types: vec!["Fire".to_string(), "Water".to_string(), "Grass".to_string()],
            matrix: vec![
                vec![1.0, 0.5, 2.0],
                vec![2.0, 1.0, 0.5],
                vec![0.5, 2.0, 1.0],
            ],
        };
        TypeGraph::from_chart(&chart).unwrap()
    }

    fn counts(pairs: &[(&str, u32)]) -> HashMap<String, u32> {
        pairs
            .iter()
            .map(|&(name, count)| (name.to_string(), count))
            .collect()
    }

    #[test]
    fn test_aggregate_single_entry() {
        let graph = toy_graph();
        let profile = aggregate_profile(&graph, &[Typing::single("Grass")]).unwrap();

        // Grass hits Water hard and resists it back; Fire does the same to
        // Grass from the other side.
        assert_eq!(profile.strong, counts(&[("Water", 2)]));
        assert_eq!(profile.weak, counts(&[("Fire", 2)]));
    }

    #[test]
    fn test_aggregate_dual_entry() {
        let graph = toy_graph();
        let profile = aggregate_profile(&graph, &[Typing::dual("Water", "Grass")]).unwrap();

        assert_eq!(profile.strong, counts(&[("Fire", 1), ("Water", 2)]));
        assert_eq!(profile.weak, counts(&[("Grass", 1)]));
    }

    #[test]
    fn test_aggregate_is_idempotent() {
        let graph = toy_graph();
        let roster = [Typing::single("Grass"), Typing::dual("Water", "Grass")];

        let first = aggregate_profile(&graph, &roster).unwrap();
        let second = aggregate_profile(&graph, &roster).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_aggregate_empty_roster() {
        let graph = toy_graph();
        let profile = aggregate_profile(&graph, &[]).unwrap();

        assert!(profile.strong.is_empty());
        assert!(profile.weak.is_empty());
    }

    #[test]
    fn test_aggregate_unknown_type() {
        let graph = toy_graph();

        assert!(aggregate_profile(&graph, &[Typing::single("Dragon")]).is_err());
    }

    #[test]
    fn test_net_preference_keeps_positive_net_only() {
        let graph = toy_graph();

        let profile = MatchupProfile {
            strong: counts(&[("Fire", 1), ("Water", 3)]),
            weak: counts(&[("Fire", 4), ("Water", 3), ("Grass", 2)]),
        };
        let net = net_preference(&graph, &profile);

        // Water nets to zero and falls out; Fire and Grass stay, in graph
        // registration order.
        assert_eq!(
            net,
            vec![("Fire".to_string(), 3), ("Grass".to_string(), 2)]
        );
    }

    #[test]
    fn test_net_preference_drops_strong_only_types() {
        let graph = toy_graph();

        let profile = MatchupProfile {
            strong: counts(&[("Water", 5)]),
            weak: HashMap::new(),
        };
        assert!(net_preference(&graph, &profile).is_empty());
    }
}
