//! Candidate scoring against an opposing roster

use std::collections::HashMap;

use crate::EngineError;
use crate::graph::TypeGraph;
use crate::query;
use crate::types::{Typing, Weight};

// Hand-tuned coefficients for the weighted bucket scorer.
const DEFENSE_IMMUNE_BONUS: f32 = 30.0;
const OFFENSE_SUPER_BONUS: f32 = 5.0;
const DEFENSE_RESIST_BONUS: f32 = 3.0;
const NEUTRAL_BONUS: f32 = 0.1;
const DEFENSE_SUPER_PENALTY: f32 = 4.9;
const OFFENSE_IMMUNE_PENALTY: f32 = 30.0;
const OFFENSE_RESIST_PENALTY: f32 = 2.9;

/// Enumerate every single and unordered dual candidate over a type list
///
/// For `k` types this yields `k + k*(k-1)/2` candidates: singles first, then
/// pairs in list order.
pub fn enumerate_candidates(types: &[String]) -> Vec<Typing> {
    let mut candidates: Vec<Typing> = types.iter().map(Typing::single).collect();
    for i in 0..types.len() {
        for j in i + 1..types.len() {
            candidates.push(Typing::dual(&types[i], &types[j]));
        }
    }
    candidates
}

/// Primary score of a candidate against the whole opposing roster
///
/// Each opposing entry contributes the candidate's best single hit against
/// it, minus the candidate's combined vulnerability to the entry's types.
/// Hits hard and resists back scores high.
pub fn score_candidate(
    graph: &TypeGraph,
    candidate: &Typing,
    roster: &[Typing],
) -> Result<f32, EngineError> {
    let mut score = 0.0;
    for enemy in roster {
        let offense = query::best_component_offense(graph, candidate, enemy)?;
        let defense = vulnerability(graph, enemy, candidate)?;
        score += offense - defense;
    }
    Ok(score)
}

/// Combined vulnerability of a candidate to every type an enemy carries
fn vulnerability(
    graph: &TypeGraph,
    enemy: &Typing,
    candidate: &Typing,
) -> Result<f32, EngineError> {
    let mut product = 1.0;
    for attack in enemy.components() {
        product *= query::defense_multiplier(graph, attack, candidate)?;
    }
    Ok(product)
}

/// Score and rank every candidate over a type list, best first
///
/// Ties keep candidate generation order: singles before pairs, both in the
/// order of the supplied type list.
pub fn rank_candidates(
    graph: &TypeGraph,
    types: &[String],
    roster: &[Typing],
) -> Result<Vec<(Typing, f32)>, EngineError> {
    let mut scored = Vec::new();
    for candidate in enumerate_candidates(types) {
        let score = score_candidate(graph, &candidate, roster)?;
        scored.push((candidate, score));
    }
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    Ok(scored)
}

/// Weighted bucket score for each net-preferred type
///
/// Counts how the opposing roster's single entries land in the scored type's
/// weight buckets and applies the tuned coefficients, scaled by the net
/// preference count. The probe order is fixed and the first matching bucket
/// claims the entry; later buckets are skipped. Dual opposing entries match
/// no bucket and contribute nothing.
pub fn weighted_preference_scores(
    graph: &TypeGraph,
    preference: &[(String, i64)],
    roster: &[Typing],
) -> Result<HashMap<String, f32>, EngineError> {
    let mut scores = HashMap::new();

    for (name, net) in preference {
        let id = graph.id(name)?;
        let vertex = graph.vertex(id);

        let mut defense_immune = 0u32;
        let mut defense_resist = 0u32;
        let mut defense_super = 0u32;
        let mut offense_immune = 0u32;
        let mut offense_resist = 0u32;
        let mut offense_super = 0u32;
        let mut neutral = 0u32;

        for enemy in roster {
            let Typing::Single(enemy_name) = enemy else {
                continue;
            };
            let enemy_id = graph.id(enemy_name)?;

            if vertex.incoming(Weight::Immune).contains(&enemy_id) {
                defense_immune += 1;
            } else if vertex.incoming(Weight::Resisted).contains(&enemy_id) {
                defense_resist += 1;
            } else if vertex.incoming(Weight::Super).contains(&enemy_id) {
                defense_super += 1;
            } else if vertex.incoming(Weight::Neutral).contains(&enemy_id) {
                neutral += 1;
            } else if vertex.outgoing(Weight::Immune).contains(&enemy_id) {
                offense_immune += 1;
            } else if vertex.outgoing(Weight::Resisted).contains(&enemy_id) {
                offense_resist += 1;
            } else if vertex.outgoing(Weight::Super).contains(&enemy_id) {
                offense_super += 1;
            }
        }

        let weighted = DEFENSE_IMMUNE_BONUS * defense_immune as f32
            + OFFENSE_SUPER_BONUS * offense_super as f32
            + DEFENSE_RESIST_BONUS * defense_resist as f32
            + NEUTRAL_BONUS * neutral as f32
            - DEFENSE_SUPER_PENALTY * defense_super as f32
            - OFFENSE_IMMUNE_PENALTY * offense_immune as f32
            - OFFENSE_RESIST_PENALTY * offense_resist as f32;

        scores.insert(name.clone(), *net as f32 * weighted);
    }

    Ok(scores)
}
