//! Effectiveness queries over the type graph

use crate::EngineError;
use crate::graph::TypeGraph;
use crate::types::Typing;

/// Effectiveness of a single attacking type against a defender
///
/// Dual defenders compose multiplicatively: the result is the product of the
/// attacker's effectiveness against each component.
pub fn effectiveness(
    graph: &TypeGraph,
    attacker: &str,
    defender: &Typing,
) -> Result<f32, EngineError> {
    let atk = graph.id(attacker)?;
    let mut result = 1.0;
    for component in defender.components() {
        let def = graph.id(component)?;
        result *= graph.attack_weight(atk, def)?.multiplier();
    }
    Ok(result)
}

/// Best offensive option of a candidate against a defender
///
/// A dual attacker takes the better of its two members; the members' attacks
/// are never combined.
pub fn overall_offense(
    graph: &TypeGraph,
    attacker: &Typing,
    defender: &Typing,
) -> Result<f32, EngineError> {
    match attacker {
        Typing::Single(name) => effectiveness(graph, name, defender),
        Typing::Dual(first, second) => {
            let eff_first = effectiveness(graph, first, defender)?;
            let eff_second = effectiveness(graph, second, defender)?;
            Ok(eff_first.max(eff_second))
        }
    }
}

/// Vulnerability of a defender to one attacking type
///
/// Product over the defender's components of the weight at which the attack
/// lands, looked up through the defender-side incoming buckets.
pub fn defense_multiplier(
    graph: &TypeGraph,
    attack: &str,
    defender: &Typing,
) -> Result<f32, EngineError> {
    let atk = graph.id(attack)?;
    let mut multiplier = 1.0;
    for component in defender.components() {
        let def = graph.id(component)?;
        multiplier *= graph.incoming_weight(def, atk)?.multiplier();
    }
    Ok(multiplier)
}

/// Strongest single hit a candidate has against a defender
///
/// Unlike [`overall_offense`], dual defenders do not compose here: the
/// result is the best pairwise effectiveness across the attacker's members
/// and the defender's components.
pub fn best_component_offense(
    graph: &TypeGraph,
    attacker: &Typing,
    defender: &Typing,
) -> Result<f32, EngineError> {
    let mut best = f32::NEG_INFINITY;
    for member in attacker.components() {
        let atk = graph.id(member)?;
        for component in defender.components() {
            let def = graph.id(component)?;
            best = best.max(graph.attack_weight(atk, def)?.multiplier());
        }
    }
    Ok(best)
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

    #[test]
    fn test_effectiveness_single() {
        let graph = toy_graph();

        assert_eq!(
            effectiveness(&graph, "Fire", &Typing::single("Grass")),
            Ok(2.0)
        );
        assert_eq!(
            effectiveness(&graph, "Grass", &Typing::single("Fire")),
            Ok(0.5)
        );
        assert_eq!(
            effectiveness(&graph, "Fire", &Typing::single("Fire")),
            Ok(1.0)
        );
    }

    #[test]
    fn test_effectiveness_dual_is_multiplicative() {
        let graph = toy_graph();

        // Fire vs Water/Grass: 0.5 * 2.0
        assert_eq!(
            effectiveness(&graph, "Fire", &Typing::dual("Water", "Grass")),
            Ok(1.0)
        );
        // Symmetric in component order
        assert_eq!(
            effectiveness(&graph, "Grass", &Typing::dual("Water", "Fire")),
            effectiveness(&graph, "Grass", &Typing::dual("Fire", "Water")),
        );
    }

    #[test]
    fn test_overall_offense_uses_max_not_product() {
        let graph = toy_graph();

        // Fire/Water attacking Grass: max(2.0, 0.5)
        assert_eq!(
            overall_offense(
                &graph,
                &Typing::dual("Fire", "Water"),
                &Typing::single("Grass")
            ),
            Ok(2.0)
        );
        // Single attacker delegates straight through
        assert_eq!(
            overall_offense(&graph, &Typing::single("Water"), &Typing::single("Fire")),
            Ok(2.0)
        );
    }

    #[test]
    fn test_defense_multiplier_matches_effectiveness_product() {
        let graph = toy_graph();

        for attack in ["Fire", "Water", "Grass"] {
            let via_defense =
                defense_multiplier(&graph, attack, &Typing::dual("Water", "Grass")).unwrap();
            let via_product = effectiveness(&graph, attack, &Typing::single("Water")).unwrap()
                * effectiveness(&graph, attack, &Typing::single("Grass")).unwrap();
            assert_eq!(via_defense, via_product);
        }
    }

    #[test]
    fn test_best_component_offense_vs_dual() {
        let graph = toy_graph();

        // Fire vs Water/Grass: best single hit is through the Grass component
        assert_eq!(
            best_component_offense(
                &graph,
                &Typing::single("Fire"),
                &Typing::dual("Water", "Grass")
            ),
            Ok(2.0)
        );
        assert_eq!(
            best_component_offense(
                &graph,
                &Typing::dual("Grass", "Fire"),
                &Typing::dual("Water", "Fire")
            ),
            Ok(2.0)
        );
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let graph = toy_graph();

        assert_eq!(
            effectiveness(&graph, "Dragon", &Typing::single("Fire")),
            Err(EngineError::UnknownType("Dragon".to_string()))
        );
        assert_eq!(
            defense_multiplier(&graph, "Fire", &Typing::single("Steel")),
            Err(EngineError::UnknownType("Steel".to_string()))
        );
    }
}
