//! Graph construction from a parsed effectiveness table

use counterpick_chart::EffectivenessChart;

use super::TypeGraph;
use crate::EngineError;

impl TypeGraph {
    /// Build the full graph from an effectiveness table
    ///
    /// Registers every type as a vertex, then inserts one attacking edge per
    /// ordered pair of types, self-pairs included. O(n²) in the number of
    /// types, which is small and fixed.
    pub fn from_chart(chart: &EffectivenessChart) -> Result<Self, EngineError> {
        let mut graph = TypeGraph::new();
        for name in &chart.types {
            graph.add_vertex(name)?;
        }
        for (i, attacker) in chart.types.iter().enumerate() {
            for (j, defender) in chart.types.iter().enumerate() {
                let multiplier = chart
                    .matrix
                    .get(i)
                    .and_then(|row| row.get(j))
                    .copied()
                    .ok_or_else(|| EngineError::MalformedTable {
                        attacker: attacker.clone(),
                        defender: defender.clone(),
                    })?;
                graph.add_attacking_edge(attacker, defender, multiplier)?;
            }
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Weight;

    fn toy_chart() -> EffectivenessChart {
        EffectivenessChart {
            types: vec!["Fire".to_string(), "Water".to_string(), "Grass".to_string()],
            matrix: vec![
                vec![1.0, 0.5, 2.0],
                vec![2.0, 1.0, 0.5],
                vec![0.5, 2.0, 1.0],
            ],
        }
    }

    #[test]
    fn test_from_chart() {
        let graph = TypeGraph::from_chart(&toy_chart()).unwrap();

        assert_eq!(graph.len(), 3);
        let fire = graph.id("Fire").unwrap();
        let water = graph.id("Water").unwrap();
        let grass = graph.id("Grass").unwrap();
        assert_eq!(graph.attack_weight(fire, grass), Ok(Weight::Super));
        assert_eq!(graph.attack_weight(fire, water), Ok(Weight::Resisted));
        assert_eq!(graph.attack_weight(grass, grass), Ok(Weight::Neutral));
    }

    #[test]
    fn test_from_chart_every_pair_in_exactly_one_bucket() {
        let graph = TypeGraph::from_chart(&toy_chart()).unwrap();

        for attacker in 0..graph.len() {
            for defender in 0..graph.len() {
                let vertex = graph.vertex(attacker);
                let holding: Vec<Weight> = Weight::ALL
                    .into_iter()
                    .filter(|&w| vertex.outgoing(w).contains(&defender))
                    .collect();
                assert_eq!(holding.len(), 1, "{} vs {}", attacker, defender);

                let incoming: Vec<Weight> = Weight::ALL
                    .into_iter()
                    .filter(|&w| graph.vertex(defender).incoming(w).contains(&attacker))
                    .collect();
                assert_eq!(incoming, holding);
            }
        }
    }

    #[test]
    fn test_from_chart_rejects_bad_multiplier() {
        let mut chart = toy_chart();
        chart.matrix[1][2] = 3.0;

        assert_eq!(
            TypeGraph::from_chart(&chart).unwrap_err(),
            EngineError::InvalidWeight(3.0)
        );
    }

    #[test]
    fn test_from_chart_rejects_ragged_matrix() {
        let mut chart = toy_chart();
        chart.matrix[2].pop();

        assert!(matches!(
            TypeGraph::from_chart(&chart),
            Err(EngineError::MalformedTable { .. })
        ));
    }
}
