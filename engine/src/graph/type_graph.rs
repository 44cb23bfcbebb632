//! Arena-backed type graph

use std::collections::{HashMap, HashSet};

use crate::EngineError;
use crate::types::Weight;

/// Dense vertex id inside a [`TypeGraph`]
pub(crate) type TypeId = usize;

/// One vertex per type, with attack edges bucketed by weight
///
/// `outgoing[w]` holds the ids this type attacks at weight `w`; `incoming[w]`
/// is the symmetric view. Every ordered pair of registered types, self-pairs
/// included, lands in exactly one bucket on each side.
#[derive(Debug, Clone, Default)]
pub struct TypeVertex {
    outgoing: [HashSet<TypeId>; 4],
    incoming: [HashSet<TypeId>; 4],
}

impl TypeVertex {
    pub(crate) fn outgoing(&self, weight: Weight) -> &HashSet<TypeId> {
        &self.outgoing[weight.bucket()]
    }

    pub(crate) fn incoming(&self, weight: Weight) -> &HashSet<TypeId> {
        &self.incoming[weight.bucket()]
    }
}

/// Directed weighted graph over the full type universe
///
/// Vertices live in an arena indexed by dense ids and edges are stored as
/// ids into that arena. Built once from an effectiveness table, read-only
/// afterward.
#[derive(Debug, Clone, Default)]
pub struct TypeGraph {
    names: Vec<String>,
    ids: HashMap<String, TypeId>,
    vertices: Vec<TypeVertex>,
}

impl TypeGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a type with empty buckets for every weight
    ///
    /// Registering the same name twice is an error rather than a no-op, so a
    /// table with repeated rows fails loudly at build time.
    pub fn add_vertex(&mut self, name: &str) -> Result<(), EngineError> {
        if self.ids.contains_key(name) {
            return Err(EngineError::DuplicateType(name.to_string()));
        }
        let id = self.vertices.len();
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        self.vertices.push(TypeVertex::default());
        Ok(())
    }

    /// Insert an attacking edge between two registered types
    ///
    /// The multiplier must be one of the four legal weights and both
    /// endpoints must already be registered.
    pub fn add_attacking_edge(
        &mut self,
        attacker: &str,
        defender: &str,
        multiplier: f32,
    ) -> Result<(), EngineError> {
        let weight =
            Weight::from_multiplier(multiplier).ok_or(EngineError::InvalidWeight(multiplier))?;
        let atk = self.id(attacker)?;
        let def = self.id(defender)?;
        self.vertices[atk].outgoing[weight.bucket()].insert(def);
        self.vertices[def].incoming[weight.bucket()].insert(atk);
        Ok(())
    }

    /// Number of registered types
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether no types are registered
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether a type is registered
    pub fn contains(&self, name: &str) -> bool {
        self.ids.contains_key(name)
    }

    /// Registered type names in registration order
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub(crate) fn id(&self, name: &str) -> Result<TypeId, EngineError> {
        self.ids
            .get(name)
            .copied()
            .ok_or_else(|| EngineError::UnknownType(name.to_string()))
    }

    pub(crate) fn name(&self, id: TypeId) -> &str {
        &self.names[id]
    }

    pub(crate) fn vertex(&self, id: TypeId) -> &TypeVertex {
        &self.vertices[id]
    }

    /// Weight at which `attacker` hits `defender`, by outgoing-bucket lookup
    pub(crate) fn attack_weight(
        &self,
        attacker: TypeId,
        defender: TypeId,
    ) -> Result<Weight, EngineError> {
        let vertex = &self.vertices[attacker];
        for weight in Weight::ALL {
            if vertex.outgoing(weight).contains(&defender) {
                return Ok(weight);
            }
        }
        Err(self.missing_edge(attacker, defender))
    }

    /// Weight at which `attacker` lands on `defender`, by incoming-bucket
    /// lookup on the defender's side
    pub(crate) fn incoming_weight(
        &self,
        defender: TypeId,
        attacker: TypeId,
    ) -> Result<Weight, EngineError> {
        let vertex = &self.vertices[defender];
        for weight in Weight::ALL {
            if vertex.incoming(weight).contains(&attacker) {
                return Ok(weight);
            }
        }
        Err(self.missing_edge(attacker, defender))
    }

    fn missing_edge(&self, attacker: TypeId, defender: TypeId) -> EngineError {
        EngineError::MissingEdge {
            attacker: self.names[attacker].clone(),
            defender: self.names[defender].clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registered(names: &[&str]) -> TypeGraph {
        let mut graph = TypeGraph::new();
        for name in names {
            graph.add_vertex(name).unwrap();
        }
        graph
    }

    #[test]
    fn test_add_vertex() {
        let graph = registered(&["Fire", "Water"]);

        assert_eq!(graph.len(), 2);
        assert!(graph.contains("Fire"));
        assert!(!graph.contains("Grass"));
        assert_eq!(graph.type_names().collect::<Vec<_>>(), vec!["Fire", "Water"]);
    }

    #[test]
    fn test_add_vertex_duplicate() {
        let mut graph = registered(&["Fire"]);

        assert_eq!(
            graph.add_vertex("Fire"),
            Err(EngineError::DuplicateType("Fire".to_string()))
        );
    }

    #[test]
    fn test_add_attacking_edge() {
        let mut graph = registered(&["Fire", "Grass"]);
        graph.add_attacking_edge("Fire", "Grass", 2.0).unwrap();

        let fire = graph.id("Fire").unwrap();
        let grass = graph.id("Grass").unwrap();
        assert_eq!(graph.attack_weight(fire, grass), Ok(Weight::Super));
        assert_eq!(graph.incoming_weight(grass, fire), Ok(Weight::Super));
    }

    #[test]
    fn test_add_attacking_edge_self_pair() {
        let mut graph = registered(&["Fire"]);
        graph.add_attacking_edge("Fire", "Fire", 0.5).unwrap();

        let fire = graph.id("Fire").unwrap();
        assert_eq!(graph.attack_weight(fire, fire), Ok(Weight::Resisted));
        assert_eq!(graph.incoming_weight(fire, fire), Ok(Weight::Resisted));
    }

    #[test]
    fn test_add_attacking_edge_unregistered() {
        let mut graph = registered(&["Fire"]);

        assert_eq!(
            graph.add_attacking_edge("Fire", "Grass", 2.0),
            Err(EngineError::UnknownType("Grass".to_string()))
        );
        assert_eq!(
            graph.add_attacking_edge("Water", "Fire", 2.0),
            Err(EngineError::UnknownType("Water".to_string()))
        );
    }

    #[test]
    fn test_add_attacking_edge_invalid_weight() {
        let mut graph = registered(&["Fire", "Grass"]);

        assert_eq!(
            graph.add_attacking_edge("Fire", "Grass", 1.5),
            Err(EngineError::InvalidWeight(1.5))
        );
    }

    #[test]
    fn test_missing_edge_is_an_error() {
        let graph = registered(&["Fire", "Grass"]);

        let fire = graph.id("Fire").unwrap();
        let grass = graph.id("Grass").unwrap();
        assert!(matches!(
            graph.attack_weight(fire, grass),
            Err(EngineError::MissingEdge { .. })
        ));
    }
}
