//! Read-only effectiveness queries for recommendation logic
//!
//! This module answers single- and dual-type offense and defense questions
//! over a built [`TypeGraph`](crate::graph::TypeGraph).

mod matchup;

pub use matchup::{
    // Type-level queries
    best_component_offense,
    defense_multiplier,
    effectiveness,
    overall_offense,
};
