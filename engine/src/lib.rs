//! Type graph and counter recommendation engine.
//!
//! This crate is the computational core of counterpick: it turns a parsed
//! effectiveness table into a directed weighted graph over the type universe
//! and derives, for a given opposing roster, a one-to-one pairing of counter
//! typings to opposing entries.
//!
//! # Overview
//!
//! `counterpick-engine` sits between `counterpick-chart` (tabular sources) and
//! higher-level consumers:
//!
//! ```text
//! counterpick-chart (parsed tables)
//!        │
//!        ▼
//! counterpick-engine (graph + recommendation) ← THIS CRATE
//!        │
//!        └─> counterpick-roster (concrete team selection)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Typing`] - A single type or dual-type combination
//! - [`Weight`] - The four legal effectiveness multipliers
//! - [`TypeGraph`] - Arena-backed graph over the full type universe
//!
//! ## Recommendation
//! - [`recommend_counters`] - Main entry point: roster in, ordered
//!   (counter, opponent) pairs out
//! - [`MatchupProfile`] - Strong/weak tallies behind the preference map
//! - [`Recommendation`] - One assigned (counter, opponent) pair
//!
//! # Example Usage
//!
//! ```ignore
//! use counterpick_chart::parse_chart;
//! use counterpick_engine::{Typing, recommend_counters};
//!
//! let chart = parse_chart(&std::fs::read_to_string("chart.csv")?)?;
//! let opposing = vec![
//!     Typing::single("Water"),
//!     Typing::dual("Ground", "Fighting"),
//! ];
//!
//! for pair in recommend_counters(&chart, &opposing, None)? {
//!     println!("{} counters {}", pair.counter, pair.opponent);
//! }
//! ```

use thiserror::Error;

pub mod graph;
pub mod query;
pub mod recommend;
pub mod types;

// Re-export main types at crate root for convenience
pub use graph::{TypeGraph, TypeVertex};
pub use recommend::{MatchupProfile, Recommendation, recommend_against, recommend_counters};
pub use types::{Typing, Weight};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Type not found: {0}")]
    UnknownType(String),

    #[error("Type registered twice: {0}")]
    DuplicateType(String),

    #[error("Invalid effectiveness weight: {0}")]
    InvalidWeight(f32),

    #[error("No effectiveness edge from {attacker} to {defender}")]
    MissingEdge { attacker: String, defender: String },

    #[error("Effectiveness table is not square: no entry for {attacker} attacking {defender}")]
    MalformedTable { attacker: String, defender: String },

    #[error("No counter assigned for opposing entry {0}")]
    Unassigned(String),
}
