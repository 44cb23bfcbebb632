//! Recommendation pipeline built over the type graph
//!
//! A top-level call flows through three stages: [`aggregate_profile`] tallies
//! how the opposing roster lines up against the type universe,
//! [`rank_candidates`] scores every single and dual candidate drawn from the
//! net preference map, and the assigner pairs the best candidates with the
//! opposing slots they hit hardest.

mod assign;
mod profile;
mod score;

pub use assign::{Recommendation, recommend_against, recommend_counters};
pub use profile::{MatchupProfile, aggregate_profile, net_preference};
pub use score::{
    enumerate_candidates, rank_candidates, score_candidate, weighted_preference_scores,
};
