//! Core module for the resume analyzer
//!
//! Taxonomy, normalization, matching, scoring and suggestion rules.

pub mod advisor;
pub mod analyzer;
pub mod matcher;
pub mod normalize;
pub mod scorer;
pub mod taxonomy;
mod types;

pub use advisor::suggest_improvements;
pub use analyzer::{SkillAnalyzer, analyze};
pub use matcher::{count_occurrences, find_skills};
pub use normalize::normalize;
pub use scorer::{MAX_SCORE, MIN_SCORE, ScoreRating, ScoringWeights, calculate_score};
pub use taxonomy::{Category, Taxonomy};
pub use types::*;
