//! Skill score: category coverage plus capped, diminishing-return depth

use serde::{Deserialize, Serialize};

use super::types::{CategoryCounts, SkillCounts};
use crate::error::ConfigError;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Coarse band of a skill score, used by the renderers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreRating {
    Excellent,
    Good,
    Fair,
    NeedsWork,
}

impl ScoreRating {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreRating::Excellent
        } else if score >= 60.0 {
            ScoreRating::Good
        } else if score >= 35.0 {
            ScoreRating::Fair
        } else {
            ScoreRating::NeedsWork
        }
    }
}

impl std::fmt::Display for ScoreRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreRating::Excellent => write!(f, "excellent"),
            ScoreRating::Good => write!(f, "good"),
            ScoreRating::Fair => write!(f, "fair"),
            ScoreRating::NeedsWork => write!(f, "needs work"),
        }
    }
}

/// Tunable constants of the scoring function
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    /// Points shared equally by all categories for having at least one match
    pub coverage_points: f64,
    /// Points available for depth; each category may earn at most `depth_points / C`
    pub depth_points: f64,
    /// Depth credit of a repeated occurrence relative to a new distinct term
    pub repeat_weight: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            coverage_points: 65.0,
            depth_points: 35.0,
            repeat_weight: 0.25,
        }
    }
}

impl ScoringWeights {
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("coverage_points", self.coverage_points),
            ("depth_points", self.depth_points),
            ("repeat_weight", self.repeat_weight),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }
        Ok(())
    }
}

/// Scores `counts` into [0, 100], rounded to one decimal.
///
/// Adding an occurrence of any term never lowers the result. Weights that
/// produce a non-finite total score as [`MIN_SCORE`].
pub fn calculate_score(counts: &SkillCounts, weights: &ScoringWeights) -> f64 {
    if counts.is_empty() {
        return MIN_SCORE;
    }

    let categories = counts.len() as f64;
    let coverage_share = weights.coverage_points / categories;
    let depth_cap = weights.depth_points / categories;

    let raw: f64 = counts
        .iter()
        .filter(|c| c.is_covered())
        .map(|c| coverage_share + depth_cap * depth_fraction(c, weights.repeat_weight))
        .sum();

    if !raw.is_finite() {
        return MIN_SCORE;
    }
    round_tenth(raw.clamp(MIN_SCORE, MAX_SCORE))
}

/// Fraction in [0, 1) of the per-category depth cap earned by `category`.
fn depth_fraction(category: &CategoryCounts, repeat_weight: f64) -> f64 {
    let distinct = category.distinct_terms();
    if distinct == 0 {
        return 0.0;
    }
    let repeats = category.occurrences().saturating_sub(distinct);
    let depth = (distinct - 1) as f64 + repeat_weight * repeats as f64;
    1.0 - 0.5_f64.powf(depth)
}

fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
