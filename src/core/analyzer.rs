use std::path::Path;

use super::advisor::suggest_improvements;
use super::matcher::find_skills;
use super::normalize::normalize;
use super::scorer::{ScoringWeights, calculate_score};
use super::taxonomy::Taxonomy;
use super::types::AnalysisReport;
use crate::error::ConfigError;
use crate::extract::TextExtractor;

/// Runs normalize -> match -> {score, advise} against one taxonomy.
///
/// Holds no mutable state, so a single instance can serve many documents
/// at once.
#[derive(Debug, Clone, Default)]
pub struct SkillAnalyzer {
    taxonomy: Taxonomy,
    weights: ScoringWeights,
}

impl SkillAnalyzer {
    /// Fails if any weight is negative or not finite.
    pub fn new(taxonomy: Taxonomy, weights: ScoringWeights) -> Result<Self, ConfigError> {
        weights.validate()?;
        Ok(Self { taxonomy, weights })
    }

    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Analyzes already extracted text. Total over every input string.
    pub fn analyze(&self, source: &str, text: &str) -> AnalysisReport {
        let normalized = normalize(text);
        let skill_counts = find_skills(&normalized, &self.taxonomy);
        let score = calculate_score(&skill_counts, &self.weights);
        let suggestions = suggest_improvements(&skill_counts, &self.taxonomy);

        let report = AnalysisReport {
            source: source.to_string(),
            total_skills: skill_counts.distinct_terms(),
            total_occurrences: skill_counts.total_occurrences(),
            categories_covered: skill_counts.covered_categories(),
            skill_counts,
            score,
            suggestions,
        };

        tracing::debug!(
            source,
            chars = normalized.len(),
            total_skills = report.total_skills,
            score = report.score,
            "document analyzed"
        );

        report
    }

    /// Extracts `path` and analyzes the result.
    ///
    /// An extraction failure is logged and analyzed as empty text, so the
    /// caller always gets a complete report.
    pub fn analyze_file(&self, path: &Path, extractor: &dyn TextExtractor) -> AnalysisReport {
        let text = match extractor.extract(path) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "text extraction failed, analyzing as empty");
                String::new()
            }
        };
        self.analyze(&path.display().to_string(), &text)
    }
}

/// Analyzes `text` with the built-in taxonomy and default weights.
pub fn analyze(source: &str, text: &str) -> AnalysisReport {
    SkillAnalyzer::default().analyze(source, text)
}
