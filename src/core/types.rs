//! Core types shared across the analysis pipeline

use std::collections::BTreeMap;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::taxonomy::Taxonomy;

/// Matched terms of a single category with their occurrence counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCounts {
    pub name: String,
    pub terms: BTreeMap<String, usize>,
}

impl CategoryCounts {
    pub fn distinct_terms(&self) -> usize {
        self.terms.len()
    }

    pub fn occurrences(&self) -> usize {
        self.terms.values().sum()
    }

    pub fn is_covered(&self) -> bool {
        !self.terms.is_empty()
    }
}

/// Per-category, per-term occurrence tally.
///
/// Always holds one entry per taxonomy category, in taxonomy order, even when
/// nothing matched. Only terms with a non-zero count are stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillCounts {
    categories: Vec<CategoryCounts>,
}

impl SkillCounts {
    /// Creates an all-zero tally covering every category of `taxonomy`.
    pub fn empty(taxonomy: &Taxonomy) -> Self {
        Self {
            categories: taxonomy
                .categories()
                .iter()
                .map(|c| CategoryCounts {
                    name: c.name.clone(),
                    terms: BTreeMap::new(),
                })
                .collect(),
        }
    }

    /// Adds `count` occurrences of `term` to `category`.
    ///
    /// Zero counts are ignored. Returns `false` if the category is unknown.
    /// Callers must pass a term the taxonomy files under `category`.
    pub(crate) fn record(&mut self, category: &str, term: &str, count: usize) -> bool {
        let Some(entry) = self.categories.iter_mut().find(|c| c.name == category) else {
            return false;
        };
        if count > 0 {
            *entry.terms.entry(term.to_string()).or_insert(0) += count;
        }
        true
    }

    pub fn get(&self, category: &str) -> Option<&BTreeMap<String, usize>> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| &c.terms)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryCounts> {
        self.categories.iter()
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of distinct matched terms across all categories
    pub fn distinct_terms(&self) -> usize {
        self.categories.iter().map(CategoryCounts::distinct_terms).sum()
    }

    /// Sum of all occurrence counts
    pub fn total_occurrences(&self) -> usize {
        self.categories.iter().map(CategoryCounts::occurrences).sum()
    }

    pub fn covered_categories(&self) -> usize {
        self.categories.iter().filter(|c| c.is_covered()).count()
    }
}

// Serialized as an ordered map so that category order survives into JSON.
impl Serialize for SkillCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.name, &category.terms)?;
        }
        map.end()
    }
}

/// Result of analyzing one document
#[derive(Debug, Clone, serde::Serialize)]
pub struct AnalysisReport {
    /// File path or opaque identifier of the analyzed document
    #[serde(rename = "file_path")]
    pub source: String,
    pub skill_counts: SkillCounts,
    /// Skill score in [0, 100]
    pub score: f64,
    pub suggestions: Vec<String>,
    /// Number of distinct matched terms
    pub total_skills: usize,
    /// Sum of occurrence counts over all matched terms
    pub total_occurrences: usize,
    pub categories_covered: usize,
}
