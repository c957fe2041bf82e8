//! Skill taxonomy: categories of known terms and the reverse term lookup

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::normalize::normalize;
use crate::error::TaxonomyError;

/// Built-in categories in reporting order.
const BUILTIN_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Programming Languages",
        &[
            "python",
            "java",
            "javascript",
            "typescript",
            "c++",
            "c#",
            "golang",
            "rust",
            "ruby",
            "php",
            "swift",
            "kotlin",
            "scala",
            "perl",
            "matlab",
        ],
    ),
    (
        "Web Technologies",
        &[
            "react",
            "angular",
            "vue",
            "node.js",
            "html",
            "css",
            "express",
            "django",
            "flask",
            "spring",
            "next.js",
            "graphql",
            "rest api",
            "jquery",
            "bootstrap",
        ],
    ),
    (
        "Databases",
        &[
            "sql",
            "postgresql",
            "mysql",
            "mongodb",
            "redis",
            "sqlite",
            "oracle",
            "cassandra",
            "elasticsearch",
            "dynamodb",
            "nosql",
        ],
    ),
    (
        "Cloud & DevOps",
        &[
            "aws",
            "docker",
            "kubernetes",
            "azure",
            "google cloud",
            "gcp",
            "jenkins",
            "terraform",
            "ansible",
            "ci/cd",
            "github actions",
        ],
    ),
    (
        "Data Science & ML",
        &[
            "machine learning",
            "tensorflow",
            "pytorch",
            "pandas",
            "numpy",
            "scikit-learn",
            "deep learning",
            "keras",
            "nlp",
            "computer vision",
            "data analysis",
            "spark",
        ],
    ),
    (
        "Tools & Frameworks",
        &[
            "git",
            "linux",
            "jira",
            "agile",
            "scrum",
            "postman",
            "vim",
            "webpack",
            "maven",
            "gradle",
            "bash",
            "unix",
        ],
    ),
];

/// A named group of related skill terms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub terms: Vec<String>,
}

impl Category {
    pub fn new(name: impl Into<String>, terms: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            terms: terms.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct TaxonomyFile {
    #[serde(rename = "category")]
    categories: Vec<Category>,
}

/// Ordered, immutable set of categories plus a `term -> category` index.
///
/// Built once and shared read-only by every analysis.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    categories: Vec<Category>,
    index: HashMap<String, usize>,
}

impl Taxonomy {
    /// Validates `categories` and builds the reverse index.
    ///
    /// Terms are lowercased. Each term must already be in normalized form and
    /// may belong to only one category.
    pub fn new(categories: Vec<Category>) -> Result<Self, TaxonomyError> {
        if categories.is_empty() {
            return Err(TaxonomyError::NoCategories);
        }

        let mut names = HashSet::new();
        let mut index: HashMap<String, usize> = HashMap::new();
        let mut built = Vec::with_capacity(categories.len());

        for (position, category) in categories.into_iter().enumerate() {
            let name = category.name.trim().to_string();
            if name.is_empty() {
                return Err(TaxonomyError::EmptyCategoryName);
            }
            if !names.insert(name.clone()) {
                return Err(TaxonomyError::DuplicateCategory(name));
            }
            if category.terms.is_empty() {
                return Err(TaxonomyError::EmptyCategory(name));
            }

            let mut terms = Vec::with_capacity(category.terms.len());
            for raw in &category.terms {
                let term = raw.trim().to_lowercase();
                if term.is_empty() {
                    return Err(TaxonomyError::EmptyTerm(name));
                }
                let normalized = normalize(&term);
                if normalized != term {
                    return Err(TaxonomyError::UnnormalizedTerm {
                        category: name,
                        term,
                        normalized,
                    });
                }
                if let Some(&owner) = index.get(&term) {
                    // The same term twice inside one category is harmless.
                    if owner == position {
                        continue;
                    }
                    let first: &Category = &built[owner];
                    return Err(TaxonomyError::DuplicateTerm {
                        term,
                        first: first.name.clone(),
                        second: name,
                    });
                }
                index.insert(term.clone(), position);
                terms.push(term);
            }

            built.push(Category { name, terms });
        }

        tracing::debug!(
            categories = built.len(),
            terms = index.len(),
            "taxonomy built"
        );

        Ok(Self {
            categories: built,
            index,
        })
    }

    /// The default six-category taxonomy.
    pub fn builtin() -> Self {
        let categories = BUILTIN_CATEGORIES
            .iter()
            .map(|(name, terms)| Category::new(*name, terms.iter().copied()))
            .collect();
        Self::new(categories).expect("built-in taxonomy is valid")
    }

    /// Parses a taxonomy from TOML made of `[[category]]` tables.
    ///
    /// ```toml
    /// [[category]]
    /// name = "Databases"
    /// terms = ["sql", "postgresql"]
    /// ```
    pub fn from_toml_str(content: &str) -> Result<Self, TaxonomyError> {
        let file: TaxonomyFile = toml::from_str(content)?;
        Self::new(file.categories)
    }

    pub fn from_file(path: &Path) -> Result<Self, TaxonomyError> {
        let content = std::fs::read_to_string(path).map_err(|source| TaxonomyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Category owning `term`, looked up case-insensitively.
    pub fn category_of(&self, term: &str) -> Option<&str> {
        self.index
            .get(&term.to_lowercase())
            .map(|&i| self.categories[i].name.as_str())
    }

    /// Every `(category, term)` pair in taxonomy order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, &str)> {
        self.categories
            .iter()
            .flat_map(|c| c.terms.iter().map(move |t| (c.name.as_str(), t.as_str())))
    }

    pub fn term_count(&self) -> usize {
        self.index.len()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}
