use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    #[error("taxonomy has no categories")]
    NoCategories,

    #[error("category name is empty")]
    EmptyCategoryName,

    #[error("duplicate category: {0}")]
    DuplicateCategory(String),

    #[error("category '{0}' has no terms")]
    EmptyCategory(String),

    #[error("category '{0}' contains an empty term")]
    EmptyTerm(String),

    #[error("term '{term}' in category '{category}' is not in normalized form (expected '{normalized}')")]
    UnnormalizedTerm {
        category: String,
        term: String,
        normalized: String,
    },

    #[error("term '{term}' appears in both '{first}' and '{second}'")]
    DuplicateTerm {
        term: String,
        first: String,
        second: String,
    },

    #[error("failed to read taxonomy file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid taxonomy file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("PDF text extraction failed for {path}: {message}")]
    Pdf { path: PathBuf, message: String },

    #[error("unsupported file type: {0}")]
    Unsupported(PathBuf),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no input files given")]
    NoInputs,

    #[error("scoring weight '{name}' must be finite and non-negative, got {value}")]
    InvalidWeight { name: &'static str, value: f64 },

    #[error("min_score must be within 0..=100, got {0}")]
    InvalidMinScore(f64),

    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
}
