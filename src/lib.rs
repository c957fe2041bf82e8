pub mod config;
pub mod core;
pub mod error;
pub mod extract;
pub mod format;
pub mod logging;
pub mod runner;

// Re-export key items for convenience
pub use config::{AnalyzerConfig, OutputFormat};
pub use crate::core::{AnalysisReport, SkillAnalyzer, SkillCounts, Taxonomy, analyze};
pub use error::{ConfigError, ExtractError, TaxonomyError};
pub use runner::{RunSummary, run};
