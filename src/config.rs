use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::ScoringWeights;
use crate::error::ConfigError;

pub const CONFIG_FILE: &str = "resume-analyzer.toml";

/// Output format for analysis reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Markdown,
}

/// Main configuration for resume-analyzer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyzerConfig {
    /// Files or glob patterns to analyze
    pub inputs: Vec<String>,
    /// Write the report here instead of stdout
    pub output: Option<PathBuf>,
    /// Output format (Text, JSON, Markdown)
    pub output_format: OutputFormat,
    /// TOML file replacing the built-in taxonomy
    pub taxonomy: Option<PathBuf>,
    /// Colored console output (only applies to text written to stdout)
    pub color: bool,
    /// Debug-level logging
    pub verbose: bool,
    /// Fail the run when any report scores below this
    pub min_score: Option<f64>,
    pub scoring: ScoringWeights,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output: None,
            output_format: OutputFormat::Text,
            taxonomy: None,
            color: true,
            verbose: false,
            min_score: None,
            scoring: ScoringWeights::default(),
        }
    }
}

impl AnalyzerConfig {
    /// Checks that there is something to analyze and that the numbers are sane.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.inputs.is_empty() {
            return Err(ConfigError::NoInputs);
        }
        self.scoring.validate()?;
        if let Some(min) = self.min_score {
            if !(0.0..=100.0).contains(&min) {
                return Err(ConfigError::InvalidMinScore(min));
            }
        }
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Loads `resume-analyzer.toml` from the current directory, if there is one.
    pub fn load_from_file() -> Result<Option<Self>, ConfigError> {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }

    /// Whether the text renderer should emit ANSI colors.
    pub fn use_color(&self) -> bool {
        self.color && self.output.is_none() && self.output_format == OutputFormat::Text
    }
}
