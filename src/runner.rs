use crate::config::AnalyzerConfig;
use crate::core::{AnalysisReport, SkillAnalyzer, Taxonomy};
use crate::extract::AutoExtractor;
use crate::format::render;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Outcome of a batch run
#[derive(Debug)]
pub struct RunSummary {
    pub reports: Vec<AnalysisReport>,
    /// Sources scoring below `min_score`, in input order
    pub below_min_score: Vec<String>,
}

impl RunSummary {
    pub fn passed(&self) -> bool {
        self.below_min_score.is_empty()
    }
}

fn is_glob_pattern(input: &str) -> bool {
    input.contains(['*', '?', '['])
}

/// Expands glob patterns; plain paths are passed through even if missing.
pub fn expand_inputs(inputs: &[String]) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for input in inputs {
        if !is_glob_pattern(input) {
            paths.push(PathBuf::from(input));
            continue;
        }

        let mut matched: Vec<PathBuf> = glob::glob(input)
            .with_context(|| format!("Invalid glob pattern: {}", input))?
            .filter_map(|entry| match entry {
                Ok(path) => Some(path),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping unreadable glob match");
                    None
                }
            })
            .filter(|p| p.is_file())
            .collect();
        matched.sort();

        if matched.is_empty() {
            tracing::warn!(pattern = %input, "glob pattern matched no files");
        }
        paths.extend(matched);
    }
    Ok(paths)
}

/// Builds the analyzer described by `config`.
pub fn build_analyzer(config: &AnalyzerConfig) -> Result<SkillAnalyzer> {
    let taxonomy = match &config.taxonomy {
        Some(path) => Taxonomy::from_file(path)
            .with_context(|| format!("Failed to load taxonomy from {:?}", path))?,
        None => Taxonomy::builtin(),
    };
    tracing::debug!(
        categories = taxonomy.len(),
        terms = taxonomy.term_count(),
        "taxonomy ready"
    );
    Ok(SkillAnalyzer::new(taxonomy, config.scoring)?)
}

/// Analyzes every input in parallel; reports keep input order.
pub fn analyze_all(analyzer: &SkillAnalyzer, paths: &[PathBuf]) -> Vec<AnalysisReport> {
    paths
        .par_iter()
        .map(|path| {
            let report = analyzer.analyze_file(path, &AutoExtractor);
            tracing::info!(
                path = %path.display(),
                score = report.score,
                total_skills = report.total_skills,
                "analyzed"
            );
            report
        })
        .collect()
}

/// Main entry point in CLI mode: analyze, render, check the score threshold.
pub fn run(config: AnalyzerConfig) -> Result<RunSummary> {
    config.validate()?;

    let analyzer = build_analyzer(&config)?;
    let paths = expand_inputs(&config.inputs)?;
    if paths.is_empty() {
        anyhow::bail!("No input files matched: {}", config.inputs.join(", "));
    }

    let reports = analyze_all(&analyzer, &paths);

    match &config.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {:?}", path))?;
            let mut writer = BufWriter::new(file);
            render(&mut writer, &reports, config.output_format, false)?;
            writer.flush()?;
            tracing::info!(path = %path.display(), "report written");
        }
        None => {
            let stdout = std::io::stdout();
            let mut handle = stdout.lock();
            render(&mut handle, &reports, config.output_format, config.use_color())?;
        }
    }

    let below_min_score = match config.min_score {
        Some(min) => reports
            .iter()
            .filter(|r| r.score < min)
            .map(|r| r.source.clone())
            .collect(),
        None => Vec::new(),
    };

    Ok(RunSummary {
        reports,
        below_min_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_expand_inputs_glob_and_plain() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("b.txt"), "rust").unwrap();
        fs::write(dir.path().join("a.txt"), "go").unwrap();
        fs::write(dir.path().join("notes.md"), "x").unwrap();

        let pattern = dir.path().join("*.txt").display().to_string();
        let paths = expand_inputs(&[pattern, "missing.pdf".to_string()]).unwrap();
        assert_eq!(paths.len(), 3);
        assert!(paths[0].ends_with("a.txt"));
        assert!(paths[1].ends_with("b.txt"));
        assert_eq!(paths[2], PathBuf::from("missing.pdf"));
    }

    #[test]
    fn test_analyze_all_keeps_order() {
        let dir = TempDir::new().unwrap();
        let mut paths = Vec::new();
        for i in 0..8 {
            let path = dir.path().join(format!("{i}.txt"));
            fs::write(&path, if i % 2 == 0 { "python sql" } else { "" }).unwrap();
            paths.push(path);
        }
        let analyzer = SkillAnalyzer::default();
        let reports = analyze_all(&analyzer, &paths);
        for (i, report) in reports.iter().enumerate() {
            assert_eq!(report.source, paths[i].display().to_string());
            assert_eq!(report.total_skills, if i % 2 == 0 { 2 } else { 0 });
        }
    }

    #[test]
    fn test_build_analyzer_rejects_bad_taxonomy() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("taxonomy.toml");
        fs::write(
            &path,
            "[[category]]\nname = \"A\"\nterms = [\"sql\"]\n[[category]]\nname = \"B\"\nterms = [\"sql\"]\n",
        )
        .unwrap();
        let config = AnalyzerConfig {
            taxonomy: Some(path),
            ..AnalyzerConfig::default()
        };
        let err = build_analyzer(&config).unwrap_err();
        assert!(format!("{:#}", err).contains("appears in both"));
    }
}
