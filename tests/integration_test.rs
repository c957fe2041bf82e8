use resume_analyzer::{AnalyzerConfig, OutputFormat, run};
use std::fs;
use tempfile::TempDir;

const RESUME_TEXT: &str = "
    John Doe
    Software Engineer

    Skills: Python, JavaScript, React, SQL, AWS, Docker, Machine Learning

    Experience:
    - Developed web applications using React and Node.js
    - Implemented machine learning models with TensorFlow and Pandas
    - Managed cloud infrastructure on AWS with Docker containers
    - Database design and optimization using PostgreSQL
";

fn config_for(inputs: Vec<String>, output: std::path::PathBuf, format: OutputFormat) -> AnalyzerConfig {
    AnalyzerConfig {
        inputs,
        output: Some(output),
        output_format: format,
        color: false,
        ..AnalyzerConfig::default()
    }
}

#[test]
fn test_end_to_end_json_report() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    let resume = root.join("resume.txt");
    fs::write(&resume, RESUME_TEXT)?;

    let output_path = root.join("report.json");
    let config = config_for(
        vec![resume.display().to_string()],
        output_path.clone(),
        OutputFormat::Json,
    );

    let summary = run(config)?;
    assert!(summary.passed());
    assert_eq!(summary.reports.len(), 1);

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output_path)?)?;
    for key in ["file_path", "skill_counts", "score", "suggestions", "total_skills"] {
        assert!(value.get(key).is_some(), "missing key {key}");
    }
    assert!(value["total_skills"].as_u64().unwrap() > 0);
    assert!(value["score"].as_f64().unwrap() > 0.0);
    assert_eq!(value["skill_counts"]["Databases"]["postgresql"], 1);
    assert_eq!(value["skill_counts"].as_object().unwrap().len(), 6);

    Ok(())
}

#[test]
fn test_unreadable_pdf_still_reports() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    let broken = root.join("broken.pdf");
    fs::write(&broken, b"%PDF-1.4 garbage")?;

    let output_path = root.join("report.json");
    let config = config_for(
        vec![
            broken.display().to_string(),
            root.join("nonexistent.pdf").display().to_string(),
        ],
        output_path.clone(),
        OutputFormat::Json,
    );

    let summary = run(config)?;
    assert_eq!(summary.reports.len(), 2);
    for report in &summary.reports {
        assert_eq!(report.total_skills, 0);
        assert_eq!(report.score, 0.0);
        assert!(!report.suggestions.is_empty());
    }

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&output_path)?)?;
    assert_eq!(value.as_array().unwrap().len(), 2);

    Ok(())
}

#[test]
fn test_glob_batch_text_report() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    fs::write(root.join("a.txt"), "Rust, Docker and Git")?;
    fs::write(root.join("b.md"), RESUME_TEXT)?;

    let output_path = root.join("report.txt");
    let config = config_for(
        vec![
            root.join("*.txt").display().to_string(),
            root.join("*.md").display().to_string(),
        ],
        output_path.clone(),
        OutputFormat::Text,
    );

    let summary = run(config)?;
    assert_eq!(summary.reports.len(), 2);

    let content = fs::read_to_string(output_path)?;
    assert!(content.contains("a.txt"));
    assert!(content.contains("b.md"));
    assert!(content.contains("Suggestions:"));
    assert!(content.contains("=== 2 RESUMES ANALYZED ==="));
    assert!(!content.contains('\u{1b}'));

    Ok(())
}

#[test]
fn test_min_score_threshold() -> anyhow::Result<()> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path();
    let weak = root.join("weak.txt");
    let strong = root.join("strong.txt");
    fs::write(&weak, "Python")?;
    fs::write(&strong, RESUME_TEXT)?;

    let mut config = config_for(
        vec![weak.display().to_string(), strong.display().to_string()],
        root.join("report.md"),
        OutputFormat::Markdown,
    );
    config.min_score = Some(30.0);

    let summary = run(config)?;
    assert!(!summary.passed());
    assert_eq!(summary.below_min_score, vec![weak.display().to_string()]);

    let content = fs::read_to_string(root.join("report.md"))?;
    assert!(content.contains("# Resume Skill Analysis"));

    Ok(())
}

#[test]
fn test_no_inputs_is_error() {
    let config = AnalyzerConfig::default();
    assert!(run(config).is_err());
}
