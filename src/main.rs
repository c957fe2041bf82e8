use anyhow::Result;
use clap::{Parser, ValueEnum};
use resume_analyzer::config::OutputFormat;
use resume_analyzer::{AnalyzerConfig, logging, run};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliOutputFormat {
    Text,
    Json,
    #[value(alias = "md")]
    Markdown,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(f: CliOutputFormat) -> Self {
        match f {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Markdown => OutputFormat::Markdown,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Analyze PDF resumes for technical skills and get improvement suggestions",
    long_about = None
)]
struct Args {
    /// Resume files or glob patterns (PDF, TXT, MD)
    inputs: Vec<String>,

    /// Output file path (defaults to stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<CliOutputFormat>,

    /// TOML file replacing the built-in skill taxonomy
    #[arg(long)]
    taxonomy: Option<PathBuf>,

    /// Config file (defaults to ./resume-analyzer.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Exit with a failure status if any resume scores below this
    #[arg(long)]
    min_score: Option<f64>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // 1. Load from file or default
    let mut config = match &args.config {
        Some(path) => AnalyzerConfig::load(path)?,
        None => AnalyzerConfig::load_from_file()?.unwrap_or_default(),
    };

    // 2. Override with CLI args
    if !args.inputs.is_empty() {
        config.inputs = args.inputs;
    }
    if let Some(o) = args.output {
        config.output = Some(o);
    }
    if let Some(f) = args.format {
        config.output_format = f.into();
    }
    if let Some(t) = args.taxonomy {
        config.taxonomy = Some(t);
    }
    if let Some(m) = args.min_score {
        config.min_score = Some(m);
    }
    if args.no_color || std::env::var_os("NO_COLOR").is_some() {
        config.color = false;
    }
    if args.verbose {
        config.verbose = true;
    }

    logging::init(config.verbose);

    let summary = run(config)?;
    if !summary.passed() {
        for source in &summary.below_min_score {
            tracing::error!(source = %source, "score below minimum");
        }
        return Ok(ExitCode::from(2));
    }

    Ok(ExitCode::SUCCESS)
}
