//! Output format modules for resume-analyzer

pub mod json;
pub mod markdown;
pub mod plain;

use anyhow::Result;
use std::io::Write;

use crate::config::OutputFormat;
use crate::core::AnalysisReport;

pub trait Formatter {
    /// Called once before the first report; `report_count` is the batch size.
    fn write_header(&mut self, output: &mut dyn Write, report_count: usize) -> Result<()>;

    fn write_report(&mut self, output: &mut dyn Write, report: &AnalysisReport) -> Result<()>;

    fn write_footer(&mut self, output: &mut dyn Write) -> Result<()>;
}

pub fn create_formatter(format: OutputFormat, color: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(json::JsonFormatter::new()),
        OutputFormat::Markdown => Box::new(markdown::MarkdownFormatter),
        OutputFormat::Text => Box::new(plain::PlainFormatter::new(color)),
    }
}

/// Renders `reports` with one formatter pass.
pub fn render(
    output: &mut dyn Write,
    reports: &[AnalysisReport],
    format: OutputFormat,
    color: bool,
) -> Result<()> {
    let mut formatter = create_formatter(format, color);
    formatter.write_header(output, reports.len())?;
    for report in reports {
        formatter.write_report(output, report)?;
    }
    formatter.write_footer(output)?;
    output.flush()?;
    Ok(())
}
