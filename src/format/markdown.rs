//! Markdown output format for resume-analyzer

use anyhow::Result;
use std::io::Write;

use super::Formatter;
use crate::core::{AnalysisReport, ScoreRating};

pub struct MarkdownFormatter;

impl Formatter for MarkdownFormatter {
    fn write_header(&mut self, output: &mut dyn Write, report_count: usize) -> Result<()> {
        writeln!(output, "# Resume Skill Analysis")?;
        writeln!(output)?;
        if report_count > 1 {
            writeln!(output, "> {} resumes analyzed", report_count)?;
            writeln!(output)?;
        }
        Ok(())
    }

    fn write_report(&mut self, output: &mut dyn Write, report: &AnalysisReport) -> Result<()> {
        writeln!(output, "## {}", report.source)?;
        writeln!(output)?;
        writeln!(
            output,
            "**Skill score:** {:.1}/100 ({})",
            report.score,
            ScoreRating::from_score(report.score)
        )?;
        writeln!(output)?;
        writeln!(
            output,
            "**Skills found:** {} distinct, {} mentions, {}/{} categories covered",
            report.total_skills,
            report.total_occurrences,
            report.categories_covered,
            report.skill_counts.len()
        )?;
        writeln!(output)?;

        writeln!(output, "| Category | Skills |")?;
        writeln!(output, "|----------|--------|")?;
        for category in report.skill_counts.iter() {
            let skills = if category.terms.is_empty() {
                "-".to_string()
            } else {
                category
                    .terms
                    .iter()
                    .map(|(term, count)| format!("{} ({})", term, count))
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            // Pipes inside cells would break the table.
            writeln!(
                output,
                "| {} | {} |",
                category.name.replace('|', "\\|"),
                skills.replace('|', "\\|")
            )?;
        }
        writeln!(output)?;

        writeln!(output, "### Suggestions")?;
        writeln!(output)?;
        for suggestion in &report.suggestions {
            writeln!(output, "- {}", suggestion)?;
        }
        writeln!(output)?;
        Ok(())
    }

    fn write_footer(&mut self, _output: &mut dyn Write) -> Result<()> {
        Ok(())
    }
}
