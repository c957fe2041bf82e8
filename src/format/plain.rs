//! Console text output format for resume-analyzer

use anyhow::Result;
use crossterm::style::{Color, Stylize, style};
use std::io::Write;

use super::Formatter;
use crate::core::{AnalysisReport, ScoreRating};

pub struct PlainFormatter {
    color: bool,
    report_count: usize,
}

impl PlainFormatter {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            report_count: 0,
        }
    }

    fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if !self.color {
            return text.to_string();
        }
        let styled = style(text).with(color);
        if bold {
            styled.bold().to_string()
        } else {
            styled.to_string()
        }
    }
}

fn score_color(score: f64) -> Color {
    match ScoreRating::from_score(score) {
        ScoreRating::Excellent | ScoreRating::Good => Color::Green,
        ScoreRating::Fair => Color::Yellow,
        ScoreRating::NeedsWork => Color::Red,
    }
}

impl Formatter for PlainFormatter {
    fn write_header(&mut self, _output: &mut dyn Write, report_count: usize) -> Result<()> {
        self.report_count = report_count;
        Ok(())
    }

    fn write_report(&mut self, output: &mut dyn Write, report: &AnalysisReport) -> Result<()> {
        writeln!(
            output,
            "{}",
            self.paint("=== RESUME SKILL REPORT ===", Color::Cyan, true)
        )?;
        writeln!(output, "File: {}", report.source)?;

        let score = format!(
            "{:.1}/100 ({})",
            report.score,
            ScoreRating::from_score(report.score)
        );
        writeln!(
            output,
            "Skill score: {}",
            self.paint(&score, score_color(report.score), true)
        )?;
        writeln!(
            output,
            "Skills found: {} distinct ({} mentions) in {}/{} categories",
            report.total_skills,
            report.total_occurrences,
            report.categories_covered,
            report.skill_counts.len()
        )?;
        writeln!(output)?;

        for category in report.skill_counts.iter() {
            let heading = format!("--- {} ({}) ---", category.name, category.distinct_terms());
            let heading_color = if category.is_covered() {
                Color::Blue
            } else {
                Color::DarkGrey
            };
            writeln!(output, "{}", self.paint(&heading, heading_color, false))?;

            if category.terms.is_empty() {
                writeln!(output, "  (none found)")?;
                continue;
            }
            let terms: Vec<String> = category
                .terms
                .iter()
                .map(|(term, count)| {
                    if *count > 1 {
                        format!("{} x{}", term, count)
                    } else {
                        term.clone()
                    }
                })
                .collect();
            writeln!(output, "  {}", terms.join(", "))?;
        }

        writeln!(output)?;
        writeln!(output, "{}", self.paint("Suggestions:", Color::Yellow, true))?;
        for suggestion in &report.suggestions {
            writeln!(output, "  -> {}", suggestion)?;
        }
        writeln!(output)?;
        Ok(())
    }

    fn write_footer(&mut self, output: &mut dyn Write) -> Result<()> {
        if self.report_count > 1 {
            writeln!(output, "=== {} RESUMES ANALYZED ===", self.report_count)?;
        }
        Ok(())
    }
}
