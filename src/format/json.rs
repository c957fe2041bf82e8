//! JSON output format for resume-analyzer

use anyhow::Result;

use std::io::Write;

use super::Formatter;
use crate::core::AnalysisReport;

/// Writes a single report as one object and a batch as an array.
pub struct JsonFormatter {
    first_report: bool,
    as_array: bool,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self {
            first_report: true,
            as_array: false,
        }
    }
}

impl Formatter for JsonFormatter {
    fn write_header(&mut self, output: &mut dyn Write, report_count: usize) -> Result<()> {
        self.as_array = report_count != 1;
        if self.as_array {
            writeln!(output, "[")?;
        }
        Ok(())
    }

    fn write_report(&mut self, output: &mut dyn Write, report: &AnalysisReport) -> Result<()> {
        if !self.first_report {
            writeln!(output, ",")?;
        }
        self.first_report = false;

        let json = serde_json::to_string_pretty(report)?;
        write!(output, "{}", json)?;
        Ok(())
    }

    fn write_footer(&mut self, output: &mut dyn Write) -> Result<()> {
        if self.as_array {
            if !self.first_report {
                writeln!(output)?;
            }
            writeln!(output, "]")?;
        } else {
            writeln!(output)?;
        }
        Ok(())
    }
}
