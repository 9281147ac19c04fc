//! Core formatting trait and the plain text report layout

use crate::{
    error::Result,
    models::metrics::{Period, Report, SummaryStatistics},
};
use std::fmt::Write as _;

/// Title line printed at the top of every report
pub const REPORT_TITLE: &str = "SamKnows Metric Analyser v1.0.0";

/// Unit label for every statistic in the report
pub const UNIT_LABEL: &str = "Megabits per second";

/// Main trait for output formatting
pub trait OutputFormatter {
    /// Format the title block
    fn format_header(&self) -> Result<String>;

    /// Format the checked period
    fn format_period(&self, period: &Period) -> Result<String>;

    /// Format the statistics block
    fn format_statistics(&self, statistics: &SummaryStatistics) -> Result<String>;

    /// Format the block asking for an underperforming period to be investigated
    fn format_investigation(&self, period: &Period) -> Result<String>;

    /// Format a complete report
    fn format_report(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header()?);
        output.push_str("\n\n");
        output.push_str(&self.format_period(&report.period)?);
        output.push_str("\n\n");
        output.push_str(&self.format_statistics(&report.statistics)?);

        if let Some(ref period) = report.underperforming {
            output.push_str("\n\n");
            output.push_str(&self.format_investigation(period)?);
            output.push('\n');
        }

        Ok(output)
    }
}

/// Plain text formatter producing the fixed report layout
#[derive(Debug, Default, Clone)]
pub struct PlainFormatter;

impl PlainFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputFormatter for PlainFormatter {
    fn format_header(&self) -> Result<String> {
        Ok(format!("{}\n{}", REPORT_TITLE, "=".repeat(REPORT_TITLE.len())))
    }

    fn format_period(&self, period: &Period) -> Result<String> {
        let mut output = String::from("Period checked:\n\n");
        writeln!(output, "    From: {}", period.from)?;
        write!(output, "    To:   {}", period.to)?;
        Ok(output)
    }

    fn format_statistics(&self, statistics: &SummaryStatistics) -> Result<String> {
        let mut output = String::from("Statistics:\n\n");
        writeln!(output, "    Unit: {}", UNIT_LABEL)?;
        writeln!(output)?;
        writeln!(output, "    Average: {}", statistics.average)?;
        writeln!(output, "    Min: {}", statistics.min)?;
        writeln!(output, "    Max: {}", statistics.max)?;
        write!(output, "    Median: {}", statistics.median)?;
        Ok(output)
    }

    fn format_investigation(&self, period: &Period) -> Result<String> {
        let mut output = String::from("Investigate:\n\n");
        writeln!(output, "    * The period between {} and {}", period.from, period.to)?;
        write!(output, "      was under-performing.")?;
        Ok(output)
    }
}
