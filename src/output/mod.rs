//! Report rendering
//!
//! The report layout is fixed plain text; colour is only ever used for
//! diagnostics on stderr, never for the report on stdout.

mod formatter;

pub use formatter::{OutputFormatter, PlainFormatter, REPORT_TITLE, UNIT_LABEL};

use crate::{error::Result, models::metrics::Report};

/// Output formatting factory for creating formatters
pub struct OutputFormatterFactory;

impl OutputFormatterFactory {
    /// Create the formatter used for report output
    pub fn create_formatter() -> Box<dyn OutputFormatter> {
        Box::new(PlainFormatter::new())
    }
}

/// Renders reports through a formatter
pub struct OutputCoordinator {
    formatter: Box<dyn OutputFormatter>,
}

impl OutputCoordinator {
    /// Create a new output coordinator with the specified formatter
    pub fn new(formatter: Box<dyn OutputFormatter>) -> Self {
        Self { formatter }
    }

    /// Render a complete report
    pub fn display_report(&self, report: &Report) -> Result<String> {
        self.formatter.format_report(report)
    }
}

impl Default for OutputCoordinator {
    fn default() -> Self {
        Self::new(OutputFormatterFactory::create_formatter())
    }
}
