//! Metric analysis orchestration
//!
//! Ties the input reader and the statistics together into a [`Report`].

use crate::{
    error::Result,
    input,
    log_debug, log_info,
    logging::Logger,
    models::metrics::{Dataset, Report},
    stats,
};
use std::path::Path;
use std::time::Instant;

/// Analyses a metrics dataset and produces a report
pub struct MetricsAnalyser {
    logger: Logger,
}

impl MetricsAnalyser {
    /// Create a new analyser that writes diagnostics through `logger`
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }

    /// Read and validate the dataset at `path`
    pub fn load(&self, path: &Path) -> Result<Dataset> {
        log_debug!(self.logger, "Reading metrics from {}", path.display());

        let dataset = input::load(path)?;

        self.logger.info("Loaded metrics document")
            .field("path", path.display().to_string())
            .field("samples", dataset.len())
            .log();

        Ok(dataset)
    }

    /// Compute the period, summary statistics and underperformance of a dataset
    pub fn analyse(&self, dataset: &Dataset) -> Result<Report> {
        let start = Instant::now();
        let samples = dataset.samples();

        let period = stats::period(samples)?;
        log_debug!(self.logger, "Period checked: {} to {}", period.from, period.to);

        let statistics = stats::summary_statistics(samples)?;
        self.logger.debug("Computed summary statistics")
            .field("average", statistics.average)
            .field("min", statistics.min)
            .field("max", statistics.max)
            .field("median", statistics.median)
            .log();

        let underperforming = stats::underperforming_period(samples, statistics.average);
        match underperforming {
            Some(ref flagged) => {
                let count = samples
                    .iter()
                    .filter(|sample| stats::is_underperforming(sample, statistics.average))
                    .count();
                self.logger.info("Underperformance detected")
                    .field("from", flagged.from.to_string())
                    .field("to", flagged.to.to_string())
                    .field("flagged_samples", count)
                    .log();
            }
            None => log_info!(self.logger, "No underperforming samples"),
        }

        log_debug!(self.logger, "Analysis finished in {:?}", start.elapsed());

        Ok(Report {
            period,
            statistics,
            underperforming,
        })
    }

    /// Load the dataset at `path` and analyse it
    pub fn run(&self, path: &Path) -> Result<Report> {
        let dataset = self.load(path)?;
        self.analyse(&dataset)
    }
}
