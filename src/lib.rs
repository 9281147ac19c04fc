//! Metric Analyser
//!
//! Reads a JSON document of timestamped throughput samples, converts them to
//! megabits per second and reports the checked period, summary statistics
//! and any underperforming stretch.

pub mod analyser;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod output;
pub mod stats;
pub mod utils;

// Re-export commonly used types
pub use analyser::MetricsAnalyser;
pub use error::{AppError, Result};
pub use models::{Config, Dataset, Period, Report, Sample, SummaryStatistics, Timestamp};
pub use output::{OutputCoordinator, OutputFormatter, OutputFormatterFactory, PlainFormatter};

/// Application version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
