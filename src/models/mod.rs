//! Data models and structures for the metric analyser

pub mod config;
pub mod metrics;

// Re-export main model types
pub use config::Config;
pub use metrics::{Dataset, Period, Report, Sample, SummaryStatistics, Timestamp};
