//! Throughput samples, datasets and report data models

use crate::error::{AppError, Result};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use std::cmp::Ordering;
use std::fmt;

/// Timestamp of a sample, kept exactly as the input wrote it
///
/// Ordering is numeric whenever both sides hold a number, whether as a JSON
/// number or as a numeric string such as `"999"`. Every numeric timestamp
/// sorts before every non-numeric string, and non-numeric strings compare
/// byte by byte.
#[derive(Debug, Clone)]
pub enum Timestamp {
    /// JSON number together with its source text, e.g. `1.6e9`
    Epoch { value: serde_json::Number, text: String },
    /// JSON string, e.g. `"2018-09-14"`
    Text(String),
}

/// Numeric reading of a timestamp used for ordering
#[derive(Debug, Clone, Copy)]
enum Numeric {
    Integer(i128),
    Float(f64),
}

impl Numeric {
    fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if let Ok(integer) = text.parse::<i128>() {
            return Some(Numeric::Integer(integer));
        }
        text.parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Numeric::Float)
    }

    fn as_f64(self) -> f64 {
        match self {
            Numeric::Integer(value) => value as f64,
            Numeric::Float(value) => value,
        }
    }

    fn compare(self, other: Self) -> Ordering {
        match (self, other) {
            (Numeric::Integer(a), Numeric::Integer(b)) => a.cmp(&b),
            _ => self.as_f64().total_cmp(&other.as_f64()),
        }
    }
}

impl Timestamp {
    /// Source text of the timestamp, without JSON quoting
    pub fn as_str(&self) -> &str {
        match self {
            Timestamp::Epoch { text, .. } => text,
            Timestamp::Text(text) => text,
        }
    }

    fn numeric(&self) -> Option<Numeric> {
        match self {
            Timestamp::Epoch { value, .. } => value.as_i64().map(i128::from)
                .or_else(|| value.as_u64().map(i128::from))
                .map(Numeric::Integer)
                .or_else(|| value.as_f64().map(Numeric::Float)),
            Timestamp::Text(text) => Numeric::parse(text),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            Timestamp::Epoch { .. } => 0,
            Timestamp::Text(_) => 1,
        }
    }

    fn from_json_text(json: &str) -> std::result::Result<Self, String> {
        let json = json.trim();
        if json.starts_with('"') {
            return serde_json::from_str::<String>(json)
                .map(Timestamp::Text)
                .map_err(|e| e.to_string());
        }

        serde_json::from_str::<serde_json::Number>(json)
            .map(|value| Timestamp::Epoch { value, text: json.to_string() })
            .map_err(|_| format!("expected a number or a string, found {}", json))
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.numeric(), other.numeric()) {
            (Some(a), Some(b)) => a.compare(b)
                .then_with(|| self.kind_rank().cmp(&other.kind_rank()))
                .then_with(|| self.as_str().cmp(other.as_str())),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.as_str().cmp(other.as_str()),
        }
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Timestamp {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Timestamp {}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Timestamp::Epoch { value, .. } => value.serialize(serializer),
            Timestamp::Text(text) => serializer.serialize_str(text),
        }
    }
}

// Reads the raw JSON token so numbers keep their source text; this needs a
// serde_json deserializer over text (`from_str`, `from_slice`, `from_reader`)
impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = Box::<RawValue>::deserialize(deserializer)?;
        Timestamp::from_json_text(raw.get()).map_err(de::Error::custom)
    }
}

impl From<&str> for Timestamp {
    fn from(value: &str) -> Self {
        Timestamp::Text(value.to_string())
    }
}

impl From<i64> for Timestamp {
    fn from(value: i64) -> Self {
        Timestamp::Epoch { value: value.into(), text: value.to_string() }
    }
}

/// A single throughput measurement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// When the measurement was taken
    #[serde(rename = "dtime")]
    pub time: Timestamp,
    /// Raw throughput in bytes per second
    #[serde(rename = "metricValue")]
    pub value: f64,
}

impl Sample {
    /// Create a new sample
    pub fn new(time: impl Into<Timestamp>, value: f64) -> Self {
        Self { time: time.into(), value }
    }
}

/// Non-empty series of samples read from one input document
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    samples: Vec<Sample>,
}

impl Dataset {
    /// Build a dataset, rejecting an empty sample list
    pub fn new(samples: Vec<Sample>) -> Result<Self> {
        if samples.is_empty() {
            return Err(AppError::empty_dataset());
        }
        Ok(Self { samples })
    }

    /// Samples in input order
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Always false; kept for the `len` convention
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

/// Inclusive span between two timestamps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub from: Timestamp,
    pub to: Timestamp,
}

impl Period {
    pub fn new(from: Timestamp, to: Timestamp) -> Self {
        Self { from, to }
    }
}

/// Summary statistics in megabits per second, rounded to two decimals
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub min: f64,
    pub max: f64,
    pub average: f64,
    pub median: f64,
}

/// Result of analysing one dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Full span of the dataset
    pub period: Period,
    /// Aggregates over every sample
    pub statistics: SummaryStatistics,
    /// First and last underperforming sample, if any
    pub underperforming: Option<Period>,
}

impl Report {
    pub fn has_underperformance(&self) -> bool {
        self.underperforming.is_some()
    }
}
