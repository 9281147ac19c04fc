//! Reading metric documents from disk
//!
//! Expected shape:
//!
//! ```json
//! { "data": [ { "metricData": [ { "dtime": "2018-01-29", "metricValue": 12693166.98 } ] } ] }
//! ```
//!
//! Only `data[0].metricData` is read. Everything else in the document is
//! ignored, including further elements of `data`.

use crate::{
    error::{AppError, ErrorContext, Result},
    models::metrics::{Dataset, Sample},
};
use serde::Deserialize;
use serde_json::{value::RawValue, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// JSON pointer to the sample array inside a metrics document
pub const METRIC_DATA_POINTER: &str = "/data/0/metricData";

/// Read and parse the metrics document at `path`
pub fn load(path: &Path) -> Result<Dataset> {
    let contents = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::InvalidData => AppError::format(format!(
            "Input file {} is not valid UTF-8",
            path.display()
        )),
        _ => AppError::io(format!("Input file {} could not be read: {}", path.display(), e)),
    })?;

    parse_document(&contents)
}

/// Parse a metrics document already held in memory
pub fn parse_document(contents: &str) -> Result<Dataset> {
    let document: Value = serde_json::from_str(contents).context("Bad data format")?;

    match document.pointer(METRIC_DATA_POINTER) {
        None | Some(Value::Null) => {
            return Err(AppError::format("Bad data format: data[0].metricData is missing"));
        }
        Some(Value::Array(_)) => {}
        Some(_) => {
            return Err(AppError::format("Bad data format: data[0].metricData must be an array"));
        }
    }

    let samples = raw_metric_data(contents)?
        .into_iter()
        .enumerate()
        .map(|(index, entry)| parse_sample(index, entry))
        .collect::<Result<Vec<_>>>()?;

    Dataset::new(samples)
}

/// Document skeleton that keeps each series as untouched JSON text
#[derive(Deserialize)]
struct RawDocument<'a> {
    #[serde(borrow)]
    data: Vec<&'a RawValue>,
}

#[derive(Deserialize)]
struct RawSeries<'a> {
    #[serde(borrow, rename = "metricData")]
    metric_data: Vec<&'a RawValue>,
}

// Samples are decoded from their source text so numeric timestamps keep
// their exact spelling
fn raw_metric_data(contents: &str) -> Result<Vec<&RawValue>> {
    let document: RawDocument<'_> = serde_json::from_str(contents).context("Bad data format")?;
    let series = document.data.first().copied()
        .ok_or_else(|| AppError::format("Bad data format: data[0].metricData is missing"))?;
    let series: RawSeries<'_> = serde_json::from_str(series.get()).context("Bad data format")?;
    Ok(series.metric_data)
}

fn parse_sample(index: usize, entry: &RawValue) -> Result<Sample> {
    serde_json::from_str::<Sample>(entry.get())
        .with_context(|| format!("Bad data format: metricData[{}]", index))
}
