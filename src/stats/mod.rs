//! Throughput statistics: unit conversion, rounding and aggregation
//!
//! Every function works on a plain sample slice and reports an empty slice
//! as a format error, so callers never index past the end of the data.

use crate::{
    error::{AppError, Result},
    models::metrics::{Period, Sample, SummaryStatistics},
    utils::comparison::{by_time, by_value, sorted_by},
};

/// Divisor turning a raw byte rate into megabits per second
pub const BYTES_TO_MEGABITS: f64 = 125_000.0;

/// Fraction of the average below which a sample counts as underperforming
pub const UNDERPERFORMANCE_RATIO: f64 = 0.9;

/// Decimal places shown for every reported figure
pub const DISPLAY_PRECISION: i32 = 2;

/// Significant digits kept before the final rounding step
const SIGNIFICANT_DIGITS: i32 = 15;

/// Convert a raw byte rate into megabits per second
pub fn to_megabits(raw: f64) -> f64 {
    raw / BYTES_TO_MEGABITS
}

/// Round half away from zero to `places` decimals
///
/// The scaled value is first normalised to 15 significant digits, so a
/// decimal such as `1.005` (stored as `1.00499999...`) rounds to `1.01`.
pub fn round_half_away(value: f64, places: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }

    let factor = 10f64.powi(places);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }

    pre_round(scaled).round() / factor
}

fn pre_round(value: f64) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }

    let magnitude = value.abs().log10().floor() as i32;
    let precision = 10f64.powi(SIGNIFICANT_DIGITS - 1 - magnitude);
    if !precision.is_finite() || precision == 0.0 {
        return value;
    }

    let normalised = (value * precision).round() / precision;
    if normalised.is_finite() {
        normalised
    } else {
        value
    }
}

/// Convert to megabits per second and round for display
pub fn megabits_rounded(raw: f64) -> f64 {
    round_half_away(to_megabits(raw), DISPLAY_PRECISION)
}

/// Sum of the raw values of all samples
pub fn sum_values(samples: &[Sample]) -> f64 {
    samples.iter().map(|sample| sample.value).sum()
}

/// Median of the raw values, before conversion
///
/// Even-sized sets use the mean of the two middle values.
pub fn raw_median(samples: &[Sample]) -> Result<f64> {
    let sorted = sorted_by(samples, by_value);
    median_of_sorted(&sorted)
}

fn median_of_sorted(sorted: &[Sample]) -> Result<f64> {
    let len = sorted.len();
    if len == 0 {
        return Err(AppError::empty_dataset());
    }

    let middle = len / 2;
    if len % 2 == 1 {
        Ok(sorted[middle].value)
    } else {
        Ok((sorted[middle - 1].value + sorted[middle].value) / 2.0)
    }
}

/// Median in megabits per second, rounded for display
pub fn median(samples: &[Sample]) -> Result<f64> {
    raw_median(samples).map(megabits_rounded)
}

/// Earliest and latest timestamp in the samples, whatever their order
pub fn period(samples: &[Sample]) -> Result<Period> {
    let from = samples.iter().min_by(|a, b| by_time(a, b));
    let to = samples.iter().max_by(|a, b| by_time(a, b));

    match (from, to) {
        (Some(from), Some(to)) => Ok(Period::new(from.time.clone(), to.time.clone())),
        _ => Err(AppError::empty_dataset()),
    }
}

/// Minimum, maximum, average and median in megabits per second
pub fn summary_statistics(samples: &[Sample]) -> Result<SummaryStatistics> {
    let sorted = sorted_by(samples, by_value);
    let (first, last) = match (sorted.first(), sorted.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(AppError::empty_dataset()),
    };

    let average = sum_values(&sorted) / sorted.len() as f64;

    Ok(SummaryStatistics {
        min: megabits_rounded(first.value),
        max: megabits_rounded(last.value),
        average: megabits_rounded(average),
        median: megabits_rounded(median_of_sorted(&sorted)?),
    })
}

/// Whether a sample falls strictly below 90% of the average
///
/// `average` is in megabits per second, as reported by [`summary_statistics`].
pub fn is_underperforming(sample: &Sample, average: f64) -> bool {
    megabits_rounded(sample.value) < average * UNDERPERFORMANCE_RATIO
}

/// Span between the first and last underperforming sample
///
/// Samples in between that performed well are not excluded: only the
/// outermost flagged timestamps are reported.
pub fn underperforming_period(samples: &[Sample], average: f64) -> Option<Period> {
    let flagged: Vec<&Sample> = samples
        .iter()
        .filter(|sample| is_underperforming(sample, average))
        .collect();

    let from = flagged.iter().min_by(|a, b| by_time(a, b))?;
    let to = flagged.iter().max_by(|a, b| by_time(a, b))?;

    Some(Period::new(from.time.clone(), to.time.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::metrics::Timestamp;

    fn values(raw: &[f64]) -> Vec<Sample> {
        raw.iter()
            .enumerate()
            .map(|(i, &value)| Sample::new(format!("2018-01-{:02}", i + 1).as_str(), value))
            .collect()
    }

    #[test]
    fn test_sum_values() {
        assert!((sum_values(&values(&[10.5, 15.3, 27.2])) - 53.0).abs() < 1e-9);
        assert!((sum_values(&values(&[12.5, 0.25])) - 12.75).abs() < 1e-9);
        assert_eq!(sum_values(&[]), 0.0);
    }

    #[test]
    fn test_median_odd_count() {
        let samples = values(&[1250000.0, 2500000.0, 1500000.0]);
        assert_eq!(raw_median(&samples).unwrap(), 1500000.0);
        assert_eq!(median(&samples).unwrap(), 12.0);
    }

    #[test]
    fn test_median_even_count() {
        let samples = values(&[1250000.0, 2500000.0, 1500000.0, 1750000.0]);
        assert_eq!(raw_median(&samples).unwrap(), 1625000.0);
        assert_eq!(median(&samples).unwrap(), 13.0);
    }

    #[test]
    fn test_median_single_sample() {
        assert_eq!(median(&values(&[1_000_000.0])).unwrap(), 8.0);
    }

    #[test]
    fn test_empty_input_is_format_error() {
        assert!(matches!(median(&[]), Err(AppError::Format(_))));
        assert!(matches!(period(&[]), Err(AppError::Format(_))));
        assert!(matches!(summary_statistics(&[]), Err(AppError::Format(_))));
        assert!(underperforming_period(&[], 10.0).is_none());
    }

    #[test]
    fn test_round_half_away() {
        assert_eq!(round_half_away(1.005, 2), 1.01);
        assert_eq!(round_half_away(2.675, 2), 2.68);
        assert_eq!(round_half_away(1.004, 2), 1.0);
        assert_eq!(round_half_away(-1.005, 2), -1.01);
        assert_eq!(round_half_away(0.125, 2), 0.13);
        assert_eq!(round_half_away(0.0, 2), 0.0);
        assert_eq!(round_half_away(12.0, 2), 12.0);
    }

    #[test]
    fn test_megabits_conversion() {
        assert_eq!(to_megabits(125_000.0), 1.0);
        assert_eq!(megabits_rounded(12693166.98), 101.55);
        assert_eq!(megabits_rounded(1.0), 0.0);
    }

    #[test]
    fn test_period_ignores_input_order() {
        let samples = vec![
            Sample::new("2018-01-15", 1.0),
            Sample::new("2018-01-02", 1.0),
            Sample::new("2018-01-31", 1.0),
            Sample::new("2018-01-09", 1.0),
        ];

        let period = period(&samples).unwrap();
        assert_eq!(period.from, Timestamp::from("2018-01-02"));
        assert_eq!(period.to, Timestamp::from("2018-01-31"));
    }

    #[test]
    fn test_period_with_epoch_timestamps() {
        let samples = vec![
            Sample::new(1_536_969_600i64, 1.0),
            Sample::new(1_536_883_200i64, 1.0),
            Sample::new(1_537_056_000i64, 1.0),
        ];

        let period = period(&samples).unwrap();
        assert_eq!(period.from.to_string(), "1536883200");
        assert_eq!(period.to.to_string(), "1537056000");
    }

    #[test]
    fn test_summary_statistics() {
        let samples = values(&[1_500_000.0, 1_000_000.0, 2_000_000.0, 1_250_000.0]);
        let stats = summary_statistics(&samples).unwrap();

        assert_eq!(stats.min, 8.0);
        assert_eq!(stats.max, 16.0);
        assert_eq!(stats.average, 11.5);
        assert_eq!(stats.median, 11.0);
    }

    #[test]
    fn test_summary_rounds_each_figure() {
        let samples = values(&[12693166.98, 13208703.31, 13456298.11]);
        let stats = summary_statistics(&samples).unwrap();

        assert_eq!(stats.min, 101.55);
        assert_eq!(stats.max, 107.65);
        assert_eq!(stats.median, 105.67);
        assert_eq!(stats.average, 104.96);
    }

    #[test]
    fn test_underperformance_boundary_not_flagged() {
        // 9.0 and 11.0 Mbit/s: average 10.0, bound 9.0, nothing strictly below
        let samples = values(&[1_125_000.0, 1_375_000.0]);
        let stats = summary_statistics(&samples).unwrap();
        assert_eq!(stats.average, 10.0);

        assert!(!is_underperforming(&samples[0], stats.average));
        assert!(underperforming_period(&samples, stats.average).is_none());
    }

    #[test]
    fn test_underperformance_below_bound_flagged() {
        let samples = values(&[1_000_000.0, 1_500_000.0]);
        let stats = summary_statistics(&samples).unwrap();
        assert_eq!(stats.average, 10.0);

        let period = underperforming_period(&samples, stats.average).unwrap();
        assert_eq!(period.from, Timestamp::from("2018-01-01"));
        assert_eq!(period.to, Timestamp::from("2018-01-01"));
    }

    #[test]
    fn test_underperformance_span_is_not_contiguous() {
        let samples = vec![
            Sample::new("2018-01-05", 500_000.0),
            Sample::new("2018-01-02", 2_000_000.0),
            Sample::new("2018-01-03", 2_000_000.0),
            Sample::new("2018-01-01", 500_000.0),
            Sample::new("2018-01-04", 2_000_000.0),
        ];
        let stats = summary_statistics(&samples).unwrap();

        let period = underperforming_period(&samples, stats.average).unwrap();
        assert_eq!(period.from, Timestamp::from("2018-01-01"));
        assert_eq!(period.to, Timestamp::from("2018-01-05"));
    }
}
