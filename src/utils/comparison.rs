use std::cmp::Ordering;
use crate::models::Sample;

/// Comparison of floating point numbers that treats NaN as equal
pub fn safe_float_cmp(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Ascending comparator on the raw throughput value
pub fn by_value(a: &Sample, b: &Sample) -> Ordering {
    safe_float_cmp(a.value, b.value)
}

/// Ascending comparator on the sample timestamp
pub fn by_time(a: &Sample, b: &Sample) -> Ordering {
    a.time.cmp(&b.time)
}

/// Copy the samples and sort them with `compare`
///
/// The sort is stable, so samples that compare equal keep input order.
pub fn sorted_by<F>(samples: &[Sample], compare: F) -> Vec<Sample>
where
    F: FnMut(&Sample, &Sample) -> Ordering,
{
    let mut sorted = samples.to_vec();
    sorted.sort_by(compare);
    sorted
}
