//! Chart-ready reshaping of aggregated data.
//!
//! These adapters only rename and reorder; values pass through untouched so
//! any chart renderer can consume them without knowing the pipeline types.

use serde::Serialize;

use super::{
    aggregate::{DaySegment, HourlyBuckets},
    sample::Sample,
};

/// One labelled data point, the shape every chart component consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub label: String,
    pub value: u64,
}

/// Samples as an ordered `{time label, count}` series. `window` limits the
/// output to the last N samples for the recent-activity view; `None` keeps
/// everything.
pub fn to_time_series(samples: &[Sample], window: Option<usize>) -> Vec<ChartPoint> {
    let start = window
        .map(|size| samples.len().saturating_sub(size))
        .unwrap_or(0);

    samples[start..]
        .iter()
        .map(|sample| ChartPoint {
            label: sample.time_label(),
            value: u64::from(sample.count),
        })
        .collect()
}

/// The 24 hourly buckets as `{"0h".."23h", total}` in hour order.
pub fn to_hourly_histogram(buckets: &HourlyBuckets) -> Vec<ChartPoint> {
    buckets
        .iter()
        .enumerate()
        .map(|(hour, &value)| ChartPoint {
            label: format!("{hour}h"),
            value,
        })
        .collect()
}

/// The four day-segment totals as labelled pie slices, in segment order.
pub fn to_pie_slices(segments: &[u64; 4]) -> Vec<ChartPoint> {
    DaySegment::ORDER
        .iter()
        .zip(segments)
        .map(|(segment, &value)| ChartPoint {
            label: segment.label().to_string(),
            value,
        })
        .collect()
}
