//! The explicit parse → filter → aggregate → present pipeline.
//!
//! The dashboard holds exactly three inputs — the raw sample set, the chosen
//! period, and "now" — and calls [`recompute`] whenever one of them changes.
//! Every derived value lives in the returned [`DerivedView`]; nothing is
//! stored incrementally between runs.

use time::{OffsetDateTime, PrimitiveDateTime};

use super::{
    aggregate::{compute_day_segments, compute_hourly_buckets, compute_stats, HourlyBuckets, Stats},
    period::{filter_by_period, Period},
    present::{to_hourly_histogram, to_pie_slices, to_time_series, ChartPoint},
    sample::Sample,
};

/// Number of trailing samples shown in the recent-activity area chart.
pub const RECENT_WINDOW: usize = 20;

/// Everything the pipeline consumes.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardInputs {
    /// Full sample set from the latest fetch, in feed order.
    pub samples: Vec<Sample>,
    /// Selected window; `None` means the full set (unrecognized selector).
    pub period: Option<Period>,
    /// Reference instant for the period filter.
    pub now: PrimitiveDateTime,
}

/// Everything the dashboard renders.
#[derive(Debug, Clone, PartialEq)]
pub struct DerivedView {
    pub filtered: Vec<Sample>,
    pub stats: Stats,
    pub hourly: HourlyBuckets,
    pub segments: [u64; 4],
    /// Last [`RECENT_WINDOW`] samples of the filtered set.
    pub recent: Vec<ChartPoint>,
    pub hourly_histogram: Vec<ChartPoint>,
    pub pie: Vec<ChartPoint>,
    /// Full filtered series for the history chart.
    pub history: Vec<ChartPoint>,
}

pub fn recompute(inputs: &DashboardInputs) -> DerivedView {
    let filtered = filter_by_period(&inputs.samples, inputs.period, inputs.now);
    let stats = compute_stats(&filtered);
    let hourly = compute_hourly_buckets(&filtered);
    let segments = compute_day_segments(&hourly);

    let recent = to_time_series(&filtered, Some(RECENT_WINDOW));
    let hourly_histogram = to_hourly_histogram(&hourly);
    let pie = to_pie_slices(&segments);
    let history = to_time_series(&filtered, None);

    DerivedView {
        filtered,
        stats,
        hourly,
        segments,
        recent,
        hourly_histogram,
        pie,
        history,
    }
}

/// Current wall-clock instant in the pipeline's naive convention.
pub fn now() -> PrimitiveDateTime {
    let utc = OffsetDateTime::now_utc();
    PrimitiveDateTime::new(utc.date(), utc.time())
}
