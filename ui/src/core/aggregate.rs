//! Summary statistics and bucketed aggregates over a set of samples.
//!
//! Everything here is a pure function of its input and recomputed wholesale
//! whenever the filtered set changes; nothing is mutated in place or cached.

use std::ops::Range;

use super::sample::Sample;

/// Headline numbers for the stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Stats {
    /// Sum of all counts in the set.
    pub total: u64,
    /// Mean count, rounded to one decimal. Zero for an empty set.
    pub average: f64,
    /// Maximum count observed.
    pub peak: u32,
    /// Count of the most recent sample (last in feed order).
    pub current: u32,
}

impl Stats {
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Total count attributed to each hour of day, index 0–23. Hours without
/// samples stay at zero.
pub type HourlyBuckets = [u64; 24];

pub fn compute_stats(samples: &[Sample]) -> Stats {
    if samples.is_empty() {
        return Stats::empty();
    }

    let total: u64 = samples.iter().map(|sample| u64::from(sample.count)).sum();
    let average = (total as f64 / samples.len() as f64 * 10.0).round() / 10.0;
    let peak = samples.iter().map(|sample| sample.count).max().unwrap_or(0);
    let current = samples.last().map(|sample| sample.count).unwrap_or(0);

    Stats {
        total,
        average,
        peak,
        current,
    }
}

pub fn compute_hourly_buckets(samples: &[Sample]) -> HourlyBuckets {
    let mut buckets = [0u64; 24];
    for sample in samples {
        buckets[usize::from(sample.hour())] += u64::from(sample.count);
    }
    buckets
}

/// Fixed quarters of the day used by the distribution pie. The four ranges
/// partition the 24 hours: every hour belongs to exactly one segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DaySegment {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl DaySegment {
    /// Pie slice order.
    pub const ORDER: [DaySegment; 4] = [
        DaySegment::Morning,
        DaySegment::Afternoon,
        DaySegment::Evening,
        DaySegment::Night,
    ];

    pub fn hours(self) -> Range<usize> {
        match self {
            DaySegment::Morning => 6..12,
            DaySegment::Afternoon => 12..18,
            DaySegment::Evening => 18..24,
            DaySegment::Night => 0..6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DaySegment::Morning => "Matin (6h-12h)",
            DaySegment::Afternoon => "Après-midi (12h-18h)",
            DaySegment::Evening => "Soir (18h-24h)",
            DaySegment::Night => "Nuit (0h-6h)",
        }
    }
}

/// Collapse the hourly buckets into the four day segments, in
/// [`DaySegment::ORDER`]. Deriving from the buckets (rather than re-scanning
/// the samples) keeps the partition exact by construction.
pub fn compute_day_segments(buckets: &HourlyBuckets) -> [u64; 4] {
    let mut totals = [0u64; 4];
    for (slot, segment) in totals.iter_mut().zip(DaySegment::ORDER) {
        *slot = buckets[segment.hours()].iter().sum();
    }
    totals
}
