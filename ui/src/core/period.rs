//! Time-window filtering behind the dashboard's period selector.

use time::{Duration, PrimitiveDateTime};

use super::sample::Sample;

/// A named time window relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Day,
    Week,
    Month,
    Year,
}

impl Period {
    /// Selector display order.
    pub const ALL: [Period; 4] = [Period::Day, Period::Week, Period::Month, Period::Year];

    /// Wire value carried by the period `<select>`.
    pub fn value(self) -> &'static str {
        match self {
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
            Period::Year => "year",
        }
    }

    /// Parse a selector value. Unrecognized input yields `None`, which
    /// [`filter_by_period`] treats as "no filtering".
    pub fn parse(value: &str) -> Option<Period> {
        match value {
            "day" => Some(Period::Day),
            "week" => Some(Period::Week),
            "month" => Some(Period::Month),
            "year" => Some(Period::Year),
            _ => None,
        }
    }
}

/// Select the subsequence of `samples` inside the chosen window.
///
/// Relative order is preserved and the source slice is never touched. `Day`,
/// `Month` and `Year` are calendar matches against `now`; `Week` is a rolling
/// seven-day window. `None` returns the full set.
pub fn filter_by_period(
    samples: &[Sample],
    period: Option<Period>,
    now: PrimitiveDateTime,
) -> Vec<Sample> {
    let Some(period) = period else {
        return samples.to_vec();
    };

    match period {
        Period::Day => samples
            .iter()
            .filter(|sample| sample.timestamp.date() == now.date())
            .cloned()
            .collect(),
        Period::Week => {
            let window_start = now - Duration::days(7);
            samples
                .iter()
                .filter(|sample| sample.timestamp >= window_start)
                .cloned()
                .collect()
        }
        Period::Month => samples
            .iter()
            .filter(|sample| {
                sample.timestamp.month() == now.month() && sample.timestamp.year() == now.year()
            })
            .cloned()
            .collect(),
        Period::Year => samples
            .iter()
            .filter(|sample| sample.timestamp.year() == now.year())
            .cloned()
            .collect(),
    }
}
