//! End-to-end checks of the parse → filter → aggregate → present pipeline,
//! exercised the way the dashboard view drives it.

use time::macros::datetime;

use ui::core::aggregate::Stats;
use ui::core::period::Period;
use ui::core::pipeline::{recompute, DashboardInputs};
use ui::core::sample::parse_feed;

#[test]
fn reference_day_scenario() {
    let inputs = DashboardInputs {
        samples: parse_feed(
            "2024-01-15T08:00:00,10\n2024-01-15T08:30:00,20\n2024-01-15T23:00:00,5",
        ),
        period: Some(Period::Day),
        now: datetime!(2024-01-15 12:00:00),
    };

    let view = recompute(&inputs);

    // All three samples share the calendar day.
    assert_eq!(view.filtered.len(), 3);

    assert_eq!(
        view.stats,
        Stats {
            total: 35,
            average: 11.7,
            peak: 20,
            current: 5,
        }
    );

    assert_eq!(view.hourly[8], 30);
    assert_eq!(view.hourly[23], 5);
    for (hour, &bucket) in view.hourly.iter().enumerate() {
        if hour != 8 && hour != 23 {
            assert_eq!(bucket, 0, "hour {hour} should be empty");
        }
    }

    // Matin / Après-midi / Soir / Nuit
    assert_eq!(view.segments, [30, 0, 5, 0]);
    assert_eq!(view.pie[0].label, "Matin (6h-12h)");
    assert_eq!(view.pie[0].value, 30);
}

#[test]
fn malformed_lines_are_skipped_not_fatal() {
    let samples = parse_feed("not-a-date,abc\n2024-01-15T08:00:00,10");

    assert_eq!(samples.len(), 1);
    assert_eq!(samples[0].count, 10);
}

#[test]
fn empty_payload_propagates_as_zero_stats() {
    let inputs = DashboardInputs {
        samples: parse_feed(""),
        period: Some(Period::Week),
        now: datetime!(2024-01-15 12:00:00),
    };

    let view = recompute(&inputs);

    assert_eq!(view.stats, Stats::empty());
    assert!(view.filtered.is_empty());
    assert_eq!(view.segments, [0, 0, 0, 0]);
}

#[test]
fn period_filters_nest_and_totals_stay_consistent() {
    let feed = "2023-06-01T10:00:00,8\n\
                2024-01-03T09:00:00,6\n\
                2024-01-14T22:00:00,4\n\
                2024-01-15T07:30:00,2";
    let now = datetime!(2024-01-15 12:00:00);
    let samples = parse_feed(feed);

    let mut previous_len = 0;
    for period in [Period::Day, Period::Week, Period::Month, Period::Year] {
        let view = recompute(&DashboardInputs {
            samples: samples.clone(),
            period: Some(period),
            now,
        });

        assert!(
            view.filtered.len() >= previous_len,
            "{period:?} should include at least as much as the narrower period"
        );
        previous_len = view.filtered.len();

        // The hourly buckets and the day segments are both partitions of the
        // filtered total.
        assert_eq!(view.hourly.iter().sum::<u64>(), view.stats.total);
        assert_eq!(view.segments.iter().sum::<u64>(), view.stats.total);
    }

    // Unrecognized selector values fall back to the whole set.
    let unfiltered = recompute(&DashboardInputs {
        samples: samples.clone(),
        period: Period::parse("quarter"),
        now,
    });
    assert_eq!(unfiltered.filtered.len(), samples.len());
}
