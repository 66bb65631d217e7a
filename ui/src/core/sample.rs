//! Parsing of the raw presence feed into typed samples.
//!
//! The upstream feed is plain text, one record per line, in the shape
//! `<timestamp>,<count>`. Lines that fail to parse are dropped rather than
//! failing the whole batch; the feed occasionally carries partial writes.

use time::{
    format_description::{well_known::Rfc3339, FormatItem},
    macros::format_description,
    OffsetDateTime, PrimitiveDateTime,
};

/// Timestamp shape the collector writes (`2024-01-15T08:30:00`).
const FEED_TIMESTAMP: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// Space-separated variant some exports use.
const FEED_TIMESTAMP_SPACED: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");

const TIME_LABEL: &[FormatItem<'static>] = format_description!("[hour]:[minute]");
const DATE_LABEL: &[FormatItem<'static>] = format_description!("[day]/[month]/[year]");

/// One ingested presence observation.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Naive wall-clock instant, as written by the collector.
    pub timestamp: PrimitiveDateTime,
    /// Observed presence value at that instant.
    pub count: u32,
}

impl Sample {
    /// Hour of day, 0–23.
    pub fn hour(&self) -> u8 {
        self.timestamp.hour()
    }

    pub fn day(&self) -> u8 {
        self.timestamp.day()
    }

    /// Calendar month, 1–12.
    pub fn month(&self) -> u8 {
        u8::from(self.timestamp.month())
    }

    pub fn year(&self) -> i32 {
        self.timestamp.year()
    }

    /// Short clock label (`"08:30"`) used on chart axes.
    pub fn time_label(&self) -> String {
        self.timestamp
            .format(TIME_LABEL)
            .unwrap_or_else(|_| "—".to_string())
    }

    /// Day/month/year label (`"15/01/2024"`).
    pub fn date_label(&self) -> String {
        self.timestamp
            .format(DATE_LABEL)
            .unwrap_or_else(|_| "—".to_string())
    }
}

/// Parse a whole feed payload. Input order is preserved; malformed lines are
/// skipped. An empty (or whitespace-only) payload yields an empty set.
pub fn parse_feed(raw: &str) -> Vec<Sample> {
    raw.trim().lines().filter_map(parse_line).collect()
}

/// Parse one `timestamp,count` line. Anything else — wrong field count,
/// unparsable timestamp, non-integer or negative count — yields `None`.
fn parse_line(line: &str) -> Option<Sample> {
    let mut fields = line.trim().split(',');
    let raw_timestamp = fields.next()?;
    let raw_count = fields.next()?;
    if fields.next().is_some() {
        return None;
    }

    let timestamp = parse_timestamp(raw_timestamp.trim())?;
    let count = raw_count.trim().parse::<u32>().ok()?;

    Some(Sample { timestamp, count })
}

/// Accept the collector's naive formats first, then RFC 3339 with the offset
/// stripped, keeping the whole pipeline on one wall-clock convention.
fn parse_timestamp(raw: &str) -> Option<PrimitiveDateTime> {
    if let Ok(parsed) = PrimitiveDateTime::parse(raw, FEED_TIMESTAMP) {
        return Some(parsed);
    }
    if let Ok(parsed) = PrimitiveDateTime::parse(raw, FEED_TIMESTAMP_SPACED) {
        return Some(parsed);
    }
    OffsetDateTime::parse(raw, &Rfc3339)
        .ok()
        .map(|parsed| PrimitiveDateTime::new(parsed.date(), parsed.time()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn parses_well_formed_lines_in_order() {
        let feed = "2024-01-15T08:00:00,10\n2024-01-15T08:30:00,20\n2024-01-15T23:00:00,5";
        let samples = parse_feed(feed);

        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0].timestamp, datetime!(2024-01-15 08:00:00));
        assert_eq!(samples[0].count, 10);
        assert_eq!(samples[1].count, 20);
        assert_eq!(samples[2].count, 5);
    }

    #[test]
    fn skips_malformed_lines_without_aborting() {
        let feed = "not-a-date,abc\n2024-01-15T08:00:00,10";
        let samples = parse_feed(feed);

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].count, 10);
    }

    #[test]
    fn skips_wrong_field_counts_and_negative_counts() {
        let feed = "2024-01-15T08:00:00,10,extra\n2024-01-15T09:00:00\n2024-01-15T10:00:00,-3\n2024-01-15T11:00:00,7";
        let samples = parse_feed(feed);

        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].count, 7);
    }

    #[test]
    fn empty_input_yields_empty_set() {
        assert!(parse_feed("").is_empty());
        assert!(parse_feed("   \n  \n").is_empty());
    }

    #[test]
    fn accepts_spaced_and_rfc3339_timestamps() {
        let feed = "2024-01-15 08:00:00,4\n2024-01-15T09:00:00Z,6\r\n2024-01-15T10:00:00,8";
        let samples = parse_feed(feed);

        assert_eq!(samples.len(), 3);
        assert_eq!(samples[1].timestamp, datetime!(2024-01-15 09:00:00));
    }

    #[test]
    fn derived_calendar_fields_track_the_timestamp() {
        let sample = Sample {
            timestamp: datetime!(2024-01-15 08:05:00),
            count: 12,
        };

        assert_eq!(sample.hour(), 8);
        assert_eq!(sample.day(), 15);
        assert_eq!(sample.month(), 1);
        assert_eq!(sample.year(), 2024);
        assert_eq!(sample.time_label(), "08:05");
        assert_eq!(sample.date_label(), "15/01/2024");
    }
}
