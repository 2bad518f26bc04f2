//! Time handling for DWML time-layouts.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{NdfdError, NdfdResult};

/// Stride used to expand a ranged interval into sub-samples.
pub const DEFAULT_RANGE_STRIDE_HOURS: u32 = 3;

/// Longest ranged slot accepted for expansion: one leap year.
pub const MAX_RANGE_SPAN_HOURS: i64 = 366 * 24;

/// One slot of a time-layout.
///
/// `end == None` marks an instantaneous sample; otherwise the slot covers
/// `start..=end` and is replicated across it when aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: DateTime<FixedOffset>,
    pub end: Option<DateTime<FixedOffset>>,
}

impl Interval {
    pub fn instant(start: DateTime<FixedOffset>) -> Self {
        Self { start, end: None }
    }

    pub fn ranged(start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Self {
        Self { start, end: Some(end) }
    }

    pub fn is_ranged(&self) -> bool {
        self.end.is_some()
    }

    /// Whole hours from `start` to `end`; zero for instants.
    pub fn span_hours(&self) -> i64 {
        self.end.map_or(0, |end| (end - self.start).num_hours())
    }

    /// Timestamps this slot covers when stepped by `stride`.
    ///
    /// Instantaneous slots yield only `start`. Ranged slots yield `start`,
    /// `start + stride`, ... up to and including `end`. An `end` earlier than
    /// `start` yields nothing. `stride` must be positive. The output is not
    /// bounded; callers expanding untrusted layouts check [`Self::span_hours`]
    /// against [`MAX_RANGE_SPAN_HOURS`] first.
    pub fn sample_times(&self, stride: Duration) -> Vec<DateTime<FixedOffset>> {
        match self.end {
            None => vec![self.start],
            Some(end) => {
                let mut times = Vec::new();
                let mut t = self.start;
                while t <= end {
                    times.push(t);
                    t += stride;
                }
                times
            }
        }
    }
}

/// Parse a DWML timestamp.
///
/// DWML writes local times with an explicit offset
/// (`2008-06-02T08:00:00-05:00`). Times without an offset are taken as UTC,
/// and a bare date as midnight UTC.
pub fn parse_dwml_time(s: &str) -> NdfdResult<DateTime<FixedOffset>> {
    let s = s.trim();

    // Full datetime with offset or Z
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt);
    }

    // Without offset (assume UTC)
    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Ok(Utc.from_utc_datetime(&ndt).fixed_offset());
    }

    // Date only
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(ndt) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&ndt).fixed_offset());
        }
    }

    Err(NdfdError::InvalidTime(s.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    fn t(s: &str) -> DateTime<FixedOffset> {
        parse_dwml_time(s).unwrap()
    }

    #[test]
    fn test_parse_with_offset() {
        let dt = t("2008-06-02T08:00:00-05:00");
        assert_eq!(dt.year(), 2008);
        assert_eq!(dt.hour(), 8);
        assert_eq!(dt.offset().local_minus_utc(), -5 * 3600);
    }

    #[test]
    fn test_parse_without_offset_is_utc() {
        let dt = t("2008-06-02T08:00:00");
        assert_eq!(dt.offset().local_minus_utc(), 0);
        assert_eq!(dt.hour(), 8);
    }

    #[test]
    fn test_parse_date_only() {
        let dt = t("2008-06-02");
        assert_eq!(dt.day(), 2);
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_parse_invalid() {
        let err = parse_dwml_time("yesterday").unwrap_err();
        assert!(matches!(err, NdfdError::InvalidTime(_)));
    }

    #[test]
    fn test_instant_samples_once() {
        let iv = Interval::instant(t("2008-06-02T08:00:00-05:00"));
        assert_eq!(iv.sample_times(Duration::hours(3)).len(), 1);
    }

    #[test]
    fn test_ranged_samples_inclusive_of_end() {
        let iv = Interval::ranged(t("2008-06-02T08:00:00-05:00"), t("2008-06-02T20:00:00-05:00"));
        let times = iv.sample_times(Duration::hours(3));
        // 08, 11, 14, 17, 20
        assert_eq!(times.len(), 5);
        assert_eq!(times[4], t("2008-06-02T20:00:00-05:00"));
    }

    #[test]
    fn test_ranged_end_off_stride() {
        let iv = Interval::ranged(t("2008-06-02T06:00:00-05:00"), t("2008-06-03T06:00:00-05:00"));
        // 24h / 3h = 8, plus the start
        assert_eq!(iv.sample_times(Duration::hours(3)).len(), 9);

        let iv = Interval::ranged(t("2008-06-02T06:00:00-05:00"), t("2008-06-02T07:00:00-05:00"));
        assert_eq!(iv.sample_times(Duration::hours(3)).len(), 1);
    }

    #[test]
    fn test_ranged_end_before_start() {
        let iv = Interval::ranged(t("2008-06-02T06:00:00-05:00"), t("2008-06-01T06:00:00-05:00"));
        assert!(iv.sample_times(Duration::hours(3)).is_empty());
    }

    #[test]
    fn test_span_hours() {
        let iv = Interval::ranged(t("2008-06-02T20:00:00-05:00"), t("2008-06-03T09:00:00-05:00"));
        assert_eq!(iv.span_hours(), 13);
        assert_eq!(Interval::instant(t("2008-06-02T20:00:00-05:00")).span_hours(), 0);
        // Mixed offsets measure the real elapsed time
        let iv = Interval::ranged(t("2008-06-02T12:00:00-04:00"), t("2008-06-02T12:00:00-05:00"));
        assert_eq!(iv.span_hours(), 1);
    }
}
