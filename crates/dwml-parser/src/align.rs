//! Alignment of parameter values onto their time-layout.
//!
//! Values arrive in document order, one per layout slot. Instantaneous slots
//! map one value to one timestamp. Ranged slots are replicated at a fixed
//! stride from `start` through `end` inclusive, so a 12-hour maximum
//! temperature appears on a 3-hourly display timeline as five identical
//! samples. Values are repeated, never interpolated.

use chrono::Duration;
use ndfd_common::{
    Interval, NdfdError, NdfdResult, TimedValue, DEFAULT_RANGE_STRIDE_HOURS, MAX_RANGE_SPAN_HOURS,
};

/// Expands and orders values against a time-layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeAligner {
    stride: Duration,
}

impl Default for TimeAligner {
    fn default() -> Self {
        Self {
            stride: Duration::hours(i64::from(DEFAULT_RANGE_STRIDE_HOURS)),
        }
    }
}

impl TimeAligner {
    /// Aligner stepping ranged slots every `stride_hours`.
    ///
    /// # Errors
    /// `InvalidConfig` when `stride_hours` is zero.
    pub fn new(stride_hours: u32) -> NdfdResult<Self> {
        if stride_hours == 0 {
            return Err(NdfdError::InvalidConfig(
                "range stride must be at least one hour".to_string(),
            ));
        }
        Ok(Self {
            stride: Duration::hours(i64::from(stride_hours)),
        })
    }

    pub fn stride(&self) -> Duration {
        self.stride
    }

    /// Pair each value with its slot, expand ranged slots and sort by time.
    ///
    /// Ties keep their relative document order.
    ///
    /// # Errors
    /// `LengthMismatch` when `values` and `intervals` differ in length;
    /// `RangeTooLong` when a ranged slot spans more than
    /// [`MAX_RANGE_SPAN_HOURS`]. Nothing is emitted in either case.
    pub fn align<V: Clone>(
        &self,
        layout_key: &str,
        intervals: &[Interval],
        values: Vec<V>,
    ) -> NdfdResult<Vec<TimedValue<V>>> {
        if intervals.len() != values.len() {
            return Err(NdfdError::LengthMismatch {
                layout: layout_key.to_string(),
                intervals: intervals.len(),
                values: values.len(),
            });
        }
        if let Some(hours) = intervals
            .iter()
            .map(Interval::span_hours)
            .find(|&h| h > MAX_RANGE_SPAN_HOURS)
        {
            return Err(NdfdError::RangeTooLong {
                layout: layout_key.to_string(),
                hours,
                max_hours: MAX_RANGE_SPAN_HOURS,
            });
        }

        let mut series = Vec::with_capacity(self.expanded_len(intervals));
        for (interval, value) in intervals.iter().zip(values) {
            let times = interval.sample_times(self.stride);
            let last = times.len().saturating_sub(1);
            // Clone for all but the final sample, which takes ownership
            let mut value = Some(value);
            for (i, time) in times.into_iter().enumerate() {
                let v = if i == last {
                    value.take()
                } else {
                    value.clone()
                };
                if let Some(v) = v {
                    series.push(TimedValue::new(time, v));
                }
            }
        }

        // Stable: equal timestamps stay in document order
        series.sort_by_key(|tv| tv.time);
        Ok(series)
    }

    /// Number of samples `align` produces for `intervals`.
    pub fn expanded_len(&self, intervals: &[Interval]) -> usize {
        intervals
            .iter()
            .map(|iv| match iv.end {
                None => 1,
                Some(end) if end < iv.start => 0,
                Some(end) => {
                    let span = (end - iv.start).num_seconds();
                    (span / self.stride.num_seconds()) as usize + 1
                }
            })
            .sum()
    }
}
