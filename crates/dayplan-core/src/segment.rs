//! Available time segments on the target day.
//!
//! The caller declares zero or more `(start, end)` time-of-day blocks; these
//! are anchored to the reference date, filtered for validity and sorted
//! chronologically before the planner walks them.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// A contiguous block of available time, `[start, end)` with `end > start`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeSegment {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl TimeSegment {
    /// Get duration in whole minutes.
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Minutes left between `cursor` and the segment end.
    pub fn remaining_from(&self, cursor: DateTime<Utc>) -> i64 {
        (self.end - cursor).num_minutes()
    }
}

/// Build the segment list for a day from caller-supplied time blocks.
///
/// Degenerate blocks (`end <= start`) are dropped. The survivors are sorted
/// by start time so placement stays chronological even when the caller
/// passes blocks out of order. Blocks are expected to be pairwise disjoint.
pub fn build_segments(
    reference_date: NaiveDate,
    blocks: &[(NaiveTime, NaiveTime)],
) -> Vec<TimeSegment> {
    let mut segments: Vec<TimeSegment> = blocks
        .iter()
        .filter(|(start, end)| end > start)
        .map(|&(start, end)| TimeSegment {
            start: reference_date.and_time(start).and_utc(),
            end: reference_date.and_time(end).and_utc(),
        })
        .collect();

    segments.sort_by_key(|s| s.start);
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 31).unwrap()
    }

    #[test]
    fn drops_degenerate_blocks() {
        let segments = build_segments(
            day(),
            &[(t(9, 0), t(9, 0)), (t(12, 0), t(10, 0)), (t(13, 0), t(14, 0))],
        );
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].duration_minutes(), 60);
    }

    #[test]
    fn sorts_out_of_order_blocks() {
        let segments = build_segments(
            day(),
            &[(t(20, 0), t(22, 0)), (t(9, 0), t(12, 0)), (t(13, 30), t(18, 0))],
        );
        assert_eq!(segments.len(), 3);
        assert!(segments.windows(2).all(|w| w[0].start <= w[1].start));
        assert_eq!(segments[0].duration_minutes(), 180);
        assert_eq!(segments[1].duration_minutes(), 270);
        assert_eq!(segments[2].duration_minutes(), 120);
    }

    #[test]
    fn remaining_from_cursor() {
        let segments = build_segments(day(), &[(t(9, 0), t(10, 0))]);
        let seg = segments[0];
        assert_eq!(seg.remaining_from(seg.start), 60);
        assert_eq!(seg.remaining_from(seg.start + chrono::Duration::minutes(45)), 15);
        assert_eq!(seg.remaining_from(seg.end), 0);
    }
}
