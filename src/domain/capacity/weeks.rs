//! Iteration week generation.
//!
//! Turns an iteration's date range into an ordered sequence of
//! non-overlapping weekly buckets that exactly partition the range.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::errors::CapacityError;
use crate::domain::foundation::{IterationId, IterationWeekId};

/// A weekly bucket within an iteration, before it has an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSpan {
    /// 1-based, contiguous index within the iteration.
    pub index: u32,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekSpan {
    /// Number of calendar days in this bucket (inclusive of both ends).
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// A persisted iteration week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationWeek {
    id: IterationWeekId,
    iteration_id: IterationId,
    index: u32,
    week_start: NaiveDate,
    week_end: NaiveDate,
}

impl IterationWeek {
    /// Gives a generated span an identity within an iteration.
    pub fn from_span(id: IterationWeekId, iteration_id: IterationId, span: WeekSpan) -> Self {
        Self {
            id,
            iteration_id,
            index: span.index,
            week_start: span.start,
            week_end: span.end,
        }
    }

    /// Reconstitute a week from persistence.
    pub fn reconstitute(
        id: IterationWeekId,
        iteration_id: IterationId,
        index: u32,
        week_start: NaiveDate,
        week_end: NaiveDate,
    ) -> Self {
        Self {
            id,
            iteration_id,
            index,
            week_start,
            week_end,
        }
    }

    pub fn id(&self) -> &IterationWeekId {
        &self.id
    }

    pub fn iteration_id(&self) -> &IterationId {
        &self.iteration_id
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn week_start(&self) -> NaiveDate {
        self.week_start
    }

    pub fn week_end(&self) -> NaiveDate {
        self.week_end
    }
}

/// Number of days in the inclusive interval `[start, end]`.
///
/// Interval-length convention: this module counts both endpoints, so
/// 2024-01-01..2024-01-14 spans 14 days. All week arithmetic below uses
/// this same convention; mixing it with the exclusive count would produce
/// off-by-one week totals.
pub fn span_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Generates the weekly buckets for an iteration range.
///
/// `weeks_count = ceil(span_days / 7)`; week `i` (0-based) starts at
/// `start + 7i` and ends at `min(start + 7i + 6, end)`, so the final week
/// is clamped to the iteration end even when that leaves it shorter than
/// seven days. The returned spans cover the range exactly, with no gap
/// and no overlap.
///
/// # Errors
///
/// - `InvalidDateRange` if `end <= start`
pub fn generate_weeks(start: NaiveDate, end: NaiveDate) -> Result<Vec<WeekSpan>, CapacityError> {
    if end <= start {
        return Err(CapacityError::invalid_date_range(
            "end date must be after start date",
        ));
    }

    let total_days = span_days(start, end);
    let weeks_count = (total_days + 6) / 7;

    let mut weeks = Vec::with_capacity(weeks_count as usize);
    for i in 0..weeks_count {
        let week_start = start + Days::new((i * 7) as u64);
        let full_end = week_start + Days::new(6);
        let week_end = full_end.min(end);
        weeks.push(WeekSpan {
            index: (i + 1) as u32,
            start: week_start,
            end: week_end,
        });
    }

    Ok(weeks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn assert_partitions(weeks: &[WeekSpan], start: NaiveDate, end: NaiveDate) {
        assert_eq!(weeks.first().unwrap().start, start);
        assert_eq!(weeks.last().unwrap().end, end);
        for pair in weeks.windows(2) {
            // contiguous: each week starts the day after the previous ends
            assert_eq!(pair[1].start, pair[0].end + Days::new(1));
            assert_eq!(pair[1].index, pair[0].index + 1);
        }
    }

    #[test]
    fn fourteen_day_iteration_yields_two_full_weeks() {
        let start = date(2024, 1, 1);
        let end = date(2024, 1, 14);
        let weeks = generate_weeks(start, end).unwrap();

        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].days(), 7);
        assert_eq!(weeks[1].days(), 7);
        assert_eq!(weeks[1].end, end);
        assert_partitions(&weeks, start, end);
    }

    #[test]
    fn ten_day_iteration_truncates_second_week_to_three_days() {
        let start = date(2024, 1, 1);
        let end = date(2024, 1, 10);
        let weeks = generate_weeks(start, end).unwrap();

        assert_eq!(weeks.len(), 2);
        assert_eq!(weeks[0].days(), 7);
        assert_eq!(weeks[1].days(), 3);
        assert_partitions(&weeks, start, end);
    }

    #[test]
    fn two_day_iteration_yields_single_short_week() {
        let weeks = generate_weeks(date(2024, 3, 4), date(2024, 3, 5)).unwrap();
        assert_eq!(weeks.len(), 1);
        assert_eq!(weeks[0].index, 1);
        assert_eq!(weeks[0].days(), 2);
    }

    #[test]
    fn rejects_end_equal_to_start() {
        let d = date(2024, 1, 1);
        assert!(matches!(
            generate_weeks(d, d),
            Err(CapacityError::InvalidDateRange(_))
        ));
    }

    #[test]
    fn rejects_end_before_start() {
        assert!(generate_weeks(date(2024, 1, 10), date(2024, 1, 1)).is_err());
    }

    #[test]
    fn long_iteration_partitions_without_gap_or_overlap() {
        let start = date(2024, 2, 5);
        let end = date(2024, 4, 1); // 57 days -> 9 weeks, last truncated to 1 day
        let weeks = generate_weeks(start, end).unwrap();

        assert_eq!(weeks.len(), 9);
        assert_partitions(&weeks, start, end);
        let covered: i64 = weeks.iter().map(WeekSpan::days).sum();
        assert_eq!(covered, span_days(start, end));
    }

    #[test]
    fn span_days_counts_both_endpoints() {
        assert_eq!(span_days(date(2024, 1, 1), date(2024, 1, 1)), 1);
        assert_eq!(span_days(date(2024, 1, 1), date(2024, 1, 14)), 14);
    }

    #[test]
    fn iteration_week_keeps_span_fields() {
        let span = WeekSpan {
            index: 2,
            start: date(2024, 1, 8),
            end: date(2024, 1, 10),
        };
        let week = IterationWeek::from_span(IterationWeekId::new(), IterationId::new(), span);
        assert_eq!(week.index(), 2);
        assert_eq!(week.week_start(), span.start);
        assert_eq!(week.week_end(), span.end);
    }
}
