//! Time-segment aggregation.
//!
//! Combines a day's work segments and break intervals into a break-adjusted
//! total and the structured remark entries the summary sheet renders.

use chrono::NaiveTime;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::models::{BreakRecord, RemarkEntry, WorkSegment, render_remarks};

/// Rounds decimal hours to two places using standard rounding.
///
/// Every hours value the engine hands downstream goes through this same
/// rule; payroll consumes the rounded values so display and fee math can
/// never drift apart.
pub fn round_hours(hours: Decimal) -> Decimal {
    let mut rounded = hours.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    // Pin the scale so 8 renders as 8.00 on the summary sheet.
    rounded.rescale(2);
    rounded
}

/// The result of aggregating one day's segments and breaks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAggregate {
    /// Total work time in decimal hours, break-adjusted, two decimals.
    pub total_work_time: Decimal,
    /// One remark entry per segment, in chronological order.
    pub remarks: Vec<RemarkEntry>,
}

impl DayAggregate {
    /// Renders the remark entries as the multi-line summary-sheet string.
    pub fn remarks_text(&self) -> String {
        render_remarks(&self.remarks)
    }
}

/// Aggregates a day's work segments and breaks.
///
/// For each closed segment the duration is `(end - start)` on a same-day
/// clock, minus the portion of each closed break that falls within the
/// segment's span. Open segments (no end time yet) render their end as `-`
/// and contribute zero duration until closed. The total is rounded to two
/// decimals with standard rounding.
///
/// Pure function: aggregating the same input twice yields identical output.
/// Overlapping segments are not corrected here; the record editor rejects
/// them before they reach this point.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::aggregate;
/// use attendance_engine::config::EngineConfig;
/// use attendance_engine::models::{BreakRecord, WorkSegment};
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
/// let segments = vec![WorkSegment { store_id: 1, start: t(9, 0), end: Some(t(18, 0)) }];
/// let breaks = vec![BreakRecord { start: t(12, 0), end: Some(t(13, 0)) }];
///
/// let day = aggregate(&segments, &breaks, &EngineConfig::default());
/// assert_eq!(day.total_work_time, Decimal::new(800, 2)); // 8.00
/// assert_eq!(day.remarks_text(), "我家：09:00-18:00");
/// ```
pub fn aggregate(
    segments: &[WorkSegment],
    breaks: &[BreakRecord],
    config: &EngineConfig,
) -> DayAggregate {
    let mut total_minutes: i64 = 0;
    let mut remarks = Vec::with_capacity(segments.len());

    for segment in segments {
        remarks.push(RemarkEntry {
            store_id: segment.store_id,
            store_name: config.store_label(segment.store_id),
            start: segment.start,
            end: segment.end,
        });

        let Some(segment_end) = segment.end else {
            continue;
        };

        let break_minutes: i64 = breaks
            .iter()
            .map(|b| break_overlap_minutes(segment.start, segment_end, b))
            .sum();

        total_minutes += (segment.duration_minutes() - break_minutes).max(0);
    }

    let hours = Decimal::new(total_minutes, 0) / Decimal::new(60, 0);

    DayAggregate {
        total_work_time: round_hours(hours),
        remarks,
    }
}

/// Minutes of a break that fall within a segment's span.
///
/// Only closed breaks count; the intersection is clamped so a break that
/// straddles a segment boundary subtracts only the inside portion.
fn break_overlap_minutes(segment_start: NaiveTime, segment_end: NaiveTime, b: &BreakRecord) -> i64 {
    let Some(break_end) = b.end else {
        return 0;
    };

    let start = segment_start.max(b.start);
    let end = segment_end.min(break_end);
    if end > start {
        (end - start).num_minutes()
    } else {
        0
    }
}
