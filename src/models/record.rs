//! Work segment, break, and attendance record models.
//!
//! An [`AttendanceRecord`] is the aggregate for one employee-day: one or
//! two work segments (a day may include a mid-day store transfer), at most
//! one break, and the derived totals the summary screen displays.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single continuous span of recorded work time at one store.
///
/// A missing end time means the segment is still open (the employee is
/// clocked in) or was never closed; open segments contribute zero duration
/// to totals until closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkSegment {
    /// The store the segment was worked at.
    pub store_id: u32,
    /// When the segment started.
    pub start: NaiveTime,
    /// When the segment ended, if it has ended.
    pub end: Option<NaiveTime>,
}

impl WorkSegment {
    /// Returns the raw duration of the segment in minutes, before break
    /// subtraction. An open segment has no duration yet.
    ///
    /// Times are on a same-day clock; an end earlier than the start is a
    /// data error upstream, not an overnight rollover, and is treated as
    /// zero here so totals can never go negative.
    pub fn duration_minutes(&self) -> i64 {
        match self.end {
            Some(end) => (end - self.start).num_minutes().max(0),
            None => 0,
        }
    }
}

/// A break taken during the day.
///
/// The modeled data records at most one break per day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakRecord {
    /// When the break started.
    pub start: NaiveTime,
    /// When the break ended, if it has ended.
    pub end: Option<NaiveTime>,
}

/// One entry of a day's remarks: which store was worked and over which
/// time range.
///
/// Remarks are carried as structured tuples and only rendered to text at
/// the presentation boundary, so nothing downstream has to parse a
/// free-text string back apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemarkEntry {
    /// The store the entry refers to.
    pub store_id: u32,
    /// The store's display name at render time.
    pub store_name: String,
    /// Segment start time.
    pub start: NaiveTime,
    /// Segment end time; rendered as `-` while the segment is open.
    pub end: Option<NaiveTime>,
}

impl fmt::Display for RemarkEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Full-width colon, matching the summary sheet rendering.
        write!(f, "{}：{}-", self.store_name, self.start.format("%H:%M"))?;
        match self.end {
            Some(end) => write!(f, "{}", end.format("%H:%M")),
            None => f.write_str("-"),
        }
    }
}

/// Renders a day's remark entries as the multi-line summary-sheet string.
///
/// Entries are joined in the order given, which follows segment
/// chronological order, not store ID order.
///
/// # Example
///
/// ```
/// use attendance_engine::models::RemarkEntry;
/// use chrono::NaiveTime;
///
/// let entries = vec![RemarkEntry {
///     store_id: 1,
///     store_name: "我家".to_string(),
///     start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///     end: NaiveTime::from_hms_opt(18, 0, 0).unwrap().into(),
/// }];
/// assert_eq!(attendance_engine::models::render_remarks(&entries), "我家：09:00-18:00");
/// ```
pub fn render_remarks(entries: &[RemarkEntry]) -> String {
    entries
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// The aggregate attendance data for one employee-day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Backend identifier of the record.
    pub id: u32,
    /// The calendar day the record covers.
    pub work_date: NaiveDate,
    /// One or two work segments, in chronological order.
    pub segments: Vec<WorkSegment>,
    /// The day's break, if one was taken.
    pub break_record: Option<BreakRecord>,
    /// Derived total work time in decimal hours, break-adjusted.
    pub total_work_time: Decimal,
    /// Overtime in decimal hours, computed upstream and propagated.
    /// Always non-negative in valid data.
    pub overtime: Decimal,
    /// Structured per-store time ranges for the remarks column.
    #[serde(default)]
    pub remarks: Vec<RemarkEntry>,
    /// The employee's hourly pay snapshot at query time.
    pub hourly_pay: Decimal,
}

/// An ordered month of attendance records for one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlySummary {
    /// The employee the summary is for.
    pub employee_id: u32,
    /// Calendar year.
    pub year: i32,
    /// Calendar month, 1-12.
    pub month: u32,
    /// The month's records in date order.
    pub records: Vec<AttendanceRecord>,
}
