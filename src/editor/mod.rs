//! Pre-submission validation of manually corrected attendance records.
//!
//! When a manager fixes a historical row, the edited record passes through
//! [`validate`] before it is sent for persistence. Validation never mutates
//! the record; a valid record comes back exactly as it went in, and the
//! caller then asks for user confirmation and submits to the backend.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::models::{AttendanceRecord, BreakRecord, WorkSegment};

/// Validates an edited attendance record before submission.
///
/// Checks, in order:
/// - at least one and at most two work segments are present;
/// - every closed segment satisfies `start <= end`;
/// - a second segment does not start before the first one ends (no
///   backward time travel across a store transfer);
/// - a closed break satisfies `start <= end` and, when both segments are
///   closed, is fully contained by one segment or by the gap between them
///   (strict containment — stricter than the legacy recorded data, which
///   never checked this);
/// - the hourly pay snapshot is non-negative.
///
/// On success the record is returned unchanged.
///
/// # Example
///
/// ```
/// use attendance_engine::editor::validate;
/// use attendance_engine::models::{AttendanceRecord, WorkSegment};
/// use chrono::{NaiveDate, NaiveTime};
/// use rust_decimal::Decimal;
///
/// let record = AttendanceRecord {
///     id: 1,
///     work_date: NaiveDate::from_ymd_opt(2024, 8, 1).unwrap(),
///     segments: vec![WorkSegment {
///         store_id: 1,
///         start: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
///         end: NaiveTime::from_hms_opt(18, 0, 0).unwrap().into(),
///     }],
///     break_record: None,
///     total_work_time: Decimal::new(900, 2),
///     overtime: Decimal::ZERO,
///     remarks: vec![],
///     hourly_pay: Decimal::new(1000, 0),
/// };
///
/// let validated = validate(record.clone()).unwrap();
/// assert_eq!(validated, record);
/// ```
pub fn validate(record: AttendanceRecord) -> Result<AttendanceRecord, ValidationError> {
    if record.segments.is_empty() {
        return Err(ValidationError::MissingField {
            field: "segments".to_string(),
        });
    }
    if record.segments.len() > 2 {
        return Err(ValidationError::OrderingViolation {
            message: format!(
                "a day supports at most two work segments, found {}",
                record.segments.len()
            ),
        });
    }

    for (index, segment) in record.segments.iter().enumerate() {
        check_pair_order(
            &format!("segments[{}]", index),
            segment.start,
            segment.end,
        )?;
    }

    if let [first, second] = record.segments.as_slice() {
        let first_end = first.end.ok_or_else(|| ValidationError::MissingField {
            field: "segments[0].end".to_string(),
        })?;
        if second.start < first_end {
            return Err(ValidationError::OrderingViolation {
                message: format!(
                    "second segment starts at {} before the first segment ends at {}",
                    second.start.format("%H:%M"),
                    first_end.format("%H:%M")
                ),
            });
        }
    }

    if let Some(break_record) = &record.break_record {
        check_pair_order("break_record", break_record.start, break_record.end)?;
        check_break_containment(&record.segments, break_record)?;
    }

    if record.hourly_pay < Decimal::ZERO {
        return Err(ValidationError::NotANumber {
            field: "hourly_pay".to_string(),
            value: record.hourly_pay.to_string(),
        });
    }

    Ok(record)
}

/// Parses a currency field from form input as a non-negative number.
///
/// # Example
///
/// ```
/// use attendance_engine::editor::parse_hourly_pay;
/// use rust_decimal::Decimal;
///
/// assert_eq!(parse_hourly_pay("1000").unwrap(), Decimal::new(1000, 0));
/// assert!(parse_hourly_pay("abc").is_err());
/// assert!(parse_hourly_pay("-5").is_err());
/// ```
pub fn parse_hourly_pay(input: &str) -> Result<Decimal, ValidationError> {
    let not_a_number = || ValidationError::NotANumber {
        field: "hourly_pay".to_string(),
        value: input.to_string(),
    };

    let value = Decimal::from_str(input.trim()).map_err(|_| not_a_number())?;
    if value < Decimal::ZERO {
        return Err(not_a_number());
    }
    Ok(value)
}

fn check_pair_order(
    field: &str,
    start: NaiveTime,
    end: Option<NaiveTime>,
) -> Result<(), ValidationError> {
    if let Some(end) = end {
        if end < start {
            return Err(ValidationError::OrderingViolation {
                message: format!(
                    "{} end {} precedes start {}",
                    field,
                    end.format("%H:%M"),
                    start.format("%H:%M")
                ),
            });
        }
    }
    Ok(())
}

/// With two closed segments, a closed break must sit entirely inside one
/// segment or inside the gap between them. Open segments or an open break
/// defer the check until the missing end time exists.
fn check_break_containment(
    segments: &[WorkSegment],
    break_record: &BreakRecord,
) -> Result<(), ValidationError> {
    let Some(break_end) = break_record.end else {
        return Ok(());
    };

    let [first, second] = segments else {
        return Ok(());
    };
    let (Some(first_end), Some(second_end)) = (first.end, second.end) else {
        return Ok(());
    };

    let spans = [
        (first.start, first_end),
        (first_end, second.start),
        (second.start, second_end),
    ];
    let contained = spans
        .iter()
        .any(|&(lo, hi)| break_record.start >= lo && break_end <= hi);

    if contained {
        Ok(())
    } else {
        Err(ValidationError::OrderingViolation {
            message: format!(
                "break {}-{} is not contained by a work segment or the gap between segments",
                break_record.start.format("%H:%M"),
                break_end.format("%H:%M")
            ),
        })
    }
}
