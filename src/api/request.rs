//! Request types for the attendance engine API.
//!
//! This module defines the JSON request structures for the engine
//! endpoints, with conversions into the domain types.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, BreakRecord, PunchAction, WorkSegment};

/// Request body for the `/punch/preflight` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchPreflightRequest {
    /// The cached status code, as stored client-side.
    pub status_code: i64,
    /// The punch action the user is attempting.
    pub action: PunchAction,
}

/// One work segment in an aggregation or validation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentRequest {
    /// The store the segment was worked at.
    pub store_id: u32,
    /// Segment start time.
    pub start: NaiveTime,
    /// Segment end time; absent while the segment is open.
    #[serde(default)]
    pub end: Option<NaiveTime>,
}

impl From<SegmentRequest> for WorkSegment {
    fn from(request: SegmentRequest) -> Self {
        WorkSegment {
            store_id: request.store_id,
            start: request.start,
            end: request.end,
        }
    }
}

/// One break in an aggregation or validation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BreakRequest {
    /// Break start time.
    pub start: NaiveTime,
    /// Break end time; absent while the break is open.
    #[serde(default)]
    pub end: Option<NaiveTime>,
}

impl From<BreakRequest> for BreakRecord {
    fn from(request: BreakRequest) -> Self {
        BreakRecord {
            start: request.start,
            end: request.end,
        }
    }
}

/// Request body for the `/aggregate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateRequest {
    /// The day's work segments, in chronological order.
    pub segments: Vec<SegmentRequest>,
    /// The day's breaks.
    #[serde(default)]
    pub breaks: Vec<BreakRequest>,
}

/// One attendance record in a payroll or validation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordRequest {
    /// Backend identifier of the record.
    pub id: u32,
    /// The day the record covers.
    pub work_date: NaiveDate,
    /// Work segments; may be omitted for payroll requests, which only
    /// consume the derived totals.
    #[serde(default)]
    pub segments: Vec<SegmentRequest>,
    /// The day's break, if any.
    #[serde(default)]
    pub break_record: Option<BreakRequest>,
    /// Derived total work time in decimal hours.
    pub total_work_time: Decimal,
    /// Overtime in decimal hours, computed upstream.
    #[serde(default)]
    pub overtime: Decimal,
    /// Hourly pay snapshot.
    pub hourly_pay: Decimal,
}

impl From<RecordRequest> for AttendanceRecord {
    fn from(request: RecordRequest) -> Self {
        AttendanceRecord {
            id: request.id,
            work_date: request.work_date,
            segments: request.segments.into_iter().map(Into::into).collect(),
            break_record: request.break_record.map(Into::into),
            total_work_time: request.total_work_time,
            overtime: request.overtime,
            remarks: vec![],
            hourly_pay: request.hourly_pay,
        }
    }
}

/// Request body for the `/payroll` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// One employee-month of records, in date order.
    pub records: Vec<RecordRequest>,
}

/// Request body for the `/records/validate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateRecordRequest {
    /// The edited record to validate.
    pub record: RecordRequest,
}
