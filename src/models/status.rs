//! Attendance status and punch action types.
//!
//! The backend stores attendance status as a bare integer code. This module
//! wraps those codes in a closed enum so that an invalid code can never
//! enter the system as a state.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::EngineError;

/// The attendance status of an employee at a point in time.
///
/// Exactly five states exist. `WorkingResumed` is behaviorally identical to
/// `Working` for clock-out eligibility but is only reachable via a `Return`
/// punch; it is kept distinct because the backend assigns it its own code.
///
/// The authoritative copy of this value lives on the backend; any local
/// copy is a cache that may be stale until reconciled by a round trip.
///
/// # Example
///
/// ```
/// use attendance_engine::models::AttendanceStatus;
///
/// let status = AttendanceStatus::from_code(1).unwrap();
/// assert_eq!(status, AttendanceStatus::Working);
/// assert_eq!(status.code(), 1);
/// assert!(AttendanceStatus::from_code(7).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    /// Not clocked in yet today (code 0).
    NotClockedIn,
    /// Clocked in and working (code 1).
    Working,
    /// Stepped out mid-shift (code 2).
    OnBreakOrOut,
    /// Clocked out for the day (code 3).
    ClockedOut,
    /// Working again after returning from a break or outing (code 4).
    WorkingResumed,
}

impl AttendanceStatus {
    /// Converts a backend wire code into a status.
    ///
    /// Any code outside the five enumerated values is a data-integrity
    /// error, never a new state.
    pub fn from_code(code: i64) -> Result<Self, EngineError> {
        match code {
            0 => Ok(AttendanceStatus::NotClockedIn),
            1 => Ok(AttendanceStatus::Working),
            2 => Ok(AttendanceStatus::OnBreakOrOut),
            3 => Ok(AttendanceStatus::ClockedOut),
            4 => Ok(AttendanceStatus::WorkingResumed),
            _ => Err(EngineError::InvalidStatusCode { code }),
        }
    }

    /// Returns the backend wire code for this status.
    pub fn code(&self) -> i64 {
        match self {
            AttendanceStatus::NotClockedIn => 0,
            AttendanceStatus::Working => 1,
            AttendanceStatus::OnBreakOrOut => 2,
            AttendanceStatus::ClockedOut => 3,
            AttendanceStatus::WorkingResumed => 4,
        }
    }

    /// Returns the display label shown on the punch screen.
    ///
    /// `WorkingResumed` deliberately shares the `Working` label; the
    /// distinction is internal bookkeeping, not something employees see.
    pub fn label(&self) -> &'static str {
        match self {
            AttendanceStatus::NotClockedIn => "未出勤",
            AttendanceStatus::Working => "勤務中",
            AttendanceStatus::OnBreakOrOut => "外出中",
            AttendanceStatus::ClockedOut => "退勤済み",
            AttendanceStatus::WorkingResumed => "勤務中",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AttendanceStatus::NotClockedIn => "NotClockedIn",
            AttendanceStatus::Working => "Working",
            AttendanceStatus::OnBreakOrOut => "OnBreakOrOut",
            AttendanceStatus::ClockedOut => "ClockedOut",
            AttendanceStatus::WorkingResumed => "WorkingResumed",
        };
        f.write_str(name)
    }
}

/// A user-initiated request to change attendance status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PunchAction {
    /// Start the work day.
    ClockIn,
    /// End the work day.
    ClockOut,
    /// Step out mid-shift (break or errand).
    GoOut,
    /// Come back from a break or outing.
    Return,
}

impl PunchAction {
    /// Returns the backend endpoint path segment for this action,
    /// as in `POST /attendance/{action}`.
    pub fn endpoint_path(&self) -> &'static str {
        match self {
            PunchAction::ClockIn => "clockin",
            PunchAction::ClockOut => "clockout",
            PunchAction::GoOut => "goout",
            PunchAction::Return => "return",
        }
    }

    /// All punch actions, in display order.
    pub const ALL: [PunchAction; 4] = [
        PunchAction::ClockIn,
        PunchAction::ClockOut,
        PunchAction::GoOut,
        PunchAction::Return,
    ];
}

impl fmt::Display for PunchAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PunchAction::ClockIn => "ClockIn",
            PunchAction::ClockOut => "ClockOut",
            PunchAction::GoOut => "GoOut",
            PunchAction::Return => "Return",
        };
        f.write_str(name)
    }
}
