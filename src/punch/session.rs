//! The per-employee session context.
//!
//! The original client kept the employee id, role, hourly pay, and cached
//! status as ambient browser-resident fields. Here they live in an explicit
//! [`Session`] value that is passed into each operation, with the cached
//! status modeled as unconfirmed until a backend round trip completes.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{AttendanceStatus, PunchAction, Role};
use crate::punch::machine::transition;

/// A punch request ready to be sent to the backend.
///
/// Produced by [`Session::prepare_punch`] after the pre-flight filter has
/// accepted the action. The predicted status is informational only; the
/// cache is not updated until the backend confirms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchRequest {
    /// The employee making the punch.
    pub employee_id: u32,
    /// The store selected on the punch screen.
    pub store_id: u32,
    /// The requested action.
    pub action: PunchAction,
    /// The status this punch is expected to produce.
    pub predicted: AttendanceStatus,
}

impl PunchRequest {
    /// The backend path for this request, `/attendance/{action}`.
    pub fn endpoint(&self) -> String {
        format!("/attendance/{}", self.action.endpoint_path())
    }
}

/// One employee's session: identity seed values from login plus the cached
/// attendance status.
///
/// The cached status mirrors the backend's authoritative copy and may be
/// stale. Only [`Session::confirm`] and [`Session::confirm_code`] mutate
/// it, and both take the server's value unconditionally — the local
/// prediction is never treated as durable.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{AttendanceStatus, PunchAction, Role};
/// use attendance_engine::punch::Session;
/// use rust_decimal::Decimal;
///
/// let mut session = Session::new(3, "山田", Role::Staff, 1, Decimal::new(1000, 0));
/// let request = session.prepare_punch(PunchAction::ClockIn).unwrap();
/// assert_eq!(request.endpoint(), "/attendance/clockin");
/// // Cache unchanged until the backend answers.
/// assert_eq!(session.status(), AttendanceStatus::NotClockedIn);
///
/// // Backend confirms with its returned status code.
/// session.confirm_code(1).unwrap();
/// assert_eq!(session.status(), AttendanceStatus::Working);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// The employee's backend identifier.
    pub employee_id: u32,
    /// Display name.
    pub name: String,
    /// The employee's role.
    pub role: Role,
    /// Default store selection for the punch screen.
    pub competent_store_id: u32,
    /// Hourly pay snapshot from login.
    pub hourly_pay: Decimal,
    status: AttendanceStatus,
}

impl Session {
    /// Creates a session starting the day not clocked in.
    pub fn new(
        employee_id: u32,
        name: impl Into<String>,
        role: Role,
        competent_store_id: u32,
        hourly_pay: Decimal,
    ) -> Self {
        Session {
            employee_id,
            name: name.into(),
            role,
            competent_store_id,
            hourly_pay,
            status: AttendanceStatus::NotClockedIn,
        }
    }

    /// Restores a session from cached seed values, validating the stored
    /// status code.
    pub fn restore(
        employee_id: u32,
        name: impl Into<String>,
        role: Role,
        competent_store_id: u32,
        hourly_pay: Decimal,
        status_code: i64,
    ) -> EngineResult<Self> {
        let status = AttendanceStatus::from_code(status_code)?;
        Ok(Session {
            employee_id,
            name: name.into(),
            role,
            competent_store_id,
            hourly_pay,
            status,
        })
    }

    /// The cached attendance status. Possibly stale until reconciled.
    pub fn status(&self) -> AttendanceStatus {
        self.status
    }

    /// Runs the pre-flight filter for an action against the cached status
    /// without mutating anything.
    pub fn predict(&self, action: PunchAction) -> EngineResult<AttendanceStatus> {
        transition(self.status, action)
    }

    /// Builds a punch request for the competent store.
    pub fn prepare_punch(&self, action: PunchAction) -> EngineResult<PunchRequest> {
        self.prepare_punch_at(action, self.competent_store_id)
    }

    /// Builds a punch request for an explicitly selected store.
    ///
    /// Fails with [`crate::error::EngineError::InvalidTransition`] if the
    /// action is not legal from the cached status; the cache is untouched
    /// either way.
    pub fn prepare_punch_at(
        &self,
        action: PunchAction,
        store_id: u32,
    ) -> EngineResult<PunchRequest> {
        let predicted = transition(self.status, action)?;
        Ok(PunchRequest {
            employee_id: self.employee_id,
            store_id,
            action,
            predicted,
        })
    }

    /// Accepts the backend's confirmed status. Server wins: the value
    /// overwrites the cache even if it disagrees with the local prediction.
    pub fn confirm(&mut self, status: AttendanceStatus) {
        self.status = status;
    }

    /// Accepts the backend's confirmed status as a wire code.
    ///
    /// An unknown code is a data-integrity error and leaves the cache
    /// unchanged. Backend rejections and network failures require no call
    /// here at all — not confirming is what leaves the cache untouched.
    pub fn confirm_code(&mut self, code: i64) -> EngineResult<AttendanceStatus> {
        let status = AttendanceStatus::from_code(code)?;
        self.status = status;
        Ok(status)
    }
}
