//! The attendance status state machine.
//!
//! A pure pre-flight filter over punch actions. Each accepted transition is
//! a *request*: the resulting status is pending until the backend confirms
//! it, and the backend's answer always wins over the local prediction.

use crate::error::EngineError;
use crate::models::{AttendanceStatus, PunchAction};

/// Computes the pending status that a punch action would produce from the
/// current status.
///
/// The transition table:
///
/// | Action   | Allowed current states    | Resulting state |
/// |----------|---------------------------|-----------------|
/// | ClockIn  | NotClockedIn              | Working         |
/// | ClockOut | Working, WorkingResumed   | ClockedOut      |
/// | GoOut    | Working                   | OnBreakOrOut    |
/// | Return   | OnBreakOrOut              | WorkingResumed  |
///
/// Any other pairing fails with [`EngineError::InvalidTransition`] and no
/// mutation occurs anywhere. The machine never persists anything itself;
/// it only keeps obviously illegal requests off the wire.
///
/// # Examples
///
/// ```
/// use attendance_engine::models::{AttendanceStatus, PunchAction};
/// use attendance_engine::punch::transition;
///
/// let next = transition(AttendanceStatus::NotClockedIn, PunchAction::ClockIn).unwrap();
/// assert_eq!(next, AttendanceStatus::Working);
///
/// // Clocking out is allowed both before and after a mid-day outing.
/// assert!(transition(AttendanceStatus::Working, PunchAction::ClockOut).is_ok());
/// assert!(transition(AttendanceStatus::WorkingResumed, PunchAction::ClockOut).is_ok());
///
/// // A second clock-in is rejected before any network call.
/// assert!(transition(AttendanceStatus::Working, PunchAction::ClockIn).is_err());
/// ```
pub fn transition(
    current: AttendanceStatus,
    action: PunchAction,
) -> Result<AttendanceStatus, EngineError> {
    use AttendanceStatus::*;
    use PunchAction::*;

    match (current, action) {
        (NotClockedIn, ClockIn) => Ok(Working),
        (Working | WorkingResumed, ClockOut) => Ok(ClockedOut),
        (Working, GoOut) => Ok(OnBreakOrOut),
        (OnBreakOrOut, Return) => Ok(WorkingResumed),
        _ => Err(EngineError::InvalidTransition { current, action }),
    }
}

/// Returns the punch actions that are legal from the given status.
///
/// Drives the enabled/disabled state of the four punch buttons; an action
/// absent from this list should be presented as disabled, not as an error.
pub fn allowed_actions(current: AttendanceStatus) -> Vec<PunchAction> {
    PunchAction::ALL
        .into_iter()
        .filter(|&action| transition(current, action).is_ok())
        .collect()
}
