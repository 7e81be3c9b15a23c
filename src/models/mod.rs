//! Core data models for the attendance engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod record;
mod status;

pub use employee::{Employee, Role};
pub use record::{
    AttendanceRecord, BreakRecord, MonthlySummary, RemarkEntry, WorkSegment, render_remarks,
};
pub use status::{AttendanceStatus, PunchAction};
