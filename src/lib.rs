//! Attendance & Payroll Engine
//!
//! This crate provides the core logic of a multi-store attendance
//! application: the status state machine that filters punch actions, the
//! time-segment aggregator that turns raw clock and break timestamps into
//! daily totals with remarks, the monthly payroll calculator, and the
//! validator for manually corrected records. The backend service remains
//! the system of record; every locally predicted status is provisional
//! until a backend round trip confirms it.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod editor;
pub mod error;
pub mod models;
pub mod punch;
