//! Calculation logic for the attendance engine.
//!
//! This module contains the time-segment aggregator that turns a day's
//! segments and breaks into a break-adjusted total with structured remarks,
//! the monthly payroll calculator, and the standard-threshold overtime
//! split used for legacy single-segment records.

mod aggregate;
mod overtime;
mod payroll;

pub use aggregate::{DayAggregate, aggregate, round_hours};
pub use overtime::{OvertimeSplit, STANDARD_DAILY_HOURS, split_daily_overtime};
pub use payroll::{
    ConsistencyWarning, MonthlyTotals, OVERTIME_MULTIPLIER, WARN_NEGATIVE_OVERTIME,
    WARN_NEGATIVE_REGULAR_TIME, compute_fee,
};
