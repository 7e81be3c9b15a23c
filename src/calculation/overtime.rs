//! Daily overtime split for legacy records.
//!
//! Current records arrive with overtime already computed upstream and the
//! engine only propagates it. Single-segment legacy rows predate that, so
//! the standard-threshold split below reconstructs their overtime.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default daily threshold in hours beyond which time counts as overtime.
pub const STANDARD_DAILY_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// The split of one day's hours into regular and overtime portions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OvertimeSplit {
    /// Hours up to the threshold.
    pub regular_hours: Decimal,
    /// Hours beyond the threshold; zero when under.
    pub overtime_hours: Decimal,
}

/// Splits a day's total work time at the given threshold.
///
/// # Examples
///
/// ```
/// use attendance_engine::calculation::{STANDARD_DAILY_HOURS, split_daily_overtime};
/// use rust_decimal::Decimal;
///
/// let split = split_daily_overtime(Decimal::new(95, 1), STANDARD_DAILY_HOURS);
/// assert_eq!(split.regular_hours, Decimal::new(8, 0));
/// assert_eq!(split.overtime_hours, Decimal::new(15, 1)); // 1.5
/// ```
pub fn split_daily_overtime(total_work_time: Decimal, threshold: Decimal) -> OvertimeSplit {
    if total_work_time > threshold {
        OvertimeSplit {
            regular_hours: threshold,
            overtime_hours: total_work_time - threshold,
        }
    } else {
        OvertimeSplit {
            regular_hours: total_work_time,
            overtime_hours: Decimal::ZERO,
        }
    }
}
