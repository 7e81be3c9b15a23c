//! Monthly payroll calculation.
//!
//! Consumes a month of aggregated attendance records plus the hourly rate
//! snapshot they carry and computes regular pay, overtime premium pay, and
//! the projected total fee.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};

use crate::calculation::aggregate::round_hours;
use crate::models::AttendanceRecord;

/// The premium multiplier applied to overtime hours.
///
/// Fixed business rule: overtime is billed at 125% of the hourly rate.
pub const OVERTIME_MULTIPLIER: Decimal = Decimal::from_parts(125, 0, 0, false, 2);

/// A data-consistency issue found while computing totals.
///
/// Warnings are not fatal; the calculation proceeds with clamped values,
/// but the issue must be flagged rather than silently absorbed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the issue.
    pub message: String,
}

/// Warning code: summed overtime exceeded summed work time.
pub const WARN_NEGATIVE_REGULAR_TIME: &str = "NEGATIVE_REGULAR_TIME";
/// Warning code: a record carried a negative overtime value.
pub const WARN_NEGATIVE_OVERTIME: &str = "NEGATIVE_OVERTIME";

/// The derived totals for one employee-month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// Sum of daily work time, two decimals.
    pub total_work_time: Decimal,
    /// Sum of daily overtime, two decimals.
    pub total_overtime: Decimal,
    /// Work time billed at the regular rate; clamped at zero.
    pub regular_work_time: Decimal,
    /// The hourly rate the fee was computed with.
    pub hourly_pay: Decimal,
    /// Projected total fee, truncated to a whole currency unit.
    pub total_fee: i64,
    /// Any data-consistency issues found along the way.
    pub warnings: Vec<ConsistencyWarning>,
}

/// Computes the monthly totals and projected fee for a set of records.
///
/// All records in the set belong to one employee and month and share one
/// hourly rate, taken from the first record; an empty set yields all-zero
/// totals. Overtime is supplied upstream per record and is only validated
/// here, never recomputed.
///
/// The fee is `regular × rate + overtime × rate × 1.25`, truncated to a
/// whole currency unit (no cents) — both the multiplier and the truncation
/// are fixed business rules.
///
/// # Example
///
/// ```
/// use attendance_engine::calculation::compute_fee;
///
/// let totals = compute_fee(&[]);
/// assert_eq!(totals.total_fee, 0);
/// assert!(totals.warnings.is_empty());
/// ```
pub fn compute_fee(records: &[AttendanceRecord]) -> MonthlyTotals {
    let mut warnings = Vec::new();

    let total_work_time = round_hours(records.iter().map(|r| r.total_work_time).sum());

    let mut overtime_sum = Decimal::ZERO;
    for record in records {
        if record.overtime < Decimal::ZERO {
            warnings.push(ConsistencyWarning {
                code: WARN_NEGATIVE_OVERTIME.to_string(),
                message: format!(
                    "record {} on {} carries negative overtime {}; treated as zero",
                    record.id, record.work_date, record.overtime
                ),
            });
        } else {
            overtime_sum += record.overtime;
        }
    }
    let total_overtime = round_hours(overtime_sum);

    let mut regular_work_time = total_work_time - total_overtime;
    if regular_work_time < Decimal::ZERO {
        warnings.push(ConsistencyWarning {
            code: WARN_NEGATIVE_REGULAR_TIME.to_string(),
            message: format!(
                "total overtime {} exceeds total work time {}; regular time clamped to zero",
                total_overtime, total_work_time
            ),
        });
        regular_work_time = Decimal::ZERO;
    }

    let hourly_pay = records
        .first()
        .map(|r| r.hourly_pay)
        .unwrap_or(Decimal::ZERO);

    let regular_pay = regular_work_time * hourly_pay;
    let overtime_pay = total_overtime * hourly_pay * OVERTIME_MULTIPLIER;
    let total_fee = (regular_pay + overtime_pay).trunc().to_i64().unwrap_or(0);

    MonthlyTotals {
        total_work_time,
        total_overtime,
        regular_work_time,
        hourly_pay,
        total_fee,
        warnings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn record(id: u32, work_time: Decimal, overtime: Decimal, hourly_pay: Decimal) -> AttendanceRecord {
        AttendanceRecord {
            id,
            work_date: NaiveDate::from_ymd_opt(2024, 8, id.min(28)).unwrap(),
            segments: vec![],
            break_record: None,
            total_work_time: work_time,
            overtime,
            remarks: vec![],
            hourly_pay,
        }
    }

    #[test]
    fn test_plain_month_without_overtime() {
        let records: Vec<_> = (1..=10)
            .map(|i| record(i, dec("8.00"), Decimal::ZERO, dec("1000")))
            .collect();

        let totals = compute_fee(&records);
        assert_eq!(totals.total_work_time, dec("80.00"));
        assert_eq!(totals.total_overtime, dec("0.00"));
        assert_eq!(totals.regular_work_time, dec("80.00"));
        assert_eq!(totals.total_fee, 80_000);
        assert!(totals.warnings.is_empty());
    }

    #[test]
    fn test_month_with_overtime_premium() {
        // 90 hours total, 10 of them overtime, at 1200/h:
        // 80 * 1200 + 10 * 1200 * 1.25 = 96000 + 15000 = 111000
        let records: Vec<_> = (1..=10)
            .map(|i| record(i, dec("9.00"), dec("1.00"), dec("1200")))
            .collect();

        let totals = compute_fee(&records);
        assert_eq!(totals.total_work_time, dec("90.00"));
        assert_eq!(totals.total_overtime, dec("10.00"));
        assert_eq!(totals.regular_work_time, dec("80.00"));
        assert_eq!(totals.total_fee, 111_000);
    }

    #[test]
    fn test_empty_month_is_all_zero() {
        let totals = compute_fee(&[]);
        assert_eq!(totals.total_work_time, dec("0.00"));
        assert_eq!(totals.total_overtime, dec("0.00"));
        assert_eq!(totals.regular_work_time, Decimal::ZERO);
        assert_eq!(totals.hourly_pay, Decimal::ZERO);
        assert_eq!(totals.total_fee, 0);
    }

    #[test]
    fn test_hourly_pay_taken_from_first_record() {
        let records = vec![
            record(1, dec("8.00"), Decimal::ZERO, dec("1000")),
            record(2, dec("8.00"), Decimal::ZERO, dec("9999")),
        ];

        let totals = compute_fee(&records);
        assert_eq!(totals.hourly_pay, dec("1000"));
        assert_eq!(totals.total_fee, 16_000);
    }

    #[test]
    fn test_fee_is_truncated_not_rounded() {
        // 7.83 hours at 987/h = 7728.21 -> 7728, not 7729.
        let records = vec![record(1, dec("7.83"), Decimal::ZERO, dec("987"))];

        let totals = compute_fee(&records);
        assert_eq!(totals.total_fee, 7_728);
    }

    #[test]
    fn test_overtime_exceeding_total_clamps_and_warns() {
        let records = vec![record(1, dec("4.00"), dec("6.00"), dec("1000"))];

        let totals = compute_fee(&records);
        assert_eq!(totals.regular_work_time, Decimal::ZERO);
        assert_eq!(totals.warnings.len(), 1);
        assert_eq!(totals.warnings[0].code, WARN_NEGATIVE_REGULAR_TIME);
        // Fee still reflects the overtime premium on the supplied hours.
        assert_eq!(totals.total_fee, 7_500);
    }

    #[test]
    fn test_negative_overtime_is_flagged_and_ignored() {
        let records = vec![
            record(1, dec("8.00"), dec("-1.00"), dec("1000")),
            record(2, dec("8.00"), dec("2.00"), dec("1000")),
        ];

        let totals = compute_fee(&records);
        assert_eq!(totals.total_overtime, dec("2.00"));
        assert_eq!(totals.warnings.len(), 1);
        assert_eq!(totals.warnings[0].code, WARN_NEGATIVE_OVERTIME);
        assert!(totals.warnings[0].message.contains("record 1"));
    }

    #[test]
    fn test_overtime_multiplier_constant() {
        assert_eq!(OVERTIME_MULTIPLIER, dec("1.25"));
    }

    #[test]
    fn test_fractional_hours_fee() {
        // 8.50 hours, 0.50 overtime, at 1000/h:
        // 8.00 * 1000 + 0.50 * 1000 * 1.25 = 8000 + 625 = 8625
        let records = vec![record(1, dec("8.50"), dec("0.50"), dec("1000"))];

        let totals = compute_fee(&records);
        assert_eq!(totals.total_fee, 8_625);
    }
}
