//! Employee model and related types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The role an employee holds, which controls what the summary screens
/// allow them to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Owner or manager; may review any employee's monthly summary.
    Manager,
    /// Regular staff; may only review their own summary.
    Staff,
}

impl Role {
    /// Converts the backend role code into a role.
    ///
    /// Code 1 is manager; every other code observed in the data is staff.
    pub fn from_code(code: i64) -> Self {
        if code == 1 { Role::Manager } else { Role::Staff }
    }

    /// Returns the backend wire code for this role.
    pub fn code(&self) -> i64 {
        match self {
            Role::Manager => 1,
            Role::Staff => 2,
        }
    }
}

/// An employee as seen by the engine.
///
/// The backend owns the full employee record; the engine only reads the
/// fields relevant to calculation and defaults.
///
/// # Example
///
/// ```
/// use attendance_engine::models::{Employee, Role};
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: 3,
///     name: "山田".to_string(),
///     role: Role::Staff,
///     hourly_pay: Decimal::new(1000, 0),
///     competent_store_id: 1,
/// };
/// assert!(!employee.is_manager());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier assigned by the backend.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// The employee's role.
    pub role: Role,
    /// Hourly pay rate in whole currency units.
    pub hourly_pay: Decimal,
    /// The employee's designated primary store, used as the default
    /// selection on the punch screen.
    pub competent_store_id: u32,
}

impl Employee {
    /// Returns true if the employee may review other employees' summaries.
    pub fn is_manager(&self) -> bool {
        self.role == Role::Manager
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_employee(role: Role) -> Employee {
        Employee {
            id: 1,
            name: "佐藤".to_string(),
            role,
            hourly_pay: Decimal::new(1200, 0),
            competent_store_id: 2,
        }
    }

    #[test]
    fn test_role_from_code() {
        assert_eq!(Role::from_code(1), Role::Manager);
        assert_eq!(Role::from_code(2), Role::Staff);
        // Unknown role codes degrade to the least-privileged role.
        assert_eq!(Role::from_code(0), Role::Staff);
        assert_eq!(Role::from_code(9), Role::Staff);
    }

    #[test]
    fn test_role_code_round_trip() {
        assert_eq!(Role::from_code(Role::Manager.code()), Role::Manager);
        assert_eq!(Role::from_code(Role::Staff.code()), Role::Staff);
    }

    #[test]
    fn test_is_manager() {
        assert!(sample_employee(Role::Manager).is_manager());
        assert!(!sample_employee(Role::Staff).is_manager());
    }

    #[test]
    fn test_employee_deserialization() {
        let json = r#"{
            "id": 3,
            "name": "田中",
            "role": "staff",
            "hourly_pay": "1050",
            "competent_store_id": 1
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, 3);
        assert_eq!(employee.name, "田中");
        assert_eq!(employee.role, Role::Staff);
        assert_eq!(employee.hourly_pay, Decimal::new(1050, 0));
        assert_eq!(employee.competent_store_id, 1);
    }

    #[test]
    fn test_employee_serialization_round_trip() {
        let employee = sample_employee(Role::Manager);
        let json = serde_json::to_string(&employee).unwrap();
        let back: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, back);
    }
}
