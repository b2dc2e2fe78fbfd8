//! Domain records exchanged with the back-office REST API.
//!
//! Field names follow the API's camelCase JSON.  Numeric status codes are
//! kept as integers on the wire; the `*Status` helpers map them to meaning.
//! Draft types carry only the fields a create/update call wants to set.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Employee
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub emp_no: String,
    pub emp_name: String,
    /// 0: female, 1: male
    pub gender: i32,
    pub mobile: String,
    pub email: String,
    pub dept_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dept_name: Option<String>,
    pub position: String,
    pub hire_date: String,
    /// 1: active, 0: inactive
    pub status: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emp_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dept_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

impl From<&Employee> for EmployeeDraft {
    fn from(e: &Employee) -> Self {
        Self {
            emp_name: Some(e.emp_name.clone()),
            gender: Some(e.gender),
            mobile: Some(e.mobile.clone()),
            email: Some(e.email.clone()),
            dept_id: Some(e.dept_id),
            position: Some(e.position.clone()),
            status: Some(e.status),
        }
    }
}

// ---------------------------------------------------------------------------
// Department
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Dept {
    pub id: i64,
    pub dept_name: String,
    pub parent_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub manager_name: Option<String>,
    pub dept_code: String,
}

// ---------------------------------------------------------------------------
// Contract
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: i64,
    pub contract_no: String,
    pub contract_name: String,
    pub amount: f64,
    pub party_a: String,
    pub party_b: String,
    pub sign_date: String,
    pub end_date: String,
    /// 0: draft, 1: active, 2: expired
    pub contract_status: i32,
    pub approval_status: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ContractDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub party_b: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_status: Option<i32>,
}

impl From<&Contract> for ContractDraft {
    fn from(c: &Contract) -> Self {
        Self {
            contract_name: Some(c.contract_name.clone()),
            amount: Some(c.amount),
            party_b: Some(c.party_b.clone()),
            end_date: Some(c.end_date.clone()),
            contract_status: Some(c.contract_status),
        }
    }
}

/// One bar of the contract value chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContractStat {
    pub name: String,
    pub value: f64,
}

impl ContractStat {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

// ---------------------------------------------------------------------------
// Meeting
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MeetingReservation {
    pub id: i64,
    pub meeting_title: String,
    pub room_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_name: Option<String>,
    pub start_time: String,
    pub end_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizer_name: Option<String>,
    /// 0: pending, 1: approved, 2: rejected
    pub status: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Attendance
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub id: i64,
    pub user_id: i64,
    pub attendance_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_out_time: Option<String>,
    pub status: String,
}

// ---------------------------------------------------------------------------
// Equipment
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: i64,
    pub equipment_name: String,
    pub equipment_no: String,
    /// 1: available, 2: borrowed, 3: maintenance
    pub status: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_name: Option<String>,
}

// ---------------------------------------------------------------------------
// Notice
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Notice {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub publish_time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher_name: Option<String>,
    /// 1: important, 2: general
    pub notice_type: i32,
}

// ---------------------------------------------------------------------------
// Role
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: i64,
    pub role_name: String,
    pub role_code: String,
    #[serde(default)]
    pub description: String,
    /// 1: active, 0: disabled
    pub status: i32,
    #[serde(default)]
    pub create_time: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RoleDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

impl From<&Role> for RoleDraft {
    fn from(r: &Role) -> Self {
        Self {
            role_name: Some(r.role_name.clone()),
            role_code: Some(r.role_code.clone()),
            description: Some(r.description.clone()),
            status: Some(r.status),
        }
    }
}

// ---------------------------------------------------------------------------
// Leave
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeaveRecord {
    pub id: i64,
    pub user_id: i64,
    pub user_name: String,
    /// 1: sick, 2: annual, 3: personal
    pub leave_type: i32,
    pub start_time: String,
    pub end_time: String,
    pub reason: String,
    /// 0: pending, 1: approved, 2: rejected
    pub status: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub approval_remark: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LeaveApply {
    pub leave_type: i32,
    pub start_time: String,
    pub end_time: String,
    pub reason: String,
}

impl Default for LeaveApply {
    fn default() -> Self {
        Self {
            leave_type: LEAVE_ANNUAL,
            start_time: String::new(),
            end_time: String::new(),
            reason: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Status codes
// ---------------------------------------------------------------------------

pub const LEAVE_SICK: i32 = 1;
pub const LEAVE_ANNUAL: i32 = 2;
pub const LEAVE_PERSONAL: i32 = 3;

/// Shared pending/approved/rejected workflow used by leaves and meetings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Pending),
            1 => Some(Self::Approved),
            2 => Some(Self::Rejected),
            _ => None,
        }
    }

    pub fn code(self) -> i32 {
        match self {
            Self::Pending => 0,
            Self::Approved => 1,
            Self::Rejected => 2,
        }
    }
}
