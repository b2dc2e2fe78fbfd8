//! Translation keys for numeric status codes.
//!
//! Unknown codes map to `None`; callers show the raw code instead.

use backoffice_shared::{ApprovalStatus, LEAVE_ANNUAL, LEAVE_PERSONAL, LEAVE_SICK};

pub fn employee_status(status: i32) -> &'static str {
    if status == 1 {
        "active"
    } else {
        "inactive"
    }
}

pub fn contract_status(status: i32) -> Option<&'static str> {
    match status {
        0 => Some("draft"),
        1 => Some("active"),
        2 => Some("expired"),
        _ => None,
    }
}

pub fn equipment_status(status: i32) -> Option<&'static str> {
    match status {
        1 => Some("available"),
        2 => Some("borrowed"),
        3 => Some("maintenance"),
        _ => None,
    }
}

/// Meetings and leave applications share the approval workflow.
pub fn approval_status(status: i32) -> Option<&'static str> {
    ApprovalStatus::from_code(status).map(|s| match s {
        ApprovalStatus::Pending => "pending",
        ApprovalStatus::Approved => "confirmed",
        ApprovalStatus::Rejected => "rejected",
    })
}

pub fn leave_type(leave_type: i32) -> Option<&'static str> {
    match leave_type {
        LEAVE_SICK => Some("sick"),
        LEAVE_ANNUAL => Some("annual"),
        LEAVE_PERSONAL => Some("personal"),
        _ => None,
    }
}

pub fn notice_type(notice_type: i32) -> &'static str {
    if notice_type == 1 {
        "important"
    } else {
        "general"
    }
}

/// Attendance statuses arrive as words ("Normal", "Late", ...).
pub fn attendance_status(status: &str) -> Option<&'static str> {
    match status.to_ascii_lowercase().as_str() {
        "normal" => Some("normal"),
        "late" => Some("late"),
        "absent" => Some("absent"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Language, Translator};

    #[test]
    fn every_label_is_translated() {
        let zh = Translator::new(Language::Zh);
        let keys = [
            Some(employee_status(0)),
            contract_status(2),
            equipment_status(3),
            approval_status(1),
            leave_type(3),
            Some(notice_type(1)),
            attendance_status("Late"),
        ];
        for key in keys {
            let key = key.unwrap();
            assert_ne!(zh.t(key), key, "{key} has no translation");
        }
    }

    #[test]
    fn unknown_codes() {
        assert_eq!(contract_status(9), None);
        assert_eq!(approval_status(-1), None);
        assert_eq!(leave_type(0), None);
    }
}
