//! Seed data of the mock data source.

use backoffice_shared::{
    AttendanceRecord, Contract, Dept, Employee, Equipment, LeaveRecord, MeetingReservation,
    Notice, Role,
};

use super::today;

#[allow(clippy::too_many_arguments)]
fn employee(
    id: i64,
    emp_name: &str,
    gender: i32,
    mobile: &str,
    email: &str,
    dept: (i64, &str),
    position: &str,
    hire_date: &str,
    status: i32,
) -> Employee {
    Employee {
        id,
        emp_no: format!("EMP{id:03}"),
        emp_name: emp_name.into(),
        gender,
        mobile: mobile.into(),
        email: email.into(),
        dept_id: dept.0,
        dept_name: Some(dept.1.into()),
        position: position.into(),
        hire_date: hire_date.into(),
        status,
        avatar: None,
    }
}

pub fn employees() -> Vec<Employee> {
    vec![
        employee(1, "Alice Johnson", 0, "123-456-7890", "alice@company.com", (101, "IT Dept"), "Senior Dev", "2021-01-15", 1),
        employee(2, "Bob Smith", 1, "098-765-4321", "bob@company.com", (102, "HR Dept"), "Manager", "2020-03-10", 1),
        employee(3, "Charlie Brown", 1, "555-123-4567", "charlie@company.com", (101, "IT Dept"), "Junior Dev", "2022-06-01", 1),
        employee(4, "Diana Prince", 0, "555-987-6543", "diana@company.com", (103, "Sales"), "Director", "2019-11-20", 1),
        employee(5, "Evan Wright", 1, "555-555-5555", "evan@company.com", (103, "Sales"), "Associate", "2023-01-10", 0),
    ]
}

fn dept(id: i64, name: &str, code: &str, manager: &str) -> Dept {
    Dept {
        id,
        dept_name: name.into(),
        parent_id: 0,
        manager_name: Some(manager.into()),
        dept_code: code.into(),
    }
}

pub fn depts() -> Vec<Dept> {
    vec![
        dept(101, "IT Dept", "IT01", "Alice Johnson"),
        dept(102, "HR Dept", "HR01", "Bob Smith"),
        dept(103, "Sales", "SL01", "Diana Prince"),
        dept(104, "Marketing", "MK01", "Evan Wright"),
    ]
}

#[allow(clippy::too_many_arguments)]
fn contract(
    id: i64,
    name: &str,
    amount: f64,
    party_a: &str,
    sign_date: &str,
    end_date: &str,
    contract_status: i32,
    approval_status: i32,
) -> Contract {
    Contract {
        id,
        contract_no: format!("CTR-2023-{id:03}"),
        contract_name: name.into(),
        amount,
        party_a: party_a.into(),
        party_b: "Our Company".into(),
        sign_date: sign_date.into(),
        end_date: end_date.into(),
        contract_status,
        approval_status,
    }
}

pub fn contracts() -> Vec<Contract> {
    vec![
        contract(1, "Office Lease 2023", 120_000.0, "RealEstate Co", "2023-01-01", "2024-01-01", 1, 1),
        contract(2, "Server Maintenance", 50_000.0, "TechSupport Inc", "2023-02-15", "2024-02-15", 1, 1),
        contract(3, "Catering Service", 15_000.0, "Yummy Foods", "2023-05-01", "2023-12-31", 2, 1),
        contract(4, "Cleaning Services", 24_000.0, "CleanMasters", "2023-06-01", "2024-06-01", 0, 0),
    ]
}

pub fn meetings() -> Vec<MeetingReservation> {
    vec![
        MeetingReservation {
            id: 1,
            meeting_title: "Q3 Roadmap Planning".into(),
            room_id: 1,
            room_name: Some("Conf Room A".into()),
            start_time: "2023-10-27T10:00:00".into(),
            end_time: "2023-10-27T12:00:00".into(),
            organizer_name: Some("Alice Johnson".into()),
            status: 1,
            description: Some("Planning the next quarter goals".into()),
        },
        MeetingReservation {
            id: 2,
            meeting_title: "Client Demo".into(),
            room_id: 2,
            room_name: Some("Conf Room B".into()),
            start_time: "2023-10-27T14:00:00".into(),
            end_time: "2023-10-27T15:00:00".into(),
            organizer_name: Some("Diana Prince".into()),
            status: 0,
            description: Some("Demo for prospective client".into()),
        },
    ]
}

pub fn attendance_today() -> AttendanceRecord {
    AttendanceRecord {
        id: 1,
        user_id: 1,
        attendance_date: today(),
        check_in_time: Some("2023-10-27T08:55:00".into()),
        check_out_time: None,
        status: "Normal".into(),
    }
}

fn attendance(id: i64, user_id: i64, date: &str, check_in: &str, check_out: &str, status: &str) -> AttendanceRecord {
    AttendanceRecord {
        id,
        user_id,
        attendance_date: date.into(),
        check_in_time: Some(format!("{date}T{check_in}")),
        check_out_time: Some(format!("{date}T{check_out}")),
        status: status.into(),
    }
}

pub fn attendance_history() -> Vec<AttendanceRecord> {
    vec![
        attendance(1, 1, "2023-10-27", "08:55:00", "18:00:00", "Normal"),
        attendance(2, 1, "2023-10-26", "09:10:00", "18:05:00", "Late"),
        attendance(3, 1, "2023-10-25", "08:50:00", "17:55:00", "Normal"),
        attendance(4, 2, "2023-10-27", "08:30:00", "17:30:00", "Normal"),
    ]
}

fn equipment_item(id: i64, name: &str, status: i32, category: &str) -> Equipment {
    Equipment {
        id,
        equipment_name: name.into(),
        equipment_no: format!("EQ-2023-{id:03}"),
        status,
        category_name: Some(category.into()),
    }
}

pub fn equipment() -> Vec<Equipment> {
    vec![
        equipment_item(1, "MacBook Pro M2", 2, "Laptop"),
        equipment_item(2, "Dell XPS 15", 1, "Laptop"),
        equipment_item(3, "Projector 4K", 1, "Peripherals"),
        equipment_item(4, "Office Chair Ergonomic", 1, "Furniture"),
        equipment_item(5, "Meeting Room TV", 3, "Electronics"),
    ]
}

fn notice(id: i64, title: &str, content: &str, publish_time: &str, publisher: &str, notice_type: i32) -> Notice {
    Notice {
        id,
        title: title.into(),
        content: content.into(),
        publish_time: publish_time.into(),
        publisher_name: Some(publisher.into()),
        notice_type,
    }
}

pub fn notices() -> Vec<Notice> {
    vec![
        notice(1, "Holiday Announcement", "Office will be closed next Monday due to public holiday.", "2023-10-25T09:00:00", "HR Admin", 1),
        notice(2, "System Maintenance", "Servers will be down on Sunday night for scheduled updates.", "2023-10-26T10:00:00", "IT Admin", 2),
        notice(3, "New Benefit Plan", "We are rolling out a new health insurance plan starting next month.", "2023-10-20T14:30:00", "HR Dept", 2),
    ]
}

fn role(id: i64, name: &str, code: &str, description: &str, status: i32) -> Role {
    Role {
        id,
        role_name: name.into(),
        role_code: code.into(),
        description: description.into(),
        status,
        create_time: "2023-01-01T09:00:00".into(),
    }
}

pub fn roles() -> Vec<Role> {
    vec![
        role(1, "Administrator", "admin", "Full access to every module", 1),
        role(2, "Staff", "user", "Workspace and assets", 1),
        role(3, "HR Manager", "hr", "Employee records and leave approvals", 1),
        role(4, "Auditor", "auditor", "Read-only access to contracts", 0),
    ]
}

#[allow(clippy::too_many_arguments)]
fn leave(
    id: i64,
    user_id: i64,
    user_name: &str,
    leave_type: i32,
    start_time: &str,
    end_time: &str,
    reason: &str,
    status: i32,
    remark: Option<&str>,
) -> LeaveRecord {
    LeaveRecord {
        id,
        user_id,
        user_name: user_name.into(),
        leave_type,
        start_time: start_time.into(),
        end_time: end_time.into(),
        reason: reason.into(),
        status,
        approval_remark: remark.map(Into::into),
    }
}

pub fn leaves() -> Vec<LeaveRecord> {
    vec![
        leave(1, 1, "Admin User", 2, "2023-11-01", "2023-11-03", "Family trip", 1, Some("Enjoy")),
        leave(2, 3, "Charlie Brown", 1, "2023-10-30", "2023-10-30", "Flu", 0, None),
        leave(3, 5, "Evan Wright", 3, "2023-11-10", "2023-11-10", "Moving house", 0, None),
        leave(4, 2, "Bob Smith", 2, "2023-09-18", "2023-09-22", "Vacation", 2, Some("Quarter close")),
    ]
}
