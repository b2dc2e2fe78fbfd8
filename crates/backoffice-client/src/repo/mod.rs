//! Domain services.
//!
//! Every service is an async trait with two implementations: `Mock*`,
//! working on process-wide in-memory tables, and `Live*`, delegating to the
//! [`ApiClient`].  [`Services`] bundles one implementation of each; which
//! set is built is decided once, by the caller of [`Services::mock`] or
//! [`Services::live`].

pub mod attendance;
pub mod auth;
pub mod contract;
pub mod dept;
pub mod employee;
pub mod equipment;
pub mod fixtures;
pub mod leave;
pub mod meeting;
pub mod notice;
pub mod role;
pub mod table;

use std::sync::Arc;
use std::time::Duration;

use backoffice_shared::ApiResponse;

use crate::error::ApiError;
use crate::http::ApiClient;

pub use attendance::{AttendanceRepository, LiveAttendanceRepository, MockAttendanceRepository};
pub use auth::{AuthRepository, LiveAuthRepository, MockAuthRepository};
pub use contract::{ContractRepository, LiveContractRepository, MockContractRepository};
pub use dept::{DeptRepository, LiveDeptRepository, MockDeptRepository};
pub use employee::{EmployeeRepository, LiveEmployeeRepository, MockEmployeeRepository};
pub use equipment::{EquipmentRepository, LiveEquipmentRepository, MockEquipmentRepository};
pub use leave::{LeaveRepository, LiveLeaveRepository, MockLeaveRepository};
pub use meeting::{LiveMeetingRepository, MeetingRepository, MockMeetingRepository};
pub use notice::{LiveNoticeRepository, MockNoticeRepository, NoticeRepository};
pub use role::{LiveRoleRepository, MockRoleRepository, RoleRepository};
pub use table::{MockTable, Record};

/// What every repository call yields: the envelope, or a transport-level
/// failure from the request wrapper.
pub type RepoResult<T> = Result<ApiResponse<T>, ApiError>;

/// One implementation of every domain service.
#[derive(Clone)]
pub struct Services {
    pub auth: Arc<dyn AuthRepository>,
    pub employees: Arc<dyn EmployeeRepository>,
    pub depts: Arc<dyn DeptRepository>,
    pub contracts: Arc<dyn ContractRepository>,
    pub meetings: Arc<dyn MeetingRepository>,
    pub attendance: Arc<dyn AttendanceRepository>,
    pub equipment: Arc<dyn EquipmentRepository>,
    pub notices: Arc<dyn NoticeRepository>,
    pub roles: Arc<dyn RoleRepository>,
    pub leaves: Arc<dyn LeaveRepository>,
}

impl Services {
    /// In-memory services seeded with the fixture data set.
    pub fn mock(latency: Duration) -> Self {
        let depts = Arc::new(MockTable::new(fixtures::depts(), latency));

        Self {
            auth: Arc::new(MockAuthRepository::new(latency)),
            employees: Arc::new(MockEmployeeRepository::new(
                MockTable::new(fixtures::employees(), latency),
                depts.clone(),
            )),
            depts: Arc::new(MockDeptRepository::new(depts)),
            contracts: Arc::new(MockContractRepository::new(MockTable::new(
                fixtures::contracts(),
                latency,
            ))),
            meetings: Arc::new(MockMeetingRepository::new(MockTable::new(
                fixtures::meetings(),
                latency,
            ))),
            attendance: Arc::new(MockAttendanceRepository::new(
                fixtures::attendance_today(),
                MockTable::new(fixtures::attendance_history(), latency),
            )),
            equipment: Arc::new(MockEquipmentRepository::new(MockTable::new(
                fixtures::equipment(),
                latency,
            ))),
            notices: Arc::new(MockNoticeRepository::new(MockTable::new(
                fixtures::notices(),
                latency,
            ))),
            roles: Arc::new(MockRoleRepository::new(MockTable::new(
                fixtures::roles(),
                latency,
            ))),
            leaves: Arc::new(MockLeaveRepository::new(MockTable::new(
                fixtures::leaves(),
                latency,
            ))),
        }
    }

    /// Services backed by the REST API.
    pub fn live(api: Arc<ApiClient>) -> Self {
        Self {
            auth: Arc::new(LiveAuthRepository::new(api.clone())),
            employees: Arc::new(LiveEmployeeRepository::new(api.clone())),
            depts: Arc::new(LiveDeptRepository::new(api.clone())),
            contracts: Arc::new(LiveContractRepository::new(api.clone())),
            meetings: Arc::new(LiveMeetingRepository::new(api.clone())),
            attendance: Arc::new(LiveAttendanceRepository::new(api.clone())),
            equipment: Arc::new(LiveEquipmentRepository::new(api.clone())),
            notices: Arc::new(LiveNoticeRepository::new(api.clone())),
            roles: Arc::new(LiveRoleRepository::new(api.clone())),
            leaves: Arc::new(LiveLeaveRepository::new(api)),
        }
    }
}

/// Case-insensitive substring match of `keyword` against any of `fields`.
pub(crate) fn matches_keyword(keyword: &str, fields: &[&str]) -> bool {
    let needle = keyword.to_lowercase();
    fields.iter().any(|f| f.to_lowercase().contains(&needle))
}

/// Today's date in the mock data's `YYYY-MM-DD` format.
pub(crate) fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Current local time in the mock data's `YYYY-MM-DDTHH:MM:SS` format.
pub(crate) fn now_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%dT%H:%M:%S").to_string()
}
