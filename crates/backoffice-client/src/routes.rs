//! Path-based routes of the back-office client.

use backoffice_shared::constants::ROLE_ADMIN;
use backoffice_shared::RoleSet;

const ADMIN_ONLY: &[&str] = &[ROLE_ADMIN];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Dashboard,
    Employees,
    Contracts,
    Meetings,
    Departments,
    Attendance,
    Equipment,
    Notices,
    Roles,
    Leaves,
}

impl Route {
    pub const ALL: [Route; 11] = [
        Route::Login,
        Route::Dashboard,
        Route::Employees,
        Route::Contracts,
        Route::Meetings,
        Route::Departments,
        Route::Attendance,
        Route::Equipment,
        Route::Notices,
        Route::Roles,
        Route::Leaves,
    ];

    /// Where unknown paths and forbidden pages land.
    pub const LANDING: Route = Route::Dashboard;

    pub fn path(self) -> &'static str {
        match self {
            Self::Login => "/login",
            Self::Dashboard => "/",
            Self::Employees => "/employees",
            Self::Contracts => "/contracts",
            Self::Meetings => "/meetings",
            Self::Departments => "/departments",
            Self::Attendance => "/attendance",
            Self::Equipment => "/equipment",
            Self::Notices => "/notices",
            Self::Roles => "/roles",
            Self::Leaves => "/leaves",
        }
    }

    /// Translation key of the page title.
    pub fn title_key(self) -> &'static str {
        match self {
            Self::Login => "signIn",
            Self::Dashboard => "dashboard",
            Self::Employees => "employees",
            Self::Contracts => "contracts",
            Self::Meetings => "meetings",
            Self::Departments => "departments",
            Self::Attendance => "attendance",
            Self::Equipment => "equipment",
            Self::Notices => "notices",
            Self::Roles => "roles",
            Self::Leaves => "leaves",
        }
    }

    /// Roles allowed to open the page.
    pub fn roles(self) -> RoleSet {
        match self {
            Self::Employees | Self::Departments | Self::Roles => RoleSet::OneOf(ADMIN_ONLY),
            _ => RoleSet::Any,
        }
    }

    /// Every page except the login screen needs a session.
    pub fn is_guarded(self) -> bool {
        self != Self::Login
    }

    /// Exact match of a normalised path.
    pub fn from_path(path: &str) -> Option<Route> {
        let normalised = normalise(path);
        Self::ALL.into_iter().find(|r| r.path() == normalised)
    }

    /// Like [`from_path`](Self::from_path), but unknown paths redirect to
    /// the landing page.
    pub fn resolve(path: &str) -> Route {
        Self::from_path(path).unwrap_or(Self::LANDING)
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

// "#/employees/?x=1" -> "/employees"
fn normalise(path: &str) -> &str {
    let path = path.trim();
    let path = path.strip_prefix('#').unwrap_or(path);
    let path = path.split(['?', '#']).next().unwrap_or("");
    let path = path.trim_end_matches('/');
    if path.is_empty() {
        "/"
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }

    #[test]
    fn unknown_paths_land_on_dashboard() {
        assert_eq!(Route::resolve("/does-not-exist"), Route::Dashboard);
        assert_eq!(Route::resolve(""), Route::Dashboard);
        assert_eq!(Route::resolve("#/employees/"), Route::Employees);
        assert_eq!(Route::resolve("/leaves?tab=todo"), Route::Leaves);
    }

    #[test]
    fn system_pages_are_admin_only() {
        assert!(!Route::Roles.roles().permits("user"));
        assert!(Route::Roles.roles().permits("admin"));
        assert!(Route::Attendance.roles().permits("user"));
        assert!(!Route::Login.is_guarded());
    }
}
