//! Sidebar menu.

use crate::i18n::Translator;
use crate::routes::Route;
use crate::session::SessionContext;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub route: Route,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuGroup {
    pub title: String,
    pub items: Vec<MenuItem>,
}

const GROUPS: &[(&str, &[Route])] = &[
    (
        "workspace",
        &[
            Route::Dashboard,
            Route::Attendance,
            Route::Leaves,
            Route::Meetings,
            Route::Notices,
        ],
    ),
    ("assets", &[Route::Contracts, Route::Equipment]),
    (
        "system",
        &[Route::Employees, Route::Departments, Route::Roles],
    ),
];

/// Menu groups the signed-in user may open. Groups left empty are dropped.
pub fn menu(session: &SessionContext, translator: &Translator) -> Vec<MenuGroup> {
    GROUPS
        .iter()
        .filter_map(|(title_key, routes)| {
            let items: Vec<_> = routes
                .iter()
                .filter(|route| session.permits(route.roles()))
                .map(|&route| MenuItem {
                    route,
                    title: translator.t(route.title_key()).to_string(),
                })
                .collect();
            (!items.is_empty()).then(|| MenuGroup {
                title: translator.t(title_key).to_string(),
                items,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use backoffice_shared::LoginRequest;
    use backoffice_store::MemoryStore;

    use super::*;
    use crate::i18n::Language;
    use crate::navigation::HistoryNavigator;
    use crate::repo::MockAuthRepository;
    use crate::session::SessionStore;

    fn session() -> SessionContext {
        SessionContext::new(
            Arc::new(SessionStore::new(Arc::new(MemoryStore::new()))),
            Arc::new(MockAuthRepository::new(Duration::ZERO)),
            Arc::new(HistoryNavigator::default()),
        )
    }

    #[tokio::test]
    async fn regular_user_sees_no_system_group() {
        let session = session();
        session.login(&LoginRequest::new("user", "x")).await.unwrap();

        let groups = menu(&session, &Translator::new(Language::En));
        let titles: Vec<_> = groups.iter().map(|g| g.title.as_str()).collect();
        assert_eq!(titles, ["Workspace", "Assets"]);
        assert_eq!(groups[0].items[0].title, "Dashboard");
    }

    #[tokio::test]
    async fn admin_sees_everything() {
        let session = session();
        session.login(&LoginRequest::new("admin", "x")).await.unwrap();

        let groups = menu(&session, &Translator::new(Language::Zh));
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[2].title, "系统管理");
        let count: usize = groups.iter().map(|g| g.items.len()).sum();
        assert_eq!(count, 10);
    }

    #[test]
    fn signed_out_menu_is_empty() {
        assert!(menu(&session(), &Translator::new(Language::En)).is_empty());
    }
}
