//! Access control in front of every page.

use tokio::sync::watch;
use tracing::debug;

use crate::routes::Route;
use crate::session::SessionStatus;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardState {
    /// Persisted session not read yet.
    Loading,
    Authenticated,
    Unauthenticated,
}

impl GuardState {
    fn of(status: &SessionStatus) -> Self {
        if status.is_loading {
            Self::Loading
        } else if status.is_authenticated() {
            Self::Authenticated
        } else {
            Self::Unauthenticated
        }
    }
}

/// What to do with a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Access {
    /// Show the neutral loading view.
    Wait,
    Render(Route),
    /// `from` is the attempted location, kept for after sign-in.
    RedirectToLogin { from: String },
    /// Unknown page, or a page the user's role may not open.
    RedirectToLanding,
}

pub struct RouteGuard {
    session: watch::Receiver<SessionStatus>,
}

impl RouteGuard {
    pub fn new(session: watch::Receiver<SessionStatus>) -> Self {
        Self { session }
    }

    pub fn state(&self) -> GuardState {
        GuardState::of(&self.session.borrow())
    }

    /// Wait until the session has left the loading state.
    pub async fn ready(&mut self) -> GuardState {
        let ready = self
            .session
            .wait_for(|s| !s.is_loading)
            .await
            .map(|status| GuardState::of(&status));
        // Sender gone: nothing will change any more.
        ready.unwrap_or_else(|_| self.state())
    }

    pub fn decide(&self, path: &str) -> Access {
        let status = self.session.borrow();

        let Some(route) = Route::from_path(path) else {
            return match GuardState::of(&status) {
                GuardState::Loading => Access::Wait,
                GuardState::Unauthenticated => Access::RedirectToLogin {
                    from: path.to_string(),
                },
                GuardState::Authenticated => Access::RedirectToLanding,
            };
        };

        if !route.is_guarded() {
            return Access::Render(route);
        }

        let access = match (GuardState::of(&status), &status.user) {
            (GuardState::Loading, _) => Access::Wait,
            (GuardState::Authenticated, Some(user)) => {
                if route.roles().permits(&user.role) {
                    Access::Render(route)
                } else {
                    Access::RedirectToLanding
                }
            }
            _ => Access::RedirectToLogin {
                from: route.path().to_string(),
            },
        };
        debug!(path, ?access, "route decision");
        access
    }
}

#[cfg(test)]
mod tests {
    use backoffice_shared::User;

    use super::*;

    fn user(role: &str) -> User {
        User {
            id: 1,
            username: "u".into(),
            role: role.into(),
            avatar: None,
        }
    }

    fn status(user: Option<User>, is_loading: bool) -> SessionStatus {
        SessionStatus { user, is_loading }
    }

    #[test]
    fn waits_while_loading() {
        let (_tx, rx) = watch::channel(SessionStatus::default());
        let guard = RouteGuard::new(rx);
        assert_eq!(guard.state(), GuardState::Loading);
        assert_eq!(guard.decide("/employees"), Access::Wait);
        assert_eq!(guard.decide("/login"), Access::Render(Route::Login));
    }

    #[test]
    fn unauthenticated_goes_to_login_with_origin() {
        let (_tx, rx) = watch::channel(status(None, false));
        let guard = RouteGuard::new(rx);
        assert_eq!(guard.state(), GuardState::Unauthenticated);
        assert_eq!(
            guard.decide("/contracts"),
            Access::RedirectToLogin {
                from: "/contracts".into()
            }
        );
    }

    #[test]
    fn role_gate() {
        let (tx, rx) = watch::channel(status(Some(user("user")), false));
        let guard = RouteGuard::new(rx);
        assert_eq!(guard.decide("/leaves"), Access::Render(Route::Leaves));
        assert_eq!(guard.decide("/roles"), Access::RedirectToLanding);
        assert_eq!(guard.decide("/nope"), Access::RedirectToLanding);

        tx.send_replace(status(Some(user("admin")), false));
        assert_eq!(guard.decide("/roles"), Access::Render(Route::Roles));

        tx.send_replace(status(Some(user("")), false));
        assert_eq!(guard.decide("/roles"), Access::RedirectToLanding);
        assert_eq!(guard.decide("/"), Access::Render(Route::Dashboard));
    }

    #[tokio::test]
    async fn ready_follows_restore() {
        let (tx, rx) = watch::channel(SessionStatus::default());
        let mut guard = RouteGuard::new(rx);

        let waiter = tokio::spawn(async move { guard.ready().await });
        tx.send_replace(status(Some(user("admin")), false));
        assert_eq!(waiter.await.unwrap(), GuardState::Authenticated);
    }
}
