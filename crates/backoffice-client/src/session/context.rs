use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use backoffice_shared::constants::ROLE_WILDCARD;
use backoffice_shared::{LoginRequest, RoleSet, User};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::store::{SessionStatus, SessionStore};
use crate::error::{ApiError, LoginError};
use crate::navigation::Navigator;
use crate::repo::AuthRepository;
use crate::routes::Route;

const LOGIN_FAILED: &str = "Login failed";

/// What the header shows for the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayIdentity {
    pub name: String,
    pub role: String,
    pub avatar: Avatar,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Avatar {
    Image(String),
    Initial(char),
}

/// Authentication state of the running client.
///
/// Reads go to the [`SessionStore`]; this type adds the login/logout flows
/// and the role checks on top of it.
pub struct SessionContext {
    store: Arc<SessionStore>,
    auth: Arc<dyn AuthRepository>,
    navigator: Arc<dyn Navigator>,
    initialized: AtomicBool,
}

impl SessionContext {
    pub fn new(
        store: Arc<SessionStore>,
        auth: Arc<dyn AuthRepository>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            store,
            auth,
            navigator,
            initialized: AtomicBool::new(false),
        }
    }

    /// Restore a persisted session. Only the first call does anything.
    pub fn initialize(&self) {
        if self.initialized.swap(true, Ordering::SeqCst) {
            debug!("session already initialized");
            return;
        }
        match self.store.restore() {
            Some(user) => info!(username = %user.username, "session restored"),
            None => debug!("starting signed out"),
        }
    }

    pub async fn login(&self, credentials: &LoginRequest) -> Result<User, LoginError> {
        let response = match self.auth.login(credentials).await {
            Ok(response) => response,
            Err(ApiError::Unauthorized) => {
                return Err(LoginError::Rejected(LOGIN_FAILED.to_string()));
            }
            Err(e) => {
                warn!(error = %e, "login request failed");
                return Err(LoginError::Network);
            }
        };

        if !response.is_success() {
            let msg = if response.msg.is_empty() {
                LOGIN_FAILED.to_string()
            } else {
                response.msg
            };
            debug!(code = response.code, %msg, "login rejected");
            return Err(LoginError::Rejected(msg));
        }

        let Some(payload) = response.data else {
            warn!("login succeeded without a payload");
            return Err(LoginError::Rejected(LOGIN_FAILED.to_string()));
        };

        self.store
            .save(&payload.token, &payload.user)
            .map_err(|e| LoginError::Storage(e.to_string()))?;
        info!(username = %payload.user.username, role = %payload.user.role, "signed in");
        Ok(payload.user)
    }

    /// Sign out locally right away. The backend is told in the background
    /// with the token captured before the clear; its answer is ignored.
    ///
    /// The returned handle lets short-lived callers wait for the request.
    pub fn logout(&self) -> Option<JoinHandle<()>> {
        let token = self.store.token();
        let request = match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                let auth = self.auth.clone();
                Some(handle.spawn(async move {
                    if let Err(e) = auth.logout(token.as_deref()).await {
                        debug!(error = %e, "logout request failed");
                    }
                }))
            }
            Err(_) => {
                debug!("no runtime, skipping logout request");
                None
            }
        };

        self.store.clear();
        self.navigator.navigate(Route::Login);
        info!("signed out");
        request
    }

    /// Flat role check. `"*"` in `allowed` admits any signed-in user.
    pub fn has_role(&self, allowed: &[&str]) -> bool {
        let Some(user) = self.user() else {
            return false;
        };
        if allowed.contains(&ROLE_WILDCARD) {
            return true;
        }
        !user.role.is_empty() && allowed.contains(&user.role.as_str())
    }

    pub fn permits(&self, roles: RoleSet) -> bool {
        match self.user() {
            Some(user) => match roles {
                RoleSet::Any => true,
                RoleSet::OneOf(_) => !user.role.is_empty() && roles.permits(&user.role),
            },
            None => false,
        }
    }

    pub fn user(&self) -> Option<User> {
        self.store.user()
    }

    pub fn is_authenticated(&self) -> bool {
        self.store.status().is_authenticated()
    }

    pub fn is_loading(&self) -> bool {
        self.store.status().is_loading
    }

    pub fn status(&self) -> SessionStatus {
        self.store.status()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionStatus> {
        self.store.subscribe()
    }

    pub fn display_identity(&self) -> DisplayIdentity {
        let user = self.user();
        let name = user
            .as_ref()
            .map(|u| u.username.clone())
            .filter(|n| !n.is_empty());

        let avatar = match user.as_ref().and_then(|u| u.avatar.clone()) {
            Some(url) if !url.is_empty() => Avatar::Image(url),
            _ => Avatar::Initial(
                name.as_deref()
                    .and_then(|n| n.chars().next())
                    .map(|c| c.to_uppercase().next().unwrap_or(c))
                    .unwrap_or('U'),
            ),
        };

        DisplayIdentity {
            name: name.unwrap_or_else(|| "User".to_string()),
            role: user
                .map(|u| u.role)
                .filter(|r| !r.is_empty())
                .unwrap_or_else(|| "Guest".to_string()),
            avatar,
        }
    }
}
