use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use backoffice_shared::constants::{ROLE_ADMIN, ROLE_USER};
use backoffice_shared::{ApiResponse, LoginPayload, LoginRequest, User};
use serde_json::Value;
use tracing::debug;

use super::RepoResult;
use crate::http::{ApiClient, RequestOptions};

#[async_trait]
pub trait AuthRepository: Send + Sync {
    async fn login(&self, credentials: &LoginRequest) -> RepoResult<LoginPayload>;
    /// End the session identified by `token`. The token is passed in because
    /// the local session is usually gone by the time the call goes out.
    async fn logout(&self, token: Option<&str>) -> RepoResult<Value>;
}

/// Accepts any credentials. The username picks the role: `user` signs in as
/// a regular user, anything else as an administrator.
pub struct MockAuthRepository {
    latency: Duration,
}

impl MockAuthRepository {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    fn payload_for(username: &str) -> LoginPayload {
        let username = if username.is_empty() { "admin" } else { username };
        let user = if username == ROLE_USER {
            User {
                id: 99,
                username: username.to_string(),
                role: ROLE_USER.to_string(),
                avatar: Some("https://i.pravatar.cc/150?u=user".to_string()),
            }
        } else {
            User {
                id: 1,
                username: username.to_string(),
                role: ROLE_ADMIN.to_string(),
                avatar: None,
            }
        };

        LoginPayload {
            token: format!("mock-token-{}-123", user.role),
            user,
        }
    }
}

#[async_trait]
impl AuthRepository for MockAuthRepository {
    async fn login(&self, credentials: &LoginRequest) -> RepoResult<LoginPayload> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let payload = Self::payload_for(credentials.username.as_deref().unwrap_or_default());
        debug!(username = %payload.user.username, role = %payload.user.role, "mock login");
        Ok(ApiResponse::success(payload))
    }

    async fn logout(&self, _token: Option<&str>) -> RepoResult<Value> {
        Ok(ApiResponse::ok())
    }
}

pub struct LiveAuthRepository {
    api: Arc<ApiClient>,
}

impl LiveAuthRepository {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait]
impl AuthRepository for LiveAuthRepository {
    async fn login(&self, credentials: &LoginRequest) -> RepoResult<LoginPayload> {
        self.api
            .request("/auth/login", RequestOptions::post().json(credentials)?)
            .await
    }

    async fn logout(&self, token: Option<&str>) -> RepoResult<Value> {
        let mut options = RequestOptions::post();
        if let Some(token) = token {
            options = options.header("authorization", format!("Bearer {token}"));
        }
        self.api.request("/auth/logout", options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_login_picks_role_from_username() {
        let repo = MockAuthRepository::new(Duration::ZERO);

        let user = repo
            .login(&LoginRequest::new("user", "x"))
            .await
            .unwrap()
            .into_data()
            .unwrap();
        assert_eq!(user.token, "mock-token-user-123");
        assert_eq!(user.user.id, 99);
        assert!(user.user.avatar.is_some());

        let admin = repo
            .login(&LoginRequest::new("carol", "x"))
            .await
            .unwrap()
            .into_data()
            .unwrap();
        assert_eq!(admin.token, "mock-token-admin-123");
        assert_eq!(admin.user.username, "carol");
        assert_eq!(admin.user.role, "admin");
    }

    #[tokio::test]
    async fn mock_login_without_username_is_admin() {
        let repo = MockAuthRepository::new(Duration::ZERO);
        let payload = repo
            .login(&LoginRequest::default())
            .await
            .unwrap()
            .into_data()
            .unwrap();
        assert_eq!(payload.user.username, "admin");
        assert_eq!(payload.user.id, 1);
    }
}
