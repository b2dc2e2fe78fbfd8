//! # backoffice-client
//!
//! Core of the back-office client: session handling, the authenticated
//! request wrapper, mock and live domain services, route guarding and the
//! UI string catalog. Rendering is left to whatever front end embeds it.
//!
//! [`Backoffice`] wires the pieces together from a [`ClientConfig`].

pub mod config;
pub mod dashboard;
pub mod error;
pub mod guard;
pub mod http;
pub mod i18n;
pub mod labels;
pub mod nav;
pub mod navigation;
pub mod repo;
pub mod routes;
pub mod screen;
pub mod session;

use std::sync::Arc;

use backoffice_store::{Database, KeyValueStore};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

pub use crate::config::{ClientConfig, DataSource};
pub use crate::error::{ApiError, ClientError, LoginError, Result};

use crate::dashboard::Dashboard;
use crate::guard::RouteGuard;
use crate::http::ApiClient;
use crate::i18n::LanguagePreference;
use crate::nav::MenuGroup;
use crate::navigation::HistoryNavigator;
use crate::repo::Services;
use crate::session::{SessionContext, SessionStore};

/// Install the global `tracing` subscriber. `RUST_LOG` overrides the
/// default filter. Calling it twice is harmless.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("backoffice_client=debug,backoffice_store=info,warn"));

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}

/// A fully wired client.
pub struct Backoffice {
    config: ClientConfig,
    navigator: Arc<HistoryNavigator>,
    services: Services,
    session: Arc<SessionContext>,
    language: LanguagePreference,
}

impl Backoffice {
    /// Open the persisted client state (the configured data directory, or
    /// the platform default) and build the client on top of it.
    pub fn open(config: ClientConfig) -> Result<Self> {
        let db = match &config.data_dir {
            Some(dir) => Database::open_in(dir)?,
            None => Database::new()?,
        };
        if let Some(path) = db.path() {
            info!(path = %path.display(), "client state opened");
        }
        Self::with_storage(config, Arc::new(db))
    }

    /// Build the client over an explicit storage backend and restore any
    /// persisted session.
    pub fn with_storage(config: ClientConfig, storage: Arc<dyn KeyValueStore>) -> Result<Self> {
        let navigator = Arc::new(HistoryNavigator::default());
        let store = Arc::new(SessionStore::new(storage.clone()));

        let services = match config.data_source {
            DataSource::Mock => Services::mock(config.mock_latency),
            DataSource::Live => {
                let api = ApiClient::new(
                    config.api_base_url.clone(),
                    config.request_timeout,
                    store.clone(),
                    navigator.clone(),
                )?;
                Services::live(Arc::new(api))
            }
        };
        info!(source = ?config.data_source, base_url = %config.api_base_url, "services ready");

        let session = Arc::new(SessionContext::new(
            store,
            services.auth.clone(),
            navigator.clone(),
        ));
        session.initialize();

        Ok(Self {
            config,
            navigator,
            services,
            session,
            language: LanguagePreference::load(storage),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &Arc<SessionContext> {
        &self.session
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    pub fn navigator(&self) -> &Arc<HistoryNavigator> {
        &self.navigator
    }

    pub fn language(&self) -> &LanguagePreference {
        &self.language
    }

    pub fn guard(&self) -> RouteGuard {
        RouteGuard::new(self.session.subscribe())
    }

    pub fn menu(&self) -> Vec<MenuGroup> {
        nav::menu(&self.session, &self.language.translator())
    }

    pub async fn dashboard(&self) -> Dashboard {
        Dashboard::load(&self.services).await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use backoffice_shared::LoginRequest;
    use backoffice_store::MemoryStore;

    use super::*;
    use crate::guard::Access;
    use crate::routes::Route;

    fn mock_config() -> ClientConfig {
        ClientConfig {
            mock_latency: Duration::ZERO,
            ..ClientConfig::default()
        }
    }

    #[tokio::test]
    async fn session_survives_restart() {
        let storage = Arc::new(MemoryStore::new());

        let app = Backoffice::with_storage(mock_config(), storage.clone()).unwrap();
        assert_eq!(app.guard().decide("/roles"), Access::RedirectToLogin { from: "/roles".into() });
        app.session().login(&LoginRequest::new("admin", "pw")).await.unwrap();
        assert_eq!(app.guard().decide("/roles"), Access::Render(Route::Roles));

        let restarted = Backoffice::with_storage(mock_config(), storage).unwrap();
        assert!(restarted.session().is_authenticated());
        assert_eq!(restarted.menu().len(), 3);
    }

    #[tokio::test]
    async fn logout_redirects_to_login() {
        let app = Backoffice::with_storage(mock_config(), Arc::new(MemoryStore::new())).unwrap();
        app.session().login(&LoginRequest::new("user", "pw")).await.unwrap();
        app.session().logout();
        assert_eq!(app.navigator().current(), Route::Login);
        assert!(app.menu().is_empty());
    }

    #[test]
    fn opens_database_in_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = ClientConfig {
            data_dir: Some(dir.path().to_path_buf()),
            ..mock_config()
        };
        let app = Backoffice::open(config).unwrap();
        assert!(!app.session().is_loading());
        assert!(dir.path().join("backoffice.db").exists());
    }
}
