//! The one place the credential token and the signed-in user are written,
//! read back, and cleared.
//!
//! Both the session context (login, logout, start-up restore) and the request
//! wrapper (401 handling) go through [`SessionStore`], so the persisted pair
//! and the in-memory status can never drift apart.

use std::sync::Arc;

use backoffice_shared::constants::{STORAGE_KEY_TOKEN, STORAGE_KEY_USER};
use backoffice_shared::User;
use backoffice_store::{KeyValueStore, StoreError};
use tokio::sync::watch;
use tracing::{debug, warn};

/// Observable session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStatus {
    pub user: Option<User>,
    /// `true` until persisted state has been read once.
    pub is_loading: bool,
}

impl SessionStatus {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }
}

impl Default for SessionStatus {
    fn default() -> Self {
        Self {
            user: None,
            is_loading: true,
        }
    }
}

pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    status: watch::Sender<SessionStatus>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        let (status, _) = watch::channel(SessionStatus::default());
        Self { storage, status }
    }

    pub fn status(&self) -> SessionStatus {
        self.status.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionStatus> {
        self.status.subscribe()
    }

    pub fn user(&self) -> Option<User> {
        self.status.borrow().user.clone()
    }

    /// Token to attach to outgoing requests, read from persisted state.
    pub fn token(&self) -> Option<String> {
        match self.storage.get_item(STORAGE_KEY_TOKEN) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                warn!(error = %e, "failed to read session token");
                None
            }
        }
    }

    /// Load the persisted pair and publish the result, ending the loading
    /// phase whatever the outcome.
    ///
    /// A token without a user, a user without a token, or a user that does
    /// not parse all count as "no session": both entries are removed.
    pub fn restore(&self) -> Option<User> {
        let user = self.read_persisted();
        if user.is_none() {
            self.remove_persisted();
        }

        self.status.send_replace(SessionStatus {
            user: user.clone(),
            is_loading: false,
        });
        user
    }

    /// Persist the pair, then publish the user. On a storage failure nothing
    /// is published and any half-written entry is removed.
    pub fn save(&self, token: &str, user: &User) -> Result<(), StoreError> {
        if let Err(e) = self.write_persisted(token, user) {
            self.remove_persisted();
            return Err(e);
        }

        let user = user.clone();
        self.status.send_modify(|status| status.user = Some(user));
        Ok(())
    }

    /// Remove the pair from storage and sign the user out in memory.
    pub fn clear(&self) {
        self.remove_persisted();
        self.status.send_modify(|status| status.user = None);
    }

    fn read_persisted(&self) -> Option<User> {
        let token = self.storage.get_item(STORAGE_KEY_TOKEN);
        let raw_user = self.storage.get_item(STORAGE_KEY_USER);

        let (token, raw_user) = match (token, raw_user) {
            (Ok(Some(token)), Ok(Some(raw_user))) if !token.is_empty() => (token, raw_user),
            (Err(e), _) | (_, Err(e)) => {
                warn!(error = %e, "failed to read persisted session");
                return None;
            }
            _ => {
                debug!("no persisted session");
                return None;
            }
        };

        match serde_json::from_str::<User>(&raw_user) {
            Ok(user) => {
                debug!(user_id = user.id, token_len = token.len(), "restored persisted session");
                Some(user)
            }
            Err(e) => {
                warn!(error = %e, "failed to parse user data, discarding session");
                None
            }
        }
    }

    fn write_persisted(&self, token: &str, user: &User) -> Result<(), StoreError> {
        let raw_user = serde_json::to_string(user)
            .map_err(|e| StoreError::Encoding(e.to_string()))?;
        self.storage.set_item(STORAGE_KEY_TOKEN, token)?;
        self.storage.set_item(STORAGE_KEY_USER, &raw_user)?;
        Ok(())
    }

    fn remove_persisted(&self) {
        for key in [STORAGE_KEY_TOKEN, STORAGE_KEY_USER] {
            if let Err(e) = self.storage.remove_item(key) {
                warn!(key, error = %e, "failed to remove persisted session entry");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use backoffice_store::MemoryStore;

    use super::*;

    fn alice() -> User {
        User {
            id: 7,
            username: "alice".into(),
            role: "admin".into(),
            avatar: None,
        }
    }

    fn store_with(pairs: &[(&str, &str)]) -> (Arc<MemoryStore>, SessionStore) {
        let storage = Arc::new(MemoryStore::new());
        for (k, v) in pairs {
            storage.set_item(k, v).unwrap();
        }
        let store = SessionStore::new(storage.clone());
        (storage, store)
    }

    #[test]
    fn restore_valid_pair() {
        let raw = serde_json::to_string(&alice()).unwrap();
        let (_, store) = store_with(&[("token", "t-1"), ("user", &raw)]);

        assert!(store.status().is_loading);
        assert_eq!(store.restore(), Some(alice()));
        assert_eq!(
            store.status(),
            SessionStatus {
                user: Some(alice()),
                is_loading: false
            }
        );
        assert_eq!(store.token().as_deref(), Some("t-1"));
    }

    #[test]
    fn restore_discards_corrupted_user() {
        let (storage, store) = store_with(&[("token", "t-1"), ("user", "{not json")]);

        assert_eq!(store.restore(), None);
        assert!(!store.status().is_loading);
        assert_eq!(storage.get_item("token").unwrap(), None);
        assert_eq!(storage.get_item("user").unwrap(), None);
    }

    #[test]
    fn restore_discards_half_pair() {
        let (storage, store) = store_with(&[("token", "orphan")]);
        assert_eq!(store.restore(), None);
        assert!(storage.is_empty());

        let raw = serde_json::to_string(&alice()).unwrap();
        let (storage, store) = store_with(&[("user", &raw)]);
        assert_eq!(store.restore(), None);
        assert!(storage.is_empty());
    }

    #[test]
    fn save_then_clear() {
        let (storage, store) = store_with(&[]);
        let mut rx = store.subscribe();

        store.save("t-2", &alice()).unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().user, Some(alice()));
        assert_eq!(storage.get_item("token").unwrap().as_deref(), Some("t-2"));

        store.clear();
        assert_eq!(store.user(), None);
        assert_eq!(store.token(), None);
        assert!(storage.is_empty());
    }
}
