//! The storage contract the session store and language preference build on.

use crate::error::Result;

/// String-keyed, string-valued durable storage.
///
/// Mirrors the browser `localStorage` surface: reads of a missing key yield
/// `None`, removing a missing key is not an error.
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    fn remove_item(&self, key: &str) -> Result<()>;
}
