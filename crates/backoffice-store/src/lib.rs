//! # backoffice-store
//!
//! Persisted client state for the back-office client: the durable
//! equivalent of browser local storage.
//!
//! The crate exposes the [`KeyValueStore`] trait plus two implementations:
//! [`Database`], a SQLite file in the platform data directory, and
//! [`MemoryStore`], a process-local map for tests and throw-away sessions.

pub mod database;
pub mod kv;
pub mod memory;
pub mod migrations;

mod error;

pub use database::Database;
pub use error::StoreError;
pub use kv::KeyValueStore;
pub use memory::MemoryStore;
