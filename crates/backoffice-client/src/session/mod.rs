//! Who is signed in, and how that is persisted.

mod context;
mod store;

pub use context::{Avatar, DisplayIdentity, SessionContext};
pub use store::{SessionStatus, SessionStore};
