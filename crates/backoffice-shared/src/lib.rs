//! # backoffice-shared
//!
//! Types shared by every back-office crate: the result envelope returned by
//! all endpoints, the signed-in user, pagination queries, and the domain
//! records exchanged with the REST API.

pub mod constants;
pub mod error;
pub mod models;
pub mod types;

pub use error::EnvelopeError;
pub use models::*;
pub use types::*;
