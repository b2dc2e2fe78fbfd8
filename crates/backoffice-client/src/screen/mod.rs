//! View state of the list and edit screens, independent of any renderer.

mod form;
mod list;

pub use form::{DraftTarget, FormState};
pub use list::{ListState, RequestSequencer, Ticket};
