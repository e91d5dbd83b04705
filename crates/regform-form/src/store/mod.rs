//! The FormStore holds values, touched fields, and the derived error map,
//! and drives the Clean → Editing → SubmitAttempted lifecycle.

mod operations;
mod submit;
mod types;


pub use submit::{SubmitOutcome, Submitter};
pub use types::*;
