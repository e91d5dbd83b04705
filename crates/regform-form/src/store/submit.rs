//! The submission collaborator boundary.

use crate::values::FormValues;

/// Receives the values of a form that passed validation.
///
/// Called exactly once per successful submit. Whatever happens next
/// (network, persistence, acknowledgment) is the collaborator's business.
pub trait Submitter {
    fn submit(&mut self, values: &FormValues);
}

impl<F> Submitter for F
where
    F: FnMut(&FormValues),
{
    fn submit(&mut self, values: &FormValues) {
        self(values)
    }
}

/// Result of a submit attempt. A rejection is a normal outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Values were handed to the collaborator and the form was reset.
    Submitted,
    /// Validation failed; the collaborator was not called.
    Rejected { error_count: usize },
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }
}
