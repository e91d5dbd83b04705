//! The driver's submission collaborator: logs accepted values as JSON.

use regform_common::new_correlation_id;
use regform_form::{FormValues, Submitter};
use tracing::{info, warn};

#[derive(Debug, Default)]
pub(super) struct SubmissionLog {
    accepted: Vec<FormValues>,
}

impl SubmissionLog {
    pub(super) fn len(&self) -> usize {
        self.accepted.len()
    }

    pub(super) fn last(&self) -> Option<&FormValues> {
        self.accepted.last()
    }
}

impl Submitter for SubmissionLog {
    fn submit(&mut self, values: &FormValues) {
        let submission = new_correlation_id();
        match serde_json::to_string(values) {
            Ok(json) => info!(%submission, values = %json, "form submitted"),
            Err(e) => warn!(%submission, "failed to serialize submitted values: {e}"),
        }
        self.accepted.push(values.clone());
    }
}
