//! Mutations on the FormStore. Every mutation ends with a recompute of the
//! error map followed by an observer notification.

use regform_common::{Event, FormPhase};
use tracing::{debug, info};

use crate::field::FieldId;
use crate::validation::validate_with;

use super::submit::{SubmitOutcome, Submitter};
use super::FormStore;

impl FormStore {
    /// Update a field's value, mark it touched, and revalidate.
    pub fn set_field(&mut self, id: FieldId, value: impl Into<String>) {
        self.values.set(id, value.into());
        self.touched.insert(id);
        self.recompute();
        self.enter_phase(FormPhase::Editing);

        debug!(field = id.name(), errors = self.errors.len(), "field changed");
        self.notify(Event::FieldChanged {
            field: id.name().to_string(),
            error_count: self.errors.len(),
        });
    }

    /// Mark a field touched without changing its value.
    pub fn blur_field(&mut self, id: FieldId) {
        self.touched.insert(id);
        self.recompute();

        self.notify(Event::FieldBlurred {
            field: id.name().to_string(),
        });
    }

    /// Touch every field and revalidate. Valid values go to `submitter`
    /// exactly once, after which the form resets; otherwise the form stays
    /// in `SubmitAttempted` with its errors visible.
    pub fn submit<S>(&mut self, submitter: &mut S) -> SubmitOutcome
    where
        S: Submitter + ?Sized,
    {
        self.submit_count += 1;
        self.touched.extend(self.schema.iter().map(|def| def.id));
        self.recompute();

        if !self.errors.is_empty() {
            let error_count = self.errors.len();
            info!(error_count, attempt = self.submit_count, "submit rejected");
            self.enter_phase(FormPhase::SubmitAttempted);
            self.notify(Event::SubmitRejected { error_count });
            return SubmitOutcome::Rejected { error_count };
        }

        submitter.submit(&self.values);
        info!(attempt = self.submit_count, "form submitted");
        self.notify(Event::FormSubmitted);
        self.reset();
        SubmitOutcome::Submitted
    }

    /// Restore initial values and clear touched fields and errors.
    /// Image previews are owned elsewhere and are not affected.
    pub fn reset(&mut self) {
        self.values = self.initial.clone();
        self.touched.clear();
        self.errors.clear();
        self.enter_phase(FormPhase::Clean);

        debug!("form reset");
        self.notify(Event::FormReset);
    }

    fn recompute(&mut self) {
        self.errors = validate_with(self.schema, &self.values);
    }

    fn enter_phase(&mut self, phase: FormPhase) {
        if self.phase != phase {
            self.phase = phase;
            self.notify(Event::PhaseChanged(phase));
        }
    }
}
