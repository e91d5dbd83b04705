//! Core types and accessors for FormStore.

use std::collections::BTreeSet;

use regform_common::{Event, EventBus, FormPhase};

use crate::field::{FieldDefinition, FieldId, REGISTRATION_SCHEMA};
use crate::validation::{ErrorMap, FieldError};
use crate::values::FormValues;

/// Owns the state of one registration form instance.
pub struct FormStore {
    /// Static field definitions validated on every recompute.
    pub(super) schema: &'static [FieldDefinition],
    /// Values restored on reset.
    pub(super) initial: FormValues,
    pub(super) values: FormValues,
    /// Fields the user has changed, left, or that a submit attempt covered.
    pub(super) touched: BTreeSet<FieldId>,
    /// Last recomputed validation result. Empty after mount and reset.
    pub(super) errors: ErrorMap,
    pub(super) phase: FormPhase,
    /// Submit attempts since mount; survives the post-submit reset.
    pub(super) submit_count: u32,
    /// Observers notified after each recompute.
    pub(super) events: Option<EventBus>,
}

/// What a renderer needs to draw one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldProps<'a> {
    pub name: &'static str,
    pub value: &'a str,
    /// Show the field in its error state.
    pub error: bool,
    /// Message to show under the field, if any.
    pub helper_text: Option<&'a str>,
}

impl FormStore {
    pub fn new() -> Self {
        Self {
            schema: &REGISTRATION_SCHEMA,
            initial: FormValues::default(),
            values: FormValues::default(),
            touched: BTreeSet::new(),
            errors: ErrorMap::new(),
            phase: FormPhase::Clean,
            submit_count: 0,
            events: None,
        }
    }

    /// Create a store that publishes every state change on `events`.
    pub fn with_events(events: EventBus) -> Self {
        let mut store = Self::new();
        store.events = Some(events);
        store
    }

    // -- Accessors --

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn value(&self, id: FieldId) -> &str {
        self.values.get(id)
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn error(&self, id: FieldId) -> Option<&FieldError> {
        self.errors.get(&id)
    }

    pub fn touched(&self) -> &BTreeSet<FieldId> {
        &self.touched
    }

    pub fn is_touched(&self, id: FieldId) -> bool {
        self.touched.contains(&id)
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn submit_count(&self) -> u32 {
        self.submit_count
    }

    /// `true` when any value differs from the initial values.
    pub fn is_dirty(&self) -> bool {
        self.values != self.initial
    }

    /// `true` when the last recompute found no errors.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error shown to the user: present only once the field is touched.
    pub fn visible_error(&self, id: FieldId) -> Option<&FieldError> {
        if self.is_touched(id) {
            self.error(id)
        } else {
            None
        }
    }

    pub fn field_props(&self, id: FieldId) -> FieldProps<'_> {
        let visible = self.visible_error(id);
        FieldProps {
            name: id.name(),
            value: self.value(id),
            error: visible.is_some(),
            helper_text: visible.map(|e| e.message.as_str()),
        }
    }

    pub(super) fn notify(&self, event: Event) {
        if let Some(bus) = &self.events {
            bus.publish(event);
        }
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}
