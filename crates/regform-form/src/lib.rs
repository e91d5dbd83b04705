//! Registration form core.
//!
//! A static field schema, a pure validation engine over it, a form state
//! store that recomputes errors after every mutation, and two independent
//! image preview pipelines (profile and cover). The cover pipeline
//! publishes its current image through an explicit watch cell instead of
//! ambient global state.

pub mod field;
pub mod preview;
pub mod store;
pub mod validation;
pub mod values;

pub use field::{FieldDefinition, FieldId, FieldKind, Pattern, REGISTRATION_SCHEMA};
pub use preview::{
    cover_background, CoverPublisher, CoverWatcher, ImageHandle, ImagePreview, SelectedFile,
    COVER_IMAGE_PROPERTY,
};
pub use store::{FieldProps, FormStore, SubmitOutcome, Submitter};
pub use validation::{validate, validate_field, ErrorKind, ErrorMap, FieldError};
pub use values::FormValues;
