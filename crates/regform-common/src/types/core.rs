use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a form instance.
///
/// `Clean` after mount, reset, or a successful submit; `Editing` once a
/// value has been set; `SubmitAttempted` after a submit that was rejected.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    #[default]
    Clean,
    Editing,
    SubmitAttempted,
}

/// The two independent image preview slots of the registration form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSlot {
    Profile,
    Cover,
}

impl fmt::Display for ImageSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSlot::Profile => write!(f, "profile"),
            ImageSlot::Cover => write!(f, "cover"),
        }
    }
}
