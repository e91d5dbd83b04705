//! Form behaviour configuration.

use serde::{Deserialize, Serialize};

/// Form behaviour configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct FormConfig {
    /// Also clear the profile and cover previews when the form is reset.
    pub reset_clears_images: bool,
}
