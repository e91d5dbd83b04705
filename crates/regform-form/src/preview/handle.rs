use serde::Serialize;
use std::path::{Path, PathBuf};

use regform_common::HandleId;

/// A file handed over by the file picker. Type and size are not checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub path: PathBuf,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }

    /// Use the last path component as the display name.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self { name, path }
    }
}

/// Opaque reference to a locally previewable image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageHandle {
    id: HandleId,
    url: String,
    file_name: String,
    source: PathBuf,
}

impl ImageHandle {
    pub(crate) fn for_file(file: SelectedFile) -> Self {
        let id = HandleId::new();
        Self {
            url: format!("blob:regform/{id}"),
            id,
            file_name: file.name,
            source: file.path,
        }
    }

    pub fn id(&self) -> &HandleId {
        &self.id
    }

    /// URL-like reference a renderer can use as an image source.
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// CSS value for a background image property.
    pub fn css_value(&self) -> String {
        format!("url({})", self.url)
    }
}
