//! Image preview pipelines.
//!
//! Each [`ImagePreview`] owns the handle for one slot and replaces it on
//! every selection. The cover pipeline additionally owns the single
//! [`CoverPublisher`], so banner renderers can follow the current cover
//! through cloned [`CoverWatcher`]s without touching the pipeline.

mod cover;
mod handle;
mod pipeline;


pub use cover::{cover_background, CoverPublisher, CoverWatcher, COVER_IMAGE_PROPERTY};
pub use handle::{ImageHandle, SelectedFile};
pub use pipeline::ImagePreview;
