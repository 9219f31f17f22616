// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dropzone configuration.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::accept::AcceptSpec;
use crate::file::DropFile;
use crate::rejection::FileRejection;

/// A custom per-file check. Its rejections are recorded verbatim.
pub type Validator = Box<dyn Fn(&DropFile) -> Vec<FileRejection>>;

/// Options controlling what a [`Dropzone`](crate::Dropzone) accepts and which
/// interactions it responds to.
///
/// ```
/// use understory_dropzone::{AcceptSpec, DropzoneConfig};
///
/// let config = DropzoneConfig {
///     file_types: AcceptSpec::parse("image/*"),
///     max_size: Some(5 * 1024 * 1024),
///     max_files: 4,
///     ..DropzoneConfig::default()
/// };
/// assert!(!config.disabled);
/// ```
pub struct DropzoneConfig {
    /// Accepted file types. Defaults to everything.
    pub file_types: AcceptSpec,
    /// Ignore every interaction.
    pub disabled: bool,
    /// Largest accepted size in bytes; `None` is unbounded.
    pub max_size: Option<u64>,
    /// Smallest accepted size in bytes; `0` disables the bound.
    pub min_size: u64,
    /// Largest committed list; `0` is unlimited.
    pub max_files: usize,
    /// Prefer the native file-picker capability when the platform offers it.
    pub use_fs_access_api: bool,
    /// Neutralize drops that land outside the root anywhere in the document.
    pub prevent_drop_on_document: bool,
    /// Do not open the dialog on click.
    pub no_click: bool,
    /// Do not react to focus, blur, or key presses.
    pub no_keyboard: bool,
    /// Do not react to drag events.
    pub no_drag: bool,
    /// Stop drag events from bubbling past the root.
    pub no_drag_events_bubbling: bool,
    /// Extra per-file validation.
    pub validator: Option<Validator>,
}

impl DropzoneConfig {
    /// Sets the custom validator.
    #[must_use]
    pub fn with_validator(
        mut self,
        validator: impl Fn(&DropFile) -> Vec<FileRejection> + 'static,
    ) -> Self {
        self.validator = Some(Box::new(validator));
        self
    }

    /// Runs the custom validator, if any.
    pub(crate) fn custom_errors(&self, file: &DropFile) -> Vec<FileRejection> {
        self.validator.as_ref().map_or_else(Vec::new, |v| v(file))
    }
}

impl Default for DropzoneConfig {
    fn default() -> Self {
        Self {
            file_types: AcceptSpec::all(),
            disabled: false,
            max_size: None,
            min_size: 0,
            max_files: 0,
            use_fs_access_api: true,
            prevent_drop_on_document: true,
            no_click: false,
            no_keyboard: false,
            no_drag: false,
            no_drag_events_bubbling: false,
            validator: None,
        }
    }
}

impl fmt::Debug for DropzoneConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DropzoneConfig")
            .field("file_types", &self.file_types)
            .field("disabled", &self.disabled)
            .field("max_size", &self.max_size)
            .field("min_size", &self.min_size)
            .field("max_files", &self.max_files)
            .field("use_fs_access_api", &self.use_fs_access_api)
            .field("prevent_drop_on_document", &self.prevent_drop_on_document)
            .field("no_click", &self.no_click)
            .field("no_keyboard", &self.no_keyboard)
            .field("no_drag", &self.no_drag)
            .field("no_drag_events_bubbling", &self.no_drag_events_bubbling)
            .field("validator", &self.validator.is_some())
            .finish()
    }
}
