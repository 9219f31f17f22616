// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The externally observed dropzone state.

use alloc::vec::Vec;

use crate::file::{DropFile, FileEntry};

/// Snapshot of everything a UI renders from a dropzone.
///
/// Replaced wholesale by each transition; see
/// [`Dropzone::revision`](crate::Dropzone::revision) for cheap change detection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DropzoneState {
    /// The root element has input focus.
    pub is_focused: bool,
    /// A native file dialog is open.
    pub is_file_dialog_active: bool,
    /// A file-carrying drag hovers the root or one of its descendants.
    pub is_drag_active: bool,
    /// The hovering payload would be accepted as-is.
    pub is_drag_accept: bool,
    /// The hovering payload would be rejected.
    pub is_drag_reject: bool,
    /// Preview metadata of the hovering payload.
    pub dragged_files: Vec<DropFile>,
    /// Committed files in arrival order, each with its rejections.
    pub files: Vec<FileEntry>,
}

impl DropzoneState {
    /// The state at mount: every flag cleared, nothing committed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            is_focused: false,
            is_file_dialog_active: false,
            is_drag_active: false,
            is_drag_accept: false,
            is_drag_reject: false,
            dragged_files: Vec::new(),
            files: Vec::new(),
        }
    }

    /// Committed files that accrued no rejections.
    pub fn accepted(&self) -> impl Iterator<Item = &FileEntry> {
        self.files.iter().filter(|e| e.is_accepted())
    }

    /// Committed files that accrued at least one rejection.
    pub fn rejected(&self) -> impl Iterator<Item = &FileEntry> {
        self.files.iter().filter(|e| !e.is_accepted())
    }
}
