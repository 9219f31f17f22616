// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! File metadata as seen by the dropzone, and committed entries.

use alloc::string::String;
use alloc::vec::Vec;

use crate::rejection::FileRejection;

/// Metadata of a single file offered by a drag, an input change, or a picker.
///
/// The dropzone never reads file contents. A `size` of `0` means the platform
/// did not report one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DropFile {
    /// Base name of the file, for example `report.pdf`.
    pub name: String,
    /// Relative or absolute path, when the platform provides one.
    pub path: Option<String>,
    /// Size in bytes (`0` when unreported).
    pub size: u64,
    /// MIME type as reported by the platform; may be empty.
    pub mime: String,
    /// Last modification time in milliseconds since the epoch, if known.
    pub last_modified: Option<u64>,
}

impl DropFile {
    /// Creates file metadata with a name, size, and MIME type.
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64, mime: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
            size,
            mime: mime.into(),
            last_modified: None,
        }
    }

    /// Sets the path of this file.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Identity key used for duplicate detection: the path, or the name when
    /// no path is known.
    #[must_use]
    pub fn key(&self) -> &str {
        self.path.as_deref().unwrap_or(&self.name)
    }
}

/// A committed file together with the rejections it accrued.
///
/// Rejected files stay in the committed list so the UI can render them with
/// their reasons; an empty `errors` list means the file was accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileEntry {
    /// The file itself.
    pub file: DropFile,
    /// Rejections in evaluation order.
    pub errors: Vec<FileRejection>,
}

impl FileEntry {
    /// Returns `true` if the file accrued no rejections.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.errors.is_empty()
    }
}
