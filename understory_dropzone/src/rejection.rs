// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Structured rejection reasons attached to files or to a whole batch.
//!
//! Rejections are data: they are recorded on [`FileEntry`](crate::FileEntry)
//! values and handed to callbacks, never raised. A rejection still implements
//! [`core::error::Error`] so hosts can funnel it into their own error types.
//!
//! ```
//! use understory_dropzone::{FileRejection, RejectionCode};
//!
//! let r = FileRejection::too_large(1);
//! assert_eq!(r.code, RejectionCode::TooLarge);
//! assert_eq!(r.message, "File is larger than 1 byte");
//!
//! let r = FileRejection::invalid_type(["image/*", ".pdf"]);
//! assert_eq!(r.message, "File type must be one of image/*, .pdf");
//! ```

use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use thiserror::Error;

/// Machine-readable reason for a rejection.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum RejectionCode {
    /// The file does not match the accepted types.
    InvalidType,
    /// The file is larger than the configured maximum.
    TooLarge,
    /// The file is smaller than the configured minimum.
    TooSmall,
    /// A committed file already has the same identity key.
    DuplicateFile,
    /// The batch pushes the committed list past the configured maximum count.
    TooManyFiles,
    /// A code produced by a custom validator.
    Custom(String),
}

impl RejectionCode {
    /// The wire form of this code, for example `file-too-large`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::InvalidType => "file-invalid-type",
            Self::TooLarge => "file-too-large",
            Self::TooSmall => "file-too-small",
            Self::DuplicateFile => "duplicate-file",
            Self::TooManyFiles => "too-many-files",
            Self::Custom(code) => code,
        }
    }
}

impl fmt::Display for RejectionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rejection: a code plus a human-readable message.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
#[error("{message}")]
pub struct FileRejection {
    /// Machine-readable reason.
    pub code: RejectionCode,
    /// Human-readable reason.
    pub message: String,
}

impl FileRejection {
    /// Creates a rejection from a code and message.
    #[must_use]
    pub fn new(code: RejectionCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Creates a rejection with a validator-defined code.
    #[must_use]
    pub fn custom(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(RejectionCode::Custom(code.into()), message)
    }

    /// The file type is not one of `accepted`.
    ///
    /// A single option is quoted as-is; several are joined after `one of`.
    #[must_use]
    pub fn invalid_type<I, S>(accepted: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let options: Vec<String> = accepted
            .into_iter()
            .map(|s| s.as_ref().to_string())
            .collect();
        let suffix = match options.as_slice() {
            [single] => single.clone(),
            many => format!("one of {}", many.join(", ")),
        };
        Self::new(
            RejectionCode::InvalidType,
            format!("File type must be {suffix}"),
        )
    }

    /// The file is larger than `max_size` bytes.
    #[must_use]
    pub fn too_large(max_size: u64) -> Self {
        Self::new(
            RejectionCode::TooLarge,
            format!("File is larger than {max_size} {}", bytes_unit(max_size)),
        )
    }

    /// The file is smaller than `min_size` bytes.
    #[must_use]
    pub fn too_small(min_size: u64) -> Self {
        Self::new(
            RejectionCode::TooSmall,
            format!("File is smaller than {min_size} {}", bytes_unit(min_size)),
        )
    }

    /// A committed file already has the same identity key.
    #[must_use]
    pub fn duplicate() -> Self {
        Self::new(RejectionCode::DuplicateFile, "Found a duplicate file")
    }

    /// The batch exceeds the configured maximum number of files.
    #[must_use]
    pub fn too_many_files() -> Self {
        Self::new(RejectionCode::TooManyFiles, "Too many files")
    }
}

fn bytes_unit(n: u64) -> &'static str {
    if n == 1 { "byte" } else { "bytes" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_messages_pluralize() {
        assert_eq!(
            FileRejection::too_large(100).message,
            "File is larger than 100 bytes"
        );
        assert_eq!(
            FileRejection::too_small(1).message,
            "File is smaller than 1 byte"
        );
        assert_eq!(
            FileRejection::too_small(0).message,
            "File is smaller than 0 bytes"
        );
    }

    #[test]
    fn single_type_is_not_listed() {
        let r = FileRejection::invalid_type(["image/*"]);
        assert_eq!(r.message, "File type must be image/*");
        assert_eq!(r.code.as_str(), "file-invalid-type");
    }

    #[test]
    fn custom_code_round_trips_as_str() {
        let r = FileRejection::custom("name-too-long", "Name is too long");
        assert_eq!(r.code.as_str(), "name-too-long");
        assert_eq!(r.to_string(), "Name is too long");
    }

    #[test]
    fn wire_codes() {
        assert_eq!(RejectionCode::TooLarge.as_str(), "file-too-large");
        assert_eq!(RejectionCode::DuplicateFile.as_str(), "duplicate-file");
        assert_eq!(RejectionCode::TooManyFiles.to_string(), "too-many-files");
    }
}
