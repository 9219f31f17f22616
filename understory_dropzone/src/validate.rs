// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Validate-and-commit: fold a batch of candidates into the committed list.
//!
//! Each candidate is checked in a fixed order and every rejection it accrues
//! is recorded on its entry:
//!
//! 1. duplicate key against the list committed *before* this batch,
//! 2. size,
//! 3. the custom validator (its rejections are appended verbatim),
//! 4. type.
//!
//! Independently, the batch as a whole gets one `too-many-files` rejection
//! when appending it would push the committed count past `max_files`.
//! Rejected candidates are still appended. The combined list is then
//! de-duplicated by identity key: a later entry replaces an earlier one in
//! the earlier one's position.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::DefaultHashBuilder;
use indexmap::IndexMap;

use crate::accept::{matches_size, matches_type};
use crate::config::DropzoneConfig;
use crate::file::{DropFile, FileEntry};
use crate::rejection::FileRejection;

/// The outcome of folding one batch into the committed list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Commit {
    /// The new committed list, de-duplicated.
    pub files: Vec<FileEntry>,
    /// Set when the batch exceeded the configured maximum count.
    pub too_many_files: Option<FileRejection>,
}

/// Validates `candidates` against `config` and merges them into `committed`.
///
/// Returns `None` for an empty batch: nothing changes and no callback fires.
#[must_use]
pub fn validate_batch(
    committed: &[FileEntry],
    candidates: Vec<DropFile>,
    config: &DropzoneConfig,
) -> Option<Commit> {
    if candidates.is_empty() {
        return None;
    }

    let too_many_files = (config.max_files > 0
        && committed.len() + candidates.len() > config.max_files)
        .then(FileRejection::too_many_files);

    let mut working: Vec<FileEntry> = committed.to_vec();
    for file in candidates {
        let errors = file_errors(committed, &file, config);
        working.push(FileEntry { file, errors });
    }

    let files = dedupe(working);
    if files.is_empty() {
        return None;
    }
    Some(Commit {
        files,
        too_many_files,
    })
}

fn file_errors(
    committed: &[FileEntry],
    file: &DropFile,
    config: &DropzoneConfig,
) -> Vec<FileRejection> {
    let mut errors = Vec::new();
    if committed.iter().any(|e| e.file.key() == file.key()) {
        errors.push(FileRejection::duplicate());
    }
    if let Err(e) = matches_size(file, config.min_size, config.max_size) {
        errors.push(e);
    }
    errors.extend(config.custom_errors(file));
    if let Err(e) = matches_type(file, &config.file_types) {
        errors.push(e);
    }
    errors
}

/// Collapses entries sharing an identity key.
///
/// Iteration order is the order in which each key was first seen; the value
/// kept for a key is its last occurrence.
#[must_use]
pub fn dedupe(list: Vec<FileEntry>) -> Vec<FileEntry> {
    let mut unique: IndexMap<String, FileEntry, DefaultHashBuilder> =
        IndexMap::with_capacity_and_hasher(list.len(), DefaultHashBuilder::default());
    for entry in list {
        unique.insert(String::from(entry.file.key()), entry);
    }
    unique.into_values().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accept::AcceptSpec;
    use crate::rejection::RejectionCode;
    use alloc::vec;

    fn file(name: &str, size: u64) -> DropFile {
        DropFile::new(name, size, "")
    }

    fn codes(entry: &FileEntry) -> Vec<RejectionCode> {
        entry.errors.iter().map(|e| e.code.clone()).collect()
    }

    #[test]
    fn empty_batch_is_a_no_op() {
        let committed = vec![FileEntry {
            file: file("a", 1),
            errors: Vec::new(),
        }];
        assert!(validate_batch(&committed, Vec::new(), &DropzoneConfig::default()).is_none());
    }

    #[test]
    fn mixed_batch_keeps_rejected_files() {
        let config = DropzoneConfig {
            file_types: AcceptSpec::parse(".png/*,.jpg/*"),
            min_size: 1,
            max_size: Some(100),
            ..DropzoneConfig::default()
        };
        let commit = validate_batch(&[], vec![file("a.png", 10), file("a.txt", 10)], &config)
            .unwrap();
        assert_eq!(commit.files.len(), 2);
        assert!(commit.files[0].is_accepted());
        assert_eq!(codes(&commit.files[1]), [RejectionCode::InvalidType]);
        assert!(commit.too_many_files.is_none());
    }

    #[test]
    fn errors_follow_evaluation_order() {
        let config = DropzoneConfig {
            file_types: AcceptSpec::parse(".png"),
            max_size: Some(5),
            ..DropzoneConfig::default()
        }
        .with_validator(|_| vec![FileRejection::custom("custom", "Custom")]);
        let committed = vec![FileEntry {
            file: file("a.txt", 1),
            errors: Vec::new(),
        }];
        let commit = validate_batch(&committed, vec![file("a.txt", 50)], &config).unwrap();
        assert_eq!(commit.files.len(), 1);
        assert_eq!(
            codes(&commit.files[0]),
            [
                RejectionCode::DuplicateFile,
                RejectionCode::TooLarge,
                RejectionCode::Custom("custom".into()),
                RejectionCode::InvalidType,
            ]
        );
    }

    #[test]
    fn duplicates_within_one_batch_are_not_flagged() {
        let commit = validate_batch(
            &[],
            vec![file("a", 1), file("a", 2)],
            &DropzoneConfig::default(),
        )
        .unwrap();
        assert_eq!(commit.files.len(), 1);
        assert!(commit.files[0].is_accepted());
        assert_eq!(commit.files[0].file.size, 2);
    }

    #[test]
    fn too_many_files_is_list_level() {
        let config = DropzoneConfig {
            max_files: 1,
            ..DropzoneConfig::default()
        };
        let commit = validate_batch(&[], vec![file("a", 1), file("b", 1)], &config).unwrap();
        assert_eq!(commit.files.len(), 2);
        assert!(commit.files.iter().all(FileEntry::is_accepted));
        assert_eq!(
            commit.too_many_files.map(|r| r.code),
            Some(RejectionCode::TooManyFiles)
        );
    }

    #[test]
    fn max_files_counts_committed_entries() {
        let config = DropzoneConfig {
            max_files: 2,
            ..DropzoneConfig::default()
        };
        let committed = vec![FileEntry {
            file: file("a", 1),
            errors: Vec::new(),
        }];
        assert!(
            validate_batch(&committed, vec![file("b", 1)], &config)
                .unwrap()
                .too_many_files
                .is_none()
        );
        assert!(
            validate_batch(&committed, vec![file("b", 1), file("c", 1)], &config)
                .unwrap()
                .too_many_files
                .is_some()
        );
    }

    #[test]
    fn dedupe_keeps_first_position_and_last_value() {
        let entry = |name: &str, size| FileEntry {
            file: file(name, size),
            errors: Vec::new(),
        };
        let out = dedupe(vec![entry("a", 1), entry("b", 1), entry("a", 2)]);
        let seen: Vec<(&str, u64)> = out.iter().map(|e| (e.file.key(), e.file.size)).collect();
        assert_eq!(seen, [("a", 2), ("b", 1)]);
    }
}
