// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event normalization: turn any file source into a flat list of candidates.
//!
//! The platform collaborator that reads drag payloads, input file lists, or
//! picker handles implements [`ExtractFiles`] for each source type it supports.
//! Resolution is asynchronous because directory entries may need traversal.
//! [`extract_files`] awaits the collaborator and applies the normalization
//! every source shares:
//!
//! - files without a path get their name as path, so identity keys are stable,
//! - well-known OS metadata files ([`IGNORED_FILES`]) are dropped.
//!
//! Callers must not assume the source event is still live once the future
//! resolves; the dropzone re-checks propagation when a transition finishes.

use alloc::vec::Vec;
use core::future::Future;

use crate::file::DropFile;

/// Names of OS metadata files that never count as user selections.
pub const IGNORED_FILES: [&str; 2] = [".DS_Store", "Thumbs.db"];

/// A platform collaborator that resolves a source to candidate files.
///
/// `S` is a drag event, an input-change event, or a slice of picker handles.
pub trait ExtractFiles<S: ?Sized> {
    /// Resolves `source` to its files, traversing directories as needed.
    fn extract(&mut self, source: &S) -> impl Future<Output = Vec<DropFile>>;
}

/// Awaits `extractor` on `source` and normalizes the result.
pub async fn extract_files<X, S>(extractor: &mut X, source: &S) -> Vec<DropFile>
where
    X: ExtractFiles<S>,
    S: ?Sized,
{
    normalize(extractor.extract(source).await)
}

/// Fills in missing paths and drops OS metadata files.
#[must_use]
pub fn normalize(files: Vec<DropFile>) -> Vec<DropFile> {
    files
        .into_iter()
        .filter(|f| !IGNORED_FILES.contains(&f.name.as_str()))
        .map(|mut f| {
            if f.path.is_none() {
                f.path = Some(f.name.clone());
            }
            f
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    struct Fixed(Vec<DropFile>);

    impl ExtractFiles<[u32]> for Fixed {
        async fn extract(&mut self, source: &[u32]) -> Vec<DropFile> {
            self.0
                .iter()
                .zip(source)
                .map(|(f, _)| f.clone())
                .collect()
        }
    }

    #[test]
    fn fills_missing_paths() {
        let out = normalize(vec![
            DropFile::new("a.png", 1, "image/png"),
            DropFile::new("b.png", 1, "image/png").with_path("dir/b.png"),
        ]);
        assert_eq!(out[0].path.as_deref(), Some("a.png"));
        assert_eq!(out[1].path.as_deref(), Some("dir/b.png"));
    }

    #[test]
    fn drops_os_metadata_files() {
        let out = normalize(vec![
            DropFile::new(".DS_Store", 6, ""),
            DropFile::new("a.png", 1, "image/png"),
            DropFile::new("Thumbs.db", 6, ""),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].name, "a.png");
    }

    #[test]
    fn extract_awaits_the_collaborator() {
        let mut x = Fixed(vec![
            DropFile::new("a", 1, ""),
            DropFile::new("b", 1, ""),
            DropFile::new("c", 1, ""),
        ]);
        let handles = [7_u32, 8];
        let out = pollster::block_on(extract_files(&mut x, &handles[..]));
        assert_eq!(out.len(), 2);
        assert_eq!(out[1].key(), "b");
    }
}
