// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Acceptance policies: file types, size bounds, and picker descriptors.
//!
//! An [`AcceptSpec`] is parsed from the familiar comma-separated form used by
//! file inputs. Each entry is one of:
//!
//! - an extension suffix such as `.png` (also written `.png/*`),
//! - a MIME group such as `image/*`, compared on the top-level segment only,
//! - an exact MIME type such as `application/pdf`.
//!
//! The literal `all` accepts every file. Matching is case-insensitive.
//!
//! ```
//! use understory_dropzone::{AcceptSpec, DropFile, matches_type};
//!
//! let spec = AcceptSpec::parse("image/*, .pdf");
//! assert!(matches_type(&DropFile::new("a.png", 10, "image/png"), &spec).is_ok());
//! assert!(matches_type(&DropFile::new("B.PDF", 10, ""), &spec).is_ok());
//! assert!(matches_type(&DropFile::new("a.txt", 10, "text/plain"), &spec).is_err());
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;

use hashbrown::DefaultHashBuilder;
use indexmap::IndexMap;

use crate::file::DropFile;
use crate::rejection::FileRejection;

/// Pseudo-MIME type some platforms report for dragged files before they are
/// resolved. Files carrying it are always accepted.
pub const PSEUDO_FILE_MIME: &str = "application/x-moz-file";

/// Broad MIME categories a native file picker accepts as wildcards.
const PICKER_CATEGORIES: [&str; 4] = ["audio/*", "video/*", "image/*", "text/*"];

/// One parsed entry of an [`AcceptSpec`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AcceptPattern {
    /// Lower-cased extension including the leading dot, matched as a name suffix.
    Extension(String),
    /// Lower-cased top-level MIME segment, from a `type/*` entry.
    MimeGroup(String),
    /// Lower-cased exact MIME type.
    Mime(String),
}

impl AcceptPattern {
    fn parse(token: &str) -> Self {
        let lower = token.to_lowercase();
        if lower.starts_with('.') {
            let ext = lower.strip_suffix("/*").unwrap_or(lower.as_str());
            Self::Extension(ext.to_string())
        } else if let Some(group) = lower.strip_suffix("/*") {
            Self::MimeGroup(group.to_string())
        } else {
            Self::Mime(lower)
        }
    }

    fn matches(&self, lower_name: &str, lower_mime: &str) -> bool {
        match self {
            Self::Extension(ext) => lower_name.ends_with(ext.as_str()),
            Self::MimeGroup(group) => base_mime(lower_mime) == group.as_str(),
            Self::Mime(mime) => lower_mime == mime.as_str(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct AcceptEntry {
    raw: String,
    pattern: AcceptPattern,
}

/// The set of file types a dropzone accepts.
///
/// An empty spec (the default, or the literal `all`) accepts everything.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AcceptSpec {
    entries: Vec<AcceptEntry>,
}

impl AcceptSpec {
    /// A spec that accepts every file.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Parses a comma-separated spec such as `"image/*,.pdf"` or `"all"`.
    ///
    /// Blank entries are ignored. If the first entry is `all`, the whole spec
    /// accepts everything.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        let tokens: Vec<&str> = spec
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect();
        if tokens
            .first()
            .is_none_or(|first| first.eq_ignore_ascii_case("all"))
        {
            return Self::all();
        }
        Self {
            entries: tokens
                .into_iter()
                .map(|raw| AcceptEntry {
                    raw: raw.to_string(),
                    pattern: AcceptPattern::parse(raw),
                })
                .collect(),
        }
    }

    /// Returns `true` if this spec accepts every file.
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries as written (trimmed), in order.
    pub fn entries(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.raw.as_str())
    }

    /// The parsed patterns, in order.
    pub fn patterns(&self) -> impl Iterator<Item = &AcceptPattern> + '_ {
        self.entries.iter().map(|e| &e.pattern)
    }

    /// Returns `true` if `file` matches at least one entry.
    #[must_use]
    pub fn accepts(&self, file: &DropFile) -> bool {
        if self.is_all() {
            return true;
        }
        let name = file.name.to_lowercase();
        let mime = file.mime.to_lowercase();
        self.patterns().any(|p| p.matches(&name, &mime))
    }
}

impl From<&str> for AcceptSpec {
    fn from(spec: &str) -> Self {
        Self::parse(spec)
    }
}

impl fmt::Display for AcceptSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_all() {
            return f.write_str("all");
        }
        for (i, raw) in self.entries().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(raw)?;
        }
        Ok(())
    }
}

fn base_mime(mime: &str) -> &str {
    mime.split_once('/').map_or(mime, |(base, _)| base)
}

/// Checks `file` against `spec`.
///
/// Files reporting [`PSEUDO_FILE_MIME`] always pass.
pub fn matches_type(file: &DropFile, spec: &AcceptSpec) -> Result<(), FileRejection> {
    if file.mime == PSEUDO_FILE_MIME || spec.accepts(file) {
        Ok(())
    } else {
        Err(FileRejection::invalid_type(spec.entries()))
    }
}

/// Checks `file` against a size range.
///
/// Only evaluated when the file reports a nonzero size. The upper bound is
/// checked before the lower bound; a `min_size` of `0` disables the lower bound.
pub fn matches_size(
    file: &DropFile,
    min_size: u64,
    max_size: Option<u64>,
) -> Result<(), FileRejection> {
    if file.size == 0 {
        return Ok(());
    }
    if let Some(max) = max_size
        && file.size > max
    {
        return Err(FileRejection::too_large(max));
    }
    if min_size > 0 && file.size < min_size {
        return Err(FileRejection::too_small(min_size));
    }
    Ok(())
}

/// Returns `true` if a whole drag payload would be accepted as-is.
///
/// The batch fails when `max_files` is at least one and the batch is larger;
/// otherwise every file has to pass both the type and the size checks.
#[must_use]
pub fn all_files_accepted(
    files: &[DropFile],
    spec: &AcceptSpec,
    min_size: u64,
    max_size: Option<u64>,
    max_files: usize,
) -> bool {
    if max_files >= 1 && files.len() > max_files {
        return false;
    }
    files
        .iter()
        .all(|f| matches_type(f, spec).is_ok() && matches_size(f, min_size, max_size).is_ok())
}

/// Ordered `MIME → extensions` map handed to a native file picker.
pub type AcceptMap = IndexMap<String, Vec<String>, DefaultHashBuilder>;

/// A file-type descriptor in the form native file pickers expect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerAcceptType {
    /// Label shown by the picker; left empty.
    pub description: String,
    /// Accepted MIME patterns, each with its (possibly empty) extension list.
    pub accept: AcceptMap,
}

/// Translates `spec` into native file-picker descriptors.
///
/// Entries that are neither one of the broad category wildcards (`audio/*`,
/// `video/*`, `image/*`, `text/*`) nor shaped like a MIME type are dropped.
/// Extension entries therefore never reach the picker.
#[must_use]
pub fn picker_accept_types(spec: &AcceptSpec) -> Vec<PickerAcceptType> {
    let mut accept = AcceptMap::with_hasher(DefaultHashBuilder::default());
    for raw in spec.entries() {
        if PICKER_CATEGORIES.contains(&raw) || looks_like_mime(raw) {
            accept.insert(raw.to_string(), Vec::new());
        }
    }
    Vec::from([PickerAcceptType {
        description: String::new(),
        accept,
    }])
}

/// A `word/word` shape somewhere in `s`, where the part after the slash may
/// also contain `-`, `+`, and `.`.
fn looks_like_mime(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.iter().enumerate().any(|(i, &b)| {
        b == b'/'
            && i > 0
            && is_word(bytes[i - 1])
            && bytes
                .get(i + 1)
                .is_some_and(|&n| is_word(n) || matches!(n, b'-' | b'+' | b'.'))
    })
}

fn is_word(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rejection::RejectionCode;
    use alloc::vec;

    fn file(name: &str, size: u64, mime: &str) -> DropFile {
        DropFile::new(name, size, mime)
    }

    #[test]
    fn all_accepts_anything() {
        for spec in [AcceptSpec::all(), AcceptSpec::parse("all"), AcceptSpec::parse("")] {
            assert!(spec.is_all());
            assert!(matches_type(&file("x.bin", 3, "application/octet-stream"), &spec).is_ok());
            assert!(matches_type(&file("noext", 0, ""), &spec).is_ok());
        }
    }

    #[test]
    fn extension_match_is_case_insensitive_suffix() {
        let spec = AcceptSpec::parse(".PNG");
        assert!(spec.accepts(&file("photo.png", 1, "")));
        assert!(spec.accepts(&file("PHOTO.Png", 1, "")));
        assert!(!spec.accepts(&file("photo.png.txt", 1, "")));
    }

    #[test]
    fn extension_with_wildcard_suffix_is_an_extension() {
        let spec = AcceptSpec::parse(".png/*,.jpg/*");
        assert_eq!(
            spec.patterns().cloned().collect::<Vec<_>>(),
            vec![
                AcceptPattern::Extension(".png".into()),
                AcceptPattern::Extension(".jpg".into()),
            ]
        );
        assert!(matches_type(&file("a.png", 10, ""), &spec).is_ok());
        let err = matches_type(&file("a.txt", 10, "text/plain"), &spec).unwrap_err();
        assert_eq!(err.code, RejectionCode::InvalidType);
        assert_eq!(err.message, "File type must be one of .png/*, .jpg/*");
    }

    #[test]
    fn group_wildcard_compares_top_level_only() {
        let spec = AcceptSpec::parse("image/*");
        assert!(spec.accepts(&file("a", 1, "image/svg+xml")));
        assert!(spec.accepts(&file("a", 1, "IMAGE/PNG")));
        assert!(!spec.accepts(&file("a", 1, "video/mp4")));
        assert!(!spec.accepts(&file("a", 1, "")));
    }

    #[test]
    fn exact_mime_match() {
        let spec = AcceptSpec::parse("application/pdf");
        assert!(spec.accepts(&file("a", 1, "Application/PDF")));
        assert!(!spec.accepts(&file("a", 1, "application/pdfx")));
    }

    #[test]
    fn pseudo_mime_is_always_accepted() {
        let spec = AcceptSpec::parse(".png");
        assert!(matches_type(&file("a.txt", 1, PSEUDO_FILE_MIME), &spec).is_ok());
    }

    #[test]
    fn size_checks() {
        assert!(matches_size(&file("a", 0, ""), 10, Some(20)).is_ok());
        assert!(matches_size(&file("a", 15, ""), 10, Some(20)).is_ok());
        assert_eq!(
            matches_size(&file("a", 21, ""), 10, Some(20)).unwrap_err().code,
            RejectionCode::TooLarge
        );
        assert_eq!(
            matches_size(&file("a", 5, ""), 10, Some(20)).unwrap_err().code,
            RejectionCode::TooSmall
        );
        assert!(matches_size(&file("a", u64::MAX, ""), 0, None).is_ok());
        assert_eq!(
            matches_size(&file("a", 5, ""), 10, None).unwrap_err().code,
            RejectionCode::TooSmall
        );
    }

    #[test]
    fn too_large_wins_over_too_small_when_bounds_cross() {
        // A nonsensical range still reports the upper bound first.
        let err = matches_size(&file("a", 50, ""), 100, Some(10)).unwrap_err();
        assert_eq!(err.code, RejectionCode::TooLarge);
    }

    #[test]
    fn whole_payload_acceptance() {
        let spec = AcceptSpec::parse("image/*");
        let ok = [file("a.png", 5, "image/png"), file("b.gif", 5, "image/gif")];
        assert!(all_files_accepted(&ok, &spec, 0, None, 0));
        assert!(!all_files_accepted(&ok, &spec, 0, None, 1));
        assert!(!all_files_accepted(&ok, &spec, 0, Some(4), 0));
        assert!(!all_files_accepted(
            &[file("a.txt", 5, "text/plain")],
            &spec,
            0,
            None,
            0
        ));
    }

    #[test]
    fn picker_types_keep_mime_shapes_only() {
        let spec = AcceptSpec::parse("image/*, .pdf, application/json, application/*, text/*, junk");
        let types = picker_accept_types(&spec);
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].description, "");
        let keys: Vec<&str> = types[0].accept.keys().map(String::as_str).collect();
        assert_eq!(keys, ["image/*", "application/json", "text/*"]);
        assert!(types[0].accept.values().all(Vec::is_empty));
    }

    #[test]
    fn picker_types_for_all_are_empty() {
        let types = picker_accept_types(&AcceptSpec::all());
        assert!(types[0].accept.is_empty());
    }

    #[test]
    fn display_round_trips_entries() {
        assert_eq!(AcceptSpec::parse(" .png , image/* ").to_string(), ".png,image/*");
        assert_eq!(AcceptSpec::all().to_string(), "all");
    }
}
