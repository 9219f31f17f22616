// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_dropzone --heading-base-level=0

//! Understory Dropzone: headless file drop and file-dialog state.
//!
//! This crate implements the _behavior_ of a dropzone: the region of a UI that
//! accepts files dragged onto it or chosen through a file dialog. It does not
//! render anything and does not talk to a platform directly. Hosts forward
//! events, resolve files, and perform the dialog requests the dropzone returns;
//! the dropzone tracks the interaction, validates what arrives, and reports
//! through callbacks.
//!
//! The core type is [`Dropzone`], which owns:
//! - A [`DropzoneState`] snapshot (drag flags, focus, dialog activity, the drag
//!   preview, and the committed file list) plus a **revision** counter that
//!   bumps when the snapshot changes.
//! - The set of nodes currently under a drag, so that moving between
//!   descendants of the root is not mistaken for leaving it.
//! - The dialog [`Backend`]: a native picker when the platform offers one, a
//!   hidden file input otherwise.
//!
//! Validation lives in free functions that can be used on their own:
//! [`matches_type`], [`matches_size`], [`all_files_accepted`], and
//! [`validate_batch`]. Every rejected file stays in the committed list with its
//! [`FileRejection`]s attached, so a UI can show why it was refused.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_dropzone::{
//!     AcceptSpec, DropFile, Dropzone, DropzoneConfig, PlatformCaps, RejectionCode,
//! };
//! use understory_dropzone::event::{FileEvent, InteractionEvent};
//!
//! struct DropEvent { types: Vec<String> }
//! impl InteractionEvent for DropEvent {
//!     type Target = u32;
//!     fn target(&self) -> Option<u32> { Some(7) }
//!     fn prevent_default(&mut self) {}
//!     fn stop_propagation(&mut self) {}
//! }
//! impl FileEvent for DropEvent {
//!     fn drag_types(&self) -> Option<&[String]> { Some(&self.types) }
//! }
//!
//! let config = DropzoneConfig {
//!     file_types: AcceptSpec::parse(".png/*,.jpg/*"),
//!     min_size: 1,
//!     max_size: Some(100),
//!     ..DropzoneConfig::default()
//! };
//! let mut zone: Dropzone<DropEvent> = Dropzone::new(config, PlatformCaps::default(), ());
//! zone.set_root(Some(7));
//!
//! let mut ev = DropEvent { types: vec!["Files".into()] };
//! let pending = zone.drop(&mut ev).expect("event carries files");
//! zone.finish_drop(
//!     pending,
//!     vec![DropFile::new("a.png", 10, ""), DropFile::new("a.txt", 10, "")],
//!     &ev,
//! )
//! .unwrap();
//!
//! let files = &zone.state().files;
//! assert_eq!(files.len(), 2);
//! assert!(files[0].errors.is_empty());
//! assert_eq!(files[1].errors[0].code, RejectionCode::InvalidType);
//! ```
//!
//! ## Asynchronous file resolution
//!
//! Reading a drag payload or a picker result is asynchronous on most
//! platforms. The dropzone splits each such transition into a begin method
//! returning a [`Pending`] ticket and a `finish_*` method taking the resolved
//! files. The [`normalize`] module describes the resolver seam, and the
//! `driver` module (feature `driver`) runs both halves over a
//! `RefCell<Dropzone>`.
//!
//! ## Features
//!
//! - `std` (default): compile dependencies against the standard library.
//! - `driver` (default): async helpers in the `driver` module.
//! - `tracing` (default): emit transition diagnostics through `tracing`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod accept;
pub mod event;
pub mod normalize;

mod config;
mod drag;
mod dropzone;
mod file;
mod props;
mod rejection;
mod state;
mod validate;

#[cfg(feature = "driver")]
pub mod driver;

pub use accept::{AcceptPattern, AcceptSpec, all_files_accepted, matches_size, matches_type};
pub use config::{DropzoneConfig, Validator};
pub use dropzone::{
    Backend, CancelCheck, DialogRequest, Dropzone, DropzoneCallbacks, FILE_DIALOG_CANCEL_DELAY,
    NodeTree, Pending, PendingKind, PickerError, PickerOptions, PickerRequest, PlatformCaps,
    TicketError,
};
pub use file::{DropFile, FileEntry};
pub use props::{Cursor, InputHandlers, InputProps, RootHandlers, RootProps};
pub use rejection::{FileRejection, RejectionCode};
pub use state::DropzoneState;
pub use validate::{Commit, dedupe, validate_batch};
