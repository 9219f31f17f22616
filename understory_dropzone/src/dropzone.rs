// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The dropzone state machine.
//!
//! ## Usage
//!
//! 1) Create a [`Dropzone`] with a [`DropzoneConfig`], the platform's
//!    [`PlatformCaps`], and a [`DropzoneCallbacks`] implementation.
//! 2) Tell it the root node with [`Dropzone::set_root`].
//! 3) Forward root, input, document, and window events to the matching
//!    methods. Transitions that need files return a [`Pending`] ticket: resolve
//!    the files (see [`crate::normalize`]) and hand them back through the
//!    matching `finish_*` method together with the same event.
//! 4) Perform the [`DialogRequest`] returned by [`Dropzone::open`] and friends.
//! 5) Render from [`Dropzone::state`]; [`Dropzone::revision`] changes whenever
//!    the state does.
//!
//! Other transitions may run between a begin and its finish. Finishing
//! re-checks the event's propagation markers at that point, and tickets
//! issued before [`Dropzone::destroy`] are rejected as [`TicketError::Stale`].
//!
//! ## Minimal example
//!
//! ```
//! use understory_dropzone::{Dropzone, DropzoneConfig, DropFile, PlatformCaps};
//! use understory_dropzone::event::{FileEvent, InteractionEvent};
//!
//! struct DragEv { types: Vec<String>, stopped: bool }
//! impl InteractionEvent for DragEv {
//!     type Target = u32;
//!     fn target(&self) -> Option<u32> { Some(1) }
//!     fn prevent_default(&mut self) {}
//!     fn stop_propagation(&mut self) { self.stopped = true; }
//!     fn is_propagation_stopped(&self) -> Option<bool> { Some(self.stopped) }
//! }
//! impl FileEvent for DragEv {
//!     fn drag_types(&self) -> Option<&[String]> { Some(&self.types) }
//! }
//!
//! let mut zone: Dropzone<DragEv> =
//!     Dropzone::new(DropzoneConfig::default(), PlatformCaps::default(), ());
//! zone.set_root(Some(1));
//!
//! let mut ev = DragEv { types: vec!["Files".into()], stopped: false };
//! let pending = zone.drop(&mut ev).unwrap();
//! // ... resolve the payload asynchronously ...
//! let files = vec![DropFile::new("a.png", 10, "image/png")];
//! zone.finish_drop(pending, files, &ev).unwrap();
//!
//! assert_eq!(zone.state().files.len(), 1);
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::time::Duration;

use thiserror::Error;

use crate::accept::{PickerAcceptType, all_files_accepted, picker_accept_types};
use crate::config::DropzoneConfig;
use crate::drag::DragTargets;
use crate::event::{
    DropEffect, FileEvent, InteractionEvent, Key, event_carries_files, propagation_stopped,
};
use crate::file::{DropFile, FileEntry};
use crate::props::{Cursor, InputHandlers, InputProps, RootHandlers, RootProps};
use crate::rejection::FileRejection;
use crate::state::DropzoneState;
use crate::validate::validate_batch;

/// How long to wait after the window regains focus before concluding that the
/// hidden-input dialog was canceled.
pub const FILE_DIALOG_CANCEL_DELAY: Duration = Duration::from_millis(300);

/// Platform capabilities probed once when a dropzone is created.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PlatformCaps {
    /// The page runs in a secure context.
    pub secure_context: bool,
    /// A native file-picker capability is available.
    pub file_picker: bool,
}

/// The mechanism used to present a file dialog.
///
/// Chosen once at creation. The only transition is a permanent downgrade from
/// [`Backend::Picker`] to [`Backend::Input`] after a security failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Backend {
    /// The native file-picker capability.
    Picker,
    /// A click on the hidden file input.
    Input,
}

/// Queries about the host's node tree.
pub trait NodeTree<K> {
    /// Returns `true` if `node` is `ancestor` or one of its descendants.
    fn contains(&self, ancestor: &K, node: &K) -> bool;
}

impl<K, F> NodeTree<K> for F
where
    F: Fn(&K, &K) -> bool,
{
    fn contains(&self, ancestor: &K, node: &K) -> bool {
        self(ancestor, node)
    }
}

/// Externally visible notifications.
///
/// Every method defaults to doing nothing; `()` ignores all of them.
pub trait DropzoneCallbacks<E> {
    /// A file-carrying drag entered; `files` is the resolved preview.
    fn on_drag_enter(&mut self, files: &[DropFile], event: &E) {
        let _ = (files, event);
    }

    /// The drag left the root entirely; `files` is the preview being discarded.
    fn on_drag_leave(&mut self, files: &[DropFile], event: &E) {
        let _ = (files, event);
    }

    /// A file-carrying drag moved over the root.
    fn on_drag_over(&mut self, event: &E) {
        let _ = event;
    }

    /// A batch was committed. `files` is the whole committed list.
    ///
    /// `event` is `None` for batches coming from the native picker.
    fn on_drop(
        &mut self,
        files: &[FileEntry],
        too_many_files: Option<&FileRejection>,
        event: Option<&E>,
    ) {
        let _ = (files, too_many_files, event);
    }

    /// A file dialog was opened.
    fn on_file_dialog_open(&mut self) {}

    /// A file dialog was dismissed without a selection.
    fn on_file_dialog_cancel(&mut self) {}
}

impl<E> DropzoneCallbacks<E> for () {}

/// Which transition a [`Pending`] ticket belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PendingKind {
    /// Resolving a drag-enter preview.
    DragEnter,
    /// Resolving a drop on the root.
    Drop,
    /// Resolving the hidden input's selection.
    InputChange,
    /// Awaiting the native picker.
    Picker,
}

/// A transition waiting for asynchronously resolved files.
#[must_use = "a pending transition does nothing until it is finished"]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pending {
    kind: PendingKind,
    generation: u64,
    drag: u64,
}

impl Pending {
    /// The transition this ticket belongs to.
    pub fn kind(&self) -> PendingKind {
        self.kind
    }
}

/// A scheduled check for a canceled hidden-input dialog.
#[must_use = "the check must be finished after its delay"]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct CancelCheck {
    generation: u64,
    /// How long to wait before calling [`Dropzone::finish_cancel_check`].
    pub delay: Duration,
}

/// Why a ticket could not be redeemed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum TicketError {
    /// The dropzone was reset after the ticket was issued.
    #[error("ticket was issued before the dropzone was reset")]
    Stale,
    /// The ticket belongs to a different transition.
    #[error("ticket belongs to a {0:?} transition")]
    Mismatch(PendingKind),
}

/// Failures reported by the native file picker.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PickerError {
    /// The user dismissed the picker.
    #[error("file picker was dismissed")]
    Aborted,
    /// The platform refused the picker (permissions, cross-origin frames).
    #[error("file picker is not allowed here")]
    Security,
    /// Any other failure.
    #[error("file picker failed: {0}")]
    Other(String),
}

/// Options handed to the native picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerOptions {
    /// Allow selecting more than one file.
    pub multiple: bool,
    /// Accepted file types.
    pub types: Vec<PickerAcceptType>,
}

/// A request to show the native picker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickerRequest {
    /// Redeem with [`Dropzone::finish_picker`].
    pub pending: Pending,
    /// What to pass to the picker.
    pub options: PickerOptions,
}

/// A side effect the host must perform to show a file dialog.
#[must_use = "the dialog is only shown once the host performs the request"]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DialogRequest {
    /// Show the native picker, then call [`Dropzone::finish_picker`].
    Picker(PickerRequest),
    /// Programmatically click the hidden file input.
    ClickInput,
}

/// Headless dropzone: drag tracking, file-dialog orchestration, and
/// validation of incoming files.
pub struct Dropzone<E: FileEvent, C = ()> {
    config: DropzoneConfig,
    caps: PlatformCaps,
    callbacks: C,
    backend: Backend,
    root: Option<E::Target>,
    drag_targets: DragTargets<E::Target>,
    // Bumped whenever a drag ends.
    drag_epoch: u64,
    state: DropzoneState,
    revision: u64,
    generation: u64,
}

impl<E, C> Dropzone<E, C>
where
    E: FileEvent,
    C: DropzoneCallbacks<E>,
{
    /// Creates a dropzone and selects its dialog backend.
    ///
    /// The picker backend is used when the context is secure, the capability
    /// exists, and [`DropzoneConfig::use_fs_access_api`] is set.
    pub fn new(config: DropzoneConfig, caps: PlatformCaps, callbacks: C) -> Self {
        let backend = if caps.secure_context && caps.file_picker && config.use_fs_access_api {
            Backend::Picker
        } else {
            Backend::Input
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(?backend, "dropzone created");
        Self {
            config,
            caps,
            callbacks,
            backend,
            root: None,
            drag_targets: DragTargets::new(),
            drag_epoch: 0,
            state: DropzoneState::new(),
            revision: 0,
            generation: 0,
        }
    }

    /// Sets the root node. Drag bookkeeping and keyboard activation are
    /// relative to it.
    pub fn set_root(&mut self, root: Option<E::Target>) {
        self.root = root;
    }

    /// The root node, if set.
    pub fn root(&self) -> Option<&E::Target> {
        self.root.as_ref()
    }

    /// The current state.
    pub fn state(&self) -> &DropzoneState {
        &self.state
    }

    /// A counter bumped every time the state changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// `true` while the root has focus and the dropzone is enabled.
    pub fn is_focused(&self) -> bool {
        self.state.is_focused && !self.config.disabled
    }

    /// The dialog backend currently in use.
    pub fn backend(&self) -> Backend {
        self.backend
    }

    /// The configuration.
    pub fn config(&self) -> &DropzoneConfig {
        &self.config
    }

    /// The callbacks.
    pub fn callbacks(&self) -> &C {
        &self.callbacks
    }

    /// The callbacks, mutably.
    pub fn callbacks_mut(&mut self) -> &mut C {
        &mut self.callbacks
    }

    // --- drag -----------------------------------------------------------

    /// Drag entered the root or a descendant.
    ///
    /// Returns a ticket when the event carries files; resolve them and call
    /// [`Self::finish_drag_enter`].
    pub fn drag_enter(&mut self, event: &mut E) -> Option<Pending> {
        if !self.drag_enabled() {
            return None;
        }
        self.claim(event);
        if let Some(target) = event.target() {
            self.drag_targets.enter(target);
        }
        event_carries_files(event).then(|| self.pending(PendingKind::DragEnter))
    }

    /// Completes a drag-enter with the resolved preview files.
    ///
    /// Nothing happens when the drag already ended through a drop or a final
    /// leave, or when propagation was stopped meanwhile (unless
    /// `no_drag_events_bubbling` is set). Otherwise the preview is published,
    /// per-file errors of committed files are cleared, and the drag becomes
    /// active.
    pub fn finish_drag_enter(
        &mut self,
        pending: Pending,
        files: Vec<DropFile>,
        event: &E,
    ) -> Result<(), TicketError> {
        self.redeem(pending, &[PendingKind::DragEnter])?;
        if pending.drag != self.drag_epoch || self.drag_targets.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::trace!("drag ended before its preview resolved");
            return Ok(());
        }
        if !self.still_live(event) {
            return Ok(());
        }
        let accepted = !files.is_empty()
            && all_files_accepted(
                &files,
                &self.config.file_types,
                self.config.min_size,
                self.config.max_size,
                self.config.max_files,
            );
        let rejected = !files.is_empty() && !accepted;
        self.update(|s| {
            for entry in &mut s.files {
                entry.errors.clear();
            }
            s.dragged_files = files;
            s.is_drag_active = true;
            s.is_drag_accept = accepted;
            s.is_drag_reject = rejected;
        });
        self.callbacks
            .on_drag_enter(&self.state.dragged_files, event);
        Ok(())
    }

    /// Drag moved over the root.
    pub fn drag_over(&mut self, event: &mut E) {
        if !self.drag_enabled() {
            return;
        }
        self.claim(event);
        if event_carries_files(event) {
            // Advisory only; some platforms refuse to change the effect.
            let _ = event.set_drop_effect(DropEffect::Copy);
            self.callbacks.on_drag_over(event);
        }
    }

    /// Drag left the root or a descendant.
    ///
    /// Only once no tracked node inside the root still holds the drag does the
    /// drag end: `on_drag_leave` fires with the preview, then the preview is
    /// cleared and the drag becomes inactive.
    pub fn drag_leave(&mut self, event: &mut E, tree: &impl NodeTree<E::Target>) {
        if !self.drag_enabled() {
            return;
        }
        self.claim(event);
        let root = self.root.clone();
        let target = event.target();
        let inside = self.drag_targets.leave(target.as_ref(), |node| {
            root.as_ref().is_some_and(|r| tree.contains(r, node))
        });
        if inside {
            return;
        }
        self.end_drag();
        if event_carries_files(event) {
            self.callbacks
                .on_drag_leave(&self.state.dragged_files, event);
        }
        self.update(clear_drag);
    }

    /// Files were dropped on the root.
    ///
    /// The drag ends immediately. Returns a ticket when the event carries
    /// files; resolve them and call [`Self::finish_drop`].
    pub fn drop(&mut self, event: &mut E) -> Option<Pending> {
        if !self.drag_enabled() {
            return None;
        }
        self.claim(event);
        self.end_drag();
        self.update(clear_drag);
        event_carries_files(event).then(|| self.pending(PendingKind::Drop))
    }

    /// The hidden input's selection changed.
    ///
    /// Returns a ticket when the input holds files; resolve them and call
    /// [`Self::finish_drop`].
    pub fn input_change(&mut self, event: &mut E) -> Option<Pending> {
        if self.config.disabled {
            return None;
        }
        self.claim(event);
        self.end_drag();
        event_carries_files(event).then(|| self.pending(PendingKind::InputChange))
    }

    /// Completes a drop or an input change with the resolved files.
    ///
    /// Runs validate-and-commit unless propagation was stopped meanwhile. An
    /// input change also settles the file dialog.
    pub fn finish_drop(
        &mut self,
        pending: Pending,
        files: Vec<DropFile>,
        event: &E,
    ) -> Result<(), TicketError> {
        self.redeem(pending, &[PendingKind::Drop, PendingKind::InputChange])?;
        if pending.kind == PendingKind::InputChange {
            self.update(|s| s.is_file_dialog_active = false);
        }
        if !self.still_live(event) {
            return Ok(());
        }
        self.commit(files, Some(event));
        Ok(())
    }

    // --- document guards ------------------------------------------------

    /// A drag moved over the document; keeps the platform from navigating.
    pub fn document_drag_over(&mut self, event: &mut E) {
        if self.config.prevent_drop_on_document {
            event.prevent_default();
        }
    }

    /// Something was dropped on the document.
    ///
    /// Drops inside the root are left to [`Self::drop`]. Others are
    /// neutralized and the drag bookkeeping is reset.
    pub fn document_drop(&mut self, event: &mut E, tree: &impl NodeTree<E::Target>) {
        if !self.config.prevent_drop_on_document {
            return;
        }
        if let (Some(root), Some(target)) = (self.root.as_ref(), event.target())
            && tree.contains(root, &target)
        {
            return;
        }
        event.prevent_default();
        self.end_drag();
    }

    // --- focus and keyboard ---------------------------------------------

    /// The root gained focus.
    pub fn focus(&mut self) {
        if self.keyboard_enabled() {
            self.update(|s| s.is_focused = true);
        }
    }

    /// The root lost focus.
    pub fn blur(&mut self) {
        if self.keyboard_enabled() {
            self.update(|s| s.is_focused = false);
        }
    }

    /// A key was pressed on the root or a descendant.
    ///
    /// Space or Enter on the root itself (not a descendant) prevents the
    /// default action and opens the dialog.
    pub fn key_down<K>(&mut self, event: &mut K, key: Key) -> Option<DialogRequest>
    where
        K: InteractionEvent<Target = E::Target>,
    {
        if !self.keyboard_enabled() || !key.activates() {
            return None;
        }
        let on_root = match (self.root.as_ref(), event.target()) {
            (Some(root), Some(target)) => *root == target,
            _ => false,
        };
        if !on_root {
            return None;
        }
        event.prevent_default();
        self.open()
    }

    /// The root was clicked.
    pub fn click(&mut self) -> Option<DialogRequest> {
        if self.config.no_click {
            return None;
        }
        self.open()
    }

    /// The hidden input was clicked; keeps a nested input from re-triggering
    /// the root's click handler.
    pub fn input_click<K: InteractionEvent>(&mut self, event: &mut K) {
        if !self.config.disabled {
            event.stop_propagation();
        }
    }

    // --- file dialog ----------------------------------------------------

    /// Opens the file dialog. Returns `None` when the dropzone is disabled.
    pub fn open(&mut self) -> Option<DialogRequest> {
        if self.config.disabled {
            return None;
        }
        self.update(|s| s.is_file_dialog_active = true);
        self.callbacks.on_file_dialog_open();
        #[cfg(feature = "tracing")]
        tracing::trace!(backend = ?self.backend, "file dialog opened");
        Some(match self.backend {
            Backend::Picker => DialogRequest::Picker(PickerRequest {
                pending: self.pending(PendingKind::Picker),
                options: self.picker_options(),
            }),
            Backend::Input => DialogRequest::ClickInput,
        })
    }

    /// Options for the native picker under the current configuration.
    pub fn picker_options(&self) -> PickerOptions {
        PickerOptions {
            multiple: self.config.max_files != 1,
            types: picker_accept_types(&self.config.file_types),
        }
    }

    /// Completes a native picker session.
    ///
    /// - Success commits the files, then settles the dialog.
    /// - [`PickerError::Aborted`] fires `on_file_dialog_cancel` and settles.
    /// - [`PickerError::Security`] switches to the input backend for good and
    ///   returns [`DialogRequest::ClickInput`]; the dialog stays active.
    /// - Any other failure settles the dialog silently.
    pub fn finish_picker(
        &mut self,
        pending: Pending,
        result: Result<Vec<DropFile>, PickerError>,
    ) -> Result<Option<DialogRequest>, TicketError> {
        self.redeem(pending, &[PendingKind::Picker])?;
        match result {
            Ok(files) => {
                self.commit(files, None);
                self.update(|s| s.is_file_dialog_active = false);
                Ok(None)
            }
            Err(PickerError::Aborted) => {
                self.callbacks.on_file_dialog_cancel();
                self.update(|s| s.is_file_dialog_active = false);
                Ok(None)
            }
            Err(PickerError::Security) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("file picker refused; falling back to the file input");
                self.backend = Backend::Input;
                Ok(Some(DialogRequest::ClickInput))
            }
            Err(PickerError::Other(_reason)) => {
                #[cfg(feature = "tracing")]
                tracing::warn!(reason = %_reason, "file picker failed");
                self.update(|s| s.is_file_dialog_active = false);
                Ok(None)
            }
        }
    }

    /// The window regained focus.
    ///
    /// With the input backend there is no direct cancel signal, so an open
    /// dialog schedules a [`CancelCheck`].
    pub fn window_focus(&mut self) -> Option<CancelCheck> {
        (self.backend == Backend::Input && self.state.is_file_dialog_active).then(|| CancelCheck {
            generation: self.generation,
            delay: FILE_DIALOG_CANCEL_DELAY,
        })
    }

    /// Runs a scheduled cancel check with the number of files the input holds.
    ///
    /// Zero files means the dialog was canceled: the dialog settles and
    /// `on_file_dialog_cancel` fires. Otherwise the dialog settles silently.
    pub fn finish_cancel_check(
        &mut self,
        check: CancelCheck,
        selected_files: usize,
    ) -> Result<(), TicketError> {
        if check.generation != self.generation {
            return Err(TicketError::Stale);
        }
        if !self.state.is_file_dialog_active {
            return Ok(());
        }
        self.update(|s| s.is_file_dialog_active = false);
        if selected_files == 0 {
            self.callbacks.on_file_dialog_cancel();
        }
        Ok(())
    }

    // --- committed list -------------------------------------------------

    /// Removes the committed entry at `index`. No callback fires.
    pub fn remove_file(&mut self, index: usize) -> Option<FileEntry> {
        if index >= self.state.files.len() {
            return None;
        }
        let mut removed = None;
        self.update(|s| removed = Some(s.files.remove(index)));
        removed
    }

    /// Restores the initial state. No callback fires.
    ///
    /// Tickets and cancel checks issued before the reset become stale. The
    /// dialog backend is kept.
    pub fn destroy(&mut self) {
        self.end_drag();
        self.generation = self.generation.wrapping_add(1);
        if self.state != DropzoneState::new() {
            self.state = DropzoneState::new();
            self.bump_revision();
        }
    }

    // --- bindings -------------------------------------------------------

    /// Which handlers to bind on the root, plus attribute hints.
    pub fn root_props(&self) -> RootProps {
        let mut handlers = RootHandlers::all();
        if self.config.disabled {
            handlers = RootHandlers::empty();
        }
        if self.config.no_keyboard {
            handlers.remove(RootHandlers::KEYBOARD);
        }
        if self.config.no_drag {
            handlers.remove(RootHandlers::DRAG);
        }
        RootProps {
            handlers,
            tab_index: self.keyboard_enabled().then_some(0),
            cursor: if self.caps.file_picker {
                Cursor::Pointer
            } else {
                Cursor::Default
            },
        }
    }

    /// Which handlers and attributes to set on the hidden file input.
    pub fn input_props(&self) -> InputProps {
        InputProps {
            accept: if self.config.file_types.is_all() {
                String::new()
            } else {
                self.config.file_types.to_string()
            },
            input_type: "file",
            hidden: true,
            tab_index: -1,
            auto_complete: "off",
            multiple: self.config.max_files != 1,
            handlers: if self.config.disabled {
                InputHandlers::empty()
            } else {
                InputHandlers::all()
            },
        }
    }

    // --- internals ------------------------------------------------------

    fn drag_enabled(&self) -> bool {
        !self.config.disabled && !self.config.no_drag
    }

    fn keyboard_enabled(&self) -> bool {
        !self.config.disabled && !self.config.no_keyboard
    }

    fn claim(&self, event: &mut E) {
        event.prevent_default();
        if self.config.no_drag_events_bubbling {
            event.stop_propagation();
        }
    }

    fn still_live(&self, event: &E) -> bool {
        self.config.no_drag_events_bubbling || !propagation_stopped(event)
    }

    fn pending(&self, kind: PendingKind) -> Pending {
        Pending {
            kind,
            generation: self.generation,
            drag: self.drag_epoch,
        }
    }

    fn end_drag(&mut self) {
        self.drag_targets.clear();
        self.drag_epoch = self.drag_epoch.wrapping_add(1);
    }

    fn redeem(&self, pending: Pending, kinds: &[PendingKind]) -> Result<(), TicketError> {
        if pending.generation != self.generation {
            #[cfg(feature = "tracing")]
            tracing::debug!(kind = ?pending.kind, "discarding stale dropzone ticket");
            return Err(TicketError::Stale);
        }
        if !kinds.contains(&pending.kind) {
            return Err(TicketError::Mismatch(pending.kind));
        }
        Ok(())
    }

    fn commit(&mut self, files: Vec<DropFile>, event: Option<&E>) {
        let Some(commit) = validate_batch(&self.state.files, files, &self.config) else {
            return;
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(
            committed = commit.files.len(),
            too_many_files = commit.too_many_files.is_some(),
            "dropzone batch committed"
        );
        self.update(|s| s.files = commit.files);
        self.callbacks
            .on_drop(&self.state.files, commit.too_many_files.as_ref(), event);
    }

    fn update(&mut self, f: impl FnOnce(&mut DropzoneState)) {
        let mut next = self.state.clone();
        f(&mut next);
        if next != self.state {
            self.state = next;
            self.bump_revision();
        }
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

fn clear_drag(s: &mut DropzoneState) {
    s.is_drag_active = false;
    s.is_drag_accept = false;
    s.is_drag_reject = false;
    s.dragged_files.clear();
}

impl<E: FileEvent, C> fmt::Debug for Dropzone<E, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dropzone")
            .field("config", &self.config)
            .field("caps", &self.caps)
            .field("backend", &self.backend)
            .field("state", &self.state)
            .field("revision", &self.revision)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}
