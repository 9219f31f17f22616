// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event shapes the dropzone consumes, plus classification helpers.
//!
//! The dropzone does not depend on any particular UI toolkit. Hosts implement
//! [`InteractionEvent`] (and [`FileEvent`] for drag and input-change events) on
//! their own event wrappers. Only the capabilities the state machine needs are
//! required; everything else has a default.
//!
//! ## Propagation markers
//!
//! Event sources report "propagation stopped" in one of two ways: a query
//! method ([`InteractionEvent::is_propagation_stopped`]) or a legacy flag
//! ([`InteractionEvent::cancel_bubble`]). [`propagation_stopped`] consults the
//! method first, then the flag, and otherwise assumes propagation continues.
//!
//! ## Handler chains
//!
//! [`Chain`] runs an ordered list of handlers over one event and stops as soon
//! as one of them stops propagation:
//!
//! ```
//! use understory_dropzone::event::{Chain, InteractionEvent};
//!
//! #[derive(Default)]
//! struct Ev { stopped: bool, seen: Vec<u8> }
//! impl InteractionEvent for Ev {
//!     type Target = u32;
//!     fn target(&self) -> Option<u32> { None }
//!     fn prevent_default(&mut self) {}
//!     fn stop_propagation(&mut self) { self.stopped = true; }
//!     fn is_propagation_stopped(&self) -> Option<bool> { Some(self.stopped) }
//! }
//!
//! let mut ev = Ev::default();
//! let stopped = Chain::new()
//!     .then(|e: &mut Ev| e.seen.push(1))
//!     .then(|e: &mut Ev| { e.seen.push(2); e.stop_propagation(); })
//!     .then(|e: &mut Ev| e.seen.push(3))
//!     .run(&mut ev);
//! assert!(stopped);
//! assert_eq!(ev.seen, [1, 2]);
//! ```

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use thiserror::Error;

/// Drag payload type tag announcing files.
pub const FILES_TYPE: &str = "Files";

/// Legacy drag payload type tag announcing files.
pub const LEGACY_FILES_TYPE: &str = crate::accept::PSEUDO_FILE_MIME;

/// Minimal event surface shared by every event the dropzone handles.
pub trait InteractionEvent {
    /// Identity of the node the event was dispatched to.
    type Target: Clone + PartialEq;

    /// The node the event was dispatched to, if any.
    fn target(&self) -> Option<Self::Target>;

    /// Suppresses the platform's default action (navigation, file opening).
    fn prevent_default(&mut self);

    /// Stops the event from reaching further handlers.
    fn stop_propagation(&mut self);

    /// Method-style propagation marker; `None` if the source has none.
    fn is_propagation_stopped(&self) -> Option<bool> {
        None
    }

    /// Flag-style propagation marker; `None` if the source has none.
    fn cancel_bubble(&self) -> Option<bool> {
        None
    }
}

/// Visual hint for the drop operation, set on drag-over.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum DropEffect {
    /// No drop allowed.
    #[default]
    None,
    /// Files will be copied.
    Copy,
    /// Files will be linked.
    Link,
    /// Files will be moved.
    Move,
}

/// The platform refused to update the drop-effect hint.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("drop effect cannot be set on this event")]
pub struct DropEffectError;

/// An event that may carry files: drag events and input-change events.
pub trait FileEvent: InteractionEvent {
    /// Type tags of the drag payload; `None` for non-drag events.
    fn drag_types(&self) -> Option<&[String]>;

    /// Number of files selected on the event target (input-change events);
    /// `None` when the target exposes no file list.
    fn target_file_count(&self) -> Option<usize> {
        None
    }

    /// Sets the drop-effect hint. Some platforms forbid this.
    fn set_drop_effect(&mut self, effect: DropEffect) -> Result<(), DropEffectError> {
        let _ = effect;
        Ok(())
    }
}

/// Keys that matter for keyboard activation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Key {
    /// The space bar.
    Space,
    /// Enter or Return.
    Enter,
    /// Anything else.
    Other,
}

impl Key {
    /// Returns `true` for the keys that open the file dialog.
    #[must_use]
    pub fn activates(self) -> bool {
        matches!(self, Self::Space | Self::Enter)
    }
}

/// Returns `true` if `event` carries files.
///
/// Drag events qualify when their payload announces [`FILES_TYPE`] or
/// [`LEGACY_FILES_TYPE`]. Other events qualify when their target exposes a
/// non-empty file list.
pub fn event_carries_files<E: FileEvent + ?Sized>(event: &E) -> bool {
    match event.drag_types() {
        Some(types) => types
            .iter()
            .any(|t| t == FILES_TYPE || t == LEGACY_FILES_TYPE),
        None => event.target_file_count().is_some_and(|n| n > 0),
    }
}

/// Returns `true` if `event` reports stopped propagation by either marker.
pub fn propagation_stopped<E: InteractionEvent + ?Sized>(event: &E) -> bool {
    event
        .is_propagation_stopped()
        .or_else(|| event.cancel_bubble())
        .unwrap_or(false)
}

/// An ordered list of handlers run over one event until propagation stops.
pub struct Chain<'a, E> {
    handlers: Vec<Box<dyn FnMut(&mut E) + 'a>>,
}

impl<'a, E: InteractionEvent> Chain<'a, E> {
    /// Creates an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Appends a handler.
    #[must_use]
    pub fn then(mut self, handler: impl FnMut(&mut E) + 'a) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Returns the number of handlers in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if the chain has no handlers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Runs handlers in order, skipping the rest once propagation is stopped.
    ///
    /// Returns `true` if propagation ended up stopped. A handler never runs on
    /// an event whose propagation was already stopped.
    pub fn run(&mut self, event: &mut E) -> bool {
        for handler in &mut self.handlers {
            if propagation_stopped(event) {
                return true;
            }
            handler(event);
        }
        propagation_stopped(event)
    }
}

impl<E: InteractionEvent> Default for Chain<'_, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Chain<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chain")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    #[derive(Default)]
    struct Ev {
        types: Option<Vec<String>>,
        files: Option<usize>,
        method: Option<bool>,
        flag: Option<bool>,
        log: Vec<&'static str>,
    }

    impl InteractionEvent for Ev {
        type Target = u32;
        fn target(&self) -> Option<u32> {
            None
        }
        fn prevent_default(&mut self) {}
        fn stop_propagation(&mut self) {
            self.method = Some(true);
        }
        fn is_propagation_stopped(&self) -> Option<bool> {
            self.method
        }
        fn cancel_bubble(&self) -> Option<bool> {
            self.flag
        }
    }

    impl FileEvent for Ev {
        fn drag_types(&self) -> Option<&[String]> {
            self.types.as_deref()
        }
        fn target_file_count(&self) -> Option<usize> {
            self.files
        }
    }

    fn drag(types: &[&str]) -> Ev {
        Ev {
            types: Some(types.iter().map(|t| t.to_string()).collect()),
            ..Ev::default()
        }
    }

    #[test]
    fn drag_payload_with_files_tag_carries_files() {
        assert!(event_carries_files(&drag(&["text/plain", "Files"])));
        assert!(event_carries_files(&drag(&[LEGACY_FILES_TYPE])));
        assert!(!event_carries_files(&drag(&["text/plain"])));
        assert!(!event_carries_files(&drag(&[])));
    }

    #[test]
    fn drag_payload_ignores_target_file_list() {
        let mut ev = drag(&["text/uri-list"]);
        ev.files = Some(3);
        assert!(!event_carries_files(&ev));
    }

    #[test]
    fn change_event_uses_target_file_list() {
        let mut ev = Ev::default();
        assert!(!event_carries_files(&ev));
        ev.files = Some(0);
        assert!(!event_carries_files(&ev));
        ev.files = Some(2);
        assert!(event_carries_files(&ev));
    }

    #[test]
    fn method_marker_takes_precedence_over_flag() {
        let mut ev = Ev::default();
        assert!(!propagation_stopped(&ev));
        ev.flag = Some(true);
        assert!(propagation_stopped(&ev));
        ev.method = Some(false);
        assert!(!propagation_stopped(&ev));
    }

    #[test]
    fn chain_runs_all_when_nothing_stops() {
        let mut ev = Ev::default();
        let stopped = Chain::new()
            .then(|e: &mut Ev| e.log.push("a"))
            .then(|e: &mut Ev| e.log.push("b"))
            .run(&mut ev);
        assert!(!stopped);
        assert_eq!(ev.log, vec!["a", "b"]);
    }

    #[test]
    fn chain_short_circuits_on_stop() {
        let mut ev = Ev::default();
        let mut chain = Chain::new()
            .then(|e: &mut Ev| {
                e.log.push("a");
                e.stop_propagation();
            })
            .then(|e: &mut Ev| e.log.push("b"));
        assert_eq!(chain.len(), 2);
        assert!(chain.run(&mut ev));
        assert_eq!(ev.log, vec!["a"]);
    }

    #[test]
    fn chain_skips_everything_on_already_stopped_event() {
        let mut ev = Ev {
            flag: Some(true),
            ..Ev::default()
        };
        let stopped = Chain::new().then(|e: &mut Ev| e.log.push("a")).run(&mut ev);
        assert!(stopped);
        assert!(ev.log.is_empty());
    }

    #[test]
    fn activation_keys() {
        assert!(Key::Space.activates());
        assert!(Key::Enter.activates());
        assert!(!Key::Other.activates());
    }
}
