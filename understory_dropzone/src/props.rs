// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Binding descriptions for the root element and the hidden file input.
//!
//! The dropzone does not touch any element. Instead it describes which
//! handlers the host should wire up and which attributes to set; handlers that
//! the configuration disables are simply absent from the sets.

use alloc::string::String;

use bitflags::bitflags;

bitflags! {
    /// Handlers to bind on the root element.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct RootHandlers: u8 {
        /// Key presses (keyboard activation).
        const KEY_DOWN = 1 << 0;
        /// Focus gained.
        const FOCUS = 1 << 1;
        /// Focus lost.
        const BLUR = 1 << 2;
        /// Pointer click (open the dialog).
        const CLICK = 1 << 3;
        /// Drag enters the root or a descendant.
        const DRAG_ENTER = 1 << 4;
        /// Drag moves over the root.
        const DRAG_OVER = 1 << 5;
        /// Drag leaves the root or a descendant.
        const DRAG_LEAVE = 1 << 6;
        /// Files are dropped.
        const DROP = 1 << 7;

        /// Handlers gated by `no_keyboard`.
        const KEYBOARD = Self::KEY_DOWN.bits() | Self::FOCUS.bits() | Self::BLUR.bits();
        /// Handlers gated by `no_drag`.
        const DRAG = Self::DRAG_ENTER.bits()
            | Self::DRAG_OVER.bits()
            | Self::DRAG_LEAVE.bits()
            | Self::DROP.bits();
    }
}

bitflags! {
    /// Handlers to bind on the hidden file input.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct InputHandlers: u8 {
        /// Selection changed.
        const CHANGE = 1 << 0;
        /// Click; stops propagation so a nested input does not re-open the dialog.
        const CLICK = 1 << 1;
    }
}

/// Pointer affordance hint for the root element.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum Cursor {
    /// Leave the cursor alone.
    #[default]
    Default,
    /// Show a pointer cursor.
    Pointer,
}

/// What to bind on the root element.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RootProps {
    /// Handlers to bind.
    pub handlers: RootHandlers,
    /// `Some(0)` when keyboard interaction is enabled.
    pub tab_index: Option<i32>,
    /// Cursor hint.
    pub cursor: Cursor,
}

/// What to bind on the hidden file input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputProps {
    /// Value for the input's `accept` attribute.
    pub accept: String,
    /// Always `"file"`.
    pub input_type: &'static str,
    /// Always `true`: the input is never displayed.
    pub hidden: bool,
    /// Always `-1`: the input is not keyboard-focusable.
    pub tab_index: i32,
    /// Always `"off"`.
    pub auto_complete: &'static str,
    /// Allow selecting more than one file.
    pub multiple: bool,
    /// Handlers to bind.
    pub handlers: InputHandlers,
}
