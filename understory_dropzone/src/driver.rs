// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Async glue for hosts that run the dropzone inside a [`RefCell`].
//!
//! Each helper runs the begin half of a transition, releases the borrow while
//! files resolve, and then finishes the transition. Other events may be
//! dispatched to the same dropzone while a helper is suspended.
//!
//! ```
//! use core::cell::RefCell;
//! use understory_dropzone::{DropFile, Dropzone, DropzoneConfig, PlatformCaps};
//! use understory_dropzone::driver::{self, FilePicker};
//! use understory_dropzone::PickerOptions;
//! use understory_dropzone::PickerError;
//! # use understory_dropzone::event::{FileEvent, InteractionEvent};
//! # struct Ev;
//! # impl InteractionEvent for Ev {
//! #     type Target = u32;
//! #     fn target(&self) -> Option<u32> { None }
//! #     fn prevent_default(&mut self) {}
//! #     fn stop_propagation(&mut self) {}
//! # }
//! # impl FileEvent for Ev {
//! #     fn drag_types(&self) -> Option<&[String]> { None }
//! # }
//!
//! struct Picker;
//! impl FilePicker for Picker {
//!     async fn pick(&mut self, _: &PickerOptions) -> Result<Vec<DropFile>, PickerError> {
//!         Ok(vec![DropFile::new("notes.txt", 12, "text/plain")])
//!     }
//!     fn click_input(&mut self) {}
//! }
//!
//! let caps = PlatformCaps { secure_context: true, file_picker: true };
//! let zone: RefCell<Dropzone<Ev>> =
//!     RefCell::new(Dropzone::new(DropzoneConfig::default(), caps, ()));
//! pollster::block_on(driver::open(&zone, &mut Picker)).unwrap();
//! assert_eq!(zone.borrow().state().files[0].file.path.as_deref(), Some("notes.txt"));
//! ```

use alloc::vec::Vec;
use core::cell::RefCell;
use core::future::Future;

use crate::dropzone::{
    DialogRequest, Dropzone, DropzoneCallbacks, PickerError, PickerOptions, PickerRequest,
    TicketError,
};
use crate::event::FileEvent;
use crate::file::DropFile;
use crate::normalize::{ExtractFiles, extract_files, normalize};

/// The host side of the file dialog.
pub trait FilePicker {
    /// Shows the native picker and resolves the chosen files.
    fn pick(
        &mut self,
        options: &PickerOptions,
    ) -> impl Future<Output = Result<Vec<DropFile>, PickerError>>;

    /// Programmatically clicks the hidden file input.
    fn click_input(&mut self);
}

/// Runs a drag-enter to completion.
pub async fn drag_enter<E, C, X>(
    zone: &RefCell<Dropzone<E, C>>,
    event: &mut E,
    extractor: &mut X,
) -> Result<(), TicketError>
where
    E: FileEvent,
    C: DropzoneCallbacks<E>,
    X: ExtractFiles<E>,
{
    let Some(pending) = zone.borrow_mut().drag_enter(event) else {
        return Ok(());
    };
    let files = extract_files(extractor, &*event).await;
    zone.borrow_mut().finish_drag_enter(pending, files, event)
}

/// Runs a drop to completion.
pub async fn drop<E, C, X>(
    zone: &RefCell<Dropzone<E, C>>,
    event: &mut E,
    extractor: &mut X,
) -> Result<(), TicketError>
where
    E: FileEvent,
    C: DropzoneCallbacks<E>,
    X: ExtractFiles<E>,
{
    let Some(pending) = zone.borrow_mut().drop(event) else {
        return Ok(());
    };
    let files = extract_files(extractor, &*event).await;
    zone.borrow_mut().finish_drop(pending, files, event)
}

/// Runs a hidden-input change to completion.
pub async fn input_change<E, C, X>(
    zone: &RefCell<Dropzone<E, C>>,
    event: &mut E,
    extractor: &mut X,
) -> Result<(), TicketError>
where
    E: FileEvent,
    C: DropzoneCallbacks<E>,
    X: ExtractFiles<E>,
{
    let Some(pending) = zone.borrow_mut().input_change(event) else {
        return Ok(());
    };
    let files = extract_files(extractor, &*event).await;
    zone.borrow_mut().finish_drop(pending, files, event)
}

/// Opens the file dialog and runs it to completion.
pub async fn open<E, C, P>(zone: &RefCell<Dropzone<E, C>>, picker: &mut P) -> Result<(), TicketError>
where
    E: FileEvent,
    C: DropzoneCallbacks<E>,
    P: FilePicker,
{
    let request = zone.borrow_mut().open();
    perform(zone, request, picker).await
}

/// Performs a dialog request, following a fallback to the file input.
///
/// Use this for the requests returned by [`Dropzone::click`] and
/// [`Dropzone::key_down`].
pub async fn perform<E, C, P>(
    zone: &RefCell<Dropzone<E, C>>,
    mut request: Option<DialogRequest>,
    picker: &mut P,
) -> Result<(), TicketError>
where
    E: FileEvent,
    C: DropzoneCallbacks<E>,
    P: FilePicker,
{
    while let Some(next) = request.take() {
        match next {
            DialogRequest::ClickInput => picker.click_input(),
            DialogRequest::Picker(PickerRequest { pending, options }) => {
                let result = picker.pick(&options).await.map(normalize);
                request = zone.borrow_mut().finish_picker(pending, result)?;
            }
        }
    }
    Ok(())
}
