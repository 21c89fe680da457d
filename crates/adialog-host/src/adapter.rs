//! Modal host adapter: opens one element modally and reports its closing
//!
//! This module also owns the process-wide modal identifier generator.

use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::oneshot;

use adialog_core::prelude::*;
use adialog_core::{CloseEvent, FieldMap, ModalId};

use crate::document::Document;

/// Global modal ID counter
static MODAL_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Generate a modal ID such as `ad-confirm-7`
pub fn next_modal_id(prefix: &str) -> ModalId {
    let n = MODAL_ID_COUNTER.fetch_add(1, Ordering::SeqCst);
    ModalId::new(format!("{prefix}-{n}"))
}

/// Wraps a single attached, modal-capable element
#[derive(Debug, Clone)]
pub struct ModalHostAdapter {
    document: Document,
    id: ModalId,
}

impl ModalHostAdapter {
    /// Resolve `id` in `document`
    pub fn bind(document: &Document, id: &ModalId) -> Result<Self> {
        if !document.contains(id) {
            return Err(Error::modal_not_found(id));
        }
        Ok(Self {
            document: document.clone(),
            id: id.clone(),
        })
    }

    pub fn id(&self) -> &ModalId {
        &self.id
    }

    /// Present the element modally and listen for its close.
    ///
    /// Does not wait: the returned notification completes once, when a
    /// control, a dismissal or a programmatic close ends the presentation.
    pub fn open(&self) -> Result<CloseNotification> {
        let (tx, rx) = oneshot::channel();
        self.document.with_modal_mut(&self.id, |modal| {
            modal.show_modal()?;
            modal.add_close_listener(tx);
            Ok::<_, Error>(())
        })??;
        debug!("Opened modal {}", self.id);

        Ok(CloseNotification {
            id: self.id.clone(),
            rx,
        })
    }

    /// Force the element out of view
    pub fn hide(&self) {
        if self.document.with_modal_mut(&self.id, |modal| modal.hide()).is_err() {
            trace!("Modal {} already detached, nothing to hide", self.id);
        }
    }

    /// Read the element's field mapping as it is right now
    pub fn form_data(&self) -> Result<FieldMap> {
        self.document
            .with_modal(&self.id, |modal| modal.form_data())
            .map_err(|e| Error::extraction(&self.id, e.to_string()))
    }
}

/// Single-use notification that a modal closed
#[derive(Debug)]
pub struct CloseNotification {
    id: ModalId,
    rx: oneshot::Receiver<CloseEvent>,
}

impl CloseNotification {
    /// Wait for the close event.
    ///
    /// Fails only when the element was detached while still open, which
    /// drops its listener.
    pub async fn closed(self) -> Result<CloseEvent> {
        self.rx.await.map_err(|_| Error::modal_detached(&self.id))
    }
}
