//! The await protocol: turn a modal's close into a settled value
//!
//! [`await_result`] resolves the element and opens it right away, then hands
//! back a future that settles exactly once with either the field mapping
//! (closed with `ok`) or `None` (any other close). The future never fails;
//! only an unknown or already-open modal is reported, before any waiting.

use std::future::Future;

use adialog_core::prelude::*;
use adialog_core::{FieldMap, ModalId};

use crate::adapter::ModalHostAdapter;
use crate::document::Document;

/// Open the modal `id` and wait for it to close.
///
/// Returns `Err` immediately when no element with `id` is attached or it is
/// already open. The returned future yields `Some(fields)` when the modal was
/// accepted with `ok`, and `None` for cancel, dismissal, or an extraction
/// failure (logged). The element is hidden before the future completes,
/// whatever the outcome.
pub fn await_result(
    document: &Document,
    id: &ModalId,
) -> Result<impl Future<Output = Option<FieldMap>> + Send + 'static> {
    let adapter = ModalHostAdapter::bind(document, id)?;
    let closed = adapter.open()?;

    Ok(async move {
        let outcome = match closed.closed().await {
            Ok(event) if event.is_ok() => match adapter.form_data() {
                Ok(fields) => {
                    debug!("Modal {} accepted with {} field(s)", adapter.id(), fields.len());
                    Some(fields)
                }
                Err(e) => {
                    error!("{}", e);
                    None
                }
            },
            Ok(event) => {
                debug!(
                    "Modal {} declined ({})",
                    adapter.id(),
                    event.return_value.as_deref().unwrap_or("no signal")
                );
                None
            }
            Err(e) => {
                warn!("{}", e);
                None
            }
        };
        adapter.hide();
        outcome
    })
}
