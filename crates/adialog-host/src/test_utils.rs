//! Helpers for driving dialogs from tests
//!
//! Dialog functions suspend until their modal closes, so a test runs them
//! alongside a "user" future (`tokio::join!`) that waits for the modal to
//! open and then clicks, types or dismisses through the [`Document`].

use std::time::Duration;

use adialog_core::ModalId;

use crate::document::Document;

/// How long to wait for a dialog to open before failing the test
pub const OPEN_TIMEOUT: Duration = Duration::from_secs(5);

/// Wait until at least `count` modals are open and return them
pub async fn wait_for_open(document: &Document, count: usize) -> Vec<ModalId> {
    let poll = async {
        loop {
            let open = document.open_modals();
            if open.len() >= count {
                return open;
            }
            tokio::task::yield_now().await;
        }
    };
    tokio::time::timeout(OPEN_TIMEOUT, poll)
        .await
        .unwrap_or_else(|_| panic!("expected {count} open modal(s) within {OPEN_TIMEOUT:?}"))
}

/// Wait for the single open modal
pub async fn wait_for_modal(document: &Document) -> ModalId {
    wait_for_open(document, 1).await.remove(0)
}

/// Index of the first control whose value is `value`
pub fn control_with_value(document: &Document, id: &ModalId, value: &str) -> usize {
    document
        .with_modal(id, |m| m.controls().position(|c| c.value() == value))
        .expect("modal is attached")
        .unwrap_or_else(|| panic!("no control with value {value:?} in {id}"))
}
