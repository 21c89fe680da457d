//! Terminal host loop
//!
//! Drives a dialog future while presenting whatever modal is open on top of
//! the document and feeding key presses to it.

use std::future::Future;

use futures_util::FutureExt;
use ratatui::{DefaultTerminal, Frame};

use adialog_core::prelude::*;
use adialog_host::Document;

use crate::controller::ModalController;
use crate::theme::StyleSheet;
use crate::widgets::ModalView;
use crate::{event, terminal};

/// Run `dialog` to completion in the terminal and return its result.
///
/// The terminal is restored on every exit path, including panics.
pub async fn run_dialog<F, T>(document: &Document, styles: &StyleSheet, dialog: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    terminal::install_panic_hook();
    let mut term = ratatui::init();

    let result = run_loop(&mut term, document, styles, dialog).await;

    ratatui::restore();
    result
}

async fn run_loop<F, T>(
    terminal: &mut DefaultTerminal,
    document: &Document,
    styles: &StyleSheet,
    dialog: F,
) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let mut dialog = std::pin::pin!(dialog);
    let mut controller: Option<ModalController> = None;

    loop {
        if let Some(result) = dialog.as_mut().now_or_never() {
            return result;
        }

        sync_controller(document, &mut controller);
        terminal.draw(|frame| view(frame, document, styles, controller.as_ref()))?;

        if let Some(key) = event::poll()? {
            if let Some(active) = controller.as_mut() {
                if let Err(e) = active.handle_key(key) {
                    warn!("Key {:?} on modal {} failed: {}", key, active.id(), e);
                }
            }
        }
        tokio::task::yield_now().await;
    }
}

/// Point the controller at the topmost open modal
fn sync_controller(document: &Document, controller: &mut Option<ModalController>) {
    let top = document.topmost_open();
    let current = controller.as_ref().map(ModalController::id);
    if current == top.as_ref() {
        return;
    }

    *controller = top.and_then(|id| match ModalController::new(document, &id) {
        Ok(c) => {
            debug!("Presenting modal {}", id);
            Some(c)
        }
        Err(e) => {
            warn!("Cannot present modal {}: {}", id, e);
            None
        }
    });
}

/// Draw the controlled modal, if any
pub fn view(
    frame: &mut Frame,
    document: &Document,
    styles: &StyleSheet,
    controller: Option<&ModalController>,
) {
    let Some(controller) = controller else {
        return;
    };
    let area = frame.area();
    let drawn = document.with_modal(controller.id(), |modal| {
        let widget = ModalView::new(modal, styles)
            .focus(controller.focus())
            .hint(controller.hint());
        frame.render_widget(widget, area);
    });
    if let Err(e) = drawn {
        trace!("Nothing to draw: {}", e);
    }
}
