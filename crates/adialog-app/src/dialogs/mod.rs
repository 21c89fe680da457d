//! Awaitable dialog builders
//!
//! Every builder follows the same lifecycle: build a fresh element, attach
//! it to the document, await its close through [`await_result`], turn the
//! field map into a typed value, then detach. Detaching is tied to an
//! [`AttachedModal`](adialog_host::AttachedModal) guard, so it also happens
//! when the returned future is dropped mid-wait.

mod alert;
mod confirm;
mod prompt;
mod select;

pub use select::SELECT_FIELD;

use adialog_core::prelude::*;
use adialog_core::{FieldMap, RETURN_CANCEL, RETURN_OK};
use adialog_host::{await_result, next_modal_id, Button, Document, ModalElement};

use crate::classes;
use crate::config::Settings;
use crate::options::DialogOptions;

/// Which builder made an element; sets its id prefix and kind class
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    Alert,
    Confirm,
    Select,
    Prompt,
}

impl DialogKind {
    pub fn prefix(&self) -> &'static str {
        self.class()
    }

    pub fn class(&self) -> &'static str {
        match self {
            DialogKind::Alert => classes::ALERT,
            DialogKind::Confirm => classes::CONFIRM,
            DialogKind::Select => classes::SELECT,
            DialogKind::Prompt => classes::PROMPT,
        }
    }
}

/// Entry point for the awaitable dialogs
#[derive(Debug, Clone, Default)]
pub struct Dialogs {
    document: Document,
    settings: Settings,
}

impl Dialogs {
    pub fn new(document: Document) -> Self {
        Self::with_settings(document, Settings::default())
    }

    pub fn with_settings(document: Document, settings: Settings) -> Self {
        Self { document, settings }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Title, message and classes shared by every dialog kind
    pub(crate) fn frame(&self, kind: DialogKind, options: &DialogOptions) -> ModalElement {
        ModalElement::new(next_modal_id(kind.prefix()))
            .with_classes([classes::ASYNC_DIALOG, kind.class()])
            .with_classes(self.settings.style.class_name.as_deref())
            .with_classes(options.class_name.as_deref())
            .with_title(&options.title)
            .push_text(None, &options.message)
    }

    pub(crate) fn ok_button(&self, options: &DialogOptions) -> Button {
        let label = label_or(options.ok_text.as_deref(), &self.settings.labels.ok);
        Button::new(RETURN_OK, label).with_class(classes::OK)
    }

    /// Cancel never runs constraint validation
    pub(crate) fn cancel_button(&self, options: &DialogOptions) -> Button {
        let label = label_or(options.cancel_text.as_deref(), &self.settings.labels.cancel);
        Button::new(RETURN_CANCEL, label)
            .with_class(classes::CANCEL)
            .novalidate()
    }

    /// Attach `element`, wait for it to close, detach it again
    pub(crate) async fn run(&self, element: ModalElement) -> Result<Option<FieldMap>> {
        let attached = self.document.attach(element);
        let waiting = await_result(&self.document, attached.id())?;
        let fields = waiting.await;
        debug!(
            "Dialog {} settled ({})",
            attached.id(),
            if fields.is_some() { "accepted" } else { "declined" }
        );
        Ok(fields)
    }
}

/// Per-call label, falling back to the configured default when unset or empty
fn label_or(custom: Option<&str>, default: &str) -> String {
    custom.filter(|s| !s.is_empty()).unwrap_or(default).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use adialog_host::test_utils::{wait_for_modal, wait_for_open};

    use crate::config::Labels;
    use crate::options::{PromptOptions, SelectOptions, TextPrompt};

    #[test]
    fn test_frame_classes_and_text() {
        let dialogs = Dialogs::new(Document::new());
        let options = DialogOptions::new("Title", "Body").with_class_name("wide danger");
        let element = dialogs.frame(DialogKind::Confirm, &options);

        assert!(element.id().as_str().starts_with("ad-confirm-"));
        assert_eq!(
            element.classes(),
            &["async-dialog", "ad-confirm", "wide", "danger"]
        );
        assert_eq!(element.title(), "Title");
    }

    #[test]
    fn test_labels_fall_back_to_settings() {
        let mut settings = Settings::default();
        settings.labels = Labels {
            ok: "Yes".into(),
            cancel: "No".into(),
        };
        settings.style.class_name = Some("global".into());
        let dialogs = Dialogs::with_settings(Document::new(), settings);

        let plain = DialogOptions::default();
        assert_eq!(dialogs.ok_button(&plain).label, "Yes");
        assert_eq!(dialogs.cancel_button(&plain).label, "No");

        let custom = DialogOptions::default().with_ok_text("Go").with_cancel_text("");
        assert_eq!(dialogs.ok_button(&custom).label, "Go");
        assert_eq!(dialogs.cancel_button(&custom).label, "No");

        let element = dialogs.frame(DialogKind::Alert, &plain);
        assert_eq!(element.classes(), &["async-dialog", "ad-alert", "global"]);
    }

    #[test]
    fn test_cancel_is_novalidate() {
        let dialogs = Dialogs::new(Document::new());
        let cancel = dialogs.cancel_button(&DialogOptions::default());
        assert_eq!(cancel.value, RETURN_CANCEL);
        assert!(cancel.novalidate);
        assert!(!dialogs.ok_button(&DialogOptions::default()).novalidate);
    }

    #[tokio::test]
    async fn test_concurrent_builders_settle_independently() {
        let document = Document::new();
        let dialogs = Dialogs::new(document.clone());
        let select = SelectOptions::new(DialogOptions::new("Pick", ""), ["a", "b"]);

        let (confirmed, selected, _) = tokio::join!(
            dialogs.confirm(DialogOptions::new("Sure?", "")),
            dialogs.select(select),
            async {
                let open = wait_for_open(&document, 2).await;
                let (confirm_id, select_id) = if open[0].as_str().starts_with("ad-confirm-") {
                    (open[0].clone(), open[1].clone())
                } else {
                    (open[1].clone(), open[0].clone())
                };
                assert_ne!(confirm_id, select_id);

                document.dismiss(&select_id).unwrap();
                document.accept(&confirm_id).unwrap();
            }
        );

        assert!(confirmed.unwrap());
        assert_eq!(selected.unwrap(), None);
        assert!(document.is_empty());
    }

    #[tokio::test]
    async fn test_dropping_pending_builder_detaches_element() {
        let document = Document::new();
        let dialogs = Dialogs::new(document.clone());
        let pending = dialogs.prompt(PromptOptions::String(TextPrompt::default()));

        tokio::select! {
            _ = pending => panic!("prompt settled without being answered"),
            id = wait_for_modal(&document) => assert!(document.contains(&id)),
        }

        assert!(document.is_empty());
    }
}
