//! Declarative dialog widget
//!
//! `AsyncDialog` describes the standard dialog shape (title, body, Cancel
//! and OK buttons) for composition into a larger screen. It never waits on
//! anything itself; [`AsyncDialog::element`] produces the matching modal
//! element for callers that want to attach it and await it with
//! [`adialog_host::await_result`].

use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use adialog_app::classes;
use adialog_core::{ModalId, RETURN_CANCEL, RETURN_OK};
use adialog_host::{Button, ModalElement};

use super::modal_view::ModalView;
use crate::theme::StyleSheet;

const DEFAULT_OK: &str = "OK";
const DEFAULT_CANCEL: &str = "Cancel";

#[derive(Debug, Clone)]
pub struct AsyncDialog<'a> {
    id: ModalId,
    title: String,
    body: Vec<String>,
    class_name: Option<String>,
    ok_text: Option<String>,
    cancel_text: Option<String>,
    styles: Option<&'a StyleSheet>,
}

impl<'a> AsyncDialog<'a> {
    pub fn new(id: impl Into<ModalId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: Vec::new(),
            class_name: None,
            ok_text: None,
            cancel_text: None,
            styles: None,
        }
    }

    /// Add a paragraph of body text
    pub fn body(mut self, text: impl Into<String>) -> Self {
        self.body.push(text.into());
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn ok_text(mut self, text: impl Into<String>) -> Self {
        self.ok_text = Some(text.into());
        self
    }

    pub fn cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }

    pub fn styles(mut self, styles: &'a StyleSheet) -> Self {
        self.styles = Some(styles);
        self
    }

    pub fn id(&self) -> &ModalId {
        &self.id
    }

    /// The modal element this widget describes
    pub fn element(&self) -> ModalElement {
        let ok = label_or(self.ok_text.as_deref(), DEFAULT_OK);
        let cancel = label_or(self.cancel_text.as_deref(), DEFAULT_CANCEL);

        let mut element = ModalElement::new(self.id.clone())
            .with_classes([classes::ASYNC_DIALOG])
            .with_classes(self.class_name.as_deref())
            .with_title(&self.title);
        for paragraph in &self.body {
            element = element.push_text(None, paragraph);
        }
        element
            .push_button(Button::new(RETURN_CANCEL, cancel).with_class(classes::CANCEL))
            .push_button(Button::new(RETURN_OK, ok).with_class(classes::OK))
    }
}

fn label_or<'s>(custom: Option<&'s str>, default: &'s str) -> &'s str {
    custom.filter(|s| !s.is_empty()).unwrap_or(default)
}

impl Widget for AsyncDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let element = self.element();
        let fallback;
        let styles = match self.styles {
            Some(styles) => styles,
            None => {
                fallback = StyleSheet::default();
                &fallback
            }
        };
        ModalView::new(&element, styles).render(area, buf);
    }
}
