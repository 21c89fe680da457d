//! Modal elements: a structurally built node tree plus open/close state
//!
//! Content is assembled node by node; user strings only ever land in
//! [`Node::Text`] or control labels and are never parsed as markup.

use tokio::sync::oneshot;

use adialog_core::prelude::*;
use adialog_core::{CloseEvent, FieldMap, ModalId};

use crate::control::{InputControl, InputKind, ValidityError};

/// A node in a modal's body
#[derive(Debug, Clone)]
pub enum Node {
    /// Plain text, optionally tagged with a style class
    Text { class: Option<String>, text: String },
    /// A named input participating in the modal's form
    Control(InputControl),
}

/// A submit button; activating it records `value` as the terminal signal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Button {
    pub value: String,
    pub label: String,
    pub class: Option<String>,
    /// Skip constraint validation when this button submits
    pub novalidate: bool,
}

impl Button {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            class: None,
            novalidate: false,
        }
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn novalidate(mut self) -> Self {
        self.novalidate = true;
        self
    }
}

/// A modal-capable element
#[derive(Debug)]
pub struct ModalElement {
    id: ModalId,
    classes: Vec<String>,
    title: String,
    body: Vec<Node>,
    buttons: Vec<Button>,
    open: bool,
    visible: bool,
    return_value: Option<String>,
    listeners: Vec<oneshot::Sender<CloseEvent>>,
}

impl ModalElement {
    pub fn new(id: ModalId) -> Self {
        Self {
            id,
            classes: Vec::new(),
            title: String::new(),
            body: Vec::new(),
            buttons: Vec::new(),
            open: false,
            visible: true,
            return_value: None,
            listeners: Vec::new(),
        }
    }

    /// Append class tokens; a token string may hold several space-separated names
    pub fn with_classes<I, S>(mut self, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.classes
                .extend(token.as_ref().split_whitespace().map(str::to_string));
        }
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn push_text(mut self, class: Option<&str>, text: impl Into<String>) -> Self {
        self.body.push(Node::Text {
            class: class.map(str::to_string),
            text: text.into(),
        });
        self
    }

    pub fn push_control(mut self, control: InputControl) -> Self {
        self.body.push(Node::Control(control));
        self
    }

    pub fn push_button(mut self, button: Button) -> Self {
        self.buttons.push(button);
        self
    }

    pub fn id(&self) -> &ModalId {
        &self.id
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &[Node] {
        &self.body
    }

    pub fn buttons(&self) -> &[Button] {
        &self.buttons
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn return_value(&self) -> Option<&str> {
        self.return_value.as_deref()
    }

    /// Controls in document order; indices used elsewhere refer to this order
    pub fn controls(&self) -> impl Iterator<Item = &InputControl> {
        self.body.iter().filter_map(|node| match node {
            Node::Control(control) => Some(control),
            Node::Text { .. } => None,
        })
    }

    pub fn control(&self, index: usize) -> Option<&InputControl> {
        self.controls().nth(index)
    }

    pub fn control_count(&self) -> usize {
        self.controls().count()
    }

    pub(crate) fn control_mut(&mut self, index: usize) -> Result<&mut InputControl> {
        let id = self.id.clone();
        self.body
            .iter_mut()
            .filter_map(as_control_mut)
            .nth(index)
            .ok_or_else(|| Error::no_such_control(id, "control", index))
    }

    /// Check a radio or checkbox; checking a radio unchecks its siblings
    pub(crate) fn set_checked(&mut self, index: usize, checked: bool) -> Result<()> {
        let target = self.control_mut(index)?;
        let group = target.name().to_string();
        let is_radio = target.kind() == InputKind::Radio;
        target.set_checked(checked);

        if is_radio && checked {
            let siblings = self.body.iter_mut().filter_map(as_control_mut).enumerate();
            for (i, control) in siblings {
                if i != index && control.kind() == InputKind::Radio && control.name() == group {
                    control.set_checked(false);
                }
            }
        }
        Ok(())
    }

    /// Read the form-data view of every control
    pub fn form_data(&self) -> FieldMap {
        self.controls().filter_map(InputControl::form_entry).collect()
    }

    /// First control whose constraints fail, with the reason
    pub fn first_invalid(&self) -> Option<(usize, ValidityError)> {
        self.controls()
            .enumerate()
            .find_map(|(i, control)| control.check_validity().err().map(|e| (i, e)))
    }

    /// Enter modal presentation; the previous terminal signal is forgotten
    pub(crate) fn show_modal(&mut self) -> Result<()> {
        if self.open {
            return Err(Error::modal_already_open(&self.id));
        }
        self.open = true;
        self.visible = true;
        self.return_value = None;
        Ok(())
    }

    pub(crate) fn add_close_listener(&mut self, listener: oneshot::Sender<CloseEvent>) {
        self.listeners.push(listener);
    }

    pub(crate) fn hide(&mut self) {
        self.visible = false;
    }

    /// Close the element, notifying listeners once. Closing a closed
    /// element does nothing and leaves the recorded signal untouched.
    pub(crate) fn close(&mut self, return_value: Option<String>) -> bool {
        if !self.open {
            return false;
        }
        self.open = false;
        if return_value.is_some() {
            self.return_value = return_value;
        }

        let event = CloseEvent {
            id: self.id.clone(),
            return_value: self.return_value.clone(),
        };
        debug!("Modal {} closed with {:?}", self.id, event.return_value);
        for listener in self.listeners.drain(..) {
            let _ = listener.send(event.clone());
        }
        true
    }
}

fn as_control_mut(node: &mut Node) -> Option<&mut InputControl> {
    match node {
        Node::Control(control) => Some(control),
        Node::Text { .. } => None,
    }
}
