//! The document modal elements are attached to
//!
//! `Document` is a cheap, clonable handle to a shared child list. Builders
//! attach and detach elements; front ends (the terminal host, tests) drive
//! user interaction through the same handle: clicking buttons, editing
//! controls, dismissing.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use adialog_core::prelude::*;
use adialog_core::{ModalId, RETURN_OK};

use crate::control::ValidityError;
use crate::element::ModalElement;

/// Keys a host forwards to a focused control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
}

/// What happened when a submit button was activated
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The modal closed with the button's value as its terminal signal
    Closed,
    /// Constraint validation failed; the modal stays open
    Blocked { control: usize, error: ValidityError },
    /// The modal was not open
    Ignored,
}

/// Result of a key press on a control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The control swallowed the key
    Prevented,
    /// Implicit submission ran through the form's first button
    Submitted(ClickOutcome),
    /// Escape closed the modal without a terminal signal
    Dismissed,
    /// The key had no effect on the modal
    Unhandled,
}

/// Shared list of attached modal elements
#[derive(Debug, Clone, Default)]
pub struct Document {
    children: Arc<Mutex<Vec<ModalElement>>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    fn children(&self) -> MutexGuard<'_, Vec<ModalElement>> {
        // A panic while holding the lock cannot leave the list half-updated
        self.children.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Attach an element as the last child
    pub fn append(&self, element: ModalElement) -> ModalId {
        let id = element.id().clone();
        debug!("Attaching modal {}", id);
        self.children().push(element);
        id
    }

    /// Attach an element and detach it again when the guard drops
    pub fn attach(&self, element: ModalElement) -> AttachedModal {
        let id = self.append(element);
        AttachedModal {
            document: self.clone(),
            id,
        }
    }

    /// Detach the first element with this id
    pub fn remove(&self, id: &ModalId) -> Option<ModalElement> {
        let mut children = self.children();
        let index = children.iter().position(|m| m.id() == id)?;
        debug!("Detaching modal {}", id);
        Some(children.remove(index))
    }

    pub fn contains(&self, id: &ModalId) -> bool {
        self.children().iter().any(|m| m.id() == id)
    }

    pub fn len(&self) -> usize {
        self.children().len()
    }

    pub fn is_empty(&self) -> bool {
        self.children().is_empty()
    }

    /// Open modals in attachment order
    pub fn open_modals(&self) -> Vec<ModalId> {
        self.children()
            .iter()
            .filter(|m| m.is_open())
            .map(|m| m.id().clone())
            .collect()
    }

    /// The most recently attached open modal, the one a host presents on top
    pub fn topmost_open(&self) -> Option<ModalId> {
        self.children()
            .iter()
            .rev()
            .find(|m| m.is_open())
            .map(|m| m.id().clone())
    }

    /// Read an element
    pub fn with_modal<R>(&self, id: &ModalId, f: impl FnOnce(&ModalElement) -> R) -> Result<R> {
        let children = self.children();
        let modal = children
            .iter()
            .find(|m| m.id() == id)
            .ok_or_else(|| Error::modal_not_found(id))?;
        Ok(f(modal))
    }

    pub(crate) fn with_modal_mut<R>(
        &self,
        id: &ModalId,
        f: impl FnOnce(&mut ModalElement) -> R,
    ) -> Result<R> {
        let mut children = self.children();
        let modal = children
            .iter_mut()
            .find(|m| m.id() == id)
            .ok_or_else(|| Error::modal_not_found(id))?;
        Ok(f(modal))
    }

    // ─────────────────────────────────────────────────────────
    // User interaction
    // ─────────────────────────────────────────────────────────

    /// Activate the button at `index`
    pub fn click(&self, id: &ModalId, index: usize) -> Result<ClickOutcome> {
        self.with_modal_mut(id, |modal| {
            let button = modal
                .buttons()
                .get(index)
                .cloned()
                .ok_or_else(|| Error::no_such_control(id, "button", index))?;

            if !modal.is_open() {
                return Ok(ClickOutcome::Ignored);
            }
            if !button.novalidate {
                if let Some((control, error)) = modal.first_invalid() {
                    debug!("Modal {} blocked by control {}: {}", id, control, error);
                    return Ok(ClickOutcome::Blocked { control, error });
                }
            }
            modal.close(Some(button.value));
            Ok(ClickOutcome::Closed)
        })?
    }

    /// Activate the first button whose value is `value`
    pub fn submit(&self, id: &ModalId, value: &str) -> Result<ClickOutcome> {
        let index = self
            .with_modal(id, |modal| {
                modal.buttons().iter().position(|b| b.value == value)
            })?
            .ok_or_else(|| Error::no_such_button(id, value))?;
        self.click(id, index)
    }

    /// Shorthand for submitting with the `ok` button
    pub fn accept(&self, id: &ModalId) -> Result<ClickOutcome> {
        self.submit(id, RETURN_OK)
    }

    /// Platform dismissal (escape): closes without a terminal signal
    pub fn dismiss(&self, id: &ModalId) -> Result<bool> {
        self.with_modal_mut(id, |modal| modal.close(None))
    }

    /// Programmatic close with an optional return value
    pub fn close(&self, id: &ModalId, return_value: Option<&str>) -> Result<bool> {
        self.with_modal_mut(id, |modal| modal.close(return_value.map(str::to_string)))
    }

    /// Edit a text-like control; returns the value left after live behaviours
    pub fn input(&self, id: &ModalId, control: usize, value: &str) -> Result<String> {
        self.with_modal_mut(id, |modal| {
            let control = modal.control_mut(control)?;
            Ok(control.edit(value).to_string())
        })?
    }

    /// Check or uncheck a radio/checkbox control
    pub fn set_checked(&self, id: &ModalId, control: usize, checked: bool) -> Result<()> {
        self.with_modal_mut(id, |modal| modal.set_checked(control, checked))?
    }

    /// Forward a key press made while `control` had focus
    pub fn key_down(&self, id: &ModalId, control: Option<usize>, key: Key) -> Result<KeyOutcome> {
        match key {
            Key::Escape => {
                let closed = self.dismiss(id)?;
                Ok(if closed {
                    KeyOutcome::Dismissed
                } else {
                    KeyOutcome::Unhandled
                })
            }
            Key::Enter => {
                let suppressed = self.with_modal(id, |modal| {
                    control
                        .and_then(|i| modal.control(i))
                        .is_some_and(|c| c.suppresses_enter())
                })?;
                if suppressed {
                    return Ok(KeyOutcome::Prevented);
                }
                // Implicit submission uses the form's first submit button
                let has_button = self.with_modal(id, |modal| !modal.buttons().is_empty())?;
                if !has_button {
                    return Ok(KeyOutcome::Unhandled);
                }
                Ok(KeyOutcome::Submitted(self.click(id, 0)?))
            }
        }
    }
}

/// Guard for an attached element; detaches it when dropped
#[derive(Debug)]
pub struct AttachedModal {
    document: Document,
    id: ModalId,
}

impl AttachedModal {
    pub fn id(&self) -> &ModalId {
        &self.id
    }
}

impl Drop for AttachedModal {
    fn drop(&mut self) {
        self.document.remove(&self.id);
    }
}
