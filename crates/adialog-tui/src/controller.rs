//! Keyboard interaction with the modal on screen
//!
//! The controller keeps only focus and the last validation hint. Every
//! change to the modal itself goes through the [`Document`] so live
//! behaviours, validation and close signalling are the host's.

use adialog_core::prelude::*;
use adialog_core::{ModalId, RETURN_OK};
use adialog_host::{ClickOutcome, Document, InputKind, InputMode, Key, KeyOutcome, ModalElement};

use crate::event::InputKey;

/// What has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Control(usize),
    Button(usize),
}

const PREVENTED_HINT: &str = "press Tab to reach the buttons";

/// Snapshot of the focused control taken before an edit
struct ControlInfo {
    kind: InputKind,
    name: String,
    value: String,
    checked: bool,
    mode: Option<InputMode>,
}

#[derive(Debug)]
pub struct ModalController {
    document: Document,
    id: ModalId,
    focus: Focus,
    hint: Option<String>,
}

impl ModalController {
    /// Start controlling `id`, focusing the checked choice, the first
    /// control, or the OK button, in that order
    pub fn new(document: &Document, id: &ModalId) -> Result<Self> {
        let focus = document.with_modal(id, initial_focus)?;
        Ok(Self {
            document: document.clone(),
            id: id.clone(),
            focus,
            hint: None,
        })
    }

    pub fn id(&self) -> &ModalId {
        &self.id
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Why the last submission was refused, if it was
    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn handle_key(&mut self, key: InputKey) -> Result<()> {
        match key {
            InputKey::Tab => self.cycle(true)?,
            InputKey::BackTab => self.cycle(false)?,
            InputKey::Esc | InputKey::CharCtrl('c') => {
                self.document.key_down(&self.id, None, Key::Escape)?;
            }
            InputKey::Enter => self.enter()?,
            InputKey::Char(c) => self.type_char(c)?,
            InputKey::Backspace => self.backspace()?,
            InputKey::Up => self.move_in_group(false)?,
            InputKey::Down => self.move_in_group(true)?,
            InputKey::Left => self.move_between_buttons(false)?,
            InputKey::Right => self.move_between_buttons(true)?,
            InputKey::CharCtrl(_) => {}
        }
        Ok(())
    }

    fn counts(&self) -> Result<(usize, usize)> {
        self.document
            .with_modal(&self.id, |m| (m.control_count(), m.buttons().len()))
    }

    fn focused_control(&self) -> Result<Option<(usize, ControlInfo)>> {
        let Focus::Control(index) = self.focus else {
            return Ok(None);
        };
        self.document.with_modal(&self.id, |m| {
            m.control(index).map(|c| {
                let info = ControlInfo {
                    kind: c.kind(),
                    name: c.name().to_string(),
                    value: c.value().to_string(),
                    checked: c.is_checked(),
                    mode: c.input_mode(),
                };
                (index, info)
            })
        })
    }

    fn cycle(&mut self, forward: bool) -> Result<()> {
        let (controls, buttons) = self.counts()?;
        let stops = controls + buttons;
        if stops == 0 {
            return Ok(());
        }
        let current = match self.focus {
            Focus::Control(i) => i,
            Focus::Button(i) => controls + i,
        };
        let next = if forward {
            (current + 1) % stops
        } else {
            (current + stops - 1) % stops
        };
        self.focus = if next < controls {
            Focus::Control(next)
        } else {
            Focus::Button(next - controls)
        };
        Ok(())
    }

    fn enter(&mut self) -> Result<()> {
        match self.focus {
            Focus::Button(index) => {
                let outcome = self.document.click(&self.id, index)?;
                self.apply(outcome);
            }
            Focus::Control(index) => {
                match self.document.key_down(&self.id, Some(index), Key::Enter)? {
                    KeyOutcome::Submitted(outcome) => self.apply(outcome),
                    KeyOutcome::Prevented => self.hint = Some(PREVENTED_HINT.to_string()),
                    KeyOutcome::Dismissed | KeyOutcome::Unhandled => {}
                }
            }
        }
        Ok(())
    }

    fn apply(&mut self, outcome: ClickOutcome) {
        match outcome {
            ClickOutcome::Blocked { control, error } => {
                self.focus = Focus::Control(control);
                self.hint = Some(error.to_string());
            }
            ClickOutcome::Closed | ClickOutcome::Ignored => self.hint = None,
        }
    }

    fn type_char(&mut self, c: char) -> Result<()> {
        if let Focus::Button(_) = self.focus {
            // Space presses a focused button
            if c == ' ' {
                self.enter()?;
            }
            return Ok(());
        }
        let Some((index, info)) = self.focused_control()? else {
            return Ok(());
        };

        if info.kind.is_checkable() {
            if c == ' ' {
                let checked = info.kind == InputKind::Radio || !info.checked;
                self.document.set_checked(&self.id, index, checked)?;
            }
            return Ok(());
        }

        if info.mode.map_or(!c.is_control(), |mode| mode.accepts(c)) {
            let mut value = info.value;
            value.push(c);
            self.document.input(&self.id, index, &value)?;
            self.hint = None;
        }
        Ok(())
    }

    fn backspace(&mut self) -> Result<()> {
        if let Some((index, info)) = self.focused_control()? {
            if info.kind.is_text_like() && !info.value.is_empty() {
                let mut value = info.value;
                value.pop();
                self.document.input(&self.id, index, &value)?;
                self.hint = None;
            }
        }
        Ok(())
    }

    /// Arrow keys walk a radio/checkbox group; radios follow the cursor
    fn move_in_group(&mut self, forward: bool) -> Result<()> {
        let Some((index, info)) = self.focused_control()? else {
            return Ok(());
        };
        if !info.kind.is_checkable() {
            return Ok(());
        }

        let group: Vec<usize> = self.document.with_modal(&self.id, |m| {
            m.controls()
                .enumerate()
                .filter(|(_, c)| c.kind() == info.kind && c.name() == info.name)
                .map(|(i, _)| i)
                .collect()
        })?;
        let Some(pos) = group.iter().position(|&i| i == index) else {
            return Ok(());
        };
        let target = if forward {
            group.get(pos + 1)
        } else {
            pos.checked_sub(1).and_then(|p| group.get(p))
        };

        if let Some(&target) = target {
            self.focus = Focus::Control(target);
            if info.kind == InputKind::Radio {
                self.document.set_checked(&self.id, target, true)?;
            }
        }
        Ok(())
    }

    fn move_between_buttons(&mut self, forward: bool) -> Result<()> {
        let Focus::Button(index) = self.focus else {
            return Ok(());
        };
        let (_, buttons) = self.counts()?;
        if forward && index + 1 < buttons {
            self.focus = Focus::Button(index + 1);
        } else if !forward && index > 0 {
            self.focus = Focus::Button(index - 1);
        }
        Ok(())
    }
}

fn initial_focus(modal: &ModalElement) -> Focus {
    if let Some(i) = modal.controls().position(|c| c.is_checked()) {
        return Focus::Control(i);
    }
    if modal.control_count() > 0 {
        return Focus::Control(0);
    }
    let ok = modal
        .buttons()
        .iter()
        .position(|b| b.value == RETURN_OK)
        .unwrap_or(0);
    Focus::Button(ok)
}

#[cfg(test)]
mod tests {
    use super::*;
    use adialog_core::FieldMap;
    use adialog_host::{await_result, Behavior, Button, InputControl};

    fn open(
        document: &Document,
        element: ModalElement,
    ) -> (ModalId, impl std::future::Future<Output = Option<FieldMap>>) {
        let id = document.append(element);
        let wait = await_result(document, &id).unwrap();
        (id, wait)
    }

    fn text_modal() -> ModalElement {
        ModalElement::new(ModalId::from("t-1"))
            .push_control(
                InputControl::new("answer", InputKind::Text)
                    .required()
                    .with_behavior(Behavior::SuppressEnter),
            )
            .push_button(Button::new("cancel", "Cancel").novalidate())
            .push_button(Button::new("ok", "OK"))
    }

    fn radio_modal() -> ModalElement {
        let mut element = ModalElement::new(ModalId::from("r-1"));
        for (i, v) in ["a", "b", "c"].into_iter().enumerate() {
            element = element.push_control(
                InputControl::new("pick", InputKind::Radio)
                    .with_value(v)
                    .checked(i == 0),
            );
        }
        element
            .push_button(Button::new("cancel", "Cancel"))
            .push_button(Button::new("ok", "OK"))
    }

    #[tokio::test]
    async fn test_typing_then_tab_to_ok() {
        let document = Document::new();
        let (id, wait) = open(&document, text_modal());
        let mut controller = ModalController::new(&document, &id).unwrap();
        assert_eq!(controller.focus(), Focus::Control(0));

        for c in "Adx".chars() {
            controller.handle_key(InputKey::Char(c)).unwrap();
        }
        controller.handle_key(InputKey::Backspace).unwrap();

        controller.handle_key(InputKey::Enter).unwrap();
        assert_eq!(controller.hint(), Some(PREVENTED_HINT));

        controller.handle_key(InputKey::Tab).unwrap();
        controller.handle_key(InputKey::Tab).unwrap();
        assert_eq!(controller.focus(), Focus::Button(1));
        controller.handle_key(InputKey::Enter).unwrap();

        let fields = wait.await.unwrap();
        assert_eq!(fields.get("answer"), Some("Ad"));
    }

    #[tokio::test]
    async fn test_blocked_submit_refocuses_control() {
        let document = Document::new();
        let (id, _wait) = open(&document, text_modal());
        let mut controller = ModalController::new(&document, &id).unwrap();

        controller.handle_key(InputKey::BackTab).unwrap();
        assert_eq!(controller.focus(), Focus::Button(1));
        controller.handle_key(InputKey::Enter).unwrap();

        assert_eq!(controller.focus(), Focus::Control(0));
        assert_eq!(controller.hint(), Some("please fill in this field"));
        assert_eq!(document.open_modals(), vec![id]);
    }

    #[tokio::test]
    async fn test_arrows_move_radio_selection() {
        let document = Document::new();
        let (id, wait) = open(&document, radio_modal());
        let mut controller = ModalController::new(&document, &id).unwrap();

        controller.handle_key(InputKey::Down).unwrap();
        controller.handle_key(InputKey::Down).unwrap();
        controller.handle_key(InputKey::Down).unwrap();
        assert_eq!(controller.focus(), Focus::Control(2));
        controller.handle_key(InputKey::Up).unwrap();

        controller.handle_key(InputKey::Tab).unwrap();
        controller.handle_key(InputKey::Tab).unwrap();
        controller.handle_key(InputKey::Tab).unwrap();
        assert_eq!(controller.focus(), Focus::Button(1));
        controller.handle_key(InputKey::Char(' ')).unwrap();

        let fields = wait.await.unwrap();
        assert_eq!(fields.get_all("pick"), vec!["b"]);
    }

    #[tokio::test]
    async fn test_escape_dismisses() {
        let document = Document::new();
        let (id, wait) = open(&document, radio_modal());
        let mut controller = ModalController::new(&document, &id).unwrap();

        controller.handle_key(InputKey::Esc).unwrap();
        assert_eq!(wait.await, None);
    }

    #[tokio::test]
    async fn test_decimal_mode_filters_chars() {
        let document = Document::new();
        let element = ModalElement::new(ModalId::from("n-1"))
            .push_control(
                InputControl::new("n", InputKind::Number).with_input_mode(InputMode::Decimal),
            )
            .push_button(Button::new("ok", "OK"));
        let (id, wait) = open(&document, element);
        let mut controller = ModalController::new(&document, &id).unwrap();

        for c in "1a.5x".chars() {
            controller.handle_key(InputKey::Char(c)).unwrap();
        }
        controller.handle_key(InputKey::Tab).unwrap();
        controller.handle_key(InputKey::Enter).unwrap();

        assert_eq!(wait.await.unwrap().get("n"), Some("1.5"));
    }

    #[test]
    fn test_initial_focus_prefers_ok_button() {
        let element = ModalElement::new(ModalId::from("c-1"))
            .push_button(Button::new("cancel", "Cancel"))
            .push_button(Button::new("ok", "OK"));
        assert_eq!(initial_focus(&element), Focus::Button(1));
    }
}
