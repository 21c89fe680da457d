//! adialog-tui - Terminal host for async dialogs
//!
//! Renders the topmost open modal of a [`Document`](adialog_host::Document)
//! with ratatui, turns crossterm key presses into host interactions, and
//! provides the declarative [`AsyncDialog`](widgets::AsyncDialog) widget.

pub mod controller;
pub mod event;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use controller::{Focus, ModalController};
pub use runner::run_dialog;
pub use theme::StyleSheet;
pub use widgets::{AsyncDialog, ModalView};
