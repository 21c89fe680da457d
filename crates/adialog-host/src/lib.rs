//! # adialog-host - Modal Host and Await Protocol
//!
//! Hosts modal elements in a shared [`Document`] and turns their closing
//! into awaitable results.
//!
//! Depends on [`adialog_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Elements
//! - [`ModalElement`] - Structurally built modal: title, body nodes, buttons
//! - [`InputControl`] - Named input with live behaviours and constraints
//! - [`Button`] - Submit button recording a terminal signal
//!
//! ### Document
//! - [`Document`] - Shared child list plus user interaction entry points
//! - [`AttachedModal`] - Guard that detaches its element on drop
//!
//! ### Host Adapter
//! - [`ModalHostAdapter`] - Opens one element modally and reports its close
//! - [`next_modal_id()`] - Process-wide modal identifier generator
//!
//! ### Await Protocol
//! - [`await_result()`] - Open a modal and await its field mapping

pub mod adapter;
pub mod control;
pub mod document;
pub mod element;
pub mod protocol;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use adapter::{next_modal_id, CloseNotification, ModalHostAdapter};
pub use control::{
    parse_date, parse_datetime_local, parse_time_value, Behavior, Constraints, InputControl,
    InputKind, InputMode, ValidityError,
};
pub use document::{AttachedModal, ClickOutcome, Document, Key, KeyOutcome};
pub use element::{Button, ModalElement, Node};
pub use protocol::await_result;
