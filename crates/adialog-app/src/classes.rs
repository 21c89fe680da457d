//! Class names placed on dialog elements
//!
//! Front ends resolve these through their style sheet; user tokens from
//! `class_name` are appended after the defaults.

pub const ASYNC_DIALOG: &str = "async-dialog";
pub const WRAPPER: &str = "ad-wrapper";
pub const TITLE: &str = "ad-title";
pub const BODY: &str = "ad-body";
pub const BUTTONS: &str = "ad-buttons";
pub const OK: &str = "ad-ok";
pub const CANCEL: &str = "ad-cancel";

// Per-kind markers
pub const ALERT: &str = "ad-alert";
pub const CONFIRM: &str = "ad-confirm";
pub const SELECT: &str = "ad-select";
pub const PROMPT: &str = "ad-prompt";
