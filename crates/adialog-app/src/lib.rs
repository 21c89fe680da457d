//! # adialog-app - Awaitable Dialogs
//!
//! Alert, confirm, select and typed prompt dialogs built on the modal host.
//! Each call attaches a fresh modal, suspends until the user closes it and
//! hands back a typed value.
//!
//! ```no_run
//! # async fn demo() -> adialog_core::Result<()> {
//! use adialog_app::{DialogOptions, Dialogs};
//! use adialog_host::Document;
//!
//! let dialogs = Dialogs::new(Document::new());
//! if dialogs.confirm(DialogOptions::new("Quit?", "Unsaved changes will be lost")).await? {
//!     // ...
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//! - [`dialogs`] - The [`Dialogs`] builders
//! - [`options`] - Option records and typed results
//! - [`inputs`] - One validated control per prompt type
//! - [`config`] - Settings from `config.toml`
//! - [`classes`] - Class names placed on dialog elements

pub mod classes;
pub mod config;
pub mod dialogs;
pub mod inputs;
pub mod options;

pub use config::{load_settings, load_settings_from, Settings};
pub use dialogs::{DialogKind, Dialogs, SELECT_FIELD};
pub use inputs::PROMPT_FIELD;
pub use options::{
    AlertOptions, ChoiceItem, ConfirmOptions, DatePrompt, DialogOptions, NumberPrompt,
    PromptOptions, PromptValue, SelectOptions, Selection, TextPrompt, TimePrompt,
};
