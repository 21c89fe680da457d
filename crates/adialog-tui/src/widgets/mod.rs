//! Dialog widgets

mod async_dialog;
mod modal_view;
pub mod overlay;

pub use async_dialog::AsyncDialog;
pub use modal_view::ModalView;
