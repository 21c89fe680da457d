//! # adialog-core - Core Domain Types
//!
//! Foundation crate for async dialogs. Provides the shared domain types,
//! error handling and logging setup.
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ModalId`] - Identifier of a modal element in a document
//! - [`CloseEvent`] - What a modal reported when it closed
//! - [`FieldMap`] - Ordered name/value pairs read from an accepted modal
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with `configuration` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use adialog_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all async-dialogs crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use error::{Error, Result, ResultExt, TimeComponent};
pub use types::{CloseEvent, FieldMap, ModalId, RETURN_CANCEL, RETURN_OK};
