//! Dialog error types with rich context

use std::fmt;

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Which half of an `HH:mm` time string failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeComponent {
    Hours,
    Minutes,
    /// The string is not shaped like `HH:mm` at all
    Format,
}

impl fmt::Display for TimeComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeComponent::Hours => write!(f, "hours"),
            TimeComponent::Minutes => write!(f, "minutes"),
            TimeComponent::Format => write!(f, "format"),
        }
    }
}

/// Dialog error types organized by layer
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration / Option Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Unsupported prompt option shape: type {}", found.as_deref().unwrap_or("<missing>"))]
    UnsupportedOptionShape { found: Option<String> },

    #[error("Invalid dialog options: {message}")]
    InvalidOptions { message: String },

    #[error("Invalid value for {component} in time {field}: {value:?}")]
    InvalidTimeComponent {
        field: &'static str,
        component: TimeComponent,
        value: String,
    },

    // ─────────────────────────────────────────────────────────────
    // Modal Host Errors
    // ─────────────────────────────────────────────────────────────
    #[error("There is no modal with \"{id}\" as its ID")]
    ModalNotFound { id: String },

    #[error("Modal \"{id}\" is already open")]
    ModalAlreadyOpen { id: String },

    #[error("Modal \"{id}\" was detached before it closed")]
    ModalDetached { id: String },

    #[error("Modal \"{id}\" has no {what} at index {index}")]
    NoSuchControl {
        id: String,
        what: &'static str,
        index: usize,
    },

    #[error("Modal \"{id}\" has no button with value {value:?}")]
    NoSuchButton { id: String, value: String },

    #[error("Failed to extract fields from modal \"{id}\": {message}")]
    Extraction { id: String, message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn invalid_options(message: impl Into<String>) -> Self {
        Self::InvalidOptions {
            message: message.into(),
        }
    }

    pub fn unsupported_option_shape(found: Option<String>) -> Self {
        Self::UnsupportedOptionShape { found }
    }

    pub fn invalid_time(
        field: &'static str,
        component: TimeComponent,
        value: impl Into<String>,
    ) -> Self {
        Self::InvalidTimeComponent {
            field,
            component,
            value: value.into(),
        }
    }

    pub fn modal_not_found(id: impl fmt::Display) -> Self {
        Self::ModalNotFound { id: id.to_string() }
    }

    pub fn modal_already_open(id: impl fmt::Display) -> Self {
        Self::ModalAlreadyOpen { id: id.to_string() }
    }

    pub fn modal_detached(id: impl fmt::Display) -> Self {
        Self::ModalDetached { id: id.to_string() }
    }

    pub fn no_such_control(id: impl fmt::Display, what: &'static str, index: usize) -> Self {
        Self::NoSuchControl {
            id: id.to_string(),
            what,
            index,
        }
    }

    pub fn no_such_button(id: impl fmt::Display, value: impl Into<String>) -> Self {
        Self::NoSuchButton {
            id: id.to_string(),
            value: value.into(),
        }
    }

    pub fn extraction(id: impl fmt::Display, message: impl Into<String>) -> Self {
        Self::Extraction {
            id: id.to_string(),
            message: message.into(),
        }
    }

    /// Errors caused by how a dialog was configured or addressed.
    ///
    /// These are the only errors the dialog functions hand back to callers;
    /// everything user-driven resolves to a normal value instead.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::Config { .. }
                | Error::UnsupportedOptionShape { .. }
                | Error::InvalidOptions { .. }
                | Error::InvalidTimeComponent { .. }
                | Error::ModalNotFound { .. }
                | Error::ModalAlreadyOpen { .. }
                | Error::NoSuchControl { .. }
                | Error::NoSuchButton { .. }
        )
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::ModalDetached { .. } | Error::Extraction { .. })
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_messages() {
        let err = Error::modal_not_found("ad-confirm-3");
        assert_eq!(
            err.to_string(),
            "There is no modal with \"ad-confirm-3\" as its ID"
        );

        let err = Error::invalid_time("max", TimeComponent::Hours, "24:00");
        assert_eq!(
            err.to_string(),
            "Invalid value for hours in time max: \"24:00\""
        );
    }

    #[test]
    fn test_unsupported_shape_display() {
        let err = Error::unsupported_option_shape(Some("color".into()));
        assert!(err.to_string().contains("color"));

        let err = Error::unsupported_option_shape(None);
        assert!(err.to_string().contains("<missing>"));
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_error_is_configuration() {
        assert!(Error::modal_not_found("x").is_configuration());
        assert!(Error::modal_already_open("x").is_configuration());
        assert!(Error::unsupported_option_shape(None).is_configuration());
        assert!(Error::invalid_time("value", TimeComponent::Minutes, "10:60").is_configuration());
        assert!(!Error::modal_detached("x").is_configuration());
        assert!(!Error::extraction("x", "boom").is_configuration());
    }

    #[test]
    fn test_error_is_recoverable() {
        assert!(Error::modal_detached("x").is_recoverable());
        assert!(Error::extraction("x", "boom").is_recoverable());
        assert!(!Error::modal_not_found("x").is_recoverable());
    }

    #[test]
    fn test_result_ext_keeps_error() {
        let res: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::Other,
            "disk gone",
        ));
        let err = res.context("reading settings").unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
