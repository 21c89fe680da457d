//! Input controls hosted inside a modal element
//!
//! A control carries two kinds of rules:
//! - [`Behavior`]s run on every edit and rewrite the value in place
//!   (truncation, pattern stripping) or change how keys are handled.
//! - [`Constraints`] are declarative and only checked when a submit button
//!   asks for validation, the same split a browser makes between script
//!   listeners and `required`/`min`/`max` attributes.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;

use adialog_core::prelude::*;

/// Kind of input a control accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
    Date,
    DateTimeLocal,
    Time,
    Radio,
    Checkbox,
}

impl InputKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Number => "number",
            InputKind::Date => "date",
            InputKind::DateTimeLocal => "datetime-local",
            InputKind::Time => "time",
            InputKind::Radio => "radio",
            InputKind::Checkbox => "checkbox",
        }
    }

    /// Radio buttons and checkboxes: toggled, never typed into
    pub fn is_checkable(&self) -> bool {
        matches!(self, InputKind::Radio | InputKind::Checkbox)
    }

    pub fn is_text_like(&self) -> bool {
        !self.is_checkable()
    }

    /// Format hint shown next to an empty control
    pub fn format_hint(&self) -> Option<&'static str> {
        match self {
            InputKind::Date => Some("YYYY-MM-DD"),
            InputKind::DateTimeLocal => Some("YYYY-MM-DDTHH:MM"),
            InputKind::Time => Some("HH:MM"),
            _ => None,
        }
    }
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Virtual keyboard mode requested by a control
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Text,
    Decimal,
    /// Digits and the separators of ISO dates and times
    DateTime,
}

impl InputMode {
    /// Whether a typed character belongs to this mode's keyboard
    pub fn accepts(&self, c: char) -> bool {
        match self {
            InputMode::Text => !c.is_control(),
            InputMode::Decimal => c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'),
            InputMode::DateTime => c.is_ascii_digit() || matches!(c, '-' | ':' | 'T'),
        }
    }
}

/// Live behaviour attached to a control
#[derive(Debug, Clone)]
pub enum Behavior {
    /// Enter never triggers implicit submission from this control
    SuppressEnter,
    /// Cut the value back to at most this many characters on every edit
    Truncate(usize),
    /// Strip trailing characters until the value matches; empty always passes
    Pattern(Regex),
}

impl Behavior {
    pub fn pattern(source: &str) -> Result<Self> {
        Regex::new(source)
            .map(Behavior::Pattern)
            .map_err(|e| Error::invalid_options(format!("invalid pattern {source:?}: {e}")))
    }

    fn apply(&self, value: &mut String) {
        match self {
            Behavior::SuppressEnter => {}
            Behavior::Truncate(max) => {
                if let Some((idx, _)) = value.char_indices().nth(*max) {
                    value.truncate(idx);
                }
            }
            Behavior::Pattern(re) => {
                while !value.is_empty() && !re.is_match(value) {
                    value.pop();
                }
            }
        }
    }
}

/// Why a control blocks submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidityError {
    ValueMissing,
    TooLong { max: usize },
    PatternMismatch,
    BadInput,
    RangeUnderflow { min: String },
    RangeOverflow { max: String },
    StepMismatch { step: String },
}

impl fmt::Display for ValidityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidityError::ValueMissing => write!(f, "please fill in this field"),
            ValidityError::TooLong { max } => write!(f, "use at most {max} characters"),
            ValidityError::PatternMismatch => write!(f, "please match the requested format"),
            ValidityError::BadInput => write!(f, "please enter a valid value"),
            ValidityError::RangeUnderflow { min } => write!(f, "value must be {min} or more"),
            ValidityError::RangeOverflow { max } => write!(f, "value must be {max} or less"),
            ValidityError::StepMismatch { step } => {
                write!(f, "value must be a multiple of {step}")
            }
        }
    }
}

/// Declarative constraints checked on validating submission
#[derive(Debug, Clone, Default)]
pub struct Constraints {
    pub required: bool,
    pub min: Option<String>,
    pub max: Option<String>,
    pub step: Option<String>,
    pub maxlength: Option<usize>,
    pattern: Option<(String, Regex)>,
}

impl Constraints {
    /// Source of the whole-value pattern, as configured
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_ref().map(|(source, _)| source.as_str())
    }
}

/// A single named input inside a modal's form
#[derive(Debug, Clone)]
pub struct InputControl {
    name: String,
    kind: InputKind,
    value: String,
    checked: bool,
    label: Option<String>,
    placeholder: Option<String>,
    input_mode: Option<InputMode>,
    constraints: Constraints,
    behaviors: Vec<Behavior>,
}

impl InputControl {
    pub fn new(name: impl Into<String>, kind: InputKind) -> Self {
        Self {
            name: name.into(),
            kind,
            value: String::new(),
            checked: false,
            label: None,
            placeholder: None,
            input_mode: None,
            constraints: Constraints::default(),
            behaviors: Vec::new(),
        }
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_input_mode(mut self, mode: InputMode) -> Self {
        self.input_mode = Some(mode);
        self
    }

    pub fn required(mut self) -> Self {
        self.constraints.required = true;
        self
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }

    pub fn with_min(mut self, min: impl Into<String>) -> Self {
        self.constraints.min = Some(min.into());
        self
    }

    pub fn with_max(mut self, max: impl Into<String>) -> Self {
        self.constraints.max = Some(max.into());
        self
    }

    pub fn with_step(mut self, step: impl Into<String>) -> Self {
        self.constraints.step = Some(step.into());
        self
    }

    pub fn with_maxlength(mut self, maxlength: usize) -> Self {
        self.constraints.maxlength = Some(maxlength);
        self
    }

    /// Constrain the whole value to `source` (checked on submission only)
    pub fn with_pattern(mut self, source: &str) -> Result<Self> {
        let anchored = Regex::new(&format!("^(?:{source})$"))
            .map_err(|e| Error::invalid_options(format!("invalid pattern {source:?}: {e}")))?;
        self.constraints.pattern = Some((source.to_string(), anchored));
        Ok(self)
    }

    pub fn with_behavior(mut self, behavior: Behavior) -> Self {
        self.behaviors.push(behavior);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> InputKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn input_mode(&self) -> Option<InputMode> {
        self.input_mode
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn behaviors(&self) -> &[Behavior] {
        &self.behaviors
    }

    pub fn suppresses_enter(&self) -> bool {
        self.behaviors
            .iter()
            .any(|b| matches!(b, Behavior::SuppressEnter))
    }

    /// Replace the value as an edit event would, running live behaviours
    pub(crate) fn edit(&mut self, value: impl Into<String>) -> &str {
        self.value = value.into();
        for behavior in &self.behaviors {
            behavior.apply(&mut self.value);
        }
        &self.value
    }

    pub(crate) fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    /// The `(name, value)` pair this control adds to a field map, if any
    pub fn form_entry(&self) -> Option<(&str, &str)> {
        if self.name.is_empty() || (self.kind.is_checkable() && !self.checked) {
            return None;
        }
        Some((self.name.as_str(), self.value.as_str()))
    }

    /// Check the declarative constraints against the current value
    pub fn check_validity(&self) -> std::result::Result<(), ValidityError> {
        let c = &self.constraints;

        if self.kind.is_checkable() {
            return if c.required && !self.checked {
                Err(ValidityError::ValueMissing)
            } else {
                Ok(())
            };
        }

        let value = self.value.as_str();
        if value.is_empty() {
            return if c.required {
                Err(ValidityError::ValueMissing)
            } else {
                Ok(())
            };
        }

        if let Some(max) = c.maxlength {
            if value.chars().count() > max {
                return Err(ValidityError::TooLong { max });
            }
        }

        if let Some((_, re)) = &c.pattern {
            if !re.is_match(value) {
                return Err(ValidityError::PatternMismatch);
            }
        }

        match self.kind {
            InputKind::Number => check_number(value, c),
            InputKind::Date => check_range(value, c, parse_date),
            InputKind::DateTimeLocal => check_range(value, c, parse_datetime_local),
            InputKind::Time => check_range(value, c, parse_time_value),
            _ => Ok(()),
        }
    }
}

fn parse_bound(bound: Option<&String>) -> Option<f64> {
    bound.and_then(|b| b.trim().parse::<f64>().ok())
}

fn check_number(value: &str, c: &Constraints) -> std::result::Result<(), ValidityError> {
    let n: f64 = value
        .trim()
        .parse()
        .map_err(|_| ValidityError::BadInput)?;
    if !n.is_finite() {
        return Err(ValidityError::BadInput);
    }

    let min = parse_bound(c.min.as_ref());
    if let Some(lo) = min {
        if n < lo {
            return Err(ValidityError::RangeUnderflow {
                min: c.min.clone().unwrap_or_default(),
            });
        }
    }
    if let Some(hi) = parse_bound(c.max.as_ref()) {
        if n > hi {
            return Err(ValidityError::RangeOverflow {
                max: c.max.clone().unwrap_or_default(),
            });
        }
    }
    if let Some(step) = parse_bound(c.step.as_ref()).filter(|s| *s > 0.0) {
        let steps = (n - min.unwrap_or(0.0)) / step;
        if (steps - steps.round()).abs() > 1e-9 {
            return Err(ValidityError::StepMismatch {
                step: c.step.clone().unwrap_or_default(),
            });
        }
    }
    Ok(())
}

/// Parse a `date` control value (`YYYY-MM-DD`)
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Parse a `datetime-local` control value; seconds are optional
pub fn parse_datetime_local(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Parse a `time` control value (`HH:mm`, single-digit halves allowed)
pub fn parse_time_value(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M").ok()
}

/// Malformed values are bad input; bounds compare chronologically and an
/// unparseable bound is ignored.
fn check_range<T: PartialOrd>(
    value: &str,
    c: &Constraints,
    parse: impl Fn(&str) -> Option<T>,
) -> std::result::Result<(), ValidityError> {
    let value = parse(value).ok_or(ValidityError::BadInput)?;

    if let Some(min) = &c.min {
        if parse(min).is_some_and(|lo| value < lo) {
            return Err(ValidityError::RangeUnderflow { min: min.clone() });
        }
    }
    if let Some(max) = &c.max {
        if parse(max).is_some_and(|hi| value > hi) {
            return Err(ValidityError::RangeOverflow { max: max.clone() });
        }
    }
    Ok(())
}
