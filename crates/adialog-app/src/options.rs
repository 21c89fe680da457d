//! Dialog option records and typed results
//!
//! Options deserialize from the same camelCase JSON shape callers already
//! use (`className`, `okText`, `choiceList`, `includeTime`). Every text field
//! is optional and defaults to empty.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use adialog_core::prelude::*;

/// Options shared by every dialog kind
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DialogOptions {
    pub title: String,
    pub message: String,
    /// Extra class token(s) appended after the defaults
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancel_text: Option<String>,
}

impl DialogOptions {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn with_ok_text(mut self, text: impl Into<String>) -> Self {
        self.ok_text = Some(text.into());
        self
    }

    pub fn with_cancel_text(mut self, text: impl Into<String>) -> Self {
        self.cancel_text = Some(text.into());
        self
    }
}

/// Alert options: like [`DialogOptions`] without a cancel label
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlertOptions {
    pub title: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ok_text: Option<String>,
}

impl AlertOptions {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            ..Default::default()
        }
    }

    pub(crate) fn into_dialog(self) -> DialogOptions {
        DialogOptions {
            title: self.title,
            message: self.message,
            class_name: self.class_name,
            ok_text: self.ok_text,
            cancel_text: None,
        }
    }
}

pub type ConfirmOptions = DialogOptions;

/// One entry of a select dialog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceItem {
    /// Value doubles as the label
    Plain(String),
    Labeled { value: String, label: String },
}

impl ChoiceItem {
    pub fn value(&self) -> &str {
        match self {
            ChoiceItem::Plain(value) => value,
            ChoiceItem::Labeled { value, .. } => value,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ChoiceItem::Plain(value) => value,
            ChoiceItem::Labeled { label, .. } => label,
        }
    }
}

impl From<&str> for ChoiceItem {
    fn from(value: &str) -> Self {
        ChoiceItem::Plain(value.to_string())
    }
}

impl From<(&str, &str)> for ChoiceItem {
    fn from((value, label): (&str, &str)) -> Self {
        ChoiceItem::Labeled {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectOptions {
    #[serde(flatten)]
    pub dialog: DialogOptions,
    #[serde(default)]
    pub choice_list: Vec<ChoiceItem>,
    /// Checkboxes instead of radio buttons
    #[serde(default)]
    pub multiselect: bool,
}

impl SelectOptions {
    pub fn new<I, C>(dialog: DialogOptions, choices: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<ChoiceItem>,
    {
        Self {
            dialog,
            choice_list: choices.into_iter().map(Into::into).collect(),
            multiselect: false,
        }
    }

    pub fn multiselect(mut self) -> Self {
        self.multiselect = true;
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextPrompt {
    #[serde(flatten)]
    pub dialog: DialogOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    /// Values are cut back to this many characters as they are typed; 0 means no limit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maxlength: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberPrompt {
    #[serde(flatten)]
    pub dialog: DialogOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatePrompt {
    #[serde(flatten)]
    pub dialog: DialogOptions,
    #[serde(default, with = "date_value", skip_serializing_if = "Option::is_none")]
    pub value: Option<NaiveDateTime>,
    #[serde(default, with = "date_value", skip_serializing_if = "Option::is_none")]
    pub min: Option<NaiveDateTime>,
    #[serde(default, with = "date_value", skip_serializing_if = "Option::is_none")]
    pub max: Option<NaiveDateTime>,
    /// Ask for a time of day as well as a date
    #[serde(default)]
    pub include_time: bool,
}

/// Bounds and initial value are `HH:mm` strings, checked when the input is built
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimePrompt {
    #[serde(flatten)]
    pub dialog: DialogOptions,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<String>,
}

/// Prompt options, discriminated by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PromptOptions {
    String(TextPrompt),
    Number(NumberPrompt),
    Date(DatePrompt),
    Time(TimePrompt),
}

const PROMPT_KINDS: [&str; 4] = ["string", "number", "date", "time"];

impl PromptOptions {
    /// Parse options supplied as JSON.
    ///
    /// A missing or unrecognised `type` is reported as
    /// [`Error::UnsupportedOptionShape`]; other shape problems as
    /// [`Error::InvalidOptions`].
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: Value = serde_json::from_str(json)
            .map_err(|e| Error::invalid_options(format!("prompt options are not valid JSON: {e}")))?;
        Self::from_value(raw)
    }

    pub fn from_value(raw: Value) -> Result<Self> {
        match raw.get("type") {
            Some(Value::String(kind)) if PROMPT_KINDS.contains(&kind.as_str()) => {}
            Some(Value::String(kind)) => {
                return Err(Error::unsupported_option_shape(Some(kind.clone())))
            }
            Some(other) => return Err(Error::unsupported_option_shape(Some(other.to_string()))),
            None => return Err(Error::unsupported_option_shape(None)),
        }
        serde_json::from_value(raw).map_err(|e| Error::invalid_options(e.to_string()))
    }

    pub fn dialog(&self) -> &DialogOptions {
        match self {
            PromptOptions::String(o) => &o.dialog,
            PromptOptions::Number(o) => &o.dialog,
            PromptOptions::Date(o) => &o.dialog,
            PromptOptions::Time(o) => &o.dialog,
        }
    }

    /// The `type` discriminant
    pub fn kind(&self) -> &'static str {
        match self {
            PromptOptions::String(_) => "string",
            PromptOptions::Number(_) => "number",
            PromptOptions::Date(_) => "date",
            PromptOptions::Time(_) => "time",
        }
    }
}

/// A prompt's typed answer
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PromptValue {
    Text(String),
    Number(f64),
    Date(NaiveDateTime),
    /// Zero-padded `HH:mm`
    Time(String),
}

/// A select dialog's answer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Selection {
    Single(String),
    /// Checked values in list order
    Multiple(Vec<String>),
}

/// Parse a date (`YYYY-MM-DD`, midnight) or a local datetime
/// (`YYYY-MM-DDTHH:MM`, seconds optional)
pub fn parse_date_value(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

mod date_value {
    use chrono::NaiveDateTime;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(
        value: &Option<NaiveDateTime>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => serializer.serialize_str(&dt.format("%Y-%m-%dT%H:%M").to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<NaiveDateTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| {
            super::parse_date_value(&s)
                .ok_or_else(|| D::Error::custom(format!("invalid date value {s:?}")))
        })
        .transpose()
    }
}
