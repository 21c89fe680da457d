//! Command line arguments and their translation into dialog calls

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use serde_json::{json, Map, Value};

use adialog_app::{
    AlertOptions, ChoiceItem, ConfirmOptions, DialogOptions, Dialogs, PromptOptions,
    SelectOptions,
};
use adialog_core::prelude::*;

/// adialog - awaitable dialogs in the terminal
#[derive(Parser, Debug)]
#[command(name = "adialog")]
#[command(about = "Show a dialog in the terminal and print the answer as JSON", long_about = None)]
pub struct Args {
    /// Settings file (defaults to <config dir>/async-dialogs/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Title, message and label overrides shared by every dialog
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct Common {
    #[arg(long, default_value = "")]
    pub title: String,

    #[arg(long, default_value = "")]
    pub message: String,

    /// Extra class names for styling
    #[arg(long, value_name = "CLASSES")]
    pub class_name: Option<String>,

    #[arg(long, value_name = "TEXT")]
    pub ok_text: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show a message with a single OK button
    Alert {
        #[command(flatten)]
        common: Common,
    },

    /// Ask a yes/no question; prints true or false
    Confirm {
        #[command(flatten)]
        common: Common,

        #[arg(long, value_name = "TEXT")]
        cancel_text: Option<String>,
    },

    /// Pick from a list of choices
    Select {
        #[command(flatten)]
        common: Common,

        #[arg(long, value_name = "TEXT")]
        cancel_text: Option<String>,

        /// A choice as `value` or `value=label`; repeat for each choice
        #[arg(long = "choice", value_name = "VALUE[=LABEL]", required = true)]
        choices: Vec<String>,

        /// Allow checking several choices
        #[arg(long)]
        multiselect: bool,
    },

    /// Ask for a typed value
    Prompt {
        /// Full prompt options as JSON, e.g. '{"type":"time","title":"When?"}'
        #[arg(long, value_name = "JSON", conflicts_with = "kind")]
        options: Option<String>,

        #[arg(long = "type", value_enum, value_name = "TYPE")]
        kind: Option<PromptKind>,

        #[command(flatten)]
        common: Common,

        #[arg(long, value_name = "TEXT")]
        cancel_text: Option<String>,

        /// Initial value of the input
        #[arg(long)]
        value: Option<String>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    String,
    Number,
    Date,
    Time,
}

impl PromptKind {
    fn tag(self) -> &'static str {
        match self {
            PromptKind::String => "string",
            PromptKind::Number => "number",
            PromptKind::Date => "date",
            PromptKind::Time => "time",
        }
    }
}

/// A fully validated dialog call
#[derive(Debug, Clone, PartialEq)]
pub enum DialogRequest {
    Alert(AlertOptions),
    Confirm(ConfirmOptions),
    Select(SelectOptions),
    Prompt(PromptOptions),
}

impl DialogRequest {
    /// Subcommand name, for log messages
    pub fn kind(&self) -> &'static str {
        match self {
            DialogRequest::Alert(_) => "alert",
            DialogRequest::Confirm(_) => "confirm",
            DialogRequest::Select(_) => "select",
            DialogRequest::Prompt(_) => "prompt",
        }
    }
}

impl Common {
    fn into_dialog(self, cancel_text: Option<String>) -> DialogOptions {
        DialogOptions {
            title: self.title,
            message: self.message,
            class_name: self.class_name,
            ok_text: self.ok_text,
            cancel_text,
        }
    }
}

/// Parse `value` or `value=label`
pub fn parse_choice(raw: &str) -> ChoiceItem {
    match raw.split_once('=') {
        Some((value, label)) => ChoiceItem::from((value, label)),
        None => ChoiceItem::from(raw),
    }
}

impl Command {
    /// Turn the parsed arguments into dialog options
    ///
    /// Prompt options go through the same JSON decoding as `--options`, so
    /// both spellings reject the same inputs.
    pub fn into_request(self) -> Result<DialogRequest> {
        match self {
            Command::Alert { common } => Ok(DialogRequest::Alert(AlertOptions {
                title: common.title,
                message: common.message,
                class_name: common.class_name,
                ok_text: common.ok_text,
            })),
            Command::Confirm {
                common,
                cancel_text,
            } => Ok(DialogRequest::Confirm(common.into_dialog(cancel_text))),
            Command::Select {
                common,
                cancel_text,
                choices,
                multiselect,
            } => {
                let mut options = SelectOptions::new(
                    common.into_dialog(cancel_text),
                    choices.iter().map(|c| parse_choice(c)),
                );
                options.multiselect = multiselect;
                Ok(DialogRequest::Select(options))
            }
            Command::Prompt {
                options: Some(json),
                ..
            } => PromptOptions::from_json(&json).map(DialogRequest::Prompt),
            Command::Prompt {
                options: None,
                kind,
                common,
                cancel_text,
                value,
            } => {
                let kind = kind.ok_or_else(|| Error::unsupported_option_shape(None))?;
                let raw = prompt_value(kind, common.into_dialog(cancel_text), value)?;
                PromptOptions::from_value(raw).map(DialogRequest::Prompt)
            }
        }
    }
}

fn prompt_value(kind: PromptKind, dialog: DialogOptions, value: Option<String>) -> Result<Value> {
    let mut raw = match serde_json::to_value(dialog)? {
        Value::Object(map) => map,
        _ => Map::new(),
    };
    raw.insert("type".to_string(), json!(kind.tag()));

    if let Some(value) = value {
        let value = match kind {
            PromptKind::Number => {
                let n: f64 = value.trim().parse().map_err(|_| {
                    Error::invalid_options(format!("number prompt value {value:?} is not a number"))
                })?;
                json!(n)
            }
            _ => json!(value),
        };
        raw.insert("value".to_string(), value);
    }
    Ok(Value::Object(raw))
}

/// Run the requested dialog and encode its answer
///
/// Cancellation is `null`. An acknowledged alert is `null` as well, since
/// it carries no answer.
pub async fn execute(dialogs: &Dialogs, request: DialogRequest) -> Result<Value> {
    let value = match request {
        DialogRequest::Alert(options) => {
            dialogs.alert(options).await?;
            Value::Null
        }
        DialogRequest::Confirm(options) => Value::Bool(dialogs.confirm(options).await?),
        DialogRequest::Select(options) => serde_json::to_value(dialogs.select(options).await?)?,
        DialogRequest::Prompt(options) => serde_json::to_value(dialogs.prompt(options).await?)?,
    };
    debug!("Dialog answered with {}", value);
    Ok(value)
}
