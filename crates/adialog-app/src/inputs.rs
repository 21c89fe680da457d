//! Typed input factory for prompt dialogs
//!
//! Each prompt type gets exactly one required control named
//! [`PROMPT_FIELD`]. Text inputs enforce their limits live on every edit;
//! number and date bounds stay declarative and are checked when the form is
//! submitted. Time bounds are checked here, before anything is attached.

use chrono::NaiveDateTime;

use adialog_core::prelude::*;
use adialog_core::TimeComponent;
use adialog_host::{Behavior, InputControl, InputKind, InputMode};

use crate::options::{DatePrompt, NumberPrompt, PromptOptions, TextPrompt, TimePrompt};

/// Field name of the single control a prompt carries
pub const PROMPT_FIELD: &str = "ad-prompt-user-input";

/// Build the control matching a prompt's `type`
pub fn prompt_input(options: &PromptOptions) -> Result<InputControl> {
    match options {
        PromptOptions::String(o) => text_input(o),
        PromptOptions::Number(o) => Ok(number_input(o)),
        PromptOptions::Date(o) => Ok(date_input(o)),
        PromptOptions::Time(o) => time_input(o),
    }
}

fn base(kind: InputKind) -> InputControl {
    InputControl::new(PROMPT_FIELD, kind)
        .required()
        .with_behavior(Behavior::SuppressEnter)
}

pub fn text_input(options: &TextPrompt) -> Result<InputControl> {
    let mut input = base(InputKind::Text).with_input_mode(InputMode::Text);

    if let Some(max) = options.maxlength.filter(|m| *m > 0) {
        input = input
            .with_maxlength(max)
            .with_behavior(Behavior::Truncate(max));
    }
    if let Some(pattern) = &options.pattern {
        input = input
            .with_pattern(pattern)?
            .with_behavior(Behavior::pattern(pattern)?);
    }
    if let Some(placeholder) = &options.placeholder {
        input = input.with_placeholder(placeholder);
    }
    if let Some(value) = &options.value {
        input = input.with_value(value);
    }
    Ok(input)
}

pub fn number_input(options: &NumberPrompt) -> InputControl {
    let mut input = base(InputKind::Number).with_input_mode(InputMode::Decimal);

    if let Some(value) = options.value {
        input = input.with_value(format_number(value));
    }
    if let Some(min) = options.min {
        input = input.with_min(format_number(min));
    }
    if let Some(max) = options.max {
        input = input.with_max(format_number(max));
    }
    if let Some(step) = options.step {
        input = input.with_step(format_number(step));
    }
    input
}

pub fn date_input(options: &DatePrompt) -> InputControl {
    let kind = if options.include_time {
        InputKind::DateTimeLocal
    } else {
        InputKind::Date
    };
    let mut input = base(kind).with_input_mode(InputMode::DateTime);
    let format = |dt: &NaiveDateTime| format_date_value(dt, options.include_time);

    if let Some(value) = &options.value {
        input = input.with_value(format(value));
    }
    if let Some(min) = &options.min {
        input = input.with_min(format(min));
    }
    if let Some(max) = &options.max {
        input = input.with_max(format(max));
    }
    input
}

pub fn time_input(options: &TimePrompt) -> Result<InputControl> {
    let mut input = base(InputKind::Time).with_input_mode(InputMode::DateTime);

    if let Some(value) = &options.value {
        input = input.with_value(parse_time("value", value)?);
    }
    if let Some(min) = &options.min {
        input = input.with_min(parse_time("min", min)?);
    }
    if let Some(max) = &options.max {
        input = input.with_max(parse_time("max", max)?);
    }
    Ok(input)
}

/// Check an `HH:mm` string and return it zero-padded.
///
/// Hours run 0-23 and minutes 0-59; both halves must be numeric.
pub fn parse_time(field: &'static str, raw: &str) -> Result<String> {
    let (hours, minutes) = raw
        .split_once(':')
        .ok_or_else(|| Error::invalid_time(field, TimeComponent::Format, raw))?;

    let hours: u8 = parse_component(hours)
        .ok_or_else(|| Error::invalid_time(field, TimeComponent::Hours, raw))?;
    let minutes: u8 = parse_component(minutes)
        .ok_or_else(|| Error::invalid_time(field, TimeComponent::Minutes, raw))?;

    if hours > 23 {
        return Err(Error::invalid_time(field, TimeComponent::Hours, raw));
    }
    if minutes > 59 {
        return Err(Error::invalid_time(field, TimeComponent::Minutes, raw));
    }
    Ok(format!("{hours:02}:{minutes:02}"))
}

fn parse_component(part: &str) -> Option<u8> {
    if part.is_empty() || part.len() > 2 || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Attribute form of a number: `5` rather than `5.0`
fn format_number(n: f64) -> String {
    n.to_string()
}

/// `YYYY-MM-DD`, or `YYYY-MM-DDTHH:MM` when the time is asked for too
pub fn format_date_value(dt: &NaiveDateTime, include_time: bool) -> String {
    if include_time {
        dt.format("%Y-%m-%dT%H:%M").to_string()
    } else {
        dt.format("%Y-%m-%d").to_string()
    }
}
