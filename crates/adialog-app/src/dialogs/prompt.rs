use adialog_core::prelude::*;
use adialog_core::FieldMap;
use adialog_host::parse_time_value;

use super::{DialogKind, Dialogs};
use crate::inputs::{prompt_input, PROMPT_FIELD};
use crate::options::{parse_date_value, PromptOptions, PromptValue};

impl Dialogs {
    /// Ask for one typed value.
    ///
    /// The input is built before anything is attached, so bad options (an
    /// invalid pattern or time bound) fail without showing a dialog. A
    /// declined prompt, or an answer that does not convert to the requested
    /// type, yields `None`.
    pub async fn prompt(&self, options: PromptOptions) -> Result<Option<PromptValue>> {
        let input = prompt_input(&options)?;
        let dialog = options.dialog();
        let element = self
            .frame(DialogKind::Prompt, dialog)
            .push_control(input)
            .push_button(self.cancel_button(dialog))
            .push_button(self.ok_button(dialog));

        let Some(fields) = self.run(element).await? else {
            return Ok(None);
        };
        match coerce(&options, &fields) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("{}", e);
                Ok(None)
            }
        }
    }

    /// [`prompt`](Self::prompt) with options given as JSON
    pub async fn prompt_json(&self, json: &str) -> Result<Option<PromptValue>> {
        let options = PromptOptions::from_json(json)?;
        self.prompt(options).await
    }
}

/// Convert the raw field value to the prompt's result type
fn coerce(options: &PromptOptions, fields: &FieldMap) -> Result<PromptValue> {
    let raw = fields
        .get(PROMPT_FIELD)
        .ok_or_else(|| Error::extraction(options.kind(), format!("no {PROMPT_FIELD} field")))?;

    match options {
        PromptOptions::String(_) => Ok(PromptValue::Text(raw.to_string())),
        PromptOptions::Number(_) => raw
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .map(PromptValue::Number)
            .ok_or_else(|| Error::extraction("number prompt", format!("{raw:?} is not a number"))),
        PromptOptions::Date(_) => parse_date_value(raw)
            .map(PromptValue::Date)
            .ok_or_else(|| Error::extraction("date prompt", format!("{raw:?} is not a date"))),
        PromptOptions::Time(_) => parse_time_value(raw)
            .map(|t| PromptValue::Time(t.format("%H:%M").to_string()))
            .ok_or_else(|| Error::extraction("time prompt", format!("{raw:?} is not a time"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adialog_host::test_utils::wait_for_modal;
    use adialog_host::{ClickOutcome, Document, Key, KeyOutcome, ValidityError};

    use crate::options::{DatePrompt, NumberPrompt, TextPrompt, TimePrompt};

    #[tokio::test]
    async fn test_number_prompt_coerces() {
        let document = Document::new();
        let dialogs = Dialogs::new(document.clone());
        let options = PromptOptions::Number(NumberPrompt {
            value: Some(5.0),
            ..Default::default()
        });

        let (answer, _) = tokio::join!(dialogs.prompt(options), async {
            let id = wait_for_modal(&document).await;
            document.input(&id, 0, "7").unwrap();
            document.accept(&id).unwrap();
        });

        assert_eq!(answer.unwrap(), Some(PromptValue::Number(7.0)));
        assert!(document.is_empty());
    }

    #[tokio::test]
    async fn test_text_prompt_live_behaviours() {
        let document = Document::new();
        let dialogs = Dialogs::new(document.clone());
        let options = PromptOptions::String(TextPrompt {
            maxlength: Some(4),
            pattern: Some("^[0-9]*$".into()),
            ..Default::default()
        });

        let (answer, _) = tokio::join!(dialogs.prompt(options), async {
            let id = wait_for_modal(&document).await;
            assert_eq!(document.input(&id, 0, "123456").unwrap(), "1234");
            assert_eq!(document.input(&id, 0, "12ab").unwrap(), "12");

            // Enter does not submit from the text control
            let outcome = document.key_down(&id, Some(0), Key::Enter).unwrap();
            assert_eq!(outcome, KeyOutcome::Prevented);

            document.accept(&id).unwrap();
        });

        assert_eq!(answer.unwrap(), Some(PromptValue::Text("12".into())));
    }

    #[tokio::test]
    async fn test_required_blocks_empty_submit() {
        let document = Document::new();
        let dialogs = Dialogs::new(document.clone());
        let options = PromptOptions::String(TextPrompt::default());

        let (answer, _) = tokio::join!(dialogs.prompt(options), async {
            let id = wait_for_modal(&document).await;
            let outcome = document.accept(&id).unwrap();
            assert_eq!(
                outcome,
                ClickOutcome::Blocked {
                    control: 0,
                    error: ValidityError::ValueMissing
                }
            );
            document.input(&id, 0, "Ada").unwrap();
            document.accept(&id).unwrap();
        });

        assert_eq!(answer.unwrap(), Some(PromptValue::Text("Ada".into())));
    }

    #[tokio::test]
    async fn test_date_prompt_returns_midnight() {
        let document = Document::new();
        let dialogs = Dialogs::new(document.clone());
        let options = PromptOptions::Date(DatePrompt::default());

        let (answer, _) = tokio::join!(dialogs.prompt(options), async {
            let id = wait_for_modal(&document).await;
            document.input(&id, 0, "2024-02-29").unwrap();
            document.accept(&id).unwrap();
        });

        let expected = parse_date_value("2024-02-29T00:00").map(PromptValue::Date);
        assert_eq!(answer.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_time_prompt_returns_string() {
        let document = Document::new();
        let dialogs = Dialogs::new(document.clone());
        let options = PromptOptions::Time(TimePrompt {
            value: Some("08:30".into()),
            ..Default::default()
        });

        let (answer, _) = tokio::join!(dialogs.prompt(options), async {
            let id = wait_for_modal(&document).await;
            document.accept(&id).unwrap();
        });

        assert_eq!(answer.unwrap(), Some(PromptValue::Time("08:30".into())));
    }

    #[tokio::test]
    async fn test_time_prompt_holds_malformed_entry_and_pads_answer() {
        let document = Document::new();
        let dialogs = Dialogs::new(document.clone());
        let options = PromptOptions::Time(TimePrompt {
            max: Some("17:30".into()),
            ..Default::default()
        });

        let (answer, _) = tokio::join!(dialogs.prompt(options), async {
            let id = wait_for_modal(&document).await;
            document.input(&id, 0, "noon").unwrap();
            assert_eq!(
                document.accept(&id).unwrap(),
                ClickOutcome::Blocked {
                    control: 0,
                    error: ValidityError::BadInput
                }
            );

            document.input(&id, 0, "9:05").unwrap();
            assert_eq!(document.accept(&id).unwrap(), ClickOutcome::Closed);
        });

        assert_eq!(answer.unwrap(), Some(PromptValue::Time("09:05".into())));
    }

    #[tokio::test]
    async fn test_date_prompt_holds_impossible_date() {
        let document = Document::new();
        let dialogs = Dialogs::new(document.clone());
        let options = PromptOptions::Date(DatePrompt::default());

        let (answer, _) = tokio::join!(dialogs.prompt(options), async {
            let id = wait_for_modal(&document).await;
            document.input(&id, 0, "2024-13-45").unwrap();
            assert!(matches!(
                document.accept(&id).unwrap(),
                ClickOutcome::Blocked {
                    error: ValidityError::BadInput,
                    ..
                }
            ));
            assert_eq!(document.open_modals(), vec![id.clone()]);

            document.input(&id, 0, "2024-12-25").unwrap();
            document.accept(&id).unwrap();
        });

        let expected = parse_date_value("2024-12-25").map(PromptValue::Date);
        assert_eq!(answer.unwrap(), expected);
    }

    #[tokio::test]
    async fn test_invalid_time_fails_before_attach() {
        let document = Document::new();
        let dialogs = Dialogs::new(document.clone());
        let options = PromptOptions::Time(TimePrompt {
            min: Some("24:00".into()),
            ..Default::default()
        });

        let err = dialogs.prompt(options).await.unwrap_err();
        assert!(matches!(err, Error::InvalidTimeComponent { .. }));
        assert!(document.is_empty());
    }

    #[tokio::test]
    async fn test_unsupported_json_fails_before_attach() {
        let document = Document::new();
        let dialogs = Dialogs::new(document.clone());

        let err = dialogs
            .prompt_json(r#"{"type":"color","title":"Pick"}"#)
            .await
            .unwrap_err();
        assert!(matches!(err, Error::UnsupportedOptionShape { .. }));
        assert!(document.is_empty());
    }

    #[test]
    fn test_uncoercible_number_is_extraction_error() {
        let mut fields = FieldMap::new();
        fields.push(PROMPT_FIELD, "seven");
        let options = PromptOptions::Number(NumberPrompt::default());

        let err = coerce(&options, &fields).unwrap_err();
        assert!(matches!(err, Error::Extraction { .. }));
        assert!(err.is_recoverable());
    }

    #[tokio::test]
    async fn test_cancel_is_none() {
        let document = Document::new();
        let dialogs = Dialogs::new(document.clone());
        let options = PromptOptions::String(TextPrompt::default());

        let (answer, _) = tokio::join!(dialogs.prompt(options), async {
            let id = wait_for_modal(&document).await;
            document.submit(&id, "cancel").unwrap();
        });

        assert_eq!(answer.unwrap(), None);
    }
}
