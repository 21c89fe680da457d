use adialog_core::prelude::*;
use adialog_host::{InputControl, InputKind};

use super::{DialogKind, Dialogs};
use crate::options::{Selection, SelectOptions};

/// Field name shared by every choice of a select dialog
pub const SELECT_FIELD: &str = "ad-select-option";

impl Dialogs {
    /// Let the user pick from `choice_list`.
    ///
    /// Single-select starts with the first choice checked and yields
    /// [`Selection::Single`]; multiselect yields the checked values in list
    /// order. `None` when the dialog is declined.
    pub async fn select(&self, options: SelectOptions) -> Result<Option<Selection>> {
        let SelectOptions {
            dialog,
            choice_list,
            multiselect,
        } = options;

        let kind = if multiselect {
            InputKind::Checkbox
        } else {
            InputKind::Radio
        };
        let mut element = self.frame(DialogKind::Select, &dialog);
        for (i, choice) in choice_list.iter().enumerate() {
            element = element.push_control(
                InputControl::new(SELECT_FIELD, kind)
                    .with_value(choice.value())
                    .with_label(choice.label())
                    .checked(i == 0 && !multiselect),
            );
        }
        let element = element
            .push_button(self.cancel_button(&dialog))
            .push_button(self.ok_button(&dialog));

        let Some(fields) = self.run(element).await? else {
            return Ok(None);
        };

        if multiselect {
            let values = fields.get_all(SELECT_FIELD);
            return Ok(Some(Selection::Multiple(
                values.into_iter().map(str::to_string).collect(),
            )));
        }
        match fields.get(SELECT_FIELD) {
            Some(value) => Ok(Some(Selection::Single(value.to_string()))),
            None => {
                warn!("Select dialog accepted without a selected choice");
                Ok(None)
            }
        }
    }
}
