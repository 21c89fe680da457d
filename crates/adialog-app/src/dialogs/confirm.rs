use adialog_core::prelude::*;

use super::{DialogKind, Dialogs};
use crate::options::ConfirmOptions;

impl Dialogs {
    /// Ask a yes/no question: `true` only when accepted with OK
    pub async fn confirm(&self, options: ConfirmOptions) -> Result<bool> {
        let element = self
            .frame(DialogKind::Confirm, &options)
            .push_button(self.cancel_button(&options))
            .push_button(self.ok_button(&options));

        Ok(self.run(element).await?.is_some())
    }
}
