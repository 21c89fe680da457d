use adialog_core::prelude::*;

use super::{DialogKind, Dialogs};
use crate::options::AlertOptions;

impl Dialogs {
    /// Show a message with a single OK button.
    ///
    /// Resolves once the alert closes, however it was closed.
    pub async fn alert(&self, options: AlertOptions) -> Result<()> {
        let options = options.into_dialog();
        let element = self
            .frame(DialogKind::Alert, &options)
            .push_button(self.ok_button(&options));

        self.run(element).await?;
        Ok(())
    }
}
