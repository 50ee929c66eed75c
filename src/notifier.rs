//! User-facing notifications for failed browser operations.

use crate::config::APP_TITLE;
use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Shows a blocking message to the end user.
pub trait Notifier: Send + Sync {
    fn alert(&self, message: &str);
}

/// Native message box; returns once the user dismisses it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialogNotifier;

impl Notifier for DialogNotifier {
    fn alert(&self, message: &str) {
        let _ = MessageDialog::new()
            .set_level(MessageLevel::Error)
            .set_title(APP_TITLE)
            .set_description(message)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
