/// Blocking user notifications
///
/// Native message boxes; each call returns once the user dismisses it.
/// Everything shown here is logged as well.
use rfd::{MessageButtons, MessageDialog, MessageLevel};

/// Severity of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

impl Severity {
    fn dialog_level(self) -> MessageLevel {
        match self {
            Severity::Info => MessageLevel::Info,
            Severity::Error => MessageLevel::Error,
        }
    }
}

/// Where user-facing notifications go
pub trait Notifier {
    /// Present the message; logging is done by the provided methods
    fn show(&self, severity: Severity, title: &str, description: &str);

    fn info(&self, title: &str, description: &str) {
        log::info!("{}: {}", title, description);
        self.show(Severity::Info, title, description);
    }

    fn error(&self, title: &str, description: &str) {
        log::error!("{}: {}", title, description);
        self.show(Severity::Error, title, description);
    }
}

/// Modal message box with an OK button
#[derive(Debug, Default, Clone, Copy)]
pub struct DialogNotifier;

impl Notifier for DialogNotifier {
    fn show(&self, severity: Severity, title: &str, description: &str) {
        MessageDialog::new()
            .set_level(severity.dialog_level())
            .set_title(title)
            .set_description(description)
            .set_buttons(MessageButtons::Ok)
            .show();
    }
}
