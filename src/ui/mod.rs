//! UI side channels used by the HTTP layer: notifications and the loading indicator.
//!
//! The HTTP layer never owns a concrete UI. It talks to the collaborator traits defined
//! here, bundled in a [`UiContext`] that is constructed once at application start and
//! shared with the client.

mod console;
mod loading;
#[cfg(test)]
pub(crate) mod testing;

pub use console::{ConsoleElement, ConsoleNotifier, ConsolePage, ConsoleProgress};
pub use loading::LoadingIndicator;

use crate::config::{ClientConfig, Locale};
use std::sync::Arc;
use strum_macros::Display;

/// Severity of a user facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Info,
    Warning,
    Error,
}

/// A message shown to the user through a [`Notifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    kind: NotificationKind,
    title: String,
    message: String,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { kind, title: title.into(), message: message.into() }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NotificationKind::Error, title, message)
    }

    pub fn kind(&self) -> NotificationKind { self.kind }
    pub fn title(&self) -> &str { &self.title }
    pub fn message(&self) -> &str { &self.message }
}

/// Displays notifications to the user.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// The page hosting the application: its title and addressable elements.
pub trait PageSurface: Send + Sync {
    fn title(&self) -> String;
    fn set_title(&self, title: &str);
    /// Looks up an element by its identifier.
    fn element_by_id(&self, id: &str) -> Option<Arc<dyn PageElement>>;
}

/// A page element whose visibility can be toggled.
pub trait PageElement: Send + Sync {
    fn set_visible(&self, visible: bool);
}

/// A top-of-page progress bar.
pub trait ProgressBar: Send + Sync {
    fn start(&self);
    fn done(&self);
}

/// Process-wide UI state handed to the HTTP layer.
pub struct UiContext {
    loading: LoadingIndicator,
    notifier: Arc<dyn Notifier>,
    locale: Locale,
}

impl UiContext {
    /// Builds the context. The page title at this point becomes the title restored
    /// after every request.
    pub fn new(
        config: &ClientConfig,
        page: Arc<dyn PageSurface>,
        progress: Arc<dyn ProgressBar>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            loading: LoadingIndicator::new(
                page,
                progress,
                config.loading_element_id(),
                config.locale(),
            ),
            notifier,
            locale: config.locale(),
        }
    }

    /// A context rendering everything to the terminal.
    pub fn console(config: &ClientConfig, title: &str) -> Self {
        let page = ConsolePage::new(title).with_element(config.loading_element_id());
        Self::new(
            config,
            Arc::new(page),
            Arc::new(ConsoleProgress::default()),
            Arc::new(ConsoleNotifier),
        )
    }

    pub fn loading(&self) -> &LoadingIndicator { &self.loading }
    pub fn locale(&self) -> Locale { self.locale }

    /// Raises an error notification, falling back to the localized "unknown error"
    /// message when `message` is missing or empty.
    pub fn notify_error(&self, title: &str, message: Option<&str>) {
        let message = message
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| self.locale.unknown_error());
        self.notifier.notify(Notification::error(title, message));
    }
}
