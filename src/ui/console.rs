use super::{Notification, NotificationKind, Notifier, PageElement, PageSurface, ProgressBar};
use crate::{error, event, info, warn};
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::sync::atomic::{AtomicBool, Ordering};

/// Prints notifications through the crate logger.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        let (title, message) = (notification.title(), notification.message());
        match notification.kind() {
            NotificationKind::Error => error!("{title}: {message}"),
            NotificationKind::Warning => warn!("{title}: {message}"),
            NotificationKind::Success | NotificationKind::Info => info!("{title}: {message}"),
        }
    }
}

/// A headless page: keeps its title in memory and knows a fixed set of elements.
pub struct ConsolePage {
    title: Mutex<String>,
    elements: HashMap<String, Arc<ConsoleElement>>,
}

impl ConsolePage {
    pub fn new(title: &str) -> Self {
        Self { title: Mutex::new(String::from(title)), elements: HashMap::new() }
    }

    /// Registers an element reachable through `element_by_id`.
    #[must_use]
    pub fn with_element(mut self, id: &str) -> Self {
        self.elements.insert(String::from(id), Arc::new(ConsoleElement::new(id)));
        self
    }
}

impl PageSurface for ConsolePage {
    fn title(&self) -> String {
        self.title.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    fn set_title(&self, title: &str) {
        event!("Page title: {title}");
        *self.title.lock().unwrap_or_else(PoisonError::into_inner) = String::from(title);
    }

    fn element_by_id(&self, id: &str) -> Option<Arc<dyn PageElement>> {
        self.elements.get(id).map(|el| Arc::clone(el) as Arc<dyn PageElement>)
    }
}

/// An element of a [`ConsolePage`], only tracking its visibility.
#[derive(Debug)]
pub struct ConsoleElement {
    id: String,
    visible: AtomicBool,
}

impl ConsoleElement {
    fn new(id: &str) -> Self {
        Self { id: String::from(id), visible: AtomicBool::new(false) }
    }

    pub fn is_visible(&self) -> bool { self.visible.load(Ordering::Relaxed) }
}

impl PageElement for ConsoleElement {
    fn set_visible(&self, visible: bool) {
        event!("Element #{} display: {}", self.id, if visible { "block" } else { "none" });
        self.visible.store(visible, Ordering::Relaxed);
    }
}

/// Progress bar that logs how long it was running.
#[derive(Debug, Default)]
pub struct ConsoleProgress {
    started: Mutex<Option<DateTime<Utc>>>,
}

impl ProgressBar for ConsoleProgress {
    fn start(&self) {
        let mut started = self.started.lock().unwrap_or_else(PoisonError::into_inner);
        if started.is_none() {
            *started = Some(Utc::now());
        }
    }

    fn done(&self) {
        let started = self.started.lock().unwrap_or_else(PoisonError::into_inner).take();
        if let Some(t) = started {
            event!("Progress done after {}ms", (Utc::now() - t).num_milliseconds());
        }
    }
}
