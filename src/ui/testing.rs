//! Recording fakes for the UI collaborator traits.

use super::{Notification, Notifier, PageElement, PageSurface, ProgressBar, UiContext};
use crate::config::ClientConfig;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Default)]
pub(crate) struct RecordingNotifier {
    received: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub(crate) fn received(&self) -> Vec<Notification> { self.received.lock().unwrap().clone() }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        self.received.lock().unwrap().push(notification);
    }
}

#[derive(Default)]
pub(crate) struct RecordingElement {
    visible: AtomicBool,
}

impl RecordingElement {
    pub(crate) fn is_visible(&self) -> bool { self.visible.load(Ordering::SeqCst) }
}

impl PageElement for RecordingElement {
    fn set_visible(&self, visible: bool) { self.visible.store(visible, Ordering::SeqCst); }
}

pub(crate) struct RecordingPage {
    title: Mutex<String>,
    element: Mutex<Option<Arc<RecordingElement>>>,
    lookups: AtomicUsize,
}

impl RecordingPage {
    pub(crate) fn new(title: &str, element: Option<Arc<RecordingElement>>) -> Self {
        Self {
            title: Mutex::new(String::from(title)),
            element: Mutex::new(element),
            lookups: AtomicUsize::new(0),
        }
    }

    pub(crate) fn attach(&self, element: Arc<RecordingElement>) {
        *self.element.lock().unwrap() = Some(element);
    }

    pub(crate) fn lookups(&self) -> usize { self.lookups.load(Ordering::SeqCst) }
}

impl PageSurface for RecordingPage {
    fn title(&self) -> String { self.title.lock().unwrap().clone() }

    fn set_title(&self, title: &str) { *self.title.lock().unwrap() = String::from(title); }

    fn element_by_id(&self, id: &str) -> Option<Arc<dyn PageElement>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        if id != crate::config::DEFAULT_LOADING_ELEMENT_ID {
            return None;
        }
        self.element.lock().unwrap().clone().map(|el| el as Arc<dyn PageElement>)
    }
}

#[derive(Default)]
pub(crate) struct RecordingProgress {
    starts: AtomicUsize,
    dones: AtomicUsize,
}

impl RecordingProgress {
    pub(crate) fn starts(&self) -> usize { self.starts.load(Ordering::SeqCst) }
    pub(crate) fn dones(&self) -> usize { self.dones.load(Ordering::SeqCst) }
}

impl ProgressBar for RecordingProgress {
    fn start(&self) { self.starts.fetch_add(1, Ordering::SeqCst); }
    fn done(&self) { self.dones.fetch_add(1, Ordering::SeqCst); }
}

/// A `UiContext` wired to recording fakes, with the fakes handed back for inspection.
pub(crate) struct RecordingUi {
    pub(crate) page: Arc<RecordingPage>,
    pub(crate) element: Arc<RecordingElement>,
    pub(crate) progress: Arc<RecordingProgress>,
    pub(crate) notifier: Arc<RecordingNotifier>,
}

impl RecordingUi {
    pub(crate) const TITLE: &'static str = "Nav";

    pub(crate) fn new() -> Self {
        let element = Arc::new(RecordingElement::default());
        Self {
            page: Arc::new(RecordingPage::new(Self::TITLE, Some(Arc::clone(&element)))),
            element,
            progress: Arc::new(RecordingProgress::default()),
            notifier: Arc::new(RecordingNotifier::default()),
        }
    }

    pub(crate) fn context(&self, config: &ClientConfig) -> UiContext {
        UiContext::new(
            config,
            Arc::clone(&self.page) as Arc<dyn PageSurface>,
            Arc::clone(&self.progress) as Arc<dyn ProgressBar>,
            Arc::clone(&self.notifier) as Arc<dyn Notifier>,
        )
    }
}
