use super::{PageElement, PageSurface, ProgressBar};
use crate::config::Locale;
use crate::event;
use std::sync::{Arc, Mutex, PoisonError};

/// Progress bar, page title and loading element shown while a request is in flight.
///
/// There is no reference counting: overlapping requests share this single state and the
/// last `start`/`stop` call wins.
pub struct LoadingIndicator {
    /// Page whose title and element are toggled.
    page: Arc<dyn PageSurface>,
    /// Top-of-page progress bar.
    progress: Arc<dyn ProgressBar>,
    /// Identifier of the loading element.
    element_id: String,
    /// Element handle, cached after the first successful lookup.
    element: Mutex<Option<Arc<dyn PageElement>>>,
    /// Title captured at construction, restored by `stop`.
    default_title: String,
    /// Title shown while loading.
    loading_title: &'static str,
}

impl LoadingIndicator {
    pub fn new(
        page: Arc<dyn PageSurface>,
        progress: Arc<dyn ProgressBar>,
        element_id: &str,
        locale: Locale,
    ) -> Self {
        let default_title = page.title();
        Self {
            page,
            progress,
            element_id: String::from(element_id),
            element: Mutex::new(None),
            default_title,
            loading_title: locale.loading_title(),
        }
    }

    /// Shows the indicator.
    ///
    /// The loading element is looked up lazily; a failed lookup is retried on the next call.
    pub fn start(&self) {
        event!("Loading indicator on");
        self.page.set_title(self.loading_title);
        self.progress.start();
        let mut element = self.element.lock().unwrap_or_else(PoisonError::into_inner);
        if element.is_none() {
            *element = self.page.element_by_id(&self.element_id);
        }
        if let Some(el) = element.as_ref() {
            el.set_visible(true);
        }
    }

    /// Hides the indicator and restores the original title. Never looks the element up.
    pub fn stop(&self) {
        event!("Loading indicator off");
        self.page.set_title(&self.default_title);
        self.progress.done();
        let element = self.element.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(el) = element.as_ref() {
            el.set_visible(false);
        }
    }

    pub fn default_title(&self) -> &str { &self.default_title }
}
