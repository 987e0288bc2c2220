//! `reqwest_middleware` hooks wrapped around every call, composed once when the client is
//! built.
//!
//! The chain `[loading, notification, cache_bust]` runs outermost first: loading sees the
//! request first and the response last.

mod cache_bust;
mod loading;
mod notification;

pub use cache_bust::{CACHE_BUST_PARAM, CacheBustMiddleware};
pub use loading::LoadingMiddleware;
pub use notification::NotificationMiddleware;

use crate::ui::UiContext;
use reqwest_middleware::Middleware;
use std::sync::Arc;

/// The standard chain: loading indicator, notifications, GET cache busting.
pub fn default_chain(ui: &Arc<UiContext>) -> Vec<Arc<dyn Middleware>> {
    vec![
        Arc::new(LoadingMiddleware::new(Arc::clone(ui))),
        Arc::new(NotificationMiddleware::new(Arc::clone(ui))),
        Arc::new(CacheBustMiddleware),
    ]
}
