use crate::ui::{LoadingIndicator, UiContext};
use async_trait::async_trait;
use http::Extensions;
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use std::sync::Arc;

/// Shows the loading indicator for the duration of the call, whatever its outcome.
pub struct LoadingMiddleware {
    ui: Arc<UiContext>,
}

impl LoadingMiddleware {
    pub fn new(ui: Arc<UiContext>) -> Self { Self { ui } }
}

/// Stops the indicator when dropped, including when the call future is cancelled.
struct LoadingGuard<'a>(&'a LoadingIndicator);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) { self.0.stop(); }
}

#[async_trait]
impl Middleware for LoadingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        self.ui.loading().start();
        let _guard = LoadingGuard(self.ui.loading());
        next.run(req, extensions).await
    }
}
