use crate::http_handler::common::is_success;
use crate::http_handler::http_response::response_common::body_message;
use crate::ui::UiContext;
use crate::{error, event};
use async_trait::async_trait;
use http::Extensions;
use reqwest::{Request, Response, StatusCode};
use reqwest_middleware::{Middleware, Next};
use std::sync::Arc;

/// Title used for failures that never produced a response.
const NO_STATUS_TITLE: &str = "-1";

/// Logs failures and turns them into error notifications.
///
/// Non-2xx responses are still returned as `Ok`; only the notification reflects them.
pub struct NotificationMiddleware {
    ui: Arc<UiContext>,
}

impl NotificationMiddleware {
    pub fn new(ui: Arc<UiContext>) -> Self { Self { ui } }

    /// Reads the body of `resp` to extract its `message`, handing back an equivalent response.
    async fn buffer(resp: Response) -> Result<(Response, Option<String>), reqwest::Error> {
        let status = resp.status();
        let version = resp.version();
        let headers = resp.headers().clone();
        let body = resp.bytes().await?;
        let message = body_message(&body);
        let mut rebuilt = http::Response::new(body);
        *rebuilt.status_mut() = status;
        *rebuilt.version_mut() = version;
        *rebuilt.headers_mut() = headers;
        Ok((Response::from(rebuilt), message))
    }
}

#[async_trait]
impl Middleware for NotificationMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let (method, url) = (req.method().clone(), req.url().path().to_owned());
        match next.run(req, extensions).await {
            Ok(resp) => {
                let status = resp.status().as_u16();
                event!("{method} {url} -> {status}");
                if is_success(status) {
                    return Ok(resp);
                }
                match Self::buffer(resp).await {
                    Ok((buffered, message)) => {
                        self.ui.notify_error(&status.to_string(), message.as_deref());
                        Ok(buffered)
                    }
                    Err(err) => {
                        error!("Response {method} {url}: {err:?}");
                        self.ui.notify_error(&status.to_string(), None);
                        Err(err.into())
                    }
                }
            }
            Err(err) => {
                error!("Response {method} {url}: {err:?}");
                let status = match &err {
                    reqwest_middleware::Error::Reqwest(e) => e.status().as_ref().map(StatusCode::as_u16),
                    reqwest_middleware::Error::Middleware(_) => None,
                };
                let title = status.map_or_else(|| String::from(NO_STATUS_TITLE), |s| s.to_string());
                self.ui.notify_error(&title, None);
                Err(err)
            }
        }
    }
}
