use super::common::HTTPError;
use super::http_request::request_common::{
    HTTPRequest, HTTPRequestMethod, HTTPRequestType, RequestError, RequestOptions,
};
use super::http_response::response_common::{HTTPResponse, ResponseEnvelope, ResponseError};
use super::middleware::default_chain;
use crate::config::ClientConfig;
use crate::ui::UiContext;
use crate::{error, event};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware, Middleware};
use std::sync::Arc;

/// Placeholder for calls without a body, e.g. `client.post("/x", NO_BODY, None)`.
pub const NO_BODY: Option<&()> = None;

const USER_AGENT: &str = concat!("gh-fetch/", env!("CARGO_PKG_VERSION"));

/// The application wide HTTP client.
///
/// Holds the static configuration (base URL, timeout, auth header) and the middleware
/// chain every call passes through. Cheap to share behind an `Arc`.
#[derive(Debug)]
pub struct HTTPClient {
    /// The `reqwest::Client` carrying timeout and default headers, wrapped in the chain.
    client: ClientWithMiddleware,
    /// Base URL, prepended to all relative endpoint paths.
    base_url: String,
}

impl HTTPClient {
    /// Builds a client with the standard middleware chain bound to `ui`.
    pub fn new(config: &ClientConfig, ui: &Arc<UiContext>) -> Result<Self, HTTPError> {
        Self::with_middleware(config, default_chain(ui))
    }

    /// Builds a client running `chain` (outermost first) around every call.
    pub fn with_middleware(
        config: &ClientConfig,
        chain: Vec<Arc<dyn Middleware>>,
    ) -> Result<Self, HTTPError> {
        let mut headers = HeaderMap::new();
        if let Some(auth) = config.auth_header_value() {
            let mut value = HeaderValue::from_str(&auth)
                .map_err(|_| RequestError::InvalidHeader(String::from(AUTHORIZATION.as_str())))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        reqwest::Url::parse(config.base_url())
            .map_err(|e| RequestError::InvalidUrl(format!("{}: {e}", config.base_url())))?;
        let inner = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| RequestError::ClientBuild(e.to_string()))?;
        let client = chain.into_iter().fold(ClientBuilder::new(inner), ClientBuilder::with_arc).build();
        Ok(Self { client, base_url: String::from(config.base_url().trim_end_matches('/')) })
    }

    /// Returns a reference to the wrapped client.
    ///
    /// Requests made through it still pass the full middleware chain, but skip the base URL
    /// resolution and header validation of the verb methods.
    pub fn client(&self) -> &ClientWithMiddleware { &self.client }
    /// Returns the base URL that the client was initialized with.
    pub fn url(&self) -> &str { &self.base_url }

    /// Resolves `path` against the base URL. Absolute URLs are used as they are.
    fn resolve(&self, path: &str) -> Result<reqwest::Url, RequestError> {
        if let Ok(absolute) = reqwest::Url::parse(path) {
            return Ok(absolute);
        }
        let joined = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        reqwest::Url::parse(&joined).map_err(|e| RequestError::InvalidUrl(format!("{joined}: {e}")))
    }

    /// Turns `request` into a `reqwest::Request`. Nothing of the chain runs yet.
    fn prepare(&self, request: &HTTPRequest) -> Result<reqwest::Request, RequestError> {
        let url = self.resolve(request.path())?;
        let mut builder = self.client.request(request.method().into(), url);
        if !request.params().is_empty() {
            builder = builder.query(request.params());
        }
        for (name, value) in request.headers() {
            let header_name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|_| RequestError::InvalidHeader(name.clone()))?;
            let header_value =
                HeaderValue::from_str(value).map_err(|_| RequestError::InvalidHeader(name.clone()))?;
            builder = builder.header(header_name, header_value);
        }
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }
        builder.build().map_err(|e| RequestError::ClientBuild(e.to_string()))
    }

    /// Runs `request` through the middleware chain.
    ///
    /// A request that cannot be prepared is logged and returned as `HTTPRequestError`
    /// without entering the chain.
    pub async fn send(&self, request: HTTPRequest) -> Result<HTTPResponse, HTTPError> {
        let prepared = self.prepare(&request).inspect_err(|e| {
            error!("Request {} {}: {e:?}", request.method(), request.path());
        })?;
        event!("Sending {} {}", request.method(), request.path());
        let response = self.client.execute(prepared).await.map_err(ResponseError::from)?;
        Ok(HTTPResponse::read(response).await?)
    }

    pub async fn get(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<HTTPResponse, HTTPError> {
        self.send(Self::build(HTTPRequestMethod::Get, path, NO_BODY, options)?).await
    }

    pub async fn post<B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
        options: Option<RequestOptions>,
    ) -> Result<HTTPResponse, HTTPError> {
        self.send(Self::build(HTTPRequestMethod::Post, path, body, options)?).await
    }

    pub async fn patch<B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
        options: Option<RequestOptions>,
    ) -> Result<HTTPResponse, HTTPError> {
        self.send(Self::build(HTTPRequestMethod::Patch, path, body, options)?).await
    }

    pub async fn put<B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: Option<&B>,
        options: Option<RequestOptions>,
    ) -> Result<HTTPResponse, HTTPError> {
        self.send(Self::build(HTTPRequestMethod::Put, path, body, options)?).await
    }

    pub async fn delete(
        &self,
        path: &str,
        options: Option<RequestOptions>,
    ) -> Result<HTTPResponse, HTTPError> {
        self.send(Self::build(HTTPRequestMethod::Delete, path, NO_BODY, options)?).await
    }

    /// Sends a typed endpoint request and splits the response into its envelope.
    pub async fn send_typed<T: HTTPRequestType>(
        &self,
        request: &T,
    ) -> Result<ResponseEnvelope<T::Response>, HTTPError> {
        let prepared = request.to_request().inspect_err(|e| {
            error!("Request {} {}: {e:?}", request.request_method(), request.endpoint());
        })?;
        let response = self.send(prepared).await?;
        Ok(response.envelope::<T::Response>()?)
    }

    fn build<B: serde::Serialize + ?Sized>(
        method: HTTPRequestMethod,
        path: &str,
        body: Option<&B>,
        options: Option<RequestOptions>,
    ) -> Result<HTTPRequest, RequestError> {
        let mut request = HTTPRequest::new(method, path);
        if let Some(opts) = options {
            request = request.with_options(opts);
        }
        if let Some(b) = body {
            request = request.with_json(b).inspect_err(|e| {
                error!("Request {method} {path}: {e:?}");
            })?;
        }
        Ok(request)
    }
}
