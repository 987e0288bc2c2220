use strum_macros::Display;

/// HTTP verbs supported by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HTTPRequestMethod {
    Get,
    Post,
    Patch,
    Put,
    Delete,
}

impl From<HTTPRequestMethod> for reqwest::Method {
    fn from(value: HTTPRequestMethod) -> Self {
        match value {
            HTTPRequestMethod::Get => reqwest::Method::GET,
            HTTPRequestMethod::Post => reqwest::Method::POST,
            HTTPRequestMethod::Patch => reqwest::Method::PATCH,
            HTTPRequestMethod::Put => reqwest::Method::PUT,
            HTTPRequestMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Per-call additions to a request: query params and headers.
///
/// Params keep their insertion order and are sent in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    params: Vec<(String, String)>,
    headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn param(mut self, key: &str, value: impl ToString) -> Self {
        self.params.push((String::from(key), value.to_string()));
        self
    }

    /// Adds a header. Name and value are validated when the request is sent.
    #[must_use]
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((String::from(name), String::from(value)));
        self
    }

    pub fn params(&self) -> &[(String, String)] { &self.params }
    pub fn headers(&self) -> &[(String, String)] { &self.headers }
}

/// Everything the transport needs to perform one call.
#[derive(Debug, Clone, PartialEq)]
pub struct HTTPRequest {
    method: HTTPRequestMethod,
    path: String,
    params: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<serde_json::Value>,
}

impl HTTPRequest {
    pub fn new(method: HTTPRequestMethod, path: &str) -> Self {
        Self {
            method,
            path: String::from(path),
            params: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.params.extend(options.params);
        self.headers.extend(options.headers);
        self
    }

    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Serializes `body` into the JSON request body.
    pub fn with_json<B: serde::Serialize + ?Sized>(self, body: &B) -> Result<Self, RequestError> {
        Ok(self.with_body(serde_json::to_value(body)?))
    }

    pub fn method(&self) -> HTTPRequestMethod { self.method }
    pub fn path(&self) -> &str { &self.path }
    pub fn params(&self) -> &[(String, String)] { &self.params }
    pub fn headers(&self) -> &[(String, String)] { &self.headers }
    pub fn body(&self) -> Option<&serde_json::Value> { self.body.as_ref() }
}

/// Typed description of one API endpoint.
pub trait HTTPRequestType {
    /// Type of the expected response payload.
    type Response: serde::de::DeserializeOwned;
    /// Path of the endpoint, relative to the base URL.
    fn endpoint(&self) -> String;
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod;
    /// JSON body, if the endpoint takes one.
    fn json_body(&self) -> Result<Option<serde_json::Value>, RequestError> { Ok(None) }
    /// Query params and headers of this call.
    fn options(&self) -> RequestOptions { RequestOptions::default() }

    fn to_request(&self) -> Result<HTTPRequest, RequestError> {
        let request =
            HTTPRequest::new(self.request_method(), &self.endpoint()).with_options(self.options());
        Ok(match self.json_body()? {
            Some(body) => request.with_body(body),
            None => request,
        })
    }
}

/// Failures while preparing a request, before anything is sent.
#[derive(Debug, Display)]
pub enum RequestError {
    ClientBuild(String),
    InvalidUrl(String),
    InvalidHeader(String),
    BodySerialization(String),
}

impl std::error::Error for RequestError {}

impl From<serde_json::Error> for RequestError {
    fn from(value: serde_json::Error) -> Self { RequestError::BodySerialization(value.to_string()) }
}
