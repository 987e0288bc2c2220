use crate::http_handler::common::is_success;
use reqwest::{StatusCode, header::HeaderMap};
use serde::de::DeserializeOwned;
use std::borrow::Cow;
use strum_macros::Display;

/// A response whose body has been read completely.
#[derive(Debug, Clone)]
pub struct HTTPResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl HTTPResponse {
    pub fn new(status: StatusCode, headers: HeaderMap, body: Vec<u8>) -> Self {
        Self { status, headers, body }
    }

    /// Reads the body of a `reqwest::Response`.
    pub(crate) async fn read(response: reqwest::Response) -> Result<Self, ResponseError> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?.to_vec();
        Ok(Self { status, headers, body })
    }

    pub fn status(&self) -> StatusCode { self.status }
    pub fn status_code(&self) -> u16 { self.status.as_u16() }
    pub fn headers(&self) -> &HeaderMap { &self.headers }
    pub fn body(&self) -> &[u8] { &self.body }
    pub fn text(&self) -> Cow<'_, str> { String::from_utf8_lossy(&self.body) }
    pub fn is_success(&self) -> bool { is_success(self.status_code()) }

    /// The `message` field of a JSON object body, if there is a usable one.
    pub fn message(&self) -> Option<String> { body_message(&self.body) }

    /// Deserializes the whole body.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ResponseError> {
        serde_json::from_slice(&self.body).map_err(|e| ResponseError::Decode(e.to_string()))
    }

    /// Splits the response into status, message and typed payload.
    ///
    /// The payload is only decoded for success responses with a non-empty body; a
    /// success body that does not match `T` is a `Decode` error.
    pub fn envelope<T: DeserializeOwned>(&self) -> Result<ResponseEnvelope<T>, ResponseError> {
        let data = if self.is_success() && !self.body.is_empty() {
            Some(self.json::<T>()?)
        } else {
            None
        };
        Ok(ResponseEnvelope { status: self.status_code(), message: self.message(), data })
    }
}

/// Extracts the `message` field of a JSON object body.
///
/// Scalars are rendered as text (`42`, `true`); arrays and objects as compact JSON. An empty
/// string, `0`, `false` and `null` count as no message.
pub fn body_message(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    match value.get("message")? {
        serde_json::Value::Null | serde_json::Value::Bool(false) => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) if n.as_f64().is_some_and(|f| f.abs() < f64::EPSILON) => None,
        other => Some(other.to_string()),
    }
}

/// Status, optional message and optional payload of an API response.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEnvelope<T> {
    status: u16,
    message: Option<String>,
    data: Option<T>,
}

impl<T> ResponseEnvelope<T> {
    pub fn status(&self) -> u16 { self.status }
    pub fn message(&self) -> Option<&str> { self.message.as_deref() }
    pub fn data(&self) -> Option<&T> { self.data.as_ref() }
    pub fn is_success(&self) -> bool { is_success(self.status) }

    /// Resolves the envelope: the payload for success statuses, `ResponseError::Status` otherwise.
    pub fn into_result(self) -> Result<Option<T>, ResponseError> {
        if self.is_success() {
            Ok(self.data)
        } else {
            Err(ResponseError::Status { status: self.status, message: self.message })
        }
    }
}

/// Failures after a request has been handed to the transport.
#[derive(Debug, Display)]
pub enum ResponseError {
    Timeout,
    NoConnection,
    Transport { status: Option<u16>, detail: String },
    Decode(String),
    Status { status: u16, message: Option<String> },
}

impl ResponseError {
    /// HTTP status attached to the failure, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ResponseError::Transport { status, .. } => *status,
            ResponseError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server supplied message attached to the failure, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            ResponseError::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

impl std::error::Error for ResponseError {}

impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_timeout() {
            ResponseError::Timeout
        } else if value.is_connect() {
            ResponseError::NoConnection
        } else if value.is_decode() {
            ResponseError::Decode(value.to_string())
        } else {
            ResponseError::Transport {
                status: value.status().as_ref().map(StatusCode::as_u16),
                detail: value.to_string(),
            }
        }
    }
}

impl From<reqwest_middleware::Error> for ResponseError {
    fn from(value: reqwest_middleware::Error) -> Self {
        match value {
            reqwest_middleware::Error::Reqwest(e) => e.into(),
            reqwest_middleware::Error::Middleware(e) => {
                ResponseError::Transport { status: None, detail: e.to_string() }
            }
        }
    }
}
