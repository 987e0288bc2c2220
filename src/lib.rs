//! HTTP request layer for UI front-ends backed by the GitHub REST API.
//!
//! One [`HTTPClient`] per application, built from a [`ClientConfig`] and a [`UiContext`].
//! Every call passes through a middleware chain that drives the loading indicator,
//! cache-busts GET requests and reports failures as notifications.
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
#![allow(clippy::module_name_repetitions, clippy::upper_case_acronyms, clippy::missing_errors_doc)]

pub mod config;
pub mod http_handler;
pub mod logger;
pub mod ui;

pub use config::{ClientConfig, Locale};
pub use http_handler::common::{HTTPError, is_success};
pub use http_handler::http_client::{HTTPClient, NO_BODY};
pub use http_handler::http_request::request_common::{
    HTTPRequest, HTTPRequestMethod, HTTPRequestType, RequestError, RequestOptions,
};
pub use http_handler::http_response::response_common::{
    HTTPResponse, ResponseEnvelope, ResponseError,
};
pub use ui::{Notification, NotificationKind, UiContext};
