use super::http_response::rate_limit;

pub mod rate_limit_get;
pub mod request_common;
