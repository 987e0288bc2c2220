use super::rate_limit::RateLimitResponse;
use super::request_common::{HTTPRequestMethod, HTTPRequestType};

/// Request type for the /rate_limit endpoint.
#[derive(Debug, Default)]
pub struct RateLimitRequest {}

impl HTTPRequestType for RateLimitRequest {
    /// Type of the expected response.
    type Response = RateLimitResponse;
    /// Path of the endpoint.
    fn endpoint(&self) -> String { String::from("/rate_limit") }
    /// The corresponding HTTP Request Method.
    fn request_method(&self) -> HTTPRequestMethod { HTTPRequestMethod::Get }
}
