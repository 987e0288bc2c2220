use super::http_request::request_common::RequestError;
use super::http_response::response_common::ResponseError;
use strum_macros::Display;

/// Lower and upper bound of the success status range, both inclusive.
const SUCCESS_RANGE: std::ops::RangeInclusive<u16> = 200..=299;

/// Returns whether `status` lies in the success range `200..=299`.
pub fn is_success(status: u16) -> bool { SUCCESS_RANGE.contains(&status) }

#[derive(Debug, Display)]
pub enum HTTPError {
    HTTPRequestError(RequestError),
    HTTPResponseError(ResponseError),
}

impl std::error::Error for HTTPError {}

impl From<RequestError> for HTTPError {
    fn from(value: RequestError) -> Self { HTTPError::HTTPRequestError(value) }
}

impl From<ResponseError> for HTTPError {
    fn from(value: ResponseError) -> Self { HTTPError::HTTPResponseError(value) }
}
