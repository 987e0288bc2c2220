pub mod rate_limit;
pub mod response_common;
