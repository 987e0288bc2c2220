use chrono::{DateTime, Utc};

/// Response type for the /rate_limit endpoint.
#[derive(serde::Deserialize, Debug, Clone)]
pub struct RateLimitResponse {
    resources: RateLimitResources,
}

#[derive(serde::Deserialize, Debug, Clone)]
struct RateLimitResources {
    core: RateLimitBucket,
    search: Option<RateLimitBucket>,
}

/// Quota of one rate limit bucket.
#[derive(serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitBucket {
    limit: u32,
    remaining: u32,
    used: u32,
    /// Unix timestamp of the next quota reset.
    reset: i64,
}

impl RateLimitResponse {
    pub fn core(&self) -> &RateLimitBucket { &self.resources.core }
    pub fn search(&self) -> Option<&RateLimitBucket> { self.resources.search.as_ref() }
}

impl RateLimitBucket {
    pub fn limit(&self) -> u32 { self.limit }
    pub fn remaining(&self) -> u32 { self.remaining }
    pub fn used(&self) -> u32 { self.used }
    pub fn is_exhausted(&self) -> bool { self.remaining == 0 }

    /// Point in time the quota resets, `None` for an out of range timestamp.
    pub fn reset_at(&self) -> Option<DateTime<Utc>> { DateTime::from_timestamp(self.reset, 0) }
}
