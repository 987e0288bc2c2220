use std::{env, str::FromStr, time::Duration};
use strum_macros::{Display, EnumString};

/// API host every request path is resolved against.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";
/// Client-wide request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30 * 60);
/// Identifier of the page element shown while requests are in flight.
pub const DEFAULT_LOADING_ELEMENT_ID: &str = "loading";

const BASE_URL_VAR: &str = "GH_FETCH_BASE_URL";
const TOKEN_VAR: &str = "GH_FETCH_TOKEN";
const TIMEOUT_VAR: &str = "GH_FETCH_TIMEOUT_SECS";
const LOCALE_VAR: &str = "GH_FETCH_LOCALE";
const LOADING_ELEMENT_VAR: &str = "GH_FETCH_LOADING_ELEMENT";

/// Language used for user facing strings (page title, notification fallbacks).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
pub enum Locale {
    #[default]
    #[strum(to_string = "zh-CN", serialize = "zh")]
    ZhCn,
    #[strum(to_string = "en", serialize = "en-US")]
    En,
}

impl Locale {
    /// Page title shown while a request is in flight.
    pub fn loading_title(self) -> &'static str {
        match self {
            Locale::ZhCn => "马上就好...",
            Locale::En => "Almost there...",
        }
    }

    /// Notification message used when a failed response carries no message.
    pub fn unknown_error(self) -> &'static str {
        match self {
            Locale::ZhCn => "未知错误",
            Locale::En => "Unknown error",
        }
    }
}

/// Static settings of the HTTP layer, built once at application start.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
    token: Option<String>,
    locale: Locale,
    loading_element_id: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            timeout: DEFAULT_TIMEOUT,
            token: None,
            locale: Locale::default(),
            loading_element_id: String::from(DEFAULT_LOADING_ELEMENT_ID),
        }
    }
}

impl ClientConfig {
    /// Reads the configuration from the process environment.
    ///
    /// Every variable is optional; missing or unparsable values fall back to the defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(url) = env::var(BASE_URL_VAR) {
            config = config.with_base_url(url);
        }
        if let Ok(token) = env::var(TOKEN_VAR) {
            config = config.with_token(token);
        }
        if let Some(secs) = env::var(TIMEOUT_VAR).ok().and_then(|v| v.parse::<u64>().ok()) {
            config = config.with_timeout(Duration::from_secs(secs));
        }
        if let Some(locale) = env::var(LOCALE_VAR).ok().and_then(|v| Locale::from_str(&v).ok()) {
            config = config.with_locale(locale);
        }
        if let Ok(id) = env::var(LOADING_ELEMENT_VAR) {
            config = config.with_loading_element_id(id);
        }
        config
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the auth token. Empty or blank tokens are treated as absent.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = if token.trim().is_empty() { None } else { Some(token) };
        self
    }

    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    #[must_use]
    pub fn with_loading_element_id(mut self, id: impl Into<String>) -> Self {
        self.loading_element_id = id.into();
        self
    }

    pub fn base_url(&self) -> &str { &self.base_url }
    pub fn timeout(&self) -> Duration { self.timeout }
    pub fn token(&self) -> Option<&str> { self.token.as_deref() }
    pub fn locale(&self) -> Locale { self.locale }
    pub fn loading_element_id(&self) -> &str { &self.loading_element_id }

    /// Value of the `Authorization` header, if a token is configured.
    pub fn auth_header_value(&self) -> Option<String> {
        self.token.as_ref().map(|t| format!("token {t}"))
    }
}
