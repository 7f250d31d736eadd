//! Client configuration.

use std::time::Duration;

use crate::{ConfigurationError, Legislature, ParliamentType};

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Immutable configuration for the API client.
///
/// The parliamentarian type and legislature are validated together at
/// construction, so a `ClientConfig` always designates an endpoint family the
/// remote service actually serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    ptype: ParliamentType,
    legislature: Legislature,
    base_url: Option<String>,
    timeout: Duration,
    user_agent: String,
}

impl ClientConfig {
    /// Creates a configuration for the given body and legislature.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::UnsupportedLegislature`] if the
    /// legislature is not served for this body.
    pub fn new(ptype: ParliamentType, legislature: Legislature) -> Result<Self, ConfigurationError> {
        if !ptype.supports(legislature) {
            return Err(ConfigurationError::UnsupportedLegislature { ptype, legislature });
        }
        Ok(Self {
            ptype,
            legislature,
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("cpc/{}", env!("CARGO_PKG_VERSION")),
        })
    }

    /// Parses both options from their wire strings (`"depute"`, `"2017-2022"`).
    ///
    /// # Errors
    ///
    /// Returns an error if either string is unknown or the pair is unsupported.
    pub fn parse(ptype: &str, legislature: &str) -> Result<Self, ConfigurationError> {
        Self::new(ptype.parse()?, legislature.parse()?)
    }

    /// Points the client at another host, e.g. a mirror or a test server.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidBaseUrl`] unless the URL is http(s).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self, ConfigurationError> {
        let base_url = base_url.into();
        let trimmed = base_url.trim_end_matches('/');
        let host = trimmed
            .strip_prefix("https://")
            .or_else(|| trimmed.strip_prefix("http://"));
        if !host.is_some_and(|h| !h.is_empty()) {
            return Err(ConfigurationError::InvalidBaseUrl(base_url));
        }
        self.base_url = Some(trimmed.to_string());
        Ok(self)
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the `User-Agent` header.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the parliamentarian type.
    #[must_use]
    pub const fn ptype(&self) -> ParliamentType {
        self.ptype
    }

    /// Returns the legislature.
    #[must_use]
    pub const fn legislature(&self) -> Legislature {
        self.legislature
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the `User-Agent` header value.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the base URL every endpoint is built on, without trailing slash.
    ///
    /// Format: `https://{legislature|www}.nos{deputes|senateurs}.fr`
    #[must_use]
    pub fn base_url(&self) -> String {
        match &self.base_url {
            Some(url) => url.clone(),
            None => format!(
                "https://{}.nos{}.fr",
                self.legislature.host_prefix(),
                self.ptype.plural()
            ),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            ptype: ParliamentType::default(),
            legislature: Legislature::default(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("cpc/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
