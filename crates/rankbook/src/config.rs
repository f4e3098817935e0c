//! Platform client configuration.
//!
//! `PlatformConfig` carries everything the client needs to reach the
//! platform API: the static token, the account-routing cluster, an optional
//! base URL override for test servers, the per-request timeout and the
//! retry budget.

use std::str::FromStr;
use std::time::Duration;

use strum::{AsRefStr, Display, EnumString};

use crate::error::Error;

/// Header carrying the static API token.
pub const API_KEY_HEADER: &str = "X-Riot-Token";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Retry backoff for transient platform failures.
///
/// 500ms → 1s → 2s → 4s → 8s, capped at 8s per wait.
pub mod retry {
    /// Delay (in ms) before the first retry.
    pub const BASE_DELAY_MS: u64 = 500;

    /// Upper bound (in ms) for any single delay.
    pub const MAX_DELAY_MS: u64 = 8000;
}

/// Continental routing cluster used for Riot ID lookups.
///
/// Identity resolution always goes through this cluster, whatever platform
/// region the account itself lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AccountRoute {
    Americas,
    Asia,
    #[default]
    Europe,
    Sea,
}

impl AccountRoute {
    pub fn parse(value: &str) -> Result<Self, Error> {
        Self::from_str(value.trim()).map_err(|_| Error::UnknownAccountRoute(value.to_string()))
    }

    /// Host label for this cluster (e.g. `europe`).
    pub fn host(&self) -> &str {
        self.as_ref()
    }
}

#[derive(Debug, Clone)]
pub struct PlatformConfig {
    pub api_key: String,
    pub account_route: AccountRoute,
    /// Send every request to this base URL instead of `https://{host}.api.riotgames.com`.
    pub base_url: Option<String>,
    pub timeout: Duration,
    /// Extra attempts for transient failures. Zero disables retrying.
    pub retries: u32,
}

impl PlatformConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            account_route: AccountRoute::default(),
            base_url: None,
            timeout: DEFAULT_TIMEOUT,
            retries: 0,
        }
    }

    pub fn with_account_route(mut self, route: AccountRoute) -> Self {
        self.account_route = route;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_retries(mut self, retries: u32) -> Self {
        self.retries = retries;
        self
    }

    /// Base URL for the given routing host (`europe`, `kr`, `euw1`, ...).
    pub fn host_url(&self, host: &str) -> String {
        match &self.base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("https://{}.api.riotgames.com", host),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_route_is_europe() {
        let config = PlatformConfig::new("key");
        assert_eq!(config.account_route, AccountRoute::Europe);
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.retries, 0);
    }

    #[test]
    fn test_host_url() {
        let config = PlatformConfig::new("key");
        assert_eq!(config.host_url("kr"), "https://kr.api.riotgames.com");

        let config = config.with_base_url("http://127.0.0.1:8080/");
        assert_eq!(config.host_url("kr"), "http://127.0.0.1:8080");
        assert_eq!(config.host_url("europe"), "http://127.0.0.1:8080");
    }

    #[test]
    fn test_parse_account_route() {
        assert_eq!(AccountRoute::parse("AMERICAS").unwrap(), AccountRoute::Americas);
        assert_eq!(AccountRoute::parse("sea").unwrap(), AccountRoute::Sea);
        assert_eq!(AccountRoute::Asia.host(), "asia");
        assert!(matches!(
            AccountRoute::parse("mars"),
            Err(Error::UnknownAccountRoute(_))
        ));
    }
}
