use serde::de::DeserializeOwned;
use tracing::debug;

use super::{LeagueEntry, RiotAccount, Summoner};
use crate::account::{Region, RiotId};
use crate::config::{API_KEY_HEADER, PlatformConfig};
use crate::error::{Error, FetchStep, Result};
use crate::retry::{ExponentialBackoff, NoRetry, RetryStrategy};

/// Read-only access to the game platform.
///
/// Implemented by [`RiotClient`] over HTTP and by
/// [`MockPlatform`](super::MockPlatform) for tests.
pub trait PlatformApi {
    /// Resolve a Riot ID. Always routed through the continental account cluster.
    fn account_by_riot_id(&self, id: &RiotId) -> Result<RiotAccount>;

    /// Summoner profile for `puuid` on `region`.
    fn summoner_by_puuid(&self, region: &Region, puuid: &str) -> Result<Summoner>;

    /// Ranked queue entries for a summoner on `region`.
    fn league_entries(&self, region: &Region, summoner_id: &str) -> Result<Vec<LeagueEntry>>;
}

/// Blocking HTTP client for the platform API.
pub struct RiotClient<R = NoRetry> {
    agent: ureq::Agent,
    config: PlatformConfig,
    retry: R,
}

impl RiotClient<NoRetry> {
    pub fn new(config: PlatformConfig) -> Result<Self> {
        if config.api_key.trim().is_empty() {
            return Err(Error::MissingApiKey);
        }

        let agent: ureq::Agent = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout))
            .build()
            .into();

        Ok(Self {
            agent,
            config,
            retry: NoRetry,
        })
    }
}

impl<R: RetryStrategy> RiotClient<R> {
    pub fn with_retry<S: RetryStrategy>(self, retry: S) -> RiotClient<S> {
        RiotClient {
            agent: self.agent,
            config: self.config,
            retry,
        }
    }

    pub fn config(&self) -> &PlatformConfig {
        &self.config
    }

    pub fn account_url(&self, id: &RiotId) -> String {
        format!(
            "{}/riot/account/v1/accounts/by-riot-id/{}/{}",
            self.config.host_url(self.config.account_route.host()),
            urlencoding::encode(&id.name),
            urlencoding::encode(&id.tag)
        )
    }

    pub fn summoner_url(&self, region: &Region, puuid: &str) -> String {
        format!(
            "{}/lol/summoner/v4/summoners/by-puuid/{}",
            self.config.host_url(&region.host()),
            urlencoding::encode(puuid)
        )
    }

    pub fn league_url(&self, region: &Region, summoner_id: &str) -> String {
        format!(
            "{}/lol/league/v4/entries/by-summoner/{}",
            self.config.host_url(&region.host()),
            urlencoding::encode(summoner_id)
        )
    }

    fn get_json<T: DeserializeOwned>(&self, step: FetchStep, url: &str) -> Result<T> {
        self.retry.execute_if(
            |attempt| {
                debug!("GET {} ({}, attempt {})", url, step, attempt + 1);
                let mut response = self
                    .agent
                    .get(url)
                    .header(API_KEY_HEADER, &self.config.api_key)
                    .call()
                    .map_err(|e| Error::from_http(step, e))?;
                response
                    .body_mut()
                    .read_json::<T>()
                    .map_err(|e| Error::from_http(step, e))
            },
            Error::is_transient,
        )
    }
}

impl<R: RetryStrategy> PlatformApi for RiotClient<R> {
    fn account_by_riot_id(&self, id: &RiotId) -> Result<RiotAccount> {
        self.get_json(FetchStep::Account, &self.account_url(id))
    }

    fn summoner_by_puuid(&self, region: &Region, puuid: &str) -> Result<Summoner> {
        self.get_json(FetchStep::Summoner, &self.summoner_url(region, puuid))
    }

    fn league_entries(&self, region: &Region, summoner_id: &str) -> Result<Vec<LeagueEntry>> {
        self.get_json(FetchStep::League, &self.league_url(region, summoner_id))
    }
}

/// Build an HTTP platform client, retrying transient failures when
/// `config.retries` is non-zero.
pub fn connect(config: PlatformConfig) -> Result<Box<dyn PlatformApi>> {
    let retries = config.retries;
    let client = RiotClient::new(config)?;

    if retries == 0 {
        Ok(Box::new(client))
    } else {
        Ok(Box::new(client.with_retry(ExponentialBackoff::new(retries))))
    }
}
