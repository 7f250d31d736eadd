//! HTTP facade over the nosdeputes.fr / nossenateurs.fr API.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use cpc_types::{
    ClientConfig, ConfigurationError, CpcError, EntityKind, Parliamentarian, Picture,
    RemoteError, Result, SearchHit, Synthese, SyntheseEntry, SyntheseMonth, Vote,
};
use reqwest::{Client, StatusCode};

use crate::search::{SearchMatch, SearchQuery, rank};
use crate::{decode, picture::decode_picture, url};

/// Operations offered by the parliamentary data API.
///
/// [`CpcApi`] performs real HTTP requests; [`mock::MockParliamentApi`]
/// (behind the `test-utils` feature) returns canned results.
#[async_trait]
pub trait ParliamentApi: Send + Sync {
    /// Returns the configuration every call is built from.
    fn config(&self) -> &ClientConfig;

    /// Fetches the activity synthesis for the whole legislature, or for one month.
    async fn synthese(&self, month: Option<SyntheseMonth>) -> Result<Synthese>;

    /// Lists parliamentarians, optionally only the sitting ones.
    async fn parliamentarians(&self, active_only: bool) -> Result<Vec<Parliamentarian>>;

    /// Fetches the full record of one parliamentarian.
    async fn parliamentarian(&self, slug: &str) -> Result<Parliamentarian>;

    /// Fetches the votes of one parliamentarian, in remote order.
    async fn parliamentarian_votes(&self, slug: &str) -> Result<Vec<Vote>>;

    /// Fetches and decodes a portrait of exactly `pixels` x `pixels`.
    async fn picture(&self, slug: &str, pixels: u32) -> Result<Picture>;

    /// Runs the remote full-text search.
    async fn full_text_search(&self, query: &str, page: u32) -> Result<Vec<SearchHit>>;

    /// Finds parliamentarians whose name resembles `name`.
    ///
    /// Returns at most [`crate::search::DEFAULT_LIMIT`] records, best first.
    /// A blank name returns an empty list without any request.
    async fn search_parliamentarians(&self, name: &str) -> Result<Vec<Parliamentarian>> {
        let matches = self
            .search_parliamentarians_with(&SearchQuery::new(name))
            .await?;
        Ok(matches.into_iter().map(|m| m.parliamentarian).collect())
    }

    /// Finds parliamentarians matching a detailed query, with scores.
    async fn search_parliamentarians_with(&self, query: &SearchQuery) -> Result<Vec<SearchMatch>> {
        if query.is_blank() {
            return Ok(Vec::new());
        }
        let candidates = self.parliamentarians(query.active_only).await?;
        Ok(rank(candidates, query))
    }
}

/// HTTP implementation of [`ParliamentApi`].
///
/// Stateless apart from its configuration and connection pool; cloning is
/// cheap and clones share the pool.
#[derive(Debug, Clone)]
pub struct CpcApi {
    client: Client,
    config: ClientConfig,
}

impl CpcApi {
    /// Creates a client for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Http`] if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent())
            .gzip(true)
            .build()
            .map_err(transport_error)?;
        Ok(Self { client, config })
    }

    /// Creates a client for the current deputies.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteError::Http`] if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Creates a client around an existing `reqwest::Client`.
    #[must_use]
    pub const fn with_client(client: Client, config: ClientConfig) -> Self {
        Self { client, config }
    }

    /// Returns the portrait URL without fetching it.
    #[must_use]
    pub fn picture_url(&self, slug: &str, pixels: u32) -> String {
        url::picture_url(&self.config, slug, pixels)
    }

    /// GETs a URL. A 404 yields `Ok(None)`; other non-success statuses fail.
    async fn fetch(&self, url: &str) -> Result<Option<Bytes>> {
        tracing::debug!(%url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        tracing::debug!(%url, status = status.as_u16(), "response");

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            tracing::warn!(%url, status = status.as_u16(), "request rejected");
            return Err(RemoteError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            }
            .into());
        }

        let body = response.bytes().await.map_err(transport_error)?;
        Ok(Some(body))
    }

    /// GETs a URL that must exist.
    async fn fetch_existing(&self, url: &str) -> Result<Bytes> {
        self.fetch(url).await?.ok_or_else(|| {
            RemoteError::Status {
                url: url.to_string(),
                status: StatusCode::NOT_FOUND.as_u16(),
            }
            .into()
        })
    }
}

#[async_trait]
impl ParliamentApi for CpcApi {
    fn config(&self) -> &ClientConfig {
        &self.config
    }

    async fn synthese(&self, month: Option<SyntheseMonth>) -> Result<Synthese> {
        let legislature = self.config.legislature();
        if month.is_none() && !legislature.has_global_synthese() {
            return Err(ConfigurationError::GlobalSyntheseUnavailable(legislature).into());
        }

        let url = url::synthese_url(&self.config, month);
        let body = self.fetch_existing(&url).await?;
        let ptype = self.config.ptype();
        let entries: Vec<SyntheseEntry> =
            decode::decode_list(&url, &body, ptype.plural(), ptype.as_str())?;

        Ok(Synthese { month, entries })
    }

    async fn parliamentarians(&self, active_only: bool) -> Result<Vec<Parliamentarian>> {
        let url = url::parliamentarians_url(&self.config, active_only);
        let body = self.fetch_existing(&url).await?;
        let ptype = self.config.ptype();
        let list = decode::decode_list(&url, &body, ptype.plural(), ptype.as_str())?;
        Ok(list)
    }

    async fn parliamentarian(&self, slug: &str) -> Result<Parliamentarian> {
        let url = url::parliamentarian_url(&self.config, slug);
        let Some(body) = self.fetch(&url).await? else {
            return Err(CpcError::not_found(EntityKind::Parliamentarian, slug));
        };
        decode::decode_member(&url, &body, self.config.ptype().as_str())?
            .ok_or_else(|| CpcError::not_found(EntityKind::Parliamentarian, slug))
    }

    async fn parliamentarian_votes(&self, slug: &str) -> Result<Vec<Vote>> {
        let url = url::votes_url(&self.config, slug);
        let Some(body) = self.fetch(&url).await? else {
            return Err(CpcError::not_found(EntityKind::Parliamentarian, slug));
        };
        let votes = decode::decode_list(&url, &body, "votes", "vote")?;
        Ok(votes)
    }

    async fn picture(&self, slug: &str, pixels: u32) -> Result<Picture> {
        if pixels == 0 {
            return Err(ConfigurationError::InvalidResolution(pixels).into());
        }

        let url = self.picture_url(slug, pixels);
        let Some(body) = self.fetch(&url).await? else {
            return Err(CpcError::not_found(EntityKind::Picture, slug));
        };

        // Image decoding is CPU-bound, keep it off the async executor
        let picture = tokio::task::spawn_blocking(move || decode_picture(&body, pixels))
            .await
            .map_err(|e| RemoteError::Image(format!("spawn_blocking failed: {e}")))??;
        Ok(picture)
    }

    async fn full_text_search(&self, query: &str, page: u32) -> Result<Vec<SearchHit>> {
        let url = url::full_text_search_url(&self.config, query, page.max(1));
        let body = self.fetch_existing(&url).await?;
        let hits = decode::parse_search_csv(&url, &body).await?;
        Ok(hits)
    }
}

fn transport_error(e: reqwest::Error) -> CpcError {
    RemoteError::Http(e.to_string()).into()
}

#[cfg(any(test, feature = "test-utils"))]
#[allow(clippy::unwrap_used, clippy::missing_panics_doc)]
pub mod mock {
    //! Mock implementation for unit testing.

    use super::{
        ClientConfig, CpcError, EntityKind, ParliamentApi, Parliamentarian, Picture, Result,
        SearchHit, Synthese, SyntheseMonth, Vote,
    };
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Mock implementation of [`ParliamentApi`].
    ///
    /// Configure responses with `set_*` methods and inspect the calls with
    /// the `*_calls` accessors. Each configured result is returned once.
    #[derive(Debug)]
    pub struct MockParliamentApi {
        config: ClientConfig,
        parliamentarians_result: Mutex<Option<Result<Vec<Parliamentarian>>>>,
        parliamentarian_result: Mutex<Option<Result<Parliamentarian>>>,
        votes_result: Mutex<Option<Result<Vec<Vote>>>>,
        parliamentarians_calls: Mutex<Vec<bool>>,
        parliamentarian_calls: Mutex<Vec<String>>,
        votes_calls: Mutex<Vec<String>>,
    }

    impl MockParliamentApi {
        /// Creates a mock with the default configuration.
        #[must_use]
        pub fn new() -> Self {
            Self::with_config(ClientConfig::default())
        }

        /// Creates a mock reporting the given configuration.
        #[must_use]
        pub const fn with_config(config: ClientConfig) -> Self {
            Self {
                config,
                parliamentarians_result: Mutex::new(None),
                parliamentarian_result: Mutex::new(None),
                votes_result: Mutex::new(None),
                parliamentarians_calls: Mutex::new(Vec::new()),
                parliamentarian_calls: Mutex::new(Vec::new()),
                votes_calls: Mutex::new(Vec::new()),
            }
        }

        /// Sets the result of the next `parliamentarians` call.
        pub fn set_parliamentarians_result(&self, result: Result<Vec<Parliamentarian>>) {
            *self.parliamentarians_result.lock().unwrap() = Some(result);
        }

        /// Sets the result of the next `parliamentarian` call.
        pub fn set_parliamentarian_result(&self, result: Result<Parliamentarian>) {
            *self.parliamentarian_result.lock().unwrap() = Some(result);
        }

        /// Sets the result of the next `parliamentarian_votes` call.
        pub fn set_votes_result(&self, result: Result<Vec<Vote>>) {
            *self.votes_result.lock().unwrap() = Some(result);
        }

        /// Returns the `active_only` flag of every `parliamentarians` call.
        #[must_use]
        pub fn parliamentarians_calls(&self) -> Vec<bool> {
            self.parliamentarians_calls.lock().unwrap().clone()
        }

        /// Returns the slug of every `parliamentarian` call.
        #[must_use]
        pub fn parliamentarian_calls(&self) -> Vec<String> {
            self.parliamentarian_calls.lock().unwrap().clone()
        }

        /// Returns the slug of every `parliamentarian_votes` call.
        #[must_use]
        pub fn votes_calls(&self) -> Vec<String> {
            self.votes_calls.lock().unwrap().clone()
        }
    }

    impl Default for MockParliamentApi {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl ParliamentApi for MockParliamentApi {
        fn config(&self) -> &ClientConfig {
            &self.config
        }

        async fn synthese(&self, month: Option<SyntheseMonth>) -> Result<Synthese> {
            Ok(Synthese {
                month,
                entries: Vec::new(),
            })
        }

        async fn parliamentarians(&self, active_only: bool) -> Result<Vec<Parliamentarian>> {
            self.parliamentarians_calls.lock().unwrap().push(active_only);
            self.parliamentarians_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn parliamentarian(&self, slug: &str) -> Result<Parliamentarian> {
            self.parliamentarian_calls
                .lock()
                .unwrap()
                .push(slug.to_string());
            self.parliamentarian_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Err(CpcError::not_found(EntityKind::Parliamentarian, slug)))
        }

        async fn parliamentarian_votes(&self, slug: &str) -> Result<Vec<Vote>> {
            self.votes_calls.lock().unwrap().push(slug.to_string());
            self.votes_result
                .lock()
                .unwrap()
                .take()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn picture(&self, slug: &str, _pixels: u32) -> Result<Picture> {
            Err(CpcError::not_found(EntityKind::Picture, slug))
        }

        async fn full_text_search(&self, _query: &str, _page: u32) -> Result<Vec<SearchHit>> {
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockParliamentApi;
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = CpcApi::with_defaults().unwrap();
        assert_eq!(client.config().base_url(), "https://www.nosdeputes.fr");
    }

    #[test]
    fn test_picture_url() {
        let client = CpcApi::with_defaults().unwrap();
        assert_eq!(
            client.picture_url("jean-luc-melenchon", 60),
            "https://www.nosdeputes.fr/depute/photo/jean-luc-melenchon/60"
        );
    }

    #[tokio::test]
    async fn test_global_synthese_rejected_before_request() {
        // Unroutable host: reaching the network would surface a Remote error.
        let config = ClientConfig::parse("depute", "2012-2017")
            .unwrap()
            .with_base_url("http://127.0.0.1:9")
            .unwrap();
        let client = CpcApi::new(config).unwrap();

        let err = client.synthese(None).await.unwrap_err();
        assert!(matches!(
            err,
            CpcError::Configuration(ConfigurationError::GlobalSyntheseUnavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_zero_pixels_rejected_before_request() {
        let config = ClientConfig::default()
            .with_base_url("http://127.0.0.1:9")
            .unwrap();
        let client = CpcApi::new(config).unwrap();

        let err = client.picture("anyone", 0).await.unwrap_err();
        assert!(err.is_configuration());
    }

    #[tokio::test]
    async fn test_search_ranks_fetched_list() {
        let mock = MockParliamentApi::new();
        mock.set_parliamentarians_result(Ok(vec![
            Parliamentarian::new("nadine-morano", "Nadine Morano"),
            Parliamentarian::new("jean-luc-melenchon", "Jean-Luc Mélenchon"),
        ]));

        let found = mock.search_parliamentarians("melenchon").await.unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].slug, "jean-luc-melenchon");
        assert_eq!(mock.parliamentarians_calls(), vec![false]);
    }

    #[tokio::test]
    async fn test_blank_search_makes_no_request() {
        let mock = MockParliamentApi::new();

        let found = mock.search_parliamentarians("").await.unwrap();

        assert!(found.is_empty());
        assert!(mock.parliamentarians_calls().is_empty());
    }

    #[tokio::test]
    async fn test_search_active_only() {
        let mock = MockParliamentApi::new();
        let query = SearchQuery::new("morano").active_only(true);

        let found = mock.search_parliamentarians_with(&query).await.unwrap();

        assert!(found.is_empty());
        assert_eq!(mock.parliamentarians_calls(), vec![true]);
    }

    #[tokio::test]
    async fn test_search_propagates_errors() {
        let mock = MockParliamentApi::new();
        mock.set_parliamentarians_result(Err(RemoteError::Http("connection reset".into()).into()));

        let err = mock.search_parliamentarians("morano").await.unwrap_err();
        assert!(err.is_remote());
    }
}
