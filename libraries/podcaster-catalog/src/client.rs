//! HTTP client for the episode content API.

use crate::error::{CatalogError, Result};
use crate::listing::HomeListing;
use crate::types::{ApiEpisode, CatalogConfig, EpisodeSummary};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// Client for the episode content API.
///
/// # Example
///
/// ```ignore
/// use podcaster_catalog::{CatalogClient, CatalogConfig};
///
/// let client = CatalogClient::new(CatalogConfig::new("http://localhost:3333"))?;
/// let listing = client.home_listing().await?;
/// println!("{} latest, {} more", listing.latest.len(), listing.all.len());
/// ```
pub struct CatalogClient {
    http: Client,
    base_url: String,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(CatalogError::InvalidUrl("URL cannot be empty".into()));
        }

        let parsed =
            Url::parse(&config.base_url).map_err(|e| CatalogError::InvalidUrl(e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(CatalogError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Podcaster/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            config,
        })
    }

    /// Get the normalized API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the newest episodes, newest first.
    pub async fn latest_episodes(&self) -> Result<Vec<EpisodeSummary>> {
        let url = format!("{}/episodes", self.base_url);
        debug!(url = %url, limit = self.config.limit, "Fetching latest episodes");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("_limit", self.config.limit.to_string()),
                ("sort", "published_at".to_string()),
                ("order", "desc".to_string()),
            ])
            .send()
            .await
            .map_err(classify)?;

        let episodes: Vec<ApiEpisode> = parse(response, "episode list").await?;
        info!(count = episodes.len(), "Fetched episodes");

        episodes.into_iter().map(EpisodeSummary::from_api).collect()
    }

    /// Fetch a single episode by id.
    pub async fn episode(&self, id: &str) -> Result<EpisodeSummary> {
        let url = format!("{}/episodes/{}", self.base_url, id);
        debug!(url = %url, "Fetching episode");

        let response = self.http.get(&url).send().await.map_err(classify)?;
        let episode: ApiEpisode = parse(response, "episode").await?;

        EpisodeSummary::from_api(episode)
    }

    /// Fetch the latest episodes and split them into the home page sections.
    pub async fn home_listing(&self) -> Result<HomeListing> {
        let episodes = self.latest_episodes().await?;
        Ok(HomeListing::split(episodes, self.config.latest_count))
    }
}

fn classify(e: reqwest::Error) -> CatalogError {
    if e.is_connect() || e.is_timeout() {
        CatalogError::Unreachable(e.to_string())
    } else {
        CatalogError::Request(e)
    }
}

async fn parse<T: DeserializeOwned>(response: Response, what: &str) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        let body = response.text().await?;
        serde_json::from_str(&body)
            .map_err(|e| CatalogError::Parse(format!("Failed to parse {}: {}", what, e)))
    } else {
        let error_text = response.text().await.unwrap_or_default();
        Err(CatalogError::Server {
            status: status.as_u16(),
            message: error_text,
        })
    }
}
