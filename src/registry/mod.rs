//! Remote registry access for the KaOS community packages organization.

mod types;

pub use types::{SearchItem, SearchResponse};

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use reqwest::header::ACCEPT;

use crate::package::Candidate;

/// Accept header for the search API.
const SEARCH_ACCEPT: &str = "application/vnd.github.v3.text-match+json";

/// Immutable endpoint configuration.
///
/// Constructed once and passed into the clients that need it; the
/// defaults point at the KaOS community packages organization.
#[derive(Debug, Clone)]
pub struct RegistryConfig {
    /// Base URL of the search API.
    pub api_base: String,
    /// Base URL for raw descriptor documents.
    pub raw_base: String,
    /// Base URL for package git repositories.
    pub clone_base: String,
    /// Organization owning the package repositories.
    pub owner: String,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            api_base: "https://api.github.com".to_string(),
            raw_base: "https://raw.githubusercontent.com/KaOS-Community-Packages".to_string(),
            clone_base: "https://github.com/KaOS-Community-Packages".to_string(),
            owner: "KaOS-Community-Packages".to_string(),
        }
    }
}

impl RegistryConfig {
    /// URL of the raw PKGBUILD for `name` (fixed branch and path).
    pub fn descriptor_url(&self, name: &str) -> String {
        format!("{}/{}/master/PKGBUILD", self.raw_base, name)
    }

    /// Clone URL of the package repository for `name`.
    pub fn clone_url(&self, name: &str) -> String {
        format!("{}/{}.git", self.clone_base, name)
    }
}

/// Trait for registry operations.
///
/// Abstracts the remote side of search so the application layer can be
/// exercised against a mock.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Registry: Send + Sync {
    /// Search community packages matching `term`, in registry order.
    async fn search(&self, term: &str) -> Result<Vec<Candidate>>;

    /// Fetch the raw build descriptor for `name`.
    async fn descriptor(&self, name: &str) -> Result<String>;
}

/// Registry client over the GitHub search and raw-content endpoints.
pub struct GitHubRegistry {
    client: Client,
    config: RegistryConfig,
}

impl GitHubRegistry {
    pub fn new(client: Client, config: RegistryConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl Registry for GitHubRegistry {
    #[tracing::instrument(skip(self))]
    async fn search(&self, term: &str) -> Result<Vec<Candidate>> {
        let url = format!("{}/search/repositories", self.config.api_base);
        let query = format!("{} user:{} fork:true", term, self.config.owner);

        debug!("Searching {} for {}...", url, term);

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, SEARCH_ACCEPT)
            .query(&[("q", query.as_str())])
            .send()
            .await
            .context("Failed to send request to the registry")?
            .error_for_status()
            .context("Registry search failed")?;

        let parsed: SearchResponse = response
            .json()
            .await
            .context("Failed to parse JSON response from the registry")?;

        Ok(parsed
            .items
            .into_iter()
            .map(|item| Candidate {
                name: item.name,
                description: item.description.unwrap_or_default(),
                popularity: item.stargazers_count,
            })
            .collect())
    }

    #[tracing::instrument(skip(self))]
    async fn descriptor(&self, name: &str) -> Result<String> {
        let url = self.config.descriptor_url(name);

        debug!("Fetching descriptor from {}...", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to send descriptor request")?
            .error_for_status()
            .context("Descriptor fetch failed")?;

        response.text().await.context("Failed to read descriptor")
    }
}

/// Builds the HTTP client shared by all registry calls.
pub fn build_http_client() -> Result<Client> {
    Client::builder()
        .user_agent("kcp-cli")
        .build()
        .context("Failed to build HTTP client")
}
