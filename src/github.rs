use crate::config::Config;
use crate::error::{Error, Result};
use reqwest::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde::de::{DeserializeOwned, IgnoredAny};
use std::sync::Arc;

const USER_AGENT: &str = concat!("ttycard/", env!("CARGO_PKG_VERSION"));

/// Account fields as returned by `/users/{login}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Account {
    pub login: String,
    pub followers: u64,
    pub following: u64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub bio: String,
    pub public_repos: u64,
}

/// One entry of `/users/{login}/repos`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub language: String,
    pub commits_url: String,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
}

impl RepositorySummary {
    /// Whether the repository takes part in the statistics at all.
    pub fn is_eligible(&self) -> bool {
        !self.fork && !self.archived
    }
}

#[derive(Deserialize)]
struct StarResponse {
    stars: u64,
}

fn null_as_empty<'de, D>(de: D) -> std::result::Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(de)?.unwrap_or_default())
}

/// Plain REST client for the GitHub API and the star counter service.
///
/// Every call is a single unauthenticated GET. There is no retry: callers
/// decide which failures are fatal.
#[derive(Clone)]
pub struct GithubClient {
    http: Arc<Client>,
    api_base: Arc<str>,
    star_api_base: Arc<str>,
    repo_page_size: u32,
    commit_page_size: u32,
}

impl GithubClient {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http: Arc::new(http),
            api_base: Arc::from(config.api_base.as_str()),
            star_api_base: Arc::from(config.star_api_base.as_str()),
            repo_page_size: config.repo_page_size,
            commit_page_size: config.commit_page_size,
        })
    }

    /// GET `url` and decode the body as `T`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        tracing::debug!(%url, "GET");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| Error::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Status {
                url: url.to_string(),
                status,
            });
        }

        let body = resp.bytes().await.map_err(|source| Error::Transport {
            url: url.to_string(),
            source,
        })?;

        serde_json::from_slice(&body).map_err(|source| Error::Decode {
            url: url.to_string(),
            source,
        })
    }

    pub async fn account(&self, login: &str) -> Result<Account> {
        let url = format!("{}/users/{login}", self.api_base);
        self.get_json(&url).await
    }

    /// Total stars across the user's repositories, from the counter service.
    pub async fn star_total(&self, login: &str) -> Result<u64> {
        let url = format!("{}/user/{login}", self.star_api_base);
        let parsed: StarResponse = self.get_json(&url).await?;
        Ok(parsed.stars)
    }

    /// First page of the user's repositories. One page is assumed to be enough.
    pub async fn repositories(&self, login: &str) -> Result<Vec<RepositorySummary>> {
        let url = format!(
            "{}/users/{login}/repos?per_page={}",
            self.api_base, self.repo_page_size
        );
        self.get_json(&url).await
    }

    /// Number of commits on the first page of a repository's history.
    pub async fn commit_count(&self, repo: &RepositorySummary) -> Result<u64> {
        let url = commits_page_url(&repo.commits_url, self.commit_page_size);
        // Items are skipped, not decoded; only the array length matters.
        let commits: Vec<IgnoredAny> = self.get_json(&url).await?;
        Ok(commits.len() as u64)
    }
}

/// Turn a templated `commits_url` into a single-page listing URL.
pub fn commits_page_url(template: &str, per_page: u32) -> String {
    let base = template.replacen("{/sha}", "", 1);
    format!("{base}?per_page={per_page}")
}
