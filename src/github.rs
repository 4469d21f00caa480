use futures::TryFutureExt;
use reqwest::header;
use serde::Deserialize;

use crate::config::Config;

const USER_AGENT: &str = concat!("feedboard/", env!("CARGO_PKG_VERSION"));

/// Read-only client for the contents API of one GitHub repository.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    api: String,
    owner: String,
    repo: String,
    token: String,
}

/// One entry of a directory listing, as returned by the contents API.
#[derive(Debug, Deserialize)]
pub struct DirEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub download_url: Option<String>,
}

impl Client {
    pub fn new(cfg: &Config) -> Self {
        Client {
            http: reqwest::Client::new(),
            api: cfg.github_api.trim_end_matches('/').to_owned(),
            owner: cfg.github_owner.clone(),
            repo: cfg.github_repo.clone(),
            token: cfg.github_token.clone(),
        }
    }

    /// List the markdown files at the root of the repository.
    pub async fn list_markdown(&self) -> Result<Vec<DirEntry>, &'static str> {
        let url = format!("{}/repos/{}/{}/contents/", self.api, self.owner, self.repo);

        let entries: Vec<DirEntry> = self
            .get(&url)
            .and_then(|resp| resp.json())
            .await
            .map_err(|e| {
                log::error!("Could not list {}/{}: {}", self.owner, self.repo, e);
                "Could not list the content repository."
            })?;

        Ok(entries
            .into_iter()
            .filter(|entry| entry.kind == "file" && entry.name.ends_with(".md"))
            .collect())
    }

    /// Fetch the raw text of a previously listed file.
    pub async fn fetch_raw(&self, entry: &DirEntry) -> Result<String, &'static str> {
        let url = entry
            .download_url
            .as_deref()
            .ok_or("File has no download URL.")?;

        self.get(url)
            .and_then(|resp| resp.text())
            .await
            .map_err(|e| {
                log::error!("Could not fetch {}: {}", entry.name, e);
                "Could not fetch file content."
            })
    }

    async fn get(&self, url: &str) -> reqwest::Result<reqwest::Response> {
        self.http
            .get(url)
            .header(header::AUTHORIZATION, format!("token {}", self.token))
            // GitHub rejects requests without a user agent
            .header(header::USER_AGENT, USER_AGENT)
            .send()
            .await
            .and_then(|resp| resp.error_for_status())
    }
}
