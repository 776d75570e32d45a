//! Blocking OpenAlex REST client

use crate::doi::normalize_doi;
use crate::error::OpenAlexError;
use crate::work::{short_work_id, Work, WorksPage};
use scholia_domain::{CollaboratorError, MetadataSource, PaperMetadata};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, info};

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openalex.org";

/// OpenAlex accepts at most this many IDs in one `openalex:` filter
pub const BATCH_SIZE: usize = 50;

/// Connection settings for the OpenAlex API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenAlexConfig {
    /// API base URL
    pub base_url: String,

    /// Contact e-mail; requests carrying one use OpenAlex's polite pool
    pub mailto: Option<String>,

    /// Per-request timeout (seconds)
    pub timeout_secs: u64,
}

impl Default for OpenAlexConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            mailto: None,
            timeout_secs: 15,
        }
    }
}

/// OpenAlex-backed [`MetadataSource`]
pub struct OpenAlexClient {
    base_url: String,
    mailto: Option<String>,
    client: reqwest::blocking::Client,
}

impl OpenAlexClient {
    /// Create a client
    pub fn new(config: &OpenAlexConfig) -> Result<Self, OpenAlexError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("scholia/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            mailto: config.mailto.clone().filter(|m| !m.trim().is_empty()),
            client,
        })
    }

    /// Fetch a work by DOI; `None` when OpenAlex does not know it
    pub fn work_by_doi(&self, doi: &str) -> Result<Option<Work>, OpenAlexError> {
        let Some(doi) = normalize_doi(doi) else {
            debug!(doi, "Not a DOI, skipping lookup");
            return Ok(None);
        };
        let url = format!("{}/works/https://doi.org/{}", self.base_url, doi);
        self.get_json(&url, &[])
    }

    /// Best title-search match
    pub fn work_by_title(&self, title: &str) -> Result<Option<Work>, OpenAlexError> {
        // Commas separate filters in OpenAlex syntax
        let cleaned = title.replace(',', " ");
        let filter = format!("title.search:{}", cleaned.trim());
        let page: Option<WorksPage> = self.get_json(
            &format!("{}/works", self.base_url),
            &[("filter", filter), ("per-page", "1".into())],
        )?;
        Ok(page.and_then(|p| p.results.into_iter().next()))
    }

    /// Fetch works by ID in batches of [`BATCH_SIZE`]
    pub fn works_by_ids(&self, work_ids: &[String]) -> Result<Vec<Work>, OpenAlexError> {
        let mut works = Vec::new();
        for chunk in work_ids.chunks(BATCH_SIZE) {
            let ids: Vec<&str> = chunk.iter().map(|id| short_work_id(id)).collect();
            let filter = format!("openalex:{}", ids.join("|"));
            let page: Option<WorksPage> = self.get_json(
                &format!("{}/works", self.base_url),
                &[("filter", filter), ("per-page", BATCH_SIZE.to_string())],
            )?;
            if let Some(page) = page {
                works.extend(page.results);
            }
        }
        debug!(requested = work_ids.len(), found = works.len(), "Fetched works");
        Ok(works)
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        params: &[(&str, String)],
    ) -> Result<Option<T>, OpenAlexError> {
        let mut request = self.client.get(url).query(params);
        if let Some(mailto) = &self.mailto {
            request = request.query(&[("mailto", mailto)]);
        }

        let response = request.send()?;
        let status = response.status();
        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let message = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(OpenAlexError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text()?;
        Ok(Some(serde_json::from_str(&body)?))
    }
}

impl MetadataSource for OpenAlexClient {
    fn resolve_doi(&self, doi: &str) -> Result<Option<PaperMetadata>, CollaboratorError> {
        let work = self.work_by_doi(doi)?;
        if let Some(work) = &work {
            info!(id = %work.id, "Resolved DOI");
        }
        Ok(work.map(Work::into_metadata))
    }

    fn resolve_title(&self, title: &str) -> Result<Option<PaperMetadata>, CollaboratorError> {
        Ok(self.work_by_title(title)?.map(Work::into_metadata))
    }

    fn fetch_authors_for_works(
        &self,
        work_ids: &[String],
    ) -> Result<HashMap<String, Vec<String>>, CollaboratorError> {
        Ok(self
            .works_by_ids(work_ids)?
            .into_iter()
            .map(|work| {
                let authors = work.author_ids();
                (work.id, authors)
            })
            .collect())
    }

    fn fetch_abstracts_for_works(
        &self,
        work_ids: &[String],
    ) -> Result<HashMap<String, String>, CollaboratorError> {
        Ok(self
            .works_by_ids(work_ids)?
            .into_iter()
            .filter_map(|work| {
                let text = work.abstract_text()?;
                Some((work.id, text))
            })
            .collect())
    }
}

/// Metadata source for runs without network access
///
/// Knows no papers, so DOI-based evidence is simply absent.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineSource;

impl MetadataSource for OfflineSource {
    fn resolve_doi(&self, _doi: &str) -> Result<Option<PaperMetadata>, CollaboratorError> {
        Ok(None)
    }

    fn resolve_title(&self, _title: &str) -> Result<Option<PaperMetadata>, CollaboratorError> {
        Ok(None)
    }

    fn fetch_authors_for_works(
        &self,
        _work_ids: &[String],
    ) -> Result<HashMap<String, Vec<String>>, CollaboratorError> {
        Ok(HashMap::new())
    }

    fn fetch_abstracts_for_works(
        &self,
        _work_ids: &[String],
    ) -> Result<HashMap<String, String>, CollaboratorError> {
        Ok(HashMap::new())
    }
}
